use anyhow::Context;
use catalog_config::PaginationConfig;
use catalog_core::CatalogRepositories;
use catalog_core::application::UseCase;
use catalog_core::application::dto::{
    ChangeEncodedPathInput, CreateCastMemberInput, CreateCategoryInput,
    CreateGenreInput, CreateVideoInput, IdInput, ListInput,
    UpdateCastMemberInput, UpdateCategoryInput, UpdateGenreInput,
    UpdateVideoInput, VideoFieldsInput,
};
use serde::Serialize;

use crate::cli::{
    CastMemberCommand, CategoryCommand, GenreCommand, ListArgs, VideoArgs,
    VideoCommand,
};

fn print_json<T: Serialize>(value: &T) -> anyhow::Result<()> {
    let rendered = serde_json::to_string_pretty(value)
        .context("failed to render output")?;
    println!("{rendered}");
    Ok(())
}

fn list_input(args: ListArgs, pagination: &PaginationConfig) -> ListInput {
    ListInput {
        filter: args.filter,
        order: args.order.into(),
        page: args.page.max(1),
        per_page: pagination.per_page(args.per_page),
    }
}

pub async fn category(
    repos: &CatalogRepositories,
    pagination: &PaginationConfig,
    command: CategoryCommand,
) -> anyhow::Result<()> {
    match command {
        CategoryCommand::Create {
            name,
            description,
            inactive,
        } => {
            let input = CreateCategoryInput {
                name,
                description,
                is_active: !inactive,
            };
            print_json(&repos.create_category().execute(input).await?)
        }
        CategoryCommand::Show(arg) => print_json(
            &repos.list_category().execute(IdInput::new(arg.id)).await?,
        ),
        CategoryCommand::List(args) => print_json(
            &repos
                .list_categories()
                .execute(list_input(args, pagination))
                .await?,
        ),
        CategoryCommand::Update {
            id,
            name,
            description,
            active,
        } => {
            let input = UpdateCategoryInput {
                id,
                name,
                description,
                is_active: active,
            };
            print_json(&repos.update_category().execute(input).await?)
        }
        CategoryCommand::Delete(arg) => print_json(
            &repos.delete_category().execute(IdInput::new(arg.id)).await?,
        ),
    }
}

pub async fn genre(
    repos: &CatalogRepositories,
    pagination: &PaginationConfig,
    command: GenreCommand,
) -> anyhow::Result<()> {
    match command {
        GenreCommand::Create {
            name,
            categories,
            inactive,
        } => {
            let input = CreateGenreInput {
                name,
                categories_id: categories,
                is_active: !inactive,
            };
            print_json(&repos.create_genre().execute(input).await?)
        }
        GenreCommand::Show(arg) => {
            print_json(&repos.list_genre().execute(IdInput::new(arg.id)).await?)
        }
        GenreCommand::List(args) => print_json(
            &repos
                .list_genres()
                .execute(list_input(args, pagination))
                .await?,
        ),
        GenreCommand::Update {
            id,
            name,
            categories,
        } => {
            let input = UpdateGenreInput {
                id,
                name,
                categories_id: categories,
            };
            print_json(&repos.update_genre().execute(input).await?)
        }
        GenreCommand::Delete(arg) => print_json(
            &repos.delete_genre().execute(IdInput::new(arg.id)).await?,
        ),
    }
}

pub async fn cast_member(
    repos: &CatalogRepositories,
    pagination: &PaginationConfig,
    command: CastMemberCommand,
) -> anyhow::Result<()> {
    match command {
        CastMemberCommand::Create { name, kind } => print_json(
            &repos
                .create_cast_member()
                .execute(CreateCastMemberInput { name, kind })
                .await?,
        ),
        CastMemberCommand::Show(arg) => print_json(
            &repos
                .list_cast_member()
                .execute(IdInput::new(arg.id))
                .await?,
        ),
        CastMemberCommand::List(args) => print_json(
            &repos
                .list_cast_members()
                .execute(list_input(args, pagination))
                .await?,
        ),
        CastMemberCommand::Update { id, name } => print_json(
            &repos
                .update_cast_member()
                .execute(UpdateCastMemberInput { id, name })
                .await?,
        ),
        CastMemberCommand::Delete(arg) => print_json(
            &repos
                .delete_cast_member()
                .execute(IdInput::new(arg.id))
                .await?,
        ),
    }
}

fn video_fields(args: &VideoArgs) -> VideoFieldsInput {
    VideoFieldsInput {
        title: args.title.clone(),
        description: args.description.clone(),
        year_launched: args.year_launched,
        duration: args.duration,
        opened: args.opened,
        rating: args.rating,
    }
}

pub async fn video(
    repos: &CatalogRepositories,
    pagination: &PaginationConfig,
    command: VideoCommand,
) -> anyhow::Result<()> {
    match command {
        VideoCommand::Create(args) => {
            let input = CreateVideoInput {
                fields: video_fields(&args),
                categories: args.categories,
                genres: args.genres,
                cast_members: args.cast_members,
            };
            print_json(&repos.create_video().execute(input).await?)
        }
        VideoCommand::Show(arg) => {
            print_json(&repos.list_video().execute(IdInput::new(arg.id)).await?)
        }
        VideoCommand::List(args) => print_json(
            &repos
                .list_videos()
                .execute(list_input(args, pagination))
                .await?,
        ),
        VideoCommand::Update { id, video } => {
            let input = UpdateVideoInput {
                id,
                fields: video_fields(&video),
                categories: video.categories,
                genres: video.genres,
                cast_members: video.cast_members,
            };
            print_json(&repos.update_video().execute(input).await?)
        }
        VideoCommand::Delete(arg) => print_json(
            &repos.delete_video().execute(IdInput::new(arg.id)).await?,
        ),
        VideoCommand::EncodedPath {
            id,
            kind,
            encoded_path,
        } => {
            let input = ChangeEncodedPathInput {
                id,
                encoded_path,
                kind,
            };
            print_json(&repos.change_encoded_path().execute(input).await?)
        }
    }
}
