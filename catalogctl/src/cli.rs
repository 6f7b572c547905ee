use std::path::PathBuf;

use catalog_core::database::SortOrder;
use catalog_model::{CastMemberType, MediaKind, Rating};
use clap::{Args, Parser, Subcommand, ValueEnum};

#[derive(Parser, Debug)]
#[command(name = "catalogctl", version)]
#[command(about = "Administer the video catalog: categories, genres, cast members and videos")]
pub struct Cli {
    /// Path to a catalog.toml (overrides CATALOG_CONFIG_PATH)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Load environment variables from this file instead of ./.env
    #[arg(long, global = true)]
    pub env_file: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Apply database migrations and exit
    Migrate,
    /// Manage categories
    #[command(subcommand)]
    Category(CategoryCommand),
    /// Manage genres
    #[command(subcommand)]
    Genre(GenreCommand),
    /// Manage cast members
    #[command(subcommand)]
    CastMember(CastMemberCommand),
    /// Manage videos
    #[command(subcommand)]
    Video(VideoCommand),
}

#[derive(Debug, Args)]
pub struct IdArg {
    /// Identifier (UUID)
    pub id: String,
}

#[derive(Debug, Args)]
pub struct ListArgs {
    /// Case-insensitive substring matched against the name or title
    #[arg(long)]
    pub filter: Option<String>,
    #[arg(long, value_enum, default_value_t = OrderArg::Desc)]
    pub order: OrderArg,
    #[arg(long, default_value_t = 1)]
    pub page: u32,
    /// Defaults to the configured page size
    #[arg(long)]
    pub per_page: Option<u32>,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum OrderArg {
    Asc,
    Desc,
}

impl From<OrderArg> for SortOrder {
    fn from(order: OrderArg) -> Self {
        match order {
            OrderArg::Asc => SortOrder::Asc,
            OrderArg::Desc => SortOrder::Desc,
        }
    }
}

#[derive(Debug, Subcommand)]
pub enum CategoryCommand {
    /// Create a category
    Create {
        name: String,
        #[arg(long)]
        description: Option<String>,
        /// Create the category disabled
        #[arg(long)]
        inactive: bool,
    },
    /// Show one category
    Show(IdArg),
    /// List categories
    List(ListArgs),
    /// Rename a category and optionally change its description or state
    Update {
        id: String,
        #[arg(long)]
        name: String,
        #[arg(long)]
        description: Option<String>,
        #[arg(long)]
        active: Option<bool>,
    },
    /// Soft-delete a category
    Delete(IdArg),
}

#[derive(Debug, Subcommand)]
pub enum GenreCommand {
    /// Create a genre
    Create {
        name: String,
        /// Category id to link (repeatable)
        #[arg(long = "category")]
        categories: Vec<String>,
        #[arg(long)]
        inactive: bool,
    },
    Show(IdArg),
    List(ListArgs),
    /// Rename a genre and replace its categories
    Update {
        id: String,
        #[arg(long)]
        name: String,
        #[arg(long = "category")]
        categories: Vec<String>,
    },
    Delete(IdArg),
}

#[derive(Debug, Subcommand)]
pub enum CastMemberCommand {
    /// Create a cast member
    Create {
        name: String,
        /// director | actor (or 1 | 2)
        #[arg(long = "type")]
        kind: CastMemberType,
    },
    Show(IdArg),
    List(ListArgs),
    /// Rename a cast member
    Update {
        id: String,
        #[arg(long)]
        name: String,
    },
    Delete(IdArg),
}

#[derive(Debug, Args)]
pub struct VideoArgs {
    #[arg(long)]
    pub title: String,
    #[arg(long)]
    pub description: String,
    #[arg(long)]
    pub year_launched: i32,
    /// Duration in minutes
    #[arg(long)]
    pub duration: i32,
    #[arg(long)]
    pub opened: bool,
    /// ER, L, 10, 12, 14, 16 or 18
    #[arg(long)]
    pub rating: Rating,
    #[arg(long = "category")]
    pub categories: Vec<String>,
    #[arg(long = "genre")]
    pub genres: Vec<String>,
    #[arg(long = "cast-member")]
    pub cast_members: Vec<String>,
}

#[derive(Debug, Subcommand)]
pub enum VideoCommand {
    /// Create a video
    Create(VideoArgs),
    Show(IdArg),
    List(ListArgs),
    /// Replace a video's attributes and relations
    Update {
        id: String,
        #[command(flatten)]
        video: VideoArgs,
    },
    Delete(IdArg),
    /// Record the encoded output of an uploaded video or trailer
    EncodedPath {
        id: String,
        /// video | trailer
        #[arg(long)]
        kind: MediaKind,
        encoded_path: String,
    },
}
