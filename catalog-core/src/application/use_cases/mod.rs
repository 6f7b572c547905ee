//! Application services. Each use case owns the ports it needs and exposes a
//! single `execute`.

/// `Debug` for a use case holding `Arc<dyn Port>` fields: prints the port
/// type names.
macro_rules! debug_ports {
    ($ty:ident { $($field:ident),+ $(,)? }) => {
        impl std::fmt::Debug for $ty {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.debug_struct(stringify!($ty))
                    $(.field(
                        stringify!($field),
                        &std::any::type_name_of_val(self.$field.as_ref()),
                    ))+
                    .finish()
            }
        }
    };
}

pub mod cast_member;
pub mod category;
pub mod genre;
mod relations;
pub mod video;

use async_trait::async_trait;

use crate::error::Result;

pub use cast_member::{
    CreateCastMember, DeleteCastMember, ListCastMember, ListCastMembers,
    UpdateCastMember,
};
pub use category::{
    CreateCategory, DeleteCategory, ListCategories, ListCategory,
    UpdateCategory,
};
pub use genre::{CreateGenre, DeleteGenre, ListGenre, ListGenres, UpdateGenre};
pub use video::{
    ChangeEncodedPath, CreateVideo, DeleteVideo, ListVideo, ListVideos,
    UpdateVideo,
};

/// Command / query handler.
#[async_trait]
pub trait UseCase<I, O> {
    async fn execute(&self, input: I) -> Result<O>;
}
