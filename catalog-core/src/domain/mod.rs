//! Domain layer: self-validating entities and the validation toolkit they
//! share.

pub mod entities;
pub mod notification;
pub mod validation;
pub mod validator;

pub use entities::{CastMember, Category, Genre, Video, VideoFields};
pub use notification::{Notification, NotificationError};
pub use validation::DomainValidation;
pub use validator::{EntityValidator, ValidatorFactory, VideoValidator};
