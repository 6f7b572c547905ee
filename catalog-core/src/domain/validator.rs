use super::entities::Video;
use super::notification::Notification;
use super::validation::{DEFAULT_MAX_LENGTH, DEFAULT_MIN_LENGTH};

/// Checks an entity and reports every failed rule into `notification`.
pub trait EntityValidator<E>: Send + Sync {
    fn validate(&self, entity: &E, notification: &mut Notification);
}

/// Rule set for videos:
/// - `title`: required, 3..=255 characters
/// - `description`: required, 3..=255 characters
/// - `year_launched`, `duration`: zero or greater
///
/// Lengths count characters as stored, surrounding whitespace included.
#[derive(Debug, Clone, Copy, Default)]
pub struct VideoValidator;

impl VideoValidator {
    pub const CONTEXT: &'static str = "video";

    fn check_text(field: &str, value: &str, notification: &mut Notification) {
        let length = value.chars().count();
        if value.trim().is_empty() {
            notification
                .add_error(Self::CONTEXT, format!("The {field} field is required."));
        } else if length < DEFAULT_MIN_LENGTH {
            notification.add_error(
                Self::CONTEXT,
                format!(
                    "The {field} field must be at least {DEFAULT_MIN_LENGTH} characters."
                ),
            );
        } else if length > DEFAULT_MAX_LENGTH {
            notification.add_error(
                Self::CONTEXT,
                format!(
                    "The {field} field must not be greater than {DEFAULT_MAX_LENGTH} characters."
                ),
            );
        }
    }

    fn check_non_negative(
        field: &str,
        value: i32,
        notification: &mut Notification,
    ) {
        if value < 0 {
            notification.add_error(
                Self::CONTEXT,
                format!("The {field} field must be zero or greater."),
            );
        }
    }
}

impl EntityValidator<Video> for VideoValidator {
    fn validate(&self, entity: &Video, notification: &mut Notification) {
        Self::check_text("title", entity.title(), notification);
        Self::check_text("description", entity.description(), notification);
        Self::check_non_negative(
            "year_launched",
            entity.year_launched(),
            notification,
        );
        Self::check_non_negative("duration", entity.duration(), notification);
    }
}

#[derive(Debug, Clone, Copy)]
pub struct ValidatorFactory;

impl ValidatorFactory {
    pub fn video() -> VideoValidator {
        VideoValidator
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::VideoFields;
    use crate::error::CatalogError;
    use catalog_model::Rating;

    fn fields() -> VideoFields {
        VideoFields {
            title: "Title".into(),
            description: "Description".into(),
            year_launched: 2026,
            duration: 90,
            opened: false,
            rating: Rating::L,
        }
    }

    fn rejection(fields: VideoFields) -> String {
        match Video::new(fields) {
            Err(CatalogError::Notification(message)) => message,
            other => panic!("expected notification error, got {other:?}"),
        }
    }

    #[test]
    fn padded_title_counts_whitespace_toward_max() {
        let message = rejection(VideoFields {
            title: format!("  {}", "a".repeat(254)),
            ..fields()
        });
        assert_eq!(
            message,
            "video: The title field must not be greater than 255 characters.,"
        );

        let video = Video::new(VideoFields {
            title: format!(" {}", "a".repeat(254)),
            ..fields()
        })
        .unwrap();
        assert_eq!(video.title().chars().count(), 255);
    }

    #[test]
    fn blank_description_is_required() {
        let message = rejection(VideoFields {
            description: "   ".into(),
            ..fields()
        });
        assert_eq!(message, "video: The description field is required.,");
    }

    #[test]
    fn over_long_texts_are_rejected_in_order() {
        let message = rejection(VideoFields {
            title: "t".repeat(256),
            description: "d".repeat(256),
            ..fields()
        });
        assert_eq!(
            message,
            "video: The title field must not be greater than 255 characters.,\
             video: The description field must not be greater than 255 characters.,"
        );
    }

    #[test]
    fn negative_numbers_are_rejected() {
        let message = rejection(VideoFields {
            year_launched: -1,
            duration: -5,
            ..fields()
        });
        assert_eq!(
            message,
            "video: The year_launched field must be zero or greater.,\
             video: The duration field must be zero or greater.,"
        );
    }

    #[test]
    fn zero_is_accepted() {
        let video = Video::new(VideoFields {
            year_launched: 0,
            duration: 0,
            ..fields()
        })
        .unwrap();
        assert_eq!(video.duration(), 0);
    }

    #[test]
    fn every_broken_rule_is_reported() {
        let mut notification = Notification::new();
        let video = Video::new(fields()).unwrap();
        ValidatorFactory::video().validate(&video, &mut notification);
        assert!(!notification.has_errors());

        let message = rejection(VideoFields {
            title: String::new(),
            description: "ab".into(),
            year_launched: 2026,
            duration: -1,
            ..fields()
        });
        assert_eq!(
            message,
            "video: The title field is required.,\
             video: The description field must be at least 3 characters.,\
             video: The duration field must be zero or greater.,"
        );
    }
}
