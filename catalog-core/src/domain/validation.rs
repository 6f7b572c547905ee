//! Field-level guards shared by the entities.
//!
//! Each guard returns [`CatalogError::EntityValidation`] carrying either the
//! caller's message or a default describing the broken rule.

use crate::error::{CatalogError, Result};

pub const DEFAULT_MAX_LENGTH: usize = 255;
pub const DEFAULT_MIN_LENGTH: usize = 3;

#[derive(Debug, Clone, Copy)]
pub struct DomainValidation;

impl DomainValidation {
    pub fn not_null(value: &str, message: Option<&str>) -> Result<()> {
        if value.trim().is_empty() {
            return Err(CatalogError::EntityValidation(
                message.unwrap_or("Should not be empty or null").to_string(),
            ));
        }
        Ok(())
    }

    pub fn str_max_length(
        value: &str,
        length: usize,
        message: Option<&str>,
    ) -> Result<()> {
        if value.chars().count() > length {
            return Err(CatalogError::EntityValidation(
                message.map(str::to_string).unwrap_or_else(|| {
                    format!(
                        "The value must not be greater than {length} characters"
                    )
                }),
            ));
        }
        Ok(())
    }

    pub fn str_min_length(
        value: &str,
        length: usize,
        message: Option<&str>,
    ) -> Result<()> {
        if value.chars().count() < length {
            return Err(CatalogError::EntityValidation(
                message.map(str::to_string).unwrap_or_else(|| {
                    format!("The value must be at least {length} characters")
                }),
            ));
        }
        Ok(())
    }

    /// Optional text: absent or empty passes, otherwise capped at `length`.
    pub fn str_can_null_and_max_length(
        value: Option<&str>,
        length: usize,
        message: Option<&str>,
    ) -> Result<()> {
        match value {
            Some(value) if !value.is_empty() => {
                Self::str_max_length(value, length, message)
            }
            _ => Ok(()),
        }
    }

    /// Default name rule used by categories, genres and cast members.
    pub fn name(value: &str) -> Result<()> {
        Self::not_null(value, None)?;
        Self::str_min_length(value, DEFAULT_MIN_LENGTH, None)?;
        Self::str_max_length(value, DEFAULT_MAX_LENGTH, None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn message(result: Result<()>) -> String {
        match result {
            Err(CatalogError::EntityValidation(msg)) => msg,
            other => panic!("expected validation error, got {other:?}"),
        }
    }

    #[test]
    fn not_null_rejects_blank() {
        assert!(DomainValidation::not_null("value", None).is_ok());
        assert_eq!(
            message(DomainValidation::not_null("", None)),
            "Should not be empty or null"
        );
        assert_eq!(
            message(DomainValidation::not_null("   ", Some("custom"))),
            "custom"
        );
    }

    #[test]
    fn max_length_counts_chars() {
        assert!(DomainValidation::str_max_length("ção", 3, None).is_ok());
        assert_eq!(
            message(DomainValidation::str_max_length("abcd", 3, None)),
            "The value must not be greater than 3 characters"
        );
    }

    #[test]
    fn min_length() {
        assert!(DomainValidation::str_min_length("abc", 3, None).is_ok());
        assert_eq!(
            message(DomainValidation::str_min_length("ab", 3, None)),
            "The value must be at least 3 characters"
        );
    }

    #[test]
    fn nullable_max_length() {
        assert!(
            DomainValidation::str_can_null_and_max_length(None, 3, None)
                .is_ok()
        );
        assert!(
            DomainValidation::str_can_null_and_max_length(Some(""), 3, None)
                .is_ok()
        );
        assert!(
            DomainValidation::str_can_null_and_max_length(
                Some("abcd"),
                3,
                None
            )
            .is_err()
        );
    }

    #[test]
    fn name_rule_bounds() {
        assert!(DomainValidation::name("abc").is_ok());
        assert!(DomainValidation::name("ab").is_err());
        assert!(DomainValidation::name(&"a".repeat(256)).is_err());
        assert!(DomainValidation::name(&"a".repeat(255)).is_ok());
    }
}
