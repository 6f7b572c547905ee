use std::fmt;
use std::str::FromStr;

use uuid::Uuid;

use crate::error::{ModelError, Result};

macro_rules! catalog_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
        #[cfg_attr(
            feature = "serde",
            derive(serde::Serialize, serde::Deserialize)
        )]
        #[cfg_attr(feature = "serde", serde(transparent))]
        pub struct $name(pub Uuid);

        impl Default for $name {
            fn default() -> Self {
                Self::new()
            }
        }

        impl $name {
            pub fn new() -> Self {
                $name(Uuid::now_v7())
            }

            /// Parse the textual UUID form, rejecting anything else.
            pub fn parse(value: &str) -> Result<Self> {
                Uuid::parse_str(value.trim()).map($name).map_err(|_| {
                    ModelError::InvalidId(format!(
                        "{value} is not a valid UUID"
                    ))
                })
            }

            pub fn as_str(&self) -> String {
                self.0.to_string()
            }

            pub fn as_uuid(&self) -> &Uuid {
                &self.0
            }

            pub fn to_uuid(&self) -> Uuid {
                self.0
            }
        }

        impl AsRef<Uuid> for $name {
            fn as_ref(&self) -> &Uuid {
                &self.0
            }
        }

        impl From<Uuid> for $name {
            fn from(value: Uuid) -> Self {
                $name(value)
            }
        }

        impl FromStr for $name {
            type Err = ModelError;

            fn from_str(s: &str) -> Result<Self> {
                Self::parse(s)
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }
    };
}

catalog_id!(
    /// Identifier of a category row.
    CategoryID
);
catalog_id!(
    /// Identifier of a genre row.
    GenreID
);
catalog_id!(
    /// Identifier of a cast member row.
    CastMemberID
);
catalog_id!(
    /// Identifier of a video row.
    VideoID
);

/// Parse a batch of textual ids, failing on the first invalid entry.
pub fn parse_ids<T: FromStr<Err = ModelError>>(
    values: &[String],
) -> Result<Vec<T>> {
    values.iter().map(|value| value.parse()).collect()
}
