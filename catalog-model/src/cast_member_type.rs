use std::fmt::{self, Display, Formatter};
use std::str::FromStr;

use crate::error::{ModelError, Result};

/// Role a cast member plays in a production.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum CastMemberType {
    Director = 1,
    Actor = 2,
}

impl CastMemberType {
    /// Integer code stored in the `cast_members.type` column.
    pub fn code(self) -> i16 {
        self as i16
    }

    pub fn from_code(code: i16) -> Result<Self> {
        match code {
            1 => Ok(CastMemberType::Director),
            2 => Ok(CastMemberType::Actor),
            other => Err(ModelError::InvalidValue(format!(
                "unknown cast member type code {other}"
            ))),
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            CastMemberType::Director => "director",
            CastMemberType::Actor => "actor",
        }
    }
}

impl Display for CastMemberType {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            CastMemberType::Director => write!(f, "Director"),
            CastMemberType::Actor => write!(f, "Actor"),
        }
    }
}

impl FromStr for CastMemberType {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "director" | "1" => Ok(CastMemberType::Director),
            "actor" | "2" => Ok(CastMemberType::Actor),
            _ => Err(ModelError::InvalidValue(format!(
                "invalid cast member type: {s}"
            ))),
        }
    }
}

/// Accepts the role name (`"actor"`) or its code, as a number or a string.
#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for CastMemberType {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        struct TypeVisitor;

        impl serde::de::Visitor<'_> for TypeVisitor {
            type Value = CastMemberType;

            fn expecting(&self, f: &mut Formatter<'_>) -> fmt::Result {
                f.write_str("a cast member type name or code")
            }

            fn visit_str<E: serde::de::Error>(
                self,
                value: &str,
            ) -> std::result::Result<Self::Value, E> {
                value.parse().map_err(E::custom)
            }

            fn visit_i64<E: serde::de::Error>(
                self,
                value: i64,
            ) -> std::result::Result<Self::Value, E> {
                i16::try_from(value)
                    .ok()
                    .and_then(|code| CastMemberType::from_code(code).ok())
                    .ok_or_else(|| {
                        E::custom(format!("unknown cast member type code {value}"))
                    })
            }

            fn visit_u64<E: serde::de::Error>(
                self,
                value: u64,
            ) -> std::result::Result<Self::Value, E> {
                match i64::try_from(value) {
                    Ok(value) => self.visit_i64(value),
                    Err(_) => Err(E::custom(format!(
                        "unknown cast member type code {value}"
                    ))),
                }
            }
        }

        deserializer.deserialize_any(TypeVisitor)
    }
}
