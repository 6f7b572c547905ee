use std::fmt::{self, Display, Formatter};
use std::str::FromStr;

use crate::error::{ModelError, Result};

/// Content advisory rating of a video.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Rating {
    #[cfg_attr(feature = "serde", serde(rename = "ER"))]
    Er,
    #[cfg_attr(feature = "serde", serde(rename = "L"))]
    L,
    #[cfg_attr(feature = "serde", serde(rename = "10"))]
    Rate10,
    #[cfg_attr(feature = "serde", serde(rename = "12"))]
    Rate12,
    #[cfg_attr(feature = "serde", serde(rename = "14"))]
    Rate14,
    #[cfg_attr(feature = "serde", serde(rename = "16"))]
    Rate16,
    #[cfg_attr(feature = "serde", serde(rename = "18"))]
    Rate18,
}

impl Rating {
    fn all() -> &'static [Rating] {
        &[
            Rating::Er,
            Rating::L,
            Rating::Rate10,
            Rating::Rate12,
            Rating::Rate14,
            Rating::Rate16,
            Rating::Rate18,
        ]
    }

    /// Value stored in the `videos.rating` column.
    pub fn as_str(self) -> &'static str {
        match self {
            Rating::Er => "ER",
            Rating::L => "L",
            Rating::Rate10 => "10",
            Rating::Rate12 => "12",
            Rating::Rate14 => "14",
            Rating::Rate16 => "16",
            Rating::Rate18 => "18",
        }
    }
}

impl Display for Rating {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Rating {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self> {
        let value = s.trim();
        Rating::all()
            .iter()
            .copied()
            .find(|rating| rating.as_str().eq_ignore_ascii_case(value))
            .ok_or_else(|| {
                ModelError::InvalidValue(format!("invalid rating: {s}"))
            })
    }
}
