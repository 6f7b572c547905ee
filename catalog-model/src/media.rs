use std::fmt::{self, Display, Formatter};
use std::str::FromStr;

use crate::error::{ModelError, Result};

/// Processing state of an uploaded media file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum MediaStatus {
    Processing = 0,
    Complete = 1,
    Pending = 2,
}

impl MediaStatus {
    pub fn code(self) -> i16 {
        self as i16
    }

    pub fn from_code(code: i16) -> Result<Self> {
        match code {
            0 => Ok(MediaStatus::Processing),
            1 => Ok(MediaStatus::Complete),
            2 => Ok(MediaStatus::Pending),
            other => Err(ModelError::InvalidValue(format!(
                "unknown media status code {other}"
            ))),
        }
    }
}

impl Display for MediaStatus {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            MediaStatus::Processing => write!(f, "processing"),
            MediaStatus::Complete => write!(f, "complete"),
            MediaStatus::Pending => write!(f, "pending"),
        }
    }
}

impl FromStr for MediaStatus {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "processing" | "0" => Ok(MediaStatus::Processing),
            "complete" | "1" => Ok(MediaStatus::Complete),
            "pending" | "2" => Ok(MediaStatus::Pending),
            _ => Err(ModelError::InvalidValue(format!(
                "invalid media status: {s}"
            ))),
        }
    }
}

/// Which media slot of a video a `medias_video` row fills.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum MediaKind {
    Video = 0,
    Trailer = 1,
}

impl MediaKind {
    pub fn code(self) -> i16 {
        self as i16
    }

    pub fn from_code(code: i16) -> Result<Self> {
        match code {
            0 => Ok(MediaKind::Video),
            1 => Ok(MediaKind::Trailer),
            other => Err(ModelError::InvalidValue(format!(
                "unknown media kind code {other}"
            ))),
        }
    }
}

impl Display for MediaKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            MediaKind::Video => write!(f, "video"),
            MediaKind::Trailer => write!(f, "trailer"),
        }
    }
}

impl FromStr for MediaKind {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "video" => Ok(MediaKind::Video),
            "trailer" => Ok(MediaKind::Trailer),
            _ => Err(ModelError::InvalidValue(format!(
                "invalid media kind: {s}"
            ))),
        }
    }
}

/// Media file attached to a video (main feature or trailer).
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Media {
    pub file_path: String,
    pub media_status: MediaStatus,
    pub encoded_path: Option<String>,
}

impl Media {
    pub fn new(file_path: impl Into<String>, media_status: MediaStatus) -> Self {
        Self {
            file_path: file_path.into(),
            media_status,
            encoded_path: None,
        }
    }

    pub fn with_encoded_path(mut self, encoded_path: impl Into<String>) -> Self {
        self.encoded_path = Some(encoded_path.into());
        self
    }

    pub fn is_complete(&self) -> bool {
        self.media_status == MediaStatus::Complete
    }
}
