use crate::error::{ModelError, Result};

/// Slot an image occupies on a video page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum ImageKind {
    Banner = 0,
    Thumb = 1,
    ThumbHalf = 2,
}

impl ImageKind {
    pub fn code(self) -> i16 {
        self as i16
    }

    pub fn from_code(code: i16) -> Result<Self> {
        match code {
            0 => Ok(ImageKind::Banner),
            1 => Ok(ImageKind::Thumb),
            2 => Ok(ImageKind::ThumbHalf),
            other => Err(ModelError::InvalidValue(format!(
                "unknown image kind code {other}"
            ))),
        }
    }
}

/// Stored image reference.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Image {
    path: String,
}

impl Image {
    pub fn new(path: impl Into<String>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &str {
        &self.path
    }
}
