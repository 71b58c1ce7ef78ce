use serde::Deserialize;
use std::fmt;
use std::path::Path;
use std::str::FromStr;
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ImageFormat {
    #[default]
    Png,
    Svg,
}

#[derive(Debug, Error, PartialEq, Eq, Clone)]
#[error("Unknown image format '{0}'. Expected 'png' or 'svg'")]
pub struct ParseImageFormatError(pub String);

impl ImageFormat {
    /// Picks the backend for a file path; anything other than `.svg` is drawn as a bitmap.
    pub fn for_path(path: &Path) -> Self {
        match path
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_ascii_lowercase())
            .as_deref()
        {
            Some("svg") => ImageFormat::Svg,
            _ => ImageFormat::Png,
        }
    }
}

impl FromStr for ImageFormat {
    type Err = ParseImageFormatError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "png" => Ok(ImageFormat::Png),
            "svg" => Ok(ImageFormat::Svg),
            _ => Err(ParseImageFormatError(s.to_string())),
        }
    }
}

impl fmt::Display for ImageFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ImageFormat::Png => write!(f, "png"),
            ImageFormat::Svg => write!(f, "svg"),
        }
    }
}
