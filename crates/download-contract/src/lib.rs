mod payload;
mod validation;

#[cfg(test)]
mod tests;

use serde::{Deserialize, Serialize};
use std::str::FromStr;

pub use payload::*;
pub use validation::*;

#[derive(Eq, PartialEq, Clone, Copy, Hash, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DownloadFormat {
    #[default]
    Mp4,
    Mp3,
}

impl DownloadFormat {
    pub fn extension(&self) -> &'static str {
        match self {
            DownloadFormat::Mp4 => "mp4",
            DownloadFormat::Mp3 => "mp3",
        }
    }
}

impl std::fmt::Display for DownloadFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.extension())
    }
}

#[derive(Debug, PartialEq, thiserror::Error)]
#[error("Unsupported format: {0}")]
pub struct ParseFormatError(pub String);

impl FromStr for DownloadFormat {
    type Err = ParseFormatError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.to_ascii_lowercase().as_str() {
            "mp4" => Ok(DownloadFormat::Mp4),
            "mp3" => Ok(DownloadFormat::Mp3),
            _ => Err(ParseFormatError(value.to_string())),
        }
    }
}

/// What the form sends to the download endpoint.
#[derive(Eq, PartialEq, Clone, Debug, Serialize, Deserialize)]
pub struct DownloadRequest {
    pub url: String,
    pub format: DownloadFormat,
}

/// What the download endpoint answers with on success.
#[derive(Eq, PartialEq, Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DownloadResult {
    pub url: String,
    pub title: String,
    pub author: String,
    pub download_url: String,
}

#[derive(Eq, PartialEq, Clone, Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
        }
    }
}
