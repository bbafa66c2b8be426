use crate::DownloadFormat;
use once_cell::sync::Lazy;
use regex::Regex;

const TIKTOK_DOMAIN: &str = "tiktok.com";

static TIKTOK_URL_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)^https?://((vm|vt|www)\.)?tiktok\.com/")
        .expect("TikTok URL pattern is a valid regex")
});

#[derive(Debug, PartialEq, thiserror::Error)]
pub enum ValidationError {
    #[error("URL is required")]
    UrlRequired,
    #[error("Invalid TikTok URL")]
    InvalidTikTokUrl,
}

/// Loose check used by the form before it lets the user submit.
///
/// Any string mentioning the domain passes, so it accepts URLs the
/// endpoint later rejects with [`ValidationError::InvalidTikTokUrl`].
pub fn looks_like_tiktok_url(url: &str) -> bool {
    url.contains(TIKTOK_DOMAIN)
}

/// Strict check enforced by the download endpoint.
pub fn is_valid_tiktok_url(url: &str) -> bool {
    TIKTOK_URL_REGEX.is_match(url)
}

/// Request fields as text, before validation.
///
/// `url` is `None` when the body carried no usable value for it (absent,
/// `null`, `false`, `0` or empty). `format` is `None` when absent or `null`.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct RawDownloadRequest {
    pub url: Option<String>,
    pub format: Option<String>,
}

/// A request that passed validation. `format` is whatever extension the
/// caller sent, so it is not limited to [`DownloadFormat`] values.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AcceptedDownload {
    pub url: String,
    pub format: String,
}

impl RawDownloadRequest {
    pub fn validate(self) -> Result<AcceptedDownload, ValidationError> {
        let url = match self.url {
            Some(url) if !url.is_empty() => url,
            _ => return Err(ValidationError::UrlRequired),
        };

        if !is_valid_tiktok_url(&url) {
            return Err(ValidationError::InvalidTikTokUrl);
        }

        let format = self
            .format
            .unwrap_or_else(|| DownloadFormat::default().extension().to_string());

        Ok(AcceptedDownload { url, format })
    }
}
