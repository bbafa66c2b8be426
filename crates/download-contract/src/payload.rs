use crate::{AcceptedDownload, DownloadRequest, DownloadResult};

pub const SAMPLE_TITLE: &str = "Sample TikTok Video";
pub const SAMPLE_AUTHOR: &str = "@example";

const SAMPLE_DOWNLOAD_URL_BASE: &str = "https://example.com/video";

fn sample_result(url: &str, extension: &str) -> DownloadResult {
    DownloadResult {
        url: url.to_string(),
        title: SAMPLE_TITLE.to_string(),
        author: SAMPLE_AUTHOR.to_string(),
        download_url: format!("{}.{}", SAMPLE_DOWNLOAD_URL_BASE, extension),
    }
}

/// Builds the placeholder answer for a request. Nothing is fetched: only
/// `url` and `format` flow into the result.
pub fn mock_download_result(request: &DownloadRequest) -> DownloadResult {
    sample_result(&request.url, request.format.extension())
}

impl AcceptedDownload {
    pub fn mock_result(&self) -> DownloadResult {
        sample_result(&self.url, &self.format)
    }
}
