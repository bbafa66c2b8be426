use crate::services::{DownloadClient, DownloadClientError};
use download_contract::{looks_like_tiktok_url, DownloadFormat, DownloadRequest, DownloadResult};
use tracing::error;

/// Shown for every failed submission, whatever went wrong.
pub(crate) const GENERIC_ERROR_MESSAGE: &str = "リクエストの処理中にエラーが発生しました";

#[derive(Clone, PartialEq, Debug, Default)]
pub(crate) struct FormState {
    pub(crate) url: String,
    pub(crate) format: DownloadFormat,
    pub(crate) loading: bool,
    pub(crate) error: Option<String>,
    pub(crate) result: Option<DownloadResult>,
}

impl FormState {
    pub(crate) fn new(url: String, format: DownloadFormat) -> Self {
        Self {
            url,
            format,
            ..Self::default()
        }
    }

    pub(crate) fn can_submit(&self) -> bool {
        !self.loading && looks_like_tiktok_url(&self.url)
    }

    /// Moves the form into the loading state and hands back the request to
    /// send, or `None` if the form may not be submitted right now.
    pub(crate) fn begin_submit(&mut self) -> Option<DownloadRequest> {
        if !self.can_submit() {
            return None;
        }

        self.loading = true;
        self.error = None;
        self.result = None;

        Some(DownloadRequest {
            url: self.url.clone(),
            format: self.format,
        })
    }

    pub(crate) fn finish_submit(&mut self, outcome: Result<DownloadResult, DownloadClientError>) {
        self.loading = false;

        match outcome {
            Ok(result) => {
                self.result = Some(result);
            }
            Err(error) => {
                error!(?error, url = %self.url, "Download request failed");
                self.error = Some(GENERIC_ERROR_MESSAGE.to_string());
            }
        }
    }

    /// Runs one submit cycle against `client`. Does nothing if the form
    /// may not be submitted.
    pub(crate) async fn submit(&mut self, client: &dyn DownloadClient) {
        let Some(request) = self.begin_submit() else {
            return;
        };

        let outcome = client.request_download(&request).await;

        self.finish_submit(outcome);
    }
}
