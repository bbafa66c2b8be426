use async_trait::async_trait;
use download_contract::{DownloadRequest, DownloadResult, ErrorResponse};

#[derive(Debug, thiserror::Error)]
pub(crate) enum DownloadClientError {
    #[error("Unable to perform request to download endpoint: {0}")]
    RequestError(#[from] reqwest::Error),
    #[error("Download endpoint responded with status {status}: {message}")]
    Rejected { status: u16, message: String },
}

#[async_trait]
pub(crate) trait DownloadClient: Send + Sync {
    async fn request_download(
        &self,
        request: &DownloadRequest,
    ) -> Result<DownloadResult, DownloadClientError>;
}

pub(crate) struct HttpDownloadClient {
    client: reqwest::Client,
    endpoint: String,
}

impl HttpDownloadClient {
    pub(crate) fn create(endpoint: String) -> Self {
        Self {
            client: reqwest::Client::new(),
            endpoint,
        }
    }
}

#[async_trait]
impl DownloadClient for HttpDownloadClient {
    async fn request_download(
        &self,
        request: &DownloadRequest,
    ) -> Result<DownloadResult, DownloadClientError> {
        let response = self
            .client
            .post(&self.endpoint)
            .json(request)
            .send()
            .await?;
        let status = response.status();

        if !status.is_success() {
            let message = match response.json::<ErrorResponse>().await {
                Ok(ErrorResponse { error }) => error,
                Err(_) => status.canonical_reason().unwrap_or_default().to_string(),
            };

            return Err(DownloadClientError::Rejected {
                status: status.as_u16(),
                message,
            });
        }

        Ok(response.json::<DownloadResult>().await?)
    }
}
