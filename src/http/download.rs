use actix_web::error::PayloadError;
use actix_web::http::{Method, StatusCode};
use actix_web::web::{BytesMut, Payload};
use actix_web::{HttpRequest, HttpResponse, ResponseError};
use download_contract::{DownloadResult, ErrorResponse, RawDownloadRequest, ValidationError};
use futures_lite::StreamExt;
use serde_json::Value;
use tracing::{error, info, warn};

const FALLBACK_ERROR_MESSAGE: &str = "Failed to process video";
const MAX_BODY_SIZE: usize = 256 * 1024;

#[derive(Debug, thiserror::Error)]
pub(crate) enum DownloadError {
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error("{0}")]
    MalformedBody(#[from] serde_json::Error),
    #[error("Request body must not be null")]
    NullBody,
    #[error("Request body exceeds {} bytes", MAX_BODY_SIZE)]
    BodyTooLarge,
    #[error("Unable to read request body: {0}")]
    Payload(#[from] PayloadError),
}

impl DownloadError {
    fn message(&self) -> String {
        match self.to_string() {
            message if message.is_empty() => FALLBACK_ERROR_MESSAGE.to_string(),
            message => message,
        }
    }
}

impl ResponseError for DownloadError {
    fn status_code(&self) -> StatusCode {
        match self {
            DownloadError::Validation(_) => StatusCode::BAD_REQUEST,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code()).json(ErrorResponse::new(self.message()))
    }
}

async fn read_body(mut payload: Payload) -> Result<BytesMut, DownloadError> {
    let mut body = BytesMut::new();

    while let Some(chunk) = payload.next().await {
        let chunk = chunk?;

        if body.len() + chunk.len() > MAX_BODY_SIZE {
            return Err(DownloadError::BodyTooLarge);
        }

        body.extend_from_slice(&chunk);
    }

    Ok(body)
}

/// Text of a `url` value, or `None` when it is absent or falsy
/// (`null`, `false`, `0`, `""`). Other values are kept in their JSON
/// text form and left to the pattern check.
fn url_text(value: Option<&Value>) -> Option<String> {
    match value? {
        Value::Null | Value::Bool(false) => None,
        Value::Number(number) if number.as_f64() == Some(0.0) => None,
        Value::String(text) if text.is_empty() => None,
        Value::String(text) => Some(text.clone()),
        other => Some(other.to_string()),
    }
}

fn format_text(value: Option<&Value>) -> Option<String> {
    match value? {
        Value::Null => None,
        Value::String(text) => Some(text.clone()),
        other => Some(other.to_string()),
    }
}

/// Picks `url` and `format` out of any JSON body. Only objects can carry
/// them, so arrays and scalars read as a request without a `url`.
fn raw_request(body: &Value) -> Result<RawDownloadRequest, DownloadError> {
    if body.is_null() {
        return Err(DownloadError::NullBody);
    }

    let fields = body.as_object();

    Ok(RawDownloadRequest {
        url: url_text(fields.and_then(|fields| fields.get("url"))),
        format: format_text(fields.and_then(|fields| fields.get("format"))),
    })
}

fn process_download(body: &[u8]) -> Result<DownloadResult, DownloadError> {
    let body: Value = serde_json::from_slice(body)?;
    let request = raw_request(&body)?.validate()?;

    info!(url = %request.url, format = %request.format, "Accepted download request");

    Ok(request.mock_result())
}

/// Edge handler. Every method except `OPTIONS` is treated as a download
/// request, so a bodiless `GET` fails at JSON parsing.
pub(crate) async fn download(
    request: HttpRequest,
    payload: Payload,
) -> Result<HttpResponse, DownloadError> {
    if request.method() == Method::OPTIONS {
        return Ok(HttpResponse::Ok().finish());
    }

    let outcome = read_body(payload)
        .await
        .and_then(|body| process_download(&body));

    match outcome {
        Ok(result) => Ok(HttpResponse::Ok().json(result)),
        Err(error @ DownloadError::Validation(_)) => {
            warn!(?error, "Rejected download request");
            Err(error)
        }
        Err(error) => {
            error!(?error, "Error processing request");
            Err(error)
        }
    }
}
