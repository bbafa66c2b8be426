use crate::form::{render_page, FormState};
use crate::services::DownloadClient;
use actix_web::http::header::ContentType;
use actix_web::web::{Data, Form};
use actix_web::HttpResponse;
use serde::Deserialize;
use std::sync::Arc;

#[derive(Debug, Deserialize)]
pub(crate) struct FormSubmission {
    #[serde(default)]
    url: String,
    #[serde(default)]
    format: Option<String>,
}

fn html_page(state: &FormState) -> HttpResponse {
    HttpResponse::Ok()
        .content_type(ContentType::html())
        .body(render_page(state))
}

pub(crate) async fn show_form() -> HttpResponse {
    html_page(&FormState::default())
}

pub(crate) async fn submit_form(
    download_client: Data<Arc<dyn DownloadClient>>,
    submission: Form<FormSubmission>,
) -> HttpResponse {
    let FormSubmission { url, format } = submission.into_inner();
    let format = format
        .and_then(|format| format.parse().ok())
        .unwrap_or_default();
    let mut state = FormState::new(url, format);

    state.submit(download_client.get_ref().as_ref()).await;

    html_page(&state)
}
