mod download;
mod form;
mod health;

pub(crate) use download::download;
pub(crate) use form::{show_form, submit_form};
pub(crate) use health::liveness_check;

use actix_web::middleware::DefaultHeaders;
use actix_web::web;

pub(crate) fn cors_headers() -> DefaultHeaders {
    DefaultHeaders::new()
        .add(("Access-Control-Allow-Origin", "*"))
        .add(("Access-Control-Allow-Methods", "POST, OPTIONS"))
        .add(("Access-Control-Allow-Headers", "Content-Type, Authorization"))
}

pub(crate) fn configure(config: &mut web::ServiceConfig) {
    config
        .service(
            web::resource("/")
                .wrap(cors_headers())
                .route(web::route().to(download)),
        )
        .service(
            web::resource("/form")
                .route(web::get().to(show_form))
                .route(web::post().to(submit_form)),
        )
        .service(web::resource("/health").route(web::get().to(liveness_check)));
}
