use actix_web::{HttpResponse, Responder};

pub(crate) async fn liveness_check() -> impl Responder {
    HttpResponse::Ok().finish()
}

#[cfg(test)]
mod tests {
    use crate::http::configure;
    use actix_web::http::StatusCode;
    use actix_web::{test, App};

    #[actix_rt::test]
    async fn test_liveness_check() {
        let app = test::init_service(App::new().configure(configure)).await;
        let request = test::TestRequest::get().uri("/health").to_request();

        let response = test::call_service(&app, request).await;

        assert_eq!(StatusCode::OK, response.status());
    }
}
