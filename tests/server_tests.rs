#[cfg(test)]
pub mod server_tests {
    use actix_web::{http::StatusCode, test};
    use leptos::config::LeptosOptions;

    use hudbox_site::web::site_app;
    use hudbox_site::web::middleware::SECURITY_HEADERS;

    fn options() -> LeptosOptions {
        LeptosOptions::builder().output_name("hudbox-site").build()
    }

    async fn get(uri: &str) -> (StatusCode, String, bool) {
        let app = test::init_service(site_app(options())).await;
        let resp = test::call_service(&app, test::TestRequest::get().uri(uri).to_request()).await;

        let status = resp.status();
        let secured = SECURITY_HEADERS
            .iter()
            .all(|&(name, _)| resp.headers().contains_key(name));
        let body = test::read_body(resp).await;
        (status, String::from_utf8_lossy(&body).into_owned(), secured)
    }

    #[actix_web::test]
    async fn test_landing_route_success() {
        let (status, body, secured) = get("/").await;

        assert_eq!(status, StatusCode::OK);
        assert!(body.contains("hero__title"));
        assert!(body.contains("Frameless GTK4 Window"));
        assert!(secured);
    }

    #[actix_web::test]
    async fn test_docs_intro_route_success() {
        let (status, body, secured) = get("/docs/intro").await;

        assert_eq!(status, StatusCode::OK);
        assert!(body.contains("Getting Started"));
        assert!(body.contains("~/.hudbox.json"));
        assert!(secured);
    }

    #[actix_web::test]
    async fn test_unknown_route_fails_on_not_found() {
        let (status, body, secured) = get("/nope").await;

        assert_eq!(status, StatusCode::NOT_FOUND);
        assert!(body.contains("Page not found"));
        assert!(secured);
    }
}
