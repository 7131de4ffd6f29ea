mod support;

use actix_web::{test, web, App};
use blog_backend::routes;
use support::test_state;

#[actix_web::test]
async fn health_is_public_and_reports_ok() {
    let app = test::init_service(
        App::new()
            .app_data(web::Data::new(test_state()))
            .configure(routes::configure),
    )
    .await;

    let resp = test::call_service(&app, test::TestRequest::get().uri("/health").to_request()).await;
    assert_eq!(resp.status().as_u16(), 200);

    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["status"], "ok");
    assert!(body["time"].is_string());
}
