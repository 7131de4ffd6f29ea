mod support;

use actix_web::{test, web, App};
use blog_backend::routes;
use serde_json::json;
use support::{test_state, valid_token};

#[actix_web::test]
async fn upload_stub_fabricates_a_url() {
    let state = test_state().with_uploads_base_url("https://cdn.test.example");
    let app = test::init_service(
        App::new()
            .app_data(web::Data::new(state))
            .configure(routes::configure),
    )
    .await;
    let token = valid_token();

    let req = test::TestRequest::post()
        .uri("/api/uploads")
        .insert_header(("Authorization", format!("Bearer {token}")))
        .set_json(json!({ "filename": "photo.png" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status().as_u16(), 201);

    let body: serde_json::Value = test::read_body_json(resp).await;
    let url = body["url"].as_str().unwrap();
    assert!(url.starts_with("https://cdn.test.example/"));
    assert!(url.ends_with("/photo.png"));
}

#[actix_web::test]
async fn upload_rejects_path_separators() {
    let app = test::init_service(
        App::new()
            .app_data(web::Data::new(test_state()))
            .configure(routes::configure),
    )
    .await;
    let token = valid_token();

    for filename in ["", "../../etc/passwd", "a/b.png"] {
        let req = test::TestRequest::post()
            .uri("/api/uploads")
            .insert_header(("Authorization", format!("Bearer {token}")))
            .set_json(json!({ "filename": filename }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status().as_u16(), 400, "filename {filename:?}");
    }
}

#[actix_web::test]
async fn generate_without_endpoint_is_bad_gateway() {
    let app = test::init_service(
        App::new()
            .app_data(web::Data::new(test_state()))
            .configure(routes::configure),
    )
    .await;
    let token = valid_token();

    let req = test::TestRequest::post()
        .uri("/api/generate")
        .insert_header(("Authorization", format!("Bearer {token}")))
        .set_json(json!({ "prompt": "write a haiku" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status().as_u16(), 502);
}

#[actix_web::test]
async fn generate_rejects_empty_prompt() {
    let app = test::init_service(
        App::new()
            .app_data(web::Data::new(test_state()))
            .configure(routes::configure),
    )
    .await;
    let token = valid_token();

    let req = test::TestRequest::post()
        .uri("/api/generate")
        .insert_header(("Authorization", format!("Bearer {token}")))
        .set_json(json!({ "prompt": "  " }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status().as_u16(), 400);

    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["code"], "MISSING_PROMPT");
}
