mod support;

use actix_web::{test, web, App};
use blog_backend::routes;
use serde_json::json;
use support::{test_state, valid_token, TEST_PUBLISHER_ID};

#[actix_web::test]
async fn created_posts_are_listed_in_insertion_order() {
    let app = test::init_service(
        App::new()
            .app_data(web::Data::new(test_state()))
            .configure(routes::configure),
    )
    .await;
    let token = valid_token();

    for (title, content) in [("First", "Hello"), ("Second", "World")] {
        let req = test::TestRequest::post()
            .uri("/api/posts")
            .insert_header(("Authorization", format!("Bearer {token}")))
            .set_json(json!({ "title": title, "content": content }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status().as_u16(), 201);

        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["post"]["title"], title);
        assert_eq!(body["post"]["author_id"], TEST_PUBLISHER_ID);
        assert!(body["post"]["created_at"].is_string());
    }

    // Listing is public: no Authorization header.
    let list = test::TestRequest::get().uri("/api/posts").to_request();
    let resp = test::call_service(&app, list).await;
    assert_eq!(resp.status().as_u16(), 200);

    let body: serde_json::Value = test::read_body_json(resp).await;
    let posts = body["posts"].as_array().unwrap();
    assert_eq!(posts.len(), 2);
    assert_eq!(posts[0]["title"], "First");
    assert_eq!(posts[1]["title"], "Second");
}

#[actix_web::test]
async fn listing_starts_empty() {
    let app = test::init_service(
        App::new()
            .app_data(web::Data::new(test_state()))
            .configure(routes::configure),
    )
    .await;

    let resp = test::call_service(&app, test::TestRequest::get().uri("/api/posts").to_request())
        .await;
    assert_eq!(resp.status().as_u16(), 200);

    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["posts"].as_array().unwrap().len(), 0);
}

#[actix_web::test]
async fn empty_fields_are_rejected() {
    let app = test::init_service(
        App::new()
            .app_data(web::Data::new(test_state()))
            .configure(routes::configure),
    )
    .await;
    let token = valid_token();

    let no_title = test::TestRequest::post()
        .uri("/api/posts")
        .insert_header(("Authorization", format!("Bearer {token}")))
        .set_json(json!({ "title": "", "content": "body" }))
        .to_request();
    let resp = test::call_service(&app, no_title).await;
    assert_eq!(resp.status().as_u16(), 400);
    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["code"], "MISSING_TITLE");

    // Field omitted entirely defaults to empty and is rejected the same way.
    let no_content = test::TestRequest::post()
        .uri("/api/posts")
        .insert_header(("Authorization", format!("Bearer {token}")))
        .set_json(json!({ "title": "A title" }))
        .to_request();
    let resp = test::call_service(&app, no_content).await;
    assert_eq!(resp.status().as_u16(), 400);
    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["code"], "MISSING_CONTENT");

    // Nothing was stored.
    let list = test::TestRequest::get().uri("/api/posts").to_request();
    let resp = test::call_service(&app, list).await;
    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["posts"].as_array().unwrap().len(), 0);
}
