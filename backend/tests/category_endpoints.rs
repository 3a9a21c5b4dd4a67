//! Endpoint tests for the category surface.

mod support;

use actix_web::http::StatusCode;
use actix_web::test::{call_service, init_service, TestRequest};
use serde_json::{json, Value};
use uuid::Uuid;

use support::{body_json, test_app};

#[actix_rt::test]
async fn listing_starts_empty() {
    let app = init_service(test_app()).await;

    let response = call_service(&app, TestRequest::get().uri("/v1/category").to_request()).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await, json!([]));
}

#[actix_rt::test]
async fn create_returns_201_with_location_and_the_record_round_trips() {
    let app = init_service(test_app()).await;

    let response = call_service(
        &app,
        TestRequest::post()
            .uri("/v1/category")
            .set_json(json!({ "title": "Books" }))
            .to_request(),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);
    assert!(response.headers().get("trace-id").is_some());

    let location = response
        .headers()
        .get("location")
        .expect("location header present")
        .to_str()
        .expect("ASCII location")
        .to_owned();
    let created = body_json(response).await;
    let id = created
        .get("id")
        .and_then(Value::as_str)
        .expect("id present");
    Uuid::parse_str(id).expect("id is a UUID");
    assert_eq!(location, format!("/v1/category/{id}"));
    assert_eq!(created.get("title").and_then(Value::as_str), Some("Books"));

    let fetched = call_service(&app, TestRequest::get().uri(&location).to_request()).await;
    assert_eq!(fetched.status(), StatusCode::OK);
    assert_eq!(body_json(fetched).await, created);
}

#[actix_rt::test]
async fn create_rejects_out_of_bounds_titles_with_field_messages() {
    let app = init_service(test_app()).await;

    let too_long = "a".repeat(51);
    for title in ["ab", too_long.as_str(), ""] {
        let response = call_service(
            &app,
            TestRequest::post()
                .uri("/v1/category")
                .set_json(json!({ "title": title }))
                .to_request(),
        )
        .await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body = body_json(response).await;
        assert_eq!(
            body.get("code").and_then(Value::as_str),
            Some("invalid_request")
        );
        assert!(
            body.pointer("/details/fieldErrors/title").is_some(),
            "expected a title field error for {title:?}, got {body}"
        );
    }
}

#[actix_rt::test]
async fn create_without_a_title_is_a_validation_error() {
    let app = init_service(test_app()).await;

    let response = call_service(
        &app,
        TestRequest::post()
            .uri("/v1/category")
            .set_json(json!({}))
            .to_request(),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = body_json(response).await;
    assert_eq!(
        body.pointer("/details/fieldErrors/title").and_then(Value::as_str),
        Some("title is required")
    );
}

#[actix_rt::test]
async fn malformed_json_is_rewritten_into_the_envelope() {
    let app = init_service(test_app()).await;

    let response = call_service(
        &app,
        TestRequest::post()
            .uri("/v1/category")
            .insert_header(("content-type", "application/json"))
            .set_payload("{not json")
            .to_request(),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = body_json(response).await;
    assert_eq!(
        body.get("code").and_then(Value::as_str),
        Some("invalid_request")
    );
}

#[actix_rt::test]
async fn get_of_an_unknown_id_is_404() {
    let app = init_service(test_app()).await;

    let response = call_service(
        &app,
        TestRequest::get()
            .uri(&format!("/v1/category/{}", Uuid::new_v4()))
            .to_request(),
    )
    .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let body = body_json(response).await;
    assert_eq!(body.get("code").and_then(Value::as_str), Some("not_found"));
}

#[actix_rt::test]
async fn get_with_a_malformed_id_is_404() {
    // Reads treat an unparseable id like an absent record.
    let app = init_service(test_app()).await;

    let response =
        call_service(&app, TestRequest::get().uri("/v1/category/not-a-uuid").to_request()).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let body = body_json(response).await;
    assert_eq!(body.get("code").and_then(Value::as_str), Some("not_found"));
}

#[actix_rt::test]
async fn put_replaces_the_stored_record() {
    let app = init_service(test_app()).await;

    let created = call_service(
        &app,
        TestRequest::post()
            .uri("/v1/category")
            .set_json(json!({ "title": "Books" }))
            .to_request(),
    )
    .await;
    let id = body_json(created)
        .await
        .get("id")
        .and_then(Value::as_str)
        .expect("id present")
        .to_owned();

    let response = call_service(
        &app,
        TestRequest::put()
            .uri("/v1/category")
            .set_json(json!({ "id": id, "title": "Magazines" }))
            .to_request(),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let fetched = call_service(
        &app,
        TestRequest::get()
            .uri(&format!("/v1/category/{id}"))
            .to_request(),
    )
    .await;
    let body = body_json(fetched).await;
    assert_eq!(body.get("title").and_then(Value::as_str), Some("Magazines"));
}

#[actix_rt::test]
async fn put_of_an_unknown_id_is_an_internal_error() {
    let app = init_service(test_app()).await;

    let response = call_service(
        &app,
        TestRequest::put()
            .uri("/v1/category")
            .set_json(json!({ "id": Uuid::new_v4(), "title": "Books" }))
            .to_request(),
    )
    .await;
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let body = body_json(response).await;
    assert_eq!(
        body.get("code").and_then(Value::as_str),
        Some("internal_error")
    );
    // The fault cause stays in the logs, not on the wire.
    assert_eq!(
        body.get("message").and_then(Value::as_str),
        Some("Internal server error")
    );
}

#[actix_rt::test]
async fn delete_of_an_unknown_id_is_404_and_delete_is_not_idempotent() {
    let app = init_service(test_app()).await;

    let response = call_service(
        &app,
        TestRequest::delete()
            .uri(&format!("/v1/category/{}", Uuid::new_v4()))
            .to_request(),
    )
    .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let created = call_service(
        &app,
        TestRequest::post()
            .uri("/v1/category")
            .set_json(json!({ "title": "Books" }))
            .to_request(),
    )
    .await;
    let id = body_json(created)
        .await
        .get("id")
        .and_then(Value::as_str)
        .expect("id present")
        .to_owned();

    let first = call_service(
        &app,
        TestRequest::delete()
            .uri(&format!("/v1/category/{id}"))
            .to_request(),
    )
    .await;
    assert_eq!(first.status(), StatusCode::OK);

    let second = call_service(
        &app,
        TestRequest::delete()
            .uri(&format!("/v1/category/{id}"))
            .to_request(),
    )
    .await;
    assert_eq!(second.status(), StatusCode::NOT_FOUND);
}

#[actix_rt::test]
async fn delete_with_a_malformed_id_is_400() {
    let app = init_service(test_app()).await;

    let response = call_service(
        &app,
        TestRequest::delete()
            .uri("/v1/category/not-a-uuid")
            .to_request(),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = body_json(response).await;
    assert_eq!(
        body.get("code").and_then(Value::as_str),
        Some("invalid_request")
    );
}
