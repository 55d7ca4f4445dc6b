//! HTTP-level tests for the submission forms.

mod common;

use std::sync::Arc;

use axum::http::StatusCode;
use common::{body_json, post_json};
use serde_json::json;
use sqlx::PgPool;
use sriweb_api::content::writer::{
    ACK_RECEIVED, ACK_SERVICE_RECEIVED, ACK_SERVICE_STORED, ACK_STORED, ACK_SUBSCRIBED,
};
use sriweb_db::repositories::ContactInquiryRepo;
use sriweb_docstore::memory::MemoryStore;
use sriweb_docstore::{Collection, FieldValue};

fn contact_body() -> serde_json::Value {
    json!({
        "name": "Ravi Kumar",
        "email": "ravi@example.com",
        "phone": "+919014376635",
        "inquiry_type": "project",
        "message": "Interested in a villa plot near Tirupati."
    })
}

// ---------------------------------------------------------------------------
// Contact form
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn contact_without_primary_is_backed_up_and_acknowledged(pool: PgPool) {
    let app = common::build_test_app(pool.clone());
    let response = post_json(app, "/api/v1/contact", contact_body()).await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["data"]["success"], true);
    assert_eq!(json["data"]["message"], ACK_RECEIVED);
    assert_eq!(json["data"]["stored_in_primary"], false);

    let rows = ContactInquiryRepo::list(&pool).await.unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].inquiry_type, "project");
    assert!(!rows[0].responded);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn contact_with_primary_lands_in_both_backends(pool: PgPool) {
    let store = Arc::new(MemoryStore::new());
    let app = common::build_test_app_with_primary(pool.clone(), Arc::clone(&store));
    let json = body_json(post_json(app, "/api/v1/contact", contact_body()).await).await;

    assert_eq!(json["data"]["message"], ACK_STORED);
    assert_eq!(json["data"]["stored_in_primary"], true);

    let docs = store.documents(Collection::Contacts).await;
    assert_eq!(docs.len(), 1);
    assert_eq!(docs[0].get("responded"), Some(&FieldValue::Bool(false)));
    assert_eq!(ContactInquiryRepo::list(&pool).await.unwrap().len(), 1);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn short_message_is_rejected_before_any_write(pool: PgPool) {
    let store = Arc::new(MemoryStore::new());
    let app = common::build_test_app_with_primary(pool.clone(), Arc::clone(&store));
    let response = post_json(
        app,
        "/api/v1/contact",
        json!({
            "name": "Jo",
            "email": "a@b.com",
            "phone": "+919014376635",
            "message": "short"
        }),
    )
    .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["code"], "VALIDATION_ERROR");
    assert!(json["fields"]["message"].is_array());

    assert!(store.documents(Collection::Contacts).await.is_empty());
    assert!(ContactInquiryRepo::list(&pool).await.unwrap().is_empty());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn malformed_phone_and_email_are_reported_per_field(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = post_json(
        app,
        "/api/v1/contact",
        json!({
            "name": "Ravi Kumar",
            "email": "not-an-email",
            "phone": "90143",
            "message": "Interested in a villa plot near Tirupati."
        }),
    )
    .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert!(json["fields"]["email"].is_array());
    assert!(json["fields"]["phone"].is_array());
    assert!(json["fields"].get("name").is_none());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn missing_field_is_reported_as_a_validation_error(pool: PgPool) {
    let app = common::build_test_app(pool.clone());
    let mut body = contact_body();
    body.as_object_mut().unwrap().remove("message");

    let response = post_json(app, "/api/v1/contact", body).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(response.headers()["content-type"], "application/json");
    let json = body_json(response).await;
    assert_eq!(json["code"], "VALIDATION_ERROR");
    assert_eq!(json["fields"]["message"][0], "This field is required.");
    assert!(ContactInquiryRepo::list(&pool).await.unwrap().is_empty());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn unknown_choice_is_reported_as_a_validation_error(pool: PgPool) {
    let app = common::build_test_app(pool.clone());
    let mut body = contact_body();
    body["inquiry_type"] = json!("newsletter");

    let response = post_json(app, "/api/v1/contact", body).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["code"], "VALIDATION_ERROR");
    assert!(json["error"].is_string());
    assert!(ContactInquiryRepo::list(&pool).await.unwrap().is_empty());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn whitespace_only_fields_are_rejected(pool: PgPool) {
    let app = common::build_test_app(pool.clone());
    let mut body = contact_body();
    body["name"] = json!("   ");
    body["message"] = json!("              ");

    let response = post_json(app, "/api/v1/contact", body).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert!(json["fields"]["name"].is_array());
    assert!(json["fields"]["message"].is_array());
    assert!(ContactInquiryRepo::list(&pool).await.unwrap().is_empty());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn mirror_failure_is_not_surfaced(pool: PgPool) {
    let store = Arc::new(MemoryStore::new());
    let app = common::build_test_app_with_primary(pool.clone(), Arc::clone(&store));
    pool.close().await;

    let response = post_json(app, "/api/v1/contact", contact_body()).await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["data"]["message"], ACK_STORED);
    assert_eq!(store.documents(Collection::Contacts).await.len(), 1);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn total_backend_failure_is_still_acknowledged(pool: PgPool) {
    let app = common::build_test_app(pool.clone());
    pool.close().await;

    let response = post_json(app, "/api/v1/contact", contact_body()).await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["data"]["success"], true);
    assert_eq!(json["data"]["message"], ACK_RECEIVED);
}

// ---------------------------------------------------------------------------
// Service inquiry and newsletter
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn service_inquiry_is_stored_with_details(pool: PgPool) {
    let app = common::build_test_app(pool.clone());
    let response = post_json(
        app,
        "/api/v1/service-inquiry",
        json!({
            "name": "Sunitha",
            "email": "sunitha@example.com",
            "phone": "9014376635",
            "service_type": "construction",
            "project_budget": "50-1cr",
            "timeline": "6months",
            "message": "Commercial complex on the bypass road."
        }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await["data"]["message"], ACK_SERVICE_RECEIVED);

    let rows = ContactInquiryRepo::list(&pool).await.unwrap();
    assert_eq!(rows[0].inquiry_type, "service");
    assert_eq!(rows[0].details["service_type"], "construction");
    assert_eq!(rows[0].details["project_budget"], "50-1cr");
    assert_eq!(rows[0].details["timeline"], "6months");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn newsletter_signup_uses_placeholders(pool: PgPool) {
    let app = common::build_test_app(pool.clone());
    let response = post_json(
        app,
        "/api/v1/newsletter",
        json!({
            "email": "reader@example.com",
            "interests": ["residential", "market_updates"]
        }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await["data"]["message"], ACK_SUBSCRIBED);

    let rows = ContactInquiryRepo::list(&pool).await.unwrap();
    assert_eq!(rows[0].inquiry_type, "newsletter");
    assert_eq!(rows[0].name, "Newsletter Subscriber");
    assert_eq!(rows[0].phone, "Not provided");
    assert_eq!(rows[0].details["interests"], "residential, market_updates");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn newsletter_rejects_bad_email(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = post_json(app, "/api/v1/newsletter", json!({ "email": "nope" })).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert!(json["fields"]["email"].is_array());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn service_inquiry_with_primary_gets_service_acknowledgement(pool: PgPool) {
    let store = Arc::new(MemoryStore::new());
    let app = common::build_test_app_with_primary(pool, Arc::clone(&store));
    let response = post_json(
        app,
        "/api/v1/service-inquiry",
        json!({
            "name": "Sunitha",
            "email": "sunitha@example.com",
            "phone": "9014376635",
            "service_type": "consultation"
        }),
    )
    .await;

    let json = body_json(response).await;
    assert_eq!(json["data"]["message"], ACK_SERVICE_STORED);
    assert_eq!(store.documents(Collection::Contacts).await.len(), 1);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn service_inquiry_without_service_type_is_a_validation_error(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = post_json(
        app,
        "/api/v1/service-inquiry",
        json!({
            "name": "Sunitha",
            "email": "sunitha@example.com",
            "phone": "9014376635"
        }),
    )
    .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["code"], "VALIDATION_ERROR");
    assert_eq!(json["fields"]["service_type"][0], "This field is required.");
}
