mod common;

use std::sync::atomic::Ordering;

use axum::http::StatusCode;
use serde_json::{json, Value};
use tower::ServiceExt;

use common::{body_bytes, body_json, empty_request, json_request, memory_app, scripted_app, Script};

const ALICE: &str = r#"{"name":"Alice","email":"alice@example.com","company":"Acme"}"#;
const MISSING_FIELDS: &str = "Missing required fields: name, email, or company.";

async fn first_client_id(app: &axum::Router) -> String {
    let response = app
        .clone()
        .oneshot(empty_request("GET", "/clients"))
        .await
        .unwrap();
    let clients: Value = body_json(response).await;
    clients[0]["_id"].as_str().unwrap().to_string()
}

// --- happy path ---

#[tokio::test]
async fn client_lifecycle() {
    let app = memory_app();

    let response = app
        .clone()
        .oneshot(json_request("POST", "/clients", ALICE))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);
    assert!(body_bytes(response).await.is_empty());

    let id = first_client_id(&app).await;
    assert_eq!(id.len(), 24);

    let response = app
        .clone()
        .oneshot(empty_request("GET", &format!("/clients/{id}")))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        body_json(response).await,
        json!({"_id": id, "name": "Alice", "email": "alice@example.com", "company": "Acme"})
    );

    let response = app
        .clone()
        .oneshot(json_request(
            "PUT",
            &format!("/clients/{id}"),
            r#"{"name":"Alice B","email":"alice@example.com","company":"Acme","ipaddress":"10.0.0.1"}"#,
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let response = app
        .clone()
        .oneshot(empty_request("GET", &format!("/clients/{id}")))
        .await
        .unwrap();
    let client = body_json(response).await;
    assert_eq!(client["name"], "Alice B");
    assert_eq!(client["ipaddress"], "10.0.0.1");

    let response = app
        .clone()
        .oneshot(empty_request("DELETE", &format!("/clients/{id}")))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let response = app
        .clone()
        .oneshot(empty_request("GET", &format!("/clients/{id}")))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(body_json(response).await, json!({"message": "Client not found"}));
}

#[tokio::test]
async fn list_starts_empty() {
    let response = memory_app()
        .oneshot(empty_request("GET", "/clients"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await, json!([]));
}

#[tokio::test]
async fn create_ignores_ipaddress() {
    let app = memory_app();
    let response = app
        .clone()
        .oneshot(json_request(
            "POST",
            "/clients",
            r#"{"name":"Bob","email":"bob@example.com","company":"Acme","ipaddress":"10.0.0.2"}"#,
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);

    let response = app
        .clone()
        .oneshot(empty_request("GET", "/clients"))
        .await
        .unwrap();
    let clients = body_json(response).await;
    assert!(clients[0].get("ipaddress").is_none());
}

#[tokio::test]
async fn update_without_ipaddress_drops_it() {
    let app = memory_app();
    app.clone()
        .oneshot(json_request("POST", "/clients", ALICE))
        .await
        .unwrap();
    let id = first_client_id(&app).await;

    app.clone()
        .oneshot(json_request(
            "PUT",
            &format!("/clients/{id}"),
            r#"{"name":"Alice","email":"alice@example.com","company":"Acme","ipaddress":"10.0.0.1"}"#,
        ))
        .await
        .unwrap();
    let response = app
        .clone()
        .oneshot(json_request("PUT", &format!("/clients/{id}"), ALICE))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let response = app
        .clone()
        .oneshot(empty_request("GET", &format!("/clients/{id}")))
        .await
        .unwrap();
    assert!(body_json(response).await.get("ipaddress").is_none());
}

// --- validation ---

#[tokio::test]
async fn malformed_id_is_rejected_before_store_access() {
    let (app, calls) = scripted_app(Script::Empty);

    for (method, body) in [("GET", None), ("PUT", Some(ALICE)), ("DELETE", None)] {
        let request = match body {
            Some(body) => json_request(method, "/clients/abc", body),
            None => empty_request(method, "/clients/abc"),
        };
        let response = app.clone().oneshot(request).await.unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST, "{method}");
        assert_eq!(
            body_json(response).await,
            json!({"message": "Invalid client ID format."})
        );
    }
    assert_eq!(calls.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn create_requires_all_fields() {
    let (app, calls) = scripted_app(Script::Empty);

    for body in [
        r#"{"name":"Alice","email":"alice@example.com"}"#,
        r#"{"name":"","email":"alice@example.com","company":"Acme"}"#,
        r#"{"name":42,"email":"alice@example.com","company":"Acme"}"#,
        "{}",
        "not json",
    ] {
        let response = app
            .clone()
            .oneshot(json_request("POST", "/clients", body))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST, "{body}");
        assert_eq!(body_json(response).await, json!({"message": MISSING_FIELDS}));
    }
    assert_eq!(calls.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn invalid_email_is_rejected() {
    let app = memory_app();
    let body = r#"{"name":"Alice","email":"alice.example.com","company":"Acme"}"#;

    let response = app
        .clone()
        .oneshot(json_request("POST", "/clients", body))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await, json!({"message": "Invalid email format."}));

    let response = app
        .clone()
        .oneshot(json_request("PUT", "/clients/507f1f77bcf86cd799439011", body))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await, json!({"message": "Invalid email format."}));
}

#[tokio::test]
async fn missing_fields_win_over_bad_email() {
    let response = memory_app()
        .oneshot(json_request("POST", "/clients", r#"{"email":"nope"}"#))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await, json!({"message": MISSING_FIELDS}));
}

// --- not found ---

#[tokio::test]
async fn identical_update_reports_not_modified() {
    let app = memory_app();
    app.clone()
        .oneshot(json_request("POST", "/clients", ALICE))
        .await
        .unwrap();
    let id = first_client_id(&app).await;

    let response = app
        .clone()
        .oneshot(json_request("PUT", &format!("/clients/{id}"), ALICE))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(
        body_json(response).await,
        json!({"message": "Client not found or data not modified."})
    );
}

#[tokio::test]
async fn unknown_id_is_not_found() {
    let app = memory_app();
    let uri = "/clients/507f1f77bcf86cd799439011";

    let response = app
        .clone()
        .oneshot(json_request("PUT", uri, ALICE))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let response = app
        .clone()
        .oneshot(empty_request("DELETE", uri))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(body_json(response).await, json!({"message": "Client not found."}));
}

// --- store failures ---

#[tokio::test]
async fn store_failure_reports_message_and_cause() {
    let (app, _) = scripted_app(Script::Fail);

    let response = app
        .clone()
        .oneshot(empty_request("GET", "/clients"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let body = body_json(response).await;
    assert_eq!(body["message"], "Error occurred while retrieving clients.");
    assert!(body["error"].as_str().unwrap().contains("connection reset by peer"));

    let uri = "/clients/507f1f77bcf86cd799439011";
    for (request, message) in [
        (
            json_request("POST", "/clients", ALICE),
            "Error occurred while creating the client.",
        ),
        (
            empty_request("GET", uri),
            "Error occurred while retrieving the client.",
        ),
        (
            json_request("PUT", uri, ALICE),
            "Error occurred while updating the client.",
        ),
        (
            empty_request("DELETE", uri),
            "Error occurred while deleting the client.",
        ),
    ] {
        let response = app.clone().oneshot(request).await.unwrap();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR, "{message}");
        let body = body_json(response).await;
        assert_eq!(body["message"], message);
        assert!(body["error"].as_str().unwrap().contains("connection reset by peer"));
    }
}

#[tokio::test]
async fn unacknowledged_insert_fails() {
    let (app, _) = scripted_app(Script::Unacknowledged);

    let response = app
        .oneshot(json_request("POST", "/clients", ALICE))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(
        body_json(response).await,
        json!({"message": "Error occurred while creating the client."})
    );
}
