use super::*;
use crate::state::test_helpers::test_state;

async fn body_json(response: Response) -> Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

#[tokio::test]
async fn correct_password_succeeds() {
    let state = test_state(None, Some("hunter2"));
    let response = verify_password(State(state), Json(json!({ "password": "hunter2" }))).await;

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await, json!({ "success": true }));
}

#[tokio::test]
async fn wrong_password_is_unauthorized() {
    let state = test_state(None, Some("hunter2"));
    let response = verify_password(State(state), Json(json!({ "password": "hunter3" }))).await;

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    assert_eq!(body_json(response).await, json!({ "success": false, "error": "Invalid password" }));
}

#[tokio::test]
async fn missing_password_field_is_bad_request() {
    let state = test_state(None, Some("hunter2"));
    let response = verify_password(State(state), Json(json!({}))).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await["success"], json!(false));
}

#[tokio::test]
async fn non_string_password_is_bad_request() {
    let state = test_state(None, Some("hunter2"));
    let response = verify_password(State(state), Json(json!({ "password": 1234 }))).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn no_password_configured_is_open_access() {
    let state = test_state(None, None);

    let response = verify_password(State(state.clone()), Json(json!({ "password": "anything" }))).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await, json!({ "success": true }));

    // Even a malformed body succeeds when the gate is open.
    let response = verify_password(State(state), Json(json!({}))).await;
    assert_eq!(response.status(), StatusCode::OK);
}
