//! Password gate route.

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Json, Response};
use serde_json::{Value, json};

use crate::state::AppState;

/// `POST /verify-password` — check the widget password.
///
/// With no password configured the site is open access and every request
/// succeeds, malformed or not.
pub async fn verify_password(State(state): State<AppState>, Json(body): Json<Value>) -> Response {
    let Some(gate) = &state.gate else {
        return (StatusCode::OK, Json(json!({ "success": true }))).into_response();
    };

    let Some(attempt) = body.get("password").and_then(Value::as_str) else {
        return (
            StatusCode::BAD_REQUEST,
            Json(json!({ "success": false, "error": "password is required" })),
        )
            .into_response();
    };

    if gate.verify(attempt) {
        (StatusCode::OK, Json(json!({ "success": true }))).into_response()
    } else {
        (
            StatusCode::UNAUTHORIZED,
            Json(json!({ "success": false, "error": "Invalid password" })),
        )
            .into_response()
    }
}

#[cfg(test)]
#[path = "gate_test.rs"]
mod tests;
