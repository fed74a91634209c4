use axum::{
    Json, Router,
    extract::rejection::JsonRejection,
    routing::{get, post},
};
use serde::{Deserialize, Serialize};

use crate::{
    adapters::http::app_state::AppState,
    app_error::{AppError, AppResult},
    domain::{
        entities::demo_role::{RoleKey, Screen},
        phone_demo::{DemoInput, DemoState},
    },
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/demo/roles", get(list_roles))
        .route("/demo/navigate", post(navigate))
}

#[derive(Serialize)]
struct RoleView {
    key: RoleKey,
    display_name: &'static str,
    color: &'static str,
    shortcut: usize,
    screens: &'static [Screen],
}

async fn list_roles() -> Json<Vec<RoleView>> {
    let roles = RoleKey::ALL
        .iter()
        .enumerate()
        .map(|(i, role)| {
            let cfg = role.config();
            RoleView {
                key: *role,
                display_name: cfg.display_name,
                color: cfg.color,
                shortcut: i + 1,
                screens: cfg.screens,
            }
        })
        .collect();
    Json(roles)
}

#[derive(Deserialize)]
struct NavigatePayload {
    #[serde(default)]
    role: RoleKey,
    #[serde(default)]
    index: usize,
    input: DemoInput,
}

#[derive(Serialize)]
struct StateView {
    role: RoleKey,
    index: usize,
    total: usize,
    screen: &'static Screen,
}

impl From<DemoState> for StateView {
    fn from(state: DemoState) -> Self {
        Self {
            role: state.role(),
            index: state.index(),
            total: state.total(),
            screen: state.current_screen(),
        }
    }
}

async fn navigate(
    payload: Result<Json<NavigatePayload>, JsonRejection>,
) -> AppResult<Json<StateView>> {
    let Json(payload) = payload.map_err(|rejection| AppError::InvalidInput(rejection.body_text()))?;
    let state = DemoState::restore(payload.role, payload.index).apply(&payload.input);
    tracing::debug!(role = %state.role(), index = state.index(), "Demo navigated");
    Ok(Json(state.into()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::StatusCode;
    use axum_test::TestServer;
    use serde_json::{Value, json};

    use crate::test_utils::TestAppStateBuilder;

    fn server() -> TestServer {
        let app_state = TestAppStateBuilder::new().build();
        TestServer::new(router().with_state(app_state)).unwrap()
    }

    #[tokio::test]
    async fn roles_are_listed_in_switcher_order() {
        let response = server().get("/demo/roles").await;

        response.assert_status_ok();
        let body: Value = response.json();
        let roles = body.as_array().unwrap();
        assert_eq!(roles.len(), 3);
        assert_eq!(roles[0]["key"], "landlord");
        assert_eq!(roles[0]["display_name"], "Landlords");
        assert_eq!(roles[1]["shortcut"], 2);
        assert_eq!(roles[2]["screens"].as_array().unwrap().len(), 5);
        assert_eq!(roles[1]["screens"][0]["source"]["kind"], "frame");
    }

    #[tokio::test]
    async fn navigate_prev_wraps() {
        let response = server()
            .post("/demo/navigate")
            .json(&json!({ "role": "contractor", "index": 0, "input": { "type": "prev" } }))
            .await;

        response.assert_status_ok();
        let body: Value = response.json();
        assert_eq!(body["index"], 4);
        assert_eq!(body["total"], 5);
        assert_eq!(body["screen"]["id"], "c-05");
    }

    #[tokio::test]
    async fn navigate_role_key_resets_index() {
        let response = server()
            .post("/demo/navigate")
            .json(&json!({ "role": "landlord", "index": 3, "input": { "type": "key", "key": "2" } }))
            .await;

        let body: Value = response.json();
        assert_eq!(body["role"], "tenant");
        assert_eq!(body["index"], 0);
    }

    #[tokio::test]
    async fn navigate_message_bridge() {
        let response = server()
            .post("/demo/navigate")
            .json(&json!({
                "role": "landlord",
                "input": { "type": "message", "data": { "type": "conexus-nav", "to": "l-04" } }
            }))
            .await;

        let body: Value = response.json();
        assert_eq!(body["screen"]["label"], "Analytics");
    }

    #[tokio::test]
    async fn navigate_rejects_unknown_input() {
        let response = server()
            .post("/demo/navigate")
            .json(&json!({ "input": { "type": "teleport" } }))
            .await;

        response.assert_status(StatusCode::BAD_REQUEST);
        let body: Value = response.json();
        assert_eq!(body["code"], "INVALID_INPUT");
        assert!(body["error"].as_str().is_some_and(|msg| !msg.is_empty()));
    }

    #[tokio::test]
    async fn navigate_rejects_malformed_body_as_json_error() {
        let response = server()
            .post("/demo/navigate")
            .text("{ nope")
            .content_type("application/json")
            .await;

        response.assert_status(StatusCode::BAD_REQUEST);
        let body: Value = response.json();
        assert_eq!(body["code"], "INVALID_INPUT");
    }
}
