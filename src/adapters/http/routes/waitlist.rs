use axum::{
    Form, Json, Router,
    extract::{FromRequest, Request, State},
    http::header::CONTENT_TYPE,
    routing::post,
};
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use std::convert::Infallible;

use crate::{
    adapters::http::app_state::AppState, app_error::AppResult,
    use_cases::waitlist::WaitlistSubmission,
};

#[derive(Deserialize, Default)]
struct JoinPayload {
    #[serde(default, deserialize_with = "string_or_none")]
    email: Option<String>,
    #[serde(default, deserialize_with = "string_or_none")]
    name: Option<String>,
    #[serde(default, deserialize_with = "string_or_none")]
    role: Option<String>,
}

/// Non-string values (numbers, arrays, null) count as absent.
fn string_or_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Option::<Value>::deserialize(deserializer)? {
        Some(Value::String(s)) => Some(s),
        _ => None,
    })
}

/// Waitlist body sent either as JSON by the landing script or form-encoded by a
/// plain form post. An unreadable body is treated as a submission without an
/// email, so it is still reported after the configuration check.
struct JoinBody(JoinPayload);

impl<S> FromRequest<S> for JoinBody
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let is_form = req
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .is_some_and(|ct| ct.starts_with("application/x-www-form-urlencoded"));

        let parsed = if is_form {
            Form::<JoinPayload>::from_request(req, state)
                .await
                .map(|Form(p)| p)
                .map_err(|rejection| rejection.body_text())
        } else {
            Json::<JoinPayload>::from_request(req, state)
                .await
                .map(|Json(p)| p)
                .map_err(|rejection| rejection.body_text())
        };

        Ok(Self(parsed.unwrap_or_else(|error| {
            tracing::debug!(%error, "Unreadable waitlist payload");
            JoinPayload::default()
        })))
    }
}

#[derive(Serialize)]
struct JoinResponse {
    ok: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    note: Option<&'static str>,
}

pub fn router() -> Router<AppState> {
    Router::new().route("/waitlist", post(join))
}

async fn join(
    State(app_state): State<AppState>,
    JoinBody(payload): JoinBody,
) -> AppResult<Json<JoinResponse>> {
    let submission = WaitlistSubmission {
        email: payload.email,
        name: payload.name,
        role: payload.role,
    };

    let outcome = app_state.waitlist_use_cases.join(submission).await?;
    Ok(Json(JoinResponse {
        ok: true,
        note: outcome.note(),
    }))
}
