//! Waitlist storage backed by a Supabase project, through its PostgREST API.

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use secrecy::{ExposeSecret, SecretString};
use serde::Deserialize;
use url::Url;

use crate::{
    app_error::{AppError, AppResult},
    application::use_cases::waitlist::{InsertOutcome, WaitlistRepo},
    domain::entities::waitlist_entry::WaitlistEntry,
    infra::config::WaitlistStoreConfig,
};

/// PostgreSQL unique_violation.
const UNIQUE_VIOLATION: &str = "23505";

#[derive(Clone)]
pub struct SupabaseWaitlistRepo {
    client: Client,
    endpoint: Url,
    service_role: SecretString,
}

impl SupabaseWaitlistRepo {
    pub fn new(client: Client, config: &WaitlistStoreConfig) -> AppResult<Self> {
        let base = config.supabase_url.as_str().trim_end_matches('/');
        let endpoint = Url::parse(&format!("{base}/rest/v1/{}", config.table))
            .map_err(|e| AppError::Internal(format!("invalid waitlist endpoint: {e}")))?;
        Ok(Self {
            client,
            endpoint,
            service_role: SecretString::new(config.service_role.expose_secret().into()),
        })
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }
}

/// Error body returned by PostgREST.
#[derive(Debug, Default, Deserialize)]
struct PostgrestError {
    code: Option<String>,
    message: Option<String>,
    details: Option<String>,
    hint: Option<String>,
}

impl PostgrestError {
    fn is_duplicate(&self) -> bool {
        self.code.as_deref() == Some(UNIQUE_VIOLATION)
            || self
                .message
                .as_deref()
                .is_some_and(|m| m.to_lowercase().contains("duplicate"))
    }
}

#[async_trait]
impl WaitlistRepo for SupabaseWaitlistRepo {
    async fn insert(&self, entry: &WaitlistEntry) -> AppResult<InsertOutcome> {
        let key = self.service_role.expose_secret();
        let resp = self
            .client
            .post(self.endpoint.clone())
            .header("apikey", key)
            .bearer_auth(key)
            .header("Prefer", "return=minimal")
            .json(entry)
            .send()
            .await
            .map_err(|e| AppError::Database(e.to_string()))?;

        let status = resp.status();
        if status.is_success() {
            return Ok(InsertOutcome::Inserted);
        }

        let body = resp.text().await.unwrap_or_default();
        let err: PostgrestError = serde_json::from_str(&body).unwrap_or_default();
        if err.is_duplicate() {
            return Ok(InsertOutcome::Duplicate);
        }

        tracing::error!(
            status = %status,
            code = ?err.code,
            details = ?err.details,
            hint = ?err.hint,
            "Waitlist insert rejected"
        );
        Err(AppError::Database(
            err.message.unwrap_or_else(|| fallback_message(status)),
        ))
    }
}

fn fallback_message(status: StatusCode) -> String {
    format!(
        "Waitlist store responded with {}",
        status.canonical_reason().unwrap_or(status.as_str())
    )
}
