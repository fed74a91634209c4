use std::{net::SocketAddr, path::PathBuf};

use axum::http::HeaderValue;
use env_helpers::get_env_default;
use secrecy::SecretString;
use url::Url;

pub struct AppConfig {
    pub bind_addr: SocketAddr,
    pub cors_origin: HeaderValue,
    /// Root of static assets; mock demo screens live under `interactive/`.
    pub public_dir: PathBuf,
    /// `None` when either Supabase variable is missing; the waitlist endpoint then answers 500.
    pub waitlist_store: Option<WaitlistStoreConfig>,
}

pub struct WaitlistStoreConfig {
    pub supabase_url: Url,
    pub service_role: SecretString,
    pub table: String,
}

impl AppConfig {
    pub fn from_env() -> Self {
        let bind_addr: SocketAddr =
            get_env_default("BIND_ADDR", SocketAddr::from(([127, 0, 0, 1], 3000)));
        let cors_origin: HeaderValue =
            get_env_default("CORS_ORIGIN", String::from("http://localhost:3000"))
                .parse()
                .expect("CORS_ORIGIN must be a valid header value");
        let public_dir: PathBuf = PathBuf::from(get_env_default("PUBLIC_DIR", "public".to_string()));
        let table: String = get_env_default("WAITLIST_TABLE", "waitlist".to_string());

        let waitlist_store = WaitlistStoreConfig::from_parts(
            trimmed_var("SUPABASE_URL"),
            trimmed_var("SUPABASE_SERVICE_ROLE"),
            table,
        );

        Self {
            bind_addr,
            cors_origin,
            public_dir,
            waitlist_store,
        }
    }

    #[cfg(test)]
    pub fn for_tests() -> Self {
        Self {
            bind_addr: SocketAddr::from(([127, 0, 0, 1], 0)),
            cors_origin: HeaderValue::from_static("http://localhost:3000"),
            public_dir: PathBuf::from("public"),
            waitlist_store: None,
        }
    }
}

impl WaitlistStoreConfig {
    /// Builds the store settings from already-trimmed values, logging which ones are missing.
    pub fn from_parts(url: Option<String>, service_role: Option<String>, table: String) -> Option<Self> {
        let has_url = url.is_some();
        let has_service = service_role.is_some();
        let (Some(url), Some(service_role)) = (url, service_role) else {
            tracing::warn!(
                has_url,
                has_service,
                "Waitlist store not configured; signups will be rejected"
            );
            return None;
        };

        match Url::parse(&url) {
            Ok(supabase_url) => Some(Self {
                supabase_url,
                service_role: SecretString::new(service_role.into()),
                table,
            }),
            Err(err) => {
                tracing::warn!(error = %err, "SUPABASE_URL is not a valid URL; signups will be rejected");
                None
            }
        }
    }
}

/// Reads a variable, trimming whitespace and treating blank values as unset.
pub(crate) fn trimmed_var(key: &str) -> Option<String> {
    std::env::var(key)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use secrecy::ExposeSecret;

    #[test]
    fn store_requires_both_values() {
        assert!(WaitlistStoreConfig::from_parts(None, Some("key".into()), "waitlist".into()).is_none());
        assert!(
            WaitlistStoreConfig::from_parts(Some("https://x.supabase.co".into()), None, "waitlist".into())
                .is_none()
        );
    }

    #[test]
    fn store_rejects_malformed_url() {
        assert!(
            WaitlistStoreConfig::from_parts(Some("not a url".into()), Some("key".into()), "waitlist".into())
                .is_none()
        );
    }

    #[test]
    fn store_built_from_valid_values() {
        let store = WaitlistStoreConfig::from_parts(
            Some("https://abc.supabase.co".into()),
            Some("service-key".into()),
            "waitlist".into(),
        )
        .unwrap();
        assert_eq!(store.supabase_url.host_str(), Some("abc.supabase.co"));
        assert_eq!(store.service_role.expose_secret(), "service-key");
        assert_eq!(store.table, "waitlist");
    }
}
