use crate::{
    adapters::{http::app_state::AppState, persistence::supabase::SupabaseWaitlistRepo},
    infra::{
        config::{AppConfig, trimmed_var},
        http_client::try_build_client,
    },
    use_cases::waitlist::{WaitlistRepo, WaitlistUseCases},
};
use std::fs::File;
use std::sync::Arc;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

pub async fn init_app_state() -> anyhow::Result<AppState> {
    let config = AppConfig::from_env();

    let waitlist_repo = match &config.waitlist_store {
        Some(store) => {
            let client = try_build_client()?;
            let repo = SupabaseWaitlistRepo::new(client, store)?;
            tracing::info!(endpoint = %repo.endpoint(), "Waitlist store configured");
            Some(Arc::new(repo) as Arc<dyn WaitlistRepo>)
        }
        None => None,
    };

    let waitlist_use_cases = WaitlistUseCases::new(waitlist_repo);

    Ok(AppState {
        config: Arc::new(config),
        waitlist_use_cases: Arc::new(waitlist_use_cases),
    })
}

pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "conexus=debug,tower_http=debug".into());

    // Console (pretty logs)
    let console_layer = fmt::layer()
        .with_target(false) // don’t show target (module path)
        .with_level(true)
        .pretty();

    // File (structured JSON logs), only when LOG_FILE is set
    let log_file = trimmed_var("LOG_FILE");
    let file_result = log_file.as_deref().map(File::create).transpose();
    let (json_layer, file_error) = match file_result {
        Ok(file) => (
            file.map(|f| {
                fmt::layer()
                    .json()
                    .with_writer(f)
                    .with_current_span(true)
                    .with_span_list(true)
            }),
            None,
        ),
        Err(err) => (None, Some(err)),
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(console_layer)
        .with(json_layer)
        .try_init()
        .ok();

    if let Some(err) = file_error {
        tracing::warn!(path = ?log_file, error = %err, "Cannot open log file; logging to console only");
    }
}
