//! Test app state builder for HTTP-level integration testing.

use std::sync::Arc;

use crate::{
    adapters::http::app_state::AppState,
    application::use_cases::waitlist::{WaitlistRepo, WaitlistUseCases},
    infra::config::AppConfig,
    test_utils::InMemoryWaitlistRepo,
};

/// Builder for creating `AppState` with in-memory mocks for testing.
///
/// # Example
///
/// ```ignore
/// let (app_state, repo) = TestAppStateBuilder::new().build_with_in_memory_store();
/// ```
pub struct TestAppStateBuilder {
    repo: Option<Arc<dyn WaitlistRepo>>,
}

impl TestAppStateBuilder {
    /// Create a builder with no store configured.
    pub fn new() -> Self {
        Self { repo: None }
    }

    /// Set a custom waitlist repo.
    pub fn with_repo(mut self, repo: Arc<dyn WaitlistRepo>) -> Self {
        self.repo = Some(repo);
        self
    }

    /// Create app state backed by an in-memory store.
    /// Returns the repo as well for test assertions.
    pub fn build_with_in_memory_store(self) -> (AppState, Arc<InMemoryWaitlistRepo>) {
        let repo = Arc::new(InMemoryWaitlistRepo::new());
        let app_state = self.with_repo(repo.clone()).build();
        (app_state, repo)
    }

    pub fn build(self) -> AppState {
        AppState {
            config: Arc::new(AppConfig::for_tests()),
            waitlist_use_cases: Arc::new(WaitlistUseCases::new(self.repo)),
        }
    }
}

impl Default for TestAppStateBuilder {
    fn default() -> Self {
        Self::new()
    }
}
