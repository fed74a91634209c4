use std::sync::Arc;

use async_trait::async_trait;
use tracing::instrument;

use crate::{
    app_error::{AppError, AppResult},
    domain::entities::waitlist_entry::WaitlistEntry,
};

/// What the store did with an insert that did not fail outright.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InsertOutcome {
    Inserted,
    /// A row with this email already exists.
    Duplicate,
}

#[async_trait]
pub trait WaitlistRepo: Send + Sync {
    async fn insert(&self, entry: &WaitlistEntry) -> AppResult<InsertOutcome>;
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WaitlistSubmission {
    pub email: Option<String>,
    pub name: Option<String>,
    pub role: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JoinOutcome {
    Joined,
    AlreadyJoined,
}

impl JoinOutcome {
    pub fn note(&self) -> Option<&'static str> {
        match self {
            JoinOutcome::Joined => None,
            JoinOutcome::AlreadyJoined => Some("Already joined"),
        }
    }
}

#[derive(Clone)]
pub struct WaitlistUseCases {
    repo: Option<Arc<dyn WaitlistRepo>>,
}

impl WaitlistUseCases {
    /// `repo` is `None` when the hosted store has not been configured.
    pub fn new(repo: Option<Arc<dyn WaitlistRepo>>) -> Self {
        Self { repo }
    }

    pub fn is_configured(&self) -> bool {
        self.repo.is_some()
    }

    #[instrument(skip(self, submission), fields(has_name = submission.name.is_some(), role = ?submission.role))]
    pub async fn join(&self, submission: WaitlistSubmission) -> AppResult<JoinOutcome> {
        // Checked before the payload so a misconfigured deploy always reports 500.
        let Some(repo) = &self.repo else {
            tracing::error!("Waitlist store is not configured");
            return Err(AppError::NotConfigured);
        };

        let email = submission
            .email
            .as_deref()
            .ok_or_else(|| AppError::InvalidInput("Valid email required".into()))?;
        let entry = WaitlistEntry::new(
            email,
            submission.name.as_deref(),
            submission.role.as_deref(),
        )?;

        match repo.insert(&entry).await? {
            InsertOutcome::Inserted => {
                tracing::info!("Waitlist signup stored");
                Ok(JoinOutcome::Joined)
            }
            InsertOutcome::Duplicate => {
                tracing::info!("Waitlist signup already present");
                Ok(JoinOutcome::AlreadyJoined)
            }
        }
    }
}
