//! In-memory mock implementations of the waitlist repository trait.

use async_trait::async_trait;
use std::sync::Mutex;

use crate::{
    app_error::{AppError, AppResult},
    application::use_cases::waitlist::{InsertOutcome, WaitlistRepo},
    domain::entities::waitlist_entry::WaitlistEntry,
};

/// In-memory implementation of WaitlistRepo with a unique email constraint.
#[derive(Default)]
pub struct InMemoryWaitlistRepo {
    pub rows: Mutex<Vec<WaitlistEntry>>,
}

impl InMemoryWaitlistRepo {
    pub fn new() -> Self {
        Self::default()
    }

    /// Get all rows (for test assertions).
    pub fn get_all(&self) -> Vec<WaitlistEntry> {
        self.rows.lock().unwrap().clone()
    }
}

#[async_trait]
impl WaitlistRepo for InMemoryWaitlistRepo {
    async fn insert(&self, entry: &WaitlistEntry) -> AppResult<InsertOutcome> {
        let mut rows = self.rows.lock().unwrap();
        if rows.iter().any(|r| r.email == entry.email) {
            return Ok(InsertOutcome::Duplicate);
        }
        rows.push(entry.clone());
        Ok(InsertOutcome::Inserted)
    }
}

/// Repo whose every insert fails with a database error.
pub struct FailingWaitlistRepo {
    message: String,
}

impl FailingWaitlistRepo {
    pub fn new(message: &str) -> Self {
        Self {
            message: message.to_string(),
        }
    }
}

#[async_trait]
impl WaitlistRepo for FailingWaitlistRepo {
    async fn insert(&self, _entry: &WaitlistEntry) -> AppResult<InsertOutcome> {
        Err(AppError::Database(self.message.clone()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_duplicate_email_reports_duplicate() {
        let repo = InMemoryWaitlistRepo::new();
        let entry = WaitlistEntry::new("a@b.co", None, None).unwrap();

        assert_eq!(repo.insert(&entry).await.unwrap(), InsertOutcome::Inserted);
        assert_eq!(repo.insert(&entry).await.unwrap(), InsertOutcome::Duplicate);
        assert_eq!(repo.get_all().len(), 1);
    }
}
