//! Test utilities for HTTP-level and use-case testing.
//!
//! This module provides:
//! - In-memory waitlist repositories for mocking the hosted store
//! - A builder that wires `AppState` with those mocks

mod app_state_builder;
mod waitlist_mocks;

pub use app_state_builder::*;
pub use waitlist_mocks::*;
