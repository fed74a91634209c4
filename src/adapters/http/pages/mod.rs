//! Server-rendered HTML pages.

pub mod demo;
pub mod landing;
pub mod layout;
pub mod phone_demo;
pub mod prototype;

use axum::{Router, routing::get};
use serde::Deserialize;

use crate::{
    adapters::http::app_state::AppState,
    domain::{entities::demo_role::RoleKey, phone_demo::DemoState},
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(landing::landing_page))
        .route("/demo", get(demo::demo_page))
        .route("/prototype", get(prototype::prototype_page))
}

/// Demo state carried in the query string. Every field is read leniently so a
/// hand-edited URL still renders a page.
#[derive(Debug, Default, Deserialize)]
pub struct DemoQuery {
    role: Option<String>,
    screen: Option<String>,
    height: Option<String>,
}

impl DemoQuery {
    pub fn state(&self) -> DemoState {
        let role: RoleKey = self
            .role
            .as_deref()
            .and_then(|r| r.parse().ok())
            .unwrap_or_default();
        let index = self
            .screen
            .as_deref()
            .and_then(|s| s.trim().parse::<usize>().ok())
            .unwrap_or(0);
        DemoState::restore(role, index)
    }

    pub fn height(&self) -> Option<u32> {
        self.height.as_deref().and_then(|h| h.trim().parse().ok())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn query(role: Option<&str>, screen: Option<&str>, height: Option<&str>) -> DemoQuery {
        DemoQuery {
            role: role.map(str::to_owned),
            screen: screen.map(str::to_owned),
            height: height.map(str::to_owned),
        }
    }

    #[test]
    fn empty_query_is_default_state() {
        assert_eq!(DemoQuery::default().state(), DemoState::default());
        assert_eq!(DemoQuery::default().height(), None);
    }

    #[test]
    fn unknown_role_falls_back_to_tenant() {
        let state = query(Some("investor"), Some("1"), None).state();
        assert_eq!(state.role(), RoleKey::Tenant);
        assert_eq!(state.index(), 1);
    }

    #[test]
    fn screen_wraps_and_garbage_is_zero() {
        assert_eq!(query(Some("landlord"), Some("6"), None).state().index(), 2);
        assert_eq!(query(Some("landlord"), Some("-1"), None).state().index(), 0);
        assert_eq!(query(Some("landlord"), Some("abc"), None).state().index(), 0);
    }

    #[test]
    fn height_parses_leniently() {
        assert_eq!(query(None, None, Some("900")).height(), Some(900));
        assert_eq!(query(None, None, Some("tall")).height(), None);
    }
}
