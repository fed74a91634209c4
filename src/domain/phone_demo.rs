//! Navigation state for the phone demo.
//!
//! A demo shows one role's screens at a time. Every input (button, key, swipe or
//! a message posted by an embedded screen) is reduced to one of four moves: next,
//! previous, select a role, or jump to a screen id within the active role.

use serde::{Deserialize, Serialize};

use crate::domain::entities::demo_role::{RoleKey, Screen};

/// Horizontal travel, in CSS pixels, before a pointer drag counts as a swipe.
pub const SWIPE_THRESHOLD_PX: f64 = 40.0;

/// `type` tag an embedded screen uses to ask the demo to navigate.
pub const NAV_MESSAGE_TYPE: &str = "conexus-nav";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Default)]
pub struct DemoState {
    role: RoleKey,
    index: usize,
}

/// A single navigation input.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum DemoInput {
    Next,
    Prev,
    Role { role: RoleKey },
    GoTo { id: String },
    /// `KeyboardEvent.key` value.
    Key { key: String },
    /// Pointer travel between down and up.
    Swipe { dx: f64 },
    /// Raw `MessageEvent.data` from an embedded screen.
    Message { data: serde_json::Value },
}

impl DemoState {
    pub fn new(role: RoleKey) -> Self {
        Self { role, index: 0 }
    }

    /// Rebuilds a state from untrusted parts, wrapping an out-of-range index.
    pub fn restore(role: RoleKey, index: usize) -> Self {
        Self {
            role,
            index: index % role.config().total(),
        }
    }

    pub fn role(&self) -> RoleKey {
        self.role
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn total(&self) -> usize {
        self.role.config().total()
    }

    pub fn current_screen(&self) -> &'static Screen {
        &self.role.config().screens[self.index]
    }

    pub fn next(self) -> Self {
        Self {
            index: (self.index + 1) % self.total(),
            ..self
        }
    }

    pub fn prev(self) -> Self {
        let total = self.total();
        Self {
            index: (self.index + total - 1) % total,
            ..self
        }
    }

    /// Always lands on the role's first screen, even when re-selecting the active role.
    pub fn select_role(self, role: RoleKey) -> Self {
        Self::new(role)
    }

    /// Unknown ids, including ids belonging to another role, leave the state as is.
    pub fn go_to(self, id: &str) -> Self {
        match self.role.config().position(id) {
            Some(index) => Self { index, ..self },
            None => self,
        }
    }

    pub fn apply(self, input: &DemoInput) -> Self {
        match input {
            DemoInput::Next => self.next(),
            DemoInput::Prev => self.prev(),
            DemoInput::Role { role } => self.select_role(*role),
            DemoInput::GoTo { id } => self.go_to(id),
            DemoInput::Key { key } => self.on_key(key),
            DemoInput::Swipe { dx } => self.on_swipe(*dx),
            DemoInput::Message { data } => match nav_target(data) {
                Some(to) => self.go_to(to),
                None => self,
            },
        }
    }

    fn on_key(self, key: &str) -> Self {
        match key {
            "ArrowRight" => self.next(),
            "ArrowLeft" => self.prev(),
            other => match RoleKey::from_shortcut(other) {
                Some(role) => self.select_role(role),
                None => self,
            },
        }
    }

    fn on_swipe(self, dx: f64) -> Self {
        if dx.abs() <= SWIPE_THRESHOLD_PX {
            self
        } else if dx < 0.0 {
            self.next()
        } else {
            self.prev()
        }
    }
}

/// Extracts the target screen id from a `{ type: "conexus-nav", to }` message.
pub fn nav_target(data: &serde_json::Value) -> Option<&str> {
    let obj = data.as_object()?;
    if obj.get("type")?.as_str()? != NAV_MESSAGE_TYPE {
        return None;
    }
    obj.get("to")?.as_str().filter(|to| !to.is_empty())
}

/// Pixel geometry of the phone mock, derived from a requested height.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PhoneFrame {
    pub phone_height: u32,
    pub phone_width: u32,
    pub screen_height: u32,
}

impl PhoneFrame {
    pub const DEFAULT_HEIGHT: u32 = 980;
    pub const MIN_HEIGHT: u32 = 720;
    pub const MAX_HEIGHT: u32 = 1200;
    /// Padding between the phone edge and the screen, per side.
    pub const BEZEL: u32 = 14;

    pub fn from_height(requested: u32) -> Self {
        let phone_height = requested.clamp(Self::MIN_HEIGHT, Self::MAX_HEIGHT);
        // 19.5:9 aspect ratio
        let phone_width = (f64::from(phone_height) * 9.0 / 19.5).round() as u32;
        Self {
            phone_height,
            phone_width,
            screen_height: phone_height - Self::BEZEL * 2,
        }
    }
}

impl Default for PhoneFrame {
    fn default() -> Self {
        Self::from_height(Self::DEFAULT_HEIGHT)
    }
}
