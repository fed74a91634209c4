use serde::{Deserialize, Serialize};

/// Which user's view the phone demo is showing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum RoleKey {
    Landlord,
    #[default]
    Tenant,
    Contractor,
}

impl RoleKey {
    /// Switcher order, which is also the `1`/`2`/`3` shortcut order.
    pub const ALL: [RoleKey; 3] = [RoleKey::Landlord, RoleKey::Tenant, RoleKey::Contractor];

    pub fn as_str(&self) -> &'static str {
        match self {
            RoleKey::Landlord => "landlord",
            RoleKey::Tenant => "tenant",
            RoleKey::Contractor => "contractor",
        }
    }

    /// Role selected by a digit shortcut key.
    pub fn from_shortcut(key: &str) -> Option<Self> {
        match key {
            "1" => Some(RoleKey::Landlord),
            "2" => Some(RoleKey::Tenant),
            "3" => Some(RoleKey::Contractor),
            _ => None,
        }
    }

    pub fn config(&self) -> &'static RoleConfig {
        match self {
            RoleKey::Landlord => &LANDLORD,
            RoleKey::Tenant => &TENANT,
            RoleKey::Contractor => &CONTRACTOR,
        }
    }
}

impl std::fmt::Display for RoleKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for RoleKey {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "landlord" => Ok(RoleKey::Landlord),
            "tenant" => Ok(RoleKey::Tenant),
            "contractor" => Ok(RoleKey::Contractor),
            _ => Err(format!(
                "Invalid role: {}. Must be 'landlord', 'tenant' or 'contractor'",
                s
            )),
        }
    }
}

/// Where a screen's content comes from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum ScreenSource {
    /// Standalone HTML page embedded in an iframe.
    Frame { src: &'static str },
    /// Static screenshot.
    Image { src: &'static str },
    /// Rendered in place by the page.
    Inline { title: &'static str, body: &'static str },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Screen {
    pub id: &'static str,
    pub label: &'static str,
    pub source: ScreenSource,
}

#[derive(Debug, Serialize)]
pub struct RoleConfig {
    pub display_name: &'static str,
    pub color: &'static str,
    pub screens: &'static [Screen],
}

impl RoleConfig {
    pub fn total(&self) -> usize {
        self.screens.len()
    }

    pub fn position(&self, id: &str) -> Option<usize> {
        self.screens.iter().position(|s| s.id == id)
    }
}

const fn frame(id: &'static str, label: &'static str, src: &'static str) -> Screen {
    Screen {
        id,
        label,
        source: ScreenSource::Frame { src },
    }
}

static LANDLORD: RoleConfig = RoleConfig {
    display_name: "Landlords",
    color: "#EDDC0B",
    screens: &[
        frame("l-01", "PM Dashboard", "/interactive/landlord/pm-dashboard-mobile.html"),
        frame("l-02", "Work Order", "/interactive/landlord/pm-job.html"),
        frame("l-03", "Messages", "/interactive/landlord/pm-messages.html"),
        frame("l-04", "Analytics", "/interactive/landlord/pm-analytics.html"),
    ],
};

static TENANT: RoleConfig = RoleConfig {
    display_name: "Tenants",
    color: "#4ADE80",
    screens: &[
        frame("t-01", "Home", "/interactive/tenant/tenant-home.html"),
        frame("t-02", "New Request", "/interactive/tenant/tenant-form.html"),
    ],
};

static CONTRACTOR: RoleConfig = RoleConfig {
    display_name: "Contractors",
    color: "#60A5FA",
    screens: &[
        frame("c-01", "Feed", "/interactive/contractor/contractor-feed.html"),
        frame("c-02", "Profile", "/interactive/contractor/contractor-profile.html"),
        frame("c-03", "Job", "/interactive/contractor/contractor-job.html"),
        frame("c-04", "Earnings", "/interactive/contractor/contractor-earnings.html"),
        frame("c-05", "Quote", "/interactive/contractor/contractor-quote.html"),
    ],
};
