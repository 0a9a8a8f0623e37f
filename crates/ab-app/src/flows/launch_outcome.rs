use serde::Serialize;

/// Where the launcher sends the user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum LaunchOutcome {
    LoggedIn { email: String },
    LoggedOut,
}

impl LaunchOutcome {
    pub fn is_logged_in(&self) -> bool {
        matches!(self, Self::LoggedIn { .. })
    }
}
