use serde::Serialize;

/// What the contact list screen should render.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "state", content = "count", rename_all = "snake_case")]
pub enum ListView {
    /// First snapshot has not arrived yet.
    Loading,
    /// Loaded, nothing stored.
    Empty,
    Populated(usize),
}
