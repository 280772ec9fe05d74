use serde::Serialize;

/// Lifecycle of one guard evaluation cycle.
///
/// `Allowed` and `Redirecting` end the current cycle; `LoggedOut` ends the
/// session until the next login.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum GuardState {
    #[default]
    Init,
    Evaluating,
    Allowed,
    Redirecting,
    LoggedOut,
}

impl GuardState {
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Allowed | Self::Redirecting | Self::LoggedOut)
    }
}
