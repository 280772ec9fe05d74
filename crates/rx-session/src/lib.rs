//! Tenant session resolution for the pharmacy console.
//!
//! Decides which tenant a browser session may see by reconciling the
//! subdomain the browser is on with the tenant claim carried in the session
//! credential. Claims are read without signature verification: every
//! decision made here is a routing aid, never an authorization check. The
//! backend validates the credential on each API call.

pub mod auth_headers;
pub mod base_origin;
pub mod claims;
pub mod claims_reader;
pub mod decision;
pub mod error;
pub mod file_session_store;
pub mod guard_state;
pub mod host_detector;
pub mod memory_session_store;
pub mod navigator;
pub mod page_location;
pub mod recording_navigator;
pub mod session_shell;
pub mod session_store;
pub mod tenant_guard;

pub use auth_headers::AuthHeaders;
pub use base_origin::BaseOrigin;
pub use claims::Claims;
pub use decision::{Decision, RedirectTarget};
pub use error::{Result, SessionError};
pub use file_session_store::FileSessionStore;
pub use guard_state::GuardState;
pub use host_detector::HostDetection;
pub use memory_session_store::MemorySessionStore;
pub use navigator::Navigator;
pub use page_location::PageLocation;
pub use recording_navigator::{Navigation, RecordingNavigator};
pub use session_shell::SessionShell;
pub use session_store::{SessionStore, keys};
pub use tenant_guard::TenantConsistencyGuard;

/// Route every consistency redirect lands on.
pub const DEFAULT_DASHBOARD_PATH: &str = "/dashboard";

/// Query parameter carrying a credential across an origin change.
pub const TOKEN_QUERY_PARAM: &str = "token";

#[cfg(test)]
mod tests;
