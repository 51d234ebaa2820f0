//! Shared reactive state for the Bramble admin: the session container and
//! its operations, the navigation guard decision, and persisted UI
//! preferences. The web shell provides these through context and wires them
//! to the route table.

pub mod guard;
pub mod prefs;
pub mod session;

pub use guard::{GuardDecision, RouteClass};
pub use prefs::{apply_theme, use_prefs, Prefs, PrefsProvider, Theme};
pub use session::{use_api, use_session, SessionProvider, SessionState};
