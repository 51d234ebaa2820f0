mod attachments;
mod login;
mod post_editor;
mod posts;
mod settings;
mod sidebar_layout;
mod storage_engines;

pub use attachments::Attachments;
pub use login::Login;
pub use post_editor::{PostEdit, PostNew};
pub use posts::Posts;
pub use settings::Settings;
pub use sidebar_layout::SidebarLayout;
pub use storage_engines::StorageEngines;

/// Trim a server timestamp down to its date part for table cells.
pub(crate) fn short_date(timestamp: &str) -> String {
    timestamp.get(..10).unwrap_or(timestamp).to_string()
}
