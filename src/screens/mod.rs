//! Full-screen views and modal dialog hosts.
//!
//! - [`settings`]: the main settings page (header + rows)
//! - [`text_entry`]: blocking host for [`crate::session::TextEntrySession`]
//! - [`confirmation`]: blocking host for [`crate::session::ConfirmationSession`]
//!
//! The dialog hosts implement the synchronous modal model: presenting a
//! session suspends the caller until the session resolves, and the host
//! returns the outcome as a plain value.

mod confirmation;
mod settings;
mod text_entry;

pub use confirmation::{run_alert, run_confirmation};
pub use settings::SettingsPage;
pub use text_entry::run_text_entry;
