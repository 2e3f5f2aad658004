//! Modal session state machines.
//!
//! Sessions own the state of one modal dialog invocation and nothing else:
//! no drawing, no storage, no window handling. The screens in
//! [`crate::screens`] run them to completion synchronously, the widgets in
//! [`crate::widgets`] render their state each frame.
//!
//! - [`text_entry::TextEntrySession`]: text buffer + on-screen keyboard
//!   token interpretation + accept-time validation
//! - [`confirmation::ConfirmationSession`]: yes/no/acknowledge prompt

pub mod confirmation;
pub mod text_entry;

pub use confirmation::ConfirmationSession;
pub use text_entry::{NumericConstraint, Outcome, TextEntrySession};
