//! Confirmation session: a yes/no/acknowledge prompt.
//!
//! Much simpler than text entry - the only state is pending/resolved(bool).
//! An empty button label means that action is unavailable and the dialog
//! renders no button for it, which is how the single-button acknowledge
//! variant works (confirm label only, no cancel path).

/// One modal confirmation invocation.
pub struct ConfirmationSession {
    prompt: &'static str,
    confirm_label: &'static str,
    cancel_label: &'static str,
    resolved: Option<bool>,
}

impl ConfirmationSession {
    /// Open a prompt with explicit button labels. An empty label removes
    /// that button.
    pub fn open(prompt: &'static str, confirm_label: &'static str, cancel_label: &'static str) -> Self {
        Self {
            prompt,
            confirm_label,
            cancel_label,
            resolved: None,
        }
    }

    /// Two-button yes/no prompt with the standard labels.
    pub fn confirm(prompt: &'static str) -> Self {
        Self::open(prompt, "Confirm", "Cancel")
    }

    /// Single-button acknowledge prompt ("Ok", no cancel path).
    pub fn alert(prompt: &'static str) -> Self {
        Self::open(prompt, "Ok", "")
    }

    /// Prompt text shown on the card.
    pub fn prompt(&self) -> &str {
        self.prompt
    }

    /// Confirm button label ("" when the button is absent).
    pub fn confirm_label(&self) -> &str {
        self.confirm_label
    }

    /// Cancel button label ("" when the button is absent).
    pub fn cancel_label(&self) -> &str {
        self.cancel_label
    }

    /// Whether the confirm button exists.
    pub fn has_confirm(&self) -> bool {
        !self.confirm_label.is_empty()
    }

    /// Whether the cancel button exists.
    pub fn has_cancel(&self) -> bool {
        !self.cancel_label.is_empty()
    }

    /// Resolve as confirmed. Only the first resolution counts.
    pub fn resolve_confirmed(&mut self) {
        if self.resolved.is_none() {
            self.resolved = Some(true);
        }
    }

    /// Resolve as rejected (cancel button or window close).
    pub fn resolve_rejected(&mut self) {
        if self.resolved.is_none() {
            self.resolved = Some(false);
        }
    }

    /// `Some(confirmed)` once resolved, `None` while pending.
    pub fn resolution(&self) -> Option<bool> {
        self.resolved
    }

    /// True once resolved either way.
    pub fn is_terminal(&self) -> bool {
        self.resolved.is_some()
    }
}
