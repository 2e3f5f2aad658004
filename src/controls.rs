//! Settings row model: labeled rows, button rows, and param-backed toggles.
//!
//! Rows are plain data; the settings screen draws them and resolves taps, and
//! `main` performs the resulting actions. There is no signal/slot wiring -
//! each row kind names exactly what a tap does, and the store is passed in by
//! whoever handles the tap.
//!
//! The toggle rows follow the param-control pattern: the switch position is
//! always read from the settings store (so it reflects external changes) and
//! every flip is written straight back.

use crate::session::NumericConstraint;
use crate::store::SettingsStore;

/// Fractional digits allowed by numeric-entry rows.
pub const CONFIG_DECIMAL_PLACES: u32 = 4;

/// Where a label row's value text comes from.
#[derive(Clone, Copy)]
pub enum LabelValue {
    /// Fixed text (e.g. a firmware version).
    Static(&'static str),
    /// Read from the settings store on every draw.
    Param(&'static str),
}

/// What a settings row shows and what tapping it does.
pub enum EntryKind {
    /// Title + right-aligned value text. Taps do nothing.
    Label { value: LabelValue },

    /// Title + toggle switch bound to a boolean param.
    Toggle { param: &'static str },

    /// Title + button opening a text-entry dialog; the accepted text is
    /// written to `param`.
    TextEntry {
        caption: &'static str,
        param: &'static str,
        prompt: &'static str,
        min_length: usize,
    },

    /// Title + button opening a numeric-entry dialog; the accepted value is
    /// written to `param` as its text form.
    NumericEntry {
        caption: &'static str,
        param: &'static str,
        prompt: &'static str,
        min: f32,
        max: f32,
    },

    /// Title + button opening a confirmation prompt; on confirm, the given
    /// boolean param is raised for the dashboard process to pick up.
    Confirm {
        caption: &'static str,
        prompt: &'static str,
        request_param: &'static str,
    },
}

/// One row on the settings page.
pub struct SettingsEntry {
    pub title: &'static str,
    pub kind: EntryKind,
}

impl EntryKind {
    /// Numeric constraint for a numeric-entry row.
    pub fn numeric_constraint(&self) -> Option<NumericConstraint> {
        match self {
            Self::NumericEntry { min, max, .. } => Some(NumericConstraint {
                min: *min,
                max: *max,
                decimal_places: CONFIG_DECIMAL_PLACES,
            }),
            _ => None,
        }
    }
}

/// Flip a boolean param and return the new state.
pub fn flip_param(store: &mut dyn SettingsStore, param: &str) -> bool {
    let flipped = !store.get_bool(param);
    store.put_bool(param, flipped);
    flipped
}

/// Resolve a label row's value text against the store.
pub fn label_text(value: LabelValue, store: &dyn SettingsStore) -> String {
    match value {
        LabelValue::Static(text) => text.to_owned(),
        LabelValue::Param(param) => store.get_string(param),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::MemoryStore;

    #[test]
    fn test_flip_param_writes_back() {
        let mut store = MemoryStore::new();
        assert!(flip_param(&mut store, "ShowFps"), "absent param flips false -> true");
        assert!(store.get_bool("ShowFps"), "flip must persist");
        assert!(!flip_param(&mut store, "ShowFps"));
        assert!(!store.get_bool("ShowFps"));
    }

    #[test]
    fn test_label_text_sources() {
        let mut store = MemoryStore::new();
        store.put_string("VehicleName", "Leon Cupra");
        assert_eq!(label_text(LabelValue::Param("VehicleName"), &store), "Leon Cupra");
        assert_eq!(label_text(LabelValue::Static("v1.2.0"), &store), "v1.2.0");
        assert_eq!(label_text(LabelValue::Param("Missing"), &store), "");
    }

    #[test]
    fn test_numeric_entry_constraint() {
        let kind = EntryKind::NumericEntry {
            caption: "SET",
            param: "BoostWarnBar",
            prompt: "Boost warn level (bar)",
            min: 0.0,
            max: 3.0,
        };
        let constraint = kind.numeric_constraint().expect("numeric rows carry a constraint");
        assert!(constraint.accepts("1.5"));
        assert!(!constraint.accepts("3.5"));

        let toggle = EntryKind::Toggle { param: "ShowFps" };
        assert!(toggle.numeric_constraint().is_none());
    }
}
