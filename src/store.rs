//! Persistent key-value settings store interface.
//!
//! Controls and dialogs never talk to storage directly; they receive a
//! `&mut dyn SettingsStore` from the caller. This keeps the widgets testable
//! (tests inject [`MemoryStore`]) and leaves the on-disk layout to whatever
//! backend the head unit ships with.
//!
//! Keys are opaque caller-defined strings. Values are strings; booleans are
//! encoded as `"0"` / `"1"`. Absent keys read back as the defaults
//! (`false` / empty string) rather than erroring.

use std::collections::HashMap;

/// Key-value settings storage used by param-backed controls and dialogs.
pub trait SettingsStore {
    /// Read a string value. Absent keys yield an empty string.
    fn get_string(&self, key: &str) -> String;

    /// Write a string value, replacing any previous value.
    fn put_string(&mut self, key: &str, value: &str);

    /// Read a boolean value. Anything other than a stored `"1"` reads as false,
    /// so absent keys default to false.
    fn get_bool(&self, key: &str) -> bool {
        self.get_string(key) == "1"
    }

    /// Write a boolean value, encoded as `"0"` / `"1"`.
    fn put_bool(&mut self, key: &str, value: bool) {
        self.put_string(key, if value { "1" } else { "0" });
    }
}

/// In-memory store for the simulator and for tests.
#[derive(Default)]
pub struct MemoryStore {
    values: HashMap<String, String>,
}

impl MemoryStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }
}

impl SettingsStore for MemoryStore {
    fn get_string(&self, key: &str) -> String {
        self.values.get(key).cloned().unwrap_or_default()
    }

    fn put_string(&mut self, key: &str, value: &str) {
        self.values.insert(key.to_owned(), value.to_owned());
    }
}
