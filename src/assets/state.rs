// src/assets/state.rs
// =============================================================================
// The per-asset `state` map handed to downstream plugins.
//
// Computed keys are written first, then the caller's base state is laid over
// the top. A caller that passes `filePath` gets its own value back, not ours.
// =============================================================================

use serde_json::{Map, Value};

use crate::github::FileStatus;

// String keys to JSON values; plugins read whatever keys they know about
pub type State = Map<String, Value>;

// Keys the resolver writes into every state map
pub mod keys {
    pub const COMPONENT_NAME: &str = "componentName";
    /// Only written for renames
    pub const COMPONENT_NAME_OLD: &str = "componentNameOld";
    pub const DIFF_TYPE: &str = "diffType";
    pub const FILE_PATH: &str = "filePath";
}

// Collects the computed fields for one asset before they become a map
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StateBuilder {
    component_name: String,
    component_name_old: Option<String>,
    diff_type: FileStatus,
    file_path: String,
}

impl StateBuilder {
    pub fn new(component_name: String, diff_type: FileStatus, file_path: String) -> Self {
        Self {
            component_name,
            component_name_old: None,
            diff_type,
            file_path,
        }
    }

    // None leaves the key out of the map entirely
    pub fn previous_name(mut self, name: Option<String>) -> Self {
        self.component_name_old = name;
        self
    }

    // Computed fields only
    pub fn computed(&self) -> State {
        let mut state = State::new();
        state.insert(keys::COMPONENT_NAME.into(), self.component_name.clone().into());

        // Absent, not null, for files that kept their name
        if let Some(old) = &self.component_name_old {
            state.insert(keys::COMPONENT_NAME_OLD.into(), old.clone().into());
        }

        // Stored as the wire string ("added", "renamed", ...)
        state.insert(keys::DIFF_TYPE.into(), self.diff_type.as_str().into());
        state.insert(keys::FILE_PATH.into(), self.file_path.clone().into());
        state
    }

    // Computed fields, then `base` on top
    pub fn build(self, base: &State) -> State {
        let mut state = self.computed();

        // insert() replaces existing keys, so the caller's value is the one left
        for (key, value) in base {
            state.insert(key.clone(), value.clone());
        }
        state
    }
}

// -----------------------------------------------------------------------------
// NOTES:
//
// 1. serde_json::Map
//    - A String -> Value map that serializes straight to a JSON object
//    - Value holds any JSON type, so callers can pass numbers, strings, arrays
//
// 2. `.into()` on the inserts
//    - &str and String both convert into Value::String via From
//    - The key side converts &'static str into String the same way
//
// 3. `build(self, ...)` takes self by value
//    - The builder is consumed, so one builder yields exactly one map
// -----------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_base_state_wins() {
        let mut base = State::new();
        base.insert("x".into(), json!(1));
        base.insert(keys::FILE_PATH.into(), json!("override.svg"));

        let state = StateBuilder::new("A".into(), FileStatus::Added, "a.svg".into()).build(&base);

        assert_eq!(state["x"], json!(1));
        assert_eq!(state[keys::FILE_PATH], json!("override.svg"));
        assert_eq!(state[keys::COMPONENT_NAME], json!("A"));
        assert_eq!(state[keys::DIFF_TYPE], json!("added"));
    }

    #[test]
    fn test_previous_name_only_when_renamed() {
        let plain = StateBuilder::new("A".into(), FileStatus::Modified, "a.svg".into())
            .previous_name(None)
            .build(&State::new());
        assert!(!plain.contains_key(keys::COMPONENT_NAME_OLD));
        assert_eq!(plain[keys::DIFF_TYPE], json!("modified"));

        let renamed = StateBuilder::new("B".into(), FileStatus::Renamed, "b.svg".into())
            .previous_name(Some("A".into()))
            .build(&State::new());
        assert_eq!(renamed[keys::COMPONENT_NAME_OLD], json!("A"));
        assert_eq!(renamed[keys::COMPONENT_NAME], json!("B"));
    }
}
