//! Before/after value pair of an edited field

use serde::Deserialize;

/// A field's value before and after an edit
///
/// Both sides share the same type. Optional fields use `Change<Option<T>>`,
/// so either side can be "no value" independently of the other.
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
pub struct Change<T> {
    /// Value before the edit
    pub old: T,
    /// Value after the edit
    pub new: T,
}

impl<T> Change<T> {
    /// Create a change from its two sides
    pub fn new(old: T, new: T) -> Self {
        Self { old, new }
    }

    /// Apply the same conversion to both sides
    pub fn map<U>(&self, mut f: impl FnMut(&T) -> U) -> Change<U> {
        Change {
            old: f(&self.old),
            new: f(&self.new),
        }
    }
}

/// An edit field: `None` means the field is not part of the edit
pub type Field<T> = Option<Change<T>>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_map_applies_to_both_sides() {
        let change = Change::new(Some(3u32), None);
        let text = change.map(|v| v.map(|n| n.to_string()).unwrap_or_default());
        assert_eq!(text, Change::new("3".to_string(), String::new()));
    }

    #[test]
    fn test_deserialize_optional_sides() {
        let change: Change<Option<String>> =
            serde_json::from_str(r#"{"old": null, "new": "Warp"}"#).unwrap();
        assert_eq!(change.old, None);
        assert_eq!(change.new.as_deref(), Some("Warp"));
    }
}
