//! Generation settings read from the project's `settings` table.

use javagen_core::Indent;
use serde::Deserialize;

/// Output settings shared by every view.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "camelCase", deny_unknown_fields)]
pub struct Settings {
    /// Indentation of block bodies.
    pub indent: Indent,
    /// Generate an implementation class next to every entity interface.
    pub generate_implementations: bool,
    /// Suffix appended to implementation class names.
    pub implementation_suffix: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            indent: Indent::default(),
            generate_implementations: true,
            implementation_suffix: "Impl".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn test_defaults_fill_missing_keys() {
        let settings: Settings = serde_json::from_value(json!({ "indent": 2 })).unwrap();
        assert_eq!(settings.indent, Indent::Spaces(2));
        assert!(settings.generate_implementations);
        assert_eq!(settings.implementation_suffix, "Impl");
    }

    #[test]
    fn test_unknown_keys_are_rejected() {
        assert!(serde_json::from_value::<Settings>(json!({ "indnet": 2 })).is_err());
    }
}
