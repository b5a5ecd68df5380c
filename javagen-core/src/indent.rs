//! Indentation configuration for generated code.

use serde::Deserialize;

const SPACES: &str = "        ";

/// Indentation style for generated code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(try_from = "RawIndent")]
pub enum Indent {
    /// Spaces with the specified width (clamped to `1..=8`).
    Spaces(u8),
    /// Tab character.
    Tab,
}

impl Indent {
    /// 4-space indentation, the common Java style.
    pub const JAVA: Self = Self::Spaces(4);

    /// 2-space indentation.
    pub const COMPACT: Self = Self::Spaces(2);

    /// Convert to the string representation for one indent level.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Spaces(width) => &SPACES[..usize::from(*width).clamp(1, SPACES.len())],
            Self::Tab => "\t",
        }
    }
}

impl Default for Indent {
    fn default() -> Self {
        Self::JAVA
    }
}

/// Settings form: either a width (`indent = 2`) or `"tab"`.
#[derive(Deserialize)]
#[serde(untagged)]
enum RawIndent {
    Width(u8),
    Named(String),
}

impl TryFrom<RawIndent> for Indent {
    type Error = String;

    fn try_from(raw: RawIndent) -> Result<Self, Self::Error> {
        match raw {
            RawIndent::Width(0) => Err("indent width must be at least 1".to_string()),
            RawIndent::Width(width) if usize::from(width) > SPACES.len() => Err(format!(
                "indent width must be at most {}, got {}",
                SPACES.len(),
                width
            )),
            RawIndent::Width(width) => Ok(Self::Spaces(width)),
            RawIndent::Named(name) if name.eq_ignore_ascii_case("tab") => Ok(Self::Tab),
            RawIndent::Named(name) => Err(format!(
                "unknown indent style '{}', expected a width or \"tab\"",
                name
            )),
        }
    }
}
