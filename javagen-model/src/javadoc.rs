//! Documentation comments.

/// A block tag such as `@param id the identifier`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JavadocTag {
    /// Tag name without the `@`.
    pub name: String,
    /// Optional tag value (the parameter name for `@param`).
    pub value: Option<String>,
    /// Free text after the value.
    pub text: String,
}

impl JavadocTag {
    /// Create a tag without a value, e.g. `@return the name`.
    pub fn new(name: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: None,
            text: text.into(),
        }
    }

    /// Create a tag with a value, e.g. `@param id the identifier`.
    pub fn with_value(
        name: impl Into<String>,
        value: impl Into<String>,
        text: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            value: Some(value.into()),
            text: text.into(),
        }
    }
}

/// A documentation comment: description lines followed by block tags.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Javadoc {
    pub lines: Vec<String>,
    pub tags: Vec<JavadocTag>,
}

impl Javadoc {
    /// Create a javadoc from text; embedded newlines become separate lines.
    pub fn of(text: impl AsRef<str>) -> Self {
        Self {
            lines: text.as_ref().lines().map(str::to_string).collect(),
            tags: Vec::new(),
        }
    }

    /// Append a description line.
    pub fn line(mut self, line: impl Into<String>) -> Self {
        self.lines.push(line.into());
        self
    }

    /// Append a block tag.
    pub fn tag(mut self, tag: JavadocTag) -> Self {
        self.tags.push(tag);
        self
    }

    /// Append an `@param` tag.
    pub fn param(self, name: impl Into<String>, text: impl Into<String>) -> Self {
        self.tag(JavadocTag::with_value("param", name, text))
    }

    /// Append an `@return` tag.
    pub fn returns(self, text: impl Into<String>) -> Self {
        self.tag(JavadocTag::new("return", text))
    }

    /// Returns true if there is neither text nor tags.
    pub fn is_empty(&self) -> bool {
        self.lines.iter().all(|l| l.trim().is_empty()) && self.tags.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_of_splits_lines() {
        let doc = Javadoc::of("First.\nSecond.");
        assert_eq!(doc.lines, vec!["First.", "Second."]);
        assert!(!doc.is_empty());
    }

    #[test]
    fn test_tags() {
        let doc = Javadoc::of("Sets the id.")
            .param("id", "the new id")
            .returns("this instance");
        assert_eq!(doc.tags.len(), 2);
        assert_eq!(doc.tags[0].value.as_deref(), Some("id"));
        assert_eq!(doc.tags[1].name, "return");
    }

    #[test]
    fn test_blank_javadoc_is_empty() {
        assert!(Javadoc::default().is_empty());
        assert!(Javadoc::of("  ").is_empty());
    }
}
