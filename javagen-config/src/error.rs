use miette::{Diagnostic, NamedSource, SourceSpan};
use thiserror::Error;

/// Result type for configuration operations (boxed to reduce size on stack)
pub type Result<T> = std::result::Result<T, Box<Error>>;

#[derive(Debug, Error, Diagnostic)]
pub enum Error {
    #[error("failed to parse '{filename}' as TOML")]
    #[diagnostic(code(javagen::parse_error))]
    Toml {
        filename: String,
        #[source_code]
        src: NamedSource<String>,
        #[label("parse error here")]
        span: Option<SourceSpan>,
        #[source]
        source: toml::de::Error,
    },

    #[error("failed to parse '{filename}' as JSON")]
    #[diagnostic(code(javagen::parse_error))]
    Json {
        filename: String,
        #[source_code]
        src: NamedSource<String>,
        #[label("parse error here")]
        span: Option<SourceSpan>,
        #[source]
        source: serde_json::Error,
    },

    #[error("configuration root must be an object, found {found}")]
    #[diagnostic(code(javagen::invalid_root))]
    InvalidRoot { found: &'static str },

    #[error("missing required attribute '{key}' on {location}")]
    #[diagnostic(code(javagen::missing_attribute))]
    MissingAttribute { key: String, location: String },

    #[error("attribute '{key}' on {location} must be {expected}")]
    #[diagnostic(code(javagen::invalid_attribute))]
    InvalidAttribute {
        key: String,
        location: String,
        expected: &'static str,
    },

    #[error("invalid settings on {location}")]
    #[diagnostic(code(javagen::invalid_settings))]
    InvalidSettings {
        location: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("unknown type mapper '{identifier}'")]
    #[diagnostic(
        code(javagen::unknown_type_mapper),
        help("registered type mappers are: {known}")
    )]
    UnknownTypeMapper { identifier: String, known: String },

    #[error("columns '{first}' and '{second}' on {location} both map to Java member '{member}'")]
    #[diagnostic(
        code(javagen::duplicate_member),
        help("give one of the columns an alias")
    )]
    DuplicateMember {
        member: String,
        first: String,
        second: String,
        location: String,
    },
}

impl Error {
    /// Create a TOML parse error with source context.
    pub fn toml(source: toml::de::Error, src: &str, filename: &str) -> Box<Self> {
        let span = source.span().map(SourceSpan::from);
        Box::new(Error::Toml {
            filename: filename.to_string(),
            src: NamedSource::new(filename, src.to_string()),
            span,
            source,
        })
    }

    /// Create a JSON parse error with source context.
    pub fn json(source: serde_json::Error, src: &str, filename: &str) -> Box<Self> {
        let span = offset_of(src, source.line(), source.column()).map(|o| SourceSpan::from(o..o));
        Box::new(Error::Json {
            filename: filename.to_string(),
            src: NamedSource::new(filename, src.to_string()),
            span,
            source,
        })
    }

    pub fn missing(key: impl Into<String>, location: impl Into<String>) -> Box<Self> {
        Box::new(Error::MissingAttribute {
            key: key.into(),
            location: location.into(),
        })
    }

    pub fn invalid(
        key: impl Into<String>,
        location: impl Into<String>,
        expected: &'static str,
    ) -> Box<Self> {
        Box::new(Error::InvalidAttribute {
            key: key.into(),
            location: location.into(),
            expected,
        })
    }
}

/// Byte offset of a 1-based line/column pair, as reported by serde_json.
fn offset_of(src: &str, line: usize, column: usize) -> Option<usize> {
    if line == 0 {
        return None;
    }
    let line_start: usize = src
        .split_inclusive('\n')
        .take(line - 1)
        .map(str::len)
        .sum();
    Some((line_start + column.saturating_sub(1)).min(src.len()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_offset_of() {
        let src = "{\n  \"a\": ,\n}";
        assert_eq!(offset_of(src, 1, 1), Some(0));
        assert_eq!(offset_of(src, 2, 8), Some(9));
        assert_eq!(offset_of(src, 0, 0), None);
    }

    #[test]
    fn test_unknown_type_mapper_message() {
        let err = Error::UnknownTypeMapper {
            identifier: "unknown.Mapper".to_string(),
            known: "standard".to_string(),
        };
        assert_eq!(err.to_string(), "unknown type mapper 'unknown.Mapper'");
    }

    #[test]
    fn test_duplicate_member_message() {
        let err = Error::DuplicateMember {
            member: "userId".to_string(),
            first: "user_id".to_string(),
            second: "userId".to_string(),
            location: "dbmses[0].schemas[0].tables[0]".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "columns 'user_id' and 'userId' on dbmses[0].schemas[0].tables[0] both map to Java member 'userId'"
        );
    }
}
