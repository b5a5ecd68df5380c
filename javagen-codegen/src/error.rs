use javagen_model::NodeKind;
use miette::Diagnostic;
use thiserror::Error;

/// Result type for rendering operations.
pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Clone, PartialEq, Eq, Error, Diagnostic)]
pub enum Error {
    /// A node violates the required-field invariant of its kind.
    #[error("malformed {kind}: {reason}")]
    #[diagnostic(
        code(javagen::malformed_model),
        help("the model builder produced an invalid node; fix it before rendering")
    )]
    MalformedModel { kind: NodeKind, reason: String },

    /// A multi-node render observed its cancellation token.
    #[error("rendering cancelled after {completed} of {total} nodes")]
    #[diagnostic(code(javagen::cancelled))]
    Cancelled { completed: usize, total: usize },

    /// The completeness check found kinds without a transform.
    #[error("no transform registered for {}", .kinds.iter().map(NodeKind::as_str).collect::<Vec<_>>().join(", "))]
    #[diagnostic(code(javagen::incomplete_registry))]
    Incomplete { kinds: Vec<NodeKind> },
}

impl Error {
    pub fn malformed(kind: NodeKind, reason: impl Into<String>) -> Self {
        Error::MalformedModel {
            kind,
            reason: reason.into(),
        }
    }

    /// Returns true if this error is a cancellation.
    pub fn is_cancelled(&self) -> bool {
        matches!(self, Error::Cancelled { .. })
    }
}

/// Check that a required name is present.
pub fn require_name(kind: NodeKind, name: &str) -> Result<&str> {
    if name.trim().is_empty() {
        Err(Error::malformed(kind, "name must not be empty"))
    } else {
        Ok(name)
    }
}
