//! Capability contracts for configuration entities.
//!
//! An entity either carries the backing field (and implements the trait)
//! or it does not; nothing is inferred from the presence of a key at query
//! time.

/// Entities identified by a required, non-empty name.
pub trait HasName {
    fn name(&self) -> &str;
}

/// Entities that can be switched off. Defaults to enabled when unset.
pub trait HasEnabled {
    fn is_enabled(&self) -> bool;
}

/// Entities that may be renamed in generated code.
pub trait HasAlias: HasName {
    fn alias(&self) -> Option<&str>;

    /// The alias if one is set, the name otherwise.
    fn java_name(&self) -> &str {
        self.alias().unwrap_or(self.name())
    }
}
