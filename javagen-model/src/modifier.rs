//! Modifier keywords.

use std::collections::BTreeSet;

/// A Java modifier keyword.
///
/// The declaration order is the canonical order in which modifiers are
/// printed, so iterating a [`Modifiers`] set always yields
/// `public static final` no matter how the set was filled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Modifier {
    Public,
    Protected,
    Private,
    Abstract,
    Default,
    Static,
    Final,
    Transient,
    Volatile,
    Synchronized,
    Native,
    Strictfp,
}

impl Modifier {
    /// Every modifier, in canonical order.
    pub const ALL: [Modifier; 12] = [
        Modifier::Public,
        Modifier::Protected,
        Modifier::Private,
        Modifier::Abstract,
        Modifier::Default,
        Modifier::Static,
        Modifier::Final,
        Modifier::Transient,
        Modifier::Volatile,
        Modifier::Synchronized,
        Modifier::Native,
        Modifier::Strictfp,
    ];

    /// The literal keyword spelling.
    pub fn keyword(&self) -> &'static str {
        match self {
            Modifier::Public => "public",
            Modifier::Protected => "protected",
            Modifier::Private => "private",
            Modifier::Abstract => "abstract",
            Modifier::Default => "default",
            Modifier::Static => "static",
            Modifier::Final => "final",
            Modifier::Transient => "transient",
            Modifier::Volatile => "volatile",
            Modifier::Synchronized => "synchronized",
            Modifier::Native => "native",
            Modifier::Strictfp => "strictfp",
        }
    }

    /// Returns true for the three access modifiers.
    pub fn is_access(&self) -> bool {
        matches!(
            self,
            Modifier::Public | Modifier::Protected | Modifier::Private
        )
    }
}

impl std::fmt::Display for Modifier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.keyword())
    }
}

/// A set of modifiers; duplicates collapse and iteration is canonical.
pub type Modifiers = BTreeSet<Modifier>;

/// Fluent modifier setters shared by every node that carries modifiers.
pub trait HasModifiers: Sized {
    /// Mutable access to the modifier set.
    fn modifiers_mut(&mut self) -> &mut Modifiers;

    /// Add a single modifier.
    fn modifier(mut self, modifier: Modifier) -> Self {
        self.modifiers_mut().insert(modifier);
        self
    }

    /// Add several modifiers.
    fn modifiers(mut self, modifiers: impl IntoIterator<Item = Modifier>) -> Self {
        self.modifiers_mut().extend(modifiers);
        self
    }

    /// Make this node `public`, replacing any other access modifier.
    fn public(self) -> Self {
        self.access(Modifier::Public)
    }

    /// Make this node `protected`, replacing any other access modifier.
    fn protected(self) -> Self {
        self.access(Modifier::Protected)
    }

    /// Make this node `private`, replacing any other access modifier.
    fn private(self) -> Self {
        self.access(Modifier::Private)
    }

    /// Add `static`.
    fn static_(self) -> Self {
        self.modifier(Modifier::Static)
    }

    /// Add `final`.
    fn final_(self) -> Self {
        self.modifier(Modifier::Final)
    }

    /// Add `abstract`.
    fn abstract_(self) -> Self {
        self.modifier(Modifier::Abstract)
    }

    /// Add `default` (interface methods).
    fn default_(self) -> Self {
        self.modifier(Modifier::Default)
    }

    #[doc(hidden)]
    fn access(mut self, access: Modifier) -> Self {
        let modifiers = self.modifiers_mut();
        modifiers.retain(|m| !m.is_access());
        modifiers.insert(access);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Probe(Modifiers);

    impl HasModifiers for Probe {
        fn modifiers_mut(&mut self) -> &mut Modifiers {
            &mut self.0
        }
    }

    #[test]
    fn test_canonical_order_ignores_insertion_order() {
        let probe = Probe(Modifiers::new())
            .final_()
            .static_()
            .public();
        let keywords: Vec<_> = probe.0.iter().map(Modifier::keyword).collect();
        assert_eq!(keywords, vec!["public", "static", "final"]);
    }

    #[test]
    fn test_duplicates_collapse() {
        let probe = Probe(Modifiers::new()).final_().final_();
        assert_eq!(probe.0.len(), 1);
    }

    #[test]
    fn test_access_modifiers_are_exclusive() {
        let probe = Probe(Modifiers::new()).public().static_().private();
        assert!(probe.0.contains(&Modifier::Private));
        assert!(!probe.0.contains(&Modifier::Public));
        assert!(probe.0.contains(&Modifier::Static));
    }

    #[test]
    fn test_all_is_sorted() {
        let mut sorted = Modifier::ALL;
        sorted.sort();
        assert_eq!(sorted, Modifier::ALL);
        assert_eq!(Modifier::Synchronized.to_string(), "synchronized");
    }
}
