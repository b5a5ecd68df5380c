//! Type references.

/// A reference to a Java type, e.g. `java.util.Optional<String>[]`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Type {
    /// Simple (`String`) or fully qualified (`java.util.List`) name.
    pub name: String,
    /// Generic type arguments.
    pub arguments: Vec<Type>,
    /// Number of trailing `[]`.
    pub array_dimension: u8,
}

const PRIMITIVES: [(&str, &str); 8] = [
    ("boolean", "java.lang.Boolean"),
    ("byte", "java.lang.Byte"),
    ("char", "java.lang.Character"),
    ("short", "java.lang.Short"),
    ("int", "java.lang.Integer"),
    ("long", "java.lang.Long"),
    ("float", "java.lang.Float"),
    ("double", "java.lang.Double"),
];

impl Type {
    /// Create a type reference by name.
    pub fn of(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            arguments: Vec::new(),
            array_dimension: 0,
        }
    }

    /// Add a generic argument.
    pub fn argument(mut self, argument: Type) -> Self {
        self.arguments.push(argument);
        self
    }

    /// Add one array dimension, saturating at `u8::MAX`.
    pub fn array(mut self) -> Self {
        self.array_dimension = self.array_dimension.saturating_add(1);
        self
    }

    /// Convenience: `java.lang.String`.
    pub fn string() -> Self {
        Self::of("java.lang.String")
    }

    /// Convenience: `void`.
    pub fn void() -> Self {
        Self::of("void")
    }

    /// Wrap `inner` in `java.util.Optional`.
    pub fn optional(inner: Type) -> Self {
        Self::of("java.util.Optional").argument(inner.boxed())
    }

    /// The name after the last `.`.
    pub fn simple_name(&self) -> &str {
        self.name.rsplit('.').next().unwrap_or(&self.name)
    }

    /// The package part of a qualified name, if any.
    pub fn package(&self) -> Option<&str> {
        self.name.rsplit_once('.').map(|(package, _)| package)
    }

    /// Returns true if this is a primitive (non-array) type.
    pub fn is_primitive(&self) -> bool {
        self.array_dimension == 0 && PRIMITIVES.iter().any(|(p, _)| *p == self.name)
    }

    /// Returns true if this type lives in `java.lang` (imported implicitly).
    pub fn is_java_lang(&self) -> bool {
        self.package() == Some("java.lang")
    }

    /// Returns true if an import is required to reference this type by its
    /// simple name.
    pub fn needs_import(&self) -> bool {
        self.package().is_some() && !self.is_java_lang()
    }

    /// The wrapper type for primitives, `self` otherwise.
    pub fn boxed(self) -> Self {
        if !self.is_primitive() {
            return self;
        }
        PRIMITIVES
            .iter()
            .find(|(p, _)| *p == self.name)
            .map(|(_, boxed)| Self::of(*boxed))
            .unwrap_or(self)
    }

    /// This type and all nested generic arguments, depth first.
    pub fn walk(&self) -> Vec<&Type> {
        let mut types = vec![self];
        for argument in &self.arguments {
            types.extend(argument.walk());
        }
        types
    }
}
