//! Members: fields, methods and constructors.

use crate::{Javadoc, Modifiers, Type};

/// A class field, or a method/constructor parameter.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Field {
    pub javadoc: Option<Javadoc>,
    pub modifiers: Modifiers,
    pub ty: Option<Type>,
    pub name: String,
    /// Initializer expression, rendered after ` = `.
    pub value: Option<String>,
}

impl Field {
    /// Create a typed field.
    pub fn of(name: impl Into<String>, ty: Type) -> Self {
        Self {
            name: name.into(),
            ty: Some(ty),
            ..Self::default()
        }
    }

    /// Create a field without a type (e.g. a lambda parameter).
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    /// Set the initializer expression.
    pub fn value(mut self, value: impl Into<String>) -> Self {
        self.value = Some(value.into());
        self
    }
}

/// A constant declared inside an interface.
///
/// Interface fields are implicitly `public static final`; only the
/// modifiers a view chooses to print show up in the output.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct InterfaceField {
    pub javadoc: Option<Javadoc>,
    pub modifiers: Modifiers,
    pub ty: Option<Type>,
    pub name: String,
    pub value: Option<String>,
}

impl InterfaceField {
    /// Create a typed interface field.
    pub fn of(name: impl Into<String>, ty: Type) -> Self {
        Self {
            name: name.into(),
            ty: Some(ty),
            ..Self::default()
        }
    }

    /// Set the initializer expression.
    pub fn value(mut self, value: impl Into<String>) -> Self {
        self.value = Some(value.into());
        self
    }
}

impl From<Field> for InterfaceField {
    fn from(field: Field) -> Self {
        Self {
            javadoc: field.javadoc,
            modifiers: field.modifiers,
            ty: field.ty,
            name: field.name,
            value: field.value,
        }
    }
}

/// A class method.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Method {
    pub javadoc: Option<Javadoc>,
    pub modifiers: Modifiers,
    /// Return type; absent means `void`.
    pub ty: Option<Type>,
    pub name: String,
    pub params: Vec<Field>,
    pub throws: Vec<Type>,
    /// Body statements, one per line.
    pub body: Vec<String>,
}

impl Method {
    /// Create a method returning `ty`.
    pub fn of(name: impl Into<String>, ty: Type) -> Self {
        Self {
            name: name.into(),
            ty: Some(ty),
            ..Self::default()
        }
    }

    /// Create a `void` method.
    pub fn void(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    /// Add a parameter.
    pub fn param(mut self, param: Field) -> Self {
        self.params.push(param);
        self
    }

    /// Declare a thrown exception type.
    pub fn throws(mut self, ty: Type) -> Self {
        self.throws.push(ty);
        self
    }

    /// Append a body statement.
    pub fn add(mut self, line: impl Into<String>) -> Self {
        self.body.push(line.into());
        self
    }
}

/// A method declared inside an interface.
///
/// Only `default`, `static` and `private` interface methods carry a body.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct InterfaceMethod {
    pub javadoc: Option<Javadoc>,
    pub modifiers: Modifiers,
    pub ty: Option<Type>,
    pub name: String,
    pub params: Vec<Field>,
    pub throws: Vec<Type>,
    pub body: Vec<String>,
}

impl InterfaceMethod {
    /// Create an abstract interface method returning `ty`.
    pub fn of(name: impl Into<String>, ty: Type) -> Self {
        Self {
            name: name.into(),
            ty: Some(ty),
            ..Self::default()
        }
    }

    /// Add a parameter.
    pub fn param(mut self, param: Field) -> Self {
        self.params.push(param);
        self
    }

    /// Append a body statement.
    pub fn add(mut self, line: impl Into<String>) -> Self {
        self.body.push(line.into());
        self
    }

    /// Returns true if the method is `default`, `static` or `private`.
    pub fn has_body(&self) -> bool {
        use crate::Modifier;
        [Modifier::Default, Modifier::Static, Modifier::Private]
            .iter()
            .any(|m| self.modifiers.contains(m))
    }
}

impl From<Method> for InterfaceMethod {
    fn from(method: Method) -> Self {
        Self {
            javadoc: method.javadoc,
            modifiers: method.modifiers,
            ty: method.ty,
            name: method.name,
            params: method.params,
            throws: method.throws,
            body: method.body,
        }
    }
}

/// A constructor. `name` is the owning class name and is filled in when the
/// constructor is added to a [`Class`](crate::Class).
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Constructor {
    pub javadoc: Option<Javadoc>,
    pub modifiers: Modifiers,
    pub name: String,
    pub params: Vec<Field>,
    pub throws: Vec<Type>,
    pub body: Vec<String>,
}

impl Constructor {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a parameter.
    pub fn param(mut self, param: Field) -> Self {
        self.params.push(param);
        self
    }

    /// Append a body statement.
    pub fn add(mut self, line: impl Into<String>) -> Self {
        self.body.push(line.into());
        self
    }
}

decorated!(Field, InterfaceField, Method, InterfaceMethod, Constructor);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{HasJavadoc, HasModifiers, Modifier};

    #[test]
    fn test_field_builder() {
        let field = Field::of("count", Type::of("int"))
            .private()
            .final_()
            .value("0")
            .javadoc(Javadoc::of("Counter."));

        assert_eq!(field.name, "count");
        assert_eq!(field.value.as_deref(), Some("0"));
        assert!(field.modifiers.contains(&Modifier::Private));
        assert!(field.javadoc.is_some());
    }

    #[test]
    fn test_interface_field_from_field_keeps_modifiers() {
        let field = Field::of("ID", Type::string()).public().static_().final_();
        let interface_field = InterfaceField::from(field);
        assert_eq!(interface_field.modifiers.len(), 3);
        assert_eq!(interface_field.name, "ID");
    }

    #[test]
    fn test_method_builder() {
        let method = Method::of("getId", Type::of("long"))
            .public()
            .param(Field::of("x", Type::of("int")))
            .throws(Type::of("java.io.IOException"))
            .add("return id;");

        assert_eq!(method.params.len(), 1);
        assert_eq!(method.throws.len(), 1);
        assert_eq!(method.body, vec!["return id;"]);
        assert!(Method::void("run").ty.is_none());
    }

    #[test]
    fn test_interface_method_body_rule() {
        let abstract_method = InterfaceMethod::of("getId", Type::of("long"));
        assert!(!abstract_method.has_body());

        let default_method = InterfaceMethod::of("isNew", Type::of("boolean"))
            .default_()
            .add("return getId() == 0;");
        assert!(default_method.has_body());

        let private_method = InterfaceMethod::of("check", Type::of("boolean"))
            .private()
            .add("return true;");
        assert!(private_method.has_body());
    }
}
