//! Top-level declarations: classes, interfaces, imports and files.

use crate::{
    AsNode, Constructor, Field, InterfaceField, InterfaceMethod, Javadoc, Method, Modifiers, Node,
    NodeRef, Type,
};

/// A class declaration.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Class {
    pub javadoc: Option<Javadoc>,
    pub modifiers: Modifiers,
    pub name: String,
    pub superclass: Option<Type>,
    pub interfaces: Vec<Type>,
    pub fields: Vec<Field>,
    pub constructors: Vec<Constructor>,
    pub methods: Vec<Method>,
}

impl Class {
    pub fn of(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    /// Set the superclass.
    pub fn extends(mut self, ty: Type) -> Self {
        self.superclass = Some(ty);
        self
    }

    /// Add an implemented interface.
    pub fn implements(mut self, ty: Type) -> Self {
        self.interfaces.push(ty);
        self
    }

    /// Add a field.
    pub fn field(mut self, field: Field) -> Self {
        self.fields.push(field);
        self
    }

    /// Add a constructor, naming it after this class.
    pub fn constructor(mut self, mut constructor: Constructor) -> Self {
        constructor.name = self.name.clone();
        self.constructors.push(constructor);
        self
    }

    /// Add a method.
    pub fn method(mut self, method: Method) -> Self {
        self.methods.push(method);
        self
    }

    /// Check if this class declares any member.
    pub fn has_members(&self) -> bool {
        !self.fields.is_empty() || !self.constructors.is_empty() || !self.methods.is_empty()
    }
}

/// An interface declaration.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Interface {
    pub javadoc: Option<Javadoc>,
    pub modifiers: Modifiers,
    pub name: String,
    pub extends: Vec<Type>,
    pub fields: Vec<InterfaceField>,
    pub methods: Vec<InterfaceMethod>,
}

impl Interface {
    pub fn of(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    /// Add a super-interface.
    pub fn extends(mut self, ty: Type) -> Self {
        self.extends.push(ty);
        self
    }

    /// Add a constant.
    pub fn field(mut self, field: InterfaceField) -> Self {
        self.fields.push(field);
        self
    }

    /// Add a method.
    pub fn method(mut self, method: InterfaceMethod) -> Self {
        self.methods.push(method);
        self
    }
}

/// An import statement.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Import {
    pub ty: Type,
    pub is_static: bool,
}

impl Import {
    pub fn of(ty: Type) -> Self {
        Self {
            ty,
            is_static: false,
        }
    }

    /// Make this a `static` import.
    pub fn static_(mut self) -> Self {
        self.is_static = true;
        self
    }
}

/// A top-level type declared in a file.
#[derive(Debug, Clone, PartialEq)]
pub enum Declaration {
    Class(Class),
    Interface(Interface),
}

impl Declaration {
    pub fn name(&self) -> &str {
        match self {
            Declaration::Class(c) => &c.name,
            Declaration::Interface(i) => &i.name,
        }
    }
}

impl AsNode for Declaration {
    fn as_node(&self) -> NodeRef<'_> {
        match self {
            Declaration::Class(c) => NodeRef::Class(c),
            Declaration::Interface(i) => NodeRef::Interface(i),
        }
    }
}

impl From<Class> for Declaration {
    fn from(class: Class) -> Self {
        Declaration::Class(class)
    }
}

impl From<Interface> for Declaration {
    fn from(interface: Interface) -> Self {
        Declaration::Interface(interface)
    }
}

impl From<Declaration> for Node {
    fn from(declaration: Declaration) -> Self {
        match declaration {
            Declaration::Class(c) => Node::Class(c),
            Declaration::Interface(i) => Node::Interface(i),
        }
    }
}

/// A compilation unit.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct File {
    /// Path of the file relative to the source root, e.g. `com/acme/User.java`.
    pub name: String,
    pub package: Option<String>,
    pub imports: Vec<Import>,
    pub declarations: Vec<Declaration>,
}

impl File {
    pub fn of(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    /// Set the package.
    pub fn package(mut self, package: impl Into<String>) -> Self {
        self.package = Some(package.into());
        self
    }

    /// Add an import, ignoring duplicates.
    pub fn import(mut self, import: Import) -> Self {
        if !self.imports.contains(&import) {
            self.imports.push(import);
        }
        self
    }

    /// Add a top-level declaration.
    pub fn declaration(mut self, declaration: impl Into<Declaration>) -> Self {
        self.declarations.push(declaration.into());
        self
    }
}

decorated!(Class, Interface);
