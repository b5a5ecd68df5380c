//! Node kinds and the owned/borrowed sum types over them.

use crate::{
    Class, Constructor, Field, File, Import, Interface, InterfaceField, InterfaceMethod, Javadoc,
    Method, Type,
};

/// Discriminant of a model node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum NodeKind {
    File,
    Import,
    Class,
    Interface,
    Field,
    InterfaceField,
    Method,
    InterfaceMethod,
    Constructor,
    Javadoc,
    Type,
}

impl NodeKind {
    /// Every declared kind.
    pub const ALL: [NodeKind; 11] = [
        NodeKind::File,
        NodeKind::Import,
        NodeKind::Class,
        NodeKind::Interface,
        NodeKind::Field,
        NodeKind::InterfaceField,
        NodeKind::Method,
        NodeKind::InterfaceMethod,
        NodeKind::Constructor,
        NodeKind::Javadoc,
        NodeKind::Type,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            NodeKind::File => "File",
            NodeKind::Import => "Import",
            NodeKind::Class => "Class",
            NodeKind::Interface => "Interface",
            NodeKind::Field => "Field",
            NodeKind::InterfaceField => "InterfaceField",
            NodeKind::Method => "Method",
            NodeKind::InterfaceMethod => "InterfaceMethod",
            NodeKind::Constructor => "Constructor",
            NodeKind::Javadoc => "Javadoc",
            NodeKind::Type => "Type",
        }
    }
}

impl std::fmt::Display for NodeKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An owned model node.
#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    File(File),
    Import(Import),
    Class(Class),
    Interface(Interface),
    Field(Field),
    InterfaceField(InterfaceField),
    Method(Method),
    InterfaceMethod(InterfaceMethod),
    Constructor(Constructor),
    Javadoc(Javadoc),
    Type(Type),
}

/// A borrowed model node.
///
/// This is what transforms receive, so that a parent can hand its typed
/// children to the generator without cloning them into a [`Node`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum NodeRef<'a> {
    File(&'a File),
    Import(&'a Import),
    Class(&'a Class),
    Interface(&'a Interface),
    Field(&'a Field),
    InterfaceField(&'a InterfaceField),
    Method(&'a Method),
    InterfaceMethod(&'a InterfaceMethod),
    Constructor(&'a Constructor),
    Javadoc(&'a Javadoc),
    Type(&'a Type),
}

impl NodeRef<'_> {
    /// The kind of the referenced node.
    pub fn kind(&self) -> NodeKind {
        match self {
            NodeRef::File(_) => NodeKind::File,
            NodeRef::Import(_) => NodeKind::Import,
            NodeRef::Class(_) => NodeKind::Class,
            NodeRef::Interface(_) => NodeKind::Interface,
            NodeRef::Field(_) => NodeKind::Field,
            NodeRef::InterfaceField(_) => NodeKind::InterfaceField,
            NodeRef::Method(_) => NodeKind::Method,
            NodeRef::InterfaceMethod(_) => NodeKind::InterfaceMethod,
            NodeRef::Constructor(_) => NodeKind::Constructor,
            NodeRef::Javadoc(_) => NodeKind::Javadoc,
            NodeRef::Type(_) => NodeKind::Type,
        }
    }

    /// Clone the referenced node into an owned [`Node`].
    pub fn to_owned_node(&self) -> Node {
        match *self {
            NodeRef::File(n) => Node::File(n.clone()),
            NodeRef::Import(n) => Node::Import(n.clone()),
            NodeRef::Class(n) => Node::Class(n.clone()),
            NodeRef::Interface(n) => Node::Interface(n.clone()),
            NodeRef::Field(n) => Node::Field(n.clone()),
            NodeRef::InterfaceField(n) => Node::InterfaceField(n.clone()),
            NodeRef::Method(n) => Node::Method(n.clone()),
            NodeRef::InterfaceMethod(n) => Node::InterfaceMethod(n.clone()),
            NodeRef::Constructor(n) => Node::Constructor(n.clone()),
            NodeRef::Javadoc(n) => Node::Javadoc(n.clone()),
            NodeRef::Type(n) => Node::Type(n.clone()),
        }
    }
}

/// Anything the generator can dispatch on.
pub trait AsNode {
    /// Borrow this value as a node.
    fn as_node(&self) -> NodeRef<'_>;

    /// The kind of this node.
    fn kind(&self) -> NodeKind {
        self.as_node().kind()
    }
}

/// A concrete node struct with a statically known kind.
pub trait Model: AsNode {
    /// The kind every value of this type has.
    const KIND: NodeKind;

    /// Narrow a borrowed node to this type, if the kinds match.
    fn from_node(node: NodeRef<'_>) -> Option<&Self>;
}

impl AsNode for Node {
    fn as_node(&self) -> NodeRef<'_> {
        match self {
            Node::File(n) => NodeRef::File(n),
            Node::Import(n) => NodeRef::Import(n),
            Node::Class(n) => NodeRef::Class(n),
            Node::Interface(n) => NodeRef::Interface(n),
            Node::Field(n) => NodeRef::Field(n),
            Node::InterfaceField(n) => NodeRef::InterfaceField(n),
            Node::Method(n) => NodeRef::Method(n),
            Node::InterfaceMethod(n) => NodeRef::InterfaceMethod(n),
            Node::Constructor(n) => NodeRef::Constructor(n),
            Node::Javadoc(n) => NodeRef::Javadoc(n),
            Node::Type(n) => NodeRef::Type(n),
        }
    }
}

impl AsNode for NodeRef<'_> {
    fn as_node(&self) -> NodeRef<'_> {
        *self
    }
}

macro_rules! model {
    ($($ty:ident),* $(,)?) => {
        $(
            impl AsNode for $ty {
                fn as_node(&self) -> NodeRef<'_> {
                    NodeRef::$ty(self)
                }
            }

            impl Model for $ty {
                const KIND: NodeKind = NodeKind::$ty;

                fn from_node(node: NodeRef<'_>) -> Option<&Self> {
                    match node {
                        NodeRef::$ty(n) => Some(n),
                        _ => None,
                    }
                }
            }

            impl From<$ty> for Node {
                fn from(node: $ty) -> Self {
                    Node::$ty(node)
                }
            }
        )*
    };
}

model!(
    File,
    Import,
    Class,
    Interface,
    Field,
    InterfaceField,
    Method,
    InterfaceMethod,
    Constructor,
    Javadoc,
    Type,
);
