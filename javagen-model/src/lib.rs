//! Model nodes for the javagen code generator.
//!
//! Every syntactic construct that can be rendered is a plain, immutable
//! value. Nodes are grouped into a closed set of kinds ([`NodeKind`]) so
//! that a generator can dispatch on the kind without knowing the concrete
//! Rust type.
//!
//! # Architecture
//!
//! ```text
//! config documents → translator → model nodes (this crate) → generator → text
//! ```
//!
//! - [`Node`] / [`NodeRef`] - owned and borrowed sum types over all kinds
//! - [`Model`] - implemented by each concrete node struct
//! - [`HasModifiers`], [`HasJavadoc`] - shared fluent setters

macro_rules! decorated {
    ($($ty:ty),* $(,)?) => {
        $(
            impl crate::HasModifiers for $ty {
                fn modifiers_mut(&mut self) -> &mut crate::Modifiers {
                    &mut self.modifiers
                }
            }

            impl crate::HasJavadoc for $ty {
                fn javadoc_mut(&mut self) -> &mut Option<crate::Javadoc> {
                    &mut self.javadoc
                }
            }
        )*
    };
}

mod javadoc;
mod members;
mod modifier;
mod node;
mod structure;
mod types;

pub use javadoc::{Javadoc, JavadocTag};
pub use members::{Constructor, Field, InterfaceField, InterfaceMethod, Method};
pub use modifier::{HasModifiers, Modifier, Modifiers};
pub use node::{AsNode, Model, Node, NodeKind, NodeRef};
pub use structure::{Class, Declaration, File, Import, Interface};
pub use types::Type;

/// Fluent setter for nodes that can carry documentation.
pub trait HasJavadoc: Sized {
    /// Mutable access to the documentation slot.
    fn javadoc_mut(&mut self) -> &mut Option<Javadoc>;

    /// Attach documentation to this node.
    fn javadoc(mut self, javadoc: Javadoc) -> Self {
        *self.javadoc_mut() = Some(javadoc);
        self
    }
}
