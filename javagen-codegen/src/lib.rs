//! Rendering engine for the javagen code generator.
//!
//! A [`Generator`] owns a table from [`NodeKind`](javagen_model::NodeKind)
//! to [`Transform`]. Rendering a node looks up the transform for its kind
//! and invokes it; transforms render their own tokens and hand child nodes
//! back to the generator, so no transform needs to know how another kind is
//! rendered.
//!
//! # Module Organization
//!
//! - [`Generator`] - the dispatch table and recursive entry point
//! - [`Transform`], [`View`] - untyped and typed renderers for one kind
//! - [`SharedGenerator`] - lock-protected generator for runtime registration
//! - [`CancellationToken`] - aborts multi-node renders between nodes
//! - [`NamingConvention`] - identifier rules of a target language
//!
//! # Example
//!
//! ```
//! use javagen_codegen::{Generator, View, Result};
//! use javagen_model::Type;
//!
//! struct SimpleTypeView;
//!
//! impl View<Type> for SimpleTypeView {
//!     fn render(&self, _: &Generator, model: &Type) -> Result<Option<String>> {
//!         Ok(Some(model.simple_name().to_string()))
//!     }
//! }
//!
//! let mut generator = Generator::new();
//! generator.install::<Type, _>(SimpleTypeView);
//!
//! let rendered = generator.on(&Type::of("java.util.List")).unwrap();
//! assert_eq!(rendered.as_deref(), Some("List"));
//! ```

mod cancel;
mod error;
mod generator;
mod naming;
mod shared;
mod token;
mod transform;

pub use cancel::CancellationToken;
pub use error::{Error, Result, require_name};
pub use generator::Generator;
pub use naming::NamingConvention;
pub use shared::SharedGenerator;
pub use token::Token;
pub use transform::{Transform, View};
