//! Java code generation for javagen.
//!
//! This crate provides one [`View`](javagen_codegen::View) per model node
//! kind, the [`EntityTranslator`] that turns configured tables into model
//! files, and the [`JavaGenerator`] pipeline tying both together.
//!
//! ```
//! use javagen_codegen::Generator;
//! use javagen_codegen_java::install_defaults;
//! use javagen_model::{HasModifiers, InterfaceField, Type};
//!
//! let mut generator = Generator::new();
//! install_defaults(&mut generator);
//!
//! let field = InterfaceField::of("id", Type::string()).final_();
//! assert_eq!(generator.on(&field).unwrap().as_deref(), Some("final String id"));
//! ```

mod generator;
mod naming;
mod translator;
pub mod views;

pub use generator::{GeneratedFile, JavaGenerator};
pub use naming::JAVA_NAMING;
pub use translator::EntityTranslator;
pub use views::install_defaults;
