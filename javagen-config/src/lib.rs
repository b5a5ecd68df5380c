//! Configuration documents for the javagen code generator.
//!
//! A project configuration is a tree of [`Document`]s: generic attribute
//! stores loaded from JSON or TOML. Typed entities ([`Project`], [`Dbms`],
//! [`Schema`], [`Table`], [`Column`]) are thin, validated views over those
//! documents and expose the capability traits [`HasName`], [`HasEnabled`]
//! and [`HasAlias`].
//!
//! # Example
//!
//! ```
//! use javagen_config::{DocumentTree, HasName, Project};
//!
//! let tree = DocumentTree::from_json_str(
//!     r#"{ "name": "shop", "dbmses": [ { "name": "db", "schemas": [
//!         { "name": "public", "tables": [
//!             { "name": "user", "columns": [ { "name": "id", "databaseType": "BIGINT" } ] }
//!         ] } ] } ] }"#,
//!     "shop.json",
//! )
//! .unwrap();
//!
//! let project = Project::try_from(tree.root()).unwrap();
//! assert_eq!(project.name(), "shop");
//! ```

mod document;
mod entity;
mod error;
pub mod keys;
mod settings;
mod traits;
mod type_mapper;

pub use document::{Document, DocumentId, DocumentTree};
pub use entity::{Column, Dbms, Project, Schema, Table};
pub use error::{Error, Result};
pub use settings::Settings;
pub use traits::{HasAlias, HasEnabled, HasName};
pub use type_mapper::{
    IdentityTypeMapper, StandardTypeMapper, TypeMapper, TypeMapperFactory, TypeMapperRegistry,
};
