//! Type mappers: stored database types to Java type references.
//!
//! Mappers are looked up by identifier in an explicit [`TypeMapperRegistry`]
//! populated at configuration time. Resolution happens once per column while
//! the model is built, never while rendering.

use std::{fmt, sync::Arc};

use indexmap::IndexMap;
use javagen_model::Type;

use crate::{Column, Error, Result};

/// Converts a raw stored-type name into a renderable [`Type`].
pub trait TypeMapper: Send + Sync + fmt::Debug {
    /// The identifier this mapper is registered under by default.
    fn identifier(&self) -> &'static str;

    /// Map a stored type name to a Java type.
    fn java_type(&self, database_type: &str) -> Type;

    /// Map a column, boxing primitives when the column is nullable.
    fn column_type(&self, column: &Column<'_>) -> Type {
        let ty = self.java_type(column.database_type());
        if column.is_nullable() { ty.boxed() } else { ty }
    }
}

/// Produces a fresh mapper instance.
pub type TypeMapperFactory = Arc<dyn Fn() -> Box<dyn TypeMapper> + Send + Sync>;

/// Registry of type mapper factories keyed by identifier.
#[derive(Clone, Default)]
pub struct TypeMapperRegistry {
    factories: IndexMap<String, TypeMapperFactory>,
}

impl TypeMapperRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a registry holding the built-in `standard` and `identity` mappers.
    pub fn with_defaults() -> Self {
        let mut registry = Self::new();
        registry.register(StandardTypeMapper.identifier(), || Box::new(StandardTypeMapper));
        registry.register(IdentityTypeMapper.identifier(), || Box::new(IdentityTypeMapper));
        registry
    }

    /// Register a factory. Returns true if an earlier registration for the
    /// same identifier was replaced.
    pub fn register<F>(&mut self, identifier: impl Into<String>, factory: F) -> bool
    where
        F: Fn() -> Box<dyn TypeMapper> + Send + Sync + 'static,
    {
        let identifier = identifier.into();
        let replaced = self
            .factories
            .insert(identifier.clone(), Arc::new(factory))
            .is_some();
        if replaced {
            tracing::debug!(%identifier, "replaced type mapper");
        }
        replaced
    }

    /// Instantiate the mapper registered under `identifier`.
    pub fn resolve(&self, identifier: &str) -> Result<Box<dyn TypeMapper>> {
        match self.factories.get(identifier) {
            Some(factory) => Ok(factory()),
            None => Err(Box::new(Error::UnknownTypeMapper {
                identifier: identifier.to_string(),
                known: self.identifiers().collect::<Vec<_>>().join(", "),
            })),
        }
    }

    /// Whether `identifier` is registered.
    pub fn contains(&self, identifier: &str) -> bool {
        self.factories.contains_key(identifier)
    }

    /// Registered identifiers, in registration order.
    pub fn identifiers(&self) -> impl Iterator<Item = &str> {
        self.factories.keys().map(String::as_str)
    }
}

impl fmt::Debug for TypeMapperRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TypeMapperRegistry")
            .field("identifiers", &self.identifiers().collect::<Vec<_>>())
            .finish()
    }
}

/// Maps SQL type names (`VARCHAR(255)`, `BIGINT UNSIGNED`, ...) to Java types.
///
/// Qualified Java class names pass through unchanged; unknown SQL types map
/// to `java.lang.Object`.
#[derive(Debug, Clone, Copy, Default)]
pub struct StandardTypeMapper;

impl TypeMapper for StandardTypeMapper {
    fn identifier(&self) -> &'static str {
        "standard"
    }

    fn java_type(&self, database_type: &str) -> Type {
        if database_type.contains('.') {
            return Type::of(database_type);
        }
        let normalized = normalize(database_type);
        match normalized.as_str() {
            "BIT" | "BOOL" | "BOOLEAN" => Type::of("boolean"),
            "TINYINT" => Type::of("byte"),
            "SMALLINT" | "INT2" => Type::of("short"),
            "INT" | "INTEGER" | "MEDIUMINT" | "INT4" | "SERIAL" => Type::of("int"),
            "BIGINT" | "INT8" | "BIGSERIAL" => Type::of("long"),
            "REAL" | "FLOAT" | "FLOAT4" => Type::of("float"),
            "DOUBLE" | "DOUBLE PRECISION" | "FLOAT8" => Type::of("double"),
            "DECIMAL" | "NUMERIC" => Type::of("java.math.BigDecimal"),
            "CHAR" | "VARCHAR" | "NCHAR" | "NVARCHAR" | "TEXT" | "TINYTEXT" | "MEDIUMTEXT"
            | "LONGTEXT" | "CLOB" | "ENUM" | "JSON" => Type::string(),
            "DATE" => Type::of("java.time.LocalDate"),
            "TIME" => Type::of("java.time.LocalTime"),
            "DATETIME" | "TIMESTAMP" => Type::of("java.time.LocalDateTime"),
            "TIMESTAMPTZ" | "TIMESTAMP WITH TIME ZONE" => Type::of("java.time.OffsetDateTime"),
            "UUID" => Type::of("java.util.UUID"),
            "BLOB" | "TINYBLOB" | "MEDIUMBLOB" | "LONGBLOB" | "BINARY" | "VARBINARY" | "BYTEA" => {
                Type::of("byte").array()
            }
            other => {
                tracing::warn!(database_type = other, "unmapped database type");
                Type::of("java.lang.Object")
            }
        }
    }
}

/// Uppercase, drop a `(size)` suffix and an `UNSIGNED` qualifier.
fn normalize(database_type: &str) -> String {
    let upper = database_type.trim().to_uppercase();
    let without_size = match (upper.find('('), upper.rfind(')')) {
        (Some(open), Some(close)) if open < close => {
            format!("{}{}", &upper[..open], &upper[close + 1..])
        }
        _ => upper,
    };
    without_size
        .split_whitespace()
        .filter(|word| *word != "UNSIGNED")
        .collect::<Vec<_>>()
        .join(" ")
}

/// Treats the stored type name as the Java type name itself.
#[derive(Debug, Clone, Copy, Default)]
pub struct IdentityTypeMapper;

impl TypeMapper for IdentityTypeMapper {
    fn identifier(&self) -> &'static str {
        "identity"
    }

    fn java_type(&self, database_type: &str) -> Type {
        Type::of(database_type.trim())
    }
}
