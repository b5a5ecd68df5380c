//! Typed views over configuration documents.
//!
//! Each entity is validated once, when it is built from its [`Document`];
//! afterwards its accessors are infallible.

use crate::{Document, Error, HasAlias, HasEnabled, HasName, Result, Settings, keys};

/// The name/alias/enabled triple shared by most entities.
#[derive(Debug, Clone, Copy)]
struct Capabilities<'a> {
    name: &'a str,
    alias: Option<&'a str>,
    enabled: bool,
}

impl<'a> Capabilities<'a> {
    fn read(document: &Document<'a>) -> Result<Self> {
        Ok(Self {
            name: document.require_string(keys::NAME)?,
            alias: document
                .try_string(keys::ALIAS)?
                .filter(|alias| !alias.is_empty()),
            enabled: document.bool_or(keys::ENABLED, true)?,
        })
    }
}

macro_rules! capabilities {
    ($($ty:ident),* $(,)?) => {
        $(
            impl HasName for $ty<'_> {
                fn name(&self) -> &str {
                    self.capabilities.name
                }
            }

            impl HasEnabled for $ty<'_> {
                fn is_enabled(&self) -> bool {
                    self.capabilities.enabled
                }
            }

            impl HasAlias for $ty<'_> {
                fn alias(&self) -> Option<&str> {
                    self.capabilities.alias
                }
            }

            impl<'a> $ty<'a> {
                /// The backing document.
                pub fn document(&self) -> Document<'a> {
                    self.document
                }
            }
        )*
    };
}

/// Build every enabled child entity stored under `key`.
///
/// Disabled children are skipped before validation, so they may omit
/// attributes an enabled entity requires.
fn enabled_children<'a, T>(document: &Document<'a>, key: &str) -> Result<Vec<T>>
where
    T: TryFrom<Document<'a>, Error = Box<Error>>,
{
    let mut children = Vec::new();
    for child in document.children(key) {
        if child.bool_or(keys::ENABLED, true)? {
            children.push(T::try_from(child)?);
        } else {
            tracing::debug!(location = child.location(), "skipping disabled entity");
        }
    }
    Ok(children)
}

/// The configuration root.
#[derive(Debug, Clone, Copy)]
pub struct Project<'a> {
    document: Document<'a>,
    name: &'a str,
    package_name: Option<&'a str>,
}

impl<'a> Project<'a> {
    /// Base package of the generated code, if configured.
    pub fn package_name(&self) -> Option<&'a str> {
        self.package_name
    }

    /// Base package, falling back to the lowercased project name.
    pub fn base_package(&self) -> String {
        self.package_name
            .map(str::to_string)
            .unwrap_or_else(|| javagen_core::to_snake_case(self.name).replace('_', ""))
    }

    /// Generation settings; every key is optional.
    pub fn settings(&self) -> Result<Settings> {
        match self.document.get(keys::SETTINGS) {
            None => Ok(Settings::default()),
            Some(value) => serde_json::from_value(value.clone()).map_err(|source| {
                Box::new(Error::InvalidSettings {
                    location: self.document.location().to_string(),
                    source,
                })
            }),
        }
    }

    /// Enabled database management systems.
    pub fn dbmses(&self) -> Result<Vec<Dbms<'a>>> {
        enabled_children(&self.document, keys::DBMSES)
    }

    /// The backing document.
    pub fn document(&self) -> Document<'a> {
        self.document
    }
}

impl HasName for Project<'_> {
    fn name(&self) -> &str {
        self.name
    }
}

impl<'a> TryFrom<Document<'a>> for Project<'a> {
    type Error = Box<Error>;

    fn try_from(document: Document<'a>) -> Result<Self> {
        Ok(Self {
            document,
            name: document.require_string(keys::NAME)?,
            package_name: document.try_string(keys::PACKAGE_NAME)?,
        })
    }
}

/// A database management system.
#[derive(Debug, Clone, Copy)]
pub struct Dbms<'a> {
    document: Document<'a>,
    capabilities: Capabilities<'a>,
    type_name: Option<&'a str>,
}

impl<'a> Dbms<'a> {
    /// Vendor name, e.g. `MySQL`.
    pub fn type_name(&self) -> Option<&'a str> {
        self.type_name
    }

    /// Enabled schemas.
    pub fn schemas(&self) -> Result<Vec<Schema<'a>>> {
        enabled_children(&self.document, keys::SCHEMAS)
    }
}

impl<'a> TryFrom<Document<'a>> for Dbms<'a> {
    type Error = Box<Error>;

    fn try_from(document: Document<'a>) -> Result<Self> {
        Ok(Self {
            document,
            capabilities: Capabilities::read(&document)?,
            type_name: document.try_string(keys::TYPE_NAME)?,
        })
    }
}

/// A database schema.
#[derive(Debug, Clone, Copy)]
pub struct Schema<'a> {
    document: Document<'a>,
    capabilities: Capabilities<'a>,
}

impl<'a> Schema<'a> {
    /// Enabled tables.
    pub fn tables(&self) -> Result<Vec<Table<'a>>> {
        enabled_children(&self.document, keys::TABLES)
    }
}

impl<'a> TryFrom<Document<'a>> for Schema<'a> {
    type Error = Box<Error>;

    fn try_from(document: Document<'a>) -> Result<Self> {
        Ok(Self {
            document,
            capabilities: Capabilities::read(&document)?,
        })
    }
}

/// A table, rendered as one entity.
#[derive(Debug, Clone, Copy)]
pub struct Table<'a> {
    document: Document<'a>,
    capabilities: Capabilities<'a>,
}

impl<'a> Table<'a> {
    /// Enabled columns.
    pub fn columns(&self) -> Result<Vec<Column<'a>>> {
        enabled_children(&self.document, keys::COLUMNS)
    }

    /// The schema this table belongs to.
    pub fn schema(&self) -> Result<Schema<'a>> {
        let parent = self
            .document
            .parent()
            .ok_or_else(|| Error::missing("parent schema", self.document.location()))?;
        Schema::try_from(parent)
    }
}

impl<'a> TryFrom<Document<'a>> for Table<'a> {
    type Error = Box<Error>;

    fn try_from(document: Document<'a>) -> Result<Self> {
        Ok(Self {
            document,
            capabilities: Capabilities::read(&document)?,
        })
    }
}

/// A table column.
#[derive(Debug, Clone, Copy)]
pub struct Column<'a> {
    document: Document<'a>,
    capabilities: Capabilities<'a>,
    nullable: bool,
    auto_increment: bool,
    type_mapper: &'a str,
    database_type: &'a str,
}

impl<'a> Column<'a> {
    /// Identifier of the type mapper used when none is configured.
    pub const DEFAULT_TYPE_MAPPER: &'static str = "standard";

    /// Whether the column can hold `null`. Defaults to `true`.
    pub fn is_nullable(&self) -> bool {
        self.nullable
    }

    /// Whether the column auto increments. Defaults to `false`.
    pub fn is_auto_increment(&self) -> bool {
        self.auto_increment
    }

    /// Identifier of the type mapper that converts [`Self::database_type`].
    pub fn type_mapper(&self) -> &'a str {
        self.type_mapper
    }

    /// The stored type name, e.g. `VARCHAR(255)` or `java.lang.Integer`.
    pub fn database_type(&self) -> &'a str {
        self.database_type
    }

    /// The table this column belongs to.
    pub fn table(&self) -> Result<Table<'a>> {
        let parent = self
            .document
            .parent()
            .ok_or_else(|| Error::missing("parent table", self.document.location()))?;
        Table::try_from(parent)
    }
}

impl<'a> TryFrom<Document<'a>> for Column<'a> {
    type Error = Box<Error>;

    fn try_from(document: Document<'a>) -> Result<Self> {
        Ok(Self {
            document,
            capabilities: Capabilities::read(&document)?,
            nullable: document.bool_or(keys::NULLABLE, true)?,
            auto_increment: document.bool_or(keys::AUTO_INCREMENT, false)?,
            type_mapper: document
                .try_string(keys::TYPE_MAPPER)?
                .unwrap_or(Self::DEFAULT_TYPE_MAPPER),
            database_type: document.require_string(keys::DATABASE_TYPE)?,
        })
    }
}

capabilities!(Dbms, Schema, Table, Column);

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::DocumentTree;

    fn tree() -> DocumentTree {
        DocumentTree::from_value(json!({
            "name": "shop",
            "packageName": "com.acme.shop",
            "settings": { "indent": 2 },
            "dbmses": [{
                "name": "db",
                "typeName": "MySQL",
                "schemas": [{
                    "name": "public",
                    "tables": [
                        {
                            "name": "user_account",
                            "alias": "user",
                            "columns": [
                                { "name": "id", "databaseType": "BIGINT", "nullable": false, "autoIncrement": true },
                                { "name": "email", "databaseType": "VARCHAR(255)", "typeMapper": "identity" },
                                { "name": "legacy", "databaseType": "TEXT", "enabled": false }
                            ]
                        },
                        { "name": "audit", "enabled": false }
                    ]
                }]
            }]
        }))
        .unwrap()
    }

    fn user_table(tree: &DocumentTree) -> Table<'_> {
        let project = Project::try_from(tree.root()).unwrap();
        let dbms = project.dbmses().unwrap().remove(0);
        let schema = dbms.schemas().unwrap().remove(0);
        schema.tables().unwrap().remove(0)
    }

    #[test]
    fn test_project() {
        let tree = tree();
        let project = Project::try_from(tree.root()).unwrap();
        assert_eq!(project.name(), "shop");
        assert_eq!(project.package_name(), Some("com.acme.shop"));
        assert_eq!(project.settings().unwrap().indent, javagen_core::Indent::Spaces(2));
        assert_eq!(project.dbmses().unwrap()[0].type_name(), Some("MySQL"));
    }

    #[test]
    fn test_disabled_entities_are_skipped() {
        let tree = tree();
        let table = user_table(&tree);
        let schema = table.schema().unwrap();
        assert_eq!(schema.tables().unwrap().len(), 1);
        assert_eq!(table.columns().unwrap().len(), 2);
    }

    #[test]
    fn test_disabled_column_is_not_validated() {
        let tree = DocumentTree::from_value(json!({
            "name": "orders",
            "columns": [
                { "name": "id", "databaseType": "BIGINT" },
                { "name": "dropped", "enabled": false }
            ]
        }))
        .unwrap();
        let table = Table::try_from(tree.root()).unwrap();
        let columns = table.columns().unwrap();
        assert_eq!(columns.len(), 1);
        assert_eq!(columns[0].name(), "id");
    }

    #[test]
    fn test_alias_and_java_name() {
        let tree = tree();
        let table = user_table(&tree);
        assert_eq!(table.name(), "user_account");
        assert_eq!(table.alias(), Some("user"));
        assert_eq!(table.java_name(), "user");

        let id = table.columns().unwrap().remove(0);
        assert_eq!(id.alias(), None);
        assert_eq!(id.java_name(), "id");
    }

    #[test]
    fn test_column_defaults() {
        let tree = tree();
        let columns = user_table(&tree).columns().unwrap();

        let id = &columns[0];
        assert!(!id.is_nullable());
        assert!(id.is_auto_increment());
        assert_eq!(id.type_mapper(), Column::DEFAULT_TYPE_MAPPER);

        let email = &columns[1];
        assert!(email.is_nullable());
        assert!(!email.is_auto_increment());
        assert_eq!(email.type_mapper(), "identity");
        assert_eq!(email.database_type(), "VARCHAR(255)");
        assert_eq!(email.table().unwrap().name(), "user_account");
    }

    #[test]
    fn test_column_requires_database_type() {
        let tree = DocumentTree::from_value(json!({ "name": "id" })).unwrap();
        let err = Column::try_from(tree.root()).unwrap_err();
        assert!(matches!(
            *err,
            Error::MissingAttribute { ref key, .. } if key == "databaseType"
        ));
    }

    #[test]
    fn test_wrong_attribute_type_is_rejected() {
        let tree =
            DocumentTree::from_value(json!({ "name": "id", "databaseType": "INT", "nullable": "no" }))
                .unwrap();
        let err = Column::try_from(tree.root()).unwrap_err();
        assert!(matches!(*err, Error::InvalidAttribute { expected: "a boolean", .. }));
    }

    #[test]
    fn test_base_package_fallback() {
        let tree = DocumentTree::from_value(json!({ "name": "My Shop" })).unwrap();
        let project = Project::try_from(tree.root()).unwrap();
        assert_eq!(project.base_package(), "myshop");
        assert_eq!(project.settings().unwrap(), Settings::default());
    }

    #[test]
    fn test_invalid_settings() {
        let tree = DocumentTree::from_value(json!({ "name": "p", "settings": { "indent": 0 } }))
            .unwrap();
        let project = Project::try_from(tree.root()).unwrap();
        assert!(matches!(
            *project.settings().unwrap_err(),
            Error::InvalidSettings { .. }
        ));
    }
}
