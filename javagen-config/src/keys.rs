//! Attribute and collection keys used in configuration documents.

pub const NAME: &str = "name";
pub const ALIAS: &str = "alias";
pub const ENABLED: &str = "enabled";

pub const PACKAGE_NAME: &str = "packageName";
pub const SETTINGS: &str = "settings";
pub const TYPE_NAME: &str = "typeName";

pub const NULLABLE: &str = "nullable";
pub const AUTO_INCREMENT: &str = "autoIncrement";
pub const TYPE_MAPPER: &str = "typeMapper";
pub const DATABASE_TYPE: &str = "databaseType";

/// Child collections.
pub const DBMSES: &str = "dbmses";
pub const SCHEMAS: &str = "schemas";
pub const TABLES: &str = "tables";
pub const COLUMNS: &str = "columns";
