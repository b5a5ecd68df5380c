//! End-to-end generation from project configuration.

use javagen_codegen::CancellationToken;
use javagen_codegen_java::{GeneratedFile, JavaGenerator};
use javagen_config::{DocumentTree, Project, TypeMapper};
use javagen_model::Type;

const SHOP: &str = r#"{
    "name": "shop",
    "packageName": "com.acme",
    "dbmses": [{
        "name": "db",
        "typeName": "PostgreSQL",
        "schemas": [{
            "name": "public",
            "tables": [{
                "name": "user",
                "columns": [
                    { "name": "id", "databaseType": "BIGINT", "nullable": false, "autoIncrement": true },
                    { "name": "email", "databaseType": "VARCHAR(255)" }
                ]
            }]
        }]
    }]
}"#;

fn generate_json(generator: &JavaGenerator, src: &str) -> eyre::Result<Vec<GeneratedFile>> {
    let tree = DocumentTree::from_json_str(src, "shop.json")?;
    let project = Project::try_from(tree.root())?;
    generator.generate(&project, &CancellationToken::new())
}

fn get_file<'a>(files: &'a [GeneratedFile], path: &str) -> &'a str {
    files
        .iter()
        .find(|f| f.path == path)
        .map(|f| f.content.as_str())
        .unwrap_or_else(|| panic!("{path} not generated"))
}

#[test]
fn test_entity_interface() {
    let files = generate_json(&JavaGenerator::new(), SHOP).unwrap();
    insta::assert_snapshot!(get_file(&files, "com/acme/User.java"), @r#"
    package com.acme;

    import java.util.Optional;

    /**
     * An entity of table {@code user}.
     */
    public interface User {
        String ID = "id";
        String EMAIL = "email";

        /**
         * Returns the id of this User.
         * The value is generated by the database.
         *
         * @return the id
         */
        long getId();

        /**
         * Sets the id of this User.
         *
         * @param id the new id
         * @return this instance
         */
        User setId(long id);

        /**
         * Returns the email of this User.
         *
         * @return the email, if set
         */
        Optional<String> getEmail();

        /**
         * Sets the email of this User.
         *
         * @param email the new email
         * @return this instance
         */
        User setEmail(String email);
    }
    "#);
}

#[test]
fn test_entity_implementation() {
    let files = generate_json(&JavaGenerator::new(), SHOP).unwrap();
    insta::assert_snapshot!(get_file(&files, "com/acme/UserImpl.java"), @r"
    package com.acme;

    import java.util.Optional;

    /**
     * Default implementation of {@link User}.
     */
    public class UserImpl implements User {
        private long id;
        private String email;

        public UserImpl() {}

        public long getId() {
            return id;
        }

        public User setId(long id) {
            this.id = id;
            return this;
        }

        public Optional<String> getEmail() {
            return Optional.ofNullable(email);
        }

        public User setEmail(String email) {
            this.email = email;
            return this;
        }
    }
    ");
}

#[test]
fn test_toml_project_with_settings() {
    let src = r#"
        name = "inventory"

        [settings]
        indent = 2
        generateImplementations = false

        [[dbmses]]
        name = "main"

        [[dbmses.schemas]]
        name = "stock"

        [[dbmses.schemas.tables]]
        name = "stock_item"

        [[dbmses.schemas.tables.columns]]
        name = "sku"
        databaseType = "CHAR(12)"
        nullable = false
    "#;
    let tree = DocumentTree::from_toml_str(src, "inventory.toml").unwrap();
    let project = Project::try_from(tree.root()).unwrap();
    let files = JavaGenerator::new()
        .generate(&project, &CancellationToken::new())
        .unwrap();

    assert_eq!(files.len(), 1);
    assert_eq!(files[0].path, "inventory/StockItem.java");
    assert!(files[0].content.starts_with("package inventory;\n\n/**"));
    assert!(files[0].content.contains("\n  String SKU = \"sku\";\n"));
    assert!(files[0].content.contains("\n  String getSku();\n"));
}

#[test]
fn test_cancelled_generation_returns_nothing() {
    let tree = DocumentTree::from_json_str(SHOP, "shop.json").unwrap();
    let project = Project::try_from(tree.root()).unwrap();
    let token = CancellationToken::new();
    token.cancel();

    let err = JavaGenerator::new().generate(&project, &token).unwrap_err();
    let cause = err.downcast_ref::<javagen_codegen::Error>().unwrap();
    assert_eq!(
        *cause,
        javagen_codegen::Error::Cancelled {
            completed: 0,
            total: 2
        }
    );
}

#[test]
fn test_unknown_type_mapper() {
    let src = SHOP.replace(
        r#""databaseType": "VARCHAR(255)""#,
        r#""databaseType": "VARCHAR(255)", "typeMapper": "unknown.Mapper""#,
    );
    let err = generate_json(&JavaGenerator::new(), &src).unwrap_err();
    let cause = err.downcast_ref::<Box<javagen_config::Error>>().unwrap();
    match cause.as_ref() {
        javagen_config::Error::UnknownTypeMapper { identifier, .. } => {
            assert_eq!(identifier, "unknown.Mapper")
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[derive(Debug)]
struct EmailMapper;

impl TypeMapper for EmailMapper {
    fn identifier(&self) -> &'static str {
        "email"
    }

    fn java_type(&self, _: &str) -> Type {
        Type::of("com.acme.mail.EmailAddress")
    }
}

#[test]
fn test_custom_type_mapper() {
    let src = SHOP.replace(
        r#""databaseType": "VARCHAR(255)""#,
        r#""databaseType": "VARCHAR(255)", "typeMapper": "email""#,
    );
    let mut generator = JavaGenerator::new();
    generator
        .registry_mut()
        .register("email", || Box::new(EmailMapper));

    let files = generate_json(&generator, &src).unwrap();
    let user = get_file(&files, "com/acme/User.java");
    assert!(user.contains("import com.acme.mail.EmailAddress;\nimport java.util.Optional;"));
    assert!(user.contains("    Optional<EmailAddress> getEmail();"));
}

#[test]
fn test_duplicate_entities_are_rejected() {
    let src = SHOP.replace(
        r#""name": "user","#,
        r#""name": "user", "alias": "account","#,
    )
    .replace(
        r#""tables": [{"#,
        r#""tables": [{ "name": "account", "columns": [] }, {"#,
    );
    let err = generate_json(&JavaGenerator::new(), &src).unwrap_err();
    assert!(err.to_string().contains("com/acme/Account.java"));
}

#[test]
fn test_colliding_member_names_are_rejected() {
    let src = SHOP.replace(
        r#"{ "name": "email", "databaseType": "VARCHAR(255)" }"#,
        r#"{ "name": "user_id", "databaseType": "BIGINT" },
                    { "name": "userId", "databaseType": "BIGINT" }"#,
    );
    let err = generate_json(&JavaGenerator::new(), &src).unwrap_err();
    let cause = err.downcast_ref::<Box<javagen_config::Error>>().unwrap();
    match cause.as_ref() {
        javagen_config::Error::DuplicateMember {
            member,
            first,
            second,
            ..
        } => {
            assert_eq!(member, "userId");
            assert_eq!(first, "user_id");
            assert_eq!(second, "userId");
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn test_object_method_names_are_escaped() {
    let src = SHOP.replace(r#""name": "email""#, r#""name": "class""#);
    let files = generate_json(&JavaGenerator::new(), &src).unwrap();
    let user = get_file(&files, "com/acme/User.java");
    assert!(user.contains("    Optional<String> getClass_();"));
    assert!(user.contains("    User setClass(String class_);"));
    assert!(!user.contains("getClass();"));
}
