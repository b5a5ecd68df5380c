use javagen_codegen::{Generator, Result, View, require_name};
use javagen_core::formatting::{NL, SEMICOLON, SPACE, block, separate};
use javagen_model::{Class, File, Interface, NodeKind};

use super::{CLASS, EXTENDS, IMPLEMENTS, INTERFACE, PACKAGE, clause, javadoc, modifiers};

/// Blank line between members and between top-level sections.
const SECTION: &str = "\n\n";

/// `a;\nb;`
fn statements(rendered: Vec<String>) -> String {
    rendered
        .into_iter()
        .map(|member| format!("{member}{SEMICOLON}"))
        .collect::<Vec<_>>()
        .join(NL)
}

/// Renders a class: fields, then constructors, then methods.
pub struct ClassView;

impl View<Class> for ClassView {
    fn render(&self, generator: &Generator, class: &Class) -> Result<Option<String>> {
        let name = require_name(NodeKind::Class, &class.name)?;
        let header = separate(
            [modifiers(generator, &class.modifiers), CLASS.to_string(), name.to_string()],
            SPACE,
        );

        let mut sections = vec![statements(generator.on_all(&class.fields)?)];
        sections.extend(generator.on_all(&class.constructors)?);
        sections.extend(generator.on_all(&class.methods)?);
        let members = separate(sections, SECTION);

        Ok(Some(format!(
            "{}{header}{}{}{SPACE}{}",
            javadoc(generator, class.javadoc.as_ref())?,
            clause(generator, EXTENDS, class.superclass.as_slice())?,
            clause(generator, IMPLEMENTS, &class.interfaces)?,
            block(&members, generator.settings().indent)
        )))
    }
}

/// Renders an interface: constants, then methods.
pub struct InterfaceView;

impl View<Interface> for InterfaceView {
    fn render(&self, generator: &Generator, interface: &Interface) -> Result<Option<String>> {
        let name = require_name(NodeKind::Interface, &interface.name)?;
        let header = separate(
            [
                modifiers(generator, &interface.modifiers),
                INTERFACE.to_string(),
                name.to_string(),
            ],
            SPACE,
        );

        let mut sections = vec![statements(generator.on_all(&interface.fields)?)];
        sections.extend(generator.on_all(&interface.methods)?);
        let members = separate(sections, SECTION);

        Ok(Some(format!(
            "{}{header}{}{SPACE}{}",
            javadoc(generator, interface.javadoc.as_ref())?,
            clause(generator, EXTENDS, &interface.extends)?,
            block(&members, generator.settings().indent)
        )))
    }
}

/// Renders a compilation unit: package, imports, then declarations, with a
/// trailing newline.
pub struct FileView;

impl View<File> for FileView {
    fn render(&self, generator: &Generator, file: &File) -> Result<Option<String>> {
        require_name(NodeKind::File, &file.name)?;

        let mut sections = Vec::new();
        if let Some(package) = &file.package {
            sections.push(format!("{PACKAGE}{SPACE}{package}{SEMICOLON}"));
        }
        sections.push(generator.on_all(&file.imports)?.join(NL));
        sections.extend(generator.on_all(&file.declarations)?);

        Ok(Some(format!("{}{NL}", separate(sections, SECTION))))
    }
}

#[cfg(test)]
mod tests {
    use javagen_codegen::Error;
    use javagen_config::Settings;
    use javagen_core::Indent;
    use javagen_model::{
        Constructor, Field, HasJavadoc, HasModifiers, Import, InterfaceField, InterfaceMethod,
        Javadoc, Method, Type,
    };

    use super::*;
    use crate::install_defaults;

    fn generator() -> Generator {
        let mut generator = Generator::new();
        install_defaults(&mut generator);
        generator
    }

    #[test]
    fn test_empty_class() {
        let class = Class::of("Marker").public().final_();
        assert_eq!(
            generator().on(&class).unwrap().as_deref(),
            Some("public final class Marker {}")
        );
    }

    #[test]
    fn test_class_members() {
        let class = Class::of("UserImpl")
            .public()
            .extends(Type::of("com.acme.Base"))
            .implements(Type::of("com.acme.User"))
            .implements(Type::of("java.io.Serializable"))
            .field(Field::of("id", Type::of("long")).private())
            .field(Field::of("name", Type::string()).private())
            .constructor(Constructor::new().public())
            .method(Method::of("getId", Type::of("long")).public().add("return id;"));

        insta::assert_snapshot!(generator().on(&class).unwrap().unwrap(), @r"
        public class UserImpl extends Base implements User, Serializable {
            private long id;
            private String name;

            public UserImpl() {}

            public long getId() {
                return id;
            }
        }
        ");
    }

    #[test]
    fn test_interface_with_settings_indent() {
        let mut generator = Generator::with_settings(Settings {
            indent: Indent::COMPACT,
            ..Settings::default()
        });
        install_defaults(&mut generator);

        let interface = Interface::of("User")
            .public()
            .javadoc(Javadoc::of("A user."))
            .field(InterfaceField::of("ID", Type::string()).value("\"id\""))
            .method(InterfaceMethod::of("getId", Type::of("long")));

        insta::assert_snapshot!(generator.on(&interface).unwrap().unwrap(), @r#"
        /**
         * A user.
         */
        public interface User {
          String ID = "id";

          long getId();
        }
        "#);
    }

    #[test]
    fn test_file() {
        let file = File::of("com/acme/Marker.java")
            .package("com.acme")
            .import(Import::of(Type::of("java.util.List")))
            .import(Import::of(Type::of("java.util.Map")))
            .declaration(Class::of("Marker").public());

        insta::assert_snapshot!(generator().on(&file).unwrap().unwrap(), @r"
        package com.acme;

        import java.util.List;
        import java.util.Map;

        public class Marker {}
        ");
    }

    #[test]
    fn test_file_without_package_or_imports() {
        let file = File::of("Marker.java").declaration(Interface::of("Marker"));
        assert_eq!(
            generator().on(&file).unwrap().as_deref(),
            Some("interface Marker {}\n")
        );
    }

    #[test]
    fn test_malformed_member_propagates() {
        let class = Class::of("Broken").field(Field::named(""));
        assert_eq!(
            generator().on(&class),
            Err(Error::malformed(NodeKind::Field, "name must not be empty"))
        );
    }
}
