use javagen_codegen::{Generator, Result, View, require_name};
use javagen_core::formatting::{SEMICOLON, SPACE, separate};
use javagen_model::{Constructor, InterfaceMethod, Method, Modifier, NodeKind};

use super::{THROWS, VOID, body, clause, javadoc, modifiers, parameters, type_ref};

/// Renders a class method. Abstract and native methods end in `;`.
pub struct MethodView;

impl View<Method> for MethodView {
    fn render(&self, generator: &Generator, method: &Method) -> Result<Option<String>> {
        let name = require_name(NodeKind::Method, &method.name)?;
        let return_type = match &method.ty {
            Some(ty) => type_ref(generator, Some(ty))?,
            None => VOID.to_string(),
        };
        let signature = separate(
            [
                modifiers(generator, &method.modifiers),
                return_type,
                format!("{name}{}", parameters(generator, &method.params)?),
            ],
            SPACE,
        );
        let tail = if method.modifiers.contains(&Modifier::Abstract)
            || method.modifiers.contains(&Modifier::Native)
        {
            SEMICOLON.to_string()
        } else {
            format!("{SPACE}{}", body(generator, &method.body))
        };

        Ok(Some(format!(
            "{}{signature}{}{tail}",
            javadoc(generator, method.javadoc.as_ref())?,
            clause(generator, THROWS, &method.throws)?
        )))
    }
}

/// Renders an interface method.
///
/// Only `default`, `static` and `private` are printed. Methods carrying
/// any of them get a body, all others end in `;`.
pub struct InterfaceMethodView;

const INTERFACE_METHOD_MODIFIERS: [Modifier; 3] =
    [Modifier::Private, Modifier::Default, Modifier::Static];

impl View<InterfaceMethod> for InterfaceMethodView {
    fn render(&self, generator: &Generator, method: &InterfaceMethod) -> Result<Option<String>> {
        let name = require_name(NodeKind::InterfaceMethod, &method.name)?;
        let printed = method
            .modifiers
            .iter()
            .filter(|m| INTERFACE_METHOD_MODIFIERS.contains(*m));
        let return_type = match &method.ty {
            Some(ty) => type_ref(generator, Some(ty))?,
            None => VOID.to_string(),
        };
        let signature = separate(
            [
                modifiers(generator, printed),
                return_type,
                format!("{name}{}", parameters(generator, &method.params)?),
            ],
            SPACE,
        );
        let tail = if method.has_body() {
            format!("{SPACE}{}", body(generator, &method.body))
        } else {
            SEMICOLON.to_string()
        };

        Ok(Some(format!(
            "{}{signature}{}{tail}",
            javadoc(generator, method.javadoc.as_ref())?,
            clause(generator, THROWS, &method.throws)?
        )))
    }
}

/// Renders a constructor. The name is the enclosing class name.
pub struct ConstructorView;

impl View<Constructor> for ConstructorView {
    fn render(&self, generator: &Generator, constructor: &Constructor) -> Result<Option<String>> {
        let name = require_name(NodeKind::Constructor, &constructor.name)?;
        let signature = separate(
            [
                modifiers(generator, &constructor.modifiers),
                format!("{name}{}", parameters(generator, &constructor.params)?),
            ],
            SPACE,
        );

        Ok(Some(format!(
            "{}{signature}{}{SPACE}{}",
            javadoc(generator, constructor.javadoc.as_ref())?,
            clause(generator, THROWS, &constructor.throws)?,
            body(generator, &constructor.body)
        )))
    }
}

#[cfg(test)]
mod tests {
    use javagen_model::{Field, HasJavadoc, HasModifiers, Javadoc, Type};

    use super::*;
    use crate::install_defaults;

    fn render<N: javagen_model::AsNode>(node: &N) -> String {
        let mut generator = Generator::new();
        install_defaults(&mut generator);
        generator.on(node).unwrap().unwrap()
    }

    #[test]
    fn test_method_with_body() {
        let method = Method::of("getId", Type::of("long"))
            .public()
            .add("return id;");
        insta::assert_snapshot!(render(&method), @r"
        public long getId() {
            return id;
        }
        ");
    }

    #[test]
    fn test_void_method_with_params_and_throws() {
        let method = Method::void("write")
            .param(Field::of("out", Type::of("java.io.Writer")))
            .param(Field::of("flush", Type::of("boolean")).final_())
            .throws(Type::of("java.io.IOException"));
        assert_eq!(
            render(&method),
            "void write(Writer out, final boolean flush) throws IOException {}"
        );
    }

    #[test]
    fn test_abstract_method() {
        let method = Method::of("name", Type::string()).protected().abstract_();
        assert_eq!(render(&method), "protected abstract String name();");
    }

    #[test]
    fn test_interface_method() {
        let method = InterfaceMethod::of("getName", Type::string())
            .public()
            .javadoc(Javadoc::default().returns("the name"));
        assert_eq!(
            render(&method),
            "/**\n * @return the name\n */\nString getName();"
        );
    }

    #[test]
    fn test_default_interface_method() {
        let method = InterfaceMethod::of("isNew", Type::of("boolean"))
            .default_()
            .add("return getId() == 0;");
        insta::assert_snapshot!(render(&method), @r"
        default boolean isNew() {
            return getId() == 0;
        }
        ");
    }

    #[test]
    fn test_private_interface_method() {
        let method = InterfaceMethod::of("isValid", Type::of("boolean"))
            .private()
            .add("return getId() > 0;");
        insta::assert_snapshot!(render(&method), @r"
        private boolean isValid() {
            return getId() > 0;
        }
        ");
    }

    #[test]
    fn test_constructor() {
        let mut constructor = Constructor::new()
            .public()
            .param(Field::of("id", Type::of("long")))
            .add("this.id = id;");
        constructor.name = "User".to_string();
        insta::assert_snapshot!(render(&constructor), @r"
        public User(long id) {
            this.id = id;
        }
        ");
    }

    #[test]
    fn test_constructor_without_name_is_malformed() {
        let mut generator = Generator::new();
        install_defaults(&mut generator);
        assert!(generator.on(&Constructor::new()).is_err());
    }
}
