use javagen_codegen::{Generator, Result, View, require_name};
use javagen_core::formatting::{SPACE, separate};
use javagen_model::{Field, InterfaceField, Modifier, NodeKind};

use super::{initializer, javadoc, modifiers, type_ref};

/// Renders a field or parameter: `private final long id = 0`.
///
/// The terminating `;` belongs to the enclosing declaration, so the same
/// view serves method parameters.
pub struct FieldView;

impl View<Field> for FieldView {
    fn render(&self, generator: &Generator, field: &Field) -> Result<Option<String>> {
        let name = require_name(NodeKind::Field, &field.name)?;
        let declaration = separate(
            [
                modifiers(generator, &field.modifiers),
                type_ref(generator, field.ty.as_ref())?,
                name.to_string(),
            ],
            SPACE,
        );
        Ok(Some(format!(
            "{}{declaration}{}",
            javadoc(generator, field.javadoc.as_ref())?,
            initializer(field.value.as_ref())
        )))
    }
}

/// Renders an interface constant.
///
/// Interface fields are implicitly `public static final`, so `final` is the
/// only modifier printed and only when it was set explicitly.
pub struct InterfaceFieldView;

impl View<InterfaceField> for InterfaceFieldView {
    fn render(&self, generator: &Generator, field: &InterfaceField) -> Result<Option<String>> {
        let name = require_name(NodeKind::InterfaceField, &field.name)?;
        let modifier = if field.modifiers.contains(&Modifier::Final) {
            generator.token(Modifier::Final)
        } else {
            ""
        };
        let ty = type_ref(generator, field.ty.as_ref())?;
        Ok(Some(format!(
            "{}{}{}",
            javadoc(generator, field.javadoc.as_ref())?,
            separate([modifier, ty.as_str(), name], SPACE),
            initializer(field.value.as_ref())
        )))
    }
}

#[cfg(test)]
mod tests {
    use javagen_codegen::Error;
    use javagen_model::{HasJavadoc, HasModifiers, Javadoc, Type};

    use super::*;
    use crate::install_defaults;

    fn generator() -> Generator {
        let mut generator = Generator::new();
        install_defaults(&mut generator);
        generator
    }

    fn render<N: javagen_model::AsNode>(node: &N) -> String {
        generator().on(node).unwrap().unwrap()
    }

    #[test]
    fn test_interface_field_final() {
        let field = InterfaceField::of("id", Type::of("String")).final_();
        assert_eq!(render(&field), "final String id");
    }

    #[test]
    fn test_interface_field_without_final() {
        let field = InterfaceField::of("id", Type::of("String"));
        assert_eq!(render(&field), "String id");
    }

    #[test]
    fn test_interface_field_ignores_other_modifiers() {
        let field = InterfaceField::of("id", Type::of("String"))
            .public()
            .static_()
            .modifier(Modifier::Volatile);
        assert_eq!(render(&field), "String id");
    }

    #[test]
    fn test_interface_field_javadoc_prefix() {
        let field = InterfaceField::of("count", Type::of("long")).javadoc(Javadoc::of("Identifier."));
        assert_eq!(render(&field), "/**\n * Identifier.\n */\nlong count");
    }

    #[test]
    fn test_interface_field_without_type() {
        let field = InterfaceField {
            name: "id".to_string(),
            ..Default::default()
        };
        assert_eq!(render(&field), "id");
    }

    #[test]
    fn test_field_modifiers_in_canonical_order() {
        let field = Field::of("count", Type::of("int"))
            .final_()
            .static_()
            .private()
            .value("0");
        assert_eq!(render(&field), "private static final int count = 0");
    }

    #[test]
    fn test_field_without_name_is_malformed() {
        let err = generator().on(&Field::named("")).unwrap_err();
        assert_eq!(
            err,
            Error::malformed(NodeKind::Field, "name must not be empty")
        );
    }
}
