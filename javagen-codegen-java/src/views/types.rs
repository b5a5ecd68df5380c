use javagen_codegen::{Error, Generator, Result, View};
use javagen_core::formatting::{COMMA_SPACE, SEMICOLON, SPACE};
use javagen_model::{Import, Modifier, NodeKind, Type};

use super::IMPORT;

/// Renders a type reference by its simple name: `Map<String, Long>[]`.
pub struct TypeView;

impl View<Type> for TypeView {
    fn render(&self, generator: &Generator, ty: &Type) -> Result<Option<String>> {
        if ty.name.trim().is_empty() {
            return Err(Error::malformed(NodeKind::Type, "type name must not be empty"));
        }

        let mut text = ty.simple_name().to_string();
        if !ty.arguments.is_empty() {
            text.push('<');
            text.push_str(&generator.on_all(&ty.arguments)?.join(COMMA_SPACE));
            text.push('>');
        }
        for _ in 0..ty.array_dimension {
            text.push_str("[]");
        }
        Ok(Some(text))
    }
}

/// Renders `import [static ]a.b.C;`.
pub struct ImportView;

impl View<Import> for ImportView {
    fn render(&self, generator: &Generator, import: &Import) -> Result<Option<String>> {
        if import.ty.name.trim().is_empty() {
            return Err(Error::malformed(NodeKind::Import, "imported name must not be empty"));
        }

        let mut text = format!("{IMPORT}{SPACE}");
        if import.is_static {
            text.push_str(generator.token(Modifier::Static));
            text.push_str(SPACE);
        }
        text.push_str(&import.ty.name);
        text.push_str(SEMICOLON);
        Ok(Some(text))
    }
}
