//! One view per model node kind.
//!
//! Views render their own tokens in grammar order and hand every child
//! node back to the [`Generator`]. Absent optional parts render as empty
//! fragments and take their separators with them.

mod field;
mod javadoc;
mod method;
mod structure;
mod types;

use javagen_codegen::{Generator, Result};
use javagen_core::formatting::{COMMA_SPACE, EMPTY, NL, SPACE, block, separate};
use javagen_model::{
    Class, Constructor, Field, File, Import, Interface, InterfaceField, InterfaceMethod, Javadoc,
    Method, Modifier, Type,
};

pub use field::{FieldView, InterfaceFieldView};
pub use javadoc::JavadocView;
pub use method::{ConstructorView, InterfaceMethodView, MethodView};
pub use structure::{ClassView, FileView, InterfaceView};
pub use types::{ImportView, TypeView};

const CLASS: &str = "class";
const INTERFACE: &str = "interface";
const EXTENDS: &str = "extends";
const IMPLEMENTS: &str = "implements";
const THROWS: &str = "throws";
const PACKAGE: &str = "package";
const IMPORT: &str = "import";
const VOID: &str = "void";
const ASSIGN: &str = " = ";

/// Install the Java view for every node kind.
pub fn install_defaults(generator: &mut Generator) {
    generator.install::<Javadoc, _>(JavadocView);
    generator.install::<Type, _>(TypeView);
    generator.install::<Import, _>(ImportView);
    generator.install::<Field, _>(FieldView);
    generator.install::<InterfaceField, _>(InterfaceFieldView);
    generator.install::<Method, _>(MethodView);
    generator.install::<InterfaceMethod, _>(InterfaceMethodView);
    generator.install::<Constructor, _>(ConstructorView);
    generator.install::<Class, _>(ClassView);
    generator.install::<Interface, _>(InterfaceView);
    generator.install::<File, _>(FileView);
}

/// The rendered javadoc including its trailing newline, or nothing.
fn javadoc(generator: &Generator, javadoc: Option<&Javadoc>) -> Result<String> {
    Ok(generator.on_option(javadoc)?.unwrap_or_default())
}

fn modifiers<'m>(generator: &Generator, modifiers: impl IntoIterator<Item = &'m Modifier>) -> String {
    separate(modifiers.into_iter().map(|m| generator.token(*m)), SPACE)
}

fn type_ref(generator: &Generator, ty: Option<&Type>) -> Result<String> {
    Ok(generator.on_option(ty)?.unwrap_or_default())
}

/// `(a, b)`
fn parameters(generator: &Generator, params: &[Field]) -> Result<String> {
    Ok(format!("({})", generator.on_all(params)?.join(COMMA_SPACE)))
}

/// `extends A, B` style clause with a leading space, or nothing.
fn clause(generator: &Generator, keyword: &str, types: &[Type]) -> Result<String> {
    if types.is_empty() {
        return Ok(EMPTY.to_string());
    }
    Ok(format!(
        "{SPACE}{keyword}{SPACE}{}",
        generator.on_all(types)?.join(COMMA_SPACE)
    ))
}

fn initializer(value: Option<&String>) -> String {
    value.map(|v| format!("{ASSIGN}{v}")).unwrap_or_default()
}

fn body(generator: &Generator, lines: &[String]) -> String {
    block(&lines.join(NL), generator.settings().indent)
}
