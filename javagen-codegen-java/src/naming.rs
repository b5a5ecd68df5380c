//! Java-specific naming conventions.

use javagen_codegen::NamingConvention;
use javagen_core::{to_camel_case, to_pascal_case, to_screaming_snake_case};

fn escape_java_reserved(name: &str) -> String {
    format!("{}_", name)
}

/// Java naming conventions.
pub const JAVA_NAMING: NamingConvention = NamingConvention {
    to_type: to_pascal_case,
    to_member: to_camel_case,
    to_constant: to_screaming_snake_case,
    reserved_words: &[
        "abstract", "assert", "boolean", "break", "byte", "case", "catch", "char", "class",
        "const", "continue", "default", "do", "double", "else", "enum", "extends", "final",
        "finally", "float", "for", "goto", "if", "implements", "import", "instanceof", "int",
        "interface", "long", "native", "new", "package", "private", "protected", "public",
        "return", "short", "static", "strictfp", "super", "switch", "synchronized", "this",
        "throw", "throws", "transient", "try", "void", "volatile", "while", "true", "false",
        "null", "var", "record", "yield",
        // java.lang.Object methods
        "getClass", "hashCode", "equals", "clone", "toString", "notify", "notifyAll", "wait",
        "finalize",
    ],
    escape_reserved: escape_java_reserved,
};
