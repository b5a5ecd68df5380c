//! Whitespace, punctuation and block helpers shared by the views.
//!
//! Everything here is a pure function of its input. Views concatenate these
//! tokens in grammar order; nothing in this module knows about model nodes.

use crate::Indent;

pub const EMPTY: &str = "";
pub const SPACE: &str = " ";
pub const NL: &str = "\n";
pub const COMMA_SPACE: &str = ", ";
pub const SEMICOLON: &str = ";";
pub const BLOCK_START: &str = "{";
pub const BLOCK_END: &str = "}";
pub const DOT: &str = ".";

/// Prefix every non-empty line of `text` with one level of indentation.
///
/// Blank lines stay blank so that member separators never carry trailing
/// whitespace.
pub fn indent(text: &str, indent: Indent) -> String {
    let mut result = String::with_capacity(text.len());
    for (i, line) in text.split('\n').enumerate() {
        if i > 0 {
            result.push_str(NL);
        }
        if !line.is_empty() {
            result.push_str(indent.as_str());
            result.push_str(line);
        }
    }
    result
}

/// Wrap `body` in braces, indenting it one level.
///
/// An empty body collapses to `{}`.
pub fn block(body: &str, indent: Indent) -> String {
    if body.is_empty() {
        format!("{}{}", BLOCK_START, BLOCK_END)
    } else {
        format!(
            "{}{}{}{}{}",
            BLOCK_START,
            NL,
            self::indent(body, indent),
            NL,
            BLOCK_END
        )
    }
}

/// Join the non-empty fragments with `separator`.
pub fn separate<I, S>(fragments: I, separator: &str) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut result = String::new();
    for fragment in fragments {
        let fragment = fragment.as_ref();
        if fragment.is_empty() {
            continue;
        }
        if !result.is_empty() {
            result.push_str(separator);
        }
        result.push_str(fragment);
    }
    result
}

/// Render `text` as a Java string literal.
pub fn quote(text: &str) -> String {
    let mut result = String::with_capacity(text.len() + 2);
    result.push('"');
    for c in text.chars() {
        match c {
            '"' => result.push_str("\\\""),
            '\\' => result.push_str("\\\\"),
            '\n' => result.push_str("\\n"),
            '\t' => result.push_str("\\t"),
            c => result.push(c),
        }
    }
    result.push('"');
    result
}
