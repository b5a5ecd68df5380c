use javagen_codegen::{Generator, Result, View};
use javagen_core::formatting::{NL, SPACE, separate};
use javagen_model::{Javadoc, JavadocTag};

/// Renders a documentation comment followed by its own newline.
///
/// Description lines come first, then a blank comment line, then the block
/// tags. A javadoc without content renders absent.
pub struct JavadocView;

/// Comment text may not close the comment early.
fn comment_line(text: &str) -> String {
    let text = text.trim_end().replace("*/", "*&#47;");
    if text.is_empty() {
        " *".to_string()
    } else {
        format!(" * {text}")
    }
}

fn tag_text(tag: &JavadocTag) -> String {
    separate(
        [
            format!("@{}", tag.name),
            tag.value.clone().unwrap_or_default(),
            tag.text.clone(),
        ],
        SPACE,
    )
}

impl View<Javadoc> for JavadocView {
    fn render(&self, _: &Generator, javadoc: &Javadoc) -> Result<Option<String>> {
        if javadoc.is_empty() {
            return Ok(None);
        }

        let mut lines = Vec::new();
        if javadoc.lines.iter().any(|line| !line.trim().is_empty()) {
            lines.extend(javadoc.lines.iter().map(|line| comment_line(line)));
            if !javadoc.tags.is_empty() {
                lines.push(comment_line(""));
            }
        }
        lines.extend(javadoc.tags.iter().map(|tag| comment_line(&tag_text(tag))));

        Ok(Some(format!("/**{NL}{}{NL} */{NL}", lines.join(NL))))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(javadoc: &Javadoc) -> Option<String> {
        JavadocView.render(&Generator::new(), javadoc).unwrap()
    }

    #[test]
    fn test_empty_renders_absent() {
        assert_eq!(render(&Javadoc::default()), None);
        assert_eq!(render(&Javadoc::of("  ")), None);
    }

    #[test]
    fn test_lines_and_tags() {
        let javadoc = Javadoc::of("Returns the id.\n\nNever null.")
            .param("id", "the identifier")
            .returns("the id");
        insta::assert_snapshot!(render(&javadoc).unwrap(), @r"
        /**
         * Returns the id.
         *
         * Never null.
         *
         * @param id the identifier
         * @return the id
         */
        ");
    }

    #[test]
    fn test_tags_only() {
        let javadoc = Javadoc::default().tag(JavadocTag::new("deprecated", ""));
        assert_eq!(render(&javadoc).unwrap(), "/**\n * @deprecated\n */\n");
    }

    #[test]
    fn test_comment_terminator_is_escaped() {
        let javadoc = Javadoc::of("Matches a/*/b globs.").returns("the */ count");
        assert_eq!(
            render(&javadoc).unwrap(),
            "/**\n * Matches a/*&#47;b globs.\n *\n * @return the *&#47; count\n */\n"
        );
    }
}
