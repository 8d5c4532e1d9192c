//! Tag emission shared by every stage.
//!
//! All generated markup goes through [`Markup`] so the optional class hook is
//! applied uniformly and the paragraph assembler can recognize block lines.

use html_escape::encode_double_quoted_attribute;

use crate::RenderOptions;

/// Block-level elements a stage may emit at the start of a line.
const BLOCK_TAGS: &[&str] = &[
    "h2",
    "h3",
    "h4",
    "hr",
    "ul",
    "/ul",
    "ol",
    "/ol",
    "li",
    "blockquote",
    "table",
];

pub(crate) struct Markup {
    class_prefix: Option<String>,
}

impl Markup {
    pub(crate) fn new(options: &RenderOptions) -> Self {
        let class_prefix = options
            .class_prefix
            .as_deref()
            .map(str::trim)
            .filter(|prefix| !prefix.is_empty())
            .map(|prefix| encode_double_quoted_attribute(prefix).into_owned());
        Self { class_prefix }
    }

    /// Opening tag, carrying `class="<prefix>-<tag>"` when a prefix is set.
    pub(crate) fn open(&self, tag: &str) -> String {
        match &self.class_prefix {
            Some(prefix) => format!(r#"<{tag} class="{prefix}-{tag}">"#),
            None => format!("<{tag}>"),
        }
    }

    pub(crate) fn close(tag: &str) -> String {
        format!("</{tag}>")
    }

    pub(crate) fn wrap(&self, tag: &str, content: &str) -> String {
        let mut out = self.open(tag);
        out.push_str(content);
        out.push_str(&Self::close(tag));
        out
    }
}

/// Whether a line starts with one of the generated block elements.
///
/// Sound only after entity escaping: any `<` left in the text was generated.
pub(crate) fn is_block_line(line: &str) -> bool {
    let Some(rest) = line.trim_start().strip_prefix('<') else {
        return false;
    };
    BLOCK_TAGS.iter().any(|tag| {
        rest.strip_prefix(tag)
            .is_some_and(|after| after.starts_with('>') || after.starts_with(' '))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn prefixed(prefix: &str) -> Markup {
        Markup::new(&RenderOptions {
            class_prefix: Some(prefix.to_string()),
        })
    }

    #[test]
    fn plain_tags() {
        let markup = Markup::new(&RenderOptions::default());
        assert_eq!(markup.wrap("h2", "Title"), "<h2>Title</h2>");
    }

    #[test]
    fn class_hook() {
        assert_eq!(prefixed("report").open("table"), r#"<table class="report-table">"#);
    }

    #[test]
    fn class_hook_is_attribute_escaped() {
        assert_eq!(prefixed(r#"a"b"#).open("p"), r#"<p class="a&quot;b-p">"#);
    }

    #[test]
    fn blank_prefix_is_ignored() {
        assert_eq!(prefixed("  ").open("p"), "<p>");
    }

    #[test]
    fn block_lines() {
        assert!(is_block_line("<h2>x</h2>"));
        assert!(is_block_line(r#"<table class="r-table">"#));
        assert!(is_block_line("</ul>"));
        assert!(is_block_line("<hr>"));
        assert!(!is_block_line("<strong>x</strong> tail"));
        assert!(!is_block_line("<html>"));
        assert!(!is_block_line("&lt;h2&gt;"));
        assert!(!is_block_line("plain"));
    }
}
