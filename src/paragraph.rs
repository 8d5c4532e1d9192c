//! Paragraph assembly and the final cleanup pass.

use std::sync::LazyLock;

use regex::Regex;

use crate::markup::{Markup, is_block_line};

static EMPTY_PARAGRAPH: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"<p(?: [^>]*)?>\s*</p>").expect("invalid empty paragraph regex"));

/// Wrap bare text in paragraphs and concatenate it with the block lines.
///
/// Blank lines separate paragraphs; single newlines inside one become `<br>`.
/// Lines already holding block markup are never wrapped, so nothing after a
/// closed list item turns into a line break.
pub(crate) fn assemble(text: &str, markup: &Markup) -> String {
    let mut out = String::with_capacity(text.len());
    let mut span: Vec<&str> = Vec::new();

    for line in text.split('\n') {
        if line.trim().is_empty() {
            flush(&mut span, markup, &mut out);
        } else if is_block_line(line) {
            flush(&mut span, markup, &mut out);
            out.push_str(line.trim());
        } else {
            span.push(line);
        }
    }
    flush(&mut span, markup, &mut out);

    out
}

fn flush(span: &mut Vec<&str>, markup: &Markup, out: &mut String) {
    if span.is_empty() {
        return;
    }
    out.push_str(&markup.wrap("p", &span.join("<br>")));
    span.clear();
}

/// Drop paragraph shells with nothing but whitespace inside.
///
/// `assemble` treats whitespace-only lines as separators, so on the render
/// path this pass finds nothing; it holds the final output to "no empty
/// `<p>`" independently of how the stages before it behave.
pub(crate) fn remove_empty(html: &str) -> String {
    EMPTY_PARAGRAPH.replace_all(html, "").into_owned()
}
