//! Horizontal rules and `##`–`####` headings.

use std::sync::LazyLock;

use regex::{Captures, NoExpand, Regex};

use crate::markup::Markup;

static RULE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?m)^[ \t]*(?:-{3,}|\*{3,})[ \t]*$").expect("invalid rule regex"));

/// Most specific first: a `##` pass run earlier would eat the leading hashes
/// of `###` and `####` headings.
static HEADINGS: LazyLock<[(&'static str, Regex); 3]> = LazyLock::new(|| {
    [
        ("h4", Regex::new(r"(?m)^#### (.+)$").expect("invalid h4 regex")),
        ("h3", Regex::new(r"(?m)^### (.+)$").expect("invalid h3 regex")),
        ("h2", Regex::new(r"(?m)^## (.+)$").expect("invalid h2 regex")),
    ]
});

pub(crate) fn transform_blocks(text: &str, markup: &Markup) -> String {
    let rule = markup.open("hr");
    let mut out = RULE.replace_all(text, NoExpand(&rule)).into_owned();

    for (tag, pattern) in HEADINGS.iter() {
        out = pattern
            .replace_all(&out, |caps: &Captures| markup.wrap(tag, caps[1].trim_end()))
            .into_owned();
    }
    out
}
