use std::sync::LazyLock;

use regex::{Captures, Regex};

use crate::markup::Markup;

/// Matches the escaped form: a literal `> ` prefix has become `&gt; ` by now.
static QUOTE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?m)^&gt; (.*)$").expect("invalid blockquote regex"));

pub(crate) fn transform_blockquotes(text: &str, markup: &Markup) -> String {
    QUOTE
        .replace_all(text, |caps: &Captures| markup.wrap("blockquote", &caps[1]))
        .into_owned()
}
