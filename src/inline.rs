//! Bold and italic emphasis, then stray-asterisk cleanup.
//!
//! Runs only over text between tags. Every `<` left after escaping belongs to
//! generated markup, so tags (and any class attribute inside them) are opaque.

use std::sync::LazyLock;

use regex::{Captures, Regex};

use crate::markup::Markup;

static BOLD: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\*\*(.+?)\*\*").expect("invalid bold regex"));

/// A single `*` after whitespace and before a word character; unmatched
/// markers like this are dropped rather than shown.
static STRAY_ASTERISK: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(\s)\*([^\s*])").expect("invalid stray asterisk regex"));

/// Bold must go first: `**x**` would otherwise read as two empty italics.
pub(crate) fn transform_inline(text: &str, markup: &Markup) -> String {
    let out = map_text(text, |segment| {
        BOLD.replace_all(segment, |caps: &Captures| markup.wrap("strong", &caps[1]))
            .into_owned()
    });
    let out = map_text(&out, |segment| emphasize(segment, b'*', markup));
    let out = map_text(&out, |segment| emphasize(segment, b'_', markup));
    map_text(&out, |segment| {
        STRAY_ASTERISK.replace_all(segment, "${1}${2}").into_owned()
    })
}

/// Apply `f` to the text between tags, copying the tags through untouched.
fn map_text(text: &str, f: impl Fn(&str) -> String) -> String {
    let mut out = String::with_capacity(text.len());
    let mut rest = text;

    while let Some(start) = rest.find('<') {
        if start > 0 {
            out.push_str(&f(&rest[..start]));
        }
        let end = rest[start..].find('>').map_or(rest.len(), |n| start + n + 1);
        out.push_str(&rest[start..end]);
        rest = &rest[end..];
    }
    if !rest.is_empty() {
        out.push_str(&f(rest));
    }
    out
}

/// Wrap `<delim>text<delim>` spans in `<em>`, one line at a time.
///
/// Openers must touch the following character and closers the preceding one,
/// and neither may sit next to another copy of the delimiter. Underscores
/// additionally ignore intraword positions so `snake_case_names` survive.
fn emphasize(text: &str, delim: u8, markup: &Markup) -> String {
    let bytes = text.as_bytes();
    let mut out = String::with_capacity(text.len());
    let mut copied = 0;
    let mut i = 0;

    while i < bytes.len() {
        if !is_opener(bytes, i, delim) {
            i += 1;
            continue;
        }
        match find_closer(bytes, i, delim) {
            Some(close) => {
                out.push_str(&text[copied..i]);
                out.push_str(&markup.wrap("em", &text[i + 1..close]));
                i = close + 1;
                copied = i;
            }
            // No valid closer after this opener means none after any later
            // opener on the same line either.
            None => i = text[i..].find('\n').map_or(bytes.len(), |n| i + n),
        }
    }

    out.push_str(&text[copied..]);
    out
}

fn is_opener(bytes: &[u8], i: usize, delim: u8) -> bool {
    if bytes[i] != delim {
        return false;
    }
    let prev = i.checked_sub(1).map(|p| bytes[p]);
    if prev == Some(delim) || (delim == b'_' && prev.is_some_and(|c| c.is_ascii_alphanumeric())) {
        return false;
    }
    bytes
        .get(i + 1)
        .is_some_and(|&next| next != delim && !next.is_ascii_whitespace())
}

fn find_closer(bytes: &[u8], open: usize, delim: u8) -> Option<usize> {
    for j in open + 2..bytes.len() {
        match bytes[j] {
            b'\n' => return None,
            c if c == delim => {
                let prev = bytes[j - 1];
                let next = bytes.get(j + 1).copied();
                let intraword = delim == b'_' && next.is_some_and(|c| c.is_ascii_alphanumeric());
                if prev != delim && !prev.is_ascii_whitespace() && next != Some(delim) && !intraword
                {
                    return Some(j);
                }
            }
            _ => {}
        }
    }
    None
}
