//! Entity escaping with placeholder protection.

use html_escape::encode_text;

use crate::table::Extraction;

/// Escape `&`, `<` and `>` everywhere except the fragments the table extractor
/// protected, then put those fragments back byte for byte.
///
/// Taking the [`Extraction`] by value is what pins this stage after table
/// extraction: the protected text only exists once tables have been pulled out.
pub(crate) fn escape_protected(extraction: Extraction) -> String {
    let Extraction { text, placeholders } = extraction;
    let escaped = encode_text(&text);
    placeholders.restore(&escaped)
}
