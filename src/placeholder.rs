//! Opaque tokens standing in for generated fragments while the surrounding
//! text is escaped.

const MARKER: &str = "TABLE_PLACEHOLDER_";
const LEADING: usize = 2;

/// Map from token index to the fragment it protects.
///
/// Tokens are `<stem><n>__`, handed out in insertion order and restored in the
/// same order. The stem is chosen so it never occurs in the input, which
/// guarantees no literal text can be mistaken for a token.
#[derive(Debug)]
pub(crate) struct Placeholders {
    stem: String,
    fragments: Vec<String>,
}

impl Placeholders {
    /// Pick a stem with more leading `_` than any marker in the input has.
    ///
    /// One scan for the marker; each backward count stops at the previous
    /// marker, so the whole choice stays linear in the input length.
    pub(crate) fn for_input(input: &str) -> Self {
        let bytes = input.as_bytes();
        let longest = input
            .match_indices(MARKER)
            .map(|(at, _)| bytes[..at].iter().rev().take_while(|&&b| b == b'_').count())
            .max();
        let leading = longest.map_or(LEADING, |run| (run + 1).max(LEADING));
        if leading > LEADING {
            tracing::debug!(leading, "input contains placeholder marker, stem lengthened");
        }
        let stem = format!("{}{MARKER}", "_".repeat(leading));
        Self {
            stem,
            fragments: Vec::new(),
        }
    }

    fn token(&self, index: usize) -> String {
        format!("{}{index}__", self.stem)
    }

    /// Record a fragment and return the token to write in its place.
    pub(crate) fn protect(&mut self, fragment: String) -> String {
        let token = self.token(self.fragments.len());
        self.fragments.push(fragment);
        token
    }

    pub(crate) fn len(&self) -> usize {
        self.fragments.len()
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.fragments.is_empty()
    }

    /// Substitute every token back with its fragment in one left-to-right scan.
    pub(crate) fn restore(self, text: &str) -> String {
        let mut out = String::with_capacity(text.len());
        let mut rest = text;

        for (index, fragment) in self.fragments.iter().enumerate() {
            let token = self.token(index);
            match rest.find(&token) {
                Some(at) => {
                    out.push_str(&rest[..at]);
                    out.push_str(fragment);
                    rest = &rest[at + token.len()..];
                }
                None => {
                    tracing::warn!(index, "placeholder token missing during restore");
                }
            }
        }

        out.push_str(rest);
        out
    }
}
