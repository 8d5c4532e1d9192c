//! Grouping of bullet and numbered lines into list containers.
//!
//! A single scan over all lines drives a small state machine; the open list
//! kind is the only state carried from one line to the next.

use std::sync::LazyLock;

use regex::Regex;

use crate::markup::Markup;

static BULLET: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[-•*] (.*)$").expect("invalid bullet regex"));
static NUMBERED: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d+\. (.*)$").expect("invalid numbered regex"));

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ListKind {
    Unordered,
    Ordered,
}

impl ListKind {
    fn tag(self) -> &'static str {
        match self {
            Self::Unordered => "ul",
            Self::Ordered => "ol",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub(crate) enum ListState {
    #[default]
    None,
    Open(ListKind),
}

/// How a single line reads to the state machine.
#[derive(Debug, PartialEq, Eq)]
pub(crate) enum Line<'a> {
    Item(ListKind, &'a str),
    Other(&'a str),
}

impl<'a> Line<'a> {
    /// Indentation is ignored, so nested items flatten into the current run.
    pub(crate) fn classify(line: &'a str) -> Self {
        let trimmed = line.trim_start();
        if let Some(caps) = BULLET.captures(trimmed) {
            if let Some(item) = caps.get(1) {
                return Self::Item(ListKind::Unordered, item.as_str());
            }
        }
        if let Some(caps) = NUMBERED.captures(trimmed) {
            if let Some(item) = caps.get(1) {
                return Self::Item(ListKind::Ordered, item.as_str());
            }
        }
        Self::Other(line)
    }
}

/// Markup a transition asks for, in emission order.
#[derive(Debug, PartialEq, Eq)]
pub(crate) enum Emit<'a> {
    Open(ListKind),
    Close(ListKind),
    Item(&'a str),
    Line(&'a str),
}

impl ListState {
    /// Advance over one line. A change of marker kind closes the open list
    /// before the new one opens.
    pub(crate) fn step<'a>(self, line: Line<'a>) -> (Self, Vec<Emit<'a>>) {
        match (self, line) {
            (Self::Open(open), Line::Item(kind, text)) if open == kind => {
                (self, vec![Emit::Item(text)])
            }
            (Self::Open(open), Line::Item(kind, text)) => (
                Self::Open(kind),
                vec![Emit::Close(open), Emit::Open(kind), Emit::Item(text)],
            ),
            (Self::None, Line::Item(kind, text)) => {
                (Self::Open(kind), vec![Emit::Open(kind), Emit::Item(text)])
            }
            (Self::Open(open), Line::Other(text)) => {
                (Self::None, vec![Emit::Close(open), Emit::Line(text)])
            }
            (Self::None, Line::Other(text)) => (Self::None, vec![Emit::Line(text)]),
        }
    }

    /// Close whatever is still open at end of input.
    pub(crate) fn finish<'a>(self) -> Vec<Emit<'a>> {
        match self {
            Self::Open(kind) => vec![Emit::Close(kind)],
            Self::None => Vec::new(),
        }
    }
}

/// Rewrite list runs as `<ul>`/`<ol>` blocks, one tag per output line.
pub(crate) fn transform_lists(text: &str, markup: &Markup) -> String {
    let mut lines: Vec<String> = Vec::new();
    let mut state = ListState::default();

    for line in text.split('\n') {
        let (next, events) = state.step(Line::classify(line));
        state = next;
        for event in events {
            emit(event, markup, &mut lines);
        }
    }
    for event in state.finish() {
        emit(event, markup, &mut lines);
    }

    lines.join("\n")
}

fn emit(event: Emit<'_>, markup: &Markup, lines: &mut Vec<String>) {
    match event {
        Emit::Open(kind) => {
            tracing::trace!(?kind, "list opened");
            lines.push(markup.open(kind.tag()));
        }
        Emit::Close(kind) => lines.push(Markup::close(kind.tag())),
        Emit::Item(item) => lines.push(markup.wrap("li", item)),
        Emit::Line(line) => lines.push(line.to_string()),
    }
}
