//! Pipe-table extraction.
//!
//! Runs of two or more `|`-delimited lines become one generated `<table>`
//! fragment each, protected behind a placeholder token until escaping is done.

use std::sync::LazyLock;

use html_escape::encode_text;
use regex::Regex;

use crate::markup::Markup;
use crate::placeholder::Placeholders;

static SEPARATOR_ROW: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\|[\s\-:|]+\|$").expect("invalid separator regex"));

/// A detected table: header cells plus body rows, all as raw cell text.
///
/// Rows are not padded or truncated to the header width.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct Table {
    pub(crate) header: Vec<String>,
    pub(crate) rows: Vec<Vec<String>>,
}

/// Text with every table replaced by a token, plus the fragments behind them.
#[derive(Debug)]
pub(crate) struct Extraction {
    pub(crate) text: String,
    pub(crate) placeholders: Placeholders,
}

fn is_table_line(line: &str) -> bool {
    let line = line.trim();
    line.len() >= 2 && line.starts_with('|') && line.ends_with('|')
}

fn is_separator_row(line: &str) -> bool {
    SEPARATOR_ROW.is_match(line.trim())
}

/// Split a row on `|`, dropping the empty segments outside the outer pipes.
fn parse_row(line: &str) -> Vec<String> {
    let segments: Vec<&str> = line.trim().split('|').collect();
    if segments.len() < 2 {
        return Vec::new();
    }
    segments[1..segments.len() - 1]
        .iter()
        .map(|cell| cell.trim().to_string())
        .collect()
}

impl Table {
    /// Build a table from a run of at least one row line.
    fn from_lines(lines: &[&str]) -> Self {
        let header = lines.first().map(|line| parse_row(line)).unwrap_or_default();
        let body_start = match lines.get(1) {
            Some(line) if is_separator_row(line) => 2,
            _ => 1,
        };
        let rows = lines
            .iter()
            .skip(body_start)
            .map(|line| parse_row(line))
            .collect();
        Self { header, rows }
    }

    /// Emit the table on a single line so later line-anchored stages skip it.
    fn to_html(&self, markup: &Markup, out: &mut String) {
        out.push_str(&markup.open("table"));

        out.push_str(&markup.open("thead"));
        row_to_html(&self.header, "th", markup, out);
        out.push_str(&Markup::close("thead"));

        if !self.rows.is_empty() {
            out.push_str(&markup.open("tbody"));
            for row in &self.rows {
                row_to_html(row, "td", markup, out);
            }
            out.push_str(&Markup::close("tbody"));
        }

        out.push_str(&Markup::close("table"));
    }
}

fn row_to_html(cells: &[String], cell_tag: &str, markup: &Markup, out: &mut String) {
    out.push_str(&markup.open("tr"));
    for cell in cells {
        out.push_str(&markup.wrap(cell_tag, &encode_text(cell)));
    }
    out.push_str(&Markup::close("tr"));
}

/// Replace every table run in `text` with a placeholder token.
///
/// A lone pipe-delimited line is not a table and passes through untouched.
pub(crate) fn extract_tables(text: &str, markup: &Markup) -> Extraction {
    let lines: Vec<&str> = text.split('\n').collect();
    let mut placeholders = Placeholders::for_input(text);
    let mut out: Vec<String> = Vec::with_capacity(lines.len());

    let mut i = 0;
    while i < lines.len() {
        let run = lines[i..]
            .iter()
            .take_while(|line| is_table_line(line))
            .count();

        if run >= 2 {
            let table = Table::from_lines(&lines[i..i + run]);
            tracing::trace!(
                columns = table.header.len(),
                rows = table.rows.len(),
                "table found"
            );
            let mut fragment = String::new();
            table.to_html(markup, &mut fragment);
            out.push(placeholders.protect(fragment));
            i += run;
        } else {
            out.push(lines[i].to_string());
            i += 1;
        }
    }

    if !placeholders.is_empty() {
        tracing::debug!(tables = placeholders.len(), "extracted tables");
    }

    Extraction {
        text: out.join("\n"),
        placeholders,
    }
}
