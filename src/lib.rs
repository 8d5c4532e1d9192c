//! Render loosely formatted, untrusted prose (typically LLM output) into HTML
//! that is safe to inject verbatim.
//!
//! Only a small markdown subset is recognized: `##`–`####` headings, rules,
//! bold and italic, `> ` quotes, flat bullet and numbered lists, and pipe
//! tables. Anything else is escaped and shown as paragraph text. Rendering
//! never fails.
//!
//! ```
//! let html = prosemark::render("## Findings\n\n- **Reach** grew\n- 3 < 4");
//! assert_eq!(
//!     html,
//!     "<h2>Findings</h2><ul><li><strong>Reach</strong> grew</li><li>3 &lt; 4</li></ul>"
//! );
//! ```

mod block;
mod config;
mod error;
mod escape;
mod inline;
mod list;
mod markup;
mod paragraph;
mod placeholder;
mod quote;
mod table;

pub use config::{ClassesConfig, Config, LoggingConfig};
pub use error::{Error, Result};

use markup::Markup;

/// Rendering options. None of them change how the input is parsed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RenderOptions {
    /// When set, each generated element gets `class="<prefix>-<tag>"`.
    pub class_prefix: Option<String>,
}

/// Render with default options.
pub fn render(text: &str) -> String {
    render_with_options(text, &RenderOptions::default())
}

/// Render with a styling hook.
///
/// Stages run in a fixed order. Tables are pulled out and protected before
/// escaping, everything after escaping works on safe text, and bold runs
/// before italic since both use `*`.
pub fn render_with_options(text: &str, options: &RenderOptions) -> String {
    if text.trim().is_empty() {
        return String::new();
    }

    let markup = Markup::new(options);
    let text = text.replace("\r\n", "\n");

    let extraction = table::extract_tables(&text, &markup);
    let escaped = escape::escape_protected(extraction);
    let blocks = block::transform_blocks(&escaped, &markup);
    let inline = inline::transform_inline(&blocks, &markup);
    let quoted = quote::transform_blockquotes(&inline, &markup);
    let listed = list::transform_lists(&quoted, &markup);
    let assembled = paragraph::assemble(&listed, &markup);
    let html = paragraph::remove_empty(&assembled);

    tracing::debug!(input = text.len(), output = html.len(), "rendered");
    html
}
