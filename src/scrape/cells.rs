//! `<td>` cell extraction
//!
//! The source pages are crude generated tables, not well-formed HTML, so
//! this is a positional scan rather than a real parser: every
//! `<td ...> ... </td>` span is located by string search and its markup
//! replaced by newlines, leaving each nested element's text on its own
//! line.

use regex::Regex;
use std::sync::OnceLock;

fn tag_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"<[^>]+>").unwrap())
}

/// Extract the text content of every `<td>` cell, in document order.
///
/// Each returned block is the cell's text with tags replaced by newlines
/// and outer whitespace trimmed; blocks may be empty (decorative cells)
/// and are filtered later by the cleaner. An unterminated trailing `<td`
/// is dropped.
pub fn extract_cells(html: &str) -> Vec<String> {
    let mut cells = Vec::new();
    let mut from = 0;

    while let Some(open_rel) = html[from..].find("<td") {
        let open = from + open_rel;
        let Some(close_rel) = html[open..].find("</td>") else {
            break;
        };
        let end = open + close_rel + "</td>".len();

        let text = tag_re().replace_all(&html[open..end], "\n");
        cells.push(text.trim().to_string());

        from = end;
    }

    cells
}
