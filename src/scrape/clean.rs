//! Cell cleaning: entity decoding and boilerplate removal

use regex::{Captures, Regex};
use std::sync::OnceLock;

/// Fixed labels the pages prepend to lyrics/credit cells; they carry no
/// track data and are removed wherever they appear.
const BOILERPLATE_LABELS: &[&str] = &["Tekst:", "Origineel nummer:"];

fn entity_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"&#(\d+);").unwrap())
}

/// Decode the numeric HTML entities the source pages actually emit.
/// Unknown numeric entities are left untouched.
fn decode_entities(text: &str) -> String {
    entity_re()
        .replace_all(text, |caps: &Captures| {
            match &caps[0] {
                "&#8216;" => "\u{2018}", // left single quote
                "&#8217;" => "'",
                "&#8220;" => "\"",
                "&#8221;" => "\"",
                "&#8211;" => "-",
                "&#8212;" => "\u{2014}", // em dash
                "&#8230;" => "...",
                other => other,
            }
            .to_string()
        })
        .into_owned()
}

/// Clean one raw cell into its non-empty text lines.
///
/// Decodes entities, strips the fixed boilerplate labels, drops blank
/// lines, and removes the single stray leading space the page generator
/// leaves on the last line of some cells. Returns `None` when nothing
/// remains.
pub fn clean_cell(cell: &str) -> Option<String> {
    let mut text = decode_entities(cell);
    for label in BOILERPLATE_LABELS {
        text = text.replace(label, "");
    }

    let mut lines: Vec<&str> = text
        .trim()
        .lines()
        .filter(|line| !line.trim().is_empty())
        .collect();

    if let Some(last) = lines.last_mut() {
        if let Some(stripped) = last.strip_prefix(' ') {
            *last = stripped;
        }
    }

    let cleaned = lines.join("\n");
    if cleaned.is_empty() {
        None
    } else {
        Some(cleaned)
    }
}

/// Clean every raw cell, dropping the ones that clean to nothing.
pub fn clean_cells(cells: &[String]) -> Vec<String> {
    cells.iter().filter_map(|cell| clean_cell(cell)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decodes_known_entities() {
        assert_eq!(
            clean_cell("Zo&#8217;n feest &#8211; deel 2").as_deref(),
            Some("Zo'n feest - deel 2")
        );
        assert_eq!(
            clean_cell("&#8220;Alaaf&#8221;&#8230;").as_deref(),
            Some("\"Alaaf\"...")
        );
    }

    #[test]
    fn test_unknown_entity_passes_through() {
        assert_eq!(clean_cell("A&#9999;B").as_deref(), Some("A&#9999;B"));
    }

    #[test]
    fn test_strips_boilerplate_labels() {
        assert_eq!(
            clean_cell("Tekst: Jan Janssen").as_deref(),
            Some("Jan Janssen")
        );
        assert_eq!(
            clean_cell("Origineel nummer: Hossa").as_deref(),
            Some("Hossa")
        );
    }

    #[test]
    fn test_drops_blank_lines() {
        assert_eq!(
            clean_cell("12\n\n   \nAlaaf").as_deref(),
            Some("12\nAlaaf")
        );
    }

    #[test]
    fn test_last_line_single_leading_space_removed() {
        assert_eq!(
            clean_cell("Alaaf\n DJ Piet").as_deref(),
            Some("Alaaf\nDJ Piet")
        );
        // only one space comes off, and only from the last line
        assert_eq!(
            clean_cell("Alaaf\n  DJ Piet").as_deref(),
            Some("Alaaf\n DJ Piet")
        );
    }

    #[test]
    fn test_empty_cell_cleans_to_none() {
        assert_eq!(clean_cell(""), None);
        assert_eq!(clean_cell("   \n  "), None);
        assert_eq!(clean_cell("Tekst:"), None);
    }

    #[test]
    fn test_clean_cells_filters_empties() {
        let raw = vec![
            "12".to_string(),
            "".to_string(),
            "Alaaf".to_string(),
            "  ".to_string(),
        ];
        assert_eq!(clean_cells(&raw), vec!["12", "Alaaf"]);
    }
}
