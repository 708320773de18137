use serde::{Deserialize, Serialize};

/// Playlist-level metadata: the first tokens of the flattened page stream.
///
/// The fields are positional. Index 0 is the album/playlist name and
/// index 2 the year; indices 1, 3 and 4 are carried but not consumed
/// anywhere downstream. Pages that yield fewer than [`PageHeader::FIELDS`]
/// tokens produce a short header, and lookups past its actual length
/// return `None` instead of failing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageHeader {
    tokens: Vec<String>,
}

impl PageHeader {
    /// Number of tokens a full header holds.
    pub const FIELDS: usize = 5;

    /// Build a header from the leading tokens of the stream.
    pub fn new(tokens: Vec<String>) -> Self {
        Self { tokens }
    }

    /// Album / playlist name (position 0).
    pub fn album(&self) -> Option<&str> {
        self.get(0)
    }

    /// Release year as it appears on the page (position 2).
    pub fn year(&self) -> Option<&str> {
        self.get(2)
    }

    /// Positional lookup; `None` past the end of a short header.
    pub fn get(&self, index: usize) -> Option<&str> {
        self.tokens.get(index).map(String::as_str)
    }

    /// All header tokens in stream order.
    pub fn tokens(&self) -> &[String] {
        &self.tokens
    }

    /// Number of tokens actually present (at most [`PageHeader::FIELDS`]).
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn header(tokens: &[&str]) -> PageHeader {
        PageHeader::new(tokens.iter().map(|t| t.to_string()).collect())
    }

    #[test]
    fn test_positional_fields() {
        let h = header(&["Carnaval 2023", "x", "2023", "y", "z"]);
        assert_eq!(h.album(), Some("Carnaval 2023"));
        assert_eq!(h.year(), Some("2023"));
        assert_eq!(h.get(4), Some("z"));
        assert_eq!(h.len(), 5);
    }

    #[test]
    fn test_short_header_lookups_are_none() {
        let h = header(&["Carnaval 2023", "x"]);
        assert_eq!(h.album(), Some("Carnaval 2023"));
        assert_eq!(h.year(), None);
        assert_eq!(h.get(4), None);
        assert_eq!(h.len(), 2);
    }

    #[test]
    fn test_empty_header() {
        let h = header(&[]);
        assert!(h.is_empty());
        assert_eq!(h.album(), None);
        assert_eq!(h.year(), None);
    }
}
