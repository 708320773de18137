use serde::{Deserialize, Serialize};

/// One track's token group as segmented from the page stream.
///
/// Position 0 is the file-matching key (expected numeric, the stem of a
/// file on disk); positions 1 and 2 are title and artist when present.
/// A record holds between 1 and [`TrackRecord::MAX_FIELDS`] tokens once
/// segmentation is done; the cap is enforced by the segmenter, not here.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrackRecord {
    tokens: Vec<String>,
}

impl TrackRecord {
    /// Field cap per record; a sixth token belongs to the next track.
    pub const MAX_FIELDS: usize = 5;

    /// Create an empty record (the open record the segmenter fills).
    pub fn new() -> Self {
        Self { tokens: Vec::new() }
    }

    /// Create a record opened by its first token.
    pub fn starting_with(token: String) -> Self {
        Self {
            tokens: vec![token],
        }
    }

    /// Append a token to this record.
    pub fn push(&mut self, token: String) {
        self.tokens.push(token);
    }

    /// File-matching key (position 0).
    pub fn key(&self) -> Option<&str> {
        self.get(0)
    }

    /// Track title (position 1).
    pub fn title(&self) -> Option<&str> {
        self.get(1)
    }

    /// Performing artist (position 2).
    pub fn artist(&self) -> Option<&str> {
        self.get(2)
    }

    /// Positional lookup; `None` past the end.
    pub fn get(&self, index: usize) -> Option<&str> {
        self.tokens.get(index).map(String::as_str)
    }

    /// All tokens in stream order.
    pub fn tokens(&self) -> &[String] {
        &self.tokens
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// True when the record carries no usable content: it is empty or
    /// every token is blank/whitespace. Such records are skipped by the
    /// apply pipeline without side effects.
    pub fn is_blank(&self) -> bool {
        self.tokens.iter().all(|t| t.trim().is_empty())
    }
}

/// Ordered list of track records; the position of a record is its
/// intended track number (offset by the configured base).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrackList {
    records: Vec<TrackRecord>,
}

impl TrackList {
    /// Create an empty track list.
    pub fn new() -> Self {
        Self {
            records: Vec::new(),
        }
    }

    /// Append a record, keeping stream order.
    pub fn push(&mut self, record: TrackRecord) {
        self.records.push(record);
    }

    /// Records in stream order.
    pub fn iter(&self) -> impl Iterator<Item = &TrackRecord> {
        self.records.iter()
    }

    /// All records as a slice.
    pub fn records(&self) -> &[TrackRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
