//! Segmentation of the flattened page text into header and track records
//!
//! The scraped cells arrive as cleaned multi-line blocks with no
//! delimiters left. This module flattens them into one ordered token
//! stream and partitions it: the first [`PageHeader::FIELDS`] tokens form
//! the page header, everything after belongs to exactly one track record.
//! The partition is pure: no token is dropped or reordered, so
//! concatenating header and records reproduces the stream.

mod classify;

pub use classify::{DecimalClassifier, TokenClass, TokenClassifier};

use crate::model::{PageHeader, TrackList, TrackRecord};

/// Outcome of segmenting one page.
#[derive(Debug, Clone)]
pub struct Segmented {
    pub header: PageHeader,
    pub tracks: TrackList,
}

/// Partition the cleaned cells into a header and a track list.
///
/// Cells that are empty or whitespace-only are skipped; every line of
/// every other cell becomes one token, in page order. Track boundaries
/// after the header follow three rules, applied per token:
///
/// * a numeric token always opens a new record, whatever the size of the
///   current one; it is the file-matching key, the one unambiguous
///   boundary signal the pages offer;
/// * a text token joins the current record while it holds fewer than
///   [`TrackRecord::MAX_FIELDS`] tokens; at the cap it opens a new,
///   as-yet-unkeyed record instead of being dropped;
/// * a text token also seeds the very first record when no key has been
///   seen yet (malformed pages can lose a key token).
///
/// This is a best-effort heuristic with no backtracking; pages that do
/// not look like "five header fields, then one key per track, then up to
/// four text fields" will segment, just not meaningfully.
pub fn segment<C: TokenClassifier>(cells: &[String], classifier: &C) -> Segmented {
    let mut tokens = cells
        .iter()
        .filter(|cell| !cell.trim().is_empty())
        .flat_map(|cell| cell.lines())
        .map(str::to_string);

    let header = PageHeader::new(tokens.by_ref().take(PageHeader::FIELDS).collect());

    let mut records = vec![TrackRecord::new()];
    for token in tokens {
        match classifier.classify(&token) {
            TokenClass::Numeric => records.push(TrackRecord::starting_with(token)),
            TokenClass::Text => {
                // records is never empty, it is seeded above
                let current = records.last_mut().unwrap();
                if !current.is_empty() && current.len() >= TrackRecord::MAX_FIELDS {
                    records.push(TrackRecord::starting_with(token));
                } else {
                    current.push(token);
                }
            }
        }
    }

    // The seeded record stays empty when the first track token is
    // numeric; an empty record carries no tokens and is not a track.
    let mut tracks = TrackList::new();
    for record in records.into_iter().filter(|r| !r.is_empty()) {
        tracks.push(record);
    }

    log::debug!(
        "Segmented page: {} header fields, {} track records",
        header.len(),
        tracks.len()
    );

    Segmented { header, tracks }
}
