//! Data model for one scraped playlist page
//!
//! These types are independent of both the input side (the scraped page)
//! and the output side (audio file tags); the segmenter produces them and
//! the apply pipeline consumes them.

mod header;
mod track;

pub use header::PageHeader;
pub use track::{TrackList, TrackRecord};
