//! Carnaval tagger
//!
//! Scrapes a playlist page listing track numbers, titles and performers,
//! reconstructs the track list from the flattened cell text, writes the
//! result as audio metadata onto local files and renames them to
//! `"<number> - <title>.<ext>"`. A second, interactive mode edits tags
//! file by file.

pub mod apply;
pub mod console;
pub mod editor;
pub mod model;
pub mod scrape;
pub mod segment;

pub use apply::{ApplyConfig, ApplyPipeline, ApplyReport};
pub use segment::{segment, DecimalClassifier, Segmented};
