//! Applying segmented page data to audio files on disk

pub mod config;
pub mod locate;
pub mod pipeline;
pub mod tags;

pub use config::ApplyConfig;
pub use pipeline::{sanitize_filename, ApplyPipeline, ApplyReport};
pub use tags::{read_tags, write_tags, TagValues};
