//! Playlist page scraping
//!
//! Retrieves the playlist page and reduces it to the ordered sequence of
//! cleaned table-cell blocks the segmenter consumes. No interpretation of
//! the content happens here; this side only fetches, extracts and cleans.

mod cells;
mod clean;
mod fetch;

pub use cells::extract_cells;
pub use clean::{clean_cell, clean_cells};
pub use fetch::{fetch_page, FetchError};

use anyhow::Result;

/// Fetch a playlist page and return its cleaned `<td>` cell blocks in
/// document order.
pub fn scrape_page(url: &str) -> Result<Vec<String>> {
    let html = fetch_page(url)?;

    let raw = extract_cells(&html);
    log::info!("Extracted {} table cells from {}", raw.len(), url);

    let cleaned = clean_cells(&raw);
    log::debug!("{} cells remain after cleaning", cleaned.len());

    Ok(cleaned)
}
