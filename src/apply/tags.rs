//! Tag container access
//!
//! One seam around lofty: probe the file, work with its primary tag type,
//! persist in place. Which frame a field maps to in a given container is
//! lofty's concern, not ours.

use anyhow::{Context, Result};
use lofty::config::WriteOptions;
use lofty::prelude::*;
use lofty::probe::Probe;
use lofty::tag::Tag;
use std::path::Path;

/// Field values to persist into one file's tag container. Absent optional
/// values leave the file's existing value untouched.
#[derive(Debug, Clone, Default)]
pub struct TagValues {
    pub title: Option<String>,
    pub artist: Option<String>,
    pub album: Option<String>,
    pub genre: Option<String>,
    pub year: Option<String>,
    pub track_number: Option<u32>,
}

/// Write the given values into the file's primary tag, creating the tag
/// if the file has none yet, and save in place.
pub fn write_tags(path: &Path, values: &TagValues) -> Result<()> {
    let mut tagged_file = Probe::open(path)
        .with_context(|| format!("Failed to open file for tagging: {:?}", path))?
        .read()
        .with_context(|| format!("Failed to read tags from: {:?}", path))?;

    let tag_type = tagged_file.file_type().primary_tag_type();

    let tag = match tagged_file.tag_mut(tag_type) {
        Some(t) => t,
        None => {
            tagged_file.insert_tag(Tag::new(tag_type));
            tagged_file.tag_mut(tag_type).unwrap()
        }
    };

    if let Some(ref title) = values.title {
        tag.insert_text(ItemKey::TrackTitle, title.clone());
    }
    if let Some(ref artist) = values.artist {
        tag.insert_text(ItemKey::TrackArtist, artist.clone());
    }
    if let Some(ref album) = values.album {
        tag.insert_text(ItemKey::AlbumTitle, album.clone());
    }
    if let Some(ref genre) = values.genre {
        tag.insert_text(ItemKey::Genre, genre.clone());
    }
    if let Some(ref year) = values.year {
        tag.insert_text(ItemKey::Year, year.clone());
    }
    if let Some(number) = values.track_number {
        tag.set_track(number);
    }

    tagged_file
        .save_to_path(path, WriteOptions::default())
        .with_context(|| format!("Failed to save tags to: {:?}", path))?;

    Ok(())
}

/// Read the current values from the file's primary tag (or its first tag
/// when the primary type is absent). A file without any tag yields all
/// `None`.
pub fn read_tags(path: &Path) -> Result<TagValues> {
    let tagged_file = Probe::open(path)
        .with_context(|| format!("Failed to open file: {:?}", path))?
        .read()
        .with_context(|| format!("Failed to read tags from: {:?}", path))?;

    let Some(tag) = tagged_file.primary_tag().or_else(|| tagged_file.first_tag()) else {
        return Ok(TagValues::default());
    };

    Ok(TagValues {
        title: tag.title().map(|s| s.to_string()),
        artist: tag.artist().map(|s| s.to_string()),
        album: tag.album().map(|s| s.to_string()),
        genre: tag.genre().map(|s| s.to_string()),
        year: tag
            .get_string(&ItemKey::Year)
            .map(str::to_string)
            .or_else(|| tag.year().map(|y| y.to_string())),
        track_number: tag.track(),
    })
}
