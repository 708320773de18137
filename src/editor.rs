//! Interactive per-file tag editor
//!
//! Independent batch tool: walks a directory of audio files in sorted
//! order, shows each file's current tags, prompts for replacements
//! (empty input keeps the current value), saves, and optionally renames
//! the file and hands it to an external trim utility. Shares the tag
//! sink and filename sanitizer with the apply pipeline.

use crate::apply::{read_tags, sanitize_filename, write_tags, TagValues};
use crate::console;
use anyhow::{Context, Result};
use std::path::{Path, PathBuf};
use std::process::Command;
use walkdir::WalkDir;

/// Extensions the editor will touch; everything else is skipped.
pub const SUPPORTED_EXTENSIONS: &[&str] = &["mp3", "flac", "m4a", "wav"];

fn is_supported(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| SUPPORTED_EXTENSIONS.contains(&e.to_lowercase().as_str()))
}

/// Walk `dir` in sorted order and edit every supported audio file.
///
/// Per-file errors are reported and the walk continues; only an unusable
/// directory aborts the run.
pub fn run_editor(dir: &Path, trim_cmd: &str) -> Result<()> {
    anyhow::ensure!(dir.is_dir(), "Directory does not exist: {:?}", dir);

    log::info!("Editing files in {:?}", dir);

    for entry in WalkDir::new(dir)
        .min_depth(1)
        .max_depth(1)
        .sort_by_file_name()
        .into_iter()
        .filter_map(Result::ok)
    {
        let path = entry.into_path();
        if !path.is_file() {
            continue;
        }
        if !is_supported(&path) {
            log::info!("Skipping {:?} (unsupported extension)", path.file_name());
            continue;
        }

        if let Err(e) = edit_file(&path, trim_cmd) {
            log::error!("Failed to process {:?}: {:#}", path, e);
        }
    }

    Ok(())
}

/// Show, edit and save one file's tags, then offer rename and trim.
fn edit_file(path: &Path, trim_cmd: &str) -> Result<()> {
    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();

    println!("{}", "=".repeat(50));
    println!("Processing file: {}", name);
    println!("{}", "=".repeat(50));

    let current = read_tags(path)?;
    let title = current.title.as_deref().unwrap_or("N/A");
    let artist = current.artist.as_deref().unwrap_or("N/A");
    let album = current.album.as_deref().unwrap_or("N/A");
    let year = current.year.as_deref().unwrap_or("N/A");
    let track = current
        .track_number
        .map(|t| t.to_string())
        .unwrap_or_else(|| "N/A".to_string());

    println!("\nCurrent tags:");
    println!("  - Title: {}", title);
    println!("  - Artist: {}", artist);
    println!("  - Album: {}", album);
    println!("  - Year: {}", year);
    println!("  - Track number: {}", track);
    println!("  - Filename: {}", name);

    println!("\nEnter new values (press Enter to keep the current value):");
    let new_title = console::prompt_or_keep("New title", title)?;
    let new_artist = console::prompt_or_keep("New artist", artist)?;
    let new_year = console::prompt_or_keep("New year", year)?;
    let new_track = console::prompt_or_keep("New track number", &track)?;

    let values = TagValues {
        title: placeholder_to_none(&new_title),
        artist: placeholder_to_none(&new_artist),
        album: None,
        genre: None,
        year: placeholder_to_none(&new_year),
        track_number: new_track.parse().ok(),
    };
    write_tags(path, &values)?;
    println!("\nTags saved.");

    // Track the possibly-renamed location for the trim step.
    let mut path = path.to_path_buf();
    if console::confirm("\nRename the file from these tags?")? {
        match rename_from_tags(&path, &new_track, &new_artist, &new_title) {
            Ok(new_path) => {
                println!("Renamed to: {:?}", new_path.file_name().unwrap_or_default());
                path = new_path;
            }
            Err(e) => log::error!("Rename failed: {:#}", e),
        }
    }

    if console::confirm("\nTrim this file?")? {
        run_trim(trim_cmd, &path);
    }

    println!("\nDone with this file.\n");
    Ok(())
}

/// Treat the `N/A` display placeholder as "leave the field alone".
fn placeholder_to_none(value: &str) -> Option<String> {
    if value == "N/A" {
        None
    } else {
        Some(value.to_string())
    }
}

/// Rename to `"<track> - <artist> - <title><ext>"`, sanitized.
fn rename_from_tags(path: &Path, track: &str, artist: &str, title: &str) -> Result<PathBuf> {
    let ext = path
        .extension()
        .map(|e| format!(".{}", e.to_string_lossy()))
        .unwrap_or_default();
    let new_name = sanitize_filename(&format!("{} - {} - {}{}", track, artist, title, ext));

    let new_path = path.with_file_name(&new_name);
    std::fs::rename(path, &new_path)
        .with_context(|| format!("Failed to rename {:?} to {:?}", path, new_name))?;
    Ok(new_path)
}

/// Invoke the external trim utility with the file as its argument.
/// Failures are reported, never fatal.
fn run_trim(trim_cmd: &str, path: &Path) {
    println!("Running {} on {:?}...", trim_cmd, path.file_name().unwrap_or_default());
    match Command::new(trim_cmd).arg(path).status() {
        Ok(status) if status.success() => println!("{} finished.", trim_cmd),
        Ok(status) => log::error!("{} exited with {}", trim_cmd, status),
        Err(e) => log::error!(
            "Could not run {}: {} (is it in place and executable?)",
            trim_cmd,
            e
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_supported_extensions() {
        assert!(is_supported(Path::new("/music/1.mp3")));
        assert!(is_supported(Path::new("/music/1.FLAC")));
        assert!(is_supported(Path::new("/music/1.m4a")));
        assert!(is_supported(Path::new("/music/1.wav")));
        assert!(!is_supported(Path::new("/music/1.ogg")));
        assert!(!is_supported(Path::new("/music/cover.jpg")));
        assert!(!is_supported(Path::new("/music/noext")));
    }

    #[test]
    fn test_placeholder_to_none() {
        assert_eq!(placeholder_to_none("N/A"), None);
        assert_eq!(placeholder_to_none("Alaaf"), Some("Alaaf".to_string()));
    }
}
