//! Track materialization: per-record file lookup, tag writes and renames

use super::config::ApplyConfig;
use super::locate::resolve_track_file;
use super::tags::{write_tags, TagValues};
use crate::model::{PageHeader, TrackList, TrackRecord};
use anyhow::Result;
use std::fs;
use std::path::{Path, PathBuf};

/// Characters that cannot appear in filenames on common filesystems;
/// removed from titles before they are used in a name.
const ILLEGAL_FILENAME_CHARS: &[char] = &['<', '>', ':', '"', '/', '\\', '|', '?', '*'];

/// Strip filename-illegal characters. No other normalization: diacritics,
/// length limits and collisions are the caller's problem.
pub fn sanitize_filename(name: &str) -> String {
    name.chars()
        .filter(|c| !ILLEGAL_FILENAME_CHARS.contains(c))
        .collect()
}

/// Outcome counts for one apply run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ApplyReport {
    /// Records whose tags were written.
    pub tagged: usize,
    /// Files renamed to their canonical name.
    pub renamed: usize,
    /// Records skipped (blank, or no matching file).
    pub skipped: usize,
    /// Records whose tag write failed.
    pub failed: usize,
}

/// Applies segmented page data to the audio files in one directory.
///
/// Strictly sequential; every per-track failure is logged and isolated,
/// so track `i` never blocks track `i + 1`.
pub struct ApplyPipeline {
    config: ApplyConfig,
}

impl ApplyPipeline {
    pub fn new(config: ApplyConfig) -> Self {
        Self { config }
    }

    /// Tag and rename every track in the list.
    ///
    /// Per record, in order: skip if blank, resolve the key token to a
    /// file (warn and skip when nothing matches), write the tags, and
    /// only after a successful write rename the file to its canonical
    /// name. A failed tag write suppresses the rename, keeping the
    /// key-stem name so the track can be matched again; a failed rename
    /// leaves the already-durable tag write in place.
    pub fn apply(&self, header: &PageHeader, tracks: &TrackList) -> Result<ApplyReport> {
        anyhow::ensure!(
            self.config.music_dir.is_dir(),
            "Music directory does not exist: {:?}",
            self.config.music_dir
        );

        let mut report = ApplyReport::default();

        for (i, record) in tracks.iter().enumerate() {
            let number = self.config.track_base + i as u32;

            if record.is_blank() {
                log::debug!("Track {}: blank record, skipping", number);
                report.skipped += 1;
                continue;
            }

            // a non-blank record always has a first token
            let key = record.key().unwrap();
            let Some(path) = resolve_track_file(&self.config.music_dir, key) else {
                log::warn!(
                    "Track {}: no file matching {:?} in {:?}",
                    number,
                    format!("{}.*", key),
                    self.config.music_dir
                );
                report.skipped += 1;
                continue;
            };

            log::info!("Track {}: tagging {:?}", number, path);
            let values = self.tag_values(header, record, number);
            if let Err(e) = write_tags(&path, &values) {
                log::error!("Track {}: tag write failed: {:#}", number, e);
                report.failed += 1;
                continue;
            }
            report.tagged += 1;

            match self.rename_to_canonical(&path, record, number) {
                Ok(Some(new_path)) => {
                    log::info!("Track {}: renamed to {:?}", number, new_path);
                    report.renamed += 1;
                }
                Ok(None) => {
                    log::debug!("Track {}: filename already canonical", number);
                }
                Err(e) => {
                    log::error!(
                        "Track {}: rename failed (tags already written): {:#}",
                        number,
                        e
                    );
                }
            }
        }

        log::info!(
            "Apply finished: {} tagged, {} renamed, {} skipped, {} failed",
            report.tagged,
            report.renamed,
            report.skipped,
            report.failed
        );
        Ok(report)
    }

    /// Derive the tag values for one record.
    fn tag_values(&self, header: &PageHeader, record: &TrackRecord, number: u32) -> TagValues {
        TagValues {
            title: record.title().map(str::to_string),
            artist: record.artist().map(str::to_string),
            album: header.album().map(str::to_string),
            genre: Some(self.config.genre.clone()),
            year: header.year().map(str::to_string),
            track_number: Some(number),
        }
    }

    /// Rename the file to `"<number> - <sanitized title><ext>"`.
    ///
    /// Returns the new path, or `None` when no rename happened: the file
    /// already carries the canonical name (re-running is a no-op), or the
    /// record has no title to build one from.
    fn rename_to_canonical(
        &self,
        path: &Path,
        record: &TrackRecord,
        number: u32,
    ) -> Result<Option<PathBuf>> {
        let Some(title) = record.title() else {
            log::debug!("Track {}: no title, keeping {:?}", number, path);
            return Ok(None);
        };

        let canonical = canonical_file_name(number, title, path);
        if path.file_name().is_some_and(|name| name == canonical.as_str()) {
            return Ok(None);
        }

        let new_path = path.with_file_name(&canonical);
        fs::rename(path, &new_path)
            .map_err(|e| anyhow::anyhow!("Failed to rename {:?} to {:?}: {}", path, canonical, e))?;
        Ok(Some(new_path))
    }
}

/// Canonical filename for a track: `"<number> - <sanitized title>"` with
/// the original extension preserved.
fn canonical_file_name(number: u32, title: &str, original: &Path) -> String {
    let ext = original
        .extension()
        .map(|e| format!(".{}", e.to_string_lossy()))
        .unwrap_or_default();
    format!("{} - {}{}", number, sanitize_filename(title), ext)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn record(tokens: &[&str]) -> TrackRecord {
        let mut r = TrackRecord::new();
        for t in tokens {
            r.push(t.to_string());
        }
        r
    }

    fn header(tokens: &[&str]) -> PageHeader {
        PageHeader::new(tokens.iter().map(|t| t.to_string()).collect())
    }

    #[test]
    fn test_sanitize_removes_illegal_characters() {
        assert_eq!(sanitize_filename(r#"A<B>C:D"E/F\G|H?I*J"#), "ABCDEFGHIJ");
        assert_eq!(sanitize_filename("Zo'n feest!"), "Zo'n feest!");
    }

    #[test]
    fn test_canonical_file_name() {
        assert_eq!(
            canonical_file_name(0, "Alaaf", Path::new("/music/12.mp3")),
            "0 - Alaaf.mp3"
        );
        assert_eq!(
            canonical_file_name(3, "A/B: C?", Path::new("/music/7.flac")),
            "3 - AB C.flac"
        );
    }

    #[test]
    fn test_tag_values_come_from_record_and_header() {
        let pipeline = ApplyPipeline::new(
            ApplyConfig::new(PathBuf::from("/music")).with_track_base(1),
        );
        let h = header(&["Carnaval 2023", "x", "2023", "y", "z"]);
        let r = record(&["12", "Alaaf", "DJ Piet"]);

        let values = pipeline.tag_values(&h, &r, 1);
        assert_eq!(values.title.as_deref(), Some("Alaaf"));
        assert_eq!(values.artist.as_deref(), Some("DJ Piet"));
        assert_eq!(values.album.as_deref(), Some("Carnaval 2023"));
        assert_eq!(values.genre.as_deref(), Some("Carnaval"));
        assert_eq!(values.year.as_deref(), Some("2023"));
        assert_eq!(values.track_number, Some(1));
    }

    #[test]
    fn test_short_header_yields_absent_fields() {
        let pipeline = ApplyPipeline::new(ApplyConfig::new(PathBuf::from("/music")));
        let values = pipeline.tag_values(&header(&["Carnaval 2023"]), &record(&["12"]), 0);

        assert_eq!(values.album.as_deref(), Some("Carnaval 2023"));
        assert_eq!(values.year, None);
        assert_eq!(values.title, None);
        assert_eq!(values.artist, None);
    }

    #[test]
    fn test_rename_moves_file() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("12.mp3");
        fs::write(&path, b"x").unwrap();

        let pipeline = ApplyPipeline::new(ApplyConfig::new(tmp.path().to_path_buf()));
        let renamed = pipeline
            .rename_to_canonical(&path, &record(&["12", "Alaaf"]), 0)
            .unwrap();

        assert_eq!(renamed, Some(tmp.path().join("0 - Alaaf.mp3")));
        assert!(!path.exists());
        assert!(tmp.path().join("0 - Alaaf.mp3").exists());
    }

    #[test]
    fn test_rename_is_idempotent() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("0 - Alaaf.mp3");
        fs::write(&path, b"x").unwrap();

        let pipeline = ApplyPipeline::new(ApplyConfig::new(tmp.path().to_path_buf()));
        let renamed = pipeline
            .rename_to_canonical(&path, &record(&["12", "Alaaf"]), 0)
            .unwrap();

        assert_eq!(renamed, None);
        assert!(path.exists());
    }

    #[test]
    fn test_no_title_means_no_rename() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("12.mp3");
        fs::write(&path, b"x").unwrap();

        let pipeline = ApplyPipeline::new(ApplyConfig::new(tmp.path().to_path_buf()));
        let renamed = pipeline
            .rename_to_canonical(&path, &record(&["12"]), 0)
            .unwrap();

        assert_eq!(renamed, None);
        assert!(path.exists());
    }

    #[test]
    fn test_blank_and_unmatched_records_are_skipped() {
        let tmp = TempDir::new().unwrap();

        let mut tracks = TrackList::new();
        tracks.push(record(&[" ", ""]));
        tracks.push(record(&["99", "Nowhere"]));

        let pipeline = ApplyPipeline::new(ApplyConfig::new(tmp.path().to_path_buf()));
        let report = pipeline
            .apply(&header(&["Album", "x", "2023", "y", "z"]), &tracks)
            .unwrap();

        assert_eq!(report.skipped, 2);
        assert_eq!(report.tagged, 0);
        assert_eq!(report.renamed, 0);
        assert_eq!(report.failed, 0);
    }

    #[test]
    fn test_failed_tag_write_suppresses_rename() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("12.mp3");
        fs::write(&path, b"not actually audio").unwrap();

        let mut tracks = TrackList::new();
        tracks.push(record(&["12", "Alaaf", "DJ Piet"]));

        let pipeline = ApplyPipeline::new(ApplyConfig::new(tmp.path().to_path_buf()));
        let report = pipeline
            .apply(&header(&["Album", "x", "2023", "y", "z"]), &tracks)
            .unwrap();

        assert_eq!(report.failed, 1);
        assert_eq!(report.tagged, 0);
        // the file keeps its key-stem name
        assert!(path.exists());
        assert!(!tmp.path().join("0 - Alaaf.mp3").exists());
    }

    #[test]
    fn test_missing_directory_is_an_error() {
        let pipeline =
            ApplyPipeline::new(ApplyConfig::new(PathBuf::from("/no/such/directory")));
        let result = pipeline.apply(&header(&[]), &TrackList::new());
        assert!(result.is_err());
    }
}
