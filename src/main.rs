use anyhow::Result;
use carnaval_tagger::{console, editor, scrape, segment};
use carnaval_tagger::{ApplyConfig, ApplyPipeline, DecimalClassifier};
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};

#[derive(Parser, Debug)]
#[command(name = "carnaval-tagger")]
#[command(about = "Tag and rename audio files from a scraped playlist page", long_about = None)]
struct Cli {
    /// Verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Scrape a playlist page and tag + rename the files in a directory
    Tag {
        /// Directory with audio files named after the page's track keys
        #[arg(short, long)]
        dir: Option<String>,

        /// URL of the playlist page to scan
        #[arg(short, long)]
        url: Option<String>,

        /// Genre written to every track
        #[arg(long, default_value = "Carnaval")]
        genre: String,

        /// Base for track numbering (0 keeps the historical numbering,
        /// 1 gives conventional one-based numbers)
        #[arg(long, default_value = "0")]
        track_base: u32,
    },

    /// Interactively edit the tags of every audio file in a directory
    Edit {
        /// Directory with audio files to edit
        #[arg(short, long)]
        dir: Option<String>,

        /// External trim utility invoked per file on request
        #[arg(long, default_value = "./trim.sh")]
        trim_cmd: String,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let log_level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level)).init();

    match cli.command {
        Commands::Tag {
            dir,
            url,
            genre,
            track_base,
        } => run_tag(dir, url, genre, track_base),
        Commands::Edit { dir, trim_cmd } => {
            let dir = resolve_dir(dir)?;
            editor::run_editor(&dir, &trim_cmd)
        }
    }
}

/// The main flow: fetch, segment, apply.
fn run_tag(dir: Option<String>, url: Option<String>, genre: String, track_base: u32) -> Result<()> {
    let dir = resolve_dir(dir)?;
    let url = match url {
        Some(url) => url,
        None => console::prompt("Enter a webpage to scan")?,
    };

    let cells = scrape::scrape_page(&url)?;
    let segmented = segment::segment(&cells, &DecimalClassifier);

    log::info!(
        "Playlist: {} ({}), {} track records",
        segmented.header.album().unwrap_or("unknown"),
        segmented.header.year().unwrap_or("unknown year"),
        segmented.tracks.len()
    );

    let config = ApplyConfig::new(dir)
        .with_genre(genre)
        .with_track_base(track_base);
    let pipeline = ApplyPipeline::new(config);
    let report = pipeline.apply(&segmented.header, &segmented.tracks)?;

    log::info!(
        "Run complete: {} tagged, {} renamed, {} skipped, {} failed",
        report.tagged,
        report.renamed,
        report.skipped,
        report.failed
    );
    Ok(())
}

/// Take the directory from the CLI or prompt for it, expanding `~`.
fn resolve_dir(dir: Option<String>) -> Result<PathBuf> {
    let dir = match dir {
        Some(dir) => dir,
        None => console::prompt("Enter the directory with the music files")?,
    };
    let expanded = shellexpand::tilde(&dir);
    Ok(Path::new(expanded.as_ref()).to_path_buf())
}
