//! Minimal stdin prompting for the interactive entry points
//!
//! The processing core takes explicit parameters; prompting exists only
//! here, used by the binary when arguments are omitted and by the editor.

use anyhow::{Context, Result};
use std::io::{self, Write};

/// Ask for a line of input; the answer is trimmed.
pub fn prompt(label: &str) -> Result<String> {
    print!("{}: ", label);
    io::stdout().flush()?;

    let mut line = String::new();
    io::stdin()
        .read_line(&mut line)
        .context("Failed to read from stdin")?;
    Ok(line.trim().to_string())
}

/// Ask for a replacement value, keeping `current` on empty input.
pub fn prompt_or_keep(label: &str, current: &str) -> Result<String> {
    let answer = prompt(&format!("{} [{}]", label, current))?;
    if answer.is_empty() {
        Ok(current.to_string())
    } else {
        Ok(answer)
    }
}

/// Yes/no question; only an explicit yes answers true.
pub fn confirm(label: &str) -> Result<bool> {
    let answer = prompt(&format!("{} (y/n)", label))?;
    Ok(matches!(answer.to_lowercase().as_str(), "y" | "yes" | "ja"))
}
