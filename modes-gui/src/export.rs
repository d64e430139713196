//! Chart export to JSON.

use anyhow::{Context, Result};
use modes_core::ModeCard;
use std::fs::File;
use std::io::Write;
use std::path::Path;

/// Saves the currently displayed mode cards to a JSON file.
///
/// Each card carries its mode definition, corrected scale notes, chord names,
/// triads and highlight set, so the file can be read without this program.
///
/// # Arguments
/// * `cards` - The cards to save, usually all seven for the current root
/// * `path` - File path to write (e.g., "modes_chart.json")
pub fn export_chart(cards: &[ModeCard], path: &Path) -> Result<()> {
    let json_string = serde_json::to_string_pretty(cards).context("Failed to serialize chart")?;
    let mut file = File::create(path)
        .with_context(|| format!("Failed to create {}", path.display()))?;
    file.write_all(json_string.as_bytes())?;
    log::info!("[EXPORT] Wrote {} mode cards to {}", cards.len(), path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn writes_readable_json() {
        let path = std::env::temp_dir().join(format!("modes-chart-{}.json", std::process::id()));
        let chart = modes_core::build_chart("D").unwrap();
        export_chart(&chart, &path).unwrap();

        let text = std::fs::read_to_string(&path).unwrap();
        let value: serde_json::Value = serde_json::from_str(&text).unwrap();
        assert_eq!(value.as_array().map(Vec::len), Some(7));
        assert_eq!(value[2]["scale_notes"][1], "Eb");
        let _ = std::fs::remove_file(&path);
    }

    #[test]
    fn unwritable_path_is_an_error() {
        let path = std::env::temp_dir().join("no-such-dir-for-modes").join("chart.json");
        assert!(export_chart(&[], &path).is_err());
    }
}
