//! # Configuration
//!
//! Start-up settings loaded from a JSON file, overlaid with command line flags.
//! Missing or broken files never stop the application; every bad value falls
//! back to its default with a warning.

use anyhow::{Context, Result};
use modes_core::fretboard::{DEFAULT_FRET_COUNT, GuitarTuning};
use modes_core::notes::ROOT_CHOICES;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Config file looked up in the working directory when `--config` is not given.
pub const DEFAULT_CONFIG_PATH: &str = "modes_config.json";

const MAX_FRETS: u8 = 24;
const MAX_OCTAVES: u8 = 4;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Root note selected at start-up.
    pub root_note: String,
    /// Frets drawn per string, counting the open string.
    pub fret_count: u8,
    pub keyboard_octaves: u8,
    /// Open-string note names, highest-pitched string first.
    pub tuning: Vec<String>,
    /// Where "Export chart" writes its JSON.
    pub export_path: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            root_note: "C".to_string(),
            fret_count: DEFAULT_FRET_COUNT,
            keyboard_octaves: 2,
            tuning: GuitarTuning::standard().labels,
            export_path: "modes_chart.json".to_string(),
        }
    }
}

impl AppConfig {
    /// Replaces out-of-range or unresolvable values with defaults.
    pub fn validated(mut self) -> Self {
        let defaults = AppConfig::default();

        if !ROOT_CHOICES.contains(&self.root_note.as_str()) {
            log::warn!("[CONFIG] Unknown root note {:?}, using {}", self.root_note, defaults.root_note);
            self.root_note = defaults.root_note;
        }
        if self.fret_count == 0 || self.fret_count > MAX_FRETS {
            log::warn!("[CONFIG] fret_count {} out of range, using {}", self.fret_count, defaults.fret_count);
            self.fret_count = defaults.fret_count;
        }
        if self.keyboard_octaves == 0 || self.keyboard_octaves > MAX_OCTAVES {
            log::warn!(
                "[CONFIG] keyboard_octaves {} out of range, using {}",
                self.keyboard_octaves,
                defaults.keyboard_octaves
            );
            self.keyboard_octaves = defaults.keyboard_octaves;
        }
        if let Err(e) = GuitarTuning::from_names(&self.tuning) {
            log::warn!("[CONFIG] {}, using standard tuning", e);
            self.tuning = defaults.tuning;
        }
        self
    }

    /// The root as one of the static picker choices.
    pub fn root_choice(&self) -> &'static str {
        ROOT_CHOICES
            .iter()
            .copied()
            .find(|choice| *choice == self.root_note)
            .unwrap_or("C")
    }

    pub fn guitar_tuning(&self) -> GuitarTuning {
        GuitarTuning::from_names(&self.tuning).unwrap_or_default()
    }
}

/// Reads and parses a config file.
pub fn read_config(path: &Path) -> Result<AppConfig> {
    let contents = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file {}", path.display()))?;
    parse_config(&contents)
}

pub fn parse_config(contents: &str) -> Result<AppConfig> {
    let config: AppConfig = serde_json::from_str(contents).context("Failed to parse config")?;
    Ok(config.validated())
}

/// Loads the config, falling back to defaults if the file is missing or invalid.
pub fn load_config(path: &Path) -> AppConfig {
    log::info!("[CONFIG] Loading from {:?}", path);

    if !path.exists() {
        log::info!("[CONFIG] Config file doesn't exist, using defaults");
        return AppConfig::default();
    }

    match read_config(path) {
        Ok(config) => {
            log::info!(
                "[CONFIG] Loaded config - root: {}, frets: {}, octaves: {}",
                config.root_note,
                config.fret_count,
                config.keyboard_octaves
            );
            config
        }
        Err(e) => {
            log::warn!("[CONFIG] {:#}, using defaults", e);
            AppConfig::default()
        }
    }
}

/// Options given on the command line.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CliOptions {
    pub config_path: Option<PathBuf>,
    pub root: Option<String>,
    /// Print the chart as text and exit instead of opening a window.
    pub print: bool,
}

impl CliOptions {
    /// Parses `--config <path>`, `--root <note>` and `--print`; the first
    /// element (program name) is skipped and unknown flags are logged.
    pub fn parse(args: &[String]) -> Self {
        let mut options = CliOptions::default();
        let mut iter = args.iter().skip(1);
        while let Some(arg) = iter.next() {
            match arg.as_str() {
                "--print" => options.print = true,
                "--config" => options.config_path = iter.next().map(PathBuf::from),
                "--root" => options.root = iter.next().cloned(),
                other => log::warn!("[MAIN] Ignoring unknown argument {:?}", other),
            }
        }
        options
    }

    pub fn config_path(&self) -> PathBuf {
        self.config_path
            .clone()
            .unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG_PATH))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn partial_file_fills_defaults() {
        let config = parse_config(r#"{ "root_note": "Eb", "fret_count": 15 }"#).unwrap();
        assert_eq!(config.root_note, "Eb");
        assert_eq!(config.fret_count, 15);
        assert_eq!(config.keyboard_octaves, 2);
        assert_eq!(config.tuning, ["E", "B", "G", "D", "A", "E"]);
        assert_eq!(config.root_choice(), "Eb");
    }

    #[test]
    fn bad_values_fall_back() {
        let config = parse_config(
            r#"{ "root_note": "H", "fret_count": 0, "keyboard_octaves": 9, "tuning": ["E", "X"] }"#,
        )
        .unwrap();
        assert_eq!(config, AppConfig::default());
    }

    #[test]
    fn custom_tuning_is_kept() {
        let config = parse_config(r#"{ "tuning": ["D", "A", "F", "C", "G", "C"] }"#).unwrap();
        let tuning = config.guitar_tuning();
        assert_eq!(tuning.labels, ["D", "A", "F", "C", "G", "C"]);
        assert_eq!(tuning.open_strings.len(), 6);
    }

    #[test]
    fn malformed_json_is_an_error() {
        assert!(parse_config("{ root_note: C").is_err());
    }

    #[test]
    fn missing_file_gives_defaults() {
        let path = std::env::temp_dir().join("modes-gui-no-such-config.json");
        assert_eq!(load_config(&path), AppConfig::default());
    }

    #[test]
    fn command_line_flags() {
        let options = CliOptions::parse(&args(&["modes-gui", "--root", "F#", "--print", "--config", "x.json"]));
        assert_eq!(options.root.as_deref(), Some("F#"));
        assert!(options.print);
        assert_eq!(options.config_path(), PathBuf::from("x.json"));

        let bare = CliOptions::parse(&args(&["modes-gui", "--bogus"]));
        assert_eq!(bare, CliOptions::default());
        assert_eq!(bare.config_path(), PathBuf::from(DEFAULT_CONFIG_PATH));
    }
}
