//! # Fretboard Model
//!
//! A spelling-independent model of a guitar neck: one row per string, one cell
//! per fret, each cell tagged with its role in the current scale. The GUI
//! paints it on a canvas; [`render_fretboard_text`] prints it.

use crate::TheoryError;
use crate::highlight::{KeyRole, ScaleHighlight};
use crate::notes::{PitchClass, note_index};
use serde::Serialize;
use std::fmt::Write;

/// Number of frets shown by default (frets 0 through 11).
pub const DEFAULT_FRET_COUNT: u8 = 12;

/// Open-string tuning, highest-pitched string first.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GuitarTuning {
    pub labels: Vec<String>,
    pub open_strings: Vec<PitchClass>,
}

impl GuitarTuning {
    /// Standard tuning, E B G D A E.
    pub fn standard() -> Self {
        Self {
            labels: ["E", "B", "G", "D", "A", "E"].iter().map(|s| s.to_string()).collect(),
            open_strings: [4, 11, 7, 2, 9, 4].into_iter().map(PitchClass::new).collect(),
        }
    }

    /// Builds a tuning from note names, highest-pitched string first.
    pub fn from_names<S: AsRef<str>>(names: &[S]) -> Result<Self, TheoryError> {
        if names.is_empty() {
            return Err(TheoryError::InvalidTuning("no strings given".to_string()));
        }
        let open_strings = names
            .iter()
            .map(|n| note_index(n.as_ref()))
            .collect::<Result<Vec<_>, _>>()
            .map_err(|e| TheoryError::InvalidTuning(e.to_string()))?;
        Ok(Self {
            labels: names.iter().map(|n| n.as_ref().to_string()).collect(),
            open_strings,
        })
    }
}

impl Default for GuitarTuning {
    fn default() -> Self {
        Self::standard()
    }
}

/// One fret position on one string.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FretCell {
    pub string: usize,
    pub fret: u8,
    pub pitch_class: PitchClass,
    pub role: KeyRole,
    /// Canonical note name, present only for scale members.
    pub note: Option<&'static str>,
}

/// Lays out `fret_count` frets (starting at the open string) for every string.
pub fn fretboard_grid(
    highlight: &ScaleHighlight,
    tuning: &GuitarTuning,
    fret_count: u8,
) -> Vec<Vec<FretCell>> {
    tuning
        .open_strings
        .iter()
        .enumerate()
        .map(|(string, &open)| {
            (0..fret_count)
                .map(|fret| {
                    let pitch_class = open.transpose(fret as i32);
                    let role = highlight.role(pitch_class);
                    FretCell {
                        string,
                        fret,
                        pitch_class,
                        role,
                        note: (role != KeyRole::Outside).then(|| pitch_class.name()),
                    }
                })
                .collect()
        })
        .collect()
}

/// Draws the grid as text, e.g. `E |  E  |     | F#  |...`.
///
/// Roots are wrapped in brackets so they stand out without colour.
pub fn render_fretboard_text(grid: &[Vec<FretCell>], tuning: &GuitarTuning) -> String {
    let mut out = String::new();
    let frets = grid.first().map_or(0, |row| row.len());

    let _ = write!(out, "    ");
    for fret in 0..frets {
        let _ = write!(out, "{:^5}", fret);
    }
    out.push('\n');

    for (row, label) in grid.iter().zip(&tuning.labels) {
        let _ = write!(out, "{:<2} |", label);
        for cell in row {
            let shown = match (cell.role, cell.note) {
                (KeyRole::Root, Some(n)) => format!("[{}]", n),
                (_, Some(n)) => n.to_string(),
                _ => String::new(),
            };
            let _ = write!(out, "{:^5}", shown);
        }
        out.push_str("|\n");
    }
    out
}
