//! # Mode Cards
//!
//! A [`ModeCard`] is everything a front end shows for one mode on one root:
//! spelled notes, chords, triads and the highlight set. Cards are rebuilt on
//! every root change and never cached.

use crate::TheoryError;
use crate::chords::{chord_name, chord_triad};
use crate::highlight::ScaleHighlight;
use crate::modes::{MODES, Mode, is_altered};
use crate::notes::{PitchClass, note_index, scale_tones};
use crate::spelling::correct_spelling;
use serde::Serialize;
use std::fmt;

#[derive(Debug, Clone, Serialize)]
pub struct ModeCard {
    pub mode: &'static Mode,
    /// Scale notes after enharmonic correction.
    pub scale_notes: Vec<String>,
    pub chord_names: Vec<String>,
    /// One triad per degree; `None` when the triad lookup missed.
    pub chord_triads: Vec<Option<[String; 3]>>,
    pub highlight: ScaleHighlight,
}

impl ModeCard {
    pub fn build(root: PitchClass, mode: &'static Mode) -> Self {
        let raw = scale_tones(root, &mode.intervals);
        let scale_notes = correct_spelling(&raw, &mode.degrees);

        let chord_names = scale_notes
            .iter()
            .zip(mode.chord_qualities)
            .map(|(note, quality)| chord_name(note, quality))
            .collect();
        let chord_triads = scale_notes
            .iter()
            .zip(mode.chord_qualities)
            .map(|(note, quality)| chord_triad(note, quality, &scale_notes))
            .collect();

        Self {
            mode,
            scale_notes,
            chord_names,
            chord_triads,
            highlight: ScaleHighlight::new(root, &mode.intervals),
        }
    }

    pub fn root(&self) -> PitchClass {
        self.highlight.root
    }

    /// Triad for a degree, formatted "C - E - G", or `None` on a lookup miss.
    pub fn triad_text(&self, degree: usize) -> Option<String> {
        self.chord_triads
            .get(degree)
            .and_then(Option::as_ref)
            .map(|triad| triad.join(" - "))
    }
}

/// Builds the seven mode cards for a root note name.
///
/// # Returns
/// * `Ok(cards)` - One card per mode, in table order
/// * `Err(TheoryError::UnknownNote)` - The root name could not be resolved
pub fn build_chart(root_name: &str) -> Result<Vec<ModeCard>, TheoryError> {
    let root = note_index(root_name)?;
    log::debug!("build_chart: root {} resolved to pitch class {}", root_name, root.index());
    Ok(build_chart_for(root))
}

pub fn build_chart_for(root: PitchClass) -> Vec<ModeCard> {
    MODES.iter().map(|mode| ModeCard::build(root, mode)).collect()
}

impl fmt::Display for ModeCard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}  ({})", self.mode.name, self.mode.formula)?;
        writeln!(f, "  Notes:    {}", self.scale_notes.join(" "))?;

        // Altered degrees are starred so they stand out in plain text.
        let degrees: Vec<String> = self
            .mode
            .degrees
            .iter()
            .map(|d| if is_altered(d) { format!("{}*", d) } else { d.to_string() })
            .collect();
        writeln!(f, "  Degrees:  {}", degrees.join(" "))?;
        writeln!(f, "  Pattern:  {}", self.mode.pattern)?;

        writeln!(f, "  Chords:")?;
        for (i, chord) in self.chord_names.iter().enumerate() {
            match self.triad_text(i) {
                Some(triad) => writeln!(f, "    {:<4} {}", chord, triad)?,
                None => writeln!(f, "    {}", chord)?,
            }
        }
        write!(f, "  {}", self.mode.description)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn c_major_card() {
        let card = ModeCard::build(PitchClass::C, &MODES[0]);
        assert_eq!(card.scale_notes, ["C", "D", "E", "F", "G", "A", "B"]);
        assert_eq!(card.chord_names, ["C", "Dm", "Em", "F", "G", "Am", "B°"]);
        assert_eq!(card.triad_text(0).as_deref(), Some("C - E - G"));
        assert_eq!(card.triad_text(6).as_deref(), Some("B - D - F"));
        assert_eq!(card.triad_text(7), None);
    }

    #[test]
    fn c_dorian_chords_use_flat_spellings() {
        let dorian = Mode::by_name("Dorian").unwrap();
        let card = ModeCard::build(PitchClass::C, dorian);
        assert_eq!(card.chord_names, ["Cm", "Dm", "Eb", "F", "Gm", "A°", "Bb"]);
        assert_eq!(card.triad_text(2).as_deref(), Some("Eb - G - Bb"));
    }

    #[test]
    fn chart_has_every_mode() {
        let chart = build_chart("A").unwrap();
        assert_eq!(chart.len(), 7);
        assert!(chart.iter().all(|c| c.root() == PitchClass::new(9)));
        assert_eq!(chart[5].scale_notes, ["A", "B", "C", "D", "E", "F", "G"]);
    }

    #[test]
    fn unknown_root_is_an_error() {
        assert!(matches!(build_chart("H"), Err(TheoryError::UnknownNote(n)) if n == "H"));
    }

    #[test]
    fn flat_root_resolves_to_sharp_spelling() {
        let chart = build_chart("Db").unwrap();
        assert_eq!(chart[0].scale_notes[0], "C#");
    }

    #[test]
    fn text_card() {
        let card = ModeCard::build(PitchClass::C, Mode::by_name("Dorian").unwrap());
        let text = card.to_string();
        assert!(text.starts_with("Dorian  (i ii bIII IV v vi° bVII)"));
        assert!(text.contains("Notes:    C D Eb F G A Bb"));
        assert!(text.contains("♭3*"));
        assert!(text.contains("Eb   Eb - G - Bb"));
    }
}
