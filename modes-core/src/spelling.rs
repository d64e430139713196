//! # Enharmonic Correction
//!
//! Raw scale tones come out of [`crate::notes::scale_tones`] in sharp spelling.
//! Where a mode's degree formula calls for a flattened degree, the sharp name is
//! replaced by its registered flat alias ("D#" over a "♭3" becomes "Eb").
//!
//! Natural pitch classes are never respelled, so no double-flat or
//! double-sharp names are ever produced.

use crate::modes::is_flat_degree;
use crate::notes::flat_alias;

/// Returns a corrected copy of `raw_notes`, leaving the input untouched.
///
/// Positions are matched one-to-one with `degree_labels`. If the lengths
/// differ, only the overlapping positions are considered and the rest of
/// `raw_notes` is copied as is.
pub fn correct_spelling<S: AsRef<str>>(raw_notes: &[S], degree_labels: &[&str]) -> Vec<String> {
    if raw_notes.len() != degree_labels.len() {
        log::debug!(
            "correct_spelling: {} notes against {} degree labels",
            raw_notes.len(),
            degree_labels.len()
        );
    }

    raw_notes
        .iter()
        .enumerate()
        .map(|(i, note)| {
            let note = note.as_ref();
            let wants_flat = degree_labels.get(i).is_some_and(|label| is_flat_degree(label));
            if wants_flat && note.contains('#') {
                flat_alias(note).unwrap_or(note).to_string()
            } else {
                note.to_string()
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modes::Mode;
    use crate::notes::{PitchClass, scale_tones};

    fn corrected(root: &str, mode: &str) -> Vec<String> {
        let mode = Mode::by_name(mode).unwrap();
        let root: PitchClass = root.parse().unwrap();
        correct_spelling(&scale_tones(root, &mode.intervals), &mode.degrees)
    }

    #[test]
    fn c_dorian_uses_flats() {
        let raw = scale_tones(PitchClass::C, &[0, 2, 3, 5, 7, 9, 10]);
        assert_eq!(raw, ["C", "D", "D#", "F", "G", "A", "A#"]);
        let dorian = Mode::by_name("Dorian").unwrap();
        let fixed = correct_spelling(&raw, &dorian.degrees);
        assert_eq!(fixed, ["C", "D", "Eb", "F", "G", "A", "Bb"]);
        // input is not rewritten in place
        assert_eq!(raw[2], "D#");
    }

    #[test]
    fn d_phrygian_flattens_second() {
        assert_eq!(corrected("D", "Phrygian"), ["D", "Eb", "F", "G", "A", "Bb", "C"]);
    }

    #[test]
    fn sharp_degrees_keep_sharp_spelling() {
        assert_eq!(corrected("C", "Lydian"), ["C", "D", "E", "F#", "G", "A", "B"]);
    }

    #[test]
    fn unflagged_positions_stay_sharp() {
        // E Dorian: the 2nd degree F# is natural in the formula
        assert_eq!(corrected("E", "Dorian"), ["E", "F#", "G", "A", "B", "C#", "D"]);
    }

    #[test]
    fn naturals_are_never_respelled() {
        // F Locrian wants Cb for its 5th; B stays B
        assert_eq!(corrected("F", "Locrian"), ["F", "Gb", "Ab", "A#", "B", "Db", "Eb"]);
    }

    #[test]
    fn correction_is_idempotent() {
        for mode in crate::modes::MODES.iter() {
            for root in 0..12 {
                let raw = scale_tones(PitchClass::new(root), &mode.intervals);
                let once = correct_spelling(&raw, &mode.degrees);
                let twice = correct_spelling(&once, &mode.degrees);
                assert_eq!(once, twice, "{} on {}", mode.name, root);
            }
        }
    }

    #[test]
    fn mismatched_lengths_do_not_panic() {
        let raw = ["C", "C#", "D#"];
        assert_eq!(correct_spelling(&raw, &["1", "♭2"]), ["C", "Db", "D#"]);
        assert_eq!(correct_spelling::<&str>(&[], &["♭2"]), Vec::<String>::new());
    }
}
