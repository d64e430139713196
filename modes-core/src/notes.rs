//! # Pitch Arithmetic Module
//!
//! This module maps note names to the 12 equal-tempered pitch classes and back.
//! Every pitch class has one canonical sharp-based spelling; the five black-key
//! classes additionally have a registered flat alias.
//!
//! ## Features
//! - Name to pitch class lookup accepting sharp and flat spellings
//! - Canonical spelling of any (wrapped) chromatic index
//! - Raw scale tone generation from a root and an interval pattern

use crate::TheoryError;
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

/// Canonical sharp-based spellings, indexed by pitch class.
pub const NOTE_NAMES: [&str; 12] = [
    "C", "C#", "D", "D#", "E", "F", "F#", "G", "G#", "A", "A#", "B",
];

/// Registered flat spellings for the five altered pitch classes.
pub const FLAT_ALIASES: [(&str, &str); 5] = [
    ("C#", "Db"),
    ("D#", "Eb"),
    ("F#", "Gb"),
    ("G#", "Ab"),
    ("A#", "Bb"),
];

/// Every spelling accepted as a root note, in picker order.
pub const ROOT_CHOICES: [&str; 17] = [
    "C", "C#", "Db", "D", "D#", "Eb", "E", "F", "F#", "Gb", "G", "G#", "Ab", "A", "A#", "Bb",
    "B",
];

/// Which keys in an octave are black keys, starting at C.
pub const IS_BLACK: [bool; 12] = [
    false, true, false, true, false, false, true, false, true, false, true, false,
];

/// Lookup from any accepted spelling (canonical or alias) to its pitch class.
static NOTE_MAP: Lazy<BTreeMap<&'static str, PitchClass>> = Lazy::new(|| {
    let canonical = NOTE_NAMES
        .iter()
        .enumerate()
        .map(|(i, &name)| (name, PitchClass(i as u8)));
    let aliases = FLAT_ALIASES.iter().filter_map(|&(sharp, flat)| {
        NOTE_NAMES
            .iter()
            .position(|&name| name == sharp)
            .map(|i| (flat, PitchClass(i as u8)))
    });
    canonical.chain(aliases).collect()
});

/// Sharp-to-flat substitution table keyed by canonical sharp name.
static ALIAS_MAP: Lazy<BTreeMap<&'static str, &'static str>> =
    Lazy::new(|| FLAT_ALIASES.iter().copied().collect());

/// One of the 12 equal-tempered chromatic tones, always in `0..12`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PitchClass(u8);

impl PitchClass {
    pub const C: PitchClass = PitchClass(0);

    /// Builds a pitch class from any integer, wrapping modulo 12.
    pub fn new(index: i32) -> Self {
        PitchClass(index.rem_euclid(12) as u8)
    }

    pub fn index(self) -> u8 {
        self.0
    }

    /// Canonical sharp-based spelling.
    pub fn name(self) -> &'static str {
        NOTE_NAMES[self.0 as usize]
    }

    /// Registered flat spelling, only present for the five black-key classes.
    pub fn flat_alias(self) -> Option<&'static str> {
        flat_alias(self.name())
    }

    pub fn is_black_key(self) -> bool {
        IS_BLACK[self.0 as usize]
    }

    /// Moves the pitch class up (or down, for negative values) by semitones.
    pub fn transpose(self, semitones: i32) -> Self {
        PitchClass::new(self.0 as i32 + semitones)
    }
}

impl fmt::Display for PitchClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for PitchClass {
    type Err = TheoryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        note_index(s)
    }
}

/// Resolves a note name to its pitch class.
///
/// Accepts the 12 canonical sharp names and the 5 registered flat aliases.
/// Matching is exact and case-sensitive; double accidentals are not part of
/// the vocabulary.
///
/// # Returns
/// * `Ok(pitch_class)` - The resolved pitch class
/// * `Err(TheoryError::UnknownNote)` - The name is outside the vocabulary
pub fn note_index(name: &str) -> Result<PitchClass, TheoryError> {
    NOTE_MAP
        .get(name)
        .copied()
        .ok_or_else(|| TheoryError::UnknownNote(name.to_string()))
}

/// Returns the canonical sharp spelling for a chromatic index, wrapped modulo 12.
pub fn note_name(index: i32) -> &'static str {
    PitchClass::new(index).name()
}

/// Looks up the registered flat alias for a canonical sharp name.
pub fn flat_alias(sharp_name: &str) -> Option<&'static str> {
    ALIAS_MAP.get(sharp_name).copied()
}

/// Spells the raw scale tones for a root and an interval pattern.
///
/// Each tone is `note_name(root + interval)`, always in canonical sharp form.
/// Enharmonic correction is a separate step (see [`crate::spelling`]).
pub fn scale_tones(root: PitchClass, intervals: &[u8]) -> Vec<String> {
    intervals
        .iter()
        .map(|&interval| root.transpose(interval as i32).name().to_string())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn canonical_names_round_trip() {
        for i in 0..12 {
            assert_eq!(note_index(note_name(i)).map(PitchClass::index), Ok(i as u8));
        }
    }

    #[test]
    fn flat_aliases_resolve_to_sharp_equivalent() {
        for (sharp, flat) in FLAT_ALIASES {
            assert_eq!(note_index(flat), note_index(sharp));
        }
        assert_eq!(note_index("Bb"), Ok(PitchClass::new(10)));
    }

    #[test]
    fn unknown_name_is_not_found() {
        assert_eq!(note_index("H"), Err(TheoryError::UnknownNote("H".to_string())));
        assert!(note_index("c").is_err());
        assert!(note_index("Cb").is_err());
        assert!(note_index("C##").is_err());
        assert!(note_index("").is_err());
    }

    #[test]
    fn note_name_wraps() {
        assert_eq!(note_name(12), "C");
        assert_eq!(note_name(15), "D#");
        assert_eq!(note_name(-1), "B");
        assert_eq!(PitchClass::new(-13).name(), "B");
    }

    #[test]
    fn only_black_keys_have_aliases() {
        for i in 0..12 {
            let pc = PitchClass::new(i);
            assert_eq!(pc.flat_alias().is_some(), pc.is_black_key(), "{}", pc);
        }
        assert_eq!(flat_alias("E"), None);
        assert_eq!(flat_alias("Eb"), None);
    }

    #[test]
    fn scale_tones_for_c_dorian() {
        let tones = scale_tones(PitchClass::C, &[0, 2, 3, 5, 7, 9, 10]);
        assert_eq!(tones, ["C", "D", "D#", "F", "G", "A", "A#"]);
    }

    #[test]
    fn root_choices_all_resolve() {
        for choice in ROOT_CHOICES {
            assert!(choice.parse::<PitchClass>().is_ok(), "{}", choice);
        }
    }
}
