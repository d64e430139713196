//! # Mode Table Module
//!
//! The seven diatonic modes, each a rotation of the major scale. The table is
//! static and never mutated; every other module reads from it.

use crate::chords::ChordQuality;
use serde::Serialize;

use ChordQuality::{Diminished as Dim, Major as Maj, Minor as Min};

/// A named diatonic mode.
///
/// `intervals`, `degrees` and `chord_qualities` are positionally aligned:
/// index `i` of each describes the same scale degree.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Mode {
    pub name: &'static str,
    /// Semitone offsets from the root, starting at 0 and strictly increasing.
    pub intervals: [u8; 7],
    /// Whole/half step pattern, e.g. "W-W-H-W-W-W-H".
    pub pattern: &'static str,
    /// Scale-degree labels, e.g. "♭3" or "#4".
    pub degrees: [&'static str; 7],
    /// Roman-numeral chord formula.
    pub formula: &'static str,
    pub chord_qualities: [ChordQuality; 7],
    pub description: &'static str,
    /// Colour key used by front ends to tint the mode card.
    pub accent: &'static str,
}

pub static MODES: [Mode; 7] = [
    Mode {
        name: "Major (Ionian)",
        intervals: [0, 2, 4, 5, 7, 9, 11],
        pattern: "W-W-H-W-W-W-H",
        degrees: ["1", "2", "3", "4", "5", "6", "7"],
        formula: "I ii iii IV V vi vii°",
        chord_qualities: [Maj, Min, Min, Maj, Maj, Min, Dim],
        description: "The bright, happy sound. The pattern of all modes.",
        accent: "major",
    },
    Mode {
        name: "Dorian",
        intervals: [0, 2, 3, 5, 7, 9, 10],
        pattern: "W-H-W-W-W-H-W",
        degrees: ["1", "2", "♭3", "4", "5", "6", "♭7"],
        formula: "i ii bIII IV v vi° bVII",
        chord_qualities: [Min, Min, Maj, Maj, Min, Dim, Maj],
        description: "Minor scale with a raised 6th. Dark yet smooth, groovy, and mellow.",
        accent: "dorian",
    },
    Mode {
        name: "Phrygian",
        intervals: [0, 1, 3, 5, 7, 8, 10],
        pattern: "H-W-W-W-H-W-W",
        degrees: ["1", "♭2", "♭3", "4", "5", "♭6", "♭7"],
        formula: "i bII bIII iv v° bVI bvii",
        chord_qualities: [Min, Maj, Maj, Min, Dim, Maj, Min],
        description: "Minor scale with a flattened 2nd. Spanish, exotic, and tense.",
        accent: "phrygian",
    },
    Mode {
        name: "Lydian",
        intervals: [0, 2, 4, 6, 7, 9, 11],
        pattern: "W-W-W-H-W-W-H",
        degrees: ["1", "2", "3", "#4", "5", "6", "7"],
        formula: "I II iii #iv° V vi vii",
        chord_qualities: [Maj, Maj, Min, Dim, Maj, Min, Min],
        description: "Major scale with a sharpened 4th. Dreamy, bright, ethereal.",
        accent: "lydian",
    },
    Mode {
        name: "Mixolydian",
        intervals: [0, 2, 4, 5, 7, 9, 10],
        pattern: "W-W-H-W-W-H-W",
        degrees: ["1", "2", "3", "4", "5", "6", "♭7"],
        formula: "I ii iii° IV v vi bVII",
        chord_qualities: [Maj, Min, Dim, Maj, Min, Min, Maj],
        description: "Major scale with a flattened 7th. Bluesy, groovy, and bold.",
        accent: "mixolydian",
    },
    Mode {
        name: "Aeolian (Natural Minor)",
        intervals: [0, 2, 3, 5, 7, 8, 10],
        pattern: "W-H-W-W-H-W-W",
        degrees: ["1", "2", "♭3", "4", "5", "♭6", "♭7"],
        formula: "i ii° bIII iv v bVI bVII",
        chord_qualities: [Min, Dim, Maj, Min, Min, Maj, Maj],
        description: "The natural minor scale. Dark, melancholic, and somber.",
        accent: "aeolian",
    },
    Mode {
        name: "Locrian",
        intervals: [0, 1, 3, 5, 6, 8, 10],
        pattern: "H-W-W-H-W-W-W",
        degrees: ["1", "♭2", "♭3", "4", "♭5", "♭6", "♭7"],
        formula: "i° bII biii iv bV bVI bvii",
        chord_qualities: [Dim, Maj, Min, Min, Maj, Maj, Min],
        description: "Diminished tonic with a flattened 5th. Unstable, dissonant, dark, and uncomfortable.",
        accent: "locrian",
    },
];

impl Mode {
    /// Finds a mode by its display name or by its accent key ("dorian").
    pub fn by_name(name: &str) -> Option<&'static Mode> {
        MODES
            .iter()
            .find(|m| m.name == name || m.accent.eq_ignore_ascii_case(name))
    }

    /// Positions whose degree label carries an accidental.
    pub fn altered_degrees(&self) -> Vec<usize> {
        self.degrees
            .iter()
            .enumerate()
            .filter(|(_, label)| is_altered(label))
            .map(|(i, _)| i)
            .collect()
    }
}

/// True when a degree label is marked flat ("♭3", or ASCII "b3").
pub fn is_flat_degree(label: &str) -> bool {
    label.contains('♭') || label.contains('b')
}

pub fn is_sharp_degree(label: &str) -> bool {
    label.contains('#')
}

pub fn is_altered(label: &str) -> bool {
    is_flat_degree(label) || is_sharp_degree(label)
}

/// Recomputes the whole/half step pattern from an interval list, including
/// the closing step back to the octave.
pub fn derive_pattern(intervals: &[u8]) -> String {
    let Some(&first) = intervals.first() else {
        return String::new();
    };
    let octave = first + 12;
    intervals
        .iter()
        .zip(intervals.iter().skip(1).chain(std::iter::once(&octave)))
        .map(|(&a, &b)| match b.saturating_sub(a) {
            1 => "H".to_string(),
            2 => "W".to_string(),
            other => other.to_string(),
        })
        .collect::<Vec<_>>()
        .join("-")
}

#[cfg(test)]
mod tests {
    use super::*;

    const IONIAN: [u8; 7] = [0, 2, 4, 5, 7, 9, 11];

    #[test]
    fn table_shape() {
        for mode in &MODES {
            assert_eq!(mode.intervals[0], 0, "{}", mode.name);
            assert!(mode.intervals.windows(2).all(|w| w[0] < w[1]), "{}", mode.name);
            assert!(mode.intervals.iter().all(|&i| i < 12), "{}", mode.name);
            assert_eq!(mode.degrees[0], "1");
        }
    }

    #[test]
    fn every_mode_is_a_rotation_of_ionian() {
        for (k, mode) in MODES.iter().enumerate() {
            // Dorian starts on Ionian's 2nd degree, Phrygian on its 3rd, ...
            let start = IONIAN[k];
            let mut rotated: Vec<u8> = IONIAN
                .iter()
                .map(|&i| (i + 12 - start) % 12)
                .collect();
            rotated.sort_unstable();
            assert_eq!(rotated, mode.intervals, "{}", mode.name);
        }
    }

    #[test]
    fn stored_pattern_matches_intervals() {
        for mode in &MODES {
            assert_eq!(derive_pattern(&mode.intervals), mode.pattern, "{}", mode.name);
        }
    }

    #[test]
    fn chord_qualities_follow_the_rotation() {
        let ionian = MODES[0].chord_qualities;
        for (k, mode) in MODES.iter().enumerate() {
            for i in 0..7 {
                assert_eq!(mode.chord_qualities[i], ionian[(i + k) % 7], "{} degree {}", mode.name, i);
            }
        }
    }

    #[test]
    fn altered_degrees_of_dorian() {
        let dorian = Mode::by_name("Dorian").unwrap();
        assert_eq!(dorian.altered_degrees(), vec![2, 6]);
        assert_eq!(Mode::by_name("lydian").unwrap().altered_degrees(), vec![3]);
        assert!(Mode::by_name("Chromatic").is_none());
    }

    #[test]
    fn degree_markers() {
        assert!(is_flat_degree("♭3"));
        assert!(is_flat_degree("b7"));
        assert!(!is_flat_degree("#4"));
        assert!(is_sharp_degree("#4"));
        assert!(!is_altered("5"));
    }
}
