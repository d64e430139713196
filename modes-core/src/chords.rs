//! # Chord Derivation
//!
//! Chord names and diatonic triads for each degree of a spelled scale.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Quality of the triad built on a scale degree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ChordQuality {
    #[serde(rename = "maj")]
    Major,
    #[serde(rename = "min")]
    Minor,
    #[serde(rename = "dim")]
    Diminished,
}

impl ChordQuality {
    /// Suffix appended to the root name: none, "m" or "°".
    pub fn suffix(self) -> &'static str {
        match self {
            ChordQuality::Major => "",
            ChordQuality::Minor => "m",
            ChordQuality::Diminished => "°",
        }
    }

    /// Parses the short codes "maj", "min" and "dim".
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "maj" => Some(ChordQuality::Major),
            "min" => Some(ChordQuality::Minor),
            "dim" => Some(ChordQuality::Diminished),
            _ => None,
        }
    }

    pub fn code(self) -> &'static str {
        match self {
            ChordQuality::Major => "maj",
            ChordQuality::Minor => "min",
            ChordQuality::Diminished => "dim",
        }
    }
}

impl fmt::Display for ChordQuality {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// Builds a chord name such as "C", "Dm" or "B°".
pub fn chord_name(root_note: &str, quality: ChordQuality) -> String {
    format!("{}{}", root_note, quality.suffix())
}

/// Builds the diatonic triad on `root_note` by skipping scale degrees.
///
/// The root is located by exact string match against `scale_notes`, so a
/// different spelling of the same pitch (e.g. "D#" against a scale holding
/// "Eb") is a miss. The third and fifth are the notes two and four degrees
/// above, wrapping around the seven-note scale.
///
/// `quality` only affects [`chord_name`]; the triad notes come from the scale.
///
/// # Returns
/// * `Some([root, third, fifth])` - The triad notes
/// * `None` - The root is not in the scale, or the scale is not seven notes long
pub fn chord_triad<S: AsRef<str>>(
    root_note: &str,
    _quality: ChordQuality,
    scale_notes: &[S],
) -> Option<[String; 3]> {
    if scale_notes.len() != 7 {
        return None;
    }
    let p = scale_notes.iter().position(|n| n.as_ref() == root_note)?;
    let degree = |offset: usize| scale_notes[(p + offset) % 7].as_ref().to_string();
    Some([degree(0), degree(2), degree(4)])
}

#[cfg(test)]
mod tests {
    use super::*;

    const C_MAJOR: [&str; 7] = ["C", "D", "E", "F", "G", "A", "B"];

    #[test]
    fn chord_names() {
        assert_eq!(chord_name("C", ChordQuality::Major), "C");
        assert_eq!(chord_name("D", ChordQuality::Minor), "Dm");
        assert_eq!(chord_name("B", ChordQuality::Diminished), "B°");
        assert_eq!(chord_name("Eb", ChordQuality::Major), "Eb");
    }

    #[test]
    fn tonic_triad_of_c_major() {
        assert_eq!(
            chord_triad("C", ChordQuality::Major, &C_MAJOR),
            Some(["C".to_string(), "E".to_string(), "G".to_string()])
        );
    }

    #[test]
    fn triads_wrap_around_the_scale() {
        assert_eq!(
            chord_triad("B", ChordQuality::Diminished, &C_MAJOR),
            Some(["B".to_string(), "D".to_string(), "F".to_string()])
        );
        assert_eq!(
            chord_triad("A", ChordQuality::Minor, &C_MAJOR),
            Some(["A".to_string(), "C".to_string(), "E".to_string()])
        );
    }

    #[test]
    fn quality_does_not_change_triad_notes() {
        let major = chord_triad("D", ChordQuality::Major, &C_MAJOR);
        let minor = chord_triad("D", ChordQuality::Minor, &C_MAJOR);
        assert_eq!(major, minor);
    }

    #[test]
    fn spelling_mismatch_is_a_miss() {
        let c_dorian = ["C", "D", "Eb", "F", "G", "A", "Bb"];
        assert_eq!(chord_triad("D#", ChordQuality::Major, &c_dorian), None);
        assert_eq!(chord_triad("H", ChordQuality::Major, &c_dorian), None);
    }

    #[test]
    fn short_scale_is_a_miss() {
        assert_eq!(chord_triad("C", ChordQuality::Major, &["C", "E", "G"]), None);
    }

    #[test]
    fn quality_codes() {
        for q in [ChordQuality::Major, ChordQuality::Minor, ChordQuality::Diminished] {
            assert_eq!(ChordQuality::from_code(q.code()), Some(q));
        }
        assert_eq!(ChordQuality::from_code("aug"), None);
        assert_eq!(serde_json::to_string(&ChordQuality::Diminished).unwrap(), "\"dim\"");
    }
}
