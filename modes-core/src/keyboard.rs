//! # Keyboard Model
//!
//! Piano keys starting at C, each tagged with its role in the current scale.

use crate::highlight::{KeyRole, ScaleHighlight};
use crate::notes::PitchClass;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct KeyboardKey {
    /// Position from the leftmost C.
    pub position: usize,
    pub pitch_class: PitchClass,
    pub is_black: bool,
    pub role: KeyRole,
}

/// Lists `octaves * 12` keys beginning on C.
pub fn keyboard_keys(highlight: &ScaleHighlight, octaves: u8) -> Vec<KeyboardKey> {
    (0..octaves as usize * 12)
        .map(|position| {
            let pitch_class = PitchClass::new(position as i32);
            KeyboardKey {
                position,
                pitch_class,
                is_black: pitch_class.is_black_key(),
                role: highlight.role(pitch_class),
            }
        })
        .collect()
}

/// One character per key: `R` root, `*` scale member, `-` black key, `.` white key.
pub fn render_keyboard_text(keys: &[KeyboardKey]) -> String {
    keys.iter()
        .map(|key| match (key.role, key.is_black) {
            (KeyRole::Root, _) => 'R',
            (KeyRole::InScale, _) => '*',
            (KeyRole::Outside, true) => '-',
            (KeyRole::Outside, false) => '.',
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modes::MODES;

    #[test]
    fn two_octaves_of_keys() {
        let hl = ScaleHighlight::new(PitchClass::C, &MODES[0].intervals);
        let keys = keyboard_keys(&hl, 2);
        assert_eq!(keys.len(), 24);
        assert_eq!(keys.iter().filter(|k| k.is_black).count(), 10);
        assert_eq!(keys.iter().filter(|k| k.role == KeyRole::Root).count(), 2);
    }

    #[test]
    fn c_major_uses_only_white_keys() {
        let hl = ScaleHighlight::new(PitchClass::C, &MODES[0].intervals);
        let keys = keyboard_keys(&hl, 1);
        assert!(keys.iter().filter(|k| k.role != KeyRole::Outside).all(|k| !k.is_black));
        assert_eq!(render_keyboard_text(&keys), "R-*-**-*-*-*");
    }
}
