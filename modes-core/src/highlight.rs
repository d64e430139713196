//! # Highlight Sets
//!
//! The pitch classes a scale occupies, independent of spelling. Front ends use
//! these to decide which fretboard positions and piano keys to light up.

use crate::notes::PitchClass;
use serde::Serialize;
use std::collections::BTreeSet;

/// How a pitch class relates to the current scale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum KeyRole {
    Root,
    InScale,
    Outside,
}

/// Computes `{ (root + i) mod 12 : i in intervals }`.
pub fn scale_pitch_classes(root: PitchClass, intervals: &[u8]) -> BTreeSet<PitchClass> {
    intervals
        .iter()
        .map(|&interval| root.transpose(interval as i32))
        .collect()
}

/// The pitch classes of one scale with its root singled out.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScaleHighlight {
    pub root: PitchClass,
    pub members: BTreeSet<PitchClass>,
}

impl ScaleHighlight {
    pub fn new(root: PitchClass, intervals: &[u8]) -> Self {
        Self {
            root,
            members: scale_pitch_classes(root, intervals),
        }
    }

    pub fn role(&self, pc: PitchClass) -> KeyRole {
        if pc == self.root {
            KeyRole::Root
        } else if self.members.contains(&pc) {
            KeyRole::InScale
        } else {
            KeyRole::Outside
        }
    }

    pub fn contains(&self, pc: PitchClass) -> bool {
        self.members.contains(&pc)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modes::MODES;

    #[test]
    fn seven_members_including_root() {
        for mode in &MODES {
            for r in 0..12 {
                let root = PitchClass::new(r);
                let set = scale_pitch_classes(root, &mode.intervals);
                assert_eq!(set.len(), 7, "{} on {}", mode.name, root);
                assert!(set.contains(&root));
            }
        }
    }

    #[test]
    fn roles_for_g_major() {
        let g = PitchClass::new(7);
        let hl = ScaleHighlight::new(g, &MODES[0].intervals);
        assert_eq!(hl.role(g), KeyRole::Root);
        assert_eq!(hl.role(PitchClass::new(6)), KeyRole::InScale); // F#
        assert_eq!(hl.role(PitchClass::new(5)), KeyRole::Outside); // F
        assert!(hl.contains(PitchClass::C));
    }
}
