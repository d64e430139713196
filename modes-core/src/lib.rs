// modes-core/src/lib.rs

//! The theory engine for the modes-of-major reference.
//! This crate maps a root note and the seven diatonic modes to spelled
//! scale notes, chord names, triads and highlight sets. It is completely
//! headless and contains no GUI code.

pub mod card;
pub mod chords;
pub mod fretboard;
pub mod highlight;
pub mod keyboard;
pub mod modes;
pub mod notes;
pub mod spelling;

pub use card::{ModeCard, build_chart, build_chart_for};
pub use notes::PitchClass;

/// Errors surfaced by the theory engine.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TheoryError {
    #[error("Unknown note name: {0:?}")]
    UnknownNote(String),

    #[error("Invalid guitar tuning: {0}")]
    InvalidTuning(String),
}
