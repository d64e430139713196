//! # UI Module
//!
//! This module contains all UI components for the Modes of Major application.

pub mod fretboard;
pub mod main_display;
pub mod piano_keyboard;
