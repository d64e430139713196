//! # Modes of Major - Interactive Mode Reference GUI
//!
//! This module contains the main GUI application for the modes-of-major
//! reference. For a selected root note it shows all seven diatonic modes with
//! their spelled notes, chords and triads, a guitar fretboard and a piano
//! keyboard.
//!
//! ## Architecture
//! - **Theory**: `modes-core` builds the seven mode cards for the root
//! - **Main Thread**: Iced GUI application, rebuilt on every root change
//! - **Print Mode**: `--print` writes the same chart as text and exits

mod config;
mod export;
mod ui;

use config::{AppConfig, CliOptions};
use iced::{Element, Task, Theme};
use modes_core::fretboard::{GuitarTuning, fretboard_grid, render_fretboard_text};
use modes_core::keyboard::{keyboard_keys, render_keyboard_text};
use modes_core::notes::ROOT_CHOICES;
use modes_core::{ModeCard, PitchClass, build_chart};
use std::path::Path;
use ui::main_display::create_main_view;

/// Main entry point for the Modes of Major application.
///
/// Initializes logging, loads the config and either prints the chart
/// (`--print`) or starts the Iced GUI.
pub fn main() -> iced::Result {
    // Set RUST_LOG=debug for verbose output
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp_millis()
        .init();

    let args: Vec<String> = std::env::args().collect();
    let options = CliOptions::parse(&args);
    let mut config = config::load_config(&options.config_path());
    if let Some(root) = &options.root {
        config.root_note = root.clone();
    }

    if options.print {
        std::process::exit(print_chart(&config));
    }

    let config = config.validated();
    log::info!("[MAIN] Starting Modes of Major with root {}", config.root_note);
    let result = iced::application("Modes of Major", ModesApp::update, ModesApp::view)
        .theme(ModesApp::theme)
        .window_size((1200.0, 900.0))
        .run_with(move || (ModesApp::new(config), Task::none()));
    log::info!("[MAIN] Application finished with result: {:?}", result);
    result
}

/// Writes the text chart for the configured root to stdout.
///
/// Returns the process exit code: 0 on success, 2 for an unknown root.
fn print_chart(config: &AppConfig) -> i32 {
    let cards = match build_chart(&config.root_note) {
        Ok(cards) => cards,
        Err(e) => {
            eprintln!("{} (expected one of: {})", e, ROOT_CHOICES.join(" "));
            return 2;
        }
    };

    let config = config.clone().validated();
    let tuning = config.guitar_tuning();
    for card in &cards {
        println!("{}", card);
        println!();
        let grid = fretboard_grid(&card.highlight, &tuning, config.fret_count);
        print!("{}", render_fretboard_text(&grid, &tuning));
        let keys = keyboard_keys(&card.highlight, config.keyboard_octaves);
        println!("Keys: {}", render_keyboard_text(&keys));
        println!();
    }
    0
}

/// Application message types for the Iced GUI framework.
#[derive(Debug, Clone)]
pub enum Message {
    RootSelected(&'static str), // Root picked from the note list
    KeySelected(PitchClass),    // Piano key clicked; becomes the new root

    // View toggles
    ToggleFretboard,
    ToggleKeyboard,
    ToggleChords,
    ToggleTheme,

    ExportChart, // Save the current chart as JSON
}

/// UI-specific data needed for rendering the interface.
#[derive(Debug, Clone)]
pub struct AppDisplayData {
    pub root_name: &'static str,
    pub cards: Vec<ModeCard>,

    // Diagram settings
    pub tuning: GuitarTuning,
    pub fret_count: u8,
    pub keyboard_octaves: u8,

    // UI visibility states
    pub fretboard_visible: bool,
    pub keyboard_visible: bool,
    pub chords_visible: bool,
    pub dark_theme: bool,

    /// Result of the last export, shown under the sidebar.
    pub export_status: Option<String>,
}

/// Main application state.
#[derive(Debug)]
struct ModesApp {
    config: AppConfig,
    // Single source of truth for all display data
    display_data: AppDisplayData,
}

impl ModesApp {
    fn new(config: AppConfig) -> Self {
        let root_name = config.root_choice();
        let mut app = Self {
            display_data: AppDisplayData {
                root_name,
                cards: Vec::new(),
                tuning: config.guitar_tuning(),
                fret_count: config.fret_count,
                keyboard_octaves: config.keyboard_octaves,
                fretboard_visible: true,
                keyboard_visible: true,
                chords_visible: true,
                dark_theme: true,
                export_status: None,
            },
            config,
        };
        app.select_root(root_name);
        app
    }

    /// Rebuilds every mode card for a new root.
    ///
    /// An unresolvable name leaves the current chart on screen.
    fn select_root(&mut self, root_name: &'static str) {
        match build_chart(root_name) {
            Ok(cards) => {
                self.display_data.root_name = root_name;
                self.display_data.cards = cards;
            }
            Err(e) => log::error!("[UPDATE] Cannot build chart: {}", e),
        }
    }

    fn update(&mut self, message: Message) {
        log::debug!("[UPDATE] Received message: {:?}", message);

        match message {
            Message::RootSelected(root_name) => self.select_root(root_name),
            Message::KeySelected(pitch_class) => self.select_root(pitch_class.name()),
            Message::ToggleFretboard => {
                self.display_data.fretboard_visible = !self.display_data.fretboard_visible;
            }
            Message::ToggleKeyboard => {
                self.display_data.keyboard_visible = !self.display_data.keyboard_visible;
            }
            Message::ToggleChords => {
                self.display_data.chords_visible = !self.display_data.chords_visible;
            }
            Message::ToggleTheme => {
                self.display_data.dark_theme = !self.display_data.dark_theme;
            }
            Message::ExportChart => {
                let path = Path::new(&self.config.export_path);
                self.display_data.export_status = Some(
                    match export::export_chart(&self.display_data.cards, path) {
                        Ok(()) => format!("Saved to {}", path.display()),
                        Err(e) => {
                            log::error!("[EXPORT] {:#}", e);
                            "Export failed".to_string()
                        }
                    },
                );
            }
        }
    }

    /// Renders the main application interface.
    ///
    /// Delegates all UI rendering to the main_display module.
    fn view(&self) -> Element<'_, Message> {
        create_main_view(&self.display_data)
    }

    fn theme(&self) -> Theme {
        if self.display_data.dark_theme {
            Theme::Dark
        } else {
            Theme::Light
        }
    }
}
