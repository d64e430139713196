//! # Main Display Module
//!
//! This module contains the main display components and layout logic
//! for the Modes of Major application: the root picker, the seven mode
//! cards and the settings sidebar.

use iced::widget::{Space, button, column, container, horizontal_space, pick_list, row, scrollable, text};
use iced::{Alignment, Background, Border, Color, Element, Length};
use modes_core::ModeCard;
use modes_core::fretboard::fretboard_grid;
use modes_core::keyboard::keyboard_keys;
use modes_core::modes::is_altered;
use modes_core::notes::ROOT_CHOICES;

use super::fretboard::FretboardDiagram;
use super::piano_keyboard::{PianoKeyboard, tint};

/// Configuration for a single button in the settings sidebar
#[derive(Debug, Clone)]
struct ButtonConfig {
    label: &'static str,
    message: crate::Message,
    /// Reports whether the setting is on, for toggle buttons.
    active: Option<fn(&crate::AppDisplayData) -> bool>,
}

const SETTINGS_CONFIG: &[(&str, &[ButtonConfig])] = &[
    ("View", &[
        ButtonConfig { label: "Fretboard", message: crate::Message::ToggleFretboard, active: Some(fretboard_on) },
        ButtonConfig { label: "Keyboard", message: crate::Message::ToggleKeyboard, active: Some(keyboard_on) },
        ButtonConfig { label: "Chords", message: crate::Message::ToggleChords, active: Some(chords_on) },
    ]),
    ("Display", &[
        ButtonConfig { label: "Dark theme", message: crate::Message::ToggleTheme, active: Some(dark_on) },
    ]),
    ("Chart", &[
        ButtonConfig { label: "Export chart", message: crate::Message::ExportChart, active: None },
    ]),
];

fn fretboard_on(data: &crate::AppDisplayData) -> bool {
    data.fretboard_visible
}

fn keyboard_on(data: &crate::AppDisplayData) -> bool {
    data.keyboard_visible
}

fn chords_on(data: &crate::AppDisplayData) -> bool {
    data.chords_visible
}

fn dark_on(data: &crate::AppDisplayData) -> bool {
    data.dark_theme
}

/// Card tint for a mode's accent key.
pub fn accent_color(accent: &str) -> Color {
    match accent {
        "major" => Color::from_rgb8(0xF1, 0xC4, 0x0F),
        "dorian" => Color::from_rgb8(0x34, 0x98, 0xDB),
        "phrygian" => Color::from_rgb8(0xE6, 0x7E, 0x22),
        "lydian" => Color::from_rgb8(0x9B, 0x59, 0xB6),
        "mixolydian" => Color::from_rgb8(0x1A, 0xBC, 0x9C),
        "aeolian" => Color::from_rgb8(0x5D, 0x6D, 0x7E),
        "locrian" => Color::from_rgb8(0xE7, 0x4C, 0x3C),
        _ => Color::from_rgb8(0x95, 0xA5, 0xA6),
    }
}

/// Creates the complete main application view
pub fn create_main_view(data: &crate::AppDisplayData) -> Element<'static, crate::Message> {
    log::trace!("[VIEW] Rendering {} mode cards for {}", data.cards.len(), data.root_name);

    let title = text("Modes of Major").size(28);

    let root_picker = row![
        text("Root note").size(16),
        pick_list(ROOT_CHOICES, Some(data.root_name), crate::Message::RootSelected),
    ]
    .spacing(10)
    .align_y(Alignment::Center);

    let cards = data
        .cards
        .iter()
        .fold(column![].spacing(20), |col, card| col.push(create_mode_card(card, data)));

    let main_content = row![
        column![
            title,
            root_picker,
            Space::with_height(10),
            scrollable(cards.padding([0, 15])).height(Length::Fill),
        ]
        .width(Length::Fill)
        .spacing(10),
        Space::with_width(10),
        create_sidebar(data),
    ]
    .align_y(Alignment::Start)
    .padding(20);

    container(main_content)
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}

/// Creates one mode card: header, notes, degrees, pattern, chords, diagrams.
fn create_mode_card(card: &ModeCard, data: &crate::AppDisplayData) -> Element<'static, crate::Message> {
    let accent = accent_color(card.mode.accent);

    let header = row![
        text(card.mode.name).size(22).color(accent),
        horizontal_space(),
        text(card.mode.formula).size(16),
    ]
    .align_y(Alignment::Center);

    let notes = card.scale_notes.iter().enumerate().fold(row![].spacing(6), |r, (i, note)| {
        r.push(note_chip(note.clone(), accent, i == 0))
    });

    let degrees = card.mode.degrees.iter().fold(
        row![text("Scale Degrees:").size(14)].spacing(8),
        |r, &degree| {
            let label = text(degree).size(14);
            r.push(if is_altered(degree) { label.color(accent) } else { label })
        },
    );

    let pattern = text(format!("Interval Pattern: {}", card.mode.pattern)).size(14);

    let mut content = column![header, notes, degrees, pattern].spacing(10);

    if data.chords_visible {
        content = content.push(create_chords_row(card));
    }
    if data.fretboard_visible {
        let grid = fretboard_grid(&card.highlight, &data.tuning, data.fret_count);
        content = content.push(
            FretboardDiagram::new(grid, data.tuning.labels.clone(), accent).view(),
        );
    }
    if data.keyboard_visible {
        let keys = keyboard_keys(&card.highlight, data.keyboard_octaves);
        content = content.push(PianoKeyboard::new(keys, accent).view());
    }
    content = content.push(text(card.mode.description).size(14));

    container(content.padding(15))
        .width(Length::Fill)
        .style(move |_theme| container::Style {
            border: Border {
                color: accent,
                width: 2.0,
                radius: 8.0.into(),
            },
            ..container::Style::default()
        })
        .into()
}

/// A single note in the scale row; the root is filled with the accent colour.
fn note_chip(note: String, accent: Color, is_root: bool) -> Element<'static, crate::Message> {
    let background = if is_root { accent } else { tint(accent, 0.7) };
    container(text(note).size(18).color(Color::BLACK))
        .padding([4, 10])
        .style(move |_theme| container::Style {
            background: Some(Background::Color(background)),
            border: Border {
                radius: 4.0.into(),
                ..Border::default()
            },
            ..container::Style::default()
        })
        .into()
}

/// Chord names with their triads underneath. A missing triad shows nothing.
fn create_chords_row(card: &ModeCard) -> Element<'static, crate::Message> {
    let chords = card.chord_names.iter().enumerate().fold(
        row![text("Chords:").size(14)].spacing(14),
        |r, (i, chord)| {
            let mut cell = column![text(chord.clone()).size(16)].align_x(Alignment::Center);
            if let Some(triad) = card.triad_text(i) {
                cell = cell.push(text(triad).size(11));
            }
            r.push(cell)
        },
    );
    chords.into()
}

/// Creates the settings sidebar widget.
///
/// Builds the right-side panel with the view toggles, the theme switch and
/// the export button, followed by the status of the last export.
fn create_sidebar(data: &crate::AppDisplayData) -> Element<'static, crate::Message> {
    let mut sections = column![].spacing(10);

    for (title, buttons) in SETTINGS_CONFIG {
        sections = sections.push(make_settings_section(title, buttons, data));
    }

    if let Some(status) = &data.export_status {
        sections = sections.push(text(status.clone()).size(12));
    }

    container(sections.padding(15))
        .width(Length::Fixed(220.0))
        .height(Length::Fill)
        .into()
}

/// Creates a button; active toggles get a highlighted background.
fn make_button(config: &ButtonConfig, data: &crate::AppDisplayData) -> Element<'static, crate::Message> {
    let mut button = button(text(config.label).size(14).width(Length::Fill))
        .padding([6, 10])
        .on_press(config.message.clone());

    if config.active.is_some_and(|is_active| is_active(data)) {
        button = button.style(|_theme, _status| {
            use iced::widget::button;
            button::Style {
                background: Some(Background::Color(Color::from_rgb(0.2, 0.6, 0.3))),
                text_color: Color::WHITE,
                ..button::Style::default()
            }
        });
    }

    button.into()
}

/// Creates a settings section with title and buttons.
fn make_settings_section(
    title: &'static str,
    buttons: &[ButtonConfig],
    data: &crate::AppDisplayData,
) -> Element<'static, crate::Message> {
    let items_widget = buttons
        .iter()
        .fold(column![].spacing(8), |col, config| col.push(make_button(config, data)));

    column![text(title).size(18), Space::with_height(10), items_widget]
        .spacing(5)
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_mode_has_its_own_accent() {
        let fallback = accent_color("");
        let mut seen = Vec::new();
        for mode in &modes_core::modes::MODES {
            let color = accent_color(mode.accent);
            assert_ne!(color, fallback, "{}", mode.name);
            assert!(!seen.contains(&color));
            seen.push(color);
        }
    }
}
