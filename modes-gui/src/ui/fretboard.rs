//! # Fretboard Widget
//!
//! Paints a [`FretCell`] grid as a guitar neck: strings as horizontal lines,
//! frets as vertical lines, scale notes as labelled dots. The root uses the
//! mode's accent colour.

use iced::alignment::{Horizontal, Vertical};
use iced::widget::canvas::{self, Frame, Geometry, Path, Stroke, Text};
use iced::widget::container;
use iced::{Color, Element, Point, Rectangle, Renderer, Theme, mouse};
use modes_core::fretboard::FretCell;
use modes_core::highlight::KeyRole;

use super::piano_keyboard::tint;

const STRING_SPACING: f32 = 22.0;
const HEADER_HEIGHT: f32 = 18.0;
const LABEL_WIDTH: f32 = 26.0;
const DOT_RADIUS: f32 = 9.0;

pub struct FretboardDiagram {
    grid: Vec<Vec<FretCell>>,
    labels: Vec<String>,
    accent: Color,
}

impl FretboardDiagram {
    pub fn new(grid: Vec<Vec<FretCell>>, labels: Vec<String>, accent: Color) -> Self {
        Self { grid, labels, accent }
    }

    pub fn view(self) -> Element<'static, crate::Message> {
        let height = HEADER_HEIGHT + STRING_SPACING * self.grid.len() as f32;
        container(
            canvas::Canvas::new(self)
                .width(iced::Length::Fill)
                .height(iced::Length::Fixed(height)),
        )
        .into()
    }
}

impl<Message> canvas::Program<Message> for FretboardDiagram {
    type State = ();

    fn draw(
        &self,
        _state: &Self::State,
        renderer: &Renderer,
        theme: &Theme,
        bounds: Rectangle,
        _cursor: mouse::Cursor,
    ) -> Vec<Geometry> {
        let mut frame = Frame::new(renderer, bounds.size());
        let text_color = theme.palette().text;
        let line_color = Color { a: 0.5, ..text_color };

        let frets = self.grid.first().map_or(0, Vec::len);
        if frets == 0 {
            return vec![frame.into_geometry()];
        }
        let fret_width = (bounds.width - LABEL_WIDTH) / frets as f32;
        let string_y = |s: usize| HEADER_HEIGHT + STRING_SPACING * (s as f32 + 0.5);
        let cell_x = |f: usize| LABEL_WIDTH + fret_width * (f as f32 + 0.5);

        // Fret numbers
        for fret in 0..frets {
            frame.fill_text(Text {
                content: fret.to_string(),
                position: Point::new(cell_x(fret), HEADER_HEIGHT / 2.0),
                color: text_color,
                size: 11.0.into(),
                horizontal_alignment: Horizontal::Center,
                vertical_alignment: Vertical::Center,
                ..Text::default()
            });
        }

        // Frets; the nut after the open-string column is drawn thicker
        let top = string_y(0);
        let bottom = string_y(self.grid.len() - 1);
        for fret in 1..=frets {
            let x = LABEL_WIDTH + fret_width * fret as f32;
            let width = if fret == 1 { 3.0 } else { 1.0 };
            frame.stroke(
                &Path::line(Point::new(x, top), Point::new(x, bottom)),
                Stroke::default().with_width(width).with_color(line_color),
            );
        }

        for (s, row) in self.grid.iter().enumerate() {
            let y = string_y(s);
            if let Some(label) = self.labels.get(s) {
                frame.fill_text(Text {
                    content: label.clone(),
                    position: Point::new(LABEL_WIDTH / 2.0, y),
                    color: text_color,
                    size: 13.0.into(),
                    horizontal_alignment: Horizontal::Center,
                    vertical_alignment: Vertical::Center,
                    ..Text::default()
                });
            }
            frame.stroke(
                &Path::line(Point::new(LABEL_WIDTH, y), Point::new(bounds.width, y)),
                Stroke::default().with_width(1.0).with_color(line_color),
            );

            for cell in row {
                let Some(note) = cell.note else { continue };
                let center = Point::new(cell_x(cell.fret as usize), y);
                let fill = match cell.role {
                    KeyRole::Root => self.accent,
                    _ => tint(self.accent, 0.45),
                };
                frame.fill(&Path::circle(center, DOT_RADIUS), fill);
                frame.fill_text(Text {
                    content: note.to_string(),
                    position: center,
                    color: Color::BLACK,
                    size: 10.0.into(),
                    horizontal_alignment: Horizontal::Center,
                    vertical_alignment: Vertical::Center,
                    ..Text::default()
                });
            }
        }

        vec![frame.into_geometry()]
    }
}
