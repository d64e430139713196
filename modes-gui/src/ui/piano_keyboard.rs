//! # Piano Keyboard Widget
//!
//! Draws the keys of a [`KeyboardKey`] list with the scale highlighted:
//! the root in the mode's accent colour, other scale members in a lighter
//! tint. Clicking a key selects its pitch class as the new root.

use iced::widget::canvas::{self, Event, Fill, Geometry, Path, Stroke, event};
use iced::widget::container;
use iced::{Color, Element, Point, Rectangle, Renderer, Size, Theme, mouse};
use modes_core::highlight::KeyRole;
use modes_core::keyboard::KeyboardKey;
use modes_core::PitchClass;

const KEYBOARD_HEIGHT: f32 = 90.0;
/// Black keys relative to white keys.
const BLACK_WIDTH_RATIO: f32 = 0.6;
const BLACK_HEIGHT_RATIO: f32 = 0.6;

/// Keyboard diagram for one mode card.
#[derive(Debug, Clone)]
pub struct PianoKeyboard {
    keys: Vec<KeyboardKey>,
    accent: Color,
}

impl PianoKeyboard {
    pub fn new(keys: Vec<KeyboardKey>, accent: Color) -> Self {
        Self { keys, accent }
    }

    pub fn view(self) -> Element<'static, crate::Message> {
        container(
            canvas::Canvas::new(self)
                .width(iced::Length::Fill)
                .height(iced::Length::Fixed(KEYBOARD_HEIGHT)),
        )
        .into()
    }

    fn white_key_count(&self) -> usize {
        self.keys.iter().filter(|k| !k.is_black).count()
    }

    fn key_from_pos(&self, bounds: Size, pos: Point) -> Option<PitchClass> {
        let white_key_width = bounds.width / self.white_key_count().max(1) as f32;
        let black_key_width = white_key_width * BLACK_WIDTH_RATIO;
        let black_key_height = bounds.height * BLACK_HEIGHT_RATIO;

        // Check black keys first (they are on top)
        let mut white_key_idx: f32 = 0.0;
        for key in &self.keys {
            if key.is_black {
                let black_key_rect = Rectangle {
                    x: white_key_idx * white_key_width - black_key_width / 2.0,
                    y: 0.0,
                    width: black_key_width,
                    height: black_key_height,
                };
                if black_key_rect.contains(pos) {
                    return Some(key.pitch_class);
                }
            } else {
                white_key_idx += 1.0;
            }
        }

        // Check white keys
        let clicked_white_key = (pos.x / white_key_width).floor() as usize;
        self.keys
            .iter()
            .filter(|k| !k.is_black)
            .nth(clicked_white_key)
            .map(|k| k.pitch_class)
    }

    fn key_color(&self, key: &KeyboardKey) -> Color {
        match key.role {
            KeyRole::Root => self.accent,
            KeyRole::InScale => tint(self.accent, if key.is_black { 0.25 } else { 0.55 }),
            KeyRole::Outside if key.is_black => Color::BLACK,
            KeyRole::Outside => Color::WHITE,
        }
    }
}

/// Mixes a colour towards white by `amount` (0.0 keeps it, 1.0 gives white).
pub fn tint(color: Color, amount: f32) -> Color {
    Color::from_rgb(
        color.r + (1.0 - color.r) * amount,
        color.g + (1.0 - color.g) * amount,
        color.b + (1.0 - color.b) * amount,
    )
}

impl<Message> canvas::Program<Message> for PianoKeyboard
where
    Message: From<crate::Message>,
{
    type State = ();

    fn update(
        &self,
        _state: &mut Self::State,
        event: Event,
        bounds: Rectangle,
        cursor: mouse::Cursor,
    ) -> (event::Status, Option<Message>) {
        if let Some(position) = cursor.position_in(bounds) {
            if let Event::Mouse(mouse::Event::ButtonPressed(mouse::Button::Left)) = event {
                if let Some(pitch_class) = self.key_from_pos(bounds.size(), position) {
                    return (
                        event::Status::Captured,
                        Some(crate::Message::KeySelected(pitch_class).into()),
                    );
                }
            }
        }
        (event::Status::Ignored, None)
    }

    fn draw(
        &self,
        _state: &Self::State,
        renderer: &Renderer,
        _theme: &Theme,
        bounds: Rectangle,
        _cursor: mouse::Cursor,
    ) -> Vec<Geometry> {
        let mut frame = canvas::Frame::new(renderer, bounds.size());

        let white_key_width = bounds.width / self.white_key_count().max(1) as f32;
        let black_key_width = white_key_width * BLACK_WIDTH_RATIO;
        let black_key_height = bounds.height * BLACK_HEIGHT_RATIO;

        // Draw white keys
        let mut white_key_x = 0.0;
        for key in self.keys.iter().filter(|k| !k.is_black) {
            frame.fill_rectangle(
                Point::new(white_key_x, 0.0),
                Size::new(white_key_width, bounds.height),
                Fill::from(self.key_color(key)),
            );
            frame.stroke(
                &Path::rectangle(
                    Point::new(white_key_x, 0.0),
                    Size::new(white_key_width, bounds.height),
                ),
                Stroke::default().with_color(Color::BLACK),
            );
            white_key_x += white_key_width;
        }

        // Draw black keys
        let mut white_key_idx: f32 = 0.0;
        for key in &self.keys {
            if key.is_black {
                let key_x = white_key_idx * white_key_width - black_key_width / 2.0;
                frame.fill_rectangle(
                    Point::new(key_x, 0.0),
                    Size::new(black_key_width, black_key_height),
                    Fill::from(self.key_color(key)),
                );
                frame.stroke(
                    &Path::rectangle(
                        Point::new(key_x, 0.0),
                        Size::new(black_key_width, black_key_height),
                    ),
                    Stroke::default().with_color(Color::BLACK),
                );
            } else {
                white_key_idx += 1.0;
            }
        }

        vec![frame.into_geometry()]
    }
}
