//! Provides styling information such as colours for drawing.

use iced::color;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Color {
    Bg,
    Text,
    Cell,
}

impl From<Color> for iced::Color {
    fn from(value: Color) -> Self {
        match value {
            Color::Bg => color!(0xf6f6fc),
            Color::Text => color!(0x111111),
            Color::Cell => color!(0x2c3e50),
        }
    }
}

impl From<Color> for iced::Background {
    fn from(value: Color) -> iced::Background {
        iced::Background::Color(iced::Color::from(value))
    }
}
