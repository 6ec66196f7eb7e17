//! The menu screen: the application's entry point, offering the start and
//! how-to-play actions.

use iced::widget::{button, column, container, text};
use iced::{Alignment, Element, Length};
#[allow(unused_imports)]
use tracing::{debug, error, info, instrument, warn};

use crate::style;

/// A user interaction on the menu screen.
#[derive(Debug, Clone)]
pub enum Event {
    StartPressed,
    HowToPlayPressed,
}

/// What the application root should do in response to a menu event.
#[derive(Debug)]
pub enum Action {
    StartGame,
}

/// The menu screen. It stays alive while the board screen is shown on top
/// of it, so returning from the board restores it unchanged.
#[derive(Debug, Default)]
pub struct Menu {
    notice: Option<String>,
}

impl Menu {
    pub fn new() -> Self {
        Self::default()
    }

    /// The last transient notice surfaced to the user, if any.
    pub fn notice(&self) -> Option<&str> {
        self.notice.as_deref()
    }

    pub fn update(&mut self, event: Event) -> Option<Action> {
        match event {
            Event::StartPressed => Some(Action::StartGame),
            Event::HowToPlayPressed => {
                // TODO: Navigate to an instructions screen once one exists.
                info!("how to play pressed");
                self.notice = Some(String::from("How to Play clicked!"));
                None
            }
        }
    }

    pub fn view(&self) -> Element<'_, Event> {
        let content = column![
            text("Gridboard").size(32.0),
            button("Start Game")
                .width(200.0)
                .on_press(Event::StartPressed),
            button("How to Play")
                .width(200.0)
                .on_press(Event::HowToPlayPressed),
        ]
        .spacing(16.0)
        .align_x(Alignment::Center)
        .push_maybe(
            self.notice
                .as_ref()
                .map(|notice| text(notice).size(14.0).color(style::Color::Text)),
        );

        container(content)
            .style(|_theme| container::Style {
                background: Some(style::Color::Bg.into()),
                ..container::Style::default()
            })
            .center(Length::Fill)
            .into()
    }
}

#[cfg(test)]
mod test_menu {
    use super::*;

    #[test]
    fn test_start_requests_navigation() {
        let mut menu = Menu::new();
        let action = menu.update(Event::StartPressed);
        assert!(matches!(action, Some(Action::StartGame)));
    }

    #[test]
    fn test_how_to_play_only_sets_notice() {
        let mut menu = Menu::new();
        assert!(menu.update(Event::HowToPlayPressed).is_none());
        assert_eq!(menu.notice(), Some("How to Play clicked!"));
    }
}
