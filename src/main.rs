mod board;
mod cells;
mod grid;
mod menu;
mod style;

use iced::{Element, Size, Task};
#[allow(unused_imports)]
use tracing::{debug, error, info, instrument, warn};

use board::Board;
use menu::Menu;

pub fn main() -> iced::Result {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    iced::application("Gridboard", App::update, App::view)
        .antialiasing(true)
        .window_size(Size::new(420.0, 640.0))
        .run()
}

#[derive(Debug, Clone)]
enum Message {
    Menu(menu::Event),
    Board(board::Event),
}

/// The screen currently being displayed. The menu is not stored here: it
/// outlives any board screen stacked on top of it.
#[derive(Debug)]
enum Screen {
    Menu,
    Board(Board),
}

#[derive(Debug)]
struct App {
    menu: Menu,
    screen: Screen,
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}

impl App {
    fn new() -> Self {
        App {
            menu: Menu::new(),
            screen: Screen::Menu,
        }
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::Menu(event) => {
                if let Some(menu::Action::StartGame) = self.menu.update(event) {
                    info!("entering board screen");
                    self.screen = Screen::Board(Board::new());
                }
            }
            Message::Board(event) => {
                if let Screen::Board(board) = &mut self.screen {
                    if let Some(board::Action::Exit) = board.update(event) {
                        info!("returning to menu screen");
                        self.screen = Screen::Menu;
                    }
                }
            }
        }
        Task::none()
    }

    fn view(&self) -> Element<'_, Message> {
        match &self.screen {
            Screen::Menu => self.menu.view().map(Message::Menu),
            Screen::Board(board) => board.view().map(Message::Board),
        }
    }
}

#[cfg(test)]
mod test_app {
    use super::*;

    #[test]
    fn test_starts_on_menu() {
        let app = App::new();
        assert!(matches!(app.screen, Screen::Menu));
    }

    #[test]
    fn test_start_enters_board() {
        let mut app = App::new();
        let _ = app.update(Message::Menu(menu::Event::StartPressed));
        assert!(matches!(app.screen, Screen::Board(_)));
    }

    #[test]
    fn test_how_to_play_never_navigates() {
        let mut app = App::new();
        let _ = app.update(Message::Menu(menu::Event::HowToPlayPressed));
        assert!(matches!(app.screen, Screen::Menu));
        assert_eq!(app.menu.notice(), Some("How to Play clicked!"));
    }

    #[test]
    fn test_back_restores_the_same_menu() {
        let mut app = App::new();
        let _ = app.update(Message::Menu(menu::Event::HowToPlayPressed));
        let _ = app.update(Message::Menu(menu::Event::StartPressed));
        let _ = app.update(Message::Board(board::Event::BackPressed));
        assert!(matches!(app.screen, Screen::Menu));
        // The menu kept its state across the round trip, so the user is
        // back on the same instance rather than a fresh one.
        assert_eq!(app.menu.notice(), Some("How to Play clicked!"));
    }

    #[test]
    fn test_full_round_trip() {
        let mut app = App::new();
        let _ = app.update(Message::Menu(menu::Event::StartPressed));
        let _ = app.update(Message::Board(board::Event::Measured(400.0)));
        let Screen::Board(board) = &app.screen else {
            panic!("expected the board screen to be active");
        };
        assert_eq!(board.cells().len(), 64);
        let _ = app.update(Message::Board(board::Event::BackPressed));
        assert!(matches!(app.screen, Screen::Menu));
    }
}
