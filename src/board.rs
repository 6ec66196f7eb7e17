//! The board screen: a static 8×8 grid of placeholder cells and a back
//! action.

use iced::widget::{button, column, container};
use iced::{Element, Length};
#[allow(unused_imports)]
use tracing::{debug, error, info, instrument, warn};

use crate::cells::{self, Cell};
use crate::grid::GridBoard;
use crate::style;

/// A user interaction or layout notification on the board screen.
#[derive(Debug, Clone)]
pub enum Event {
    BackPressed,
    /// The grid container has been laid out; carries its realized width.
    Measured(f32),
}

/// What the application root should do in response to a board event.
#[derive(Debug)]
pub enum Action {
    Exit,
}

/// The board screen. Its cells exist only between the grid container's
/// first layout pass and the screen's teardown.
#[derive(Debug, Default)]
pub struct Board {
    cells: Vec<Cell>,
}

impl Board {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Clears any cells from a previous pass and lays out a fresh grid for
    /// the measured width, so repeated measurement never accumulates cells.
    fn populate(&mut self, width: f32) {
        self.cells.clear();
        self.cells.extend(cells::plan(cells::GRID_SIZE, width));
        debug!(width, n_cells = self.cells.len(), "populated board grid");
    }

    pub fn update(&mut self, event: Event) -> Option<Action> {
        match event {
            Event::BackPressed => Some(Action::Exit),
            Event::Measured(width) => {
                self.populate(width);
                None
            }
        }
    }

    pub fn view(&self) -> Element<'_, Event> {
        let content = column![
            button("Back").on_press(Event::BackPressed),
            container(GridBoard::new(&self.cells, Event::Measured))
                .width(Length::Fill)
                .height(Length::Fill),
        ]
        .spacing(12.0)
        .padding(16.0);

        container(content)
            .style(|_theme| container::Style {
                background: Some(style::Color::Bg.into()),
                ..container::Style::default()
            })
            .width(Length::Fill)
            .height(Length::Fill)
            .into()
    }
}

#[cfg(test)]
mod test_board {
    use super::*;

    #[test]
    fn test_measurement_populates_grid() {
        let mut board = Board::new();
        assert!(board.cells().is_empty());
        assert!(board.update(Event::Measured(400.0)).is_none());
        assert_eq!(board.cells().len(), 64);
    }

    #[test]
    fn test_repeated_measurement_is_idempotent() {
        let mut board = Board::new();
        let _ = board.update(Event::Measured(400.0));
        let _ = board.update(Event::Measured(400.0));
        assert_eq!(board.cells().len(), 64);
    }

    #[test]
    fn test_remeasurement_adopts_new_width() {
        let mut board = Board::new();
        let _ = board.update(Event::Measured(400.0));
        let _ = board.update(Event::Measured(320.0));
        assert_eq!(board.cells().len(), 64);
        assert!(board.cells().iter().all(|cell| cell.size == 40.0));
    }

    #[test]
    fn test_back_requests_exit() {
        let mut board = Board::new();
        let action = board.update(Event::BackPressed);
        assert!(matches!(action, Some(Action::Exit)));
    }
}
