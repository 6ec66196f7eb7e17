use iced::advanced::layout::{self, Layout};
use iced::advanced::renderer as adv_renderer;
use iced::advanced::widget::{tree, Tree, Widget};
use iced::advanced::{Clipboard, Shell};
use iced::{event, mouse, Element, Event, Length, Rectangle, Size, Transformation};

use crate::cells::Cell;
use crate::style;

#[derive(Debug, Default, Clone, Copy)]
struct State {
    measured: bool,
}

impl State {
    pub fn new() -> Self {
        State::default()
    }
}

/// The grid container: draws the planned cells and reports its realized
/// width exactly once, after its first layout pass.
pub struct GridBoard<'a, Message> {
    cells: &'a [Cell],
    on_measure: Box<dyn Fn(f32) -> Message + 'a>,
}

impl<'a, Message> GridBoard<'a, Message> {
    pub fn new(cells: &'a [Cell], on_measure: impl Fn(f32) -> Message + 'a) -> Self {
        Self {
            cells,
            on_measure: Box::new(on_measure),
        }
    }
}

impl<'a, Message: 'a, Theme, Renderer> From<GridBoard<'a, Message>>
    for Element<'a, Message, Theme, Renderer>
where
    Renderer: adv_renderer::Renderer,
{
    fn from(grid: GridBoard<'a, Message>) -> Self {
        Self::new(grid)
    }
}

impl<'a, Message, Theme, Renderer> Widget<Message, Theme, Renderer> for GridBoard<'a, Message>
where
    Renderer: adv_renderer::Renderer,
{
    fn tag(&self) -> tree::Tag {
        tree::Tag::of::<State>()
    }

    fn state(&self) -> tree::State {
        tree::State::new(State::new())
    }

    fn size(&self) -> Size<Length> {
        Size {
            width: Length::Fill,
            height: Length::Fill,
        }
    }

    fn layout(
        &self,
        _tree: &mut Tree,
        _renderer: &Renderer,
        limits: &layout::Limits,
    ) -> layout::Node {
        layout::atomic(limits, Length::Fill, Length::Fill)
    }

    fn on_event(
        &mut self,
        tree: &mut Tree,
        _event: Event,
        layout: Layout<'_>,
        _cursor: mouse::Cursor,
        _renderer: &Renderer,
        _clipboard: &mut dyn Clipboard,
        shell: &mut Shell<'_, Message>,
        _viewport: &Rectangle,
    ) -> event::Status {
        let state = tree.state.downcast_mut::<State>();
        // Events are only delivered once a layout pass has run, so the
        // bounds seen by the first event are the container's realized size.
        if !state.measured {
            let width = layout.bounds().width;
            if width > 0.0 {
                state.measured = true;
                shell.publish((self.on_measure)(width));
            }
        }
        event::Status::Ignored
    }

    fn draw(
        &self,
        _tree: &Tree,
        renderer: &mut Renderer,
        _theme: &Theme,
        _style: &adv_renderer::Style,
        layout: Layout<'_>,
        _cursor: mouse::Cursor,
        _viewport: &Rectangle,
    ) {
        let bounds = layout.bounds();
        renderer.with_layer(bounds, |renderer| {
            let transformation = Transformation::translate(bounds.x, bounds.y);
            renderer.with_transformation(transformation, |renderer| {
                for cell in self.cells {
                    renderer.fill_quad(
                        adv_renderer::Quad {
                            bounds: Rectangle {
                                x: cell.x,
                                y: cell.y,
                                width: cell.size,
                                height: cell.size,
                            },
                            ..adv_renderer::Quad::default()
                        },
                        style::Color::Cell,
                    );
                }
            });
        });
    }
}
