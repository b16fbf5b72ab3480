//! Component trait for reusable UI building blocks.

use crossterm::event::MouseEvent;
use ratatui::Frame;
use ratatui::layout::Rect;

use crate::Theme;
use crate::ui::{Handled, Result};

/// Interactive UI building block.
///
/// Components are reusable widgets that handle pointer input and emit
/// generic outputs. They know nothing about the menu; keyboard focus is
/// owned by the screen that contains them.
///
/// # Examples
///
/// - `Section` - Titled group of selectable rows sharing one selection slot
pub trait Component {
    /// The output type this component produces.
    type Output;

    /// Handle a mouse event. Hit regions come from the last render.
    ///
    /// Returns `Ok(Handled::...)` where:
    /// - `Ignored` - event was not handled, parent should process it
    /// - `Consumed` - event was handled but produced no output
    /// - `Event(output)` - event was handled and produced an output
    fn handle_mouse(&mut self, mouse: MouseEvent) -> Result<Handled<Self::Output>> {
        _ = mouse;
        Ok(Handled::Ignored)
    }

    /// Render the component to the frame.
    fn render(&mut self, frame: &mut Frame, area: Rect, theme: &Theme);
}
