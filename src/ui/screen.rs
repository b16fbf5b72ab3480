//! Screen trait for full-page views.

use crate::Theme;
use crate::ui::{Handled, Result};
use crossterm::event::{KeyEvent, MouseEvent};
use ratatui::Frame;
use ratatui::layout::Rect;

/// Full-page view that orchestrates components.
///
/// Screens connect UI interactions to application state by translating
/// component outputs into messages.
///
/// # Examples
///
/// - `MenuScreen` - fruit and sandwich sections, emits `MenuEvent`
pub trait Screen {
    /// The message type this screen emits (e.g., `MenuEvent`)
    type Msg;

    /// Handle a key event, possibly emitting a message.
    ///
    /// Returns `Ok(Handled::...)` where:
    /// - `Ignored` - key was not handled, parent should process it
    /// - `Consumed` - key was handled but produced no message
    /// - `Event(msg)` - key was handled and produced a message
    ///
    /// Returns `Err(...)` if an error occurred during handling.
    fn handle_key(&mut self, key: KeyEvent) -> Result<Handled<Self::Msg>> {
        _ = key;
        Ok(Handled::Ignored)
    }

    /// Handle a mouse event, possibly emitting a message.
    fn handle_mouse(&mut self, mouse: MouseEvent) -> Result<Handled<Self::Msg>> {
        _ = mouse;
        Ok(Handled::Ignored)
    }

    /// Drop any hit regions recorded by the last render. Called when the
    /// terminal is resized, before the next frame is drawn.
    fn invalidate_layout(&mut self) {}

    /// Render the screen to the frame.
    fn render(&mut self, frame: &mut Frame, area: Rect, theme: &Theme);

    /// Title shown by the surrounding navigation chrome.
    fn title(&self) -> &str;
}
