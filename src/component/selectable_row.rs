use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::widgets::{Block, Padding, Paragraph};

use crate::Theme;
use crate::component::cell::Cell;
use crate::model::SelectionSlot;

pub const CHECKMARK: &str = "✓";

/// Wraps a cell with a trailing checkmark and tap handling.
///
/// The row itself is stateless. Whether it is checked is decided entirely
/// by comparing the section's slot against the cell's model.
pub struct SelectableRow<C: Cell> {
    cell: C,
}

impl<C: Cell> SelectableRow<C> {
    pub const fn new(cell: C) -> Self {
        Self { cell }
    }

    pub const fn cell(&self) -> &C {
        &self.cell
    }

    pub fn height(&self) -> u16 {
        self.cell.height()
    }

    pub fn is_checked(&self, slot: &SelectionSlot<C::Model>) -> bool {
        slot.is_selected(self.cell.model())
    }

    /// Write this row's model into the slot. Returns true if the slot
    /// changed; tapping the already selected row leaves it as is.
    pub fn tap(&self, slot: &mut SelectionSlot<C::Model>) -> bool {
        slot.select(self.cell.model().clone())
    }

    pub fn render(
        &self,
        frame: &mut Frame,
        area: Rect,
        slot: &SelectionSlot<C::Model>,
        focused: bool,
        theme: &Theme,
    ) {
        if focused {
            frame.render_widget(
                Block::default().style(Style::default().bg(theme.selection_bg())),
                area,
            );
        }

        let [content, trailing] =
            Layout::horizontal([Constraint::Min(0), Constraint::Length(3)]).areas(area);

        let paragraph = Paragraph::new(self.cell.lines(theme))
            .block(Block::default().padding(Padding::left(2)));
        frame.render_widget(paragraph, content);

        if self.is_checked(slot) {
            let mark = Paragraph::new(CHECKMARK).style(
                Style::default()
                    .fg(theme.success())
                    .add_modifier(Modifier::BOLD),
            );
            frame.render_widget(mark, trailing);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::component::cell::FruitCell;
    use crate::model::FruitModel;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    fn row(name: &str, color: &str) -> SelectableRow<FruitCell> {
        SelectableRow::new(FruitCell::new(FruitModel::new(name, color)))
    }

    fn render_to_string(row: &SelectableRow<FruitCell>, slot: &SelectionSlot<FruitModel>) -> String {
        let mut terminal = Terminal::new(TestBackend::new(20, 2)).unwrap();
        terminal
            .draw(|frame| row.render(frame, frame.area(), slot, false, &Theme::default()))
            .unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect()
    }

    #[test]
    fn test_unchecked_with_empty_slot() {
        let slot = SelectionSlot::new();
        let apple = row("Apple", "Red");
        assert!(!apple.is_checked(&slot));
        assert!(!render_to_string(&apple, &slot).contains(CHECKMARK));
    }

    #[test]
    fn test_tap_checks_row() {
        let mut slot = SelectionSlot::new();
        let apple = row("Apple", "Red");

        assert!(apple.tap(&mut slot));
        assert!(apple.is_checked(&slot));

        let rendered = render_to_string(&apple, &slot);
        assert!(rendered.contains("Apple"));
        assert!(rendered.contains(CHECKMARK));
    }

    #[test]
    fn test_tap_other_row_moves_checkmark() {
        let mut slot = SelectionSlot::new();
        let red = row("Apple", "Red");
        let green = row("Apple", "Green");

        red.tap(&mut slot);
        assert!(green.tap(&mut slot));

        assert!(!red.is_checked(&slot));
        assert!(green.is_checked(&slot));
        assert!(!render_to_string(&red, &slot).contains(CHECKMARK));
    }

    #[test]
    fn test_retap_keeps_selection() {
        let mut slot = SelectionSlot::new();
        let lemon = row("Lemon", "Yellow");

        lemon.tap(&mut slot);
        assert!(!lemon.tap(&mut slot));
        assert!(lemon.is_checked(&slot));
    }
}
