use crossterm::event::{MouseButton, MouseEvent, MouseEventKind};
use ratatui::Frame;
use ratatui::layout::{Position, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::Paragraph;
use tracing::{debug, info};

use crate::Theme;
use crate::component::{Cell, SelectableRow};
use crate::model::SelectionSlot;
use crate::ui::{Component, Handled, Result};

/// Emitted when a row in a section is tapped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Tapped {
    pub index: usize,
    /// False when the row was already the selection.
    pub changed: bool,
}

/// A titled group of rows sharing one selection slot.
pub struct Section<C: Cell> {
    title: String,
    rows: Vec<SelectableRow<C>>,
    slot: SelectionSlot<C::Model>,
    focused: Option<usize>,
    row_areas: Vec<Rect>,
}

impl<C> Section<C>
where
    C: Cell,
    C::Model: std::fmt::Display,
{
    pub fn new(title: impl Into<String>, cells: impl IntoIterator<Item = C>) -> Self {
        Self {
            title: title.into(),
            rows: cells.into_iter().map(SelectableRow::new).collect(),
            slot: SelectionSlot::new(),
            focused: None,
            row_areas: Vec::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn selected(&self) -> Option<&C::Model> {
        self.slot.get()
    }

    pub fn is_checked(&self, index: usize) -> bool {
        self.rows
            .get(index)
            .is_some_and(|row| row.is_checked(&self.slot))
    }

    /// Indices of rows currently showing a checkmark.
    pub fn checked_rows(&self) -> Vec<usize> {
        (0..self.rows.len()).filter(|&i| self.is_checked(i)).collect()
    }

    pub const fn focused(&self) -> Option<usize> {
        self.focused
    }

    pub fn set_focus(&mut self, index: Option<usize>) {
        self.focused = index.filter(|&i| i < self.rows.len());
    }

    /// Tap the row at `index`. Returns None if there is no such row.
    pub fn tap(&mut self, index: usize) -> Option<Tapped> {
        let row = self.rows.get(index)?;
        let changed = row.tap(&mut self.slot);
        let model = row.cell().model();
        if changed {
            info!(section = %self.title, %model, "Selection changed");
        } else {
            debug!(section = %self.title, %model, "Row already selected");
        }
        Some(Tapped { index, changed })
    }

    /// Row whose last rendered area contains the given position.
    pub fn row_at(&self, column: u16, row: u16) -> Option<usize> {
        let position = Position::new(column, row);
        self.row_areas
            .iter()
            .position(|area| area.contains(position))
    }

    /// Forget the row areas from the last render. Clicks are ignored until
    /// the section is drawn again.
    pub fn clear_hit_areas(&mut self) {
        self.row_areas.clear();
    }

    /// Terminal rows needed for the header and all rows.
    pub fn height(&self) -> u16 {
        1 + self.rows.iter().map(SelectableRow::height).sum::<u16>()
    }
}

impl<C> Component for Section<C>
where
    C: Cell,
    C::Model: std::fmt::Display,
{
    type Output = Tapped;

    fn handle_mouse(&mut self, mouse: MouseEvent) -> Result<Handled<Self::Output>> {
        if mouse.kind != MouseEventKind::Down(MouseButton::Left) {
            return Ok(Handled::Ignored);
        }
        let Some(index) = self.row_at(mouse.column, mouse.row) else {
            return Ok(Handled::Ignored);
        };
        self.focused = Some(index);
        Ok(self.tap(index).map_or(Handled::Ignored, Handled::Event))
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, theme: &Theme) {
        self.row_areas.clear();
        if area.is_empty() {
            return;
        }

        let header = Line::styled(
            self.title.clone(),
            Style::default()
                .fg(theme.header())
                .add_modifier(Modifier::BOLD),
        );
        frame.render_widget(Paragraph::new(header), Rect { height: 1, ..area });

        let mut y = area.y.saturating_add(1);
        let bottom = area.bottom();
        for (index, row) in self.rows.iter().enumerate() {
            if y >= bottom {
                break;
            }
            let height = row.height().min(bottom - y);
            let row_area = Rect::new(area.x, y, area.width, height);
            row.render(
                frame,
                row_area,
                &self.slot,
                self.focused() == Some(index),
                theme,
            );
            self.row_areas.push(row_area);
            y = y.saturating_add(height);
        }
    }
}
