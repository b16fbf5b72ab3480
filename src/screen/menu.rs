use std::sync::Arc;

use crossterm::event::{KeyEvent, MouseEvent};
use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use tracing::debug;

use crate::Theme;
use crate::component::{FruitCell, SandwichCell, Section, Tapped};
use crate::config::{KeyResolver, NavAction};
use crate::model::{FruitModel, SandwichModel, fruit_fixtures, sandwich_fixtures};
use crate::ui::{Component, Handled, Result, Screen};

pub const FRUIT_TITLE: &str = "Fruit (free)";
pub const SANDWICH_TITLE: &str = "Sandwiches (to buy)";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SectionId {
    Fruit,
    Sandwich,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuEvent {
    /// A section's selection changed and its rows need redrawing.
    Selected { section: SectionId },
}

/// The menu: a fruit section and a sandwich section, each with its own
/// independent selection.
pub struct MenuScreen {
    fruits: Section<FruitCell>,
    sandwiches: Section<SandwichCell>,
    /// Index into the fruit rows followed by the sandwich rows.
    focus: usize,
    resolver: Arc<KeyResolver>,
}

impl MenuScreen {
    pub fn new(resolver: Arc<KeyResolver>) -> Self {
        let mut screen = Self {
            fruits: Section::new(FRUIT_TITLE, fruit_fixtures().into_iter().map(FruitCell::new)),
            sandwiches: Section::new(
                SANDWICH_TITLE,
                sandwich_fixtures().into_iter().map(SandwichCell::new),
            ),
            focus: 0,
            resolver,
        };
        screen.sync_focus();
        screen
    }

    pub const fn fruit_section(&self) -> &Section<FruitCell> {
        &self.fruits
    }

    pub const fn sandwich_section(&self) -> &Section<SandwichCell> {
        &self.sandwiches
    }

    pub fn selected_fruit(&self) -> Option<&FruitModel> {
        self.fruits.selected()
    }

    pub fn selected_sandwich(&self) -> Option<&SandwichModel> {
        self.sandwiches.selected()
    }

    fn row_count(&self) -> usize {
        self.fruits.len() + self.sandwiches.len()
    }

    /// Section and row index of the focused row.
    pub fn focused(&self) -> (SectionId, usize) {
        if self.focus < self.fruits.len() {
            (SectionId::Fruit, self.focus)
        } else {
            (SectionId::Sandwich, self.focus - self.fruits.len())
        }
    }

    fn focus_row(&mut self, section: SectionId, index: usize) {
        self.focus = match section {
            SectionId::Fruit => index,
            SectionId::Sandwich => self.fruits.len() + index,
        };
        self.sync_focus();
    }

    fn sync_focus(&mut self) {
        let (section, index) = self.focused();
        self.fruits
            .set_focus((section == SectionId::Fruit).then_some(index));
        self.sandwiches
            .set_focus((section == SectionId::Sandwich).then_some(index));
    }

    fn move_focus(&mut self, action: NavAction) {
        let count = self.row_count();
        if count == 0 {
            return;
        }
        self.focus = match action {
            NavAction::Up => (self.focus + count - 1) % count,
            NavAction::Down => (self.focus + 1) % count,
            NavAction::Home => 0,
            NavAction::End => count - 1,
            NavAction::NextSection => match self.focused().0 {
                SectionId::Fruit if !self.sandwiches.is_empty() => self.fruits.len(),
                _ => 0,
            },
            NavAction::Select => self.focus,
        };
        self.sync_focus();
    }

    /// Tap a row, the same as clicking it.
    pub fn tap(&mut self, section: SectionId, index: usize) -> Handled<MenuEvent> {
        let tapped = match section {
            SectionId::Fruit => self.fruits.tap(index),
            SectionId::Sandwich => self.sandwiches.tap(index),
        };
        match tapped {
            Some(tapped) => {
                self.focus_row(section, tapped.index);
                Self::tapped_event(section, tapped)
            }
            None => Handled::Ignored,
        }
    }

    fn tapped_event(section: SectionId, tapped: Tapped) -> Handled<MenuEvent> {
        if tapped.changed {
            MenuEvent::Selected { section }.into()
        } else {
            Handled::Consumed
        }
    }
}

impl Screen for MenuScreen {
    type Msg = MenuEvent;

    fn handle_key(&mut self, key: KeyEvent) -> Result<Handled<Self::Msg>> {
        if self.resolver.matches_nav(&key, NavAction::Select) {
            let (section, index) = self.focused();
            return Ok(self.tap(section, index));
        }

        let movement = [
            NavAction::Up,
            NavAction::Down,
            NavAction::Home,
            NavAction::End,
            NavAction::NextSection,
        ]
        .into_iter()
        .find(|action| self.resolver.matches_nav(&key, *action));

        Ok(movement.map_or(Handled::Ignored, |action| {
            self.move_focus(action);
            debug!(focus = ?self.focused(), "Focus moved");
            Handled::Consumed
        }))
    }

    fn handle_mouse(&mut self, mouse: MouseEvent) -> Result<Handled<Self::Msg>> {
        if let Handled::Event(tapped) = self.fruits.handle_mouse(mouse)? {
            self.focus_row(SectionId::Fruit, tapped.index);
            return Ok(Self::tapped_event(SectionId::Fruit, tapped));
        }
        if let Handled::Event(tapped) = self.sandwiches.handle_mouse(mouse)? {
            self.focus_row(SectionId::Sandwich, tapped.index);
            return Ok(Self::tapped_event(SectionId::Sandwich, tapped));
        }
        Ok(Handled::Ignored)
    }

    fn invalidate_layout(&mut self) {
        self.fruits.clear_hit_areas();
        self.sandwiches.clear_hit_areas();
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, theme: &Theme) {
        let [fruits, _, sandwiches, _] = Layout::vertical([
            Constraint::Length(self.fruits.height()),
            Constraint::Length(1),
            Constraint::Length(self.sandwiches.height()),
            Constraint::Min(0),
        ])
        .areas(area);

        self.fruits.render(frame, fruits, theme);
        self.sandwiches.render(frame, sandwiches, theme);
    }

    fn title(&self) -> &str {
        "Menu"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::component::selectable_row::CHECKMARK;
    use crossterm::event::{KeyCode, KeyModifiers, MouseButton, MouseEventKind};
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    fn screen() -> MenuScreen {
        MenuScreen::new(Arc::new(KeyResolver::default()))
    }

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn click(column: u16, row: u16) -> MouseEvent {
        MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column,
            row,
            modifiers: KeyModifiers::NONE,
        }
    }

    fn lemon() -> FruitModel {
        FruitModel::new("Lemon", "Yellow")
    }

    fn draw(screen: &mut MenuScreen) -> Terminal<TestBackend> {
        let mut terminal = Terminal::new(TestBackend::new(40, 16)).unwrap();
        terminal
            .draw(|frame| screen.render(frame, frame.area(), &Theme::default()))
            .unwrap();
        terminal
    }

    /// Line numbers in the buffer that carry a checkmark.
    fn checked_lines(terminal: &Terminal<TestBackend>) -> Vec<u16> {
        let buffer = terminal.backend().buffer();
        let area = buffer.area;
        (area.top()..area.bottom())
            .filter(|&y| {
                (area.left()..area.right()).any(|x| buffer[(x, y)].symbol() == CHECKMARK)
            })
            .collect()
    }

    #[test]
    fn test_initial_state_has_no_checkmarks() {
        let mut screen = screen();
        assert_eq!(screen.selected_fruit(), None);
        assert_eq!(screen.selected_sandwich(), None);
        assert!(checked_lines(&draw(&mut screen)).is_empty());
    }

    #[test]
    fn test_renders_section_titles() {
        let mut screen = screen();
        let terminal = draw(&mut screen);
        let buffer = terminal.backend().buffer();
        let text: String = buffer.content().iter().map(|c| c.symbol()).collect();

        assert!(text.contains(FRUIT_TITLE));
        assert!(text.contains(SANDWICH_TITLE));
        assert!(text.contains("Club Sandwich $7.50"));
        assert!(text.contains("White bread,Ham,Cheese,Mustard"));
    }

    #[test]
    fn test_tap_lemon_checks_only_lemon() {
        let mut screen = screen();

        let handled = screen.tap(SectionId::Fruit, 2);
        assert_eq!(handled, Handled::Event(MenuEvent::Selected { section: SectionId::Fruit }));

        assert_eq!(screen.selected_fruit(), Some(&lemon()));
        assert_eq!(screen.fruit_section().checked_rows(), vec![2]);
        assert!(screen.sandwich_section().checked_rows().is_empty());

        // Lemon is the third fruit row: header on line 0, rows of two lines.
        assert_eq!(checked_lines(&draw(&mut screen)), vec![5]);
    }

    #[test]
    fn test_tapping_another_row_moves_selection() {
        let mut screen = screen();
        screen.tap(SectionId::Fruit, 0);
        screen.tap(SectionId::Fruit, 1);

        assert_eq!(screen.selected_fruit(), Some(&FruitModel::new("Apple", "Green")));
        assert!(!screen.fruit_section().is_checked(0));
        assert_eq!(screen.fruit_section().checked_rows(), vec![1]);
    }

    #[test]
    fn test_retap_is_idempotent() {
        let mut screen = screen();
        screen.tap(SectionId::Sandwich, 1);

        assert_eq!(screen.tap(SectionId::Sandwich, 1), Handled::Consumed);
        assert_eq!(
            screen.selected_sandwich().map(|s| s.name.as_str()),
            Some("Ham/Cheese Toastie")
        );
        assert_eq!(screen.sandwich_section().checked_rows(), vec![1]);
    }

    #[test]
    fn test_sections_are_independent() {
        let mut screen = screen();
        screen.tap(SectionId::Sandwich, 0);
        let sandwich = screen.selected_sandwich().cloned();

        screen.tap(SectionId::Fruit, 1);
        screen.tap(SectionId::Fruit, 2);
        assert_eq!(screen.selected_sandwich().cloned(), sandwich);

        screen.tap(SectionId::Sandwich, 1);
        assert_eq!(screen.selected_fruit(), Some(&lemon()));
    }

    #[test]
    fn test_keyboard_selects_focused_row() {
        let mut screen = screen();
        screen.handle_key(key(KeyCode::Down)).unwrap();
        screen.handle_key(key(KeyCode::Down)).unwrap();

        let handled = screen.handle_key(key(KeyCode::Enter)).unwrap();
        assert_eq!(handled, Handled::Event(MenuEvent::Selected { section: SectionId::Fruit }));
        assert_eq!(screen.selected_fruit(), Some(&lemon()));
    }

    #[test]
    fn test_focus_wraps_and_jumps_sections() {
        let mut screen = screen();
        assert_eq!(screen.focused(), (SectionId::Fruit, 0));

        screen.handle_key(key(KeyCode::Up)).unwrap();
        assert_eq!(screen.focused(), (SectionId::Sandwich, 1));

        screen.handle_key(key(KeyCode::Tab)).unwrap();
        assert_eq!(screen.focused(), (SectionId::Fruit, 0));

        screen.handle_key(key(KeyCode::Tab)).unwrap();
        assert_eq!(screen.focused(), (SectionId::Sandwich, 0));
        assert_eq!(screen.fruit_section().focused(), None);
        assert_eq!(screen.sandwich_section().focused(), Some(0));
    }

    #[test]
    fn test_focus_alone_never_selects() {
        let mut screen = screen();
        for code in [KeyCode::Down, KeyCode::End, KeyCode::Home, KeyCode::Tab] {
            assert_eq!(screen.handle_key(key(code)).unwrap(), Handled::Consumed);
        }
        assert_eq!(screen.selected_fruit(), None);
        assert_eq!(screen.selected_sandwich(), None);
    }

    #[test]
    fn test_unbound_key_is_ignored() {
        let mut screen = screen();
        assert_eq!(screen.handle_key(key(KeyCode::Char('x'))).unwrap(), Handled::Ignored);
    }

    #[test]
    fn test_click_selects_sandwich_row() {
        let mut screen = screen();
        draw(&mut screen);

        // Fruit section: lines 0..7, spacer line 7, sandwich header line 8,
        // first sandwich on lines 9..11.
        let handled = screen.handle_mouse(click(30, 10)).unwrap();
        assert_eq!(
            handled,
            Handled::Event(MenuEvent::Selected { section: SectionId::Sandwich })
        );
        assert_eq!(
            screen.selected_sandwich().map(|s| s.name.as_str()),
            Some("Club Sandwich")
        );
        assert_eq!(screen.focused(), (SectionId::Sandwich, 0));
        assert_eq!(screen.selected_fruit(), None);
    }

    #[test]
    fn test_click_outside_rows_is_ignored() {
        let mut screen = screen();
        draw(&mut screen);

        assert_eq!(screen.handle_mouse(click(5, 7)).unwrap(), Handled::Ignored);
        assert_eq!(screen.handle_mouse(click(5, 15)).unwrap(), Handled::Ignored);
    }
}
