use std::sync::Arc;

use crossterm::event::{KeyEvent, MouseEvent};
use ratatui::Frame;
use ratatui::layout::Rect;
use tracing::{debug, info, warn};

use crate::Theme;
use crate::component::NavigationView;
use crate::config::{GlobalAction, KeyResolver};
use crate::screen::{MenuEvent, MenuScreen};
use crate::tui::{Event, Tui};
use crate::ui::{Handled, Modal, Screen};
use crate::widget::{HelpEvent, HelpOverlay};

const FRAME_RATE: f64 = 60.0;
const TICK_RATE: f64 = 4.0;

pub struct App {
    root: NavigationView<MenuScreen>,
    help: Option<HelpOverlay>,
    resolver: Arc<KeyResolver>,
    theme: Theme,
    should_quit: bool,
    should_suspend: bool,
    needs_redraw: bool,
}

impl App {
    pub fn new(resolver: Arc<KeyResolver>, theme: Theme) -> Self {
        Self {
            root: NavigationView::new(MenuScreen::new(resolver.clone()), resolver.clone()),
            help: None,
            resolver,
            theme,
            should_quit: false,
            should_suspend: false,
            needs_redraw: true,
        }
    }

    pub const fn menu(&self) -> &MenuScreen {
        self.root.screen()
    }

    pub const fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub const fn is_help_visible(&self) -> bool {
        self.help.is_some()
    }

    pub async fn run(&mut self) -> color_eyre::Result<()> {
        let mut tui = Tui::new(FRAME_RATE, TICK_RATE)?;
        tui.enter()?;

        while let Some(event) = tui.next_event().await {
            self.handle_event(&mut tui, event)?;
            if self.should_suspend {
                info!("Suspending");
                tui.suspend()?;
                tui.resume()?;
                self.should_suspend = false;
                self.needs_redraw = true;
            } else if self.should_quit() {
                break;
            }
        }

        tui.exit()?;
        info!("Exiting");
        Ok(())
    }

    fn handle_event(&mut self, tui: &mut Tui, event: Event) -> color_eyre::Result<()> {
        match event {
            Event::Init => self.needs_redraw = true,
            Event::Quit => self.should_quit = true,
            Event::Tick => {}
            Event::Render => {
                if self.needs_redraw {
                    tui.draw(|frame| self.draw(frame))?;
                    self.needs_redraw = false;
                }
            }
            Event::Resize(width, height) => {
                tui.resize(Rect::new(0, 0, width, height))?;
                self.handle_resize();
                tui.draw(|frame| self.draw(frame))?;
                self.needs_redraw = false;
            }
            Event::Key(key) => self.handle_key(key)?,
            Event::Mouse(mouse) => self.handle_mouse(mouse)?,
            Event::Error(message) => warn!("Terminal event error: {message}"),
        }
        Ok(())
    }

    /// Row areas from the previous size no longer match the screen.
    pub fn handle_resize(&mut self) {
        debug!("Terminal resized, dropping hit areas");
        self.root.invalidate_layout();
        self.needs_redraw = true;
    }

    pub fn handle_key(&mut self, key: KeyEvent) -> color_eyre::Result<()> {
        if self.resolver.matches_global(&key, GlobalAction::Quit) {
            self.should_quit = true;
            return Ok(());
        }
        if self.resolver.matches_global(&key, GlobalAction::Suspend) {
            self.should_suspend = true;
            return Ok(());
        }

        if let Some(help) = &mut self.help {
            if let Handled::Event(HelpEvent::Close) = help.handle_key(key)? {
                self.help = None;
                self.needs_redraw = true;
            }
            return Ok(());
        }

        if self.resolver.matches_global(&key, GlobalAction::Help) {
            self.help = Some(HelpOverlay::new(self.resolver.clone()));
            self.needs_redraw = true;
            return Ok(());
        }

        let handled = self.root.handle_key(key)?;
        self.after_input(handled);
        Ok(())
    }

    pub fn handle_mouse(&mut self, mouse: MouseEvent) -> color_eyre::Result<()> {
        if self.is_help_visible() {
            return Ok(());
        }
        let handled = self.root.handle_mouse(mouse)?;
        self.after_input(handled);
        Ok(())
    }

    fn after_input(&mut self, handled: Handled<MenuEvent>) {
        self.needs_redraw |= handled.is_consumed();
        if let Some(MenuEvent::Selected { section }) = handled.event() {
            let menu = self.menu();
            debug!(
                ?section,
                fruit = ?menu.selected_fruit(),
                sandwich = ?menu.selected_sandwich(),
                fruit_checked = ?menu.fruit_section().checked_rows(),
                sandwich_checked = ?menu.sandwich_section().checked_rows(),
                "Redrawing after selection change"
            );
        }
    }

    pub fn draw(&mut self, frame: &mut Frame) {
        let area = frame.area();
        self.root.render(frame, area, &self.theme);
        if let Some(help) = &mut self.help {
            help.render(frame, area, &self.theme);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::screen::menu::SectionId;
    use crossterm::event::{KeyCode, KeyModifiers, MouseButton, MouseEventKind};
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    fn app() -> App {
        App::new(Arc::new(KeyResolver::default()), Theme::default())
    }

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn render(app: &mut App) -> Terminal<TestBackend> {
        let mut terminal = Terminal::new(TestBackend::new(60, 24)).unwrap();
        terminal.draw(|frame| app.draw(frame)).unwrap();
        terminal
    }

    #[test]
    fn test_quit_key() {
        let mut app = app();
        app.handle_key(key(KeyCode::Char('q'))).unwrap();
        assert!(app.should_quit());
    }

    #[test]
    fn test_help_swallows_navigation() {
        let mut app = app();
        app.handle_key(key(KeyCode::Char('?'))).unwrap();
        assert!(app.is_help_visible());

        app.handle_key(key(KeyCode::Enter)).unwrap();
        assert_eq!(app.menu().selected_fruit(), None);

        app.handle_key(key(KeyCode::Esc)).unwrap();
        assert!(!app.is_help_visible());

        app.handle_key(key(KeyCode::Enter)).unwrap();
        assert_eq!(
            app.menu().selected_fruit().map(|f| f.color.as_str()),
            Some("Red")
        );
    }

    #[test]
    fn test_quit_works_while_help_is_open() {
        let mut app = app();
        app.handle_key(key(KeyCode::Char('?'))).unwrap();
        app.handle_key(key(KeyCode::Char('q'))).unwrap();
        assert!(app.should_quit());
    }

    #[test]
    fn test_selection_requests_redraw() {
        let mut app = app();
        app.needs_redraw = false;

        app.handle_key(key(KeyCode::Enter)).unwrap();
        assert!(app.needs_redraw);

        app.needs_redraw = false;
        app.handle_key(key(KeyCode::Char('x'))).unwrap();
        assert!(!app.needs_redraw);
    }

    #[test]
    fn test_click_through_chrome_selects_lemon() {
        let mut app = app();
        render(&mut app);

        // Border on line 0, fruit header on line 1, Lemon on lines 6..8.
        app.handle_mouse(MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column: 40,
            row: 6,
            modifiers: KeyModifiers::NONE,
        })
        .unwrap();

        assert_eq!(app.menu().focused(), (SectionId::Fruit, 2));
        assert_eq!(app.menu().fruit_section().checked_rows(), vec![2]);
        assert!(app.menu().sandwich_section().checked_rows().is_empty());
    }

    #[test]
    fn test_click_after_resize_waits_for_redraw() {
        let mut app = app();
        render(&mut app);
        app.needs_redraw = false;

        app.handle_resize();
        assert!(app.needs_redraw);

        let lemon_click = MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column: 40,
            row: 6,
            modifiers: KeyModifiers::NONE,
        };
        app.handle_mouse(lemon_click).unwrap();
        assert_eq!(app.menu().selected_fruit(), None);
        assert!(app.menu().fruit_section().checked_rows().is_empty());

        render(&mut app);
        app.handle_mouse(lemon_click).unwrap();
        assert_eq!(app.menu().fruit_section().checked_rows(), vec![2]);
    }

    #[test]
    fn test_help_renders_over_menu() {
        let mut app = app();
        app.handle_key(key(KeyCode::Char('?'))).unwrap();
        let terminal = render(&mut app);
        let text: String = terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect();
        assert!(text.contains(" Help "));
        assert!(text.contains("Next section"));
    }
}
