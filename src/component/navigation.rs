use std::sync::Arc;

use crossterm::event::{KeyEvent, MouseEvent};
use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Padding, Paragraph};

use crate::Theme;
use crate::config::{GlobalAction, KeyResolver, NavAction};
use crate::ui::{Handled, Result, Screen};

/// Navigation chrome around a single screen: a titled border and a footer
/// with key hints. Input passes straight through to the screen.
pub struct NavigationView<S: Screen> {
    screen: S,
    resolver: Arc<KeyResolver>,
}

impl<S: Screen> NavigationView<S> {
    pub const fn new(screen: S, resolver: Arc<KeyResolver>) -> Self {
        Self { screen, resolver }
    }

    pub const fn screen(&self) -> &S {
        &self.screen
    }

    fn hints(&self, theme: &Theme) -> Line<'static> {
        let key_style = Style::default().fg(theme.mauve());
        let text_style = Style::default().fg(theme.overlay0());
        let hints = [
            (self.resolver.display_nav(NavAction::Select), "select"),
            (self.resolver.display_nav(NavAction::NextSection), "next section"),
            (self.resolver.display_global(GlobalAction::Help), "help"),
            (self.resolver.display_global(GlobalAction::Quit), "quit"),
        ];

        let mut spans = Vec::new();
        for (i, (keys, label)) in hints.into_iter().enumerate() {
            if i > 0 {
                spans.push(Span::styled("  ", text_style));
            }
            spans.push(Span::styled(keys, key_style));
            spans.push(Span::styled(format!(" {label}"), text_style));
        }
        Line::from(spans)
    }
}

impl<S: Screen> Screen for NavigationView<S> {
    type Msg = S::Msg;

    fn handle_key(&mut self, key: KeyEvent) -> Result<Handled<Self::Msg>> {
        self.screen.handle_key(key)
    }

    fn handle_mouse(&mut self, mouse: MouseEvent) -> Result<Handled<Self::Msg>> {
        self.screen.handle_mouse(mouse)
    }

    fn invalidate_layout(&mut self) {
        self.screen.invalidate_layout();
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, theme: &Theme) {
        let [body, footer] =
            Layout::vertical([Constraint::Min(0), Constraint::Length(1)]).areas(area);

        let block = Block::default()
            .title(format!(" {} ", self.screen.title()))
            .title_style(
                Style::default()
                    .fg(theme.border_focused())
                    .add_modifier(Modifier::BOLD),
            )
            .borders(Borders::ALL)
            .border_type(theme.border_type)
            .border_style(Style::default().fg(theme.border()))
            .padding(Padding::horizontal(1));

        let inner = block.inner(body);
        frame.render_widget(block, body);
        self.screen.render(frame, inner, theme);

        frame.render_widget(Paragraph::new(self.hints(theme)), footer);
    }

    fn title(&self) -> &str {
        self.screen.title()
    }
}
