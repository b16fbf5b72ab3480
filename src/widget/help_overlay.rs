use crossterm::event::KeyEvent;
use ratatui::{
    Frame,
    layout::{Constraint, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
};

use crate::Theme;
use crate::config::{GlobalAction, KeyResolver, NavAction};
use crate::ui::{Handled, Modal, Result};

/// A keybinding entry for the help overlay.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Keybinding {
    pub keys: String,
    pub description: &'static str,
}

impl Keybinding {
    pub const fn new(keys: String, description: &'static str) -> Self {
        Self { keys, description }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HelpEvent {
    Close,
}

/// Centered popup listing the active keybindings.
pub struct HelpOverlay {
    close_keys: Vec<GlobalAction>,
    resolver: std::sync::Arc<KeyResolver>,
    entries: Vec<Keybinding>,
}

impl HelpOverlay {
    pub fn new(resolver: std::sync::Arc<KeyResolver>) -> Self {
        let entries = vec![
            Keybinding::new(resolver.display_nav(NavAction::Up), "Move up"),
            Keybinding::new(resolver.display_nav(NavAction::Down), "Move down"),
            Keybinding::new(resolver.display_nav(NavAction::Home), "First row"),
            Keybinding::new(resolver.display_nav(NavAction::End), "Last row"),
            Keybinding::new(resolver.display_nav(NavAction::NextSection), "Next section"),
            Keybinding::new(resolver.display_nav(NavAction::Select), "Select row"),
            Keybinding::new("click".to_string(), "Select row under cursor"),
            Keybinding::new(resolver.display_global(GlobalAction::Help), "Toggle help"),
            Keybinding::new(resolver.display_global(GlobalAction::Suspend), "Suspend"),
            Keybinding::new(resolver.display_global(GlobalAction::Quit), "Quit"),
        ];
        Self {
            close_keys: vec![GlobalAction::Help, GlobalAction::Back],
            resolver,
            entries,
        }
    }
}

impl Modal for HelpOverlay {
    type Msg = HelpEvent;

    fn handle_key(&mut self, key: KeyEvent) -> Result<Handled<Self::Msg>> {
        let close = self
            .close_keys
            .iter()
            .any(|action| self.resolver.matches_global(&key, *action));
        Ok(if close {
            HelpEvent::Close.into()
        } else {
            Handled::Consumed
        })
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, theme: &Theme) {
        let height = u16::try_from(self.entries.len())
            .unwrap_or(u16::MAX)
            .saturating_add(2);
        let popup_area = area.centered(Constraint::Percentage(60), Constraint::Length(height));

        frame.render_widget(Clear, popup_area);

        let key_style = Style::default()
            .fg(theme.header())
            .add_modifier(Modifier::BOLD);
        let desc_style = Style::default().fg(theme.text());

        let lines: Vec<Line> = self
            .entries
            .iter()
            .map(|kb| {
                Line::from(vec![
                    Span::styled(format!("{:>14}", kb.keys), key_style),
                    Span::raw("  "),
                    Span::styled(kb.description, desc_style),
                ])
            })
            .collect();

        let title = format!(" {} ", self.title().unwrap_or_default());
        let block = Block::default()
            .title(title)
            .title_style(
                Style::default()
                    .fg(theme.mauve())
                    .add_modifier(Modifier::BOLD),
            )
            .borders(Borders::ALL)
            .border_type(theme.border_type)
            .border_style(Style::default().fg(theme.border_focused()))
            .style(Style::default().bg(theme.base()));

        frame.render_widget(Paragraph::new(lines).block(block), popup_area);
    }

    fn title(&self) -> Option<&str> {
        Some("Help")
    }
}
