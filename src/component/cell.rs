//! Cell renderers for the menu's model types.

use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};

use crate::Theme;
use crate::model::{FruitModel, SandwichModel};

/// Anything that carries a comparable model and can draw itself.
///
/// Cells are pure: they turn their model into styled lines and do nothing
/// else. Selection and input are handled by the wrapping row.
pub trait Cell {
    type Model: PartialEq + Clone;

    fn model(&self) -> &Self::Model;

    fn lines(&self, theme: &Theme) -> Vec<Line<'static>>;

    /// Number of terminal rows this cell occupies, one per line.
    fn height(&self) -> u16 {
        u16::try_from(self.lines(&Theme::default()).len()).unwrap_or(u16::MAX)
    }
}

fn name_style(theme: &Theme) -> Style {
    Style::default()
        .fg(theme.text())
        .add_modifier(Modifier::BOLD)
}

fn detail_style(theme: &Theme) -> Style {
    Style::default()
        .fg(theme.subtext0())
        .add_modifier(Modifier::ITALIC)
}

pub struct FruitCell {
    model: FruitModel,
}

impl FruitCell {
    pub const fn new(model: FruitModel) -> Self {
        Self { model }
    }
}

impl Cell for FruitCell {
    type Model = FruitModel;

    fn model(&self) -> &FruitModel {
        &self.model
    }

    fn lines(&self, theme: &Theme) -> Vec<Line<'static>> {
        vec![
            Line::from(Span::styled(self.model.name.clone(), name_style(theme))),
            Line::from(Span::styled(self.model.color.clone(), detail_style(theme))),
        ]
    }
}

pub struct SandwichCell {
    model: SandwichModel,
}

impl SandwichCell {
    pub const fn new(model: SandwichModel) -> Self {
        Self { model }
    }
}

impl Cell for SandwichCell {
    type Model = SandwichModel;

    fn model(&self) -> &SandwichModel {
        &self.model
    }

    fn lines(&self, theme: &Theme) -> Vec<Line<'static>> {
        vec![
            Line::from(vec![
                Span::styled(self.model.name.clone(), name_style(theme)),
                Span::raw(" "),
                Span::styled(
                    self.model.formatted_price(),
                    Style::default().fg(theme.peach()),
                ),
            ]),
            Line::from(Span::styled(
                self.model.joined_ingredients(),
                detail_style(theme),
            )),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn plain(line: &Line<'_>) -> String {
        line.spans.iter().map(|s| s.content.as_ref()).collect()
    }

    #[test]
    fn test_fruit_lines() {
        let cell = FruitCell::new(FruitModel::new("Apple", "Green"));
        let lines = cell.lines(&Theme::default());

        assert_eq!(lines.len(), 2);
        assert_eq!(plain(&lines[0]), "Apple");
        assert_eq!(plain(&lines[1]), "Green");
        assert!(lines[1].spans[0].style.add_modifier.contains(Modifier::ITALIC));
    }

    #[test]
    fn test_sandwich_lines() {
        let cell = SandwichCell::new(SandwichModel::new(
            "Ham/Cheese Toastie",
            ["White bread", "Ham", "Cheese", "Mustard"],
            6.0,
        ));
        let lines = cell.lines(&Theme::default());

        assert_eq!(plain(&lines[0]), "Ham/Cheese Toastie $6.00");
        assert_eq!(plain(&lines[1]), "White bread,Ham,Cheese,Mustard");
        assert!(lines[0].spans[0].style.add_modifier.contains(Modifier::BOLD));
    }

    struct ThreeLineCell(FruitModel);

    impl Cell for ThreeLineCell {
        type Model = FruitModel;

        fn model(&self) -> &FruitModel {
            &self.0
        }

        fn lines(&self, _theme: &Theme) -> Vec<Line<'static>> {
            vec![Line::from("a"), Line::from("b"), Line::from("c")]
        }
    }

    #[test]
    fn test_height_follows_line_count() {
        let fruit = FruitCell::new(FruitModel::new("Lemon", "Yellow"));
        assert_eq!(usize::from(fruit.height()), fruit.lines(&Theme::default()).len());

        let tall = ThreeLineCell(FruitModel::new("Lemon", "Yellow"));
        assert_eq!(tall.height(), 3);
    }
}
