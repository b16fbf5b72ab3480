//! Reusable UI components for the TUI.
//!
//! Components are interactive UI building blocks that handle input events and
//! emit generic outputs:
//! - [`Cell`] - Pure renderer for one model
//! - [`SelectableRow`] - Cell plus checkmark and tap handling
//! - [`Section`] - Titled rows sharing one selection slot
//! - [`NavigationView`] - Titled chrome around a screen

pub mod cell;
mod navigation;
pub mod section;
pub mod selectable_row;

pub use cell::{Cell, FruitCell, SandwichCell};
pub use navigation::NavigationView;
pub use section::{Section, Tapped};
pub use selectable_row::SelectableRow;
