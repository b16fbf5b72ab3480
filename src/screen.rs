//! Full-page screens.

pub mod menu;

pub use menu::{MenuEvent, MenuScreen};
