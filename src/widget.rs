mod help_overlay;

pub use help_overlay::{HelpEvent, HelpOverlay};
