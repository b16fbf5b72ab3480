//! Domain models for the menu.
//!
//! This module contains the value types shown on the menu screen:
//! - [`FruitModel`] - A free fruit, identified by name and color
//! - [`SandwichModel`] - A sandwich with ingredients and a price
//! - [`SelectionSlot`] - Holds at most one selected model of one type

pub mod fruit;
pub mod sandwich;
pub mod selection;

pub use fruit::FruitModel;
pub use sandwich::SandwichModel;
pub use selection::SelectionSlot;

/// The fruits offered on the menu, in display order.
pub fn fruit_fixtures() -> Vec<FruitModel> {
    vec![
        FruitModel::new("Apple", "Red"),
        FruitModel::new("Apple", "Green"),
        FruitModel::new("Lemon", "Yellow"),
    ]
}

/// The sandwiches offered on the menu, in display order.
pub fn sandwich_fixtures() -> Vec<SandwichModel> {
    vec![
        SandwichModel::new(
            "Club Sandwich",
            ["White bread", "Chicken", "Lettuce", "Mayonnaise"],
            7.50,
        ),
        SandwichModel::new(
            "Ham/Cheese Toastie",
            ["White bread", "Ham", "Cheese", "Mustard"],
            6.00,
        ),
    ]
}
