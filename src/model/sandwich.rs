use std::fmt;
use std::hash::{Hash, Hasher};

/// A sandwich on the menu.
///
/// Equality and hashing are structural. The price is compared by its bit
/// pattern so that `Eq` and `Hash` agree with each other.
#[derive(Debug, Clone)]
pub struct SandwichModel {
    pub name: String,
    pub ingredients: Vec<String>,
    pub price: f32,
}

impl SandwichModel {
    pub fn new<I, S>(name: impl Into<String>, ingredients: I, price: f32) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            name: name.into(),
            ingredients: ingredients.into_iter().map(Into::into).collect(),
            price,
        }
    }

    /// Price with a dollar sign and two decimals, e.g. `$7.50`.
    pub fn formatted_price(&self) -> String {
        format!("${:.2}", self.price)
    }

    /// Ingredients joined by commas without spaces.
    pub fn joined_ingredients(&self) -> String {
        self.ingredients.join(",")
    }
}

impl PartialEq for SandwichModel {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
            && self.ingredients == other.ingredients
            && self.price.to_bits() == other.price.to_bits()
    }
}

impl Eq for SandwichModel {}

impl Hash for SandwichModel {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.name.hash(state);
        self.ingredients.hash(state);
        self.price.to_bits().hash(state);
    }
}

impl fmt::Display for SandwichModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.name, self.formatted_price())
    }
}
