use std::fmt;

/// A fruit on the menu.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FruitModel {
    pub name: String,
    pub color: String,
}

impl FruitModel {
    pub fn new(name: impl Into<String>, color: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            color: color.into(),
        }
    }
}

impl fmt::Display for FruitModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name, self.color)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_equality_uses_every_field() {
        let red = FruitModel::new("Apple", "Red");
        assert_eq!(red, FruitModel::new("Apple", "Red"));
        assert_ne!(red, FruitModel::new("Apple", "Green"));
        assert_ne!(red, FruitModel::new("Cherry", "Red"));
    }

    #[test]
    fn test_display() {
        assert_eq!(FruitModel::new("Lemon", "Yellow").to_string(), "Lemon (Yellow)");
    }
}
