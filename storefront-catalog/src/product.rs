use serde::{Deserialize, Serialize};

/// A sellable catalog entry.
///
/// Products are created up front and borrowed by order items; nothing in an
/// order owns or mutates them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub name: String,
    pub price: f64,
}

impl Product {
    pub fn new(name: impl Into<String>, price: f64) -> Self {
        Self {
            name: name.into(),
            price,
        }
    }

    /// Price of `quantity` units, before any discount.
    pub fn line_total(&self, quantity: u32) -> f64 {
        self.price * f64::from(quantity)
    }
}
