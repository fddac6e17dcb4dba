use serde::{Deserialize, Serialize};
use std::fmt;

/// Renders a price with the shortest decimal that round-trips, keeping a
/// fractional part for integral values (`370.0`, `99.5`).
pub fn format_price(value: f64) -> String {
    format!("{:?}", value)
}

/// A catalog entry. Values are stored verbatim, nothing is validated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    id: String,
    name: String,
    price: f64,
}

impl Product {
    pub fn new(id: impl Into<String>, name: impl Into<String>, price: f64) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            price,
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn price(&self) -> f64 {
        self.price
    }
}

impl fmt::Display for Product {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (${})", self.name, format_price(self.price))
    }
}

/// Outcome of one storefront run.
#[derive(Debug, Clone, PartialEq)]
pub struct CheckoutReport {
    pub cart_total: f64,
    pub order_total: f64,
    pub order_lines: usize,
    /// `Err` holds the rendered network failure message.
    pub api_outcome: std::result::Result<String, String>,
}
