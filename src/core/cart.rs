use crate::core::Product;
use std::fmt;

/// Products picked for purchase. Borrows from the catalog; keeps insertion
/// order and allows the same product more than once.
#[derive(Debug, Clone, Default)]
pub struct Cart<'a> {
    items: Vec<&'a Product>,
}

impl<'a> Cart<'a> {
    pub fn new() -> Self {
        Self { items: Vec::new() }
    }

    pub fn add(&mut self, product: &'a Product) {
        tracing::debug!("Adding {} to cart", product.id());
        self.items.push(product);
    }

    pub fn total(&self) -> f64 {
        self.items.iter().map(|p| p.price()).sum()
    }

    pub fn items(&self) -> &[&'a Product] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl fmt::Display for Cart<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (i, product) in self.items.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", product)?;
        }
        write!(f, "]")
    }
}
