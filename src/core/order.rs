use crate::core::{format_price, Clock, Product};
use chrono::NaiveDateTime;

const SUMMARY_TITLE: &str = "=== RESUMEN PEDIDO ShopNest ===";
const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Snapshot of a product list. Timestamp and total are taken once, at
/// construction, and never change afterwards.
#[derive(Debug, Clone)]
pub struct Order<'a> {
    products: Vec<&'a Product>,
    created_at: NaiveDateTime,
    total: f64,
}

impl<'a> Order<'a> {
    pub fn new<C: Clock + ?Sized>(products: &[&'a Product], clock: &C) -> Self {
        let products = products.to_vec();
        let total = products.iter().map(|p| p.price()).sum();
        let created_at = clock.now();

        tracing::debug!(
            "Order created at {} with {} products, total {}",
            created_at.format(TIMESTAMP_FORMAT),
            products.len(),
            total
        );

        Self {
            products,
            created_at,
            total,
        }
    }

    pub fn products(&self) -> &[&'a Product] {
        &self.products
    }

    pub fn created_at(&self) -> NaiveDateTime {
        self.created_at
    }

    pub fn total(&self) -> f64 {
        self.total
    }

    pub fn summary(&self) -> String {
        let mut lines = vec![
            SUMMARY_TITLE.to_string(),
            format!("Fecha/Hora: {}", self.created_at.format(TIMESTAMP_FORMAT)),
            "Productos:".to_string(),
        ];

        for product in &self.products {
            lines.push(format!(
                " - {} ${}",
                product.name(),
                format_price(product.price())
            ));
        }

        lines.push(format!("TOTAL: ${}", format_price(self.total)));

        let mut summary = lines.join("\n");
        summary.push('\n');
        summary
    }
}
