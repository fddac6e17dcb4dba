use crate::core::{format_price, Cart, Catalog, CheckoutReport, Clock, Order, ProductSource};
use crate::utils::error::Result;
use std::io::Write;

pub const DEFAULT_SEARCH_ID: &str = "P002";

/// Runs the storefront script: search, fill the cart, snapshot an order,
/// then call the product API once.
pub struct Storefront<S: ProductSource, C: Clock> {
    source: S,
    clock: C,
    search_id: String,
}

impl<S: ProductSource, C: Clock> Storefront<S, C> {
    pub fn new(source: S, clock: C) -> Self {
        Self::with_search_id(source, clock, DEFAULT_SEARCH_ID)
    }

    pub fn with_search_id(source: S, clock: C, search_id: impl Into<String>) -> Self {
        Self {
            source,
            clock,
            search_id: search_id.into(),
        }
    }

    /// Writes every user-facing line to `out`. A failed API call is printed
    /// and swallowed; only write errors end the run early.
    pub async fn run<W: Write>(&self, catalog: &Catalog, out: &mut W) -> Result<CheckoutReport> {
        tracing::info!("Starting storefront with {} catalog products", catalog.len());

        let found = catalog.find_by_id(&self.search_id);
        match found {
            Some(product) => tracing::debug!("Search '{}' matched {}", self.search_id, product),
            None => tracing::info!("Search '{}' found no product", self.search_id),
        }

        let mut cart = Cart::new();
        if let Some(product) = found {
            cart.add(product);
        }
        match catalog.first() {
            Some(first) => cart.add(first),
            None => tracing::warn!("Catalog is empty, nothing else to add to the cart"),
        }

        writeln!(out, "Carrito actual: {}", cart)?;
        writeln!(out, "Total carrito: ${}", format_price(cart.total()))?;

        let order = Order::new(cart.items(), &self.clock);
        writeln!(out, "{}", order.summary())?;

        let api_outcome = match self.source.fetch_sample_product().await {
            Ok(result) => {
                tracing::info!("✅ Demo API call succeeded");
                writeln!(out, "Integración API (demo): {}", result)?;
                Ok(result)
            }
            Err(e) => {
                tracing::warn!(
                    "❌ Demo API call failed: {} (Category: {:?})",
                    e,
                    e.category()
                );
                tracing::debug!("💡 {}", e.recovery_suggestion());
                writeln!(
                    out,
                    "No se pudo llamar a la API (posible falta de red). Detalle: {}",
                    e
                )?;
                Err(e.to_string())
            }
        };

        Ok(CheckoutReport {
            cart_total: cart.total(),
            order_total: order.total(),
            order_lines: order.products().len(),
            api_outcome,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::clock::FixedClock;
    use crate::core::Product;
    use crate::utils::error::ShopError;
    use async_trait::async_trait;
    use chrono::NaiveDate;

    struct StubSource {
        reply: std::result::Result<String, String>,
    }

    #[async_trait]
    impl ProductSource for StubSource {
        async fn fetch_sample_product(&self) -> Result<String> {
            match &self.reply {
                Ok(text) => Ok(text.clone()),
                Err(message) => Err(ShopError::IoError(std::io::Error::new(
                    std::io::ErrorKind::ConnectionRefused,
                    message.clone(),
                ))),
            }
        }
    }

    fn clock() -> FixedClock {
        FixedClock::new(
            NaiveDate::from_ymd_opt(2025, 1, 31)
                .unwrap()
                .and_hms_opt(18, 45, 0)
                .unwrap(),
        )
    }

    fn run_to_string<S: ProductSource>(
        storefront: &Storefront<S, FixedClock>,
        catalog: &Catalog,
    ) -> (CheckoutReport, String) {
        let mut out = Vec::new();
        let report = tokio_test::block_on(storefront.run(catalog, &mut out)).unwrap();
        (report, String::from_utf8(out).unwrap())
    }

    #[test]
    fn test_demo_run_output() {
        let source = StubSource {
            reply: Ok("HTTP 200 | Body (primeros 120 chars): {}...".to_string()),
        };
        let storefront = Storefront::new(source, clock());

        let (report, output) = run_to_string(&storefront, &Catalog::demo());

        assert_eq!(
            output,
            "Carrito actual: [Playera local ($250.0), Pulsera artesanal ($120.0)]\n\
             Total carrito: $370.0\n\
             === RESUMEN PEDIDO ShopNest ===\n\
             Fecha/Hora: 2025-01-31 18:45:00\n\
             Productos:\n\
             \x20- Playera local $250.0\n\
             \x20- Pulsera artesanal $120.0\n\
             TOTAL: $370.0\n\
             \n\
             Integración API (demo): HTTP 200 | Body (primeros 120 chars): {}...\n"
        );
        assert_eq!(report.cart_total, 370.0);
        assert_eq!(report.order_total, 370.0);
        assert_eq!(report.order_lines, 2);
        assert!(report.api_outcome.is_ok());
    }

    #[test]
    fn test_api_failure_is_reported_not_fatal() {
        let source = StubSource {
            reply: Err("connection refused".to_string()),
        };
        let storefront = Storefront::new(source, clock());

        let (report, output) = run_to_string(&storefront, &Catalog::demo());

        assert!(output.ends_with(
            "No se pudo llamar a la API (posible falta de red). Detalle: IO error: connection refused\n"
        ));
        assert!(!output.contains("Integración API"));
        assert_eq!(report.api_outcome, Err("IO error: connection refused".to_string()));
        assert_eq!(report.order_total, 370.0);
    }

    #[test]
    fn test_search_miss_only_adds_first_item() {
        let source = StubSource {
            reply: Ok("ok".to_string()),
        };
        let storefront = Storefront::with_search_id(source, clock(), "P404");

        let (report, output) = run_to_string(&storefront, &Catalog::demo());

        assert!(output.starts_with("Carrito actual: [Pulsera artesanal ($120.0)]\n"));
        assert_eq!(report.cart_total, 120.0);
        assert_eq!(report.order_lines, 1);
    }

    #[test]
    fn test_search_for_first_item_adds_it_twice() {
        let source = StubSource {
            reply: Ok("ok".to_string()),
        };
        let storefront = Storefront::with_search_id(source, clock(), "P001");

        let (report, output) = run_to_string(&storefront, &Catalog::demo());

        assert!(output.starts_with(
            "Carrito actual: [Pulsera artesanal ($120.0), Pulsera artesanal ($120.0)]\n"
        ));
        assert_eq!(report.cart_total, 240.0);
        assert_eq!(report.order_lines, 2);
    }

    #[test]
    fn test_empty_catalog_runs_with_empty_cart() {
        let source = StubSource {
            reply: Ok("ok".to_string()),
        };
        let storefront = Storefront::new(source, clock());

        let (report, output) = run_to_string(&storefront, &Catalog::default());

        assert!(output.starts_with("Carrito actual: []\nTotal carrito: $0.0\n"));
        assert!(output.contains("TOTAL: $0.0\n"));
        assert_eq!(report.order_lines, 0);
    }

    #[test]
    fn test_custom_catalog() {
        let catalog = Catalog::new(vec![
            Product::new("C1", "Libreta", 45.25),
            Product::new("P002", "Gorra", 180.0),
        ]);
        let source = StubSource {
            reply: Ok("ok".to_string()),
        };
        let storefront = Storefront::new(source, clock());

        let (report, output) = run_to_string(&storefront, &catalog);

        assert!(output.contains(" - Gorra $180.0\n - Libreta $45.25\n"));
        assert_eq!(report.cart_total, 225.25);
    }
}
