use crate::core::{Product, StorefrontSettings};
use crate::utils::error::{Result, ShopError};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Ordered list of every product the storefront knows about.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Catalog {
    #[serde(default)]
    products: Vec<Product>,
}

impl Catalog {
    pub fn new(products: Vec<Product>) -> Self {
        Self { products }
    }

    /// The fixed three-item demo catalog.
    pub fn demo() -> Self {
        Self::new(vec![
            Product::new("P001", "Pulsera artesanal", 120.0),
            Product::new("P002", "Playera local", 250.0),
            Product::new("P003", "Taza ShopNest", 99.0),
        ])
    }

    /// Loads a catalog from a TOML file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(ShopError::IoError)?;
        Self::from_toml_str(&content)
    }

    /// Expects one `[[products]]` table per entry with `id`, `name` and `price`.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let catalog: Catalog =
            toml::from_str(content).map_err(|e| ShopError::CatalogParseError {
                message: e.to_string(),
            })?;

        tracing::debug!("Parsed catalog with {} products", catalog.len());
        Ok(catalog)
    }

    /// Catalog file from the settings when one is configured, otherwise the demo data.
    pub fn from_settings<T: StorefrontSettings + ?Sized>(settings: &T) -> Result<Self> {
        match settings.catalog_path() {
            Some(path) => {
                tracing::info!("📁 Loading catalog from: {}", path);
                Self::from_file(path)
            }
            None => Ok(Self::demo()),
        }
    }

    /// Linear scan, first exact match wins.
    pub fn find_by_id(&self, id: &str) -> Option<&Product> {
        self.products.iter().find(|p| p.id() == id)
    }

    pub fn first(&self) -> Option<&Product> {
        self.products.first()
    }

    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}
