pub mod adapters;
#[cfg(feature = "cli")]
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use crate::config::CliConfig;

pub use crate::adapters::{ApiClient, FixedClock, SystemClock};
pub use crate::core::{storefront::Storefront, Cart, Catalog, CheckoutReport, Order, Product};
pub use crate::utils::error::{Result, ShopError};
