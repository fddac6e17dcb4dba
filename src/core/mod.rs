pub mod cart;
pub mod catalog;
pub mod order;
pub mod storefront;

pub use crate::domain::model::{format_price, CheckoutReport, Product};
pub use crate::domain::ports::{Clock, ProductSource, StorefrontSettings};
pub use crate::utils::error::Result;
pub use cart::Cart;
pub use catalog::Catalog;
pub use order::Order;
