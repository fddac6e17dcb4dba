// Adapters layer: concrete implementations of the domain ports (clock, http).

pub mod clock;
pub mod http;

pub use clock::{FixedClock, SystemClock};
pub use http::{ApiClient, DEFAULT_API_ENDPOINT};
