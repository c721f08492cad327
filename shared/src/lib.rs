//! Shared domain logic for the plastics production tracking system
//!
//! This crate contains the pure computation core: unit conversion for roll
//! and cut goods, consumption derivation ratios, the stock aggregator and
//! the raw-material balance calculator. Nothing here touches the database;
//! the backend projects its stored records into the event types defined
//! here and calls the pure functions.

pub mod balance;
pub mod consumption;
pub mod conversion;
pub mod stock;
pub mod types;
pub mod validation;

pub use balance::*;
pub use consumption::*;
pub use conversion::*;
pub use stock::*;
pub use types::*;
pub use validation::*;
