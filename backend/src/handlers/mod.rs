//! HTTP handlers for the plastics production tracking platform

pub mod auth;
pub mod consumption;
pub mod currency;
pub mod cut_product;
pub mod health;
pub mod production;
pub mod raw_material;
pub mod shipment;
pub mod stock;

pub use auth::*;
pub use consumption::*;
pub use currency::*;
pub use cut_product::*;
pub use health::*;
pub use production::*;
pub use raw_material::*;
pub use shipment::*;
pub use stock::*;
