//! HTTP handlers for Almacén Digital

pub mod contacts;
pub mod dashboard;
pub mod health;
pub mod movements;
pub mod products;
pub mod profile;
pub mod reports;

pub use contacts::*;
pub use dashboard::*;
pub use health::*;
pub use movements::*;
pub use products::*;
pub use profile::*;
pub use reports::*;
