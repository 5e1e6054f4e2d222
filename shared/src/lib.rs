//! Shared domain logic for Almacén Digital
//!
//! This crate contains the pure inventory domain: batch stock math, FEFO
//! allocation planning, movement kinds, input types, and validation helpers
//! shared between the backend and any future clients.

pub mod models;
pub mod validation;

pub use models::*;
pub use validation::*;
