//! Domain models and pure domain logic

pub mod batch;
pub mod contact;
pub mod movement;
pub mod product;

pub use batch::*;
pub use contact::*;
pub use movement::*;
pub use product::*;
