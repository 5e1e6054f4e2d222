//! Contact (cliente / proveedor) inputs

use serde::{Deserialize, Serialize};
use validator::Validate;

/// Input for creating or replacing a client or supplier record
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct ContactInput {
    #[validate(length(min = 1, max = 100, message = "Name must be 1-100 characters"))]
    pub name: String,
    /// DNI or RUC for clients, RUC for suppliers
    #[validate(length(max = 20))]
    pub tax_id: Option<String>,
    #[validate(length(max = 20))]
    pub phone: Option<String>,
}

/// Partial update for a contact record. `None` means "keep the stored
/// value", so `tax_id` and `phone` cannot be cleared through an update.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct UpdateContactInput {
    #[validate(length(min = 1, max = 100, message = "Name must be 1-100 characters"))]
    pub name: Option<String>,
    #[validate(length(max = 20))]
    pub tax_id: Option<String>,
    #[validate(length(max = 20))]
    pub phone: Option<String>,
}
