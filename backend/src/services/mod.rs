//! Business logic services for Almacén Digital

pub mod catalog;
pub mod contacts;
pub mod dashboard;
pub mod movements;
pub mod profile;
pub mod receipts;
pub mod reports;

pub use catalog::CatalogService;
pub use contacts::ContactService;
pub use dashboard::DashboardService;
pub use movements::MovementService;
pub use profile::ProfileService;
pub use receipts::ReceiptService;
pub use reports::ReportService;
