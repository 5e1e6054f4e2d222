//! Movement (movimiento) kinds
//!
//! A movement is an immutable ledger entry for one inbound purchase or
//! outbound sale. Kinds map to the receipt titles the document renderer
//! prints.

use serde::{Deserialize, Serialize};

/// Direction of a stock movement
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MovementKind {
    Inbound,
    Outbound,
}

impl MovementKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            MovementKind::Inbound => "inbound",
            MovementKind::Outbound => "outbound",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "inbound" => Some(MovementKind::Inbound),
            "outbound" => Some(MovementKind::Outbound),
            _ => None,
        }
    }

    /// Title printed on the exported receipt document
    pub fn receipt_title(&self) -> &'static str {
        match self {
            MovementKind::Inbound => "NOTA DE ENTRADA",
            MovementKind::Outbound => "NOTA DE SALIDA",
        }
    }
}

/// Detail text for an inbound movement, e.g. `"Lote L-001"`
pub fn inbound_detail(lot_code: &str) -> String {
    format!("Lote {}", lot_code)
}
