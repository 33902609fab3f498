//! Province Model

use serde::{Deserialize, Serialize};

/// An Argentine province where benefits can be activated
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Province {
    pub id: i64,
    pub description: String,
    /// One-time activation fee in currency unit
    #[serde(default)]
    pub price: f64,
}
