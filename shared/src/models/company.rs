//! Company Model
//!
//! A company offers services, and each service carries the promotions
//! that a membership key can be redeemed against.

use serde::{Deserialize, Serialize};

/// Company entity (commerce adhered to the program)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Company {
    pub id: i64,
    pub name: String,
    pub short_description: Option<String>,
    pub long_description: Option<String>,
    #[serde(default)]
    pub with_reservation: bool,
    #[serde(default)]
    pub with_delivery: bool,
    #[serde(default)]
    pub services: Vec<Service>,
}

/// Service offered by a company
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Service {
    pub id: i64,
    pub description: String,
    pub company_id: i64,
    #[serde(default)]
    pub promotions: Vec<Promotion>,
}

/// Promotion attached to a service
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Promotion {
    pub id: i64,
    pub description: String,
    pub service_id: i64,
    /// Display name, when the backend provides one
    #[serde(default)]
    pub name: Option<String>,
    /// Discount label (e.g. "20% OFF", "2x1")
    #[serde(default)]
    pub discount: Option<String>,
}

impl Promotion {
    /// Display label: name when present, description otherwise
    pub fn display_name(&self) -> &str {
        self.name.as_deref().unwrap_or(&self.description)
    }
}
