//! Payment method selection
//!
//! Advisory only: the selection is shown at the counter but never sent
//! with the redemption request. The server charges nothing either way.

use serde::{Deserialize, Serialize};

/// How the customer intends to pay at the counter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PaymentMethod {
    Cash,
    MercadoPago,
}

impl PaymentMethod {
    /// User-facing label
    pub fn label(&self) -> &'static str {
        match self {
            PaymentMethod::Cash => "Efectivo",
            PaymentMethod::MercadoPago => "Mercado Pago",
        }
    }
}

impl std::fmt::Display for PaymentMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serde_snake_case() {
        assert_eq!(
            serde_json::to_string(&PaymentMethod::MercadoPago).unwrap(),
            "\"mercado_pago\""
        );
        let parsed: PaymentMethod = serde_json::from_str("\"cash\"").unwrap();
        assert_eq!(parsed, PaymentMethod::Cash);
    }

    #[test]
    fn test_labels() {
        assert_eq!(PaymentMethod::Cash.to_string(), "Efectivo");
        assert_eq!(PaymentMethod::MercadoPago.label(), "Mercado Pago");
    }
}
