//! Promotion selector
//!
//! Pure functions over a membership snapshot. Flattens the company's
//! services into a promotion list and cross-references the usage ledger.
//! The `is_used` flag is a client-side convenience; the server remains
//! the authority on redemption uniqueness.

use shared::models::Membership;

/// Promotion tagged with its parent service and usage state
#[derive(Debug, Clone, PartialEq)]
pub struct ExtendedPromotion {
    pub id: i64,
    pub description: String,
    pub name: Option<String>,
    pub discount: Option<String>,
    pub service_id: i64,
    pub service_name: String,
    pub is_used: bool,
}

impl ExtendedPromotion {
    /// Display label: name when present, description otherwise
    pub fn display_name(&self) -> &str {
        self.name.as_deref().unwrap_or(&self.description)
    }

    /// Whether the promotion can still be selected
    pub fn is_selectable(&self) -> bool {
        !self.is_used
    }
}

/// List the promotions of a membership's company, tagging each with its
/// service and usage state
pub fn list_promotions(membership: &Membership) -> Vec<ExtendedPromotion> {
    let Some(company) = &membership.company_info else {
        return Vec::new();
    };

    company
        .services
        .iter()
        .flat_map(|service| {
            service.promotions.iter().map(|promotion| ExtendedPromotion {
                id: promotion.id,
                description: promotion.description.clone(),
                name: promotion.name.clone(),
                discount: promotion.discount.clone(),
                service_id: service.id,
                service_name: service.description.clone(),
                is_used: is_promotion_used(membership, promotion.id),
            })
        })
        .collect()
}

/// Check the usage ledger for a redeemed entry matching this promotion
fn is_promotion_used(membership: &Membership, promotion_id: i64) -> bool {
    membership
        .keys_used_companies
        .iter()
        .any(|k| k.promotion_id == promotion_id && k.is_used)
}
