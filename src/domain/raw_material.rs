use serde::Serialize;

use super::Cents;

pub type RawMaterialId = i64;

/// An ingredient bought in by the kitchen, priced per unit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RawMaterial {
    pub id: RawMaterialId,
    pub name: String,
    pub price_cents: Cents,
}

impl RawMaterial {
    pub fn new(id: RawMaterialId, name: impl Into<String>, price_cents: Cents) -> Self {
        Self {
            id,
            name: name.into(),
            price_cents,
        }
    }
}
