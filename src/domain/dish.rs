use serde::Serialize;

use super::Cents;

pub type DishId = i64;

/// A menu item. Names are unique across the menu, which the ledger enforces.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Dish {
    pub id: DishId,
    pub name: String,
    pub price_cents: Cents,
}

impl Dish {
    pub fn new(id: DishId, name: impl Into<String>, price_cents: Cents) -> Self {
        Self {
            id,
            name: name.into(),
            price_cents,
        }
    }
}
