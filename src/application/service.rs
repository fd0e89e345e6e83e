use std::collections::HashMap;
use std::hash::Hash;

use tracing::{debug, warn};

use crate::domain::{
    Cents, Customer, CustomerId, Dish, DishId, EntityKind, RawMaterial, RawMaterialId,
    total_cents,
};

use super::{LedgerError, LedgerSummary};

/// In-memory back-office ledger for a single restaurant.
/// This is the primary interface for any client (the CLI, tests, embedding hosts).
///
/// Dishes are indexed twice: by id, and by name through `dish_names`. Every
/// operation that touches a dish updates both maps before returning, and every
/// check runs before the first mutation, so a rejected call leaves the ledger
/// exactly as it was.
#[derive(Debug, Default)]
pub struct Ledger {
    raw_materials: HashMap<RawMaterialId, RawMaterial>,
    dishes: HashMap<DishId, Dish>,
    dish_names: HashMap<String, DishId>,
    customers: HashMap<CustomerId, Customer>,
}

fn rejected(err: LedgerError) -> LedgerError {
    warn!(error = %err, "ledger operation rejected");
    err
}

fn sorted_by_id<T: Clone, K: Ord + Hash + Copy>(map: &HashMap<K, T>) -> Vec<T> {
    let mut keys: Vec<K> = map.keys().copied().collect();
    keys.sort_unstable();
    keys.iter().map(|k| map[k].clone()).collect()
}

impl Ledger {
    /// Create an empty ledger.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.raw_materials.is_empty() && self.dishes.is_empty() && self.customers.is_empty()
    }

    // ========================
    // Raw material operations
    // ========================

    /// Register a new raw material. Prices are taken as given, negative included.
    pub fn add_raw_material(
        &mut self,
        id: RawMaterialId,
        name: impl Into<String>,
        price_cents: Cents,
    ) -> Result<(), LedgerError> {
        if self.raw_materials.contains_key(&id) {
            return Err(rejected(LedgerError::DuplicateId {
                kind: EntityKind::RawMaterial,
                id,
            }));
        }

        let material = RawMaterial::new(id, name, price_cents);
        debug!(id, name = %material.name, price_cents, "added raw material");
        self.raw_materials.insert(id, material);
        Ok(())
    }

    /// Remove a raw material. Removing an unknown id is a no-op.
    pub fn remove_raw_material(&mut self, id: RawMaterialId) {
        if self.raw_materials.remove(&id).is_some() {
            debug!(id, "removed raw material");
        }
    }

    pub fn modify_raw_material(
        &mut self,
        id: RawMaterialId,
        name: impl Into<String>,
        price_cents: Cents,
    ) -> Result<(), LedgerError> {
        let Some(material) = self.raw_materials.get_mut(&id) else {
            return Err(rejected(LedgerError::NotFound {
                kind: EntityKind::RawMaterial,
                id,
            }));
        };

        material.name = name.into();
        material.price_cents = price_cents;
        debug!(id, name = %material.name, price_cents, "modified raw material");
        Ok(())
    }

    pub fn raw_material(&self, id: RawMaterialId) -> Option<&RawMaterial> {
        self.raw_materials.get(&id)
    }

    /// All raw materials, ordered by id.
    pub fn raw_materials(&self) -> Vec<RawMaterial> {
        sorted_by_id(&self.raw_materials)
    }

    // ========================
    // Dish operations
    // ========================

    /// Put a new dish on the menu. Both the id and the name must be unused.
    pub fn add_dish(
        &mut self,
        id: DishId,
        name: impl Into<String>,
        price_cents: Cents,
    ) -> Result<(), LedgerError> {
        let name = name.into();
        if self.dishes.contains_key(&id) {
            return Err(rejected(LedgerError::DuplicateId {
                kind: EntityKind::Dish,
                id,
            }));
        }
        if self.dish_names.contains_key(&name) {
            return Err(rejected(LedgerError::DuplicateName(name)));
        }

        debug!(id, name = %name, price_cents, "added dish");
        self.dish_names.insert(name.clone(), id);
        self.dishes.insert(id, Dish::new(id, name, price_cents));
        Ok(())
    }

    /// Take a dish off the menu, along with its name index entry.
    /// Removing an unknown id is a no-op.
    pub fn remove_dish(&mut self, id: DishId) {
        if let Some(dish) = self.dishes.remove(&id) {
            self.dish_names.remove(&dish.name);
            debug!(id, name = %dish.name, "removed dish");
        }
    }

    /// Rename and reprice a dish. Keeping the current name is allowed; taking
    /// another dish's name is not.
    pub fn modify_dish(
        &mut self,
        id: DishId,
        name: impl Into<String>,
        price_cents: Cents,
    ) -> Result<(), LedgerError> {
        let name = name.into();
        let Some(dish) = self.dishes.get_mut(&id) else {
            return Err(rejected(LedgerError::NotFound {
                kind: EntityKind::Dish,
                id,
            }));
        };
        if matches!(self.dish_names.get(&name), Some(&owner) if owner != id) {
            return Err(rejected(LedgerError::DuplicateName(name)));
        }

        self.dish_names.remove(&dish.name);
        dish.name = name.clone();
        dish.price_cents = price_cents;
        self.dish_names.insert(name, id);
        debug!(id, name = %dish.name, price_cents, "modified dish");
        Ok(())
    }

    pub fn dish(&self, id: DishId) -> Option<&Dish> {
        self.dishes.get(&id)
    }

    /// Look up a dish through the name index.
    pub fn dish_by_name(&self, name: &str) -> Option<&Dish> {
        self.dish_id_by_name(name).and_then(|id| self.dishes.get(&id))
    }

    pub fn dish_id_by_name(&self, name: &str) -> Option<DishId> {
        self.dish_names.get(name).copied()
    }

    /// All dishes, ordered by id.
    pub fn dishes(&self) -> Vec<Dish> {
        sorted_by_id(&self.dishes)
    }

    // ========================
    // Customer operations
    // ========================

    pub fn add_customer(
        &mut self,
        id: CustomerId,
        name: impl Into<String>,
    ) -> Result<(), LedgerError> {
        if self.customers.contains_key(&id) {
            return Err(rejected(LedgerError::DuplicateId {
                kind: EntityKind::Customer,
                id,
            }));
        }

        let customer = Customer::new(id, name);
        debug!(id, name = %customer.name, "added customer");
        self.customers.insert(id, customer);
        Ok(())
    }

    /// Remove a customer. Removing an unknown id is a no-op.
    pub fn remove_customer(&mut self, id: CustomerId) {
        if self.customers.remove(&id).is_some() {
            debug!(id, "removed customer");
        }
    }

    pub fn modify_customer(
        &mut self,
        id: CustomerId,
        name: impl Into<String>,
    ) -> Result<(), LedgerError> {
        let Some(customer) = self.customers.get_mut(&id) else {
            return Err(rejected(LedgerError::NotFound {
                kind: EntityKind::Customer,
                id,
            }));
        };

        customer.name = name.into();
        debug!(id, name = %customer.name, "modified customer");
        Ok(())
    }

    pub fn customer(&self, id: CustomerId) -> Option<&Customer> {
        self.customers.get(&id)
    }

    /// All customers, ordered by id.
    pub fn customers(&self) -> Vec<Customer> {
        sorted_by_id(&self.customers)
    }

    // ========================
    // Aggregates
    // ========================

    /// Price an order given as a list of dish ids. A dish ordered twice is
    /// charged twice. Any unknown id fails the whole order.
    pub fn calculate_total_fee(&self, dish_ids: &[DishId]) -> Result<Cents, LedgerError> {
        let prices = dish_ids
            .iter()
            .map(|&id| {
                self.dishes
                    .get(&id)
                    .map(|dish| dish.price_cents)
                    .ok_or(LedgerError::NotFound {
                        kind: EntityKind::Dish,
                        id,
                    })
            })
            .collect::<Result<Vec<Cents>, LedgerError>>()
            .map_err(rejected)?;
        let total = total_cents(prices)
            .ok_or_else(|| rejected(LedgerError::AmountOverflow("total fee")))?;

        debug!(items = dish_ids.len(), total, "calculated total fee");
        Ok(total)
    }

    /// Sum of every dish price minus sum of every raw material price.
    pub fn calculate_gross_profit(&self) -> Result<Cents, LedgerError> {
        let menu_total = self.menu_total()?;
        let material_cost = self.material_cost()?;
        gross_profit(menu_total, material_cost)
    }

    fn menu_total(&self) -> Result<Cents, LedgerError> {
        total_cents(self.dishes.values().map(|d| d.price_cents))
            .ok_or_else(|| rejected(LedgerError::AmountOverflow("menu total")))
    }

    fn material_cost(&self) -> Result<Cents, LedgerError> {
        total_cents(self.raw_materials.values().map(|m| m.price_cents))
            .ok_or_else(|| rejected(LedgerError::AmountOverflow("material cost")))
    }

    /// Snapshot counts and totals.
    pub fn summary(&self) -> Result<LedgerSummary, LedgerError> {
        let menu_total = self.menu_total()?;
        let material_cost = self.material_cost()?;
        Ok(LedgerSummary {
            raw_material_count: self.raw_materials.len(),
            dish_count: self.dishes.len(),
            customer_count: self.customers.len(),
            menu_total,
            material_cost,
            gross_profit: gross_profit(menu_total, material_cost)?,
        })
    }
}

fn gross_profit(menu_total: Cents, material_cost: Cents) -> Result<Cents, LedgerError> {
    menu_total
        .checked_sub(material_cost)
        .ok_or_else(|| rejected(LedgerError::AmountOverflow("gross profit")))
}
