// Allow dead_code because these helpers are used across different test files
// which are compiled separately
#![allow(dead_code)]

use anyhow::Result;
use bistro::Ledger;

/// Test fixture: the standard demo kitchen
pub struct StandardMenu;

impl StandardMenu {
    /// Tomato @ 0.50, Cheese @ 1.50
    pub fn add_raw_materials(ledger: &mut Ledger) -> Result<()> {
        ledger.add_raw_material(1, "Tomato", 50)?;
        ledger.add_raw_material(2, "Cheese", 150)?;
        Ok(())
    }

    /// Pizza @ 10.00, Salad @ 5.00
    pub fn add_dishes(ledger: &mut Ledger) -> Result<()> {
        ledger.add_dish(1, "Pizza", 1000)?;
        ledger.add_dish(2, "Salad", 500)?;
        Ok(())
    }

    pub fn add_customers(ledger: &mut Ledger) -> Result<()> {
        ledger.add_customer(1, "Alice")?;
        ledger.add_customer(2, "Bob")?;
        Ok(())
    }

    /// Full ledger: raw materials, dishes and customers
    pub fn create() -> Result<Ledger> {
        let mut ledger = Ledger::new();
        Self::add_raw_materials(&mut ledger)?;
        Self::add_dishes(&mut ledger)?;
        Self::add_customers(&mut ledger)?;
        Ok(ledger)
    }
}
