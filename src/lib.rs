pub mod application;
pub mod cli;
pub mod domain;
pub mod logging;

pub use application::{Ledger, LedgerError, LedgerSummary};
pub use domain::*;
