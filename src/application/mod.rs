// Application layer - the ledger service and its read models.
// Everything lives in memory; callers own the Ledger exclusively.

pub mod error;
pub mod reporting;
pub mod service;

pub use error::*;
pub use reporting::*;
pub use service::*;
