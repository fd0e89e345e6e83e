mod customer;
mod dish;
mod entity;
mod money;
mod raw_material;

pub use customer::*;
pub use dish::*;
pub use entity::*;
pub use money::*;
pub use raw_material::*;
