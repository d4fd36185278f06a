//! Domain models for the clinic front desk.

mod registration;
mod visit;

pub use registration::*;
pub use visit::*;
