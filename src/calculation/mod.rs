//! Calculation logic for the Demurrage Engine.
//!
//! This module contains the tiered demurrage charge calculation and the
//! naming of storage periods in its breakdown.

mod demurrage;
mod period_names;

pub use demurrage::calculate_demurrage;
pub use period_names::period_name;
