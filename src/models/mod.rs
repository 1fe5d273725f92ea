//! Core data models for the Demurrage Engine.
//!
//! This module contains all the domain models used throughout the engine.

mod charge;
mod container;
mod day_count;
mod storage_period;

pub use charge::{ChargeLine, DemurrageCharge};
pub use container::{ContainerSize, ContainerType};
pub use day_count::DayPolicy;
pub use storage_period::{STORAGE_DATE_FORMAT, StoragePeriod, parse_storage_date};
