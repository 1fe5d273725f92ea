//! Tariff configuration for the Demurrage Engine.
//!
//! This module provides the built-in standard tariff and the functionality
//! to load an equivalent tariff from a YAML file at startup.
//!
//! # Example
//!
//! ```no_run
//! use demurrage_engine::config::ConfigLoader;
//!
//! let config = ConfigLoader::load("./config/tariff.yaml").unwrap();
//! println!("{}", config.to_yaml().unwrap());
//! ```

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::{RateSchedule, RateTier, Tariff, TariffFile};
