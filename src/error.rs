//! Error types for the Demurrage Engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for all error conditions that can occur while loading a tariff or
//! validating caller input.

use chrono::NaiveDate;
use thiserror::Error;

use crate::models::{ContainerSize, ContainerType};

/// The main error type for the Demurrage Engine.
///
/// The charge calculation itself never fails; every variant here is raised
/// either while building a tariff or while validating input at the HTTP or
/// prompt boundary.
///
/// # Example
///
/// ```
/// use demurrage_engine::error::EngineError;
///
/// let error = EngineError::ConfigNotFound {
///     path: "/missing/tariff.yaml".to_string(),
/// };
/// assert_eq!(error.to_string(), "Configuration file not found: /missing/tariff.yaml");
/// ```
#[derive(Debug, Error)]
pub enum EngineError {
    /// Configuration file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration file could not be parsed.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// A tariff was structurally invalid (bad tiers, rates or ordering).
    #[error("Invalid tariff for {container_type}/{container_size}: {message}")]
    InvalidTariff {
        /// The container type whose schedule is invalid.
        container_type: ContainerType,
        /// The container size whose schedule is invalid.
        container_size: ContainerSize,
        /// A description of the problem.
        message: String,
    },

    /// The tariff has no free-day allowance for a container type.
    #[error("Free days not defined for container type {container_type}")]
    FreeDaysNotFound {
        /// The container type missing from the free-day table.
        container_type: ContainerType,
    },

    /// The tariff has no rate schedule for a container type and size.
    #[error("Rate schedule not defined for {container_type}/{container_size}")]
    ScheduleNotFound {
        /// The container type.
        container_type: ContainerType,
        /// The container size.
        container_size: ContainerSize,
    },

    /// A day count supplied by the caller was rejected.
    #[error("{message}")]
    InvalidDays {
        /// The rejected day count.
        days: i64,
        /// Why the day count was rejected.
        message: String,
    },

    /// A date string could not be parsed.
    #[error("Invalid date '{input}': expected DD/MM/YYYY")]
    InvalidDate {
        /// The text that failed to parse.
        input: String,
    },

    /// A storage period ended before it started.
    #[error("End date {end_date} is before start date {start_date}")]
    InvalidStoragePeriod {
        /// The first day of storage.
        start_date: NaiveDate,
        /// The last day of storage.
        end_date: NaiveDate,
    },

    /// A container type name was not recognized.
    #[error("Unknown container type: {value}")]
    UnknownContainerType {
        /// The unrecognized value.
        value: String,
    },

    /// A container size was not recognized.
    #[error("Unknown container size: {value}")]
    UnknownContainerSize {
        /// The unrecognized value.
        value: String,
    },
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;
