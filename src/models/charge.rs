//! Charge result models for the Demurrage Engine.
//!
//! This module contains the [`DemurrageCharge`] type returned by the
//! calculator and the [`ChargeLine`] entries that itemize it.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::{ContainerSize, ContainerType};

/// A single itemized charge for one rate tier.
///
/// Lines are kept in tier order and carry the tier index, so two tiers that
/// share a period name remain separate entries.
///
/// # Example
///
/// ```
/// use demurrage_engine::models::ChargeLine;
/// use rust_decimal::Decimal;
///
/// let line = ChargeLine {
///     tier: 0,
///     period_name: "Initial Storage Period".to_string(),
///     from_day: 11,
///     to_day: 20,
///     days: 10,
///     rate: Decimal::from(3),
///     charge: Decimal::from(30),
/// };
/// assert_eq!(line.charge, line.rate * Decimal::from(line.days));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChargeLine {
    /// Zero-based index of the tier within its rate schedule.
    pub tier: usize,
    /// Human-readable name of the storage period.
    pub period_name: String,
    /// First chargeable day covered by this line (1-based, inclusive).
    pub from_day: u32,
    /// Last chargeable day covered by this line (inclusive).
    pub to_day: u32,
    /// Number of chargeable days in this tier.
    pub days: u32,
    /// Charge per day for this tier.
    #[serde(with = "rust_decimal::serde::float")]
    pub rate: Decimal,
    /// Subtotal for this tier (days * rate).
    #[serde(with = "rust_decimal::serde::float")]
    pub charge: Decimal,
}

/// The complete result of a demurrage calculation.
///
/// # Example
///
/// ```
/// use demurrage_engine::models::{ContainerSize, ContainerType, DemurrageCharge};
/// use rust_decimal::Decimal;
///
/// let result = DemurrageCharge {
///     container_type: ContainerType::Imco,
///     container_size: ContainerSize::Twenty,
///     days: 4,
///     free_days: 4,
///     total_charge: Decimal::ZERO,
///     breakdown: vec![],
/// };
/// assert!(result.is_free());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DemurrageCharge {
    /// The container type that was priced.
    pub container_type: ContainerType,
    /// The container size that was priced.
    pub container_size: ContainerSize,
    /// Total elapsed storage days.
    pub days: u32,
    /// Free-day allowance applied for the container type.
    pub free_days: u32,
    /// Sum of all breakdown charges.
    #[serde(with = "rust_decimal::serde::float")]
    pub total_charge: Decimal,
    /// Itemized charges, ascending by tier.
    pub breakdown: Vec<ChargeLine>,
}

impl DemurrageCharge {
    /// Returns true when the whole stay fell within the free-day allowance.
    pub fn is_free(&self) -> bool {
        self.breakdown.is_empty()
    }

    /// Total number of days that attracted a charge.
    pub fn chargeable_days(&self) -> u32 {
        self.breakdown.iter().map(|line| line.days).sum()
    }
}
