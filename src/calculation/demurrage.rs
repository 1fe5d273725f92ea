//! Demurrage charge calculation.
//!
//! Prices a container's stay against its tariff: days up to the free-day
//! allowance cost nothing, every later day is charged at the rate of the
//! tier it falls in.
//!
//! ## Tier arithmetic
//!
//! For a tier `(start, end, rate)` and a stay of `days`:
//! - the tier is skipped, and so is every later tier, once `days <= start`
//! - `effective_end = min(end, days)`
//! - `lower_bound = max(start, free_days)`
//! - `chargeable = effective_end - lower_bound`, charged only when positive
//!
//! A tier fully inside the free period yields no line, but scanning
//! continues since a later tier may still charge.

use rust_decimal::Decimal;

use crate::config::Tariff;
use crate::models::{ChargeLine, ContainerSize, ContainerType, DemurrageCharge};

use super::period_names::period_name;

/// Calculates the demurrage charge for a stay of `days` storage days.
///
/// The calculation never fails: the tariff holds a schedule for every
/// container type and size, and any `days` value is priced.
///
/// # Arguments
///
/// * `container_type` - Selects the free-day allowance and schedule family
/// * `container_size` - Selects the schedule within the family
/// * `days` - Total elapsed storage days
/// * `tariff` - The free-day table and rate schedules
///
/// # Examples
///
/// ## Within the free period
///
/// ```
/// use demurrage_engine::calculation::calculate_demurrage;
/// use demurrage_engine::config::Tariff;
/// use demurrage_engine::models::{ContainerSize, ContainerType};
/// use rust_decimal::Decimal;
///
/// let result = calculate_demurrage(
///     ContainerType::Imco,
///     ContainerSize::Twenty,
///     4,
///     Tariff::standard(),
/// );
/// assert_eq!(result.total_charge, Decimal::ZERO);
/// assert!(result.breakdown.is_empty());
/// ```
///
/// ## Crossing into a second tier
///
/// ```
/// use demurrage_engine::calculation::calculate_demurrage;
/// use demurrage_engine::config::Tariff;
/// use demurrage_engine::models::{ContainerSize, ContainerType};
/// use rust_decimal::Decimal;
///
/// // Days 11-20 at 3, day 21 at 5
/// let result = calculate_demurrage(
///     ContainerType::Full,
///     ContainerSize::Twenty,
///     21,
///     Tariff::standard(),
/// );
/// assert_eq!(result.total_charge, Decimal::from(35));
/// assert_eq!(result.breakdown.len(), 2);
/// assert_eq!(result.breakdown[1].days, 1);
/// ```
pub fn calculate_demurrage(
    container_type: ContainerType,
    container_size: ContainerSize,
    days: u32,
    tariff: &Tariff,
) -> DemurrageCharge {
    let free_days = tariff.free_days(container_type);
    let mut result = DemurrageCharge {
        container_type,
        container_size,
        days,
        free_days,
        total_charge: Decimal::ZERO,
        breakdown: Vec::new(),
    };

    if days <= free_days {
        return result;
    }

    for (tier_index, tier) in tariff
        .schedule(container_type, container_size)
        .tiers()
        .iter()
        .enumerate()
    {
        if days <= tier.start_day {
            break;
        }

        let effective_end = tier.end_day.map_or(days, |end| end.min(days));
        let lower_bound = tier.start_day.max(free_days);
        if effective_end <= lower_bound {
            continue;
        }

        let chargeable_days = effective_end - lower_bound;
        let charge = Decimal::from(chargeable_days) * tier.rate;
        result.total_charge += charge;
        result.breakdown.push(ChargeLine {
            tier: tier_index,
            period_name: period_name(container_type, tier_index).to_string(),
            from_day: lower_bound + 1,
            to_day: effective_end,
            days: chargeable_days,
            rate: tier.rate,
            charge,
        });
    }

    result
}
