//! Tariff types for demurrage pricing.
//!
//! This module contains the rate tier and schedule structures, the YAML
//! file layout they are deserialized from, and the validated [`Tariff`]
//! the calculator reads.

use std::collections::BTreeMap;

use once_cell::sync::Lazy;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};
use crate::models::{ContainerSize, ContainerType};

/// A contiguous range of storage days charged at one daily rate.
///
/// The tier covers days `start_day + 1 ..= end_day`; an `end_day` of
/// `None` means the tier never ends.
///
/// # Example
///
/// ```
/// use demurrage_engine::config::RateTier;
/// use rust_decimal::Decimal;
///
/// let tier = RateTier::new(10, Some(20), Decimal::from(3));
/// assert_eq!(tier.end_day, Some(20));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RateTier {
    /// Day after which the tier begins.
    #[serde(rename = "start")]
    pub start_day: u32,
    /// Last day covered by the tier, or `None` for "and beyond".
    #[serde(rename = "end", default, skip_serializing_if = "Option::is_none")]
    pub end_day: Option<u32>,
    /// Charge per day.
    pub rate: Decimal,
}

impl RateTier {
    /// Creates a tier.
    pub const fn new(start_day: u32, end_day: Option<u32>, rate: Decimal) -> Self {
        Self {
            start_day,
            end_day,
            rate,
        }
    }
}

/// The ordered tiers for one container type and size.
///
/// A schedule is non-empty, its tiers are contiguous and ascending, every
/// rate is positive and only the last tier is unbounded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RateSchedule {
    tiers: Vec<RateTier>,
}

impl RateSchedule {
    /// Validates and wraps a tier list.
    pub fn new(
        container_type: ContainerType,
        container_size: ContainerSize,
        tiers: Vec<RateTier>,
    ) -> EngineResult<Self> {
        let invalid = |message: String| EngineError::InvalidTariff {
            container_type,
            container_size,
            message,
        };

        if tiers.is_empty() {
            return Err(invalid("schedule has no tiers".to_string()));
        }

        let last = tiers.len() - 1;
        for (i, tier) in tiers.iter().enumerate() {
            let n = i + 1;
            if tier.rate <= Decimal::ZERO {
                return Err(invalid(format!(
                    "tier {} rate must be positive, got {}",
                    n, tier.rate
                )));
            }
            match tier.end_day {
                Some(end) if end <= tier.start_day => {
                    return Err(invalid(format!(
                        "tier {} ends at day {} but starts after day {}",
                        n, end, tier.start_day
                    )));
                }
                Some(_) if i == last => {
                    return Err(invalid("final tier must be unbounded".to_string()));
                }
                None if i != last => {
                    return Err(invalid(format!("tier {} is unbounded but is not last", n)));
                }
                _ => {}
            }
            if let Some(next) = tiers.get(i + 1) {
                if tier.end_day != Some(next.start_day) {
                    return Err(invalid(format!(
                        "tier {} starts after day {} but tier {} ends at day {}",
                        n + 1,
                        next.start_day,
                        n,
                        tier.end_day.map_or_else(|| "∞".to_string(), |e| e.to_string())
                    )));
                }
            }
        }

        Ok(Self { tiers })
    }

    /// The tiers, ascending by start day.
    pub fn tiers(&self) -> &[RateTier] {
        &self.tiers
    }
}

/// Tariff file structure as stored in YAML.
///
/// ```yaml
/// free_days: { FULL: 10, REEFER: 0, IMCO: 4, EMPTY: 10 }
/// rates:
///   EMPTY:
///     "20": [{ start: 10, rate: 1.5 }]
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TariffFile {
    /// Free days per container type.
    pub free_days: BTreeMap<ContainerType, u32>,
    /// Tier lists per container type and size.
    pub rates: BTreeMap<ContainerType, BTreeMap<ContainerSize, Vec<RateTier>>>,
}

/// A complete, validated demurrage tariff.
///
/// Holds a free-day allowance for every container type and a rate schedule
/// for every type and size pair. Both tables are indexed by the closed
/// enums, so lookups cannot miss once a tariff exists.
///
/// # Example
///
/// ```
/// use demurrage_engine::config::Tariff;
/// use demurrage_engine::models::{ContainerSize, ContainerType};
///
/// let tariff = Tariff::standard();
/// assert_eq!(tariff.free_days(ContainerType::Imco), 4);
/// assert_eq!(tariff.schedule(ContainerType::Empty, ContainerSize::Forty).tiers().len(), 1);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tariff {
    free_days: [u32; 4],
    /// Row-major by container type, then size.
    schedules: Vec<RateSchedule>,
}

static STANDARD_TARIFF: Lazy<Tariff> = Lazy::new(Tariff::build_standard);

impl Tariff {
    /// Builds a tariff from a deserialized tariff file.
    ///
    /// Fails if any container type lacks free days, any type and size pair
    /// lacks a schedule, or any schedule is malformed.
    pub fn from_file(file: TariffFile) -> EngineResult<Self> {
        let mut free_days = [0; 4];
        for container_type in ContainerType::ALL {
            free_days[container_type.index()] = *file
                .free_days
                .get(&container_type)
                .ok_or(EngineError::FreeDaysNotFound { container_type })?;
        }

        let mut rates = file.rates;
        let mut schedules = Vec::with_capacity(ContainerType::ALL.len() * ContainerSize::ALL.len());
        for container_type in ContainerType::ALL {
            let mut by_size = rates.remove(&container_type).unwrap_or_default();
            for container_size in ContainerSize::ALL {
                let tiers = by_size.remove(&container_size).ok_or(
                    EngineError::ScheduleNotFound {
                        container_type,
                        container_size,
                    },
                )?;
                schedules.push(RateSchedule::new(container_type, container_size, tiers)?);
            }
        }

        Ok(Self {
            free_days,
            schedules,
        })
    }

    /// The built-in standard tariff, shared process-wide.
    pub fn standard() -> &'static Tariff {
        &STANDARD_TARIFF
    }

    /// Number of free storage days for a container type.
    pub fn free_days(&self, container_type: ContainerType) -> u32 {
        self.free_days[container_type.index()]
    }

    /// The rate schedule for a container type and size.
    pub fn schedule(
        &self,
        container_type: ContainerType,
        container_size: ContainerSize,
    ) -> &RateSchedule {
        &self.schedules[Self::slot(container_type, container_size)]
    }

    /// Converts the tariff back into its file representation.
    pub fn to_file(&self) -> TariffFile {
        let free_days = ContainerType::ALL
            .into_iter()
            .map(|t| (t, self.free_days(t)))
            .collect();
        let rates = ContainerType::ALL
            .into_iter()
            .map(|t| {
                let by_size = ContainerSize::ALL
                    .into_iter()
                    .map(|s| (s, self.schedule(t, s).tiers().to_vec()))
                    .collect();
                (t, by_size)
            })
            .collect();
        TariffFile { free_days, rates }
    }

    fn slot(container_type: ContainerType, container_size: ContainerSize) -> usize {
        container_type.index() * ContainerSize::ALL.len() + container_size.index()
    }

    fn build_standard() -> Tariff {
        fn schedule(tiers: &[(u32, Option<u32>, Decimal)]) -> RateSchedule {
            RateSchedule {
                tiers: tiers
                    .iter()
                    .map(|&(start, end, rate)| RateTier::new(start, end, rate))
                    .collect(),
            }
        }
        fn d(rate: u32) -> Decimal {
            Decimal::from(rate)
        }
        let one_and_half = Decimal::new(15, 1);
        let two_and_half = Decimal::new(25, 1);

        // Order follows ContainerType::ALL, then ContainerSize::ALL.
        let schedules = vec![
            // FULL
            schedule(&[(10, Some(20), d(3)), (20, Some(30), d(5)), (30, None, d(7))]),
            schedule(&[(10, Some(20), d(5)), (20, Some(30), d(8)), (30, None, d(11))]),
            // REEFER
            schedule(&[(0, Some(10), d(6)), (10, Some(20), d(8)), (20, None, d(10))]),
            schedule(&[(0, Some(10), d(9)), (10, Some(20), d(12)), (20, None, d(15))]),
            // IMCO
            schedule(&[(4, Some(20), d(3)), (20, Some(30), d(5)), (30, None, d(7))]),
            schedule(&[(4, Some(20), d(5)), (20, Some(30), d(8)), (30, None, d(11))]),
            // EMPTY
            schedule(&[(10, None, one_and_half)]),
            schedule(&[(10, None, two_and_half)]),
        ];

        Tariff {
            free_days: [10, 0, 4, 10],
            schedules,
        }
    }
}
