//! Storage period model.
//!
//! Converts a calendar date range into the inclusive day count the
//! calculator works with.

use chrono::NaiveDate;

use crate::error::{EngineError, EngineResult};

/// Date format accepted for storage dates (day/month/year).
pub const STORAGE_DATE_FORMAT: &str = "%d/%m/%Y";

/// A container's stay, from the first to the last storage day.
///
/// Both ends are inclusive, so a container that arrives and leaves on the
/// same day has been stored for one day.
///
/// # Example
///
/// ```
/// use demurrage_engine::models::StoragePeriod;
///
/// let period = StoragePeriod::parse("01/03/2025", "15/03/2025").unwrap();
/// assert_eq!(period.days(), 15);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StoragePeriod {
    /// The first day of storage (inclusive).
    pub start_date: NaiveDate,
    /// The last day of storage (inclusive).
    pub end_date: NaiveDate,
}

impl StoragePeriod {
    /// Creates a storage period, rejecting an end date before the start date.
    pub fn new(start_date: NaiveDate, end_date: NaiveDate) -> EngineResult<Self> {
        if end_date < start_date {
            return Err(EngineError::InvalidStoragePeriod {
                start_date,
                end_date,
            });
        }
        Ok(Self {
            start_date,
            end_date,
        })
    }

    /// Parses both ends from `DD/MM/YYYY` strings.
    pub fn parse(start: &str, end: &str) -> EngineResult<Self> {
        Self::new(parse_storage_date(start)?, parse_storage_date(end)?)
    }

    /// Number of storage days, counting both the start and end date.
    pub fn days(&self) -> u32 {
        let span = (self.end_date - self.start_date).num_days() + 1;
        u32::try_from(span).unwrap_or(u32::MAX)
    }
}

/// Parses a single `DD/MM/YYYY` date.
///
/// # Example
///
/// ```
/// use demurrage_engine::models::parse_storage_date;
/// use chrono::NaiveDate;
///
/// assert_eq!(
///     parse_storage_date("29/02/2024").unwrap(),
///     NaiveDate::from_ymd_opt(2024, 2, 29).unwrap()
/// );
/// assert!(parse_storage_date("29/02/2025").is_err());
/// ```
pub fn parse_storage_date(input: &str) -> EngineResult<NaiveDate> {
    let input = input.trim();
    NaiveDate::parse_from_str(input, STORAGE_DATE_FORMAT).map_err(|_| EngineError::InvalidDate {
        input: input.to_string(),
    })
}
