//! Caller-supplied day count validation.
//!
//! Both the HTTP API and the interactive prompt accept a signed day count
//! and check it here before anything is priced.

use crate::error::{EngineError, EngineResult};

/// Which day counts a deployment accepts.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum DayPolicy {
    /// Zero or more days; zero days is always free.
    #[default]
    AllowZero,
    /// Strictly positive day counts only.
    RequirePositive,
}

impl DayPolicy {
    /// Validates a day count and narrows it to the calculator's type.
    ///
    /// # Example
    ///
    /// ```
    /// use demurrage_engine::models::DayPolicy;
    ///
    /// assert_eq!(DayPolicy::AllowZero.validate(0).unwrap(), 0);
    /// assert!(DayPolicy::RequirePositive.validate(0).is_err());
    /// assert!(DayPolicy::AllowZero.validate(-1).is_err());
    /// ```
    pub fn validate(self, days: i64) -> EngineResult<u32> {
        if days < 0 {
            return Err(EngineError::InvalidDays {
                days,
                message: "Days cannot be negative".to_string(),
            });
        }
        if days == 0 && self == DayPolicy::RequirePositive {
            return Err(EngineError::InvalidDays {
                days,
                message: "Days must be greater than zero".to_string(),
            });
        }
        u32::try_from(days).map_err(|_| EngineError::InvalidDays {
            days,
            message: format!("Days cannot exceed {}", u32::MAX),
        })
    }
}
