//! Container classification types.
//!
//! A container's type decides its free-day allowance and which family of
//! rate schedules applies; its size picks the schedule within that family.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::EngineError;

/// The cargo class of a container.
///
/// # Example
///
/// ```
/// use demurrage_engine::models::ContainerType;
///
/// let container_type: ContainerType = "reefer".parse().unwrap();
/// assert_eq!(container_type, ContainerType::Reefer);
/// assert_eq!(container_type.to_string(), "REEFER");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum ContainerType {
    /// Standard full (laden) container.
    Full,
    /// Refrigerated container.
    Reefer,
    /// Dangerous goods container (IMO classified).
    Imco,
    /// Empty container.
    Empty,
}

impl ContainerType {
    /// Every container type, in table order.
    pub const ALL: [ContainerType; 4] = [
        ContainerType::Full,
        ContainerType::Reefer,
        ContainerType::Imco,
        ContainerType::Empty,
    ];

    /// Position of this type in [`ContainerType::ALL`], used to index tariff tables.
    pub const fn index(self) -> usize {
        match self {
            ContainerType::Full => 0,
            ContainerType::Reefer => 1,
            ContainerType::Imco => 2,
            ContainerType::Empty => 3,
        }
    }

    /// The wire name of this type.
    pub const fn as_str(self) -> &'static str {
        match self {
            ContainerType::Full => "FULL",
            ContainerType::Reefer => "REEFER",
            ContainerType::Imco => "IMCO",
            ContainerType::Empty => "EMPTY",
        }
    }
}

impl fmt::Display for ContainerType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ContainerType {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let value = s.trim();
        ContainerType::ALL
            .into_iter()
            .find(|t| t.as_str().eq_ignore_ascii_case(value))
            .ok_or_else(|| EngineError::UnknownContainerType {
                value: value.to_string(),
            })
    }
}

/// The nominal length class of a container.
///
/// # Example
///
/// ```
/// use demurrage_engine::models::ContainerSize;
///
/// let size: ContainerSize = "40".parse().unwrap();
/// assert_eq!(size, ContainerSize::Forty);
/// assert_eq!(serde_json::to_string(&size).unwrap(), "\"40\"");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum ContainerSize {
    /// Twenty-foot container.
    #[serde(rename = "20")]
    Twenty,
    /// Forty-foot container.
    #[serde(rename = "40")]
    Forty,
}

impl ContainerSize {
    /// Every container size, in table order.
    pub const ALL: [ContainerSize; 2] = [ContainerSize::Twenty, ContainerSize::Forty];

    /// Position of this size in [`ContainerSize::ALL`].
    pub const fn index(self) -> usize {
        match self {
            ContainerSize::Twenty => 0,
            ContainerSize::Forty => 1,
        }
    }

    /// The wire name of this size.
    pub const fn as_str(self) -> &'static str {
        match self {
            ContainerSize::Twenty => "20",
            ContainerSize::Forty => "40",
        }
    }
}

impl fmt::Display for ContainerSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ContainerSize {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let value = s.trim();
        let value = value
            .strip_suffix("ft")
            .or_else(|| value.strip_suffix("FT"))
            .unwrap_or(value)
            .trim();
        ContainerSize::ALL
            .into_iter()
            .find(|size| size.as_str() == value)
            .ok_or_else(|| EngineError::UnknownContainerSize {
                value: s.trim().to_string(),
            })
    }
}
