//! Request types for the Demurrage Engine API.
//!
//! This module defines the JSON request structure for the
//! `/calculate-demurrage` endpoint.

use serde::{Deserialize, Serialize};

use crate::error::EngineResult;
use crate::models::{ContainerSize, ContainerType, DayPolicy};

/// Request body for the `/calculate-demurrage` endpoint.
///
/// Unknown container types or sizes fail deserialization; the day count is
/// signed so a negative value can be reported with a clear message rather
/// than a generic parse error.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DemurrageRequest {
    /// The container type (e.g., "FULL").
    pub container_type: ContainerType,
    /// The container size ("20" or "40").
    pub container_size: ContainerSize,
    /// Total elapsed storage days.
    pub days: i64,
}

impl DemurrageRequest {
    /// Checks the day count against the deployment's policy.
    pub fn validated_days(&self, policy: DayPolicy) -> EngineResult<u32> {
        policy.validate(self.days)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::EngineError;

    #[test]
    fn test_deserialize_demurrage_request() {
        let json = r#"{
            "container_type": "FULL",
            "container_size": "20",
            "days": 21
        }"#;

        let request: DemurrageRequest = serde_json::from_str(json).unwrap();
        assert_eq!(request.container_type, ContainerType::Full);
        assert_eq!(request.container_size, ContainerSize::Twenty);
        assert_eq!(request.days, 21);
    }

    #[test]
    fn test_deserialize_negative_days() {
        let json = r#"{"container_type": "EMPTY", "container_size": "40", "days": -2}"#;

        let request: DemurrageRequest = serde_json::from_str(json).unwrap();
        assert!(matches!(
            request.validated_days(DayPolicy::AllowZero),
            Err(EngineError::InvalidDays { days: -2, .. })
        ));
    }

    #[test]
    fn test_unknown_container_type_fails() {
        let json = r#"{"container_type": "TANK", "container_size": "20", "days": 3}"#;
        let result: Result<DemurrageRequest, _> = serde_json::from_str(json);
        assert!(result.is_err());
    }

    #[test]
    fn test_missing_days_fails() {
        let json = r#"{"container_type": "FULL", "container_size": "20"}"#;
        let err = serde_json::from_str::<DemurrageRequest>(json).unwrap_err();
        assert!(err.to_string().contains("missing field `days`"));
    }
}
