//! Storage period naming.
//!
//! Each container type names its tiers in order; tiers past the end of the
//! list reuse the last name.

use crate::models::ContainerType;

const STANDARD_NAMES: &[&str] = &[
    "Initial Storage Period",
    "Extended Storage Period",
    "Long-term Storage Period",
];

const REEFER_NAMES: &[&str] = &[
    "Base Storage Period",
    "Intermediate Storage Period",
    "Extended Storage Period",
];

const EMPTY_NAMES: &[&str] = &["Standard Storage Period"];

/// Returns the display name for a tier of a container type's schedule.
///
/// # Examples
///
/// ```
/// use demurrage_engine::calculation::period_name;
/// use demurrage_engine::models::ContainerType;
///
/// assert_eq!(period_name(ContainerType::Reefer, 0), "Base Storage Period");
/// assert_eq!(period_name(ContainerType::Full, 7), "Long-term Storage Period");
/// ```
pub fn period_name(container_type: ContainerType, tier: usize) -> &'static str {
    let names = match container_type {
        ContainerType::Full | ContainerType::Imco => STANDARD_NAMES,
        ContainerType::Reefer => REEFER_NAMES,
        ContainerType::Empty => EMPTY_NAMES,
    };
    names[tier.min(names.len() - 1)]
}
