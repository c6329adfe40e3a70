//! Save-time validation rules

use crate::domain::model::Entry;
use crate::error::ValidationError;
use serde::{Deserialize, Serialize};

/// Which fields are mandatory at save time.
///
/// The deployed terminals disagreed: one accepted a first-weight-only
/// entry with an empty driver name, the other demanded the full pair and
/// the driver. Both behaviors are kept behind this switch rather than
/// silently merged; `Lenient` matches the recovered terminal and is the
/// default.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ValidationPolicy {
    #[default]
    Lenient,
    Strict,
}

impl std::fmt::Display for ValidationPolicy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ValidationPolicy::Lenient => write!(f, "lenient"),
            ValidationPolicy::Strict => write!(f, "strict"),
        }
    }
}

/// Check a candidate entry before it is committed.
///
/// Rules run in a fixed order and the first failure wins; a failure means
/// the save is aborted with no store call. `duplicate_serial` is the
/// store's answer for create mode and must be `false` in edit mode, where
/// the serial intentionally targets an existing record.
pub fn validate(
    entry: &Entry,
    duplicate_serial: bool,
    policy: ValidationPolicy,
) -> Result<(), ValidationError> {
    if duplicate_serial {
        return Err(ValidationError::DuplicateSerial);
    }
    if entry.first_weight == 0.0 {
        return Err(ValidationError::MissingFirstWeight);
    }
    if policy == ValidationPolicy::Strict {
        if entry.second_weight == 0.0 {
            return Err(ValidationError::MissingSecondWeight);
        }
        if entry.driver_name.is_empty() {
            return Err(ValidationError::MissingDriverName);
        }
    }
    if entry.vehicle_number.is_empty() {
        return Err(ValidationError::MissingVehicleNumber);
    }
    if entry.amount == 0.0 {
        return Err(ValidationError::MissingAmount);
    }
    Ok(())
}
