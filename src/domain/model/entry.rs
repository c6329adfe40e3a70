use serde::{Deserialize, Serialize};

/// A finalized weighing record.
///
/// Persisted as-is; field names on disk match the records written by the
/// original terminal so existing data files load unchanged. Once saved an
/// entry only changes through an explicit edit-then-resave cycle that
/// replaces the whole record keyed by its serial number.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Entry {
    /// Unique key within the store; treated as numeric when auto-incrementing
    pub serial_number: String,

    #[serde(default)]
    pub driver_name: String,

    pub vehicle_number: String,

    /// First (tare) weight, kg
    pub first_weight: f64,

    /// Second (gross) weight, kg; 0 = not yet taken
    #[serde(default)]
    pub second_weight: f64,

    /// Net weight, |first - second|; 0 when no second weight. Derived,
    /// never independently set.
    #[serde(default)]
    pub final_weight: f64,

    /// Per-40 billing quantity, "whole.remainder" format; "0" when no
    /// second weight. Derived, never independently set.
    #[serde(default = "default_weight_per_40")]
    pub weight_per_40: String,

    /// Charge for the transaction
    pub amount: f64,

    /// First-weighing capture date, recorded once at save
    pub date: String,

    /// First-weighing capture time, recorded once at save
    pub time: String,

    /// Stamped when the second weight was entered
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub second_date: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub second_time: Option<String>,
}

fn default_weight_per_40() -> String {
    "0".to_string()
}

impl Entry {
    /// Whether a second weighing has been taken
    pub fn has_second_weight(&self) -> bool {
        self.second_weight != 0.0
    }
}
