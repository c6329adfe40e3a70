//! In-progress weighing transaction
//!
//! One `WeighingSession` holds the working values for a single
//! transaction between first weighing and save. The presentation layer
//! owns the only mutable reference and drives it through discrete
//! actions; every transition here is synchronous.

use crate::domain::model::Entry;
use crate::domain::service::weight_calculator::derived;
use crate::domain::service::{validate, ValidationPolicy};
use crate::error::{Result, ValidationError};
use crate::store::EntryStore;
use chrono::Local;

/// Lifecycle of a session.
///
/// `Fresh` (new, serial auto-assigned) moves to `Filling` on the first
/// field edit and to `Saved` on commit. A serial lookup hit enters
/// `Editing`, which re-commits to `Saved`. The New action returns to
/// `Fresh` from anywhere.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SessionState {
    #[default]
    Fresh,
    Filling,
    Editing,
    Saved,
}

/// Working state for one weighing transaction
pub struct WeighingSession {
    /// Auto-assigned on New, overwritten by a lookup hit
    serial_number: String,
    pub vehicle_number: String,
    pub driver_name: String,
    pub amount: f64,
    pub first_weight: f64,
    second_weight: f64,
    final_weight: f64,
    weight_per_40: String,
    /// First-weighing timestamp; stamped at first save, preserved on
    /// edit-resave
    date: String,
    time: String,
    second_date: Option<String>,
    second_time: Option<String>,
    is_editing: bool,
    state: SessionState,
    last_saved: Option<Entry>,
    policy: ValidationPolicy,
}

impl WeighingSession {
    /// Fresh session with the next serial from the store
    pub fn fresh(store: &EntryStore, policy: ValidationPolicy) -> Self {
        Self {
            serial_number: store.next_serial(),
            vehicle_number: String::new(),
            driver_name: String::new(),
            amount: 0.0,
            first_weight: 0.0,
            second_weight: 0.0,
            final_weight: 0.0,
            weight_per_40: "0".to_string(),
            date: String::new(),
            time: String::new(),
            second_date: None,
            second_time: None,
            is_editing: false,
            state: SessionState::Fresh,
            last_saved: None,
            policy,
        }
    }

    pub fn serial_number(&self) -> &str {
        &self.serial_number
    }

    pub fn second_weight(&self) -> f64 {
        self.second_weight
    }

    pub fn final_weight(&self) -> f64 {
        self.final_weight
    }

    pub fn weight_per_40(&self) -> &str {
        &self.weight_per_40
    }

    pub fn date(&self) -> &str {
        &self.date
    }

    pub fn time(&self) -> &str {
        &self.time
    }

    pub fn second_date(&self) -> Option<&str> {
        self.second_date.as_deref()
    }

    pub fn second_time(&self) -> Option<&str> {
        self.second_time.as_deref()
    }

    pub fn is_editing(&self) -> bool {
        self.is_editing
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    /// Entry committed by the last save, available for printing
    pub fn last_saved(&self) -> Option<&Entry> {
        self.last_saved.as_ref()
    }

    /// Called by the presentation layer when any directly bound field
    /// was edited
    pub fn mark_filling(&mut self) {
        if self.state == SessionState::Fresh || self.state == SessionState::Saved {
            self.state = SessionState::Filling;
        }
    }

    /// Store a second-weight reading and recompute the derived fields
    /// immediately. Entering a nonzero reading stamps the second
    /// timestamp pair at this moment; clearing to zero clears it.
    pub fn set_second_weight(&mut self, value: f64) {
        self.second_weight = value;
        let (net, per40) = derived(self.first_weight, value);
        self.final_weight = net;
        self.weight_per_40 = per40;

        if value != 0.0 {
            let (date, time) = now_strings();
            self.second_date = Some(date);
            self.second_time = Some(time);
        } else {
            self.second_date = None;
            self.second_time = None;
        }
        self.mark_filling();
    }

    /// Check the session against the save rules without mutating
    /// anything
    pub fn validate(&self, store: &EntryStore) -> std::result::Result<(), ValidationError> {
        let duplicate =
            !self.is_editing && store.find_by_serial(&self.serial_number).is_some();
        validate(&self.build_entry(), duplicate, self.policy)
    }

    /// Commit the session as a finalized entry.
    ///
    /// Validation failure aborts with no state mutation and no store
    /// call. On success the entry is appended (create) or replaces the
    /// record with the same serial (edit), the session moves to `Saved`
    /// and edit mode ends.
    pub fn save(&mut self, store: &mut EntryStore) -> Result<Entry> {
        self.validate(store)?;

        let entry = self.build_entry();
        store.upsert(entry.clone(), self.is_editing)?;

        self.date = entry.date.clone();
        self.time = entry.time.clone();
        self.final_weight = entry.final_weight;
        self.weight_per_40 = entry.weight_per_40.clone();
        self.last_saved = Some(entry.clone());
        self.is_editing = false;
        self.state = SessionState::Saved;
        Ok(entry)
    }

    /// Reset to a fresh transaction with the next serial from the store
    pub fn start_new(&mut self, store: &EntryStore) {
        *self = Self::fresh(store, self.policy);
    }

    /// Look up a stored entry by serial. A hit copies every field into
    /// the session and enters edit mode; a miss leaves the session
    /// untouched and returns `false`.
    pub fn search_by_serial(&mut self, store: &EntryStore, serial: &str) -> bool {
        let Some(found) = store.find_by_serial(serial) else {
            return false;
        };

        self.serial_number = found.serial_number.clone();
        self.vehicle_number = found.vehicle_number.clone();
        self.driver_name = found.driver_name.clone();
        self.amount = found.amount;
        self.first_weight = found.first_weight;
        self.second_weight = found.second_weight;
        self.final_weight = found.final_weight;
        self.weight_per_40 = found.weight_per_40.clone();
        self.date = found.date.clone();
        self.time = found.time.clone();
        self.second_date = found.second_date.clone();
        self.second_time = found.second_time.clone();
        self.last_saved = Some(found.clone());
        self.is_editing = true;
        self.state = SessionState::Editing;
        true
    }

    /// Candidate entry for the current session values. Derived fields
    /// are recomputed here; without a second weight they are 0 / "0".
    fn build_entry(&self) -> Entry {
        let has_second = self.second_weight != 0.0;
        let (final_weight, weight_per_40) = if has_second {
            derived(self.first_weight, self.second_weight)
        } else {
            (0.0, "0".to_string())
        };

        let (date, time) = if self.is_editing {
            (self.date.clone(), self.time.clone())
        } else {
            now_strings()
        };

        Entry {
            serial_number: self.serial_number.clone(),
            driver_name: self.driver_name.clone(),
            vehicle_number: self.vehicle_number.clone(),
            first_weight: self.first_weight,
            second_weight: self.second_weight,
            final_weight,
            weight_per_40,
            amount: self.amount,
            date,
            time,
            second_date: if has_second {
                self.second_date.clone()
            } else {
                None
            },
            second_time: if has_second {
                self.second_time.clone()
            } else {
                None
            },
        }
    }
}

fn now_strings() -> (String, String) {
    let now = Local::now();
    (
        now.format("%Y-%m-%d").to_string(),
        now.format("%H:%M:%S").to_string(),
    )
}
