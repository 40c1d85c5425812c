//! In-memory herd store.
//!
//! Owns the animal list and the treatment-history ledger for a session, plus
//! the session [`DoseLog`]. Records are immutable once stored except through
//! [`HerdStore::record_treatment`]; dose toggling goes through the overlay,
//! never the records.

mod animals;
mod seed;
mod treatments;

pub use seed::*;
pub use treatments::*;

use thiserror::Error;

use crate::models::{Animal, ModelError, TimeSlot, TreatmentRecord};
use crate::schedule::{self, DoseLog, SlotCounts, SlotRoster};

/// Store errors.
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("Unknown animal: {0}")]
    UnknownAnimal(String),

    #[error("Duplicate animal id: {0}")]
    DuplicateAnimal(String),

    #[error("Invalid treatment: {0}")]
    Validation(String),

    #[error("Invalid record data: {0}")]
    Model(#[from] ModelError),

    #[error("Seed parse error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type StoreResult<T> = Result<T, StoreError>;

/// Session-scoped store for animals, treatments, and dose state.
#[derive(Debug, Default)]
pub struct HerdStore {
    animals: Vec<Animal>,
    treatments: Vec<TreatmentRecord>,
    dose_log: DoseLog,
}

impl HerdStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// All animals, in insertion order.
    pub fn animals(&self) -> &[Animal] {
        &self.animals
    }

    /// All treatment records, in insertion order.
    pub fn treatments(&self) -> &[TreatmentRecord] {
        &self.treatments
    }

    /// The session dose overlay.
    pub fn dose_log(&self) -> &DoseLog {
        &self.dose_log
    }

    /// Mark a dose as given this session. Idempotent.
    pub fn mark_dose_given(&mut self, drug_id: &str) -> bool {
        self.dose_log.mark_given(drug_id)
    }

    /// Undo a session dose mark. No-op on absent ids.
    pub fn undo_dose(&mut self, drug_id: &str) -> bool {
        self.dose_log.undo(drug_id)
    }

    /// Pending-dose tallies per slot, consulting the session overlay.
    pub fn pending_counts(&self) -> SlotCounts {
        schedule::pending_counts_by_slot(&self.animals, &self.dose_log)
    }

    /// Animals with pending doses in `slot`, consulting the session overlay.
    pub fn slot_roster(&self, slot: TimeSlot) -> Vec<SlotRoster<'_>> {
        schedule::animals_pending_for_slot(&self.animals, &self.dose_log, slot)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    use crate::models::DrugDose;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_empty_store() {
        let store = HerdStore::new();
        assert!(store.animals().is_empty());
        assert!(store.treatments().is_empty());
        assert_eq!(store.pending_counts().total(), 0);
    }

    #[test]
    fn test_dose_toggle_via_store() {
        let mut store = HerdStore::new();

        let mut animal = Animal::new("COW001".into(), "Bella".into(), "cow".into(), date(2024, 8, 25));
        let dose = DrugDose::new("Amoxicillin".into(), TimeSlot::Morning, 7);
        let dose_id = dose.drug_id.clone();
        animal.drugs.push(dose);
        store.add_animal(animal).unwrap();

        assert_eq!(store.pending_counts().morning, 1);

        assert!(store.mark_dose_given(&dose_id));
        assert_eq!(store.pending_counts().morning, 0);

        assert!(store.undo_dose(&dose_id));
        assert_eq!(store.pending_counts().morning, 1);
    }
}
