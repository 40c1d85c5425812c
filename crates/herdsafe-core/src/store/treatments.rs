//! Treatment intake.
//!
//! A new treatment carries one order per prescribed drug with free-text
//! dosages for each daily slot. Each non-empty slot dosage becomes one
//! scheduled dose on the animal; each order becomes one ledger record.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::{HerdStore, StoreError, StoreResult};
use crate::models::{DrugDose, TimeSlot, TreatmentRecord};
use crate::screening::{self, BannedHit};

/// One prescribed drug within a treatment, with per-slot dosage texts.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DrugOrder {
    /// Drug name
    pub name: String,
    /// Morning dosage (e.g., "2 tablets"), if scheduled
    pub morning: Option<String>,
    /// Afternoon dosage, if scheduled
    pub afternoon: Option<String>,
    /// Evening dosage, if scheduled
    pub evening: Option<String>,
    /// Withdrawal period for this drug, in days
    pub waiting_days: u32,
}

impl DrugOrder {
    fn slot_dosages(&self) -> impl Iterator<Item = (TimeSlot, &str)> {
        [
            (TimeSlot::Morning, self.morning.as_deref()),
            (TimeSlot::Afternoon, self.afternoon.as_deref()),
            (TimeSlot::Evening, self.evening.as_deref()),
        ]
        .into_iter()
        .filter_map(|(slot, dosage)| match dosage {
            Some(text) if !text.trim().is_empty() => Some((slot, text)),
            _ => None,
        })
    }

    /// Expand this order into one scheduled dose per non-empty slot dosage.
    fn doses(&self, disease: &str) -> Vec<DrugDose> {
        self.slot_dosages()
            .map(|(slot, text)| {
                let mut dose = DrugDose::new(self.name.clone(), slot, self.waiting_days);
                dose.dose = text.trim().to_string();
                dose.disease = disease.to_string();
                dose
            })
            .collect()
    }

    /// Per-slot dosages joined for display (e.g., "2 tablets / 1 ml").
    fn display_dose(&self) -> String {
        self.slot_dosages()
            .map(|(_, text)| text.trim())
            .collect::<Vec<_>>()
            .join(" / ")
    }
}

/// A new treatment to record against an existing animal.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct NewTreatment {
    /// Treated animal's id
    pub animal_id: String,
    /// Condition being treated
    pub reason: String,
    /// Administration date
    pub date: NaiveDate,
    /// Prescribing veterinarian
    pub veterinarian: String,
    /// Additional notes
    pub notes: Option<String>,
    /// Prescribed drugs
    pub drugs: Vec<DrugOrder>,
}

/// A banned-substance warning attached to a recorded treatment.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DrugWarning {
    /// The prescribed drug name that triggered the hit
    pub drug: String,
    /// The screening hit
    pub hit: BannedHit,
}

/// Result of recording a treatment.
///
/// Banned-substance hits warn rather than reject; callers that must block
/// them can inspect `warnings` before acting on the outcome.
#[derive(Debug, Clone)]
pub struct TreatmentOutcome {
    /// Ids of the ledger records created, one per drug order
    pub record_ids: Vec<String>,
    /// Banned-substance warnings raised during screening
    pub warnings: Vec<DrugWarning>,
}

impl HerdStore {
    /// Record a treatment: validate, screen each drug, expand slot dosages
    /// into scheduled doses on the animal, append ledger records, and advance
    /// the animal's last-medicine date.
    pub fn record_treatment(&mut self, treatment: NewTreatment) -> StoreResult<TreatmentOutcome> {
        validate(&treatment)?;

        let animal = self
            .get_animal_mut(&treatment.animal_id)
            .ok_or_else(|| StoreError::UnknownAnimal(treatment.animal_id.clone()))?;

        let mut warnings = Vec::new();
        let mut records = Vec::new();

        for order in &treatment.drugs {
            if let Some(hit) = screening::screen(&order.name) {
                warnings.push(DrugWarning {
                    drug: order.name.clone(),
                    hit,
                });
            }

            animal.drugs.extend(order.doses(&treatment.reason));

            let mut record = TreatmentRecord::new(
                animal.animal_id.clone(),
                order.name.clone(),
                order.waiting_days,
                treatment.date,
            );
            record.animal_name = animal.name.clone();
            record.species = animal.species.clone();
            record.farmer = animal.farmer.clone();
            record.dose = order.display_dose();
            record.reason = treatment.reason.clone();
            record.veterinarian = treatment.veterinarian.clone();
            record.notes = treatment.notes.clone();
            records.push(record);
        }

        animal.last_medicine_date = animal.last_medicine_date.max(treatment.date);

        let record_ids = records.iter().map(|r| r.id.clone()).collect();
        self.treatments.extend(records);

        Ok(TreatmentOutcome {
            record_ids,
            warnings,
        })
    }
}

fn validate(treatment: &NewTreatment) -> StoreResult<()> {
    if treatment.drugs.is_empty() {
        return Err(StoreError::Validation("at least one drug is required".into()));
    }
    for order in &treatment.drugs {
        if order.name.trim().is_empty() {
            return Err(StoreError::Validation("drug name is required".into()));
        }
        if order.slot_dosages().next().is_none() {
            return Err(StoreError::Validation(format!(
                "{}: at least one slot dosage is required",
                order.name
            )));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Animal;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn store_with_bella() -> HerdStore {
        let mut store = HerdStore::new();
        let mut bella = Animal::new("COW001".into(), "Bella".into(), "cow".into(), date(2024, 8, 20));
        bella.farmer = Some("Ram Kumar".into());
        bella.waiting_period = 2;
        store.add_animal(bella).unwrap();
        store
    }

    fn amoxicillin_order() -> DrugOrder {
        DrugOrder {
            name: "Amoxicillin".into(),
            morning: Some("2 tablets".into()),
            afternoon: None,
            evening: Some("1 tablet".into()),
            waiting_days: 7,
        }
    }

    fn mastitis_treatment() -> NewTreatment {
        NewTreatment {
            animal_id: "COW001".into(),
            reason: "Mastitis".into(),
            date: date(2024, 8, 25),
            veterinarian: "Dr. Sharma".into(),
            notes: Some("Monitor temperature daily".into()),
            drugs: vec![amoxicillin_order()],
        }
    }

    #[test]
    fn test_record_expands_slot_dosages() {
        let mut store = store_with_bella();
        let outcome = store.record_treatment(mastitis_treatment()).unwrap();

        assert_eq!(outcome.record_ids.len(), 1);
        assert!(outcome.warnings.is_empty());

        let bella = store.get_animal("COW001").unwrap();
        assert_eq!(bella.drugs.len(), 2);
        assert_eq!(bella.drugs[0].time_slot, TimeSlot::Morning);
        assert_eq!(bella.drugs[0].dose, "2 tablets");
        assert_eq!(bella.drugs[1].time_slot, TimeSlot::Evening);
        assert_eq!(bella.drugs[0].disease, "Mastitis");
        assert_eq!(bella.last_medicine_date, date(2024, 8, 25));
    }

    #[test]
    fn test_record_appends_ledger_row() {
        let mut store = store_with_bella();
        store.record_treatment(mastitis_treatment()).unwrap();

        assert_eq!(store.treatments().len(), 1);
        let record = &store.treatments()[0];
        assert_eq!(record.drug, "Amoxicillin");
        assert_eq!(record.dose, "2 tablets / 1 tablet");
        assert_eq!(record.veterinarian, "Dr. Sharma");
        assert_eq!(record.farmer, Some("Ram Kumar".into()));
        assert_eq!(record.waiting_period, 7);
    }

    #[test]
    fn test_backdated_treatment_keeps_latest_date() {
        let mut store = store_with_bella();
        let mut treatment = mastitis_treatment();
        treatment.date = date(2024, 8, 10);

        store.record_treatment(treatment).unwrap();
        assert_eq!(
            store.get_animal("COW001").unwrap().last_medicine_date,
            date(2024, 8, 20)
        );
    }

    #[test]
    fn test_unknown_animal_rejected() {
        let mut store = store_with_bella();
        let mut treatment = mastitis_treatment();
        treatment.animal_id = "COW999".into();

        let result = store.record_treatment(treatment);
        assert!(matches!(result, Err(StoreError::UnknownAnimal(id)) if id == "COW999"));
    }

    #[test]
    fn test_empty_drug_list_rejected() {
        let mut store = store_with_bella();
        let mut treatment = mastitis_treatment();
        treatment.drugs.clear();

        assert!(matches!(
            store.record_treatment(treatment),
            Err(StoreError::Validation(_))
        ));
    }

    #[test]
    fn test_order_without_dosage_rejected() {
        let mut store = store_with_bella();
        let mut treatment = mastitis_treatment();
        treatment.drugs[0].morning = None;
        treatment.drugs[0].evening = Some("  ".into());

        assert!(matches!(
            store.record_treatment(treatment),
            Err(StoreError::Validation(_))
        ));
    }

    #[test]
    fn test_banned_drug_warns_but_records() {
        let mut store = store_with_bella();
        let mut treatment = mastitis_treatment();
        treatment.drugs.push(DrugOrder {
            name: "Chloramphenicol".into(),
            morning: Some("1 injection".into()),
            afternoon: None,
            evening: None,
            waiting_days: 30,
        });

        let outcome = store.record_treatment(treatment).unwrap();
        assert_eq!(outcome.record_ids.len(), 2);
        assert_eq!(outcome.warnings.len(), 1);
        assert_eq!(outcome.warnings[0].drug, "Chloramphenicol");
        assert!(outcome.warnings[0].hit.exact);
        assert_eq!(store.treatments().len(), 2);
    }

    #[test]
    fn test_drug_period_raises_effective_withdrawal() {
        let mut store = store_with_bella();
        store.record_treatment(mastitis_treatment()).unwrap();

        let bella = store.get_animal("COW001").unwrap();
        assert_eq!(bella.effective_withdrawal_period(), 7);
    }
}
