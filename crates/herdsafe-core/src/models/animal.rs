//! Animal models.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::DrugDose;

/// An animal under treatment, owning its scheduled doses.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Animal {
    /// Herd identifier (e.g., "COW001")
    pub animal_id: String,
    /// Animal name
    pub name: String,
    /// Species (e.g., "cow", "buffalo", "chicken", "goat")
    pub species: String,
    /// Owning farmer
    pub farmer: Option<String>,
    /// Date of the most recent treatment administration
    pub last_medicine_date: NaiveDate,
    /// Animal-level baseline withdrawal period in days
    pub waiting_period: u32,
    /// Scheduled doses for the current treatment course
    pub drugs: Vec<DrugDose>,
}

impl Animal {
    /// Create a new animal with required fields.
    pub fn new(animal_id: String, name: String, species: String, last_medicine_date: NaiveDate) -> Self {
        Self {
            animal_id,
            name,
            species,
            farmer: None,
            last_medicine_date,
            waiting_period: 0,
            drugs: Vec::new(),
        }
    }

    /// Effective withdrawal period: the animal baseline, overridden by any
    /// larger drug-level waiting period. An empty dose list contributes 0.
    pub fn effective_withdrawal_period(&self) -> u32 {
        let drug_max = self.drugs.iter().map(|d| d.waiting_days).max().unwrap_or(0);
        self.waiting_period.max(drug_max)
    }

    /// Get the canonical species name (lowercase).
    pub fn canonical_species(&self) -> String {
        self.species.to_lowercase()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::TimeSlot;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_new_animal() {
        let animal = Animal::new("COW001".into(), "Bella".into(), "cow".into(), date(2024, 8, 25));
        assert_eq!(animal.animal_id, "COW001");
        assert!(animal.drugs.is_empty());
        assert_eq!(animal.waiting_period, 0);
    }

    #[test]
    fn test_effective_period_empty_drugs() {
        let mut animal = Animal::new("COW001".into(), "Bella".into(), "cow".into(), date(2024, 8, 25));
        animal.waiting_period = 7;
        assert_eq!(animal.effective_withdrawal_period(), 7);
    }

    #[test]
    fn test_effective_period_drug_override() {
        let mut animal = Animal::new("COW001".into(), "Bella".into(), "cow".into(), date(2024, 8, 25));
        animal.waiting_period = 5;
        animal.drugs.push(DrugDose::new("Oxytetracycline".into(), TimeSlot::Morning, 10));
        animal.drugs.push(DrugDose::new("Amoxicillin".into(), TimeSlot::Evening, 3));
        assert_eq!(animal.effective_withdrawal_period(), 10);
    }

    #[test]
    fn test_effective_period_baseline_wins() {
        let mut animal = Animal::new("GOT004".into(), "Chotu".into(), "goat".into(), date(2024, 8, 24));
        animal.waiting_period = 10;
        animal.drugs.push(DrugDose::new("Penicillin".into(), TimeSlot::Morning, 4));
        assert_eq!(animal.effective_withdrawal_period(), 10);
    }

    #[test]
    fn test_canonical_species() {
        let animal = Animal::new("BUF002".into(), "Moti".into(), "Buffalo".into(), date(2024, 8, 15));
        assert_eq!(animal.canonical_species(), "buffalo");
    }
}
