//! List filtering and sorting for animals and treatment history.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::models::{Animal, TreatmentRecord};
use crate::withdrawal::{self, Readiness};

/// Filter criteria for the animal list.
///
/// `search` matches case-insensitively against name, id, and farmer;
/// `species` compares canonical (lowercase) species names; `status` keeps
/// animals in one readiness band as of the supplied date. Unset fields match
/// everything.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct AnimalQuery {
    pub search: Option<String>,
    pub species: Option<String>,
    pub status: Option<Readiness>,
}

impl AnimalQuery {
    /// Whether one animal matches, as of `today`.
    pub fn matches(&self, animal: &Animal, today: NaiveDate) -> bool {
        if let Some(term) = &self.search {
            let term = term.to_lowercase();
            let hit = animal.name.to_lowercase().contains(&term)
                || animal.animal_id.to_lowercase().contains(&term)
                || animal
                    .farmer
                    .as_ref()
                    .is_some_and(|f| f.to_lowercase().contains(&term));
            if !hit {
                return false;
            }
        }

        if let Some(species) = &self.species {
            if animal.canonical_species() != species.to_lowercase() {
                return false;
            }
        }

        if let Some(status) = self.status {
            if withdrawal::readiness(animal, today) != status {
                return false;
            }
        }

        true
    }

    /// Filter a herd, preserving input order.
    pub fn apply<'a>(&self, animals: &'a [Animal], today: NaiveDate) -> Vec<&'a Animal> {
        animals.iter().filter(|a| self.matches(a, today)).collect()
    }
}

/// Sort orders for the treatment history view.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum TreatmentSort {
    /// Newest first
    Date,
    /// Fewest days remaining first
    DaysLeft,
    /// Animal name, ascending
    Animal,
}

/// Sort treatment records. `today` feeds the days-left order; ties keep
/// their relative input order.
pub fn sort_treatments<'a>(
    records: &'a [TreatmentRecord],
    sort: TreatmentSort,
    today: NaiveDate,
) -> Vec<&'a TreatmentRecord> {
    let mut sorted: Vec<&TreatmentRecord> = records.iter().collect();
    match sort {
        TreatmentSort::Date => sorted.sort_by(|a, b| b.date.cmp(&a.date)),
        TreatmentSort::DaysLeft => {
            sorted.sort_by_key(|r| r.days_remaining_on(today));
        }
        TreatmentSort::Animal => sorted.sort_by(|a, b| a.animal_name.cmp(&b.animal_name)),
    }
    sorted
}
