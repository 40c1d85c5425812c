//! Derived dashboard numbers.
//!
//! Everything here is recomputed from the records on demand; there is no
//! hidden cache. All counts are deterministic: map-backed tallies are
//! returned sorted by count (descending) then name.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::models::{Animal, TreatmentRecord};
use crate::withdrawal::{self, Readiness};

/// Herd-wide readiness counts.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct HerdSummary {
    pub total: usize,
    pub waiting: usize,
    pub ready: usize,
    pub urgent: usize,
}

/// Summarize a herd's readiness as of `today`.
///
/// `urgent` animals are also counted in `waiting`: their period is still
/// running, they are just close to the end.
pub fn herd_summary(animals: &[Animal], today: NaiveDate) -> HerdSummary {
    let mut summary = HerdSummary {
        total: animals.len(),
        ..Default::default()
    };
    for animal in animals {
        match withdrawal::readiness(animal, today) {
            Readiness::Ready => summary.ready += 1,
            Readiness::Urgent => {
                summary.urgent += 1;
                summary.waiting += 1;
            }
            Readiness::Waiting => summary.waiting += 1,
        }
    }
    summary
}

/// Treatment-ledger status counts.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct TreatmentSummary {
    pub total: usize,
    pub active: usize,
    pub completed: usize,
    pub urgent: usize,
}

/// Summarize the treatment ledger as of `today`.
pub fn treatment_summary(records: &[TreatmentRecord], today: NaiveDate) -> TreatmentSummary {
    let mut summary = TreatmentSummary {
        total: records.len(),
        ..Default::default()
    };
    for record in records {
        let left = record.days_remaining_on(today);
        if left == 0 {
            summary.completed += 1;
        } else {
            summary.active += 1;
            if Readiness::classify(left) == Readiness::Urgent {
                summary.urgent += 1;
            }
        }
    }
    summary
}

/// Per-drug prescription counts, most used first.
pub fn drug_usage(records: &[TreatmentRecord]) -> Vec<(String, usize)> {
    ranked_counts(records.iter().map(|r| r.drug.clone()))
}

/// Animal counts per canonical species, largest first.
pub fn species_breakdown(animals: &[Animal]) -> Vec<(String, usize)> {
    ranked_counts(animals.iter().map(|a| a.canonical_species()))
}

/// Treated-condition counts, most common first.
pub fn disease_frequency(records: &[TreatmentRecord]) -> Vec<(String, usize)> {
    ranked_counts(records.iter().filter(|r| !r.reason.is_empty()).map(|r| r.reason.clone()))
}

fn ranked_counts(keys: impl Iterator<Item = String>) -> Vec<(String, usize)> {
    let mut counts: BTreeMap<String, usize> = BTreeMap::new();
    for key in keys {
        *counts.entry(key).or_default() += 1;
    }
    let mut ranked: Vec<(String, usize)> = counts.into_iter().collect();
    ranked.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
    ranked
}

/// Per-farmer activity rollup.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct FarmerActivity {
    pub farmer: String,
    /// Animals registered to this farmer
    pub total_animals: usize,
    /// Of those, animals with a running withdrawal period
    pub active_animals: usize,
    /// Ledger entries for this farmer's animals
    pub treatments: usize,
}

/// Roll up activity per farmer, busiest (most treatments) first.
pub fn farmer_activity(
    animals: &[Animal],
    records: &[TreatmentRecord],
    today: NaiveDate,
) -> Vec<FarmerActivity> {
    let mut by_farmer: BTreeMap<String, FarmerActivity> = BTreeMap::new();

    for animal in animals {
        let Some(farmer) = &animal.farmer else { continue };
        let entry = by_farmer
            .entry(farmer.clone())
            .or_insert_with(|| FarmerActivity {
                farmer: farmer.clone(),
                total_animals: 0,
                active_animals: 0,
                treatments: 0,
            });
        entry.total_animals += 1;
        if withdrawal::days_remaining(animal, today) > 0 {
            entry.active_animals += 1;
        }
    }

    for record in records {
        let Some(farmer) = &record.farmer else { continue };
        if let Some(entry) = by_farmer.get_mut(farmer) {
            entry.treatments += 1;
        }
    }

    let mut activity: Vec<FarmerActivity> = by_farmer.into_values().collect();
    activity.sort_by(|a, b| b.treatments.cmp(&a.treatments).then_with(|| a.farmer.cmp(&b.farmer)));
    activity
}

/// Notification severity.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum NotificationKind {
    Warning,
    Success,
}

/// A dashboard notification for one animal.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Notification {
    pub kind: NotificationKind,
    pub animal_id: String,
    pub message: String,
}

/// Per-animal notifications: a warning for each animal whose waiting period
/// ends soon, a success for each one that is ready for sale. Herd order is
/// preserved.
pub fn notifications(animals: &[Animal], today: NaiveDate) -> Vec<Notification> {
    animals
        .iter()
        .filter_map(|animal| {
            let left = withdrawal::days_remaining(animal, today);
            match Readiness::classify(left) {
                Readiness::Ready => Some(Notification {
                    kind: NotificationKind::Success,
                    animal_id: animal.animal_id.clone(),
                    message: format!("{} is ready for sale", animal.animal_id),
                }),
                Readiness::Urgent => Some(Notification {
                    kind: NotificationKind::Warning,
                    animal_id: animal.animal_id.clone(),
                    message: format!(
                        "{} waiting period ends in {} day{}",
                        animal.animal_id,
                        left,
                        if left == 1 { "" } else { "s" }
                    ),
                }),
                Readiness::Waiting => None,
            }
        })
        .collect()
}
