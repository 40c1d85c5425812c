//! Daily dose-schedule aggregation.
//!
//! Partitions pending doses across the three daily slots. A dose is pending
//! iff its baseline `given` flag is false and it has not been marked given in
//! the session [`DoseLog`].

mod doselog;

pub use doselog::*;

use serde::{Deserialize, Serialize};

use crate::models::{Animal, DrugDose, TimeSlot};

/// Pending-dose tallies per daily slot.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct SlotCounts {
    pub morning: usize,
    pub afternoon: usize,
    pub evening: usize,
}

impl SlotCounts {
    /// Tally for one slot.
    pub fn get(&self, slot: TimeSlot) -> usize {
        match slot {
            TimeSlot::Morning => self.morning,
            TimeSlot::Afternoon => self.afternoon,
            TimeSlot::Evening => self.evening,
        }
    }

    /// Total pending doses across all slots.
    pub fn total(&self) -> usize {
        self.morning + self.afternoon + self.evening
    }
}

/// An animal with its pending doses for one slot.
///
/// The animal is borrowed unchanged; `pending` holds only that animal's
/// pending doses in the requested slot.
#[derive(Debug, Clone)]
pub struct SlotRoster<'a> {
    pub animal: &'a Animal,
    pub pending: Vec<&'a DrugDose>,
}

fn is_pending(dose: &DrugDose, log: &DoseLog) -> bool {
    !log.is_administered(dose)
}

/// Tally pending doses per slot across the whole herd.
pub fn pending_counts_by_slot(animals: &[Animal], log: &DoseLog) -> SlotCounts {
    let mut counts = SlotCounts::default();
    for dose in animals.iter().flat_map(|a| a.drugs.iter()) {
        if is_pending(dose, log) {
            match dose.time_slot {
                TimeSlot::Morning => counts.morning += 1,
                TimeSlot::Afternoon => counts.afternoon += 1,
                TimeSlot::Evening => counts.evening += 1,
            }
        }
    }
    counts
}

/// Animals with at least one pending dose in `slot`, in input order.
pub fn animals_pending_for_slot<'a>(
    animals: &'a [Animal],
    log: &DoseLog,
    slot: TimeSlot,
) -> Vec<SlotRoster<'a>> {
    animals
        .iter()
        .filter_map(|animal| {
            let pending: Vec<&DrugDose> = animal
                .drugs
                .iter()
                .filter(|d| d.time_slot == slot && is_pending(d, log))
                .collect();
            if pending.is_empty() {
                None
            } else {
                Some(SlotRoster { animal, pending })
            }
        })
        .collect()
}
