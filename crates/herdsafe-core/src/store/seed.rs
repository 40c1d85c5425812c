//! Seed dataset loading.
//!
//! The schema is defined once and a single fixture is injected here, instead
//! of duplicating record literals in every consumer.

use serde::{Deserialize, Serialize};

use super::{HerdStore, StoreResult};
use crate::models::{Animal, TreatmentRecord};

/// A seed dataset: animals plus their treatment history.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Seed {
    #[serde(default)]
    pub animals: Vec<Animal>,
    #[serde(default)]
    pub treatments: Vec<TreatmentRecord>,
}

impl HerdStore {
    /// Build a store from a seed dataset. Animal ids must be unique; the
    /// dose overlay starts empty.
    pub fn from_seed(seed: Seed) -> StoreResult<Self> {
        let mut store = Self::new();
        for animal in seed.animals {
            store.add_animal(animal)?;
        }
        store.treatments = seed.treatments;
        Ok(store)
    }

    /// Build a store from a JSON seed document. Malformed records (unknown
    /// time slots included) fail here rather than surfacing later as missing
    /// aggregation rows.
    pub fn from_json(json: &str) -> StoreResult<Self> {
        let seed: Seed = serde_json::from_str(json)?;
        Self::from_seed(seed)
    }
}
