//! Treatment history models.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::withdrawal;

/// A single entry in the treatment history ledger.
///
/// One record per prescribed drug; the scheduled per-slot doses live on the
/// animal itself.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TreatmentRecord {
    /// Unique record ID
    pub id: String,
    /// Treated animal's herd identifier
    pub animal_id: String,
    /// Animal name at time of treatment (for display/export)
    pub animal_name: String,
    /// Species at time of treatment
    pub species: String,
    /// Owning farmer
    pub farmer: Option<String>,
    /// Prescribed drug name
    pub drug: String,
    /// Display dosage (per-slot texts joined)
    pub dose: String,
    /// Withdrawal period declared for this drug, in days
    pub waiting_period: u32,
    /// Administration date
    pub date: NaiveDate,
    /// Condition being treated
    pub reason: String,
    /// Prescribing veterinarian
    pub veterinarian: String,
    /// Additional notes
    pub notes: Option<String>,
    /// Creation timestamp
    pub created_at: String,
}

impl TreatmentRecord {
    /// Create a new record with required fields.
    pub fn new(animal_id: String, drug: String, waiting_period: u32, date: NaiveDate) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            animal_id,
            animal_name: String::new(),
            species: String::new(),
            farmer: None,
            drug,
            dose: String::new(),
            waiting_period,
            date,
            reason: String::new(),
            veterinarian: String::new(),
            notes: None,
            created_at: chrono::Utc::now().to_rfc3339(),
        }
    }

    /// Days until this record's own withdrawal period lapses.
    pub fn days_remaining_on(&self, today: NaiveDate) -> u32 {
        withdrawal::remaining_days(self.waiting_period, self.date, today)
    }

    /// A record is active while its withdrawal period is still running.
    pub fn is_active(&self, today: NaiveDate) -> bool {
        self.days_remaining_on(today) > 0
    }
}
