//! Withdrawal-period arithmetic and sale-readiness classification.
//!
//! Everything here is a pure function of its inputs; the current date is
//! always injected by the caller.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::models::Animal;

/// Upper bound (inclusive) of the urgent band, in days remaining.
pub const URGENT_THRESHOLD_DAYS: u32 = 3;

/// Days left before a withdrawal period of `period` days, started on
/// `treated`, lapses.
///
/// Elapsed time is clamped to zero so a treatment date in the future (clock
/// skew) cannot inflate the result past `period`. Total over all date pairs.
pub fn remaining_days(period: u32, treated: NaiveDate, today: NaiveDate) -> u32 {
    let elapsed = (today - treated).num_days().max(0);
    (i64::from(period) - elapsed).max(0) as u32
}

/// Days until `animal`'s produce is safe to sell or consume.
///
/// Uses the animal's effective withdrawal period: its baseline, overridden by
/// any larger drug-level waiting period.
pub fn days_remaining(animal: &Animal, today: NaiveDate) -> u32 {
    remaining_days(animal.effective_withdrawal_period(), animal.last_medicine_date, today)
}

/// Sale-readiness of an animal, derived from its days remaining.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Readiness {
    /// Withdrawal period lapsed; safe to sell
    Ready,
    /// 1 to 3 days remaining
    Urgent,
    /// More than 3 days remaining
    Waiting,
}

impl Readiness {
    /// Classify a days-remaining value. Every value maps to exactly one band.
    pub fn classify(days_remaining: u32) -> Self {
        match days_remaining {
            0 => Readiness::Ready,
            d if d <= URGENT_THRESHOLD_DAYS => Readiness::Urgent,
            _ => Readiness::Waiting,
        }
    }

    /// Canonical lowercase name.
    pub fn as_str(&self) -> &'static str {
        match self {
            Readiness::Ready => "ready",
            Readiness::Urgent => "urgent",
            Readiness::Waiting => "waiting",
        }
    }
}

/// Classify an animal's readiness as of `today`.
pub fn readiness(animal: &Animal, today: NaiveDate) -> Readiness {
    Readiness::classify(days_remaining(animal, today))
}
