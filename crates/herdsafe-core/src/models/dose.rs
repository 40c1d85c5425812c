//! Scheduled dose models.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::ModelError;

/// The three fixed daily administration slots.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum TimeSlot {
    Morning,
    Afternoon,
    Evening,
}

impl TimeSlot {
    /// All slots, in day order.
    pub const ALL: [TimeSlot; 3] = [TimeSlot::Morning, TimeSlot::Afternoon, TimeSlot::Evening];

    /// Canonical lowercase name.
    pub fn as_str(&self) -> &'static str {
        match self {
            TimeSlot::Morning => "morning",
            TimeSlot::Afternoon => "afternoon",
            TimeSlot::Evening => "evening",
        }
    }
}

impl fmt::Display for TimeSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TimeSlot {
    type Err = ModelError;

    /// Parse a slot name. Anything outside the three defined slots is a
    /// data-integrity violation and is rejected here rather than being
    /// silently dropped from aggregation later.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "morning" => Ok(TimeSlot::Morning),
            "afternoon" => Ok(TimeSlot::Afternoon),
            "evening" => Ok(TimeSlot::Evening),
            other => Err(ModelError::InvalidTimeSlot(other.to_string())),
        }
    }
}

/// A single scheduled drug administration for one animal.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DrugDose {
    /// Unique dose identifier
    pub drug_id: String,
    /// Drug display name
    pub name: String,
    /// Free-text dosage description (e.g., "2 tablets", "1 ml")
    pub dose: String,
    /// Daily slot this dose is scheduled in
    pub time_slot: TimeSlot,
    /// Condition being treated
    pub disease: String,
    /// Drug-specific withdrawal period in days (0 = no restriction)
    pub waiting_days: u32,
    /// Baseline administered flag, set at record creation.
    /// Runtime toggling happens in [`crate::schedule::DoseLog`], never here.
    pub given: bool,
}

impl DrugDose {
    /// Create a new dose with a generated id.
    pub fn new(name: String, time_slot: TimeSlot, waiting_days: u32) -> Self {
        Self {
            drug_id: uuid::Uuid::new_v4().to_string(),
            name,
            dose: String::new(),
            time_slot,
            disease: String::new(),
            waiting_days,
            given: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slot_parse() {
        assert_eq!("morning".parse::<TimeSlot>().unwrap(), TimeSlot::Morning);
        assert_eq!("Afternoon".parse::<TimeSlot>().unwrap(), TimeSlot::Afternoon);
        assert_eq!(" evening ".parse::<TimeSlot>().unwrap(), TimeSlot::Evening);
    }

    #[test]
    fn test_slot_parse_rejects_unknown() {
        let err = "midnight".parse::<TimeSlot>().unwrap_err();
        assert!(matches!(err, ModelError::InvalidTimeSlot(s) if s == "midnight"));
    }

    #[test]
    fn test_slot_serde_lowercase() {
        let json = serde_json::to_string(&TimeSlot::Morning).unwrap();
        assert_eq!(json, r#""morning""#);

        let slot: TimeSlot = serde_json::from_str(r#""evening""#).unwrap();
        assert_eq!(slot, TimeSlot::Evening);

        assert!(serde_json::from_str::<TimeSlot>(r#""midnight""#).is_err());
    }

    #[test]
    fn test_new_dose() {
        let dose = DrugDose::new("Amoxicillin".into(), TimeSlot::Morning, 7);
        assert_eq!(dose.drug_id.len(), 36); // UUID format
        assert_eq!(dose.waiting_days, 7);
        assert!(!dose.given);
    }
}
