//! Withdrawal report export.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::models::Animal;
use crate::withdrawal::{self, Readiness};

/// A withdrawal-status report over a herd.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WithdrawalReport {
    /// Date the report describes
    pub as_of: NaiveDate,
    /// Export timestamp
    pub exported_at: String,
    /// One row per animal, in herd order
    pub rows: Vec<WithdrawalRow>,
}

/// Withdrawal status for a single animal.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WithdrawalRow {
    pub animal_id: String,
    pub name: String,
    pub species: String,
    pub farmer: Option<String>,
    pub last_treated: NaiveDate,
    /// Effective withdrawal period in days
    pub waiting_period: u32,
    pub days_remaining: u32,
    pub status: Readiness,
}

impl WithdrawalReport {
    /// Build a report over `animals` as of `today`.
    pub fn build(animals: &[Animal], today: NaiveDate) -> Self {
        let rows = animals
            .iter()
            .map(|animal| {
                let days_remaining = withdrawal::days_remaining(animal, today);
                WithdrawalRow {
                    animal_id: animal.animal_id.clone(),
                    name: animal.name.clone(),
                    species: animal.species.clone(),
                    farmer: animal.farmer.clone(),
                    last_treated: animal.last_medicine_date,
                    waiting_period: animal.effective_withdrawal_period(),
                    days_remaining,
                    status: Readiness::classify(days_remaining),
                }
            })
            .collect();

        Self {
            as_of: today,
            exported_at: chrono::Utc::now().to_rfc3339(),
            rows,
        }
    }

    /// Export to JSON.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Export to CSV format.
    pub fn to_csv(&self) -> String {
        let mut csv = String::new();

        // Header
        csv.push_str(
            "animal_id,name,species,farmer,last_treated,waiting_period,days_remaining,status\n",
        );

        // Rows
        for row in &self.rows {
            csv.push_str(&format!(
                "{},{},{},{},{},{},{},{}\n",
                escape_csv(&row.animal_id),
                escape_csv(&row.name),
                escape_csv(&row.species),
                row.farmer.as_deref().map(escape_csv).unwrap_or_default(),
                row.last_treated,
                row.waiting_period,
                row.days_remaining,
                row.status.as_str(),
            ));
        }

        csv
    }
}

/// Escape a string for CSV output.
fn escape_csv(s: &str) -> String {
    if s.contains(',') || s.contains('"') || s.contains('\n') {
        format!("\"{}\"", s.replace('"', "\"\""))
    } else {
        s.to_string()
    }
}
