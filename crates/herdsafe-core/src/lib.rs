//! HerdSafe Core Library
//!
//! In-memory domain core for a livestock antimicrobial-usage portal:
//! withdrawal-period tracking, daily dose scheduling, and treatment history
//! for farm animals.
//!
//! # Architecture
//!
//! ```text
//!                         ┌──────────────────┐
//!                         │    HerdStore     │
//!                         │ animals + ledger │
//!                         └────────┬─────────┘
//!                 ┌────────────────┼────────────────┐
//!                 ▼                ▼                ▼
//!           Withdrawal          Schedule         Queries /
//!           Calculator         Aggregator        Analytics
//!          (days left,       (pending doses        │
//!           readiness)         per slot)           ▼
//!                 │                ▲             Export
//!                 │                │          (JSON / CSV)
//!                 ▼          ┌─────┴─────┐
//!            Readiness       │  DoseLog  │
//!           (ready/urgent/   │  session  │
//!              waiting)      │  overlay  │
//!                            └───────────┘
//! ```
//!
//! # Core Principle
//!
//! **Records are immutable; derived state is recomputed.** Dose toggling goes
//! through the session [`schedule::DoseLog`] overlay, and every calculation
//! takes the current date as an argument, so all derived views are pure
//! functions of the records.
//!
//! # Modules
//!
//! - [`models`]: Domain types (Animal, DrugDose, TreatmentRecord)
//! - [`store`]: In-memory herd store, seed loading, treatment intake
//! - [`withdrawal`]: Withdrawal-period math and readiness classification
//! - [`schedule`]: Per-slot dose aggregation and the session dose overlay
//! - [`screening`]: Banned-substance screening for prescribed drugs
//! - [`query`]: List filtering and sorting
//! - [`analytics`]: Dashboard summaries and notifications
//! - [`export`]: Withdrawal report export (JSON/CSV)

pub mod analytics;
pub mod export;
pub mod models;
pub mod query;
pub mod schedule;
pub mod screening;
pub mod store;
pub mod withdrawal;

// Re-export commonly used types
pub use models::{Animal, DrugDose, ModelError, TimeSlot, TreatmentRecord};
pub use schedule::{DoseLog, SlotCounts, SlotRoster};
pub use store::{DrugOrder, HerdStore, NewTreatment, Seed, StoreError, TreatmentOutcome};
pub use withdrawal::{days_remaining, readiness, Readiness};
