//! Domain types: animals, scheduled doses, treatment history.

mod animal;
mod dose;
mod treatment;

pub use animal::*;
pub use dose::*;
pub use treatment::*;

use thiserror::Error;

/// Model construction errors.
#[derive(Error, Debug)]
pub enum ModelError {
    #[error("Invalid time slot: {0}")]
    InvalidTimeSlot(String),
}
