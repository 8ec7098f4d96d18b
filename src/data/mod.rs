//! Mock data module
//!
//! Holds the hardcoded patient and donor records served to the mobile app.
//! Nothing here is ever mutated after startup.

mod records;
mod store;

pub use records::{DonorRecord, PatientRecord};
pub use store::MockData;
