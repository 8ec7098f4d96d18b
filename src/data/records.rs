// Record types module
// Fixed-field records returned verbatim by the responder

use serde::Serialize;

/// Patient summary shown on the patient home screen
///
/// Every field is opaque text; dates are not validated.
#[derive(Debug, Serialize, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct PatientRecord {
    pub patient_name: String,
    pub next_transfusion_date: String,
    pub hospital_name: String,
    pub pod_name: String,
    pub pod_status: String,
    pub status_message: String,
}

/// Donor summary shown on the donor home screen
#[derive(Debug, Serialize, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct DonorRecord {
    pub donor_name: String,
    pub greeting: String,
    pub is_eligible: bool,
    pub lives_saved: u32,
    pub donation_count: u32,
    pub pod_news: String,
}
