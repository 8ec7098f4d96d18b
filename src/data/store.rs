// Mock data store module
// Read-only lookup tables built once before the listener starts

use std::collections::HashMap;

use super::records::{DonorRecord, PatientRecord};

/// Immutable patient and donor tables
#[derive(Debug, Clone, Default)]
pub struct MockData {
    patients: HashMap<String, PatientRecord>,
    donors: HashMap<String, DonorRecord>,
}

impl MockData {
    /// Build the tables with the fixture records the app is developed against
    pub fn seeded() -> Self {
        let mut patients = HashMap::new();
        patients.insert(
            "1".to_string(),
            PatientRecord {
                patient_name: "Anjali Sharma".to_string(),
                next_transfusion_date: "2025-08-15".to_string(),
                hospital_name: "Apollo Hospital, Jubilee Hills".to_string(),
                pod_name: "Apollo Jubilee Warriors".to_string(),
                pod_status: "Strong (12/15 Active)".to_string(),
                status_message: "Confirmed. Donors are being arranged.".to_string(),
            },
        );

        let mut donors = HashMap::new();
        donors.insert(
            "101".to_string(),
            DonorRecord {
                donor_name: "Rohan".to_string(),
                greeting: "Your Pod needs you!".to_string(),
                is_eligible: true,
                lives_saved: 6,
                donation_count: 2,
                pod_news: "A child in your pod has a transfusion scheduled for Aug 15th. \
                           Your A+ blood can make a difference."
                    .to_string(),
            },
        );

        Self { patients, donors }
    }

    pub fn patient(&self, id: &str) -> Option<&PatientRecord> {
        self.patients.get(id)
    }

    pub fn donor(&self, id: &str) -> Option<&DonorRecord> {
        self.donors.get(id)
    }

    pub fn patient_count(&self) -> usize {
        self.patients.len()
    }

    pub fn donor_count(&self) -> usize {
        self.donors.len()
    }
}
