//! Route table module
//!
//! The fixed, ordered set of literal paths the responder recognizes and the
//! payload each one selects.

use serde::Serialize;
use serde_json::{Map, Value};

use crate::data::{DonorRecord, MockData, PatientRecord};

/// Value of the root route's only field
pub const PROJECT_DESCRIPTION: &str = "Jeevan-Setu Mock Backend (Standard Library)";

/// Donor id every match query answers with
pub const BEST_MATCH_DONOR_ID: &str = "101";

/// A recognized route
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    Project,
    Patient(&'static str),
    Donor(&'static str),
    BestMatch,
}

/// Literal paths, checked in order with exact string equality
const ROUTES: &[(&str, Route)] = &[
    ("/", Route::Project),
    ("/patients/1", Route::Patient("1")),
    ("/donors/101", Route::Donor("101")),
    ("/donors/match", Route::BestMatch),
];

/// Find the route for `path`, if any
///
/// No normalization happens: `/patients/1/` and `/Patients/1` do not match.
pub fn match_route(path: &str) -> Option<Route> {
    ROUTES
        .iter()
        .find(|(literal, _)| *literal == path)
        .map(|(_, route)| *route)
}

/// Response body selected for a request
#[derive(Debug, Serialize, PartialEq)]
#[serde(untagged)]
pub enum Payload<'a> {
    Project {
        #[serde(rename = "Project")]
        project: &'static str,
    },
    Patient(&'a PatientRecord),
    Donor(&'a DonorRecord),
    BestMatch {
        best_match_donor_id: &'static str,
    },
    /// Serializes as `{}`
    Empty(Map<String, Value>),
}

impl Payload<'_> {
    pub fn empty() -> Self {
        Self::Empty(Map::new())
    }
}

impl Route {
    /// Select the payload for this route; a record missing from its table
    /// yields the empty object
    pub fn payload(self, data: &MockData) -> Payload<'_> {
        match self {
            Self::Project => Payload::Project {
                project: PROJECT_DESCRIPTION,
            },
            Self::Patient(id) => data.patient(id).map_or_else(Payload::empty, Payload::Patient),
            Self::Donor(id) => data.donor(id).map_or_else(Payload::empty, Payload::Donor),
            Self::BestMatch => Payload::BestMatch {
                best_match_donor_id: BEST_MATCH_DONOR_ID,
            },
        }
    }
}

/// Payload for any path, matched or not
pub fn select_payload<'a>(path: &str, data: &'a MockData) -> Payload<'a> {
    match_route(path).map_or_else(Payload::empty, |route| route.payload(data))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_match_exact_literals() {
        assert_eq!(match_route("/"), Some(Route::Project));
        assert_eq!(match_route("/patients/1"), Some(Route::Patient("1")));
        assert_eq!(match_route("/donors/101"), Some(Route::Donor("101")));
        assert_eq!(match_route("/donors/match"), Some(Route::BestMatch));
    }

    #[test]
    fn test_no_normalization() {
        assert_eq!(match_route(""), None);
        assert_eq!(match_route("/patients/1/"), None);
        assert_eq!(match_route("/patients/1/extra"), None);
        assert_eq!(match_route("/patients/2"), None);
        assert_eq!(match_route("/PATIENTS/1"), None);
        assert_eq!(match_route("//"), None);
        assert_eq!(match_route("/donors"), None);
    }

    #[test]
    fn test_payload_lookup() {
        let data = MockData::seeded();
        assert_eq!(
            Route::Patient("1").payload(&data),
            Payload::Patient(data.patient("1").unwrap())
        );
        assert_eq!(
            Route::Donor("101").payload(&data),
            Payload::Donor(data.donor("101").unwrap())
        );
    }

    #[test]
    fn test_missing_record_is_empty() {
        let data = MockData::default();
        assert_eq!(Route::Patient("1").payload(&data), Payload::empty());
        assert_eq!(Route::Donor("101").payload(&data), Payload::empty());
        // Constant routes do not depend on the tables
        assert_ne!(Route::BestMatch.payload(&data), Payload::empty());
    }

    #[test]
    fn test_payload_serialization() {
        let data = MockData::seeded();
        let project = serde_json::to_value(select_payload("/", &data)).unwrap();
        assert_eq!(project, serde_json::json!({"Project": PROJECT_DESCRIPTION}));

        let matched = serde_json::to_value(select_payload("/donors/match", &data)).unwrap();
        assert_eq!(matched, serde_json::json!({"best_match_donor_id": "101"}));

        let empty = serde_json::to_string(&select_payload("/unknown", &data)).unwrap();
        assert_eq!(empty, "{}");
    }
}
