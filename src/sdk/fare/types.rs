use serde::{Deserialize, Serialize};

// --- Wire shapes shared by the relay and the client ---

/// One fare lookup as submitted by the user. Both locations are free text.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct FareQuery {
    #[serde(default)]
    pub start: String,
    #[serde(default)]
    pub end: String,
}

impl FareQuery {
    pub fn new(start: &str, end: &str) -> Self {
        Self {
            start: start.to_string(),
            end: end.to_string(),
        }
    }

    /// True when both locations carry something besides whitespace.
    pub fn is_complete(&self) -> bool {
        !self.start.trim().is_empty() && !self.end.trim().is_empty()
    }
}

/// Fare estimate for a single transport mode.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct FareResult {
    pub transport: String,
    pub fare: String,
    pub notes: String,
    /// Common bus services on this route. Only populated for the bus mode.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bus_names: Option<Vec<String>>,
}

/// Successful relay response.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct FareData {
    pub distance_km: f64,
    pub fares: Vec<FareResult>,
    pub travel_tips: Vec<String>,
}

/// The single failure shape returned on any relay-side error.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct ErrorEnvelope {
    pub error: String,
}

impl ErrorEnvelope {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            error: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn query_completeness_trims_whitespace() {
        assert!(FareQuery::new("Uttara", "Motijheel").is_complete());
        assert!(!FareQuery::new("  ", "Motijheel").is_complete());
        assert!(!FareQuery::new("Uttara", "").is_complete());
    }

    #[test]
    fn query_tolerates_missing_fields_in_body() {
        let q: FareQuery = serde_json::from_str(r#"{"start": "Uttara"}"#).unwrap();
        assert_eq!(q.start, "Uttara");
        assert_eq!(q.end, "");
        assert!(!q.is_complete());
    }

    #[test]
    fn bus_names_are_omitted_when_absent() {
        let fare = FareResult {
            transport: "CNG".to_string(),
            fare: "250-300 BDT".to_string(),
            notes: "Negotiate before boarding".to_string(),
            bus_names: None,
        };
        let json = serde_json::to_string(&fare).unwrap();
        assert!(!json.contains("bus_names"));
    }
}
