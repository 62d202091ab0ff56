use serde_json::Value;
use std::sync::OnceLock;

/// Response schema handed to Gemini with every request. Kept as one static
/// literal so the contract is versioned with the code and never rebuilt per
/// request. The relay still re-validates the reply independently; the schema
/// is a best-effort constraint on the model, not a guarantee.
const FARE_SCHEMA_JSON: &str = r#"{
  "type": "OBJECT",
  "properties": {
    "distance_km": {
      "type": "NUMBER",
      "description": "The estimated travel distance in kilometers."
    },
    "fares": {
      "type": "ARRAY",
      "description": "A list of fare estimations for different transport modes.",
      "items": {
        "type": "OBJECT",
        "properties": {
          "transport": {
            "type": "STRING",
            "description": "Mode of transport (e.g., Local Bus, Rickshaw, CNG, Ride Sharing)."
          },
          "fare": {
            "type": "STRING",
            "description": "Estimated fare at the common, fair market rate, avoiding surge pricing. Can be a range (e.g., '300-400 BDT') or a specific value."
          },
          "notes": {
            "type": "STRING",
            "description": "Any relevant notes, e.g., 'Not practical for this distance' or 'Depends on traffic'."
          },
          "bus_names": {
            "type": "ARRAY",
            "description": "Common bus service names for this route. Only populate for the bus transport type.",
            "items": { "type": "STRING" }
          }
        },
        "required": ["transport", "fare", "notes"]
      }
    },
    "travel_tips": {
      "type": "ARRAY",
      "description": "A list of short, helpful travel tips for this specific journey.",
      "items": { "type": "STRING" }
    }
  },
  "required": ["distance_km", "fares", "travel_tips"]
}"#;

/// Parsed form of the schema literal. The first call parses it; the relay
/// binary calls this once at startup so a broken literal fails before the
/// server ever accepts a request.
pub fn fare_schema() -> &'static Value {
    static SCHEMA: OnceLock<Value> = OnceLock::new();
    SCHEMA.get_or_init(|| {
        serde_json::from_str(FARE_SCHEMA_JSON).expect("fare schema literal is valid JSON")
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn schema_literal_parses() {
        let schema = fare_schema();
        assert_eq!(schema["type"], "OBJECT");
    }

    #[test]
    fn schema_requires_the_three_top_level_fields() {
        let required = fare_schema()["required"].as_array().unwrap();
        let names: Vec<&str> = required.iter().filter_map(Value::as_str).collect();
        assert_eq!(names, ["distance_km", "fares", "travel_tips"]);
    }

    #[test]
    fn fare_items_require_transport_fare_and_notes() {
        let required =
            fare_schema()["properties"]["fares"]["items"]["required"].as_array().unwrap();
        let names: Vec<&str> = required.iter().filter_map(Value::as_str).collect();
        assert_eq!(names, ["transport", "fare", "notes"]);
    }
}
