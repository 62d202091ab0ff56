use super::error::FareError;
use super::types::FareData;
use serde_json::Value;

/// Re-validates the model's JSON against the fare contract. The response
/// schema sent upstream constrains the model only on a best-effort basis,
/// so nothing from the model is forwarded until it passes this check.
pub fn validate_fare_data(raw: &Value) -> Result<FareData, FareError> {
    let data: FareData = serde_json::from_value(raw.clone())
        .map_err(|e| FareError::UpstreamMalformed(format!("shape mismatch: {e}")))?;

    if !data.distance_km.is_finite() || data.distance_km < 0.0 {
        return Err(FareError::UpstreamMalformed(format!(
            "distance_km must be a non-negative number, got {}",
            data.distance_km
        )));
    }
    if data.fares.is_empty() {
        return Err(FareError::UpstreamMalformed(
            "fares array is empty".to_string(),
        ));
    }
    for (i, fare) in data.fares.iter().enumerate() {
        if fare.transport.trim().is_empty()
            || fare.fare.trim().is_empty()
            || fare.notes.trim().is_empty()
        {
            return Err(FareError::UpstreamMalformed(format!(
                "fare entry {i} has a blank transport, fare or notes field"
            )));
        }
    }

    Ok(data)
}
