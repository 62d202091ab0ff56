use super::state::AppState;
use crate::sdk::fare::{validate_fare_data, ErrorEnvelope, FareError, FareQuery};
use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::routing::post;
use axum::{Json, Router};

/// Message returned to the client whenever the upstream call or its reply
/// goes wrong. Deliberately opaque: raw model output never crosses the
/// boundary on failure.
const CALCULATION_FAILED: &str = "Failed to calculate the fare for this route";

pub fn router(state: AppState) -> Router {
    Router::new()
        .route(
            "/api/fare",
            post(calculate_fare).fallback(method_not_allowed),
        )
        .with_state(state)
}

async fn calculate_fare(
    State(state): State<AppState>,
    payload: Result<Json<FareQuery>, JsonRejection>,
) -> Response {
    let query = match payload {
        Ok(Json(query)) => query,
        Err(rejection) => {
            log::warn!("Rejected fare request body: {}", rejection.body_text());
            return error_response(&FareError::InvalidInput);
        }
    };

    if !query.is_complete() {
        return error_response(&FareError::InvalidInput);
    }

    let raw = match state.oracle.estimate(&query).await {
        Ok(raw) => raw,
        Err(e) => {
            log::error!(
                "Fare estimation failed for \"{}\" -> \"{}\": {}",
                query.start,
                query.end,
                e
            );
            return error_response(&e);
        }
    };

    // The oracle is untrusted input: nothing is forwarded until the body
    // passes the fare contract check.
    match validate_fare_data(&raw) {
        Ok(data) => {
            log::info!(
                "Estimated {:.1} km, {} fares for \"{}\" -> \"{}\"",
                data.distance_km,
                data.fares.len(),
                query.start,
                query.end
            );
            (StatusCode::OK, Json(data)).into_response()
        }
        Err(e) => {
            log::error!("Upstream body failed re-validation: {}", e);
            error_response(&e)
        }
    }
}

async fn method_not_allowed() -> Response {
    (
        StatusCode::METHOD_NOT_ALLOWED,
        [(header::ALLOW, "POST")],
        Json(ErrorEnvelope::new("Method Not Allowed")),
    )
        .into_response()
}

fn error_response(err: &FareError) -> Response {
    let (status, message) = if err.is_client_fault() {
        (StatusCode::BAD_REQUEST, err.to_string())
    } else {
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            CALCULATION_FAILED.to_string(),
        )
    };
    (status, Json(ErrorEnvelope::new(message))).into_response()
}
