use crate::api::requests::EstimateRequestBody;
use crate::api::responses::{
    EstimateErrorCode, EstimateErrorResponse, EstimateStatus, EstimateSuccessResponse,
    HealthStatus, HealthSuccessResponse, IntervalEntryResponse, IntervalsErrorCode,
    IntervalsErrorResponse, IntervalsSuccessResponse,
};
use crate::estimation::{EstimationResult, all_combinations, estimate};
use crate::state::AppState;
use axum::Json;
use axum::extract::State;
use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use std::sync::Arc;
use time::OffsetDateTime;
use time::format_description::well_known::Rfc3339;
use tracing::{debug, error};

const INTERNAL_ERROR_MESSAGE: &str = "Internal server error";
const FALLBACK_TIMESTAMP: &str = "1970-01-01T00:00:00Z";

pub enum EstimateResponse {
    Success(EstimateSuccessResponse),
    Error {
        status: StatusCode,
        body: EstimateErrorResponse,
    },
}

impl IntoResponse for EstimateResponse {
    fn into_response(self) -> Response {
        match self {
            EstimateResponse::Success(body) => (StatusCode::OK, Json(body)).into_response(),
            EstimateResponse::Error { status, body } => (status, Json(body)).into_response(),
        }
    }
}

pub async fn post_estimate(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<EstimateRequestBody>, JsonRejection>,
) -> impl IntoResponse {
    let now = OffsetDateTime::now_utc();
    match payload {
        Ok(Json(body)) => build_estimate_response(&state, &body, now),
        Err(rejection) => rejected_body_response(&rejection, now),
    }
}

pub enum IntervalsResponse {
    Success(IntervalsSuccessResponse),
    Error {
        status: StatusCode,
        body: IntervalsErrorResponse,
    },
}

impl IntoResponse for IntervalsResponse {
    fn into_response(self) -> Response {
        match self {
            IntervalsResponse::Success(body) => (StatusCode::OK, Json(body)).into_response(),
            IntervalsResponse::Error { status, body } => (status, Json(body)).into_response(),
        }
    }
}

pub async fn get_intervals(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    build_intervals_response(&state, OffsetDateTime::now_utc())
}

pub async fn get_health() -> impl IntoResponse {
    (
        StatusCode::OK,
        Json(build_health_response(OffsetDateTime::now_utc())),
    )
}

fn build_health_response(now: OffsetDateTime) -> HealthSuccessResponse {
    HealthSuccessResponse {
        status: HealthStatus::Ok,
        timestamp: format_timestamp(now),
    }
}

/// Body could not be read as an estimate request (bad JSON, unknown enum value).
fn rejected_body_response(rejection: &JsonRejection, now: OffsetDateTime) -> EstimateResponse {
    debug!(error = %rejection.body_text(), "Rejected estimate request body");
    estimate_error(
        StatusCode::BAD_REQUEST,
        EstimateErrorCode::InvalidRequest,
        rejection.body_text(),
        now,
    )
}

fn build_estimate_response(
    state: &AppState,
    body: &EstimateRequestBody,
    now: OffsetDateTime,
) -> EstimateResponse {
    let request = match body.to_request() {
        Ok(request) => request,
        Err(err) => {
            debug!(error = %err, "Rejected last_change_date");
            return estimate_error(
                StatusCode::BAD_REQUEST,
                EstimateErrorCode::InvalidDate,
                "last_change_date must be formatted as YYYY-MM-DD".to_string(),
                now,
            );
        }
    };

    let result = estimate(state.intervals(), &request, now.date());
    debug!(
        vehicle = ?request.vehicle,
        oil = ?request.oil,
        severity = ?request.severity,
        result = ?result,
        "Estimated oil change interval"
    );

    let (status, remaining_km, excess_km) = match result {
        EstimationResult::InvalidInput => {
            return estimate_error(
                StatusCode::BAD_REQUEST,
                EstimateErrorCode::InvalidInput,
                result.to_string(),
                now,
            );
        }
        EstimationResult::InvalidConfiguration => {
            error!(
                source = state.intervals().name(),
                vehicle = ?request.vehicle,
                oil = ?request.oil,
                "Interval table has no entry for requested combination"
            );
            return estimate_error(
                StatusCode::INTERNAL_SERVER_ERROR,
                EstimateErrorCode::InvalidConfiguration,
                result.to_string(),
                now,
            );
        }
        EstimationResult::DueByTime => (EstimateStatus::DueByTime, None, None),
        EstimationResult::Overdue { excess_km } => {
            (EstimateStatus::Overdue, None, Some(excess_km))
        }
        EstimationResult::RemainingDistance { remaining_km } => {
            (EstimateStatus::Remaining, Some(remaining_km), None)
        }
    };

    EstimateResponse::Success(EstimateSuccessResponse {
        status,
        message: result.to_string(),
        remaining_km,
        excess_km,
        timestamp: format_timestamp(now),
    })
}

fn estimate_error(
    status: StatusCode,
    error_code: EstimateErrorCode,
    error_message: String,
    now: OffsetDateTime,
) -> EstimateResponse {
    EstimateResponse::Error {
        status,
        body: EstimateErrorResponse {
            error_code,
            error_message,
            timestamp: format_timestamp(now),
        },
    }
}

fn build_intervals_response(state: &AppState, now: OffsetDateTime) -> IntervalsResponse {
    let source = state.intervals();
    let mut intervals = Vec::new();
    for (vehicle, oil) in all_combinations() {
        match source.lookup(vehicle, oil) {
            Some(recommendation) => intervals.push(IntervalEntryResponse {
                vehicle_type: vehicle,
                oil_type: oil,
                distance_limit_km: recommendation.distance_limit_km,
                time_limit_months: recommendation.time_limit_months,
            }),
            None => {
                error!(
                    source = source.name(),
                    vehicle = ?vehicle,
                    oil = ?oil,
                    "Internal error while handling /api/intervals"
                );
                return IntervalsResponse::Error {
                    status: StatusCode::INTERNAL_SERVER_ERROR,
                    body: IntervalsErrorResponse {
                        error_code: IntervalsErrorCode::InvalidConfiguration,
                        error_message: INTERNAL_ERROR_MESSAGE.to_string(),
                        timestamp: format_timestamp(now),
                    },
                };
            }
        }
    }

    IntervalsResponse::Success(IntervalsSuccessResponse {
        intervals,
        timestamp: format_timestamp(now),
    })
}

fn format_timestamp(timestamp: OffsetDateTime) -> String {
    timestamp.format(&Rfc3339).unwrap_or_else(|err| {
        error!(error = %err, "Failed to format response timestamp");
        FALLBACK_TIMESTAMP.to_string()
    })
}
