use crate::estimation::{OilClass, VehicleClass};
use serde::Serialize;

#[derive(Debug, Serialize, PartialEq, Eq, Clone, Copy)]
#[serde(rename_all = "snake_case")]
pub enum EstimateStatus {
    Remaining,
    Overdue,
    DueByTime,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct EstimateSuccessResponse {
    pub status: EstimateStatus,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub remaining_km: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub excess_km: Option<f64>,
    pub timestamp: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct EstimateErrorResponse {
    pub error_code: EstimateErrorCode,
    pub error_message: String,
    pub timestamp: String,
}

#[derive(Debug, Serialize, PartialEq, Eq, Clone, Copy)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum EstimateErrorCode {
    InvalidRequest,
    InvalidInput,
    InvalidDate,
    InvalidConfiguration,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct IntervalsSuccessResponse {
    pub intervals: Vec<IntervalEntryResponse>,
    pub timestamp: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct IntervalEntryResponse {
    pub vehicle_type: VehicleClass,
    pub oil_type: OilClass,
    pub distance_limit_km: u32,
    pub time_limit_months: u32,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct IntervalsErrorResponse {
    pub error_code: IntervalsErrorCode,
    pub error_message: String,
    pub timestamp: String,
}

#[derive(Debug, Serialize, PartialEq, Eq, Clone, Copy)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum IntervalsErrorCode {
    InvalidConfiguration,
}

#[derive(Debug, Serialize, PartialEq, Eq, Clone, Copy)]
#[serde(rename_all = "lowercase")]
pub enum HealthStatus {
    Ok,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct HealthSuccessResponse {
    pub status: HealthStatus,
    pub timestamp: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn remaining_response_omits_excess_km() {
        let response = EstimateSuccessResponse {
            status: EstimateStatus::Remaining,
            message: "Remaining distance before oil change: 5000 km.".to_string(),
            remaining_km: Some(5_000),
            excess_km: None,
            timestamp: "2026-10-17T08:00:00Z".to_string(),
        };

        let value = serde_json::to_value(response).expect("serialize remaining response");
        assert_eq!(
            value,
            json!({
                "status": "remaining",
                "message": "Remaining distance before oil change: 5000 km.",
                "remaining_km": 5000,
                "timestamp": "2026-10-17T08:00:00Z"
            })
        );
    }

    #[test]
    fn due_by_time_response_omits_distances() {
        let response = EstimateSuccessResponse {
            status: EstimateStatus::DueByTime,
            message: "Oil change due based on time.".to_string(),
            remaining_km: None,
            excess_km: None,
            timestamp: "2026-10-17T08:01:00Z".to_string(),
        };

        let value = serde_json::to_value(response).expect("serialize due response");
        assert_eq!(
            value,
            json!({
                "status": "due_by_time",
                "message": "Oil change due based on time.",
                "timestamp": "2026-10-17T08:01:00Z"
            })
        );
    }

    #[test]
    fn error_response_uses_screaming_snake_case_code() {
        let response = EstimateErrorResponse {
            error_code: EstimateErrorCode::InvalidInput,
            error_message: "Please enter a valid distance.".to_string(),
            timestamp: "2026-10-17T08:02:00Z".to_string(),
        };

        let value = serde_json::to_value(response).expect("serialize error response");
        assert_eq!(
            value,
            json!({
                "error_code": "INVALID_INPUT",
                "error_message": "Please enter a valid distance.",
                "timestamp": "2026-10-17T08:02:00Z"
            })
        );
    }

    #[test]
    fn health_response_serializes_status() {
        let response = HealthSuccessResponse {
            status: HealthStatus::Ok,
            timestamp: "2026-10-17T08:03:00Z".to_string(),
        };

        let value = serde_json::to_value(response).expect("serialize health response");
        assert_eq!(
            value,
            json!({
                "status": "ok",
                "timestamp": "2026-10-17T08:03:00Z"
            })
        );
    }
}
