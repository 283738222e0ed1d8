//! Oil-change interval estimator.
//!
//! `estimate` is a pure function of the request, the interval source and the
//! injected current date. It never reads a clock.

use crate::estimation::table::{
    DrivingSeverity, IntervalSource, OilClass, StandardIntervals, VehicleClass,
};
use time::Date;

/// Severe driving conditions shorten the distance limit to 80%.
pub const SEVERE_DISTANCE_FACTOR: f64 = 0.8;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EstimationRequest {
    pub vehicle: VehicleClass,
    pub oil: OilClass,
    pub distance_driven_km: f64,
    pub last_change_date: Option<Date>,
    pub severity: DrivingSeverity,
}

impl EstimationRequest {
    pub fn new(vehicle: VehicleClass, oil: OilClass, distance_driven_km: f64) -> Self {
        Self {
            vehicle,
            oil,
            distance_driven_km,
            last_change_date: None,
            severity: DrivingSeverity::Normal,
        }
    }

    pub fn with_last_change_date(mut self, date: Date) -> Self {
        self.last_change_date = Some(date);
        self
    }

    pub fn with_severity(mut self, severity: DrivingSeverity) -> Self {
        self.severity = severity;
        self
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum EstimationResult {
    /// Distance was NaN, infinite or negative.
    InvalidInput,
    /// The interval source has no entry for the requested pair.
    InvalidConfiguration,
    DueByTime,
    Overdue { excess_km: f64 },
    RemainingDistance { remaining_km: u64 },
}

/// Estimate against the built-in interval table.
pub fn estimate_standard(request: &EstimationRequest, now: Date) -> EstimationResult {
    estimate(&StandardIntervals, request, now)
}

pub fn estimate(
    source: &dyn IntervalSource,
    request: &EstimationRequest,
    now: Date,
) -> EstimationResult {
    let distance_driven_km = request.distance_driven_km;
    if !distance_driven_km.is_finite() || distance_driven_km < 0.0 {
        return EstimationResult::InvalidInput;
    }

    let Some(recommendation) = source.lookup(request.vehicle, request.oil) else {
        return EstimationResult::InvalidConfiguration;
    };

    let mut limit_km = f64::from(recommendation.distance_limit_km);
    if request.severity == DrivingSeverity::Severe {
        limit_km *= SEVERE_DISTANCE_FACTOR;
    }

    // Not clamped: the sign decides between overdue and remaining.
    let remaining_km = limit_km - distance_driven_km;

    if let Some(last_change) = request.last_change_date
        && elapsed_months(last_change, now) > i64::from(recommendation.time_limit_months)
    {
        return EstimationResult::DueByTime;
    }

    if remaining_km <= 0.0 {
        return EstimationResult::Overdue {
            excess_km: remaining_km.abs(),
        };
    }

    EstimationResult::RemainingDistance {
        remaining_km: remaining_km.round() as u64,
    }
}

/// Whole calendar months between two dates, ignoring the day of month.
///
/// Jan 31 to Feb 1 counts as one month. Negative when `now` precedes `since`.
pub fn elapsed_months(since: Date, now: Date) -> i64 {
    let years = i64::from(now.year()) - i64::from(since.year());
    let months = i64::from(u8::from(now.month())) - i64::from(u8::from(since.month()));
    years * 12 + months
}
