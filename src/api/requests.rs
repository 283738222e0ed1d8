use crate::estimation::{DrivingSeverity, EstimationRequest, OilClass, VehicleClass};
use serde::Deserialize;
use time::Date;
use time::macros::format_description;

/// Body of `POST /api/estimate`, shaped after the calculator form.
#[derive(Debug, Clone, Deserialize)]
pub struct EstimateRequestBody {
    pub vehicle_type: VehicleClass,
    pub oil_type: OilClass,
    #[serde(default)]
    pub distance_driven_km: Option<DistanceField>,
    #[serde(default)]
    pub last_change_date: Option<String>,
    #[serde(default)]
    pub driving_conditions: DrivingSeverity,
}

/// The form submits the distance as text; API clients may send a number.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum DistanceField {
    Km(f64),
    Text(String),
}

impl DistanceField {
    /// Unparseable text maps to NaN so the estimator reports invalid input.
    pub fn km(&self) -> f64 {
        match self {
            DistanceField::Km(km) => *km,
            DistanceField::Text(text) => text.trim().parse().unwrap_or(f64::NAN),
        }
    }
}

impl EstimateRequestBody {
    /// A missing or null distance maps to NaN, like an empty form field.
    pub fn distance_km(&self) -> f64 {
        self.distance_driven_km
            .as_ref()
            .map_or(f64::NAN, DistanceField::km)
    }

    pub fn to_request(&self) -> Result<EstimationRequest, time::error::Parse> {
        let mut request =
            EstimationRequest::new(self.vehicle_type, self.oil_type, self.distance_km())
                .with_severity(self.driving_conditions);

        if let Some(date) = parse_last_change_date(self.last_change_date.as_deref())? {
            request = request.with_last_change_date(date);
        }
        Ok(request)
    }
}

/// `None` or an empty string means no date was entered.
pub fn parse_last_change_date(text: Option<&str>) -> Result<Option<Date>, time::error::Parse> {
    match text.map(str::trim) {
        None | Some("") => Ok(None),
        Some(text) => Date::parse(text, format_description!("[year]-[month]-[day]")).map(Some),
    }
}
