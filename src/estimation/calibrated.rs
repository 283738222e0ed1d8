//! Interval table loaded from a JSON file.
//!
//! ```json
//! { "car": { "synthetic": { "km": 15000, "months": 12 }, ... }, ... }
//! ```

use crate::estimation::CalibrationError;
use crate::estimation::table::{
    IntervalSource, OilClass, Recommendation, VehicleClass, all_combinations,
};
use serde_json::Value;
use std::collections::{BTreeMap, HashMap};

/// Wire shape of the interval file, keyed by vehicle then oil.
///
/// Vehicle keys stay as text until validation so that two spellings of the
/// same vehicle are caught instead of one silently replacing the other.
pub type IntervalFile = BTreeMap<String, HashMap<OilClass, Recommendation>>;

#[derive(Debug, Clone)]
pub struct CalibratedIntervals {
    entries: HashMap<(VehicleClass, OilClass), Recommendation>,
}

impl CalibratedIntervals {
    /// Builds a table from file contents. Every combination must be present
    /// exactly once with non-zero limits.
    pub fn from_file(file: IntervalFile) -> Result<Self, CalibrationError> {
        let mut entries = HashMap::new();
        let mut seen: HashMap<VehicleClass, String> = HashMap::new();
        for (key, oils) in file {
            let vehicle: VehicleClass = serde_json::from_value(Value::String(key.clone()))?;
            if let Some(previous) = seen.insert(vehicle, key.clone()) {
                return Err(CalibrationError::Invalid(format!(
                    "duplicate intervals for {vehicle:?} (\"{previous}\" and \"{key}\")"
                )));
            }
            for (oil, recommendation) in oils {
                if recommendation.distance_limit_km == 0 || recommendation.time_limit_months == 0 {
                    return Err(CalibrationError::Invalid(format!(
                        "zero limit for {vehicle:?}/{oil:?}"
                    )));
                }
                entries.insert((vehicle, oil), recommendation);
            }
        }

        let missing: Vec<String> = all_combinations()
            .filter(|key| !entries.contains_key(key))
            .map(|(vehicle, oil)| format!("{vehicle:?}/{oil:?}"))
            .collect();
        if !missing.is_empty() {
            return Err(CalibrationError::Invalid(format!(
                "missing intervals: {}",
                missing.join(", ")
            )));
        }

        Ok(Self { entries })
    }
}

impl IntervalSource for CalibratedIntervals {
    fn lookup(&self, vehicle: VehicleClass, oil: OilClass) -> Option<Recommendation> {
        self.entries.get(&(vehicle, oil)).copied()
    }

    fn name(&self) -> &'static str {
        "calibrated"
    }
}
