use std::path::Path;
use thiserror::Error;

pub mod calibrated;
pub mod estimator;
pub mod message;
pub mod table;

use calibrated::{CalibratedIntervals, IntervalFile};
use table::IntervalSource;

pub use estimator::{
    EstimationRequest, EstimationResult, SEVERE_DISTANCE_FACTOR, elapsed_months, estimate,
    estimate_standard,
};
pub use table::{
    DrivingSeverity, OilClass, Recommendation, StandardIntervals, VehicleClass, all_combinations,
};

#[derive(Debug, Error)]
pub enum CalibrationError {
    #[error("failed to read interval file: {0}")]
    Read(#[from] std::io::Error),
    #[error("failed to parse interval file: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("invalid interval table: {0}")]
    Invalid(String),
}

pub fn load_intervals_from_path(
    path: impl AsRef<Path>,
) -> Result<Box<dyn IntervalSource>, CalibrationError> {
    let contents = std::fs::read_to_string(path)?;
    let file: IntervalFile = serde_json::from_str(&contents)?;
    Ok(Box::new(CalibratedIntervals::from_file(file)?))
}
