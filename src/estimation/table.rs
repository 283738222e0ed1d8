//! Recommended oil-change intervals per vehicle and oil class.
//!
//! The built-in [`StandardIntervals`] matches over both enumerations, so a new
//! vehicle or oil class does not compile until its limits are filled in.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VehicleClass {
    Car,
    #[serde(alias = "royal_enfield")]
    MotorcycleHeavyDuty,
}

impl VehicleClass {
    pub const ALL: [VehicleClass; 2] = [VehicleClass::Car, VehicleClass::MotorcycleHeavyDuty];
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OilClass {
    Synthetic,
    SemiSynthetic,
    Conventional,
}

impl OilClass {
    pub const ALL: [OilClass; 3] = [
        OilClass::Synthetic,
        OilClass::SemiSynthetic,
        OilClass::Conventional,
    ];
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DrivingSeverity {
    #[default]
    Normal,
    Severe,
}

/// Distance and time limits for one (vehicle, oil) combination.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Recommendation {
    #[serde(rename = "km")]
    pub distance_limit_km: u32,
    #[serde(rename = "months")]
    pub time_limit_months: u32,
}

impl Recommendation {
    pub const fn new(distance_limit_km: u32, time_limit_months: u32) -> Self {
        Self {
            distance_limit_km,
            time_limit_months,
        }
    }
}

/// Source of interval recommendations used by the estimator.
///
/// `None` means the combination is not configured. The estimator reports
/// that as an invalid configuration instead of guessing a limit.
pub trait IntervalSource: Send + Sync + std::fmt::Debug {
    fn lookup(&self, vehicle: VehicleClass, oil: OilClass) -> Option<Recommendation>;

    /// Name reported in logs when the source is selected at startup.
    fn name(&self) -> &'static str;
}

/// Every (vehicle, oil) pair in declaration order.
pub fn all_combinations() -> impl Iterator<Item = (VehicleClass, OilClass)> {
    VehicleClass::ALL
        .into_iter()
        .flat_map(|vehicle| OilClass::ALL.into_iter().map(move |oil| (vehicle, oil)))
}

#[derive(Debug, Clone, Copy, Default)]
pub struct StandardIntervals;

impl StandardIntervals {
    pub const fn recommendation(vehicle: VehicleClass, oil: OilClass) -> Recommendation {
        match (vehicle, oil) {
            (VehicleClass::Car, OilClass::Synthetic) => Recommendation::new(15_000, 12),
            (VehicleClass::Car, OilClass::SemiSynthetic) => Recommendation::new(10_000, 6),
            (VehicleClass::Car, OilClass::Conventional) => Recommendation::new(7_500, 6),
            (VehicleClass::MotorcycleHeavyDuty, OilClass::Synthetic) => {
                Recommendation::new(10_000, 12)
            }
            (VehicleClass::MotorcycleHeavyDuty, OilClass::SemiSynthetic) => {
                Recommendation::new(8_000, 9)
            }
            (VehicleClass::MotorcycleHeavyDuty, OilClass::Conventional) => {
                Recommendation::new(6_000, 6)
            }
        }
    }
}

impl IntervalSource for StandardIntervals {
    fn lookup(&self, vehicle: VehicleClass, oil: OilClass) -> Option<Recommendation> {
        Some(Self::recommendation(vehicle, oil))
    }

    fn name(&self) -> &'static str {
        "standard"
    }
}
