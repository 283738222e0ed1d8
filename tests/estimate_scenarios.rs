use oil_interval::estimation::{
    DrivingSeverity, EstimationRequest, EstimationResult, OilClass, VehicleClass, estimate,
    estimate_standard, load_intervals_from_path,
};
use time::{Date, Month};

fn today() -> Result<Date, time::error::ComponentRange> {
    Date::from_calendar_date(2026, Month::October, 17)
}

#[test]
fn car_synthetic_at_limit_is_overdue_by_zero() -> Result<(), Box<dyn std::error::Error>> {
    let request = EstimationRequest::new(VehicleClass::Car, OilClass::Synthetic, 15_000.0);

    let result = estimate_standard(&request, today()?);

    assert_eq!(result, EstimationResult::Overdue { excess_km: 0.0 });
    assert_eq!(
        result.to_string(),
        "Oil change overdue! You've driven 0 km beyond the limit."
    );
    Ok(())
}

#[test]
fn car_synthetic_has_remaining_distance() -> Result<(), Box<dyn std::error::Error>> {
    let request = EstimationRequest::new(VehicleClass::Car, OilClass::Synthetic, 10_000.0);

    let result = estimate_standard(&request, today()?);

    assert_eq!(
        result,
        EstimationResult::RemainingDistance {
            remaining_km: 5_000
        }
    );
    Ok(())
}

#[test]
fn motorcycle_conventional_severe_uses_shortened_limit() -> Result<(), Box<dyn std::error::Error>> {
    let request = EstimationRequest::new(
        VehicleClass::MotorcycleHeavyDuty,
        OilClass::Conventional,
        3_000.0,
    )
    .with_severity(DrivingSeverity::Severe);

    let result = estimate_standard(&request, today()?);

    assert_eq!(
        result,
        EstimationResult::RemainingDistance {
            remaining_km: 1_800
        }
    );
    Ok(())
}

#[test]
fn car_semi_synthetic_changed_eight_months_ago_is_due() -> Result<(), Box<dyn std::error::Error>> {
    let last_change = Date::from_calendar_date(2026, Month::February, 5)?;
    let request = EstimationRequest::new(VehicleClass::Car, OilClass::SemiSynthetic, 1_000.0)
        .with_last_change_date(last_change);

    let result = estimate_standard(&request, today()?);

    assert_eq!(result, EstimationResult::DueByTime);
    Ok(())
}

#[test]
fn nan_distance_is_invalid_input() -> Result<(), Box<dyn std::error::Error>> {
    let request = EstimationRequest::new(VehicleClass::Car, OilClass::Synthetic, f64::NAN);

    let result = estimate_standard(&request, today()?);

    assert_eq!(result, EstimationResult::InvalidInput);
    Ok(())
}

#[test]
fn bundled_table_agrees_with_built_in_table() -> Result<(), Box<dyn std::error::Error>> {
    let source = load_intervals_from_path("config/intervals.json")?;
    let request = EstimationRequest::new(
        VehicleClass::MotorcycleHeavyDuty,
        OilClass::SemiSynthetic,
        2_000.0,
    );

    let calibrated = estimate(source.as_ref(), &request, today()?);
    let standard = estimate_standard(&request, today()?);

    assert_eq!(calibrated, standard);
    Ok(())
}
