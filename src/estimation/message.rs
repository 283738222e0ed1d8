use crate::estimation::estimator::EstimationResult;
use std::fmt;

impl fmt::Display for EstimationResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EstimationResult::InvalidInput => write!(f, "Please enter a valid distance."),
            EstimationResult::InvalidConfiguration => {
                write!(f, "Invalid vehicle type or oil type.")
            }
            EstimationResult::DueByTime => write!(f, "Oil change due based on time."),
            EstimationResult::Overdue { excess_km } => write!(
                f,
                "Oil change overdue! You've driven {excess_km} km beyond the limit."
            ),
            EstimationResult::RemainingDistance { remaining_km } => write!(
                f,
                "Remaining distance before oil change: {remaining_km} km."
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn overdue_message_drops_trailing_zero_fraction() {
        let result = EstimationResult::Overdue { excess_km: 250.0 };

        assert_eq!(
            result.to_string(),
            "Oil change overdue! You've driven 250 km beyond the limit."
        );
    }

    #[test]
    fn overdue_message_keeps_fractional_excess() {
        let result = EstimationResult::Overdue { excess_km: 12.5 };

        assert_eq!(
            result.to_string(),
            "Oil change overdue! You've driven 12.5 km beyond the limit."
        );
    }

    #[test]
    fn remaining_message_uses_whole_km() {
        let result = EstimationResult::RemainingDistance {
            remaining_km: 1_800,
        };

        assert_eq!(
            result.to_string(),
            "Remaining distance before oil change: 1800 km."
        );
    }

    #[test]
    fn fixed_messages() {
        assert_eq!(
            EstimationResult::DueByTime.to_string(),
            "Oil change due based on time."
        );
        assert_eq!(
            EstimationResult::InvalidInput.to_string(),
            "Please enter a valid distance."
        );
        assert_eq!(
            EstimationResult::InvalidConfiguration.to_string(),
            "Invalid vehicle type or oil type."
        );
    }
}
