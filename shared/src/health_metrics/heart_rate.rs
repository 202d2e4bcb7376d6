//! Heart rate training zones (Tanaka max HR, Karvonen reserve)

use crate::errors::{CalcError, CalcResult, InputField, InvalidReason};
use crate::validation::require_positive_count;
use serde::{Deserialize, Serialize};

/// Resting heart rate assumed when the user does not supply one
pub const DEFAULT_RESTING_HR: u32 = 70;

/// Inclusive `[low, high]` bpm range
pub type BpmRange = (u32, u32);

/// Fractions of heart rate reserve bounding each zone
const WARM_UP: (f64, f64) = (0.50, 0.60);
const FAT_BURN: (f64, f64) = (0.60, 0.70);
const CARDIO: (f64, f64) = (0.70, 0.85);
const PEAK: (f64, f64) = (0.85, 1.00);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Zones {
    pub rest: u32,
    pub warm_up: BpmRange,
    pub fat_burn: BpmRange,
    pub cardio: BpmRange,
    pub peak: BpmRange,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct HeartRateZones {
    pub max_hr: u32,
    pub zones: Zones,
}

/// Tanaka estimate of maximum heart rate
pub fn tanaka_max_hr(age_years: u32) -> f64 {
    208.0 - 0.7 * f64::from(age_years)
}

/// Calculate heart rate training zones
///
/// Zone bounds are `round(rest + reserve × pct)` where
/// `reserve = max_hr − rest`. The resting rate must sit below the maximum.
pub fn calculate_heart_rate_zones(age_years: u32, resting_hr: Option<u32>) -> CalcResult<HeartRateZones> {
    let age = require_positive_count(InputField::Age, age_years)?;
    let rest = match resting_hr {
        Some(hr) => require_positive_count(InputField::RestingHeartRate, hr)?,
        None => DEFAULT_RESTING_HR,
    };

    let max_hr = tanaka_max_hr(age);
    let rest_f = f64::from(rest);
    if rest_f >= max_hr {
        return Err(CalcError::invalid(
            InputField::RestingHeartRate,
            InvalidReason::NotBelowMaxHeartRate,
        ));
    }

    let reserve = max_hr - rest_f;
    let max_bpm = max_hr.round() as u32;
    let bound = |pct: f64| ((rest_f + reserve * pct).round() as u32).min(max_bpm);
    let zone = |(low, high): (f64, f64)| (bound(low), bound(high));

    Ok(HeartRateZones {
        max_hr: max_bpm,
        zones: Zones {
            rest,
            warm_up: zone(WARM_UP),
            fat_burn: zone(FAT_BURN),
            cardio: zone(CARDIO),
            peak: (bound(PEAK.0), max_bpm),
        },
    })
}
