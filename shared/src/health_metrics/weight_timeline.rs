//! Weight change timeline projection

use crate::errors::{CalcError, CalcResult, InputField};
use crate::units::WeightUnit;
use crate::validation::require_positive;
use chrono::{Days, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// Longest projection we will build, in weeks
pub const MAX_TIMELINE_WEEKS: u64 = 5200;

/// Preview points shown along the journey
const MILESTONES: [(&str, f64); 5] = [
    ("Start", 0.0),
    ("25%", 0.25),
    ("50%", 0.5),
    ("75%", 0.75),
    ("Goal", 1.0),
];

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TimelineInput {
    pub current_weight: f64,
    pub goal_weight: f64,
    pub weight_unit: WeightUnit,
    /// Daily calorie deficit (or surplus when gaining), kcal
    pub daily_calorie_delta: f64,
}

/// Projected weight at the start of a week
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WeeklyProjection {
    pub week: u32,
    pub weight: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Milestone {
    pub label: String,
    pub week: u32,
    pub weight: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WeightTimeline {
    pub total_days: u32,
    pub total_weeks: u32,
    pub total_months: u32,
    pub weekly_data: Vec<WeeklyProjection>,
    pub target_date: NaiveDate,
    pub weight_unit: WeightUnit,
}

impl WeightTimeline {
    /// Start, 25%, 50%, 75% and goal points of the projection
    pub fn milestones(&self) -> Vec<Milestone> {
        let last = self.weekly_data.len().saturating_sub(1);
        MILESTONES
            .iter()
            .filter_map(|(label, fraction)| {
                let week = (f64::from(self.total_weeks) * fraction).floor() as u32;
                let point = self.weekly_data.get((week as usize).min(last))?;
                Some(Milestone {
                    label: (*label).to_string(),
                    week,
                    weight: point.weight,
                })
            })
            .collect()
    }
}

/// Project a weight change starting today
pub fn calculate_weight_timeline(input: &TimelineInput) -> CalcResult<WeightTimeline> {
    calculate_weight_timeline_from(Utc::now().date_naive(), input)
}

/// Project a weight change starting at `start`
///
/// Days needed = ceil(|goal − current| × kcal_per_unit / daily delta).
/// Weekly weights move linearly toward the goal and stop at it.
pub fn calculate_weight_timeline_from(start: NaiveDate, input: &TimelineInput) -> CalcResult<WeightTimeline> {
    let current = require_positive(InputField::CurrentWeight, input.current_weight)?;
    let goal = require_positive(InputField::GoalWeight, input.goal_weight)?;
    let delta = require_positive(InputField::DailyCalorieDelta, input.daily_calorie_delta)?;

    let kcal_per_unit = input.weight_unit.kcal_per_unit();
    let total_calories = (goal - current).abs() * kcal_per_unit;
    let days = (total_calories / delta).ceil() as u64;
    let weeks = days.div_ceil(7);
    if weeks > MAX_TIMELINE_WEEKS {
        return Err(CalcError::TimelineTooLong { weeks });
    }

    let target_date = start
        .checked_add_days(Days::new(days))
        .ok_or(CalcError::TimelineTooLong { weeks })?;

    let weekly_change = delta * 7.0 / kcal_per_unit;
    let weekly_data = (0..=weeks as u32)
        .map(|week| {
            let moved = weekly_change * f64::from(week);
            let weight = if goal < current {
                (current - moved).max(goal)
            } else {
                (current + moved).min(goal)
            };
            WeeklyProjection { week, weight }
        })
        .collect();

    Ok(WeightTimeline {
        total_days: days as u32,
        total_weeks: weeks as u32,
        total_months: (weeks / 4) as u32,
        weekly_data,
        target_date,
        weight_unit: input.weight_unit,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::InvalidReason;
    use proptest::prelude::*;

    fn start() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 1, 1).unwrap()
    }

    fn input(current: f64, goal: f64, unit: WeightUnit, delta: f64) -> TimelineInput {
        TimelineInput {
            current_weight: current,
            goal_weight: goal,
            weight_unit: unit,
            daily_calorie_delta: delta,
        }
    }

    #[test]
    fn test_lose_10_kg() {
        // 10 kg × 7700 = 77000 kcal / 500 = 154 days = 22 weeks
        let t = calculate_weight_timeline_from(start(), &input(90.0, 80.0, WeightUnit::Kg, 500.0)).unwrap();
        assert_eq!(t.total_days, 154);
        assert_eq!(t.total_weeks, 22);
        assert_eq!(t.total_months, 5);
        assert_eq!(t.target_date, NaiveDate::from_ymd_opt(2024, 6, 3).unwrap());
        assert_eq!(t.weekly_data.len(), 23);
        assert_eq!(t.weekly_data[0].weight, 90.0);
        assert!((t.weekly_data[1].weight - (90.0 - 3500.0 / 7700.0)).abs() < 1e-9);
        assert!((t.weekly_data[22].weight - 80.0).abs() < 1e-9);
    }

    #[test]
    fn test_gain_in_pounds_stops_at_goal() {
        // 5 lbs × 3500 = 17500 / 300 = 58.33 -> 59 days, 9 weeks
        let t = calculate_weight_timeline_from(start(), &input(150.0, 155.0, WeightUnit::Lbs, 300.0)).unwrap();
        assert_eq!(t.total_days, 59);
        assert_eq!(t.total_weeks, 9);
        assert_eq!(t.total_months, 2);
        assert!(t.weekly_data.windows(2).all(|w| w[0].weight <= w[1].weight));
        assert_eq!(t.weekly_data.last().unwrap().weight, 155.0);
    }

    #[test]
    fn test_already_at_goal() {
        let t = calculate_weight_timeline_from(start(), &input(70.0, 70.0, WeightUnit::Kg, 500.0)).unwrap();
        assert_eq!(t.total_days, 0);
        assert_eq!(t.total_weeks, 0);
        assert_eq!(t.target_date, start());
        assert_eq!(t.weekly_data, vec![WeeklyProjection { week: 0, weight: 70.0 }]);
    }

    #[test]
    fn test_milestones() {
        let t = calculate_weight_timeline_from(start(), &input(90.0, 80.0, WeightUnit::Kg, 500.0)).unwrap();
        let milestones = t.milestones();
        let weeks: Vec<u32> = milestones.iter().map(|m| m.week).collect();
        assert_eq!(weeks, vec![0, 5, 11, 16, 22]);
        assert_eq!(milestones[0].label, "Start");
        assert_eq!(milestones[4].label, "Goal");
        assert_eq!(milestones[0].weight, 90.0);
    }

    #[test]
    fn test_rejects_non_positive_delta() {
        let err = calculate_weight_timeline_from(start(), &input(90.0, 80.0, WeightUnit::Kg, 0.0)).unwrap_err();
        assert_eq!(
            err,
            CalcError::invalid(InputField::DailyCalorieDelta, InvalidReason::NotPositive)
        );
    }

    #[test]
    fn test_rejects_runaway_projection() {
        let err = calculate_weight_timeline_from(start(), &input(200.0, 50.0, WeightUnit::Kg, 1.0)).unwrap_err();
        assert!(matches!(err, CalcError::TimelineTooLong { .. }));
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(100))]

        /// Property: projection starts at current weight and ends within a week's change of goal
        #[test]
        fn prop_timeline_endpoints(
            current in 40.0f64..150.0,
            goal in 40.0f64..150.0,
            delta in 100.0f64..1500.0
        ) {
            let t = calculate_weight_timeline_from(start(), &input(current, goal, WeightUnit::Kg, delta)).unwrap();
            let weekly_change = delta * 7.0 / 7700.0;
            prop_assert_eq!(t.weekly_data[0].weight, current);
            prop_assert_eq!(t.weekly_data.len() as u32, t.total_weeks + 1);
            let last = t.weekly_data.last().unwrap().weight;
            prop_assert!((last - goal).abs() <= weekly_change + 1e-9);
            prop_assert_eq!(
                t.target_date,
                start() + chrono::Duration::days(i64::from(t.total_days))
            );
        }
    }
}
