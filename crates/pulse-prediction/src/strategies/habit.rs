//! Habit success probability from completion history: overall rate blended
//! with day-of-week and optional hour-of-day rates, plus the current streak.

use chrono::{Datelike, NaiveDate};

use pulse_core::config::ConfidenceConfig;
use pulse_core::models::{PredictionMethod, PredictionResult};
use pulse_core::records::HabitLog;

use super::weekday_name;

/// Below-minimum baseline: the raw overall completion rate.
pub struct OverallRateStrategy;

impl OverallRateStrategy {
    pub fn predict(logs: &[HabitLog], confidence: &ConfidenceConfig) -> PredictionResult {
        let rate = completion_rate(logs);
        PredictionResult {
            prediction: rate,
            confidence: confidence.scaled(
                logs.len(),
                confidence.habit_baseline_divisor,
                confidence.habit_baseline_ceiling,
            ),
            method: PredictionMethod::OverallHistorical,
            message: Some(format!("Based on {} logs", logs.len())),
            factors: vec![format!("Overall success rate: {:.0}%", rate * 100.0)],
            use_prediction: false,
            streak: None,
        }
    }
}

/// Full historical baseline: overall rate averaged with the target
/// weekday's rate, then with the target hour's rate when one is given.
pub struct HistoricalBaselineStrategy;

impl HistoricalBaselineStrategy {
    pub fn predict(
        logs: &[HabitLog],
        target_date: NaiveDate,
        target_hour: Option<u32>,
        confidence: &ConfidenceConfig,
    ) -> PredictionResult {
        let overall_rate = completion_rate(logs);
        let mut factors = vec![format!("Overall success rate: {:.0}%", overall_rate * 100.0)];

        let target_dow = target_date.weekday();
        let dow_logs: Vec<&HabitLog> = logs
            .iter()
            .filter(|l| l.log_date.weekday() == target_dow)
            .collect();

        let mut prediction = if dow_logs.is_empty() {
            overall_rate
        } else {
            let dow_rate =
                dow_logs.iter().filter(|l| l.completed).count() as f64 / dow_logs.len() as f64;
            factors.push(format!(
                "{} success rate: {:.0}% ({} logs)",
                weekday_name(target_dow),
                dow_rate * 100.0,
                dow_logs.len()
            ));
            (overall_rate + dow_rate) / 2.0
        };

        if let Some(hour) = target_hour {
            let hour_logs: Vec<&HabitLog> =
                logs.iter().filter(|l| l.log_hour == Some(hour)).collect();
            if !hour_logs.is_empty() {
                let hour_rate =
                    hour_logs.iter().filter(|l| l.completed).count() as f64 / hour_logs.len() as f64;
                factors.push(format!("Success at {hour}:00: {:.0}%", hour_rate * 100.0));
                prediction = (prediction + hour_rate) / 2.0;
            }
        }

        let streak = current_streak(logs);
        if streak > 0 {
            factors.push(format!("Current streak: {streak} days"));
        }

        PredictionResult {
            prediction,
            confidence: confidence.scaled(
                logs.len(),
                confidence.habit_history_divisor,
                confidence.habit_ceiling,
            ),
            method: PredictionMethod::HistoricalBaseline,
            message: None,
            factors,
            use_prediction: false,
            streak: Some(streak),
        }
    }
}

fn completion_rate(logs: &[HabitLog]) -> f64 {
    if logs.is_empty() {
        return 0.0;
    }
    logs.iter().filter(|l| l.completed).count() as f64 / logs.len() as f64
}

/// Consecutive completed days counted back from the most recent log.
fn current_streak(logs: &[HabitLog]) -> u32 {
    let mut sorted: Vec<&HabitLog> = logs.iter().collect();
    sorted.sort_by(|a, b| b.log_date.cmp(&a.log_date));
    let mut streak = 0;
    for log in sorted {
        if log.completed {
            streak += 1;
        } else {
            break;
        }
    }
    streak
}
