//! Energy forecasting over journal history: flat average when sparse,
//! per-weekday mean/std bands otherwise.

use chrono::{Datelike, Duration, NaiveDate};

use pulse_core::config::ConfidenceConfig;
use pulse_core::constants::{NEUTRAL_LEVEL, SCALE_MAX, SCALE_MIN};
use pulse_core::models::{EnergyForecast, ForecastDay, PredictionMethod};
use pulse_core::records::JournalEntry;
use pulse_core::stats;

use super::{dow_index, weekday_abbrev, weekday_name};

pub struct EnergyForecaster;

impl EnergyForecaster {
    /// Flat forecast for users below the energy-domain minimum: the
    /// historical mean (or neutral 5.0) on every day, band fixed at ±1.
    pub fn sparse(
        entries: &[JournalEntry],
        today: NaiveDate,
        days_ahead: u32,
        min_samples: usize,
        confidence: &ConfidenceConfig,
    ) -> EnergyForecast {
        let values = energy_values(entries);
        let avg = stats::mean(&values).unwrap_or(NEUTRAL_LEVEL);

        let forecast = (1..=i64::from(days_ahead))
            .map(|i| {
                let date = today + Duration::days(i);
                ForecastDay {
                    date,
                    day: weekday_name(date.weekday()).to_string(),
                    energy: avg,
                    lower: avg - 1.0,
                    upper: avg + 1.0,
                    confidence: confidence.baseline,
                }
            })
            .collect();

        EnergyForecast {
            forecast,
            method: PredictionMethod::SimpleAverage,
            message: Some(format!(
                "Need {min_samples} entries. Currently: {}",
                entries.len()
            )),
            peak_days: Vec::new(),
            low_days: Vec::new(),
            overall_average: avg,
        }
    }

    /// Per-weekday forecast: each future day takes its weekday's mean and
    /// std band, falling back to the overall series when that weekday has
    /// no history. Bands are clamped to the 1..=10 scale.
    pub fn weekday_pattern(
        entries: &[JournalEntry],
        today: NaiveDate,
        days_ahead: u32,
        confidence: &ConfidenceConfig,
    ) -> EnergyForecast {
        let mut by_dow: [Vec<f64>; 7] = Default::default();
        for entry in entries {
            if let Some(energy) = entry.energy_level {
                by_dow[dow_index(entry.entry_date)].push(energy);
            }
        }

        let values = energy_values(entries);
        let overall_avg = stats::mean(&values).unwrap_or(NEUTRAL_LEVEL);
        let overall_std = stats::std_dev(&values);

        let dow_stats: Vec<Option<(f64, f64)>> = by_dow
            .iter()
            .map(|vals| stats::mean(vals).map(|m| (m, stats::std_dev(vals))))
            .collect();

        let day_confidence = confidence.scaled(
            entries.len(),
            confidence.energy_divisor,
            confidence.energy_ceiling,
        );

        let forecast = (1..=i64::from(days_ahead))
            .map(|i| {
                let date = today + Duration::days(i);
                let (mean, std) = dow_stats[dow_index(date)].unwrap_or((overall_avg, overall_std));
                ForecastDay {
                    date,
                    day: weekday_name(date.weekday()).to_string(),
                    energy: mean,
                    lower: (mean - std).max(SCALE_MIN),
                    upper: (mean + std).min(SCALE_MAX),
                    confidence: day_confidence,
                }
            })
            .collect();

        let mut ranked: Vec<(usize, f64)> = dow_stats
            .iter()
            .enumerate()
            .filter_map(|(dow, s)| s.map(|(m, _)| (dow, m)))
            .collect();
        ranked.sort_by(|a, b| a.1.total_cmp(&b.1));

        let low_days = ranked
            .iter()
            .take(2)
            .map(|(dow, _)| weekday_abbrev(*dow).to_string())
            .collect();
        let peak_days = ranked
            .iter()
            .skip(ranked.len().saturating_sub(2))
            .map(|(dow, _)| weekday_abbrev(*dow).to_string())
            .collect();

        EnergyForecast {
            forecast,
            method: PredictionMethod::DayOfWeekAverage,
            message: None,
            peak_days,
            low_days,
            overall_average: overall_avg,
        }
    }
}

fn energy_values(entries: &[JournalEntry]) -> Vec<f64> {
    entries.iter().filter_map(|e| e.energy_level).collect()
}
