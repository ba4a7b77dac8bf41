/// Pulse system version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Lower bound of the mood/energy/stress scales.
pub const SCALE_MIN: f64 = 1.0;

/// Upper bound of the mood/energy/stress scales.
pub const SCALE_MAX: f64 = 10.0;

/// Neutral mood used when no history exists at all.
pub const NEUTRAL_MOOD: f64 = 7.0;

/// Neutral energy/stress level substituted for missing feature values.
pub const NEUTRAL_LEVEL: f64 = 5.0;

/// Full weekday names, indexed by days-from-Monday.
pub const WEEKDAY_NAMES: [&str; 7] = [
    "Monday",
    "Tuesday",
    "Wednesday",
    "Thursday",
    "Friday",
    "Saturday",
    "Sunday",
];

/// Abbreviated weekday names, indexed by days-from-Monday.
pub const WEEKDAY_ABBREV: [&str; 7] = ["Mon", "Tue", "Wed", "Thu", "Fri", "Sat", "Sun"];

/// Feature names fed to the mood ensemble, in training column order.
pub const MOOD_MODEL_FEATURES: [&str; 4] = ["day_of_week", "month", "energy", "stress"];
