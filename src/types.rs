use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Unit of time granularity for all window parameters
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Frequency {
    Days,
    Hours,
    Minutes,
    Seconds,
    Milliseconds,
    Microseconds,
    Weeks,
}

impl Frequency {
    /// Duration covering `count` units of this frequency
    pub fn delta(&self, count: u32) -> Duration {
        let count = i64::from(count);
        match self {
            Frequency::Days => Duration::days(count),
            Frequency::Hours => Duration::hours(count),
            Frequency::Minutes => Duration::minutes(count),
            Frequency::Seconds => Duration::seconds(count),
            Frequency::Milliseconds => Duration::milliseconds(count),
            Frequency::Microseconds => Duration::microseconds(count),
            Frequency::Weeks => Duration::weeks(count),
        }
    }
}

/// Window growth behaviour across consecutive splits
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WindowType {
    Rolling,   // Training window of fixed span slides with each split
    Expanding, // Training window anchored at the range start grows with each split
}

impl Default for WindowType {
    fn default() -> Self {
        WindowType::Rolling
    }
}

/// Direction of split generation over the time range
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SplitMode {
    Forward,
    Backward,
}

impl Default for SplitMode {
    fn default() -> Self {
        SplitMode::Forward
    }
}

/// Boundaries of a single train/forecast split.
///
/// Both windows are half-open: a timestamp `t` belongs to the training
/// window when `train_start <= t < train_end` and to the forecast window
/// when `forecast_start <= t < forecast_end`. Any component masking data
/// against a `SplitState` must apply the same convention.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct SplitState {
    pub train_start: DateTime<Utc>,
    pub train_end: DateTime<Utc>,
    pub forecast_start: DateTime<Utc>,
    pub forecast_end: DateTime<Utc>,
}

impl SplitState {
    pub fn new(
        train_start: DateTime<Utc>,
        train_end: DateTime<Utc>,
        forecast_start: DateTime<Utc>,
        forecast_end: DateTime<Utc>,
    ) -> Self {
        Self {
            train_start,
            train_end,
            forecast_start,
            forecast_end,
        }
    }

    /// Whether `t` falls inside the training window
    pub fn train_contains(&self, t: DateTime<Utc>) -> bool {
        self.train_start <= t && t < self.train_end
    }

    /// Whether `t` falls inside the forecast window
    pub fn forecast_contains(&self, t: DateTime<Utc>) -> bool {
        self.forecast_start <= t && t < self.forecast_end
    }

    /// Length of the training window
    pub fn train_span(&self) -> Duration {
        self.train_end - self.train_start
    }

    /// Length of the forecast window
    pub fn forecast_span(&self) -> Duration {
        self.forecast_end - self.forecast_start
    }

    /// Dead time between training end and forecast start
    pub fn gap_span(&self) -> Duration {
        self.forecast_start - self.train_end
    }
}

impl fmt::Display for SplitState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "train [{} .. {}) forecast [{} .. {})",
            self.train_start, self.train_end, self.forecast_start, self.forecast_end
        )
    }
}
