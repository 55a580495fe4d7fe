use crate::config::traits::ConfigSection;
use crate::config::SplitterConfig;
use crate::error::{Result, TimesplitError};
use crate::types::{SplitMode, SplitState, WindowType};
use chrono::{DateTime, Duration, Utc};

/// Generates train/forecast splits over a time range.
///
/// The sequencer owns nothing but a validated [`SplitterConfig`]:
/// `generate` returns a fresh lazy [`SplitSequence`] per call, so one
/// sequencer can be reused across ranges and shared across threads.
#[derive(Debug, Clone)]
pub struct WindowSequencer {
    config: SplitterConfig,
}

impl WindowSequencer {
    /// Validates `config` once; the sequencer is immutable afterwards.
    pub fn new(config: SplitterConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &SplitterConfig {
        &self.config
    }

    /// Lazy sequence of splits covering `[time_start, time_end)`.
    ///
    /// Forward mode anchors the first split at `time_start` and yields
    /// splits earliest-first; backward mode anchors the last forecast
    /// window at `time_end` and yields latest-first. Callers needing
    /// chronological order in backward mode must reverse the collected
    /// sequence themselves.
    ///
    /// A split is emitted as long as its forecast window starts at or
    /// before `time_end`; the forecast end is never clamped, so the tail
    /// split keeps its nominal length even when it extends past the
    /// range.
    pub fn generate(
        &self,
        time_start: DateTime<Utc>,
        time_end: DateTime<Utc>,
    ) -> Result<SplitSequence> {
        if time_start >= time_end {
            return Err(TimesplitError::InvalidRange(
                "`time_start` must be before `time_end`".to_string(),
            ));
        }

        let config = &self.config;
        let sign = match config.mode {
            SplitMode::Forward => 1,
            SplitMode::Backward => -1,
        };
        let train_delta = config.train_delta() * sign;
        let forecast_delta = config.forecast_delta() * sign;
        let gap_delta = config.gap_delta() * sign;
        let stride_delta = config.stride_delta() * sign;

        let (train_start, train_end, forecast_start, forecast_end) = match config.mode {
            SplitMode::Forward => {
                let train_start = time_start;
                let train_end = train_start + train_delta;
                let forecast_start = train_end + gap_delta;
                let forecast_end = forecast_start + forecast_delta;
                (train_start, train_end, forecast_start, forecast_end)
            }
            SplitMode::Backward => {
                let forecast_end = time_end;
                let forecast_start = forecast_end + forecast_delta;
                let train_end = forecast_start + gap_delta;
                let train_start = match config.window {
                    WindowType::Rolling => train_end + train_delta,
                    WindowType::Expanding => time_start,
                };
                (train_start, train_end, forecast_start, forecast_end)
            }
        };

        log::debug!(
            "Generating splits over [{} .. {}) with {:?}",
            time_start,
            time_end,
            config
        );

        Ok(SplitSequence {
            time_start,
            time_end,
            train_delta,
            stride_delta,
            window: config.window,
            train_start,
            train_end,
            forecast_start,
            forecast_end,
        })
    }

    /// Number of splits `generate` would yield for the same range.
    ///
    /// Exhausts the same lazy sequence, so both operations always agree.
    pub fn count(&self, time_start: DateTime<Utc>, time_end: DateTime<Utc>) -> Result<usize> {
        Ok(self.generate(time_start, time_end)?.count())
    }
}

/// Step state of one in-flight sequence.
///
/// Deltas are signed: positive in forward mode, negated in backward
/// mode, so one advance rule and one guard serve both directions.
#[derive(Debug, Clone)]
pub struct SplitSequence {
    time_start: DateTime<Utc>,
    time_end: DateTime<Utc>,
    train_delta: Duration,
    stride_delta: Duration,
    window: WindowType,
    train_start: DateTime<Utc>,
    train_end: DateTime<Utc>,
    forecast_start: DateTime<Utc>,
    forecast_end: DateTime<Utc>,
}

impl Iterator for SplitSequence {
    type Item = SplitState;

    fn next(&mut self) -> Option<SplitState> {
        // The third clause keeps a backward expanding window from
        // shrinking below one training span; it is vacuous forward.
        let in_range = self.forecast_start <= self.time_end
            && self.train_start >= self.time_start
            && self.train_start <= self.train_end + self.train_delta;
        if !in_range {
            return None;
        }

        let state = SplitState::new(
            self.train_start,
            self.train_end,
            self.forecast_start,
            self.forecast_end,
        );

        // train_start stays pinned at the range boundary when expanding
        if self.window == WindowType::Rolling {
            self.train_start = self.train_start + self.stride_delta;
        }
        self.train_end = self.train_end + self.stride_delta;
        self.forecast_start = self.forecast_start + self.stride_delta;
        self.forecast_end = self.forecast_end + self.stride_delta;

        Some(state)
    }
}
