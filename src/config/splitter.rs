use super::traits::ConfigSection;
use crate::error::TimesplitError;
use crate::types::{Frequency, SplitMode, WindowType};
use chrono::Duration;
use serde::{Deserialize, Serialize};

/// Parameters of the split generation state machine.
///
/// All quantities are counts of `frequency` units. Immutable once handed
/// to a sequencer; validated through [`ConfigSection::validate`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SplitterConfig {
    pub frequency: Frequency,
    pub train_size: u32,
    pub forecast_horizon: u32,
    #[serde(default)]
    pub gap: u32,
    /// Falls back to `forecast_horizon` when unset or zero
    #[serde(default)]
    pub stride: Option<u32>,
    #[serde(default)]
    pub window: WindowType,
    #[serde(default)]
    pub mode: SplitMode,
}

impl Default for SplitterConfig {
    fn default() -> Self {
        Self {
            frequency: Frequency::Days,
            train_size: 30,
            forecast_horizon: 7,
            gap: 0,
            stride: None,
            window: WindowType::Rolling,
            mode: SplitMode::Forward,
        }
    }
}

impl SplitterConfig {
    /// Stride actually applied between consecutive splits
    pub fn resolved_stride(&self) -> u32 {
        match self.stride {
            None | Some(0) => self.forecast_horizon,
            Some(stride) => stride,
        }
    }

    pub fn train_delta(&self) -> Duration {
        self.frequency.delta(self.train_size)
    }

    pub fn forecast_delta(&self) -> Duration {
        self.frequency.delta(self.forecast_horizon)
    }

    pub fn gap_delta(&self) -> Duration {
        self.frequency.delta(self.gap)
    }

    pub fn stride_delta(&self) -> Duration {
        self.frequency.delta(self.resolved_stride())
    }
}

impl ConfigSection for SplitterConfig {
    fn section_name() -> &'static str {
        "splitter"
    }

    fn validate(&self) -> Result<(), TimesplitError> {
        if self.train_size < 1 {
            return Err(TimesplitError::Configuration(
                "`train_size` must be greater or equal than 1".to_string(),
            ));
        }
        if self.forecast_horizon < 1 {
            return Err(TimesplitError::Configuration(
                "`forecast_horizon` must be greater or equal than 1".to_string(),
            ));
        }
        if self.resolved_stride() < 1 {
            return Err(TimesplitError::Configuration(
                "`stride` must be greater or equal than 1".to_string(),
            ));
        }
        Ok(())
    }
}
