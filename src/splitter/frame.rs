use super::sequencer::WindowSequencer;
use crate::error::{Result, TimesplitError};
use crate::types::SplitState;
use chrono::{DateTime, Utc};
use polars::prelude::*;

/// Single data split (train + forecast frames)
#[derive(Debug, Clone)]
pub struct DataSplit {
    pub train: DataFrame,
    pub forecast: DataFrame,
    pub fold_num: usize,
    pub state: SplitState,
}

/// Slices a `DataFrame` into train/forecast frames, one pair per split
/// the sequencer yields.
///
/// Masks are built from the datetime column with the half-open
/// convention of [`SplitState`]: `start <= t < end` on both windows.
/// Rows falling in the gap, or past the range end, are simply left out
/// of both frames, so a tail split whose nominal forecast window extends
/// past the data yields a smaller forecast frame.
pub struct FrameSplitter {
    sequencer: WindowSequencer,
    timestamp_column: String,
}

impl FrameSplitter {
    pub fn new(sequencer: WindowSequencer, timestamp_column: impl Into<String>) -> Self {
        Self {
            sequencer,
            timestamp_column: timestamp_column.into(),
        }
    }

    pub fn sequencer(&self) -> &WindowSequencer {
        &self.sequencer
    }

    /// Split using the observed range of the timestamp column
    pub fn split(&self, data: &DataFrame) -> Result<Vec<DataSplit>> {
        let timestamps = self.timestamps(data)?;
        let unit = timestamps.time_unit();

        let min = timestamps.phys.min().ok_or_else(|| {
            TimesplitError::Validation(format!(
                "Column `{}` has no values to derive a range from",
                self.timestamp_column
            ))
        })?;
        let max = timestamps.phys.max().ok_or_else(|| {
            TimesplitError::Validation(format!(
                "Column `{}` has no values to derive a range from",
                self.timestamp_column
            ))
        })?;

        let time_start = datetime_from_units(min, unit)?;
        let time_end = datetime_from_units(max, unit)?;

        self.split_within(data, time_start, time_end)
    }

    /// Split against an explicit `[time_start, time_end)` range instead
    /// of the observed column bounds. Useful when the samples do not
    /// cover the full period of interest.
    pub fn split_within(
        &self,
        data: &DataFrame,
        time_start: DateTime<Utc>,
        time_end: DateTime<Utc>,
    ) -> Result<Vec<DataSplit>> {
        let timestamps = self.timestamps(data)?;
        let unit = timestamps.time_unit();

        let mut splits = Vec::new();
        for (fold_num, state) in self
            .sequencer
            .generate(time_start, time_end)?
            .enumerate()
        {
            let train_mask = mask_window(timestamps, state.train_start, state.train_end, unit)?;
            let forecast_mask =
                mask_window(timestamps, state.forecast_start, state.forecast_end, unit)?;

            let split = DataSplit {
                train: data.filter(&train_mask)?,
                forecast: data.filter(&forecast_mask)?,
                fold_num,
                state,
            };
            log::debug!(
                "Fold {}: {} train rows, {} forecast rows ({})",
                fold_num,
                split.train.height(),
                split.forecast.height(),
                state
            );
            splits.push(split);
        }

        Ok(splits)
    }

    fn timestamps<'a>(&self, data: &'a DataFrame) -> Result<&'a DatetimeChunked> {
        let column = data.column(&self.timestamp_column).map_err(|_| {
            TimesplitError::Validation(format!(
                "Missing timestamp column `{}`",
                self.timestamp_column
            ))
        })?;

        column.datetime().map_err(|_| {
            TimesplitError::Validation(format!(
                "Column `{}` must be a datetime column, got {}",
                self.timestamp_column,
                column.dtype()
            ))
        })
    }
}

/// Boolean mask for `start <= t < end` in the column's own time unit
fn mask_window(
    timestamps: &DatetimeChunked,
    start: DateTime<Utc>,
    end: DateTime<Utc>,
    unit: TimeUnit,
) -> Result<BooleanChunked> {
    let lower = to_column_units(start, unit)?;
    let upper = to_column_units(end, unit)?;
    Ok(&timestamps.phys.gt_eq(lower) & &timestamps.phys.lt(upper))
}

fn to_column_units(value: DateTime<Utc>, unit: TimeUnit) -> Result<i64> {
    match unit {
        TimeUnit::Milliseconds => Ok(value.timestamp_millis()),
        TimeUnit::Microseconds => Ok(value.timestamp_micros()),
        TimeUnit::Nanoseconds => value.timestamp_nanos_opt().ok_or_else(|| {
            TimesplitError::Validation(format!("Timestamp {} overflows nanosecond precision", value))
        }),
    }
}

fn datetime_from_units(value: i64, unit: TimeUnit) -> Result<DateTime<Utc>> {
    let parsed = match unit {
        TimeUnit::Milliseconds => DateTime::from_timestamp_millis(value),
        TimeUnit::Microseconds => DateTime::from_timestamp_micros(value),
        TimeUnit::Nanoseconds => Some(DateTime::from_timestamp_nanos(value)),
    };

    parsed.ok_or_else(|| TimesplitError::Validation(format!("Invalid timestamp value: {}", value)))
}
