use crate::config::DatasetConfig;
use crate::error::{Result, TimesplitError};
use polars::prelude::*;
use std::path::Path;

pub struct CsvConnector;

impl CsvConnector {
    /// Load CSV file into DataFrame, parsing date-like columns
    pub fn load<P: AsRef<Path>>(path: P) -> Result<DataFrame> {
        let df = CsvReadOptions::default()
            .with_parse_options(CsvParseOptions::default().with_try_parse_dates(true))
            .try_into_reader_with_file_path(Some(path.as_ref().to_path_buf()))?
            .finish()
            .map_err(|e| TimesplitError::DataLoading(format!("Failed to read CSV: {}", e)))?;

        Ok(df)
    }

    /// Load a time series dataset and validate it against `config`.
    ///
    /// The configured timestamp column must parse as a datetime; a plain
    /// date column is cast up to millisecond datetimes. Null timestamps
    /// are reported but do not fail the load, matching the masking
    /// behaviour downstream (null rows never match a window).
    pub fn load_timeseries<P: AsRef<Path>>(path: P, config: &DatasetConfig) -> Result<DataFrame> {
        let mut df = Self::load(path)?;

        if df.height() < config.min_rows {
            return Err(TimesplitError::Validation(format!(
                "Dataset has {} rows, need at least {}",
                df.height(),
                config.min_rows
            )));
        }

        let dtype = df
            .column(&config.timestamp_column)
            .map_err(|_| {
                TimesplitError::Validation(format!(
                    "Missing timestamp column `{}`",
                    config.timestamp_column
                ))
            })?
            .dtype()
            .clone();

        match dtype {
            DataType::Datetime(_, _) => {}
            DataType::Date => {
                let cast = df
                    .column(&config.timestamp_column)?
                    .cast(&DataType::Datetime(TimeUnit::Milliseconds, None))?;
                df.with_column(cast)?;
            }
            other => {
                return Err(TimesplitError::Validation(format!(
                    "Column `{}` must be a date or datetime column, got {}",
                    config.timestamp_column, other
                )));
            }
        }

        let null_count = df.column(&config.timestamp_column)?.null_count();
        if null_count > 0 {
            log::warn!(
                "Null values detected in `{}`: {} rows",
                config.timestamp_column,
                null_count
            );
        }

        Ok(df)
    }
}
