use super::traits::ConfigSection;
use crate::error::TimesplitError;
use serde::{Deserialize, Serialize};

/// Shape of the dataset handed to the frame splitter
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DatasetConfig {
    /// Name of the datetime column used to build split masks
    #[serde(default = "default_timestamp_column")]
    pub timestamp_column: String,
    /// Minimum number of rows a dataset must have to be split
    #[serde(default = "default_min_rows")]
    pub min_rows: usize,
}

fn default_timestamp_column() -> String {
    "timestamp".to_string()
}

fn default_min_rows() -> usize {
    2
}

impl Default for DatasetConfig {
    fn default() -> Self {
        Self {
            timestamp_column: default_timestamp_column(),
            min_rows: default_min_rows(),
        }
    }
}

impl ConfigSection for DatasetConfig {
    fn section_name() -> &'static str {
        "dataset"
    }

    fn validate(&self) -> Result<(), TimesplitError> {
        if self.timestamp_column.is_empty() {
            return Err(TimesplitError::Configuration(
                "`timestamp_column` must not be empty".to_string(),
            ));
        }
        if self.min_rows < 2 {
            return Err(TimesplitError::Configuration(
                "`min_rows` must be greater or equal than 2".to_string(),
            ));
        }
        Ok(())
    }
}
