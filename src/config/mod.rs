pub mod dataset;
pub mod manager;
pub mod splitter;
pub mod traits;

pub use dataset::DatasetConfig;
pub use manager::{AppConfig, ConfigManager};
pub use splitter::SplitterConfig;
pub use traits::ConfigSection;
