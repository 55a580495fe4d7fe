use anyhow::{Context, Result};
use serde::Serialize;
use timesplit::config::ConfigManager;
use timesplit::data::CsvConnector;
use timesplit::splitter::{FrameSplitter, WindowSequencer};
use timesplit::types::SplitState;

#[derive(Serialize)]
struct SplitSummary {
    fold_num: usize,
    train_rows: usize,
    forecast_rows: usize,
    #[serde(flatten)]
    state: SplitState,
}

fn main() -> Result<()> {
    env_logger::init();

    let usage = "usage: timesplit <config.toml> <data.csv>";
    let mut args = std::env::args().skip(1);
    let config_path = args.next().context(usage)?;
    let data_path = args.next().context(usage)?;

    let manager = ConfigManager::new();
    manager
        .load_from_file(&config_path)
        .with_context(|| format!("loading config {}", config_path))?;
    let config = manager.get();

    let data = CsvConnector::load_timeseries(&data_path, &config.dataset)
        .with_context(|| format!("loading dataset {}", data_path))?;

    let sequencer = WindowSequencer::new(config.splitter.clone())?;
    let splitter = FrameSplitter::new(sequencer, config.dataset.timestamp_column.clone());

    let splits = splitter.split(&data)?;
    log::info!(
        "Generated {} splits from {} rows of {}",
        splits.len(),
        data.height(),
        data_path
    );

    for split in &splits {
        let summary = SplitSummary {
            fold_num: split.fold_num,
            train_rows: split.train.height(),
            forecast_rows: split.forecast.height(),
            state: split.state,
        };
        println!("{}", serde_json::to_string(&summary)?);
    }

    Ok(())
}
