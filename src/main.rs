#![warn(rust_2018_idioms)]

use std::io;

use flexi_logger::LogSpecBuilder;
use log::{info, LevelFilter};

use twenty_one::{run, GameError, TableConfig};

fn main() -> anyhow::Result<()> {
    setup_logger(LevelFilter::Warn)?;

    let stdin = io::stdin();
    let stdout = io::stdout();
    match run(TableConfig::default(), stdin.lock(), stdout.lock()) {
        Ok(records) => info!("played {} rounds", records.len()),
        Err(GameError::InputClosed) => info!("input closed, leaving the table"),
        Err(e) => return Err(e.into()),
    }
    Ok(())
}

fn setup_logger(level: LevelFilter) -> anyhow::Result<()> {
    let mut spec_builder = LogSpecBuilder::new();
    spec_builder.default(level);
    let spec = spec_builder.build();
    flexi_logger::Logger::with(spec)
        .format(|w, now, r| flexi_logger::default_format(w, now, r))
        .start()?;
    Ok(())
}
