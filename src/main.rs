// RFP Mapper - Main executable
// Author: Gabriel Demetrios Lafis

use anyhow::Context;
use clap::{Arg, Command};
use log::info;

use rfp_mapper::{
    driver::Driver,
    utils::{init_logging, Config},
};

fn main() -> anyhow::Result<()> {
    // Parse command line arguments
    let matches = Command::new("RFP Mapper")
        .version(env!("CARGO_PKG_VERSION"))
        .author("Gabriel Demetrios Lafis")
        .about("Maps training RFP rows from CSV into one JSON file per row")
        .arg(
            Arg::new("config")
                .short('c')
                .long("config")
                .value_name("FILE")
                .help("Sets a custom config file (.json, .yaml or .yml)")
                .takes_value(true),
        )
        .arg(
            Arg::new("input")
                .short('i')
                .long("input")
                .value_name("CSV")
                .help("Overrides the input CSV path")
                .takes_value(true),
        )
        .arg(
            Arg::new("output")
                .short('o')
                .long("output")
                .value_name("DIR")
                .help("Overrides the output directory")
                .takes_value(true),
        )
        .get_matches();

    // Load configuration
    let mut config = match matches.value_of("config") {
        Some(path) => Config::from_file(path)
            .with_context(|| format!("loading configuration from {}", path))?,
        None => Config::default(),
    };

    if let Some(input) = matches.value_of("input") {
        config.input.path = input.into();
    }
    if let Some(output) = matches.value_of("output") {
        config.output.dir = output.into();
    }

    // Initialize logging
    if let Err(err) = init_logging(config.log_level_filter()) {
        eprintln!("Error initializing logger: {}", err);
    }

    let driver = Driver::from_config(&config).context("preparing conversion")?;
    let summary = driver
        .run()
        .with_context(|| format!("converting {}", config.input.path.display()))?;

    info!(
        "Wrote {} files to {}",
        summary.rows(),
        config.output.dir.display()
    );
    Ok(())
}
