use anyhow::Context;
use clap::Parser;
use rcsv::core::bench::DEFAULT_INPUT;
use rcsv::utils::{logger, monitor::ProcessMonitor, validation::Validate};
use rcsv::{BenchError, Benchmark, CliConfig, ReaderConfig};

fn load_dialect(config: &CliConfig) -> anyhow::Result<ReaderConfig> {
    config.validate()?;
    let dialect = config.load_dialect().with_context(|| match &config.dialect {
        Some(path) => format!("failed to load dialect from {}", path.display()),
        None => "failed to build the default dialect".to_string(),
    })?;
    Ok(dialect)
}

fn main() {
    let config = CliConfig::parse();
    logger::init_logger(config.verbose, config.log_format);
    tracing::debug!("CLI config: {:?}", config);

    let dialect = match load_dialect(&config) {
        Ok(dialect) => dialect,
        Err(e) => {
            tracing::error!("{:#}", e);
            std::process::exit(1);
        }
    };

    let mut monitor = ProcessMonitor::new(config.monitor);
    let mut bench = Benchmark::with_config(DEFAULT_INPUT, dialect);
    let mut reports = Vec::new();

    for &engine in config.engine.engines() {
        match bench.run(engine) {
            Ok(report) => reports.push(report),
            Err(e) => {
                tracing::error!("{}", e);
                tracing::debug!("{}", e.user_friendly_message());
                std::process::exit(1);
            }
        }
        monitor.log_stats(&format!("After {}", engine));
    }

    if config.report {
        match serde_json::to_string_pretty(&reports) {
            Ok(json) => println!("{}", json),
            Err(e) => {
                tracing::error!("{}", BenchError::from(e));
                std::process::exit(1);
            }
        }
    }
}
