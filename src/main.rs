use clap::Parser;
use dial_sim::core::ConfigProvider;
use dial_sim::utils::{logger, validation::Validate};
use dial_sim::{CliConfig, CountingPolicy, DialEngine, FileTokenSource};

fn main() -> anyhow::Result<()> {
    let config = CliConfig::parse();

    logger::init_cli_logger(config.verbose);

    tracing::info!("Starting dial-sim");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    if let Err(e) = config.validate() {
        tracing::error!("Configuration validation failed: {}", e);
        eprintln!("{}", e);
        std::process::exit(1);
    }

    let source = FileTokenSource::new(config.input_path());
    let engine = DialEngine::with_start_position(source, config.start_position());

    match engine.run() {
        Ok(report) => {
            if config.json {
                println!("{}", serde_json::to_string_pretty(&report)?);
            } else {
                println!("position: {}", report.position);
                println!(
                    "terminal_zero_count: {}",
                    report.answer(CountingPolicy::TerminalRest)
                );
                println!(
                    "crossing_count: {}",
                    report.answer(CountingPolicy::SweepCrossing)
                );
            }
        }
        Err(e) => {
            tracing::error!("Simulation failed: {}", e);
            eprintln!("{}", e);
            std::process::exit(1);
        }
    }

    Ok(())
}
