use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;
use kalarchiv_app::cli::Cli;
use kalarchiv_app::console::{ABORT_MESSAGE, Console};
use kalarchiv_app::pipeline::{RunOptions, run};
use kalarchiv_core::config::load_config;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, reload, util::SubscriberInitExt};

fn main() -> ExitCode {
    let (filter_layer, filter_handle) = reload::Layer::new(EnvFilter::new("warn"));

    tracing_subscriber::registry()
        .with(filter_layer)
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(true)
                .with_file(true)
                .with_line_number(true),
        )
        .init();

    let cli = Cli::parse();

    let config = match load_config().context("Konfiguration konnte nicht geladen werden") {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Fehler: {e:#}");
            return ExitCode::FAILURE;
        }
    };

    let level = if cli.verbose {
        "debug"
    } else {
        config.logging.level.as_str()
    };
    if let Ok(filter) = EnvFilter::try_new(level) {
        if let Err(e) = filter_handle.modify(|current| *current = filter) {
            tracing::warn!(error = %e, "Failed to update log filter from config");
        }
    } else {
        tracing::warn!(level, "Invalid log level in config, keeping warn");
    }

    let mut console = Console::stdio();
    let result = RunOptions::resolve(&cli, &config, &mut console)
        .and_then(|options| run(&options, &mut console));

    match result {
        Ok(summary) => {
            tracing::debug!(stats = ?summary.stats, "Run finished");
            ExitCode::SUCCESS
        }
        Err(e) if e.is_user_abort() => {
            println!("{ABORT_MESSAGE}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Fehler: {e}");
            ExitCode::FAILURE
        }
    }
}
