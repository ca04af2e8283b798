//! netpulse: batch analytics over network-device telemetry.

use clap::Parser;
use np_core::cli::Cli;
use np_core::exit_codes::ExitCode;
use np_core::{export, logging, pipeline};
use tracing::error;

fn main() {
    let cli = Cli::parse();
    logging::init(cli.log_format);

    let code = match run(&cli) {
        Ok(()) => ExitCode::Clean,
        Err(err) => {
            error!(code = err.code(), "{err}");
            ExitCode::from(&err)
        }
    };
    std::process::exit(code.as_i32());
}

fn run(cli: &Cli) -> np_common::Result<()> {
    let thresholds = np_config::resolve_thresholds(cli.thresholds.as_deref())?;
    let bundle = pipeline::run_pipeline(&cli.csv, &thresholds)?;

    export::export_bottlenecks(&bundle.bottlenecks, &cli.bottlenecks)?;
    np_report::render_dashboard(
        bundle.telemetry.records(),
        &bundle.latency_stats,
        &bundle.reliability,
        &bundle.bottlenecks,
        &cli.dashboard,
    )?;

    println!(
        "Analytics pipeline complete. Dashboard saved to {}",
        cli.dashboard.display()
    );
    println!(
        "Detected bottlenecks exported to {}",
        cli.bottlenecks.display()
    );
    Ok(())
}
