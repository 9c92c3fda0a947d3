#[cfg(feature = "native")]
use clap::Parser;
#[cfg(feature = "native")]
use forecast::{OutputFormat, init_logging, load_project, render};
#[cfg(feature = "native")]
use std::path::PathBuf;

#[cfg(feature = "native")]
#[derive(Parser, Debug)]
#[command(name = "forecast")]
#[command(about = "Project a financial model period by period and compare scenarios")]
struct Args {
    /// Project file (.yaml, .yml or .json) holding the model and its scenarios
    project: PathBuf,

    /// Scenario id or name to evaluate; repeat for several (default: all)
    #[arg(short, long = "scenario")]
    scenarios: Vec<String>,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Table)]
    format: OutputFormat,

    /// Override the forecast horizon in periods
    #[arg(short, long)]
    periods: Option<u32>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(short, long, default_value = "warn")]
    log_level: String,

    /// Write logs to this file instead of stderr
    #[arg(long)]
    log_file: Option<PathBuf>,
}

#[cfg(feature = "native")]
fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    let args = Args::parse();
    init_logging(args.log_file.as_deref(), &args.log_level)?;

    let mut project = load_project(&args.project)?;
    if let Some(periods) = args.periods {
        project.override_horizon(periods);
    }

    let scenarios = project.select_scenarios(&args.scenarios)?;
    tracing::info!(
        model = %project.model.id,
        scenarios = scenarios.len(),
        "evaluating project"
    );

    let evaluation =
        forecast_core::scenario::forecast_scenarios(&project.model, &scenarios, &project.config)?;
    println!("{}", render(&evaluation, args.format)?);

    Ok(())
}

#[cfg(not(feature = "native"))]
fn main() {
    // The binary target requires the "native" feature
    panic!("This binary requires the 'native' feature.");
}
