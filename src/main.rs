use anyhow::Result;
use clap::Parser;
use tpepmap::cli::{Cli, Commands, ReportArgs};
use tpepmap::commands::{build_analyze_config, resolve_config};

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbosity);

    match cli.command {
        Commands::Analyze { numbers, report } => handle_analyze_command(numbers, &report),
        Commands::Demo { report } => handle_demo_command(&report),
        Commands::Init { force } => tpepmap::commands::init::init_config(force),
    }
}

// RUST_LOG takes precedence over -v
fn init_logging(verbosity: u8) {
    let level = match verbosity {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level))
        .format_timestamp(None)
        .init();
}

fn handle_analyze_command(numbers: Vec<i64>, report: &ReportArgs) -> Result<()> {
    let config = resolve_config(report)?;
    let analyze_config = build_analyze_config(numbers, report, &config);
    tpepmap::commands::analyze::handle_analyze(analyze_config)
}

fn handle_demo_command(report: &ReportArgs) -> Result<()> {
    let config = resolve_config(report)?;
    let analyze_config = build_analyze_config(config.demo.numbers.clone(), report, &config);
    tpepmap::commands::demo::run_demo(analyze_config)
}
