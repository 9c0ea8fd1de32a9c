mod channels;
mod cli;
mod csv_out;
mod directory;
mod errors;
mod model;
mod order;
mod pmr;
mod source;

use crate::errors::AppError;
use anyhow::Context;
use env_logger::Env;
use log::info;

fn setup_logging(level: &str) {
    let env = Env::default().filter_or("RUST_LOG", match level {
        "essential" => "info",
        "debug" => "debug",
        "trace" => "trace",
        "warn" => "warn",
        "error" => "error",
        _ => "info",
    });
    env_logger::Builder::from_env(env).init();
}

fn main() -> anyhow::Result<()> {
    let args = cli::parse_cli();
    setup_logging(&args.log_level);
    info!("Starting: exporting {} callsigns", args.callsigns.len());

    let count = run_pipeline(&args)
        .with_context(|| format!("export to {} failed", args.output.display()))?;

    println!("Successfully exported {} channels.", count);
    Ok(())
}

/// fetch -> parse -> build -> (PMR) -> sort/number -> write. Returns the exported row count.
fn run_pipeline(args: &cli::CliArgs) -> Result<usize, AppError> {
    let source = args.source();
    let xml = source.load()?;

    let records = directory::parse_directory(&xml)?;
    info!("Parsed {} repeaters from {}", records.len(), source);

    let mut rows = channels::build_channels(&records, &args.channel_config());
    let digital = rows.iter().filter(|r| r.is_digital()).count();
    info!("Built {} repeater channels ({} digital, {} analogue)", rows.len(), digital, rows.len() - digital);

    if args.pmr {
        rows.extend(pmr::pmr_channels());
    }

    order::sort_and_number(&mut rows);
    csv_out::write_csv_file(&rows, &args.output)?;

    Ok(rows.len())
}
