use std::io;

use anyhow::bail;
use clap::{CommandFactory, Parser};
use exprtree::selftest;
use tracing_subscriber::EnvFilter;

/// exprtree evaluates arithmetic expression trees with fault-tolerant
/// floating-point semantics.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Run the self-test for the expression evaluation code. This option
    /// should be used without any additional arguments.
    #[arg(long)]
    run_tests: bool,
}

fn main() -> anyhow::Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt().with_env_filter(filter)
                             .with_writer(io::stderr)
                             .without_time()
                             .with_target(false)
                             .init();

    let args = Args::parse();

    if !args.run_tests {
        Args::command().print_help()?;
        return Ok(());
    }

    let report = selftest::run(&mut io::stdout().lock())?;
    if !report.is_success() {
        bail!("{} self-test check(s) failed: {}", report.failed.len(), report.failed.join(", "));
    }

    println!("All tests passed successfully.");
    Ok(())
}
