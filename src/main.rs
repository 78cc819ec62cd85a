mod sim;
mod ui;

use std::io;
use std::path::PathBuf;

use clap::{ArgAction, Parser};
use tracing_subscriber::EnvFilter;

use sim::config::DEFAULT_BREAKPOINT_LIMIT;
use sim::{Debugger, SimConfig};
use ui::{Console, Repl};

#[derive(Parser, Debug)]
#[command(
    name = "rvsim",
    version,
    about = "Interactive RV64I subset interpreter with breakpoints and a call-stack view"
)]
struct Cli {
    /// Assembly file to load before the first prompt
    file: Option<PathBuf>,

    #[arg(
        short = 'v',
        long = "verbose",
        action = ArgAction::Count,
        long_help = "Raise log verbosity on stderr (-v info, -vv debug, -vvv trace). RUST_LOG takes precedence."
    )]
    verbose: u8,

    #[arg(long = "breakpoint-limit", value_name = "N", default_value_t = DEFAULT_BREAKPOINT_LIMIT)]
    breakpoint_limit: usize,

    #[arg(long = "no-color", action = ArgAction::SetTrue)]
    no_color: bool,
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}

fn main() -> io::Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let config = SimConfig {
        breakpoint_limit: cli.breakpoint_limit,
        ..SimConfig::default()
    };
    let mut repl = Repl::new(Debugger::new(config), Console::stdio(!cli.no_color));
    if let Some(path) = &cli.file {
        repl.load(path)?;
    }
    repl.run(io::stdin().lock())
}
