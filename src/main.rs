use std::process::ExitCode;

use clap::Parser;
use letcalc::evaluate;
use log::{LevelFilter, error, info};

/// letcalc evaluates prefix-call arithmetic expressions with `let` bindings,
/// such as `let(a, 5, add(a, a))`.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// The expression to evaluate.
    expression: Option<String>,

    /// Log verbosity: `debug`, `info` or `error`, in any case. Any other value
    /// turns logging off. `RUST_LOG` takes precedence when set.
    log_level: Option<String>,
}

/// Maps a verbosity name to a level filter without ever failing.
fn level_filter(name: Option<&str>) -> LevelFilter {
    match name.map(str::to_ascii_lowercase).as_deref() {
        Some("debug") => LevelFilter::Debug,
        Some("info") => LevelFilter::Info,
        Some("error") => LevelFilter::Error,
        _ => LevelFilter::Off,
    }
}

fn main() -> ExitCode {
    let args = Args::parse();

    let level = level_filter(args.log_level.as_deref());
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level.as_str()))
        .init();

    info!("Computing input expression...");
    match evaluate(args.expression.as_deref()) {
        Ok(result) => {
            info!("Computing complete with result: {result}.");
            println!("{result}");
            ExitCode::SUCCESS
        },
        Err(e) => {
            error!("{e}");
            eprintln!("{e}");
            ExitCode::FAILURE
        },
    }
}
