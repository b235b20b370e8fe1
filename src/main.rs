use anyhow::{Context, Result};
use clap::Parser;
use log::info;
use route_selector::algorithms::optimized_path::DEFAULT_LONG_ROUTE_FACTOR;
use route_selector::utils::init_routes::load_route_set;
use route_selector::utils::session::Session;
use route_selector::{OptimizedPathSelection, PathSelector, SelectionError};
use simplelog::{ColorChoice, Config, LevelFilter, TermLogger, TerminalMode, WriteLogger};
use std::fs::File;
use std::io;
use std::path::PathBuf;

/// Pick the optimal route from user described candidates using weighted distance, quality and safety
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// JSON file with the candidate routes (and optionally the weights)
    #[arg(long)]
    routes: Option<PathBuf>,

    /// Routes longer than this multiple of the shortest route are discarded
    #[arg(long, default_value_t = DEFAULT_LONG_ROUTE_FACTOR, value_parser = parse_long_route_factor)]
    long_route_factor: f64,

    /// Print the optimal route as JSON
    #[arg(long)]
    json: bool,

    /// Write logs to this file instead of stderr
    #[arg(long)]
    log_file: Option<PathBuf>,

    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn parse_long_route_factor(value: &str) -> Result<f64, String> {
    let factor: f64 = value
        .parse()
        .map_err(|_| format!("'{}' is not a number", value))?;
    if factor.is_finite() && factor >= 1.0 {
        Ok(factor)
    } else {
        Err(format!("long route factor must be at least 1, got {}", factor))
    }
}

fn init_logging(args: &Args) -> Result<()> {
    let level = match args.verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        _ => LevelFilter::Debug,
    };

    match &args.log_file {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("failed to create log file {}", path.display()))?;
            WriteLogger::init(level, Config::default(), file)?;
        }
        None => TermLogger::init(
            level,
            Config::default(),
            TerminalMode::Stderr,
            ColorChoice::Auto,
        )?,
    }
    Ok(())
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(&args)?;

    let mut session = Session::new(io::stdin().lock(), io::stdout().lock());

    // Collect routes, from a file when given
    let (routes, file_weights) = match &args.routes {
        Some(path) => {
            let route_set = load_route_set(path)
                .with_context(|| format!("failed to load routes from {}", path.display()))?;
            let weights = route_set.normalized_weights()?;
            (route_set.routes, weights)
        }
        None => (session.collect_routes()?, None),
    };

    let weights = match file_weights {
        Some(weights) => weights,
        None => session.collect_weights()?,
    };
    info!(
        "Scoring with weights distance={:.4} quality={:.4} safety={:.4}",
        weights.weight_distance, weights.weight_quality, weights.weight_safety
    );

    let selector = OptimizedPathSelection::with_long_route_factor(args.long_route_factor);
    info!(
        "Discarding routes longer than {}x the shortest route",
        selector.long_route_factor()
    );
    let optimal = match selector.select(routes, &weights) {
        Ok(route) => Some(route),
        Err(SelectionError::EmptyRouteSet) => None,
        Err(e) => return Err(e.into()),
    };

    session.render(optimal.as_ref(), args.json)?;

    Ok(())
}
