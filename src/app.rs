//! Top-level application orchestration.
//!
//! `src/main.rs` is intentionally tiny; this module is the "real main" that:
//! - loads `.env` and resolves the run configuration
//! - installs the log subscriber
//! - dispatches subcommands onto the library
//! - prints reports and writes optional exports

use std::io::{self, Write};
use std::path::PathBuf;

use clap::Parser;
use tracing::{Level, debug, info, warn};
use tracing_subscriber::FmtSubscriber;

use crate::cli::{Cli, Command, EvalArgs, GuessArgs, ResidualArgs, SampleArgs, StyleCommand};
use crate::domain::{CurveGrid, CurveModel, DataPoint, RunConfig, SampleConfig};
use crate::error::AppError;
use crate::math::linspace;
use crate::style::{BUILTIN_STYLE, PlotStyle, StyleSheet};

/// Environment variable naming a default style sheet.
pub const STYLE_ENV: &str = "FITM_STYLE";
/// Environment variable holding a default log level.
pub const LOG_ENV: &str = "FITM_LOG";

/// Entry point for the `fitm` binary.
pub fn run() -> Result<(), AppError> {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();
    let config = run_config(cli.verbose);
    init_logging(&config)?;

    match cli.command {
        Command::List => {
            print!("{}", crate::report::format_model_list());
            Ok(())
        }
        Command::Eval(args) => handle_eval(args),
        Command::Guess(args) => handle_guess(args),
        Command::Residuals(args) => handle_residuals(args),
        Command::Sample(args) => handle_sample(args),
        Command::Style(cmd) => handle_style(cmd, &config),
    }
}

/// Merge environment settings with CLI flags. Flags win.
pub fn run_config(verbose: u8) -> RunConfig {
    let env_level = std::env::var(LOG_ENV).ok().and_then(|v| verbosity_from_name(&v));
    RunConfig {
        style_path: std::env::var_os(STYLE_ENV).map(PathBuf::from),
        verbosity: if verbose > 0 { verbose } else { env_level.unwrap_or(0) },
    }
}

fn verbosity_from_name(name: &str) -> Option<u8> {
    match name.trim().to_ascii_lowercase().as_str() {
        "warn" | "warning" => Some(0),
        "info" => Some(1),
        "debug" => Some(2),
        "trace" => Some(3),
        _ => None,
    }
}

fn level_for(verbosity: u8) -> Level {
    match verbosity {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    }
}

fn init_logging(config: &RunConfig) -> Result<(), AppError> {
    let subscriber = FmtSubscriber::builder()
        .with_max_level(level_for(config.verbosity))
        .with_target(false)
        .with_writer(io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)
        .map_err(|e| AppError::new(2, format!("Failed to install logger: {e}")))
}

fn handle_eval(args: EvalArgs) -> Result<(), AppError> {
    let model = CurveModel::new(args.model.model, args.model.params)?;

    let xs = match (args.from, args.to) {
        (Some(a), Some(b)) => {
            if !(a.is_finite() && b.is_finite()) {
                return Err(AppError::new(2, "Grid bounds must be finite."));
            }
            linspace(a, b, args.steps)
        }
        _ if !args.xs.is_empty() => args.xs,
        _ => return Err(AppError::new(2, "Give --x values or a --from/--to grid.")),
    };

    let ys = crate::models::evaluate_par(model.kind, &xs, &model.params)?;
    let non_finite = ys.iter().filter(|y| !y.is_finite()).count();
    if non_finite > 0 {
        warn!(count = non_finite, "evaluation produced non-finite values");
    }
    debug!(model = model.kind.cli_name(), n = xs.len(), "evaluated model");

    print!("{}", crate::report::format_values(&xs, &ys));

    if let Some(path) = &args.export {
        let points: Vec<DataPoint> = xs.iter().zip(&ys).map(|(&x, &y)| DataPoint { x, y }).collect();
        crate::io::export::write_points_csv(path, &points)?;
    }
    if let Some(path) = &args.save {
        let file = crate::io::curve::model_file(&model, Some(CurveGrid { x: xs, y: ys }));
        crate::io::curve::write_model_json(path, &file)?;
    }
    Ok(())
}

fn handle_guess(args: GuessArgs) -> Result<(), AppError> {
    let data = crate::io::ingest::load_points(&args.data)?;
    let guess = crate::models::initial_guess(args.model, &data.points)?;
    print!("{}", crate::report::format_guess(args.model, guess.as_deref()));
    Ok(())
}

fn handle_residuals(args: ResidualArgs) -> Result<(), AppError> {
    let model = match (&args.curve, args.model) {
        (Some(path), _) => crate::io::curve::read_model_json(path)?.model,
        (None, Some(kind)) => CurveModel::new(kind, args.params)?,
        (None, None) => return Err(AppError::new(2, "Give --model/--params or --curve.")),
    };
    let data = crate::io::ingest::load_points(&args.data)?;

    let residuals = crate::report::compute_residuals(&data.points, &model)?;
    let quality = crate::report::fit_quality(&residuals);
    let worst = crate::report::largest_residuals(&residuals, args.top);
    info!(n = quality.n, rmse = quality.rmse, "computed residuals");

    print!("{}", crate::report::format_residual_report(&model, &quality, &worst));
    Ok(())
}

fn handle_sample(args: SampleArgs) -> Result<(), AppError> {
    let model = CurveModel::new(args.model.model, args.model.params)?;
    let config = SampleConfig {
        x_min: args.from,
        x_max: args.to,
        count: args.count,
        noise: args.noise,
        seed: args.seed,
        random_x: args.random_x,
    };
    let points = crate::data::generate_sample(&model, &config)?;

    match &args.out {
        Some(path) => crate::io::export::write_points_csv(path, &points),
        None => crate::io::export::write_points(io::stdout().lock(), &points),
    }
}

fn handle_style(cmd: StyleCommand, config: &RunConfig) -> Result<(), AppError> {
    match cmd {
        StyleCommand::Show { file } => {
            let sheet = match file.as_ref().or(config.style_path.as_ref()) {
                Some(path) => StyleSheet::load(path)?,
                None => StyleSheet::builtin()?,
            };
            let style = PlotStyle::from_sheet(&sheet)?;
            let json = serde_json::to_string_pretty(&style)
                .map_err(|e| AppError::new(2, format!("Failed to serialize style: {e}")))?;
            println!("{json}");
            Ok(())
        }
        StyleCommand::Write { path } => {
            std::fs::write(&path, BUILTIN_STYLE)
                .map_err(|e| AppError::new(2, format!("Failed to write style sheet '{}': {e}", path.display())))?;
            info!(path = %path.display(), "wrote style sheet");
            Ok(())
        }
        StyleCommand::Check { path } => {
            let sheet = StyleSheet::load(&path)?;
            let style = PlotStyle::from_sheet(&sheet)?;
            let mut out = io::stdout().lock();
            writeln!(
                out,
                "{}: ok ({} settings, {} colors, {} markers)",
                path.display(),
                sheet.len(),
                style.colors.len(),
                style.markers.len()
            )
            .map_err(|e| AppError::new(2, format!("Failed to write output: {e}")))
        }
    }
}
