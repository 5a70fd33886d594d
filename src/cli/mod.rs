//! Command-line parsing for `fitm`.
//!
//! Parsing only: each subcommand's arguments are plain structs that
//! `app` turns into calls on the library.

use std::path::PathBuf;

use clap::{ArgAction, Args, Parser, Subcommand};

use crate::domain::ModelKind;

/// Top-level CLI.
#[derive(Debug, Parser)]
#[command(name = "fitm", version, about = "Fit-function library: evaluate, sample and inspect fit models")]
pub struct Cli {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// List every model with its parameters and formula.
    List,
    /// Evaluate a model at given points or over an even grid.
    Eval(EvalArgs),
    /// Print an initial parameter guess for a data set.
    Guess(GuessArgs),
    /// Residuals and fit quality of a model against a data set.
    Residuals(ResidualArgs),
    /// Generate a noisy synthetic data set from a model.
    Sample(SampleArgs),
    /// Inspect or export the plot style sheet.
    #[command(subcommand)]
    Style(StyleCommand),
}

/// Model and parameters, shared by several subcommands.
#[derive(Debug, Args, Clone)]
pub struct ModelArgs {
    /// Model name (see `fitm list`).
    #[arg(short, long, value_enum)]
    pub model: ModelKind,

    /// Positional parameters, comma separated.
    #[arg(short, long, value_delimiter = ',', allow_hyphen_values = true, required = true)]
    pub params: Vec<f64>,
}

#[derive(Debug, Args)]
pub struct EvalArgs {
    #[command(flatten)]
    pub model: ModelArgs,

    /// Points to evaluate at, comma separated.
    #[arg(long = "x", value_name = "X", value_delimiter = ',', allow_hyphen_values = true, conflicts_with_all = ["from", "to"])]
    pub xs: Vec<f64>,

    /// Grid start.
    #[arg(long, allow_hyphen_values = true, requires = "to")]
    pub from: Option<f64>,

    /// Grid end.
    #[arg(long, allow_hyphen_values = true, requires = "from")]
    pub to: Option<f64>,

    /// Grid size.
    #[arg(long, default_value_t = 101)]
    pub steps: usize,

    /// Write the evaluated points to CSV.
    #[arg(long, value_name = "CSV")]
    pub export: Option<PathBuf>,

    /// Save the model (and the evaluated grid) as JSON.
    #[arg(long, value_name = "JSON")]
    pub save: Option<PathBuf>,
}

#[derive(Debug, Args)]
pub struct GuessArgs {
    #[arg(short, long, value_enum)]
    pub model: ModelKind,

    /// Data CSV with `x` and `y` columns.
    #[arg(short, long, value_name = "CSV")]
    pub data: PathBuf,
}

#[derive(Debug, Args)]
pub struct ResidualArgs {
    #[arg(short, long, value_enum, required_unless_present = "curve", requires = "params")]
    pub model: Option<ModelKind>,

    #[arg(short, long, value_delimiter = ',', allow_hyphen_values = true)]
    pub params: Vec<f64>,

    /// Model JSON written by `fitm eval --save`.
    #[arg(long, value_name = "JSON", conflicts_with_all = ["model", "params"])]
    pub curve: Option<PathBuf>,

    /// Data CSV with `x` and `y` columns.
    #[arg(short, long, value_name = "CSV")]
    pub data: PathBuf,

    /// Show the N largest residuals.
    #[arg(long, default_value_t = 10)]
    pub top: usize,
}

#[derive(Debug, Args)]
pub struct SampleArgs {
    #[command(flatten)]
    pub model: ModelArgs,

    #[arg(long, allow_hyphen_values = true, default_value_t = 0.0)]
    pub from: f64,

    #[arg(long, allow_hyphen_values = true, default_value_t = 1.0)]
    pub to: f64,

    /// Number of points.
    #[arg(short = 'n', long, default_value_t = 50)]
    pub count: usize,

    /// Standard deviation of the additive noise.
    #[arg(long, default_value_t = 0.0)]
    pub noise: f64,

    #[arg(long, default_value_t = 42)]
    pub seed: u64,

    /// Draw x uniformly at random instead of on an even grid.
    #[arg(long)]
    pub random_x: bool,

    /// Output CSV (stdout if omitted).
    #[arg(short, long, value_name = "CSV")]
    pub out: Option<PathBuf>,
}

#[derive(Debug, Subcommand)]
pub enum StyleCommand {
    /// Print the resolved style as JSON.
    Show {
        /// Style sheet to read (defaults to $FITM_STYLE, then the bundled sheet).
        #[arg(long)]
        file: Option<PathBuf>,
    },
    /// Write the bundled style sheet to a file.
    Write { path: PathBuf },
    /// Validate a style sheet.
    Check { path: PathBuf },
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn eval_accepts_negative_params_and_points() {
        let cli = Cli::parse_from([
            "fitm", "eval", "--model", "gaussian", "--params", "2,-5,1,1", "--x", "-1,0,5",
        ]);
        let Command::Eval(args) = cli.command else {
            panic!("expected eval");
        };
        assert_eq!(args.model.model, ModelKind::Gaussian);
        assert_eq!(args.model.params, vec![2.0, -5.0, 1.0, 1.0]);
        assert_eq!(args.xs, vec![-1.0, 0.0, 5.0]);
    }

    #[test]
    fn residuals_take_model_or_curve() {
        let cli = Cli::parse_from(["fitm", "residuals", "--curve", "m.json", "--data", "d.csv"]);
        assert!(matches!(cli.command, Command::Residuals(ResidualArgs { curve: Some(_), .. })));

        let bad = Cli::try_parse_from(["fitm", "residuals", "--data", "d.csv"]);
        assert!(bad.is_err());
    }

    #[test]
    fn verbosity_counts() {
        let cli = Cli::parse_from(["fitm", "-vv", "list"]);
        assert_eq!(cli.verbose, 2);
    }
}
