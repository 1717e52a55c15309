//! CLI argument definitions: top-level `Cli` struct and `Commands` enum.

use clap::{ArgAction, Args, Parser, Subcommand};
use std::path::PathBuf;

/// Variables reported after a maximization when no `--var` is given.
pub(crate) const DEFAULT_VARIABLES: &[&str] = &[
    "PinLeng",
    "PassStr",
    "OtpLeng",
    "PlateLicense",
    "Certificate",
    "SmartCard",
    "Token",
    "SignCryp",
    "GroupSign",
    "RingSign",
    "Iris",
    "Face",
    "Fingerprint",
    "TwoFactor",
    "PReplayAttack",
    "PImpersAttack",
    "PSessionAttack",
    "AssetValue",
    "PerformancePriority",
    "ConfPriority",
    "AuthentPriority",
    "IntegPriority",
    "AvgIntegrity",
    "EffectPriority",
    "EfficPriority",
    "AvgPerformance",
    "PerforSum",
    "AVGSumConf",
    "AvgEfficiency",
    "Security",
    "Confidentiality",
    "Integrity",
    "Authenticity",
    "Usability",
    "Effectiveness",
    "Efficiency",
    "Performance",
    "TotalRisk",
];

#[derive(Parser)]
#[command(name = "satmax")]
#[command(about = "Maximize an SMT objective by binary search over an external solver")]
#[command(version)]
pub(crate) struct Cli {
    /// Configuration file (TOML or YAML). Defaults to ./satmax.toml when present
    #[arg(long, global = true)]
    pub(crate) config: Option<PathBuf>,

    /// Show every oracle round (-v) or solver invocations (-vv)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub(crate) verbose: u8,

    /// Plain log lines on stderr instead of the colored console
    #[arg(long, global = true)]
    pub(crate) plain: bool,

    #[command(subcommand)]
    pub(crate) command: Commands,
}

#[derive(Subcommand)]
pub(crate) enum Commands {
    /// Find the largest feasible Utility for one scenario
    Maximize(MaximizeArgs),

    /// Repeat the search per scenario and report time, memory and Utility
    Bench(BenchArgs),
}

#[derive(Args)]
pub(crate) struct MaximizeArgs {
    /// Scenario identifier; reads <dir>/Scenario<id>/model-zu-<id>.txt
    pub(crate) scenario: String,

    /// Directory holding the Scenario<id> folders
    #[arg(long, default_value = ".")]
    pub(crate) dir: PathBuf,

    /// Lower end of the search interval
    #[arg(long, allow_negative_numbers = true)]
    pub(crate) min: Option<f64>,

    /// Upper end of the search interval
    #[arg(long, allow_negative_numbers = true)]
    pub(crate) max: Option<f64>,

    /// Search precision
    #[arg(long)]
    pub(crate) eps: Option<f64>,

    /// Solver executable, overriding the configuration
    #[arg(long)]
    pub(crate) solver: Option<String>,

    /// Variable to report from the best model (repeatable)
    #[arg(long = "var", value_name = "NAME")]
    pub(crate) vars: Vec<String>,

    /// Print the full solver response for the best threshold
    #[arg(long)]
    pub(crate) print_model: bool,
}

#[derive(Args)]
pub(crate) struct BenchArgs {
    /// Scenario to benchmark (repeatable); defaults to the configured list
    #[arg(long = "scenario", value_name = "ID")]
    pub(crate) scenarios: Vec<u32>,

    /// Measured runs per scenario
    #[arg(long)]
    pub(crate) runs: Option<usize>,

    /// Unmeasured runs before measuring
    #[arg(long)]
    pub(crate) warmup: Option<usize>,

    /// Directory holding the Scenario<id> folders
    #[arg(long)]
    pub(crate) dir: Option<PathBuf>,

    /// Solver executable, overriding the configuration
    #[arg(long)]
    pub(crate) solver: Option<String>,

    /// Write per-run results as CSV
    #[arg(long)]
    pub(crate) csv: Option<PathBuf>,

    /// Write a Markdown report
    #[arg(long)]
    pub(crate) markdown: Option<PathBuf>,
}
