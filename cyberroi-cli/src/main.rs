//! cyberroi CLI - return on cybersecurity spending from the command line

#![deny(warnings)]

// Global invariants enforced:
// - Report goes to stdout, diagnostics to stderr
// - Identical input yields byte-for-byte identical output

use anyhow::Context;
use clap::{Parser, Subcommand};
use cyberroi_core::config::{self, InputConfig, ResolvedConfig};
use cyberroi_core::{
    assess, compare_maturity_levels, render_json, render_text, DisplayOptions, MaturityLevel,
};
use std::path::PathBuf;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "cyberroi")]
#[command(about = "Estimate the return on cybersecurity spending (SLE, ARO, ALE, ROI)")]
#[command(version = env!("CYBERROI_VERSION"))]
struct Cli {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Compute risk reduction and ROI for one scenario
    Compute {
        #[command(flatten)]
        inputs: InputArgs,

        /// Output format
        #[arg(long, default_value = "text")]
        format: OutputFormat,

        /// Show the loss exposure and cost vs reduction charts (disables executive mode)
        #[arg(long)]
        detailed: bool,

        /// Use full-width charts (disables compact mode)
        #[arg(long)]
        expanded: bool,

        /// Also compute the scenario under every maturity level
        #[arg(long)]
        compare_maturity: bool,

        /// Path to config file (default: auto-discover)
        #[arg(long)]
        config: Option<PathBuf>,
    },
    /// Validate a configuration file
    #[command(name = "config")]
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

/// Scenario inputs; unset flags fall back to the config file, then defaults
#[derive(clap::Args)]
struct InputArgs {
    /// Security program maturity (Initial, Developing, Defined, Managed, Optimized)
    #[arg(long)]
    maturity: Option<MaturityLevel>,

    /// Annual cybersecurity budget ($)
    #[arg(long)]
    controls_cost: Option<f64>,

    /// Annual gross revenue ($)
    #[arg(long)]
    revenue: Option<f64>,

    /// Users affected by a breach
    #[arg(long)]
    users: Option<u64>,

    /// Credit monitoring cost per affected user ($)
    #[arg(long)]
    monitoring_cost: Option<f64>,

    /// Incident cost excluding user and downtime components ($)
    #[arg(long)]
    base_incident_cost: Option<f64>,

    /// Estimated days of downtime
    #[arg(long)]
    downtime_days: Option<u32>,

    /// Revenue lost per day of downtime ($, default: revenue / 365)
    #[arg(long)]
    cost_per_day: Option<f64>,

    /// Likelihood of an incident before controls (%)
    #[arg(long)]
    aro_before: Option<f64>,

    /// Likelihood of an incident after controls (%)
    #[arg(long)]
    aro_after: Option<f64>,
}

impl From<InputArgs> for InputConfig {
    fn from(args: InputArgs) -> Self {
        InputConfig {
            maturity_level: args.maturity,
            controls_cost: args.controls_cost,
            revenue: args.revenue,
            user_count: args.users,
            monitoring_cost_per_user: args.monitoring_cost,
            base_incident_cost: args.base_incident_cost,
            downtime_days: args.downtime_days,
            cost_per_downtime_day: args.cost_per_day,
            aro_before_pct: args.aro_before,
            aro_after_pct: args.aro_after,
        }
    }
}

#[derive(Subcommand)]
enum ConfigAction {
    /// Validate a config file without running a calculation
    Validate {
        /// Path to config file (default: auto-discover from current directory)
        #[arg(long)]
        path: Option<PathBuf>,
    },
    /// Show the resolved configuration (merged defaults + config file)
    Show {
        /// Path to config file (default: auto-discover from current directory)
        #[arg(long)]
        path: Option<PathBuf>,
    },
}

#[derive(Clone, Copy, clap::ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command {
        Commands::Compute {
            inputs,
            format,
            detailed,
            expanded,
            compare_maturity,
            config: config_path,
        } => {
            let project_root = std::env::current_dir()?;
            let resolved = config::load_and_resolve(&project_root, config_path.as_deref())
                .context("failed to load configuration")?;

            if let Some(config_path) = &resolved.config_path {
                info!("using config: {}", config_path.display());
            }

            // CLI flags override config file values
            let scenario = InputConfig::from(inputs).or(resolved.inputs).resolve();
            debug!(?scenario, "resolved scenario inputs");

            let display = DisplayOptions {
                executive_mode: resolved.display.executive_mode && !detailed,
                compact_mode: resolved.display.compact_mode && !expanded,
            };

            let mut report = assess(&scenario, &resolved.thresholds, &display)
                .context("invalid scenario input")?;
            if compare_maturity {
                let comparison = compare_maturity_levels(&scenario, &resolved.thresholds);
                report = report.with_maturity_comparison(comparison);
            }

            match format {
                OutputFormat::Text => {
                    print!("{}", render_text(&report, &display));
                }
                OutputFormat::Json => {
                    println!("{}", render_json(&report));
                }
            }
        }
        Commands::Config { action } => match action {
            ConfigAction::Validate { path } => {
                let project_root = std::env::current_dir()?;
                let resolved = config::load_and_resolve(&project_root, path.as_deref());

                match resolved {
                    Ok(config) => {
                        if let Some(ref p) = config.config_path {
                            println!("Config valid: {}", p.display());
                        } else {
                            println!("No config file found. Using defaults.");
                        }
                    }
                    Err(e) => {
                        eprintln!("Config validation failed: {:#}", e);
                        std::process::exit(1);
                    }
                }
            }
            ConfigAction::Show { path } => {
                let project_root = std::env::current_dir()?;
                let resolved = config::load_and_resolve(&project_root, path.as_deref())
                    .context("failed to load configuration")?;
                print_resolved_config(&resolved);
            }
        },
    }

    Ok(())
}

/// Install the stderr subscriber; RUST_LOG wins over -v
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
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn print_resolved_config(resolved: &ResolvedConfig) {
    let inputs = resolved.inputs.resolve();

    println!("Configuration:");
    if let Some(ref p) = resolved.config_path {
        println!("  Source: {}", p.display());
    } else {
        println!("  Source: defaults (no config file found)");
    }
    println!();
    println!("Inputs:");
    println!("  maturity_level: {}", inputs.maturity_level);
    println!("  controls_cost: {}", inputs.controls_cost);
    println!("  revenue: {}", inputs.revenue);
    println!("  user_count: {}", inputs.user_count);
    println!("  monitoring_cost_per_user: {}", inputs.monitoring_cost_per_user);
    println!("  base_incident_cost: {}", inputs.base_incident_cost);
    println!("  downtime_days: {}", inputs.downtime_days);
    println!("  cost_per_downtime_day: {}", inputs.cost_per_downtime_day);
    println!("  aro_before_pct: {}", inputs.aro_before_pct);
    println!("  aro_after_pct: {}", inputs.aro_after_pct);
    println!();
    println!("Thresholds:");
    println!("  moderate: {}", resolved.thresholds.moderate);
    println!("  strong: {}", resolved.thresholds.strong);
    println!();
    println!("Display:");
    println!("  executive_mode: {}", resolved.display.executive_mode);
    println!("  compact_mode: {}", resolved.display.compact_mode);
}
