//! Configuration file support for cyberroi
//!
//! Loads scenario defaults and display preferences from JSON files.
//!
//! Search order:
//! 1. Explicit path (--config CLI flag)
//! 2. `.cyberroirc.json` in the working directory
//! 3. `cyberroi.config.json` in the working directory
//!
//! All fields are optional. CLI flags take precedence over config file values.

use crate::maturity::MaturityLevel;
use crate::report::DisplayOptions;
use crate::risk::{default_cost_per_downtime_day, RiskInputs, RoiThresholds};
use crate::validate::validate_inputs;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::debug;

/// Config file names checked during discovery, highest priority first
pub const CONFIG_FILE_NAMES: &[&str] = &[".cyberroirc.json", "cyberroi.config.json"];

/// cyberroi configuration loaded from a JSON config file
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CyberRoiConfig {
    /// Scenario inputs used when the CLI does not supply them
    #[serde(default)]
    pub inputs: Option<InputConfig>,

    /// Custom ROI tier thresholds
    #[serde(default)]
    pub thresholds: Option<ThresholdConfig>,

    /// Report layout preferences
    #[serde(default)]
    pub display: Option<DisplayConfig>,
}

/// Partial input record; unset fields fall back to the dashboard defaults
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct InputConfig {
    pub maturity_level: Option<MaturityLevel>,
    pub controls_cost: Option<f64>,
    pub revenue: Option<f64>,
    pub user_count: Option<u64>,
    pub monitoring_cost_per_user: Option<f64>,
    pub base_incident_cost: Option<f64>,
    pub downtime_days: Option<u32>,
    /// Defaults to revenue / 365 when unset
    pub cost_per_downtime_day: Option<f64>,
    pub aro_before_pct: Option<f64>,
    pub aro_after_pct: Option<f64>,
}

/// Custom ROI tier thresholds, in percent
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ThresholdConfig {
    /// ROI percentage where the moderate tier starts (default: 100.0)
    pub moderate: Option<f64>,
    /// ROI percentage where the strong tier starts (default: 200.0)
    pub strong: Option<f64>,
}

/// Report layout preferences
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DisplayConfig {
    /// Hide secondary charts (default: true)
    pub executive_mode: Option<bool>,
    /// Narrow charts (default: true)
    pub compact_mode: Option<bool>,
}

/// Resolved configuration ready for use
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedConfig {
    /// Inputs supplied by the config file (CLI flags are merged on top)
    pub inputs: InputConfig,
    pub thresholds: RoiThresholds,
    pub display: DisplayOptions,
    /// Path the config was loaded from (None if defaults)
    pub config_path: Option<PathBuf>,
}

impl InputConfig {
    /// Field-wise merge, values in `self` win
    pub fn or(self, fallback: InputConfig) -> InputConfig {
        InputConfig {
            maturity_level: self.maturity_level.or(fallback.maturity_level),
            controls_cost: self.controls_cost.or(fallback.controls_cost),
            revenue: self.revenue.or(fallback.revenue),
            user_count: self.user_count.or(fallback.user_count),
            monitoring_cost_per_user: self
                .monitoring_cost_per_user
                .or(fallback.monitoring_cost_per_user),
            base_incident_cost: self.base_incident_cost.or(fallback.base_incident_cost),
            downtime_days: self.downtime_days.or(fallback.downtime_days),
            cost_per_downtime_day: self.cost_per_downtime_day.or(fallback.cost_per_downtime_day),
            aro_before_pct: self.aro_before_pct.or(fallback.aro_before_pct),
            aro_after_pct: self.aro_after_pct.or(fallback.aro_after_pct),
        }
    }

    /// Fill unset fields from the dashboard defaults
    ///
    /// The daily downtime loss is derived from the effective revenue, so a
    /// revenue override moves it too unless it is set explicitly.
    pub fn resolve(&self) -> RiskInputs {
        let defaults = RiskInputs::default();
        let revenue = self.revenue.unwrap_or(defaults.revenue);

        RiskInputs {
            maturity_level: self.maturity_level.unwrap_or(defaults.maturity_level),
            controls_cost: self.controls_cost.unwrap_or(defaults.controls_cost),
            revenue,
            user_count: self.user_count.unwrap_or(defaults.user_count),
            monitoring_cost_per_user: self
                .monitoring_cost_per_user
                .unwrap_or(defaults.monitoring_cost_per_user),
            base_incident_cost: self
                .base_incident_cost
                .unwrap_or(defaults.base_incident_cost),
            downtime_days: self.downtime_days.unwrap_or(defaults.downtime_days),
            cost_per_downtime_day: self
                .cost_per_downtime_day
                .unwrap_or_else(|| default_cost_per_downtime_day(revenue)),
            aro_before_pct: self.aro_before_pct.unwrap_or(defaults.aro_before_pct),
            aro_after_pct: self.aro_after_pct.unwrap_or(defaults.aro_after_pct),
        }
    }
}

impl CyberRoiConfig {
    /// Validate the configuration for logical errors
    pub fn validate(&self) -> Result<()> {
        // Validate thresholds are positive and ordered
        if let Some(ref t) = self.thresholds {
            let defaults = RoiThresholds::default();
            let moderate = t.moderate.unwrap_or(defaults.moderate);
            let strong = t.strong.unwrap_or(defaults.strong);

            for (name, value) in [("moderate", moderate), ("strong", strong)] {
                if !value.is_finite() || value <= 0.0 {
                    anyhow::bail!("thresholds.{} must be positive (got {})", name, value);
                }
            }
            if moderate >= strong {
                anyhow::bail!(
                    "thresholds.moderate ({}) must be less than thresholds.strong ({})",
                    moderate,
                    strong
                );
            }
        }

        // Validate scenario inputs against the same rules as the CLI boundary
        if let Some(ref inputs) = self.inputs {
            validate_inputs(&inputs.resolve()).map_err(|e| anyhow::anyhow!("inputs.{}", e))?;
        }

        Ok(())
    }

    /// Resolve config into the form used by the calculator and renderer
    pub fn resolve(&self) -> Result<ResolvedConfig> {
        self.validate()?;

        let defaults = RoiThresholds::default();
        let thresholds = match &self.thresholds {
            Some(t) => RoiThresholds {
                moderate: t.moderate.unwrap_or(defaults.moderate),
                strong: t.strong.unwrap_or(defaults.strong),
            },
            None => defaults,
        };

        let display_defaults = DisplayOptions::default();
        let display = match &self.display {
            Some(d) => DisplayOptions {
                executive_mode: d.executive_mode.unwrap_or(display_defaults.executive_mode),
                compact_mode: d.compact_mode.unwrap_or(display_defaults.compact_mode),
            },
            None => display_defaults,
        };

        Ok(ResolvedConfig {
            inputs: self.inputs.unwrap_or_default(),
            thresholds,
            display,
            config_path: None,
        })
    }
}

impl ResolvedConfig {
    /// Build a ResolvedConfig with all defaults (no config file)
    pub fn defaults() -> Result<Self> {
        CyberRoiConfig::default().resolve()
    }
}

/// Discover and load a config file from the project root
///
/// Returns `None` if no config file is found (use defaults).
pub fn discover_config(project_root: &Path) -> Result<Option<(CyberRoiConfig, PathBuf)>> {
    for name in CONFIG_FILE_NAMES {
        let path = project_root.join(name);
        if path.exists() {
            let config = load_config_file(&path)?;
            return Ok(Some((config, path)));
        }
    }

    debug!("no config file found in {}", project_root.display());
    Ok(None)
}

/// Load config from an explicit file path
pub fn load_config_file(path: &Path) -> Result<CyberRoiConfig> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read config file: {}", path.display()))?;

    let config: CyberRoiConfig = serde_json::from_str(&content)
        .with_context(|| format!("failed to parse config file: {}", path.display()))?;

    config
        .validate()
        .with_context(|| format!("invalid config in: {}", path.display()))?;

    debug!("loaded config from {}", path.display());
    Ok(config)
}

/// Load and resolve config for a project
///
/// If `config_path` is provided, loads from that file.
/// Otherwise, discovers config from the project root.
/// Returns default config if nothing is found.
pub fn load_and_resolve(project_root: &Path, config_path: Option<&Path>) -> Result<ResolvedConfig> {
    let (config, source_path) = if let Some(path) = config_path {
        (load_config_file(path)?, path.to_path_buf())
    } else {
        match discover_config(project_root)? {
            Some(found) => found,
            None => return ResolvedConfig::defaults(),
        }
    };

    let mut resolved = config.resolve()?;
    resolved.config_path = Some(source_path);
    Ok(resolved)
}
