//! cyberroi core library - return on cybersecurity spending
//!
//! Maps breach impact and likelihood assumptions to Single Loss Expectancy,
//! maturity-adjusted Annualized Rates of Occurrence, Annualized Loss
//! Expectancy and the ROI of control spend.

#![deny(warnings)]

// Global invariants enforced in this crate:
// - The calculation is a pure function of its input record
// - No global mutable state
// - No randomness, clocks, threads, or async
// - Identical input yields bit-identical output
// - Presentation options are passed explicitly

pub mod breakdown;
pub mod config;
pub mod error;
pub mod maturity;
pub mod report;
pub mod risk;
pub mod validate;

pub use config::ResolvedConfig;
pub use error::CalcError;
pub use maturity::{maturity_modifier, maturity_modifier_for, MaturityLevel};
pub use report::{render_json, render_text, DisplayOptions, RoiReport};
pub use risk::{
    classify_roi_tier, compare_maturity_levels, compute, compute_with_thresholds,
    default_cost_per_downtime_day, RiskAssessment, RiskInputs, RoiThresholds, RoiTier,
};
pub use validate::validate_inputs;

use tracing::trace;

/// Validate, compute and assemble a report in one step
///
/// This is the path the CLI takes: boundary validation rejects bad fields
/// before the calculator sees them.
pub fn assess(
    inputs: &RiskInputs,
    thresholds: &RoiThresholds,
    display: &DisplayOptions,
) -> Result<RoiReport, CalcError> {
    validate_inputs(inputs)?;
    let assessment = compute_with_thresholds(inputs, thresholds);
    trace!(
        maturity = inputs.maturity_level.as_str(),
        sle = assessment.sle,
        ale_before = assessment.ale_before,
        ale_after = assessment.ale_after,
        roi_pct = assessment.roi_pct,
        tier = assessment.roi_tier.as_str(),
        "computed risk assessment"
    );
    Ok(RoiReport::new(*inputs, assessment, display))
}
