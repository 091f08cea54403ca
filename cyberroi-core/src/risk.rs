//! Risk and return calculation (SLE, ARO, ALE, ROI)
//!
//! Global invariants enforced:
//! - Deterministic, side-effect free calculations
//! - No rounding before display
//! - `controls_cost == 0` yields an ROI of exactly 0, never an error
//! - Negative risk reduction is passed through unclamped

use crate::maturity::MaturityLevel;
use serde::{Deserialize, Serialize};

/// Days used to spread annual revenue into a daily downtime loss
pub const DAYS_PER_YEAR: f64 = 365.0;

/// Input record collected from the presentation layer
///
/// Fields are assumed range-checked by the caller; see
/// [`crate::validate::validate_inputs`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct RiskInputs {
    pub maturity_level: MaturityLevel,
    /// Annual security spend
    pub controls_cost: f64,
    /// Annual gross revenue
    pub revenue: f64,
    /// Users potentially affected by a breach
    pub user_count: u64,
    /// Per-user credit-monitoring cost
    pub monitoring_cost_per_user: f64,
    /// Incident cost excluding user and downtime components
    pub base_incident_cost: f64,
    pub downtime_days: u32,
    /// Daily revenue loss during an outage
    pub cost_per_downtime_day: f64,
    /// Likelihood of an incident before controls, in percent
    pub aro_before_pct: f64,
    /// Likelihood of an incident after controls, in percent
    pub aro_after_pct: f64,
}

impl Default for RiskInputs {
    /// Dashboard starting position
    fn default() -> Self {
        let revenue = 500_000_000.0;
        RiskInputs {
            maturity_level: MaturityLevel::Initial,
            controls_cost: 1_100_000.0,
            revenue,
            user_count: 600_000,
            monitoring_cost_per_user: 10.0,
            base_incident_cost: 6_000_000.0,
            downtime_days: 5,
            cost_per_downtime_day: default_cost_per_downtime_day(revenue),
            aro_before_pct: 30.0,
            aro_after_pct: 10.0,
        }
    }
}

/// ROI tier classification
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RoiTier {
    Low,      // < 100%
    Moderate, // 100-200%
    Strong,   // >= 200%
}

impl RoiTier {
    pub fn as_str(&self) -> &'static str {
        match self {
            RoiTier::Low => "low",
            RoiTier::Moderate => "moderate",
            RoiTier::Strong => "strong",
        }
    }

    /// Display color used for the ROI tile
    pub fn color_hex(&self) -> &'static str {
        match self {
            RoiTier::Low => "#e06c75",
            RoiTier::Moderate => "#e5c07b",
            RoiTier::Strong => "#00cc96",
        }
    }
}

/// ROI tier thresholds, in percent
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RoiThresholds {
    pub moderate: f64,
    pub strong: f64,
}

impl Default for RoiThresholds {
    fn default() -> Self {
        RoiThresholds {
            moderate: 100.0,
            strong: 200.0,
        }
    }
}

/// Output record derived from [`RiskInputs`]
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct RiskAssessment {
    pub maturity_modifier: f64,
    pub aro_before: f64,
    pub aro_after: f64,
    pub user_breach_cost: f64,
    pub downtime_cost: f64,
    /// Single Loss Expectancy
    pub sle: f64,
    /// Annualized Loss Expectancy before controls
    pub ale_before: f64,
    /// Annualized Loss Expectancy after controls
    pub ale_after: f64,
    pub risk_reduction: f64,
    pub roi_ratio: f64,
    pub roi_pct: f64,
    pub roi_tier: RoiTier,
}

/// Daily downtime loss assumed when only revenue is known
pub fn default_cost_per_downtime_day(revenue: f64) -> f64 {
    revenue / DAYS_PER_YEAR
}

/// Single Loss Expectancy
///
/// Formula:
/// SLE = base_incident_cost + user_count * monitoring_cost_per_user + downtime_days * cost_per_downtime_day
pub fn calculate_sle(inputs: &RiskInputs) -> f64 {
    let (user_breach_cost, downtime_cost) = impact_components(inputs);
    inputs.base_incident_cost + user_breach_cost + downtime_cost
}

fn impact_components(inputs: &RiskInputs) -> (f64, f64) {
    let user_breach_cost = inputs.user_count as f64 * inputs.monitoring_cost_per_user;
    let downtime_cost = inputs.downtime_days as f64 * inputs.cost_per_downtime_day;
    (user_breach_cost, downtime_cost)
}

/// Scale a raw likelihood percentage into an annualized rate
pub fn calculate_aro(pct: f64, maturity_modifier: f64) -> f64 {
    (pct / 100.0) * maturity_modifier
}

/// ROI ratio, defined as 0 when nothing is spent on controls
pub fn calculate_roi_ratio(risk_reduction: f64, controls_cost: f64) -> f64 {
    if controls_cost == 0.0 {
        0.0
    } else {
        risk_reduction / controls_cost
    }
}

/// Assign ROI tier with default thresholds
pub fn classify_roi_tier(roi_pct: f64) -> RoiTier {
    classify_roi_tier_with_thresholds(roi_pct, &RoiThresholds::default())
}

/// Assign ROI tier with custom thresholds
pub fn classify_roi_tier_with_thresholds(roi_pct: f64, thresholds: &RoiThresholds) -> RoiTier {
    if roi_pct < thresholds.moderate {
        RoiTier::Low
    } else if roi_pct < thresholds.strong {
        RoiTier::Moderate
    } else {
        RoiTier::Strong
    }
}

/// Compute the full assessment with default tier thresholds
pub fn compute(inputs: &RiskInputs) -> RiskAssessment {
    compute_with_thresholds(inputs, &RoiThresholds::default())
}

/// Compute the full assessment with custom tier thresholds
pub fn compute_with_thresholds(inputs: &RiskInputs, thresholds: &RoiThresholds) -> RiskAssessment {
    let maturity_modifier = inputs.maturity_level.modifier();
    let aro_before = calculate_aro(inputs.aro_before_pct, maturity_modifier);
    let aro_after = calculate_aro(inputs.aro_after_pct, maturity_modifier);

    let (user_breach_cost, downtime_cost) = impact_components(inputs);
    let sle = inputs.base_incident_cost + user_breach_cost + downtime_cost;

    let ale_before = sle * aro_before;
    let ale_after = sle * aro_after;
    let risk_reduction = ale_before - ale_after;

    let roi_ratio = calculate_roi_ratio(risk_reduction, inputs.controls_cost);
    let roi_pct = roi_ratio * 100.0;
    let roi_tier = classify_roi_tier_with_thresholds(roi_pct, thresholds);

    RiskAssessment {
        maturity_modifier,
        aro_before,
        aro_after,
        user_breach_cost,
        downtime_cost,
        sle,
        ale_before,
        ale_after,
        risk_reduction,
        roi_ratio,
        roi_pct,
        roi_tier,
    }
}

/// Assessment of one input record re-run under a given maturity level
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MaturityComparison {
    pub maturity_level: MaturityLevel,
    pub assessment: RiskAssessment,
}

/// Re-run the assessment under every maturity level, least mature first
pub fn compare_maturity_levels(
    inputs: &RiskInputs,
    thresholds: &RoiThresholds,
) -> Vec<MaturityComparison> {
    MaturityLevel::ALL
        .into_iter()
        .map(|maturity_level| MaturityComparison {
            maturity_level,
            assessment: compute_with_thresholds(
                &RiskInputs {
                    maturity_level,
                    ..*inputs
                },
                thresholds,
            ),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_close(actual: f64, expected: f64) {
        let tolerance = 1e-6 * expected.abs().max(1.0);
        assert!(
            (actual - expected).abs() <= tolerance,
            "expected {}, got {}",
            expected,
            actual
        );
    }

    fn zeroed(level: MaturityLevel) -> RiskInputs {
        RiskInputs {
            maturity_level: level,
            controls_cost: 0.0,
            revenue: 0.0,
            user_count: 0,
            monitoring_cost_per_user: 0.0,
            base_incident_cost: 0.0,
            downtime_days: 0,
            cost_per_downtime_day: 0.0,
            aro_before_pct: 0.0,
            aro_after_pct: 0.0,
        }
    }

    #[test]
    fn test_classify_roi_tier_boundaries() {
        assert_eq!(classify_roi_tier(-50.0), RoiTier::Low);
        assert_eq!(classify_roi_tier(0.0), RoiTier::Low);
        assert_eq!(classify_roi_tier(99.999), RoiTier::Low);
        assert_eq!(classify_roi_tier(100.0), RoiTier::Moderate);
        assert_eq!(classify_roi_tier(199.999), RoiTier::Moderate);
        assert_eq!(classify_roi_tier(200.0), RoiTier::Strong);
        assert_eq!(classify_roi_tier(10_000.0), RoiTier::Strong);
    }

    #[test]
    fn test_classify_with_custom_thresholds() {
        let thresholds = RoiThresholds {
            moderate: 50.0,
            strong: 150.0,
        };
        assert_eq!(classify_roi_tier_with_thresholds(49.0, &thresholds), RoiTier::Low);
        assert_eq!(classify_roi_tier_with_thresholds(50.0, &thresholds), RoiTier::Moderate);
        assert_eq!(classify_roi_tier_with_thresholds(150.0, &thresholds), RoiTier::Strong);
    }

    #[test]
    fn test_tier_labels_and_colors() {
        assert_eq!(RoiTier::Low.as_str(), "low");
        assert_eq!(RoiTier::Moderate.as_str(), "moderate");
        assert_eq!(RoiTier::Strong.as_str(), "strong");
        assert_eq!(RoiTier::Low.color_hex(), "#e06c75");
        assert_eq!(RoiTier::Moderate.color_hex(), "#e5c07b");
        assert_eq!(RoiTier::Strong.color_hex(), "#00cc96");
    }

    #[test]
    fn test_roi_ratio_zero_cost_guard() {
        assert_eq!(calculate_roi_ratio(3_769_863.0, 0.0), 0.0);
        assert_eq!(calculate_roi_ratio(-10.0, 0.0), 0.0);
        assert_eq!(calculate_roi_ratio(300.0, 150.0), 2.0);
    }

    #[test]
    fn test_aro_scaling() {
        assert_eq!(calculate_aro(100.0, 1.3), 1.3);
        assert_eq!(calculate_aro(0.0, 0.7), 0.0);
        assert_close(calculate_aro(30.0, 1.0), 0.3);
    }

    #[test]
    fn test_sle_matches_assessment() {
        let inputs = RiskInputs::default();
        assert_eq!(calculate_sle(&inputs), compute(&inputs).sle);
    }

    #[test]
    fn test_default_cost_per_day_spreads_revenue() {
        assert_eq!(default_cost_per_downtime_day(365.0), 1.0);
        assert_eq!(default_cost_per_downtime_day(0.0), 0.0);
        assert_close(default_cost_per_downtime_day(500_000_000.0), 1_369_863.013_698_63);
    }

    #[test]
    fn test_roi_exactly_100_and_200_percent() {
        let base = RiskInputs {
            base_incident_cost: 1_000_000.0,
            aro_before_pct: 100.0,
            aro_after_pct: 0.0,
            ..zeroed(MaturityLevel::Defined)
        };

        let at_100 = compute(&RiskInputs {
            controls_cost: 1_000_000.0,
            ..base
        });
        assert_eq!(at_100.roi_pct, 100.0);
        assert_eq!(at_100.roi_tier, RoiTier::Moderate);

        let at_200 = compute(&RiskInputs {
            controls_cost: 500_000.0,
            ..base
        });
        assert_eq!(at_200.roi_pct, 200.0);
        assert_eq!(at_200.roi_tier, RoiTier::Strong);
    }

    #[test]
    fn test_compare_maturity_levels_covers_all_levels() {
        let inputs = RiskInputs::default();
        let comparisons = compare_maturity_levels(&inputs, &RoiThresholds::default());

        assert_eq!(comparisons.len(), 5);
        for (comparison, level) in comparisons.iter().zip(MaturityLevel::ALL) {
            assert_eq!(comparison.maturity_level, level);
            assert_eq!(comparison.assessment.maturity_modifier, level.modifier());
            // SLE does not depend on maturity
            assert_eq!(comparison.assessment.sle, compute(&inputs).sle);
        }

        // More mature programs see lower expected losses
        let ale: Vec<f64> = comparisons.iter().map(|c| c.assessment.ale_before).collect();
        assert!(ale.windows(2).all(|w| w[0] > w[1]));
    }

    #[test]
    fn test_compare_maturity_matches_direct_compute() {
        let inputs = RiskInputs::default();
        let comparisons = compare_maturity_levels(&inputs, &RoiThresholds::default());
        let initial = comparisons
            .iter()
            .find(|c| c.maturity_level == inputs.maturity_level)
            .unwrap();
        assert_eq!(initial.assessment, compute(&inputs));
    }
}
