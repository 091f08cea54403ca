//! Chart data derived from an assessment
//!
//! These are pure projections; nothing here feeds back into the calculation.

use crate::risk::{RiskAssessment, RiskInputs, RoiTier};
use serde::{Deserialize, Serialize};

const MILLION: f64 = 1_000_000.0;

/// One labelled amount
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CostComponent {
    pub label: String,
    pub amount: f64,
    pub millions: f64,
}

impl CostComponent {
    fn new(label: &str, amount: f64) -> Self {
        CostComponent {
            label: label.to_string(),
            amount,
            millions: to_millions(amount),
        }
    }
}

/// The three components of a single incident's cost
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IncidentCostBreakdown {
    pub components: Vec<CostComponent>,
    pub total: f64,
}

/// Annualized loss before and after controls
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LossExposure {
    pub before: CostComponent,
    pub after: CostComponent,
}

/// Control spend against the loss it avoids
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CostVsReduction {
    pub controls_cost: CostComponent,
    pub risk_reduction: CostComponent,
    /// Share of the combined amount, in percent
    pub controls_cost_share_pct: f64,
    pub risk_reduction_share_pct: f64,
}

pub fn to_millions(amount: f64) -> f64 {
    amount / MILLION
}

/// Base, user breach and downtime components of the SLE, in that order
pub fn incident_cost_breakdown(
    inputs: &RiskInputs,
    assessment: &RiskAssessment,
) -> IncidentCostBreakdown {
    IncidentCostBreakdown {
        components: vec![
            CostComponent::new("Base Incident Cost", inputs.base_incident_cost),
            CostComponent::new("User Breach Cost", assessment.user_breach_cost),
            CostComponent::new("Downtime Cost", assessment.downtime_cost),
        ],
        total: assessment.sle,
    }
}

pub fn loss_exposure(assessment: &RiskAssessment) -> LossExposure {
    LossExposure {
        before: CostComponent::new("Before Controls", assessment.ale_before),
        after: CostComponent::new("After Controls", assessment.ale_after),
    }
}

/// Budget and risk reduction as shares of their sum
///
/// A negative risk reduction counts as 0 in the shares, so both stay
/// within [0, 100]; the component amount keeps its signed value. Shares
/// are 0 when the combined amount is not positive.
pub fn cost_vs_reduction(inputs: &RiskInputs, assessment: &RiskAssessment) -> CostVsReduction {
    let reduction = assessment.risk_reduction.max(0.0);
    let total = inputs.controls_cost + reduction;
    let (controls_share, reduction_share) = if total > 0.0 {
        (
            inputs.controls_cost / total * 100.0,
            reduction / total * 100.0,
        )
    } else {
        (0.0, 0.0)
    };

    CostVsReduction {
        controls_cost: CostComponent::new("Cybersecurity Budget", inputs.controls_cost),
        risk_reduction: CostComponent::new("Risk Reduction", assessment.risk_reduction),
        controls_cost_share_pct: controls_share,
        risk_reduction_share_pct: reduction_share,
    }
}

/// Advisory text shown under the ROI tile
pub fn advisory(tier: RoiTier) -> &'static str {
    match tier {
        RoiTier::Low => {
            "Low return: avoided losses do not cover the control spend. \
             Revisit control selection or the likelihood assumptions."
        }
        RoiTier::Moderate => {
            "Moderate return: controls pay for themselves. \
             Look for the components driving single loss expectancy to improve further."
        }
        RoiTier::Strong => {
            "Strong return: avoided losses are at least twice the control spend. \
             The program is well justified at this budget."
        }
    }
}
