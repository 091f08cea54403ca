//! Reporting and output generation
//!
//! Global invariants enforced:
//! - Deterministic output ordering
//! - Byte-for-byte identical output across runs
//! - Display choices arrive as explicit options, never ambient state

use crate::breakdown::{self, CostComponent, CostVsReduction, IncidentCostBreakdown, LossExposure};
use crate::risk::{MaturityComparison, RiskAssessment, RiskInputs};
use serde::{Deserialize, Serialize};

const BAR_WIDTH: usize = 40;
const COMPACT_BAR_WIDTH: usize = 24;
const LABEL_WIDTH: usize = 22;

/// How the report is laid out
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DisplayOptions {
    /// Show only the headline tiles and incident cost components
    pub executive_mode: bool,
    /// Use narrower charts
    pub compact_mode: bool,
}

impl Default for DisplayOptions {
    fn default() -> Self {
        DisplayOptions {
            executive_mode: true,
            compact_mode: true,
        }
    }
}

impl DisplayOptions {
    fn bar_width(&self) -> usize {
        if self.compact_mode {
            COMPACT_BAR_WIDTH
        } else {
            BAR_WIDTH
        }
    }
}

/// Everything the presentation layer displays for one calculation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct RoiReport {
    pub inputs: RiskInputs,
    pub assessment: RiskAssessment,
    pub roi_color: String,
    pub incident_costs: IncidentCostBreakdown,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub loss_exposure: Option<LossExposure>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub cost_vs_reduction: Option<CostVsReduction>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub maturity_comparison: Option<Vec<MaturityComparison>>,
    pub advisory: String,
}

impl RoiReport {
    /// Assemble a report; secondary charts are omitted in executive mode
    pub fn new(inputs: RiskInputs, assessment: RiskAssessment, display: &DisplayOptions) -> Self {
        let (loss_exposure, cost_vs_reduction) = if display.executive_mode {
            (None, None)
        } else {
            (
                Some(breakdown::loss_exposure(&assessment)),
                Some(breakdown::cost_vs_reduction(&inputs, &assessment)),
            )
        };

        RoiReport {
            inputs,
            roi_color: assessment.roi_tier.color_hex().to_string(),
            incident_costs: breakdown::incident_cost_breakdown(&inputs, &assessment),
            loss_exposure,
            cost_vs_reduction,
            maturity_comparison: None,
            advisory: breakdown::advisory(assessment.roi_tier).to_string(),
            assessment,
        }
    }

    pub fn with_maturity_comparison(mut self, comparison: Vec<MaturityComparison>) -> Self {
        self.maturity_comparison = Some(comparison);
        self
    }
}

/// Format an amount as `$X.XXM`
pub fn format_millions(amount: f64) -> String {
    let millions = breakdown::to_millions(amount);
    if millions < 0.0 {
        format!("-${:.2}M", -millions)
    } else {
        format!("${:.2}M", millions)
    }
}

/// Render a report as text output
pub fn render_text(report: &RoiReport, display: &DisplayOptions) -> String {
    let assessment = &report.assessment;
    let mut output = String::new();

    output.push_str("Cyber Risk ROI Calculator\n");
    output.push_str(&format!(
        "Maturity: {} (likelihood x{:.2})\n\n",
        report.inputs.maturity_level, assessment.maturity_modifier
    ));

    // KPI tiles
    let tiles = [
        ("ALE Before Controls", format_millions(assessment.ale_before)),
        ("ALE After Controls", format_millions(assessment.ale_after)),
        ("Risk Reduction", format_millions(assessment.risk_reduction)),
        (
            "ROI",
            format!("{:.1}% ({})", assessment.roi_pct, assessment.roi_tier.as_str()),
        ),
    ];
    for (label, value) in &tiles {
        output.push_str(&format!("{:<width$} {}\n", label, value, width = LABEL_WIDTH));
    }
    output.push_str(
        "\nCalculations: ALE = SLE × ARO, ROI = Risk Reduction ÷ Cybersecurity Budget\n",
    );

    let bar_width = display.bar_width();

    output.push_str("\nIncident Cost Components\n");
    push_bar_chart(&mut output, &report.incident_costs.components, bar_width);

    if let Some(exposure) = &report.loss_exposure {
        output.push_str("\nAnnual Loss Exposure (Before vs After Controls)\n");
        push_bar_chart(
            &mut output,
            &[exposure.before.clone(), exposure.after.clone()],
            bar_width,
        );
    }

    if let Some(split) = &report.cost_vs_reduction {
        output.push_str("\nCost vs Risk Reduction\n");
        for (component, share) in [
            (&split.controls_cost, split.controls_cost_share_pct),
            (&split.risk_reduction, split.risk_reduction_share_pct),
        ] {
            output.push_str(&format!(
                "{:<width$} {:>5.1}%  {}\n",
                component.label,
                share,
                format_millions(component.amount),
                width = LABEL_WIDTH
            ));
        }
    }

    if let Some(comparison) = &report.maturity_comparison {
        output.push('\n');
        output.push_str(&render_maturity_comparison(comparison));
    }

    output.push_str(&format!("\nAdvisory: {}\n", report.advisory));
    output
}

/// Render a maturity comparison as a fixed-width table
pub fn render_maturity_comparison(comparison: &[MaturityComparison]) -> String {
    let mut output = String::new();
    output.push_str(&format!(
        "{:<12} {:<8} {:<12} {:<12} {:<12} {}\n",
        "MATURITY", "MOD", "ALE BEFORE", "ALE AFTER", "REDUCTION", "ROI"
    ));
    for row in comparison {
        let a = &row.assessment;
        output.push_str(&format!(
            "{:<12} {:<8.2} {:<12} {:<12} {:<12} {:.1}% ({})\n",
            row.maturity_level.as_str(),
            a.maturity_modifier,
            format_millions(a.ale_before),
            format_millions(a.ale_after),
            format_millions(a.risk_reduction),
            a.roi_pct,
            a.roi_tier.as_str(),
        ));
    }
    output
}

/// Render a report as JSON output
pub fn render_json(report: &RoiReport) -> String {
    // Struct field order keeps the output deterministic
    serde_json::to_string_pretty(report).unwrap_or_else(|_| "{}".to_string())
}

/// Horizontal bars scaled to the largest positive amount
fn push_bar_chart(output: &mut String, components: &[CostComponent], bar_width: usize) {
    let max = components
        .iter()
        .map(|c| c.amount)
        .fold(0.0_f64, f64::max);

    for component in components {
        let cells = bar_cells(component.amount, max, bar_width);
        output.push_str(&format!(
            "{:<label$} {:<bar$} {:.2}M\n",
            component.label,
            "#".repeat(cells),
            component.millions,
            label = LABEL_WIDTH,
            bar = bar_width
        ));
    }
}

fn bar_cells(amount: f64, max: f64, bar_width: usize) -> usize {
    if max <= 0.0 || amount <= 0.0 {
        return 0;
    }
    ((amount / max) * bar_width as f64).round() as usize
}
