//! Input boundary validation
//!
//! The calculator trusts its inputs. Callers that collect values from users
//! run them through [`validate_inputs`] first so that bad values are rejected
//! per field instead of flowing into the results.

use crate::error::CalcError;
use crate::risk::RiskInputs;

/// Lowest and highest accepted likelihood percentage
pub const PERCENT_RANGE: (f64, f64) = (0.0, 100.0);

/// Validate an input record, reporting the first offending field in record order
pub fn validate_inputs(inputs: &RiskInputs) -> Result<(), CalcError> {
    check_non_negative("controls_cost", inputs.controls_cost)?;
    check_non_negative("revenue", inputs.revenue)?;
    check_non_negative("monitoring_cost_per_user", inputs.monitoring_cost_per_user)?;
    check_non_negative("base_incident_cost", inputs.base_incident_cost)?;
    check_non_negative("cost_per_downtime_day", inputs.cost_per_downtime_day)?;
    check_percent("aro_before_pct", inputs.aro_before_pct)?;
    check_percent("aro_after_pct", inputs.aro_after_pct)?;
    Ok(())
}

fn check_finite(field: &'static str, value: f64) -> Result<(), CalcError> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(CalcError::NonFinite { field })
    }
}

fn check_non_negative(field: &'static str, value: f64) -> Result<(), CalcError> {
    check_finite(field, value)?;
    if value < 0.0 {
        return Err(CalcError::Negative { field, value });
    }
    Ok(())
}

fn check_percent(field: &'static str, value: f64) -> Result<(), CalcError> {
    check_finite(field, value)?;
    let (min, max) = PERCENT_RANGE;
    if value < min || value > max {
        return Err(CalcError::OutOfRange {
            field,
            value,
            min,
            max,
        });
    }
    Ok(())
}
