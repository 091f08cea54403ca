//! Security program maturity levels and their likelihood modifiers
//!
//! Global invariants enforced:
//! - The modifier table is closed: exactly five levels, no default
//! - Unknown labels fail with `InvalidMaturityLevel`, never fall back

use crate::error::CalcError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Categorical rating of a security program's sophistication
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum MaturityLevel {
    Initial,    // 1.3
    Developing, // 1.15
    Defined,    // 1.0
    Managed,    // 0.85
    Optimized,  // 0.7
}

impl MaturityLevel {
    /// All levels, least to most mature
    pub const ALL: [MaturityLevel; 5] = [
        MaturityLevel::Initial,
        MaturityLevel::Developing,
        MaturityLevel::Defined,
        MaturityLevel::Managed,
        MaturityLevel::Optimized,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            MaturityLevel::Initial => "Initial",
            MaturityLevel::Developing => "Developing",
            MaturityLevel::Defined => "Defined",
            MaturityLevel::Managed => "Managed",
            MaturityLevel::Optimized => "Optimized",
        }
    }

    /// Multiplier applied to both raw incident likelihoods
    pub fn modifier(&self) -> f64 {
        match self {
            MaturityLevel::Initial => 1.3,
            MaturityLevel::Developing => 1.15,
            MaturityLevel::Defined => 1.0,
            MaturityLevel::Managed => 0.85,
            MaturityLevel::Optimized => 0.7,
        }
    }
}

/// Look up the modifier for a level
pub fn maturity_modifier(level: MaturityLevel) -> f64 {
    level.modifier()
}

/// Look up the modifier for a level given by name
pub fn maturity_modifier_for(label: &str) -> Result<f64, CalcError> {
    Ok(label.parse::<MaturityLevel>()?.modifier())
}

impl FromStr for MaturityLevel {
    type Err = CalcError;

    /// Level names match case-insensitively, surrounding whitespace ignored
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        MaturityLevel::ALL
            .into_iter()
            .find(|level| level.as_str().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| CalcError::InvalidMaturityLevel(s.to_string()))
    }
}

impl TryFrom<&str> for MaturityLevel {
    type Error = CalcError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl TryFrom<String> for MaturityLevel {
    type Error = CalcError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<MaturityLevel> for String {
    fn from(level: MaturityLevel) -> Self {
        level.as_str().to_string()
    }
}

impl fmt::Display for MaturityLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
