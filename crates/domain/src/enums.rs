use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum OptimizationMethod {
    Standard,
    Fast,
}

impl OptimizationMethod {
    /// Long display label, as shown on the result panels.
    #[must_use]
    pub fn label(&self) -> &'static str {
        match self {
            Self::Standard => "Standard Optimization",
            Self::Fast => "Fast Optimization",
        }
    }
}

impl fmt::Display for OptimizationMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Standard => write!(f, "Standard"),
            Self::Fast => write!(f, "Fast"),
        }
    }
}

/// Five-point risk scale. Display-only: the simulation core never reads it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum RiskTolerance {
    VeryLow,
    Low,
    Moderate,
    High,
    VeryHigh,
}

impl RiskTolerance {
    #[must_use]
    pub fn label(&self) -> &'static str {
        match self {
            Self::VeryLow => "Very Low",
            Self::Low => "Low",
            Self::Moderate => "Moderate",
            Self::High => "High",
            Self::VeryHigh => "Very High",
        }
    }

    /// Position on the conservative-to-aggressive gauge, 0 to 100.
    #[must_use]
    pub fn scale_percentage(&self) -> u8 {
        let index = match self {
            Self::VeryLow => 0u32,
            Self::Low => 1,
            Self::Moderate => 2,
            Self::High => 3,
            Self::VeryHigh => 4,
        };
        (index * 100 / 4) as u8
    }
}

/// Three-point investment horizon. Display-only, like [`RiskTolerance`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum InvestmentHorizon {
    ShortTerm,
    MediumTerm,
    LongTerm,
}

impl InvestmentHorizon {
    #[must_use]
    pub fn label(&self) -> &'static str {
        match self {
            Self::ShortTerm => "Short-term (< 1 year)",
            Self::MediumTerm => "Medium-term (1-5 years)",
            Self::LongTerm => "Long-term (> 5 years)",
        }
    }
}
