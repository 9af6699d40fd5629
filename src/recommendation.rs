//! Risk level → portfolio allocation lookup

use crate::error::BotError;
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RiskLevel {
    None,
    VeryLow,
    Low,
    Medium,
    High,
    Maximum,
}

impl RiskLevel {
    pub const ALL: [RiskLevel; 6] = [
        RiskLevel::None,
        RiskLevel::VeryLow,
        RiskLevel::Low,
        RiskLevel::Medium,
        RiskLevel::High,
        RiskLevel::Maximum,
    ];

    /// Label as the bot's slot type spells it
    pub fn label(&self) -> &'static str {
        match self {
            RiskLevel::None => "None",
            RiskLevel::VeryLow => "Very Low",
            RiskLevel::Low => "Low",
            RiskLevel::Medium => "Medium",
            RiskLevel::High => "High",
            RiskLevel::Maximum => "Maximum",
        }
    }

    pub fn allocation(&self) -> &'static str {
        match self {
            RiskLevel::None => "100% bonds (AGG), 0% equities (SPY)",
            RiskLevel::VeryLow => "80% bonds (AGG), 20% equities (SPY)",
            RiskLevel::Low => "60% bonds (AGG), 40% equities (SPY)",
            RiskLevel::Medium => "40% bonds (AGG), 60% equities (SPY)",
            RiskLevel::High => "20% bonds (AGG), 80% equities (SPY)",
            RiskLevel::Maximum => "0% bonds (AGG), 100% equities (SPY)",
        }
    }
}

/// Exact, case-sensitive match on the label.
impl FromStr for RiskLevel {
    type Err = BotError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        RiskLevel::ALL
            .into_iter()
            .find(|level| level.label() == s)
            .ok_or_else(|| BotError::UnknownRiskLevel(s.to_string()))
    }
}

impl fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Allocation phrase for a risk level label.
pub fn recommend(label: &str) -> crate::Result<&'static str> {
    Ok(label.parse::<RiskLevel>()?.allocation())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table() {
        let cases = vec![
            ("None", "100% bonds (AGG), 0% equities (SPY)"),
            ("Very Low", "80% bonds (AGG), 20% equities (SPY)"),
            ("Low", "60% bonds (AGG), 40% equities (SPY)"),
            ("Medium", "40% bonds (AGG), 60% equities (SPY)"),
            ("High", "20% bonds (AGG), 80% equities (SPY)"),
            ("Maximum", "0% bonds (AGG), 100% equities (SPY)"),
        ];

        for (label, expected) in cases {
            assert_eq!(recommend(label).unwrap(), expected);
        }
    }

    #[test]
    fn test_unknown_label() {
        for label in ["Unknown", "high", "VeryLow", " High", ""] {
            let err = recommend(label).unwrap_err();
            assert!(matches!(err, BotError::UnknownRiskLevel(ref l) if l == label));
        }
    }
}
