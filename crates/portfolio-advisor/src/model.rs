//! Domain Models
//!
//! Risk levels, bond/equity allocations and the slot names the bot collects.
//! Uses `rust_decimal` for percentages and amounts.

use std::str::FromStr;

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use crate::error::AdvisorError;

/// Intent served by this crate
pub const RECOMMEND_PORTFOLIO: &str = "RecommendPortfolio";

/// Slot names on the `RecommendPortfolio` intent
pub mod slots {
    pub const FIRST_NAME: &str = "firstName";
    pub const AGE: &str = "age";
    pub const INVESTMENT_AMOUNT: &str = "investmentAmount";
    pub const RISK_LEVEL: &str = "riskLevel";
}

/// Risk appetite the user picks, from no risk to very high
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum RiskLevel {
    None,
    #[serde(rename = "Very Low")]
    VeryLow,
    Low,
    Medium,
    High,
    #[serde(rename = "Very High")]
    VeryHigh,
}

impl RiskLevel {
    /// Every level, lowest risk first
    pub const ALL: [Self; 6] = [
        Self::None,
        Self::VeryLow,
        Self::Low,
        Self::Medium,
        Self::High,
        Self::VeryHigh,
    ];

    /// Label exactly as the bot's slot type spells it
    pub const fn label(self) -> &'static str {
        match self {
            Self::None => "None",
            Self::VeryLow => "Very Low",
            Self::Low => "Low",
            Self::Medium => "Medium",
            Self::High => "High",
            Self::VeryHigh => "Very High",
        }
    }

    /// Fixed allocation for this level
    pub const fn allocation(self) -> Allocation {
        match self {
            Self::None => Allocation::new(dec!(100), dec!(0)),
            Self::VeryLow => Allocation::new(dec!(80), dec!(20)),
            Self::Low => Allocation::new(dec!(60), dec!(40)),
            Self::Medium => Allocation::new(dec!(40), dec!(60)),
            Self::High => Allocation::new(dec!(20), dec!(80)),
            Self::VeryHigh => Allocation::new(dec!(0), dec!(100)),
        }
    }
}

impl std::fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for RiskLevel {
    type Err = AdvisorError;

    /// Labels match exactly; no case folding or trimming
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|level| level.label() == s)
            .ok_or_else(|| AdvisorError::UnknownRiskLevel(s.to_string()))
    }
}

/// Split between the bond fund (AGG) and the equity fund (SPY)
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Allocation {
    /// Percentage in bonds (AGG)
    pub bond_percent: Decimal,

    /// Percentage in equities (SPY)
    pub equity_percent: Decimal,
}

impl Allocation {
    pub const BOND_TICKER: &'static str = "AGG";
    pub const EQUITY_TICKER: &'static str = "SPY";

    pub const fn new(bond_percent: Decimal, equity_percent: Decimal) -> Self {
        Self {
            bond_percent,
            equity_percent,
        }
    }

    /// Total of both legs; always 100 for the fixed table
    pub fn total_percent(&self) -> Decimal {
        self.bond_percent + self.equity_percent
    }
}

impl std::fmt::Display for Allocation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}% bonds ({}) and {}% equities ({})",
            self.bond_percent,
            Self::BOND_TICKER,
            self.equity_percent,
            Self::EQUITY_TICKER,
        )
    }
}
