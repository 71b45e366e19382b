//! Advisor Configuration
//!
//! Eligibility thresholds and the wording built from them. Defaults match the
//! service's published rules; each can be overridden from the environment.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use crate::error::{AdvisorError, Result};

/// Eligibility rules for the portfolio recommendation
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AdvisorConfig {
    /// Youngest accepted age (inclusive)
    pub min_age: i64,

    /// Age at which users are referred to retirement specialists (exclusive)
    pub max_age: i64,

    /// Smallest accepted investment, in dollars (inclusive)
    pub min_investment: Decimal,

    /// Toll-free number quoted to users over the age limit
    pub help_phone: String,
}

impl Default for AdvisorConfig {
    fn default() -> Self {
        Self {
            min_age: 18,
            max_age: 65,
            min_investment: dec!(5000),
            help_phone: "800-800-8000".into(),
        }
    }
}

impl AdvisorConfig {
    /// Create from environment variables
    ///
    /// `ADVISOR_MIN_AGE`, `ADVISOR_MAX_AGE`, `ADVISOR_MIN_INVESTMENT` and
    /// `ADVISOR_HELP_PHONE`; unset variables keep their defaults.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from any key lookup (environment, `.env`, test fixtures)
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(raw) = lookup("ADVISOR_MIN_AGE") {
            config.min_age = parse_var("ADVISOR_MIN_AGE", &raw)?;
        }
        if let Some(raw) = lookup("ADVISOR_MAX_AGE") {
            config.max_age = parse_var("ADVISOR_MAX_AGE", &raw)?;
        }
        if let Some(raw) = lookup("ADVISOR_MIN_INVESTMENT") {
            config.min_investment = parse_var("ADVISOR_MIN_INVESTMENT", &raw)?;
        }
        if let Some(raw) = lookup("ADVISOR_HELP_PHONE") {
            config.help_phone = raw.trim().to_string();
        }

        config.validate()?;
        Ok(config)
    }

    /// Check the thresholds describe a non-empty eligible range
    pub fn validate(&self) -> Result<()> {
        if self.min_age >= self.max_age {
            return Err(AdvisorError::Config(format!(
                "minimum age {} must be below maximum age {}",
                self.min_age, self.max_age
            )));
        }
        if self.min_investment.is_sign_negative() {
            return Err(AdvisorError::Config(format!(
                "minimum investment {} must not be negative",
                self.min_investment
            )));
        }
        if self.help_phone.is_empty() {
            return Err(AdvisorError::Config("help phone number must not be empty".into()));
        }
        Ok(())
    }

    pub fn too_young_message(&self) -> String {
        format!(
            "You must be at least {} years old to use this service, \
             please come back when you are older.",
            self.min_age
        )
    }

    pub fn too_old_message(&self) -> String {
        format!(
            "You must be under {} years old to use this service, \
             for help with retirement please call our toll free number, \
             at {} to speak with a specialist.",
            self.max_age, self.help_phone
        )
    }

    pub fn investment_too_low_message(&self) -> String {
        format!(
            "You must invest a minimum of {} to use this service, \
             please adjust your investment amount.",
            format_usd(self.min_investment)
        )
    }
}

fn parse_var<T: std::str::FromStr>(key: &str, raw: &str) -> Result<T> {
    raw.trim()
        .parse()
        .map_err(|_| AdvisorError::Config(format!("{key} has an invalid value: {raw:?}")))
}

/// Dollar amount with thousands separators, e.g. `$5,000` or `$1,250.50`
pub fn format_usd(amount: Decimal) -> String {
    let amount = amount.round_dp(2);
    let sign = if amount.is_sign_negative() { "-" } else { "" };
    let amount = amount.abs();

    let whole = amount.trunc().to_string();
    let mut grouped = String::with_capacity(whole.len() + whole.len() / 3);
    for (i, ch) in whole.chars().enumerate() {
        if i > 0 && (whole.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    let cents = (amount.fract() * Decimal::ONE_HUNDRED).trunc();
    if cents.is_zero() {
        format!("{sign}${grouped}")
    } else {
        format!("{sign}${grouped}.{:0>2}", cents.to_string())
    }
}
