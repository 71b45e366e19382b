//! Slot Validation
//!
//! Checks the numeric slots while the platform is still collecting them.
//! Violations are reported in a fixed order (age, then investment amount) and
//! only the first one is returned. Unfilled slots are never violations.

use std::str::FromStr;

use dialog_core::Message;
use rust_decimal::Decimal;

use crate::config::AdvisorConfig;
use crate::error::{AdvisorError, Result};
use crate::model::slots;

/// Outcome of validating the collected slots
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ValidationResult {
    pub valid: bool,
    pub violated_slot: Option<String>,
    pub message: Option<Message>,
}

impl ValidationResult {
    pub const fn valid() -> Self {
        Self {
            valid: true,
            violated_slot: None,
            message: None,
        }
    }

    pub fn invalid(slot: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            valid: false,
            violated_slot: Some(slot.into()),
            message: Some(Message::plain_text(message)),
        }
    }
}

/// Parse an age slot as a whole number of years
pub fn parse_age(raw: &str) -> Result<i64> {
    parse_slot(slots::AGE, raw, false)
}

/// Parse an investment amount slot as dollars
pub fn parse_investment_amount(raw: &str) -> Result<Decimal> {
    parse_slot(slots::INVESTMENT_AMOUNT, raw, true)
}

/// Plain numeral check: optional sign, ASCII digits, at most one `.` when
/// fractions are allowed. Rejects separators such as `_`, `,` and `$`.
fn is_plain_number(text: &str, allow_fraction: bool) -> bool {
    let digits = text.strip_prefix(['+', '-']).unwrap_or(text);
    let mut seen_digit = false;
    let mut seen_point = false;

    for ch in digits.chars() {
        match ch {
            '0'..='9' => seen_digit = true,
            '.' if allow_fraction && !seen_point => seen_point = true,
            _ => return false,
        }
    }
    seen_digit
}

fn parse_slot<T: FromStr>(slot: &str, raw: &str, allow_fraction: bool) -> Result<T> {
    let text = raw.trim();
    if !is_plain_number(text, allow_fraction) {
        return Err(AdvisorError::InvalidSlotValue {
            slot: slot.to_string(),
            value: raw.to_string(),
        });
    }

    // A well-formed numeral only fails to parse when it does not fit the type
    text.parse().map_err(|_| AdvisorError::SlotValueOutOfRange {
        slot: slot.to_string(),
        value: raw.to_string(),
    })
}

fn is_negative(raw: &str) -> bool {
    raw.trim_start().starts_with('-')
}

/// Validates age and investment amount against the configured thresholds
pub struct SlotValidator {
    config: AdvisorConfig,
}

impl SlotValidator {
    pub const fn new(config: AdvisorConfig) -> Self {
        Self { config }
    }

    /// Return the first violated constraint, if any
    pub fn validate(&self, age: Option<&str>, investment_amount: Option<&str>) -> ValidationResult {
        if let Some(raw) = age {
            let age = match parse_age(raw) {
                Ok(age) => age,
                // Too many digits for i64 is still far outside the eligible range
                Err(AdvisorError::SlotValueOutOfRange { .. }) if is_negative(raw) => i64::MIN,
                Err(AdvisorError::SlotValueOutOfRange { .. }) => i64::MAX,
                Err(_) => {
                    return ValidationResult::invalid(
                        slots::AGE,
                        "Please tell me your age as a whole number of years.",
                    );
                }
            };

            if age < self.config.min_age {
                return ValidationResult::invalid(slots::AGE, self.config.too_young_message());
            }
            if age >= self.config.max_age {
                return ValidationResult::invalid(slots::AGE, self.config.too_old_message());
            }
        }

        if let Some(raw) = investment_amount {
            let amount = match parse_investment_amount(raw) {
                Ok(amount) => amount,
                Err(AdvisorError::SlotValueOutOfRange { .. }) if is_negative(raw) => {
                    return ValidationResult::invalid(
                        slots::INVESTMENT_AMOUNT,
                        self.config.investment_too_low_message(),
                    );
                }
                Err(AdvisorError::SlotValueOutOfRange { .. }) => {
                    return ValidationResult::invalid(
                        slots::INVESTMENT_AMOUNT,
                        "That amount is larger than I can process, \
                         please enter a smaller investment amount.",
                    );
                }
                Err(_) => {
                    return ValidationResult::invalid(
                        slots::INVESTMENT_AMOUNT,
                        "Please tell me how much you would like to invest as a dollar amount, \
                         for example 10000.",
                    );
                }
            };

            if amount < self.config.min_investment {
                return ValidationResult::invalid(
                    slots::INVESTMENT_AMOUNT,
                    self.config.investment_too_low_message(),
                );
            }
        }

        ValidationResult::valid()
    }
}

impl Default for SlotValidator {
    fn default() -> Self {
        Self::new(AdvisorConfig::default())
    }
}
