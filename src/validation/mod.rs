//! Slot validation for the dialog code hook
//!
//! Rules run in order and the first failing rule wins.
//! Parsing is strict: a non-numeric slot value is an error, never a pass.

use crate::error::BotError;
use crate::models::slot_names::{AGE, INVESTMENT_AMOUNT};
use crate::models::ValidationResult;
use crate::Result;
use std::num::IntErrorKind;
use tracing::debug;

pub const MAX_AGE_EXCLUSIVE: i64 = 65;
pub const MIN_INVESTMENT_AMOUNT: i64 = 5000;

const AGE_REJECTION: &str = "I apologize, but you must be less than 65 years old to qualify for our investment plans. Enter a valid age to continue.";
const INVESTMENT_REJECTION: &str =
    "The minimum for our investment program is $5000.00. Please enter a valid amount to invest.";

/// Trait for numeric slot rules
pub trait SlotRule: Send + Sync {
    /// Slot this rule guards
    fn slot(&self) -> &'static str;

    /// Rejection message if the value is out of bounds
    fn check(&self, value: i64) -> Option<&'static str>;
}

/// Runs slot rules in registration order
pub struct Validator {
    rules: Vec<Box<dyn SlotRule>>,
}

impl Validator {
    pub fn new() -> Self {
        Self { rules: Vec::new() }
    }

    pub fn add_rule(&mut self, rule: Box<dyn SlotRule>) {
        self.rules.push(rule);
    }

    /// Validate the slots that `value_of` resolves. Unfilled slots are skipped.
    pub fn validate<'a, F>(&self, value_of: F) -> Result<ValidationResult>
    where
        F: Fn(&str) -> Option<&'a str>,
    {
        for rule in &self.rules {
            let Some(raw) = value_of(rule.slot()) else {
                continue;
            };

            let value = parse_whole_number(rule.slot(), raw)?;

            if let Some(message) = rule.check(value) {
                debug!(slot = rule.slot(), value, "Slot rejected");
                return Ok(ValidationResult::invalid(rule.slot(), message));
            }
        }

        Ok(ValidationResult::valid())
    }
}

impl Default for Validator {
    fn default() -> Self {
        Self::new()
    }
}

/// Strict integer parse of a slot value.
/// Whole numbers beyond `i64` saturate so the range rules still apply to them.
pub fn parse_whole_number(slot: &str, raw: &str) -> Result<i64> {
    match raw.trim().parse::<i64>() {
        Ok(value) => Ok(value),
        Err(e) => match e.kind() {
            IntErrorKind::PosOverflow => Ok(i64::MAX),
            IntErrorKind::NegOverflow => Ok(i64::MIN),
            _ => Err(BotError::InvalidSlotValue {
                slot: slot.to_string(),
                value: raw.to_string(),
            }),
        },
    }
}

//
// ========== Rules ==========
//

/// Rule: 0 <= age < 65
pub struct AgeRule;

impl SlotRule for AgeRule {
    fn slot(&self) -> &'static str {
        AGE
    }

    fn check(&self, value: i64) -> Option<&'static str> {
        if value < 0 || value >= MAX_AGE_EXCLUSIVE {
            Some(AGE_REJECTION)
        } else {
            None
        }
    }
}

/// Rule: investment amount >= 5000
pub struct MinimumInvestmentRule;

impl SlotRule for MinimumInvestmentRule {
    fn slot(&self) -> &'static str {
        INVESTMENT_AMOUNT
    }

    fn check(&self, value: i64) -> Option<&'static str> {
        if value < MIN_INVESTMENT_AMOUNT {
            Some(INVESTMENT_REJECTION)
        } else {
            None
        }
    }
}

/// Age is checked before the investment amount.
pub fn create_default_validator() -> Validator {
    let mut validator = Validator::new();
    validator.add_rule(Box::new(AgeRule));
    validator.add_rule(Box::new(MinimumInvestmentRule));
    validator
}

/// Validate age and investment amount with the default rules.
pub fn validate(age: Option<&str>, investment_amount: Option<&str>) -> Result<ValidationResult> {
    create_default_validator().validate(|slot| match slot {
        AGE => age,
        INVESTMENT_AMOUNT => investment_amount,
        _ => None,
    })
}

//
// ================= Tests =================
//
