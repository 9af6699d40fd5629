//! Dialog controller for the RecommendedPortfolio intent
//!
//! DialogCodeHook     → ElicitSlot (invalid slot) | Delegate (all valid)
//! FulfillmentCodeHook → Close/Fulfilled
//! Domain lookup errors on either hook → Close/Failed

use crate::error::BotError;
use crate::models::slot_names::{AGE, FIRST_NAME, INVESTMENT_AMOUNT, RISK_LEVEL};
use crate::models::{
    DialogResponse, FulfillmentState, IntentRequest, InvocationSource, Message, ValidationResult,
};
use crate::recommendation::{recommend, RiskLevel};
use crate::responses::{close, delegate, elicit_slot};
use crate::validation::validate;
use crate::Result;
use tracing::{debug, info, warn};

pub const RECOMMENDED_PORTFOLIO: &str = "RecommendedPortfolio";

const DEFAULT_FIRST_NAME: &str = "Investor";

/// Dialog management and fulfillment for recommending a portfolio.
pub fn recommend_portfolio(request: &IntentRequest) -> Result<DialogResponse> {
    let outcome = match request.invocation_source {
        InvocationSource::DialogCodeHook => validate_turn(request),
        InvocationSource::FulfillmentCodeHook => fulfill(request),
    };

    match outcome {
        Err(e) if e.is_domain_lookup() => {
            warn!(
                source = %request.invocation_source,
                slot = e.slot().unwrap_or_default(),
                error = %e,
                "Closing dialog as failed"
            );
            Ok(close(
                request.session_attributes.clone(),
                FulfillmentState::Failed,
                Message::plain_text(failure_message(&e)),
            ))
        }
        other => other,
    }
}

fn validate_turn(request: &IntentRequest) -> Result<DialogResponse> {
    let ValidationResult {
        is_valid,
        violated_slot,
        message,
    } = validate(request.slot(AGE), request.slot(INVESTMENT_AMOUNT))?;

    if let (false, Some(slot), Some(message)) = (is_valid, violated_slot, message) {
        info!(slot = %slot, "Eliciting corrected slot value");

        let mut slots = request.current_intent.slots.clone();
        slots.insert(slot.clone(), None);

        return Ok(elicit_slot(
            request.session_attributes.clone(),
            request.intent_name(),
            slots,
            slot,
            message,
        ));
    }

    debug!("Slots valid, delegating");
    Ok(delegate(
        request.session_attributes.clone(),
        request.current_intent.slots.clone(),
    ))
}

fn fulfill(request: &IntentRequest) -> Result<DialogResponse> {
    let risk_level = request
        .slot(RISK_LEVEL)
        .ok_or_else(|| BotError::MissingSlot(RISK_LEVEL.to_string()))?;
    let recommendation = recommend(risk_level)?;
    let first_name = request.slot(FIRST_NAME).unwrap_or(DEFAULT_FIRST_NAME);

    info!(risk_level = %risk_level, "Fulfilling portfolio recommendation");

    Ok(close(
        request.session_attributes.clone(),
        FulfillmentState::Fulfilled,
        Message::plain_text(format!(
            "{} thank you for your information; based on the risk level you defined, \
             my recommendation is to choose an investment portfolio with {}",
            first_name, recommendation
        )),
    ))
}

fn failure_message(err: &BotError) -> String {
    match err {
        BotError::UnknownRiskLevel(label) => {
            let known: Vec<&str> = RiskLevel::ALL.iter().map(|l| l.label()).collect();
            format!(
                "I'm sorry, \"{}\" is not a risk level I can recommend a portfolio for. \
                 Please choose one of: {}.",
                label,
                known.join(", ")
            )
        }
        BotError::MissingSlot(slot) => format!(
            "I'm sorry, I need a value for {} before I can make a recommendation.",
            slot
        ),
        BotError::InvalidSlotValue { slot, value } => format!(
            "I'm sorry, \"{}\" is not a valid whole number for {}.",
            value, slot
        ),
        other => format!("I'm sorry, something went wrong: {}", other),
    }
}
