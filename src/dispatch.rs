//! Intent handler trait and dispatcher
//!
//! Routes a request to the handler registered under its intent name.

use crate::dialog::{recommend_portfolio, RECOMMENDED_PORTFOLIO};
use crate::error::BotError;
use crate::models::{DialogResponse, IntentRequest};
use crate::Result;
use std::collections::HashMap;
use std::sync::Arc;
use tracing::{info, warn};

/// Trait for a single intent's dialog logic
pub trait IntentHandler: Send + Sync {
    fn intent_name(&self) -> &'static str;
    fn handle(&self, request: &IntentRequest) -> Result<DialogResponse>;
}

/// Handler for the RecommendedPortfolio intent
pub struct RecommendedPortfolioHandler;

impl IntentHandler for RecommendedPortfolioHandler {
    fn intent_name(&self) -> &'static str {
        RECOMMENDED_PORTFOLIO
    }

    fn handle(&self, request: &IntentRequest) -> Result<DialogResponse> {
        recommend_portfolio(request)
    }
}

/// Intent name → handler registry
pub struct IntentDispatcher {
    handlers: HashMap<String, Arc<dyn IntentHandler>>,
}

impl IntentDispatcher {
    pub fn new() -> Self {
        Self {
            handlers: HashMap::new(),
        }
    }

    pub fn register(&mut self, handler: Arc<dyn IntentHandler>) {
        self.handlers
            .insert(handler.intent_name().to_string(), handler);
    }

    pub fn get(&self, intent_name: &str) -> Option<Arc<dyn IntentHandler>> {
        self.handlers.get(intent_name).cloned()
    }

    pub fn list(&self) -> Vec<&str> {
        self.handlers.keys().map(|s| s.as_str()).collect()
    }

    /// Called when the user specifies an intent for this bot.
    pub fn dispatch(&self, request: &IntentRequest) -> Result<DialogResponse> {
        let intent_name = request.intent_name();

        let Some(handler) = self.get(intent_name) else {
            warn!(intent = %intent_name, "Unsupported intent");
            return Err(BotError::UnsupportedIntent(intent_name.to_string()));
        };

        let response = handler.handle(request)?;

        info!(
            intent = %intent_name,
            source = %request.invocation_source,
            action = response.dialog_action.kind(),
            "Intent handled"
        );

        Ok(response)
    }
}

impl Default for IntentDispatcher {
    fn default() -> Self {
        Self::new()
    }
}

/// Dispatcher with every intent this bot supports
pub fn create_default_dispatcher() -> IntentDispatcher {
    let mut dispatcher = IntentDispatcher::new();
    dispatcher.register(Arc::new(RecommendedPortfolioHandler));
    dispatcher
}

/// Dispatch with the default registry.
pub fn dispatch(request: &IntentRequest) -> Result<DialogResponse> {
    create_default_dispatcher().dispatch(request)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{DialogAction, FulfillmentState, Message};
    use crate::responses::close;
    use serde_json::json;

    fn request(intent_name: &str) -> IntentRequest {
        serde_json::from_value(json!({
            "invocationSource": "DialogCodeHook",
            "sessionAttributes": {},
            "currentIntent": {
                "name": intent_name,
                "slots": { "age": "40", "investmentAmount": "10000" }
            }
        }))
        .unwrap()
    }

    #[test]
    fn test_routes_recommended_portfolio() {
        let response = dispatch(&request(RECOMMENDED_PORTFOLIO)).unwrap();
        assert_eq!(response.dialog_action.kind(), "Delegate");
    }

    #[test]
    fn test_unsupported_intent() {
        let err = dispatch(&request("Other")).unwrap_err();
        assert!(matches!(err, BotError::UnsupportedIntent(ref name) if name == "Other"));
    }

    #[test]
    fn test_intent_name_is_case_sensitive() {
        let err = dispatch(&request("recommendedportfolio")).unwrap_err();
        assert!(matches!(err, BotError::UnsupportedIntent(_)));
    }

    struct GreetingHandler;

    impl IntentHandler for GreetingHandler {
        fn intent_name(&self) -> &'static str {
            "Greeting"
        }

        fn handle(&self, request: &IntentRequest) -> Result<DialogResponse> {
            Ok(close(
                request.session_attributes.clone(),
                FulfillmentState::Fulfilled,
                Message::plain_text("hello"),
            ))
        }
    }

    #[test]
    fn test_custom_registry() {
        let mut dispatcher = create_default_dispatcher();
        dispatcher.register(Arc::new(GreetingHandler));

        let mut names = dispatcher.list();
        names.sort();
        assert_eq!(names, vec!["Greeting", RECOMMENDED_PORTFOLIO]);

        let response = dispatcher.dispatch(&request("Greeting")).unwrap();
        assert!(matches!(
            response.dialog_action,
            DialogAction::Close { fulfillment_state: FulfillmentState::Fulfilled, .. }
        ));
    }

    #[test]
    fn test_empty_registry_rejects_everything() {
        let dispatcher = IntentDispatcher::default();
        assert!(dispatcher.dispatch(&request(RECOMMENDED_PORTFOLIO)).is_err());
    }
}
