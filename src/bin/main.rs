use portfolio_advisor_bot::handler::{handle_event, InvocationContext};
use serde_json::json;
use tracing::info;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .init();

    info!("Portfolio Advisor Bot demo starting");

    let conversation = vec![
        (
            "Age out of range",
            "DialogCodeHook",
            json!({ "firstName": "Ana", "age": "70", "investmentAmount": "10000", "riskLevel": null }),
        ),
        (
            "Investment below minimum",
            "DialogCodeHook",
            json!({ "firstName": "Ana", "age": "40", "investmentAmount": "1000", "riskLevel": null }),
        ),
        (
            "All slots valid",
            "DialogCodeHook",
            json!({ "firstName": "Ana", "age": "40", "investmentAmount": "10000", "riskLevel": null }),
        ),
        (
            "Fulfillment",
            "FulfillmentCodeHook",
            json!({ "firstName": "Ana", "age": "40", "investmentAmount": "10000", "riskLevel": "High" }),
        ),
        (
            "Unknown risk level",
            "FulfillmentCodeHook",
            json!({ "firstName": "Ana", "age": "40", "investmentAmount": "10000", "riskLevel": "Unknown" }),
        ),
    ];

    for (label, source, slots) in conversation {
        let event = json!({
            "messageVersion": "1.0",
            "invocationSource": source,
            "userId": "demo-user",
            "sessionAttributes": {},
            "currentIntent": { "name": "RecommendedPortfolio", "slots": slots }
        });

        let response = handle_event(event, &InvocationContext::new())?;

        println!("\n=== {} ===", label);
        println!("{}", serde_json::to_string_pretty(&response)?);
    }

    let unsupported = json!({
        "invocationSource": "DialogCodeHook",
        "sessionAttributes": {},
        "currentIntent": { "name": "Other", "slots": {} }
    });

    match handle_event(unsupported, &InvocationContext::new()) {
        Ok(response) => println!("\nUnexpected response: {:?}", response),
        Err(e) => println!("\n=== Unsupported intent ===\n{}", e),
    }

    Ok(())
}
