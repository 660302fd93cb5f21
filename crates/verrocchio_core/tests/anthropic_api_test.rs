use std::env;
use verrocchio_core::{AnthropicClient, AnthropicConfig, ModelDriver};

#[tokio::test]
#[cfg_attr(not(feature = "api"), ignore)]
async fn test_anthropic_simple_generation() {
    dotenvy::dotenv().ok();
    let api_key =
        env::var("ANTHROPIC_API_KEY").expect("ANTHROPIC_API_KEY must be set for API tests");

    let config = AnthropicConfig::builder()
        .api_key(api_key)
        .build()
        .expect("Valid config");
    let client = AnthropicClient::new(config).expect("Client construction");

    let generation = client
        .generate("Say 'test' and nothing else.")
        .await
        .expect("API call succeeded");

    assert!(!generation.text().is_empty());
    assert!(*generation.usage().output_tokens() > 0);
    println!("Response: {:?}", generation.text());
}

#[tokio::test]
#[cfg_attr(not(feature = "api"), ignore)]
async fn test_anthropic_reports_usage_for_cost() {
    dotenvy::dotenv().ok();
    let api_key =
        env::var("ANTHROPIC_API_KEY").expect("ANTHROPIC_API_KEY must be set for API tests");

    let config = AnthropicConfig::builder()
        .api_key(api_key)
        .build()
        .expect("Valid config");
    let client = AnthropicClient::new(config).expect("Client construction");

    let generation = client.generate("Count to 3.").await.expect("API call succeeded");

    assert!(generation.usage().cost() > 0.0);
    println!("Cost: ${:.6}", generation.usage().cost());
}
