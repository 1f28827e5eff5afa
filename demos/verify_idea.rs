//! Example: idea verification
//!
//! Submits a sample listing to the verification function and prints the
//! returned analysis.
//!
//! ```bash
//! export IDEAMARKET_API_KEY=pk-...
//! cargo run --example verify_idea
//! ```

use ideamarket_ai::{
    AssistantClientBuilder, AssistantConfig, Idea, IdeaTier, VerificationRequest,
};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt::init();

    let config = AssistantConfig::from_env()?;
    let client = AssistantClientBuilder::new().with_config(config).build()?;

    let idea = Idea {
        id: "demo-idea-1".to_string(),
        title: "Neighborhood tool-sharing marketplace".to_string(),
        description: "A deposit-backed lending marketplace for rarely-used power tools, \
                      with pickup lockers hosted by local hardware stores."
            .to_string(),
        category: "Marketplace".to_string(),
        tier: IdeaTier::Standard,
        price: 2500.0,
        tags: vec!["sharing-economy".to_string(), "local".to_string()],
    };

    println!("Verifying \"{}\"...\n", idea.title);

    let analysis = client
        .verification()
        .verify(VerificationRequest::from_idea(&idea))
        .await?;

    println!("Score:            {}/100 ({})", analysis.score, analysis.score_label());
    println!("Predicted price:  ${}", analysis.predicted_price);
    println!("\nStrengths:");
    for strength in &analysis.strengths {
        println!("  + {}", strength);
    }
    println!("\nChallenges:");
    for challenge in &analysis.challenges {
        println!("  - {}", challenge);
    }
    println!("\nMarket opportunity: {}", analysis.market_opportunity);
    println!("Summary: {}", analysis.summary);

    Ok(())
}
