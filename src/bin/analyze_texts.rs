//! Batch sentiment analysis.
//!
//! Analyzes the texts passed on the command line (or a built-in example set
//! when none are given) and prints a full report per text plus an aggregate
//! summary.
//!
//! Set `SENTIMENT_SPACE_URL` to analyze through a hosted Gradio app instead
//! of the offline lexicon:
//! ```bash
//! cargo run --bin analyze_texts -- "I love this!" "This is awful."
//! SENTIMENT_SPACE_URL=https://sam522-demo-mcp-server.hf.space cargo run --bin analyze_texts
//! ```

use anyhow::Result;
use sentiment_agent::{GradioClient, LexiconProvider, SentimentAgent, SentimentProvider};
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

const EXAMPLE_TEXTS: &[&str] = &[
    "I love this new technology!",
    "This is awful and disappointing.",
    "The product is okay, nothing special.",
    "Outstanding customer service!",
    "The interface could be better.",
];

#[tokio::main]
async fn main() -> Result<()> {
    let subscriber = FmtSubscriber::builder()
        .with_max_level(Level::INFO)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let texts: Vec<String> = std::env::args().skip(1).collect();
    let texts: Vec<&str> = if texts.is_empty() {
        info!("No texts given, using the built-in example set");
        EXAMPLE_TEXTS.to_vec()
    } else {
        texts.iter().map(String::as_str).collect()
    };

    let provider: Box<dyn SentimentProvider> = match std::env::var("SENTIMENT_SPACE_URL") {
        Ok(url) => {
            info!("Analyzing through Gradio app at {url}");
            Box::new(GradioClient::connect(&url).await?)
        }
        Err(_) => Box::new(LexiconProvider::new()),
    };

    let mut agent = SentimentAgent::new(provider);

    info!("Analyzing {} texts", texts.len());

    for (i, text) in texts.iter().enumerate() {
        println!("\n[{}/{}]", i + 1, texts.len());

        let (_response, measurement) = agent.process_message(text).await;
        match measurement {
            Some(m) => println!("{}", agent.format_measurement(&m)),
            None => println!("❌ No sentiment data for \"{text}\""),
        }
    }

    println!("\n{}", agent.summarize().render());

    Ok(())
}
