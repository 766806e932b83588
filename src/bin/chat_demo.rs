//! Demo: Sentiment-Aware Conversation
//!
//! Replays a short scripted conversation through the offline lexicon
//! provider, showing the per-message analysis, the empathetic reply, and
//! the final conversation summary.

use sentiment_agent::{LexiconProvider, SentimentAgent, SentimentProvider};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    println!("{}", "=".repeat(60));
    println!("Sentiment-Aware Agent - Conversation Demo");
    println!("{}", "=".repeat(60));

    // Step 1: Create the agent
    println!("\n1. Creating agent with the offline lexicon provider...");
    let mut agent = SentimentAgent::new(LexiconProvider::new());
    println!("   Provider: {}", agent.provider().name());

    // Step 2: Replay a conversation
    println!("\n2. Replaying conversation...");
    println!("{}", "-".repeat(60));

    let messages = [
        "I absolutely love this new technology!",
        "I'm really frustrated with this situation.",
        "The weather is okay today.",
        "I'm so excited about my new project!",
        "I'm worried about the future.",
    ];

    for message in messages {
        println!("\n💬 You: {message}");

        let (response, measurement) = agent.process_message(message).await;

        if let Some(m) = &measurement {
            println!("📊 Sentiment: {}", sentiment_agent::display::format_compact(m));
        }
        println!("🤖 Agent: {response}");
    }

    // Step 3: Summarize the session
    println!("\n{}", "-".repeat(60));
    println!("\n3. Conversation summary:\n");
    println!("{}", agent.summarize().render());

    println!("\n{}", "=".repeat(60));
    println!("Turns recorded: {}", agent.history().len());
    println!("{}", "=".repeat(60));

    Ok(())
}
