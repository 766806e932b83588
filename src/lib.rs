//! Sentiment-Aware Conversational Agent
//!
//! A small framework for building conversations that adapt to the user's
//! sentiment: measurements come from a pluggable provider (an offline
//! lexicon scorer or a hosted Gradio app), and a deterministic responder
//! maps each measurement to an empathetic reply while tracking
//! conversation-level statistics.
//!
//! # Example
//!
//! ```rust,no_run
//! use sentiment_agent::{LexiconProvider, SentimentAgent};
//!
//! #[tokio::main]
//! async fn main() {
//!     let mut agent = SentimentAgent::new(LexiconProvider::new());
//!
//!     let (reply, measurement) = agent.process_message("I love this!").await;
//!     println!("{reply}");
//!
//!     if let Some(m) = measurement {
//!         println!("{}", agent.format_measurement(&m));
//!     }
//!     println!("{}", agent.summarize().render());
//! }
//! ```

pub mod agent;
pub mod display;
pub mod error;
pub mod gradio;
pub mod history;
pub mod measurement;
pub mod provider;
pub mod responder;

pub use agent::SentimentAgent;
pub use error::{AgentError, Result};
pub use gradio::GradioClient;
pub use history::{ConversationHistory, ConversationTurn};
pub use measurement::{Assessment, SentimentMeasurement};
pub use provider::{LexiconProvider, SentimentProvider};
pub use responder::{Mood, ResponseBucket, SentimentResponder, SummaryReport, Tone};
