//! Conversation orchestration.
//!
//! A [`SentimentAgent`] owns one provider and one responder and drives the
//! per-message cycle: analyze, respond, record. Provider failures never
//! surface to the conversation; they become an absent measurement and the
//! responder's fallback prompt.

use tracing::warn;

use crate::history::ConversationHistory;
use crate::measurement::SentimentMeasurement;
use crate::provider::SentimentProvider;
use crate::responder::{SentimentResponder, SummaryReport};

/// Sentiment-aware conversational agent.
///
/// One instance per conversation; there is no shared state between agents.
pub struct SentimentAgent<P: SentimentProvider> {
    provider: P,
    responder: SentimentResponder,
}

impl<P: SentimentProvider> SentimentAgent<P> {
    /// Create an agent around a provider, with an empty conversation.
    pub fn new(provider: P) -> Self {
        Self {
            provider,
            responder: SentimentResponder::new(),
        }
    }

    /// Create an agent with a custom responder (e.g. a non-default bar width).
    pub fn with_responder(provider: P, responder: SentimentResponder) -> Self {
        Self { provider, responder }
    }

    /// Process one user message.
    ///
    /// Queries the provider, selects a reply, records the turn, and returns
    /// both the reply and the measurement (absent when analysis failed).
    pub async fn process_message(
        &mut self,
        text: &str,
    ) -> (String, Option<SentimentMeasurement>) {
        let measurement = match self.provider.analyze(text).await {
            Ok(m) => Some(m),
            Err(err) => {
                warn!(provider = self.provider.name(), "Sentiment analysis failed: {err}");
                None
            }
        };

        let response = self.responder.classify_and_respond(measurement.as_ref());
        self.responder.record(text, measurement.clone(), &response);

        (response, measurement)
    }

    /// Aggregate statistics over the conversation so far.
    pub fn summarize(&self) -> SummaryReport {
        self.responder.summarize()
    }

    /// Render a measurement with the agent's display settings.
    pub fn format_measurement(&self, measurement: &SentimentMeasurement) -> String {
        self.responder.format_measurement(measurement)
    }

    /// The conversation history so far.
    pub fn history(&self) -> &ConversationHistory {
        self.responder.history()
    }

    /// The provider this agent analyzes text with.
    pub fn provider(&self) -> &P {
        &self.provider
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{AgentError, Result};
    use crate::provider::LexiconProvider;
    use async_trait::async_trait;

    /// Provider that always fails, for exercising the fallback path.
    struct FailingProvider;

    #[async_trait]
    impl SentimentProvider for FailingProvider {
        fn name(&self) -> &str {
            "failing"
        }

        async fn analyze(&self, _text: &str) -> Result<SentimentMeasurement> {
            Err(AgentError::Provider("unreachable".to_string()))
        }
    }

    #[tokio::test]
    async fn test_process_message_records_turn() {
        let mut agent = SentimentAgent::new(LexiconProvider::new());
        let (response, measurement) = agent.process_message("I love this!").await;

        assert!(!response.is_empty());
        assert!(measurement.is_some());
        assert_eq!(agent.history().len(), 1);
        assert_eq!(agent.history().turns()[0].response, response);
    }

    #[tokio::test]
    async fn test_provider_failure_falls_back() {
        let mut agent = SentimentAgent::new(FailingProvider);
        let (response, measurement) = agent.process_message("anything").await;

        assert!(measurement.is_none());
        assert!(response.contains("tell me more"));
        // The failed turn still counts toward conversation length
        assert_eq!(agent.history().len(), 1);
        assert!(agent.history().turns()[0].measurement.is_none());
        assert!(agent.summarize().is_empty());
    }

    #[tokio::test]
    async fn test_summary_over_mixed_conversation() {
        let mut agent = SentimentAgent::new(LexiconProvider::new());
        agent.process_message("I absolutely love this!").await;
        agent.process_message("This is terrible and frustrating.").await;
        agent.process_message("The meeting is at noon.").await;

        let report = agent.summarize();
        assert_eq!(report.total_turns, 3);
        assert_eq!(report.analyzed, 3);
        assert_eq!(report.positive, 1);
        assert_eq!(report.negative, 1);
        assert_eq!(report.neutral, 1);
    }

    #[tokio::test]
    async fn test_boxed_provider_works() {
        let provider: Box<dyn SentimentProvider> = Box::new(LexiconProvider::new());
        let mut agent = SentimentAgent::new(provider);
        let (response, _) = agent.process_message("great work").await;
        assert!(!response.is_empty());
    }
}
