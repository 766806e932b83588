//! Conversation history.
//!
//! An append-only record of processed inputs, owned by exactly one responder
//! instance for the lifetime of a session. Nothing is persisted.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::measurement::SentimentMeasurement;

/// One processed conversation turn.
///
/// A turn is appended for every processed input, including those whose
/// sentiment measurement never arrived; such turns count toward conversation
/// length but are excluded from aggregate statistics.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConversationTurn {
    pub id: String,
    pub input_text: String,
    pub measurement: Option<SentimentMeasurement>,
    pub response: String,
    pub timestamp: DateTime<Utc>,
}

impl ConversationTurn {
    /// Create a new turn, stamped with the current time.
    pub fn new(
        input_text: &str,
        measurement: Option<SentimentMeasurement>,
        response: &str,
    ) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            input_text: input_text.to_string(),
            measurement,
            response: response.to_string(),
            timestamp: Utc::now(),
        }
    }
}

/// Ordered, append-only sequence of conversation turns.
#[derive(Debug, Default)]
pub struct ConversationHistory {
    turns: Vec<ConversationTurn>,
}

impl ConversationHistory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a turn. Insertion order is conversation order.
    pub fn push(&mut self, turn: ConversationTurn) {
        self.turns.push(turn);
    }

    /// Number of turns, measured or not.
    pub fn len(&self) -> usize {
        self.turns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.turns.is_empty()
    }

    /// All turns in conversation order.
    pub fn turns(&self) -> &[ConversationTurn] {
        &self.turns
    }

    /// The most recent turn, if any.
    pub fn last(&self) -> Option<&ConversationTurn> {
        self.turns.last()
    }

    /// Iterator over the turns that carry a measurement.
    pub fn measurements(&self) -> impl Iterator<Item = &SentimentMeasurement> {
        self.turns.iter().filter_map(|t| t.measurement.as_ref())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::measurement::{Assessment, SentimentMeasurement};

    #[test]
    fn test_append_preserves_order() {
        let mut history = ConversationHistory::new();
        history.push(ConversationTurn::new("first", None, "ok"));
        history.push(ConversationTurn::new("second", None, "ok"));

        assert_eq!(history.len(), 2);
        assert_eq!(history.turns()[0].input_text, "first");
        assert_eq!(history.last().unwrap().input_text, "second");
    }

    #[test]
    fn test_measurements_skip_absent() {
        let mut history = ConversationHistory::new();
        let m = SentimentMeasurement::new("good", 0.5, 0.5, Assessment::Positive);
        history.push(ConversationTurn::new("good", Some(m), "reply"));
        history.push(ConversationTurn::new("lost", None, "fallback"));

        assert_eq!(history.len(), 2);
        assert_eq!(history.measurements().count(), 1);
    }
}
