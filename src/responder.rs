//! Sentiment-driven response selection and aggregation.
//!
//! The responder classifies a measurement into a response bucket, selects a
//! canned empathetic reply, and keeps conversation-level aggregates. All
//! operations are total: an absent measurement and an empty history both
//! have defined, non-error results.

use serde::{Deserialize, Serialize};
use strum::Display;

use crate::display::{self, DEFAULT_BAR_WIDTH};
use crate::history::{ConversationHistory, ConversationTurn};
use crate::measurement::{Assessment, SentimentMeasurement};

/// Polarity magnitude separating "strong" from "mild" sentiment.
const STRONG_POLARITY: f64 = 0.3;

/// Subjectivity above which the personal qualifier is appended.
const PERSONAL_SUBJECTIVITY: f64 = 0.7;

/// Subjectivity below which the objective qualifier is appended.
const OBJECTIVE_SUBJECTIVITY: f64 = 0.3;

/// Reply when no measurement arrived for an input.
const FALLBACK_PROMPT: &str =
    "I'm here to help! Could you tell me more about what you're thinking?";

const PERSONAL_QUALIFIER: &str = " I can sense this is quite personal and important to you.";
const OBJECTIVE_QUALIFIER: &str = " Let's look at this objectively and find the best solution.";

const STRONG_POSITIVE_REPLIES: &[&str] = &[
    "🌟 I can feel your enthusiasm! That's wonderful to hear.",
    "😊 Your positive energy is contagious! I'm excited to help.",
    "✨ It sounds like you're in a great mood! How can I assist you today?",
];

const MILD_POSITIVE_REPLIES: &[&str] = &[
    "😌 I sense some gentle positivity in your message.",
    "🙂 You seem content. I'm here if you need anything.",
    "👍 That sounds pretty good! How can I help you further?",
];

const STRONG_NEGATIVE_REPLIES: &[&str] = &[
    "😞 I can hear the frustration in your words. I'm here to help.",
    "💙 That sounds really challenging. Let's work through this together.",
    "🤗 I'm sorry you're dealing with this. How can I support you?",
];

const MILD_NEGATIVE_REPLIES: &[&str] = &[
    "😐 I sense some concern in your message. I'm here to listen.",
    "🤝 It sounds like you might be feeling uncertain. Let's talk about it.",
    "💭 I notice some hesitation. Would you like to share more?",
];

const NEUTRAL_REPLIES: &[&str] = &[
    "🤔 I'm listening. Please tell me more about what you need.",
    "📝 I understand. How would you like me to help you with this?",
    "💡 Got it. What specific assistance are you looking for?",
];

/// Response bucket a measurement falls into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ResponseBucket {
    StrongPositive,
    MildPositive,
    StrongNegative,
    MildNegative,
    Neutral,
}

impl ResponseBucket {
    /// Classify an assessment/polarity pair into a bucket.
    ///
    /// The assessment is trusted input; only the polarity magnitude is
    /// inspected to split strong from mild.
    pub fn classify(assessment: Assessment, polarity: f64) -> Self {
        match assessment {
            Assessment::Positive if polarity > STRONG_POLARITY => ResponseBucket::StrongPositive,
            Assessment::Positive => ResponseBucket::MildPositive,
            Assessment::Negative if polarity < -STRONG_POLARITY => ResponseBucket::StrongNegative,
            Assessment::Negative => ResponseBucket::MildNegative,
            Assessment::Neutral => ResponseBucket::Neutral,
        }
    }

    /// Candidate replies for this bucket. Selection always takes index 0,
    /// keeping output reproducible; the remaining variants stay listed.
    pub fn replies(&self) -> &'static [&'static str] {
        match self {
            ResponseBucket::StrongPositive => STRONG_POSITIVE_REPLIES,
            ResponseBucket::MildPositive => MILD_POSITIVE_REPLIES,
            ResponseBucket::StrongNegative => STRONG_NEGATIVE_REPLIES,
            ResponseBucket::MildNegative => MILD_NEGATIVE_REPLIES,
            ResponseBucket::Neutral => NEUTRAL_REPLIES,
        }
    }
}

/// Qualitative mood label over a conversation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display)]
pub enum Mood {
    #[strum(serialize = "Generally Positive")]
    GenerallyPositive,
    #[strum(serialize = "Generally Negative")]
    GenerallyNegative,
    #[strum(serialize = "Balanced")]
    Balanced,
}

impl Mood {
    /// Derive the mood label from a mean polarity.
    pub fn from_mean_polarity(mean: f64) -> Self {
        if mean > 0.1 {
            Mood::GenerallyPositive
        } else if mean < -0.1 {
            Mood::GenerallyNegative
        } else {
            Mood::Balanced
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            Mood::GenerallyPositive => "😊",
            Mood::GenerallyNegative => "😢",
            Mood::Balanced => "😐",
        }
    }
}

/// Qualitative emotional-tone label over a conversation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display)]
pub enum Tone {
    High,
    Moderate,
    Low,
}

impl Tone {
    /// Derive the tone label from a mean subjectivity.
    pub fn from_mean_subjectivity(mean: f64) -> Self {
        if mean > 0.6 {
            Tone::High
        } else if mean > 0.3 {
            Tone::Moderate
        } else {
            Tone::Low
        }
    }
}

/// Aggregate statistics over a conversation.
///
/// `analyzed == 0` is the "no data" sentinel: all means are zero and
/// `render` prints a placeholder line instead of statistics.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SummaryReport {
    /// Total turns, measured or not.
    pub total_turns: usize,
    /// Turns that carried a measurement.
    pub analyzed: usize,
    pub mean_polarity: f64,
    pub mean_subjectivity: f64,
    pub positive: usize,
    pub negative: usize,
    pub neutral: usize,
    pub mood: Mood,
    pub tone: Tone,
}

impl SummaryReport {
    /// True when no measured turns were available.
    pub fn is_empty(&self) -> bool {
        self.analyzed == 0
    }

    pub fn positive_pct(&self) -> f64 {
        self.pct(self.positive)
    }

    pub fn negative_pct(&self) -> f64 {
        self.pct(self.negative)
    }

    pub fn neutral_pct(&self) -> f64 {
        self.pct(self.neutral)
    }

    fn pct(&self, count: usize) -> f64 {
        if self.analyzed == 0 {
            0.0
        } else {
            count as f64 / self.analyzed as f64 * 100.0
        }
    }

    /// Render the report as a multi-line block. Pure formatting.
    pub fn render(&self) -> String {
        if self.is_empty() {
            return "No sentiment data available.".to_string();
        }

        let rule = "━".repeat(60);
        format!(
            "📊 Conversation Summary ({analyzed} of {total} messages analyzed)\n\
             {rule}\n\
             📈 Average Polarity: {polarity:+.2}\n\
             📉 Average Subjectivity: {subjectivity:.2}\n\
             \n\
             📋 Sentiment Distribution:\n\
             \x20 😊 Positive: {pos} ({pos_pct:.1}%)\n\
             \x20 😢 Negative: {neg} ({neg_pct:.1}%)\n\
             \x20 😐 Neutral:  {neu} ({neu_pct:.1}%)\n\
             \n\
             💡 Overall Mood: {mood_icon} {mood}\n\
             🎭 Emotional Tone: {tone} subjectivity\n\
             {rule}",
            analyzed = self.analyzed,
            total = self.total_turns,
            rule = rule,
            polarity = self.mean_polarity,
            subjectivity = self.mean_subjectivity,
            pos = self.positive,
            pos_pct = self.positive_pct(),
            neg = self.negative,
            neg_pct = self.negative_pct(),
            neu = self.neutral,
            neu_pct = self.neutral_pct(),
            mood_icon = self.mood.icon(),
            mood = self.mood,
            tone = self.tone,
        )
    }
}

/// Maps measurements to empathetic replies and tracks session aggregates.
///
/// One instance owns one conversation history; hosts driving multiple
/// conversations concurrently must use one responder per conversation.
#[derive(Debug)]
pub struct SentimentResponder {
    history: ConversationHistory,
    bar_width: usize,
}

impl Default for SentimentResponder {
    fn default() -> Self {
        Self::new()
    }
}

impl SentimentResponder {
    /// Create a responder with an empty history and the default bar width.
    pub fn new() -> Self {
        Self {
            history: ConversationHistory::new(),
            bar_width: DEFAULT_BAR_WIDTH,
        }
    }

    /// Override the measurement-display bar width.
    pub fn with_bar_width(mut self, bar_width: usize) -> Self {
        self.bar_width = bar_width;
        self
    }

    /// Select an empathetic reply for a measurement.
    ///
    /// Pure function of its input: bucket by assessment and polarity
    /// magnitude, take the first candidate reply, append the subjectivity
    /// qualifier. An absent measurement yields the fixed fallback prompt.
    /// The result is always non-empty.
    pub fn classify_and_respond(&self, measurement: Option<&SentimentMeasurement>) -> String {
        let measurement = match measurement {
            Some(m) => m,
            None => return FALLBACK_PROMPT.to_string(),
        };

        let bucket = ResponseBucket::classify(measurement.assessment, measurement.polarity);
        let base = bucket.replies()[0];

        let qualifier = if measurement.subjectivity > PERSONAL_SUBJECTIVITY {
            PERSONAL_QUALIFIER
        } else if measurement.subjectivity < OBJECTIVE_SUBJECTIVITY {
            OBJECTIVE_QUALIFIER
        } else {
            ""
        };

        format!("{base}{qualifier}")
    }

    /// Append one turn to the history. Unconditional.
    pub fn record(
        &mut self,
        input_text: &str,
        measurement: Option<SentimentMeasurement>,
        response: &str,
    ) {
        self.history
            .push(ConversationTurn::new(input_text, measurement, response));
    }

    /// Aggregate statistics over the current history.
    ///
    /// With zero measured turns this returns the "no data" sentinel report;
    /// there is no division by zero.
    pub fn summarize(&self) -> SummaryReport {
        let total_turns = self.history.len();
        let measurements: Vec<&SentimentMeasurement> = self.history.measurements().collect();
        let analyzed = measurements.len();

        if analyzed == 0 {
            return SummaryReport {
                total_turns,
                analyzed: 0,
                mean_polarity: 0.0,
                mean_subjectivity: 0.0,
                positive: 0,
                negative: 0,
                neutral: 0,
                mood: Mood::Balanced,
                tone: Tone::Low,
            };
        }

        let mean_polarity =
            measurements.iter().map(|m| m.polarity).sum::<f64>() / analyzed as f64;
        let mean_subjectivity =
            measurements.iter().map(|m| m.subjectivity).sum::<f64>() / analyzed as f64;

        let count = |a: Assessment| measurements.iter().filter(|m| m.assessment == a).count();

        SummaryReport {
            total_turns,
            analyzed,
            mean_polarity,
            mean_subjectivity,
            positive: count(Assessment::Positive),
            negative: count(Assessment::Negative),
            neutral: count(Assessment::Neutral),
            mood: Mood::from_mean_polarity(mean_polarity),
            tone: Tone::from_mean_subjectivity(mean_subjectivity),
        }
    }

    /// Render a measurement at this responder's configured bar width.
    pub fn format_measurement(&self, measurement: &SentimentMeasurement) -> String {
        display::format_measurement(measurement, self.bar_width)
    }

    /// The conversation history so far.
    pub fn history(&self) -> &ConversationHistory {
        &self.history
    }
}
