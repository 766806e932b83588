//! Sentiment measurement types.
//!
//! A measurement is the unit of data handed to the responder: one analyzed
//! text with its polarity, subjectivity and categorical assessment.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

/// Categorical sentiment assessment.
///
/// Trusted input from the provider; the responder never re-derives it from
/// the polarity sign.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display, EnumString)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Assessment {
    Positive,
    Negative,
    Neutral,
}

impl Assessment {
    /// Mood icon used in measurement displays.
    pub fn icon(&self) -> &'static str {
        match self {
            Assessment::Positive => "😊",
            Assessment::Negative => "😢",
            Assessment::Neutral => "😐",
        }
    }

    /// Color marker used in measurement displays.
    pub fn marker(&self) -> &'static str {
        match self {
            Assessment::Positive => "🟢",
            Assessment::Negative => "🔴",
            Assessment::Neutral => "⚪",
        }
    }

    /// Human-readable label.
    pub fn label(&self) -> &'static str {
        match self {
            Assessment::Positive => "Positive",
            Assessment::Negative => "Negative",
            Assessment::Neutral => "Neutral",
        }
    }
}

/// A single sentiment measurement, immutable once received.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SentimentMeasurement {
    /// The analyzed text.
    pub text: String,
    /// Polarity in [-1.0, 1.0]; negative values mean negative sentiment.
    pub polarity: f64,
    /// Subjectivity in [0.0, 1.0]; 0 is fully objective, 1 fully personal.
    pub subjectivity: f64,
    /// Categorical assessment, consistent with the polarity sign by contract.
    pub assessment: Assessment,
    /// Arrival time; used for display and ordering only.
    pub timestamp: DateTime<Utc>,
}

impl SentimentMeasurement {
    /// Create a new measurement, stamped with the current time.
    ///
    /// Out-of-range values are clamped to the documented intervals.
    pub fn new(text: &str, polarity: f64, subjectivity: f64, assessment: Assessment) -> Self {
        Self {
            text: text.to_string(),
            polarity: polarity.clamp(-1.0, 1.0),
            subjectivity: subjectivity.clamp(0.0, 1.0),
            assessment,
            timestamp: Utc::now(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_assessment_roundtrip() {
        assert_eq!(Assessment::Positive.to_string(), "positive");
        assert_eq!("negative".parse::<Assessment>().unwrap(), Assessment::Negative);
        assert_eq!("neutral".parse::<Assessment>().unwrap(), Assessment::Neutral);
        assert!("bogus".parse::<Assessment>().is_err());
    }

    #[test]
    fn test_measurement_clamps_ranges() {
        let m = SentimentMeasurement::new("hi", 1.7, -0.2, Assessment::Positive);
        assert_eq!(m.polarity, 1.0);
        assert_eq!(m.subjectivity, 0.0);
    }

    #[test]
    fn test_serde_lowercase_assessment() {
        let json = serde_json::to_string(&Assessment::Neutral).unwrap();
        assert_eq!(json, "\"neutral\"");
    }
}
