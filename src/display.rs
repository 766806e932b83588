//! Measurement rendering.
//!
//! Deterministic text rendering of a single measurement: mood icon, color
//! marker and two proportional bars, one for polarity and one for
//! subjectivity. Rendering carries no logic beyond linear scaling.

use crate::measurement::SentimentMeasurement;

/// Default width of the proportional bars, in cells.
pub const DEFAULT_BAR_WIDTH: usize = 20;

const FILLED: &str = "█";
const UNFILLED: &str = "░";

/// Render a proportional bar for a fill ratio in [0.0, 1.0].
///
/// Fractional cell counts truncate toward zero; out-of-range ratios clamp.
pub fn proportion_bar(fill: f64, width: usize) -> String {
    let filled = ((fill.clamp(0.0, 1.0)) * width as f64) as usize;
    let filled = filled.min(width);
    format!("{}{}", FILLED.repeat(filled), UNFILLED.repeat(width - filled))
}

/// One-line rendering of a measurement.
pub fn format_compact(measurement: &SentimentMeasurement) -> String {
    format!(
        "{} {} {} (polarity: {:+.2}, subjectivity: {:.2})",
        measurement.assessment.marker(),
        measurement.assessment.icon(),
        measurement.assessment.label(),
        measurement.polarity,
        measurement.subjectivity,
    )
}

/// Full multi-line rendering of a measurement.
///
/// The polarity bar maps [-1, 1] to the bar width via `(polarity + 1) / 2`;
/// the subjectivity bar maps [0, 1] directly.
pub fn format_measurement(measurement: &SentimentMeasurement, bar_width: usize) -> String {
    let rule = "━".repeat(60);
    let polarity_bar = proportion_bar((measurement.polarity + 1.0) / 2.0, bar_width);
    let subjectivity_bar = proportion_bar(measurement.subjectivity, bar_width);

    format!(
        "{icon} Sentiment Analysis Results:\n\
         {rule}\n\
         📝 Text: \"{text}\"\n\
         {marker} Assessment: {assessment}\n\
         📊 Polarity: {polarity:+.2} [{polarity_bar}]\n\
         📈 Subjectivity: {subjectivity:.2} [{subjectivity_bar}]\n\
         ⏰ Analyzed: {timestamp}\n\
         {rule}",
        icon = measurement.assessment.icon(),
        rule = rule,
        text = measurement.text,
        marker = measurement.assessment.marker(),
        assessment = measurement.assessment.label().to_uppercase(),
        polarity = measurement.polarity,
        polarity_bar = polarity_bar,
        subjectivity = measurement.subjectivity,
        subjectivity_bar = subjectivity_bar,
        timestamp = measurement.timestamp.format("%Y-%m-%d %H:%M:%S UTC"),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::measurement::Assessment;

    #[test]
    fn test_bar_extremes() {
        assert_eq!(proportion_bar(0.0, 20), UNFILLED.repeat(20));
        assert_eq!(proportion_bar(1.0, 20), FILLED.repeat(20));
    }

    #[test]
    fn test_bar_truncates_toward_zero() {
        // 0.5 * 20 = 10 exactly; 0.549 * 20 = 10.98 still truncates to 10
        assert_eq!(proportion_bar(0.5, 20), format!("{}{}", FILLED.repeat(10), UNFILLED.repeat(10)));
        assert_eq!(
            proportion_bar(0.549, 20),
            format!("{}{}", FILLED.repeat(10), UNFILLED.repeat(10))
        );
    }

    #[test]
    fn test_full_negative_polarity_renders_empty_bar() {
        let m = SentimentMeasurement::new("dreadful", -1.0, 0.0, Assessment::Negative);
        let rendered = format_measurement(&m, 20);
        // (-1 + 1) / 2 = 0.0 -> zero filled cells
        assert!(rendered.contains(&format!("[{}]", UNFILLED.repeat(20))));
        assert!(!rendered.contains(FILLED));
    }

    #[test]
    fn test_format_is_pure() {
        let m = SentimentMeasurement::new("okay", 0.2, 0.4, Assessment::Neutral);
        assert_eq!(format_measurement(&m, 20), format_measurement(&m, 20));
        assert_eq!(format_compact(&m), format_compact(&m));
    }

    #[test]
    fn test_compact_contains_marker_and_values() {
        let m = SentimentMeasurement::new("great", 0.8, 0.9, Assessment::Positive);
        let line = format_compact(&m);
        assert!(line.contains("🟢"));
        assert!(line.contains("+0.80"));
        assert!(line.contains("0.90"));
    }
}
