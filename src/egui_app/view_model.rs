//! Pure helpers that derive display data from a completed prediction.

use crate::prediction::PredictionResult;

/// Render-ready summary of a verdict.
#[derive(Clone, Debug, PartialEq)]
pub struct PredictionSummary {
    /// Class label shown to the user.
    pub class_label: &'static str,
    /// True for the malignant verdict; drives the label color.
    pub malignant: bool,
    /// Probability breakdown, present only when the service supplied both
    /// fields.
    pub probabilities: Option<ProbabilityBreakdown>,
}

/// Both probabilities formatted as percentages.
#[derive(Clone, Debug, PartialEq)]
pub struct ProbabilityBreakdown {
    pub default_percent: String,
    pub repaid_percent: String,
}

/// Derive the display summary for a successful submission.
///
/// The verdict is a strict binary: anything other than `0` or `1` is a
/// display error for the caller to surface, never silently coerced.
pub fn prediction_summary(result: &PredictionResult) -> Result<PredictionSummary, String> {
    let (class_label, malignant) = match result.predicted_class {
        1 => ("Malignant (1)", true),
        0 => ("Benign (0)", false),
        other => return Err(format!("Unexpected predicted class: {other}")),
    };
    let probabilities = match (result.probability_default, result.probability_repaid) {
        (Some(default), Some(repaid)) => Some(ProbabilityBreakdown {
            default_percent: format_percent(default),
            repaid_percent: format_percent(repaid),
        }),
        _ => None,
    };
    Ok(PredictionSummary {
        class_label,
        malignant,
        probabilities,
    })
}

/// Format a unit-interval probability as a percentage with two decimals,
/// rounding halves away from zero.
pub fn format_percent(value: f64) -> String {
    let hundredths = (value * 10_000.0).round();
    format!("{:.2}%", hundredths / 100.0)
}
