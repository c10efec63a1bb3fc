//! Client for the external prediction service.
//!
//! The service consumes the flat measurement payload and answers with a
//! classification verdict. Only the wire contract lives here; the model and
//! its HTTP server are someone else's problem.

mod api;

pub use api::predict;

/// Fallback shown to the user when no service-supplied message is available.
pub const GENERIC_FAILURE_MESSAGE: &str = "Something went wrong";

/// Parsed verdict from a successful prediction response.
///
/// The probability field names come from the service as observed; they are
/// treated as a domain-agnostic complementary pair and are only displayed
/// when both are present.
#[derive(Clone, Debug, PartialEq)]
pub struct PredictionResult {
    /// Classification verdict. The contract allows only `0` or `1`; anything
    /// else is surfaced as a display error downstream, not coerced.
    pub predicted_class: i64,
    pub probability_default: Option<f64>,
    pub probability_repaid: Option<f64>,
}

/// Errors from a prediction request.
#[derive(Debug, thiserror::Error)]
pub enum PredictError {
    /// The service reported a failure through its `error` field.
    #[error("{0}")]
    Service(String),
    /// Non-2xx response without a service-supplied message.
    #[error("HTTP {0}")]
    Status(u16),
    /// The request never produced a response.
    #[error("HTTP error: {0}")]
    Transport(String),
    /// A 2xx response whose body does not match the contract.
    #[error("Invalid response: {0}")]
    Malformed(String),
}

impl PredictError {
    /// Most specific message suitable for the error panel.
    ///
    /// Transport and parse details are deliberately kept out of the UI; they
    /// go to the log instead.
    pub fn user_message(&self) -> String {
        match self {
            Self::Service(message) => message.clone(),
            Self::Status(code) => format!("HTTP {code}"),
            Self::Transport(_) | Self::Malformed(_) => GENERIC_FAILURE_MESSAGE.to_string(),
        }
    }
}
