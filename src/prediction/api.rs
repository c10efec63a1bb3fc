use serde::Deserialize;

use crate::http_client;

use super::{PredictError, PredictionResult};

/// Fixed endpoint path on the prediction service.
const PREDICT_PATH: &str = "/predict";
const MAX_RESPONSE_BYTES: usize = 64 * 1024;

/// Submit one measurement payload and parse the verdict.
///
/// Issues exactly one request; there is no retry. `base_url` comes from the
/// settings file, the `/predict` path is fixed.
pub fn predict(
    base_url: &str,
    payload: &serde_json::Value,
) -> Result<PredictionResult, PredictError> {
    let url = format!("{}{PREDICT_PATH}", base_url.trim_end_matches('/'));
    let request = http_client::agent()
        .post(&url)
        .set("Accept", "application/json")
        .set("Content-Type", "application/json");

    let response = match request.send_json(payload) {
        Ok(response) => response,
        Err(ureq::Error::Status(code, response)) => {
            let body = read_body(response).unwrap_or_default();
            return Err(status_error(code, &body));
        }
        Err(ureq::Error::Transport(err)) => {
            return Err(PredictError::Transport(err.to_string()));
        }
    };

    let body = read_body(response).map_err(PredictError::Malformed)?;
    parse_prediction_response(&body)
}

#[derive(Debug, Deserialize)]
struct PredictionWire {
    predicted_class: Option<i64>,
    probability_default: Option<f64>,
    probability_repaid: Option<f64>,
}

#[derive(Debug, Deserialize)]
struct ErrorWire {
    error: Option<String>,
}

fn parse_prediction_response(body: &str) -> Result<PredictionResult, PredictError> {
    let trimmed = body.trim();
    if trimmed.is_empty() {
        return Err(PredictError::Malformed("Empty response body".to_string()));
    }
    let wire: PredictionWire = serde_json::from_str(trimmed)
        .map_err(|err| PredictError::Malformed(format!("{err}: {trimmed}")))?;
    let Some(predicted_class) = wire.predicted_class else {
        return Err(PredictError::Malformed(
            "Missing predicted_class in response".to_string(),
        ));
    };
    Ok(PredictionResult {
        predicted_class,
        probability_default: wire.probability_default,
        probability_repaid: wire.probability_repaid,
    })
}

/// Prefer the service's own `error` message over the bare status code.
fn status_error(code: u16, body: &str) -> PredictError {
    if let Ok(ErrorWire {
        error: Some(message),
    }) = serde_json::from_str::<ErrorWire>(body.trim())
    {
        return PredictError::Service(message);
    }
    PredictError::Status(code)
}

fn read_body(response: ureq::Response) -> Result<String, String> {
    http_client::read_body_limited(response, MAX_RESPONSE_BYTES).map_err(|err| err.to_string())
}
