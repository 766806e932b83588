//! Gradio prediction client.
//!
//! Thin HTTP client for a hosted Gradio app exposing a sentiment-analysis
//! function. The predict endpoint path varies between Gradio versions, so
//! [`GradioClient::connect`] probes the known shapes once and remembers the
//! first one that answers.

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use serde_json::Value;
use tracing::{debug, info, warn};

use crate::error::{AgentError, Result};
use crate::measurement::SentimentMeasurement;
use crate::provider::SentimentProvider;

/// Hosted demo Space this client was written against.
pub const DEFAULT_SPACE_URL: &str = "https://sam522-demo-mcp-server.hf.space";

/// Predict endpoint shapes used across Gradio versions, probed in order.
const PREDICT_ENDPOINTS: &[&str] = &["/api/predict", "/run/predict", "/call/predict"];

/// Sentence used to verify an endpoint during connection.
const PROBE_TEXT: &str = "Connection test.";

/// Envelope wrapping every Gradio prediction response.
#[derive(Debug, Deserialize)]
struct PredictResponse {
    data: Vec<Value>,
}

/// Sentiment fields as the hosted function returns them.
#[derive(Debug, Deserialize)]
struct RawSentiment {
    polarity: f64,
    subjectivity: f64,
    assessment: String,
}

/// Pull the sentiment record out of a prediction envelope.
///
/// The first data element is either a JSON-encoded string or an inline
/// object; both shapes occur in the wild.
fn extract_sentiment(response: &PredictResponse) -> Result<RawSentiment> {
    let first = response
        .data
        .first()
        .ok_or_else(|| AgentError::MalformedPayload("empty data array".to_string()))?;

    let raw: RawSentiment = match first {
        Value::String(encoded) => serde_json::from_str(encoded)?,
        other => serde_json::from_value(other.clone())?,
    };

    Ok(raw)
}

fn into_measurement(text: &str, raw: RawSentiment) -> Result<SentimentMeasurement> {
    let assessment = raw
        .assessment
        .parse()
        .map_err(|_| AgentError::MalformedPayload(format!("unknown assessment {:?}", raw.assessment)))?;

    Ok(SentimentMeasurement::new(
        text,
        raw.polarity,
        raw.subjectivity,
        assessment,
    ))
}

/// Client for a Gradio-hosted sentiment function.
#[derive(Debug, Clone)]
pub struct GradioClient {
    client: Client,
    base_url: String,
    endpoint: String,
}

impl GradioClient {
    /// Connect to a Gradio app, probing the known predict endpoint shapes.
    ///
    /// Returns an error when none of them answers with a parseable
    /// prediction.
    pub async fn connect(base_url: &str) -> Result<Self> {
        let client = Client::new();
        let base_url = base_url.trim_end_matches('/').to_string();

        info!("Connecting to Gradio app at {base_url}");

        for endpoint in PREDICT_ENDPOINTS {
            let url = format!("{base_url}{endpoint}");
            match Self::predict_at(&client, &url, PROBE_TEXT).await {
                Ok(_) => {
                    info!("Using predict endpoint {endpoint}");
                    return Ok(Self {
                        client,
                        base_url,
                        endpoint: endpoint.to_string(),
                    });
                }
                Err(err) => {
                    debug!("Endpoint {endpoint} rejected: {err}");
                }
            }
        }

        warn!("No predict endpoint answered under {base_url}");
        Err(AgentError::EndpointDiscovery { base_url })
    }

    /// Connect to the hosted demo Space.
    pub async fn connect_default() -> Result<Self> {
        Self::connect(DEFAULT_SPACE_URL).await
    }

    /// Base URL this client is bound to.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    async fn predict_at(client: &Client, url: &str, text: &str) -> Result<RawSentiment> {
        let response = client
            .post(url)
            .json(&serde_json::json!({ "data": [text] }))
            .send()
            .await?
            .error_for_status()?
            .json::<PredictResponse>()
            .await?;

        extract_sentiment(&response)
    }

    /// Analyze one text through the resolved predict endpoint.
    pub async fn analyze_text(&self, text: &str) -> Result<SentimentMeasurement> {
        let url = format!("{}{}", self.base_url, self.endpoint);
        debug!("Requesting sentiment for {} bytes of text", text.len());

        let raw = Self::predict_at(&self.client, &url, text).await?;
        into_measurement(text, raw)
    }
}

#[async_trait]
impl SentimentProvider for GradioClient {
    fn name(&self) -> &str {
        "gradio"
    }

    async fn analyze(&self, text: &str) -> Result<SentimentMeasurement> {
        self.analyze_text(text).await
    }
}
