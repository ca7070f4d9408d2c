use crate::core::AiExtractor;
use crate::models::{AgeRange, Criteria};
use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde_json::{json, Map, Value};
use std::time::Duration;
use thiserror::Error;

/// Errors that can occur when calling the Gemini API
#[derive(Debug, Error)]
pub enum AiError {
    #[error("HTTP request failed: {0}")]
    RequestError(#[from] reqwest::Error),

    #[error("API returned error: {0}")]
    ApiError(String),

    #[error("Unauthorized: invalid API key")]
    Unauthorized,

    #[error("Quota exceeded")]
    QuotaExceeded,

    #[error("Invalid response format: {0}")]
    InvalidResponse(String),
}

/// Gemini `generateContent` client that extracts search criteria
///
/// Handles prompting the model and converting its JSON answer into
/// [`Criteria`]. As an [`AiExtractor`] it never fails; errors are logged
/// and reported as empty criteria.
pub struct GeminiClient {
    base_url: String,
    api_key: String,
    model: String,
    client: Client,
}

impl GeminiClient {
    /// Create a new Gemini client; `timeout` bounds every request
    pub fn new(
        base_url: String,
        api_key: String,
        model: String,
        timeout: Duration,
    ) -> Result<Self, AiError> {
        let client = Client::builder().timeout(timeout).build()?;

        Ok(Self {
            base_url,
            api_key,
            model,
            client,
        })
    }

    /// Ask the model for criteria matching a raw query
    pub async fn extract_criteria(&self, text: &str) -> Result<Criteria, AiError> {
        let url = format!(
            "{}/models/{}:generateContent?key={}",
            self.base_url.trim_end_matches('/'),
            self.model,
            urlencoding::encode(&self.api_key)
        );

        let body = json!({
            "contents": [{ "parts": [{ "text": build_prompt(text) }] }]
        });

        let response = self.client.post(&url).json(&body).send().await?;

        match response.status() {
            status if status.is_success() => {}
            StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => return Err(AiError::Unauthorized),
            StatusCode::TOO_MANY_REQUESTS => return Err(AiError::QuotaExceeded),
            status => {
                return Err(AiError::ApiError(format!(
                    "Failed to generate content: {}",
                    status
                )))
            }
        }

        let json: Value = response.json().await?;

        let answer = json
            .pointer("/candidates/0/content/parts/0/text")
            .and_then(Value::as_str)
            .ok_or_else(|| AiError::InvalidResponse("Missing candidate text".into()))?;

        parse_model_answer(answer)
    }
}

#[async_trait]
impl AiExtractor for GeminiClient {
    async fn extract(&self, text: &str) -> Criteria {
        match self.extract_criteria(text).await {
            Ok(criteria) => criteria,
            Err(e) => {
                tracing::warn!("Gemini extraction failed, continuing without it: {}", e);
                Criteria::default()
            }
        }
    }
}

fn build_prompt(text: &str) -> String {
    format!(
        r#"Extract influencer search criteria from: "{}"
Return ONLY JSON with these possible fields:
{{
    "category": "string",
    "content_type": "string",
    "platform": "string",
    "min_followers": integer,
    "max_followers": integer,
    "min_engagement": float,
    "max_budget": float,
    "age_range": [min, max],
    "gender": "string"
}}

Special conversions:
- "gen z" -> age_range [18, 25]
- "millennial" -> age_range [26, 40]
- "teen" -> age_range [13, 19]
- "affordable" -> max_budget: 7000
- "premium" -> max_budget: 20000

Only include explicitly mentioned or strongly implied fields."#,
        text
    )
}

/// Parse the model's text answer, tolerating markdown code fences
pub fn parse_model_answer(answer: &str) -> Result<Criteria, AiError> {
    let cleaned = answer.replace("```json", "").replace("```", "");
    let cleaned = cleaned.trim();

    if cleaned.is_empty() || cleaned == "{}" {
        return Ok(Criteria::default());
    }

    let value: Value = serde_json::from_str(cleaned)
        .map_err(|e| AiError::InvalidResponse(format!("Answer is not JSON: {}", e)))?;

    let object = value
        .as_object()
        .ok_or_else(|| AiError::InvalidResponse("Answer is not a JSON object".into()))?;

    Ok(criteria_from_object(object))
}

/// Convert model output field by field
///
/// A field with an unusable value is dropped on its own so that one bad
/// threshold never discards the rest of the answer.
pub fn criteria_from_object(object: &Map<String, Value>) -> Criteria {
    let criteria = Criteria {
        category: text_field(object, "category"),
        content_type: text_field(object, "content_type"),
        platform: text_field(object, "platform"),
        min_followers: count_field(object, "min_followers"),
        max_followers: count_field(object, "max_followers"),
        min_engagement: number_field(object, "min_engagement"),
        max_budget: number_field(object, "max_budget").filter(|v| *v >= 0.0),
        age_range: age_range_field(object),
        gender: text_field(object, "gender"),
    };

    for key in object.keys() {
        if !is_known_key(key) {
            tracing::debug!("Ignoring unknown criteria key from model: {}", key);
        }
    }

    criteria
}

fn is_known_key(key: &str) -> bool {
    matches!(
        key,
        "category"
            | "content_type"
            | "platform"
            | "min_followers"
            | "max_followers"
            | "min_engagement"
            | "max_budget"
            | "age_range"
            | "gender"
    )
}

fn text_field(object: &Map<String, Value>, key: &str) -> Option<String> {
    let value = object.get(key)?;
    match value.as_str().map(str::trim) {
        Some(text) if !text.is_empty() => Some(text.to_string()),
        Some(_) => None,
        None => {
            if !value.is_null() {
                tracing::debug!("Dropping non-text {} from model: {}", key, value);
            }
            None
        }
    }
}

fn number_field(object: &Map<String, Value>, key: &str) -> Option<f64> {
    let value = object.get(key)?;
    let number = as_number(value);
    if number.is_none() && !value.is_null() {
        tracing::debug!("Dropping non-numeric {} from model: {}", key, value);
    }
    number
}

fn count_field(object: &Map<String, Value>, key: &str) -> Option<u64> {
    number_field(object, key)
        .filter(|v| *v >= 0.0 && *v <= u64::MAX as f64)
        .map(|v| v.round() as u64)
}

fn age_range_field(object: &Map<String, Value>) -> Option<AgeRange> {
    let bounds = object.get("age_range")?.as_array()?;
    match bounds.as_slice() {
        [a, b] => {
            let a = as_number(a)?;
            let b = as_number(b)?;
            Some(AgeRange::new(a.round() as i64, b.round() as i64))
        }
        _ => {
            tracing::debug!("Dropping age_range with {} bounds from model", bounds.len());
            None
        }
    }
}

/// Numbers and numeric strings ("7,000") both count
fn as_number(value: &Value) -> Option<f64> {
    let number = match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().replace(',', "").parse::<f64>().ok(),
        _ => None,
    }?;
    number.is_finite().then_some(number)
}
