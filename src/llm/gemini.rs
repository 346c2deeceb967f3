use std::time::Duration;

use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use super::ItineraryGenerator;
use super::{GeminiError, error::Result};
use crate::config::LlmConfig;

/// Gemini REST API client
///
/// Holds the endpoint, credential, and model identifier injected at
/// startup. Each generation is exactly one attempt; the only defensive
/// measure is the request timeout from configuration.
#[derive(Debug)]
pub struct GeminiClient {
    client: Client,
    api_key: String,
    base_url: String,
    model: String,
}

/// A remote model that supports text generation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModelInfo {
    pub name: String,
    pub display_name: Option<String>,
    pub description: Option<String>,
}

impl GeminiClient {
    /// Create a new client from configuration
    pub fn new(config: &LlmConfig) -> Result<Self> {
        let api_key = config
            .api_key
            .clone()
            .filter(|key| !key.is_empty())
            .ok_or_else(|| {
                GeminiError::AuthenticationError("Gemini API key is not configured".to_string())
            })?;

        let client = Client::builder()
            .timeout(Duration::from_secs(u64::from(config.timeout_seconds)))
            .user_agent("SmartMap/0.1.0")
            .build()
            .map_err(|e| GeminiError::NetworkError(format!("Failed to create HTTP client: {e}")))?;

        Ok(Self {
            client,
            api_key,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            model: config.model.clone(),
        })
    }

    /// The model identifier requests are sent to
    #[must_use]
    pub fn model(&self) -> &str {
        &self.model
    }

    fn request_url(&self, path: &str) -> String {
        format!(
            "{}/{}?key={}",
            self.base_url,
            path,
            urlencoding::encode(&self.api_key)
        )
    }

    /// Send one prompt to the model and return the generated text
    #[tracing::instrument(name = "gemini_generate", level = "debug", skip(self, prompt))]
    pub async fn generate(&self, prompt: &str) -> Result<String> {
        debug!("Requesting itinerary from model {}", self.model);

        let url = self.request_url(&format!("models/{}:generateContent", self.model));
        let body = GenerateContentRequest {
            contents: vec![Content {
                parts: vec![Part {
                    text: prompt.to_string(),
                }],
            }],
        };

        let response = self
            .client
            .post(&url)
            .json(&body)
            .send()
            .await
            // Strip the URL so the API key never reaches error text or logs
            .map_err(|e| GeminiError::NetworkError(format!("Request failed: {}", e.without_url())))?;

        let generate_response: GenerateContentResponse =
            Self::check_status(response)
                .await?
                .json()
                .await
                .map_err(|e| {
                    GeminiError::ParseError(format!(
                        "Failed to parse Gemini response: {}",
                        e.without_url()
                    ))
                })?;

        generate_response.first_text().ok_or_else(|| {
            GeminiError::ParseError("Gemini response contained no generated text".to_string())
        })
    }

    /// Enumerate remote models that support text generation
    #[tracing::instrument(name = "gemini_list_models", level = "debug", skip(self))]
    pub async fn list_models(&self) -> Result<Vec<ModelInfo>> {
        let url = self.request_url("models");

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| GeminiError::NetworkError(format!("Request failed: {}", e.without_url())))?;

        let models_response: ModelsResponse = Self::check_status(response)
            .await?
            .json()
            .await
            .map_err(|e| {
                GeminiError::ParseError(format!(
                    "Failed to parse Gemini model list: {}",
                    e.without_url()
                ))
            })?;

        let models: Vec<ModelInfo> = models_response
            .models
            .unwrap_or_default()
            .into_iter()
            .filter(ModelEntry::supports_generation)
            .map(ModelEntry::into_model_info)
            .collect();

        info!("Found {} models that support text generation", models.len());
        Ok(models)
    }

    async fn check_status(response: reqwest::Response) -> Result<reqwest::Response> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let error_text = response.text().await.unwrap_or_default();
        match status.as_u16() {
            401 | 403 => Err(GeminiError::AuthenticationError(
                "Invalid or missing Gemini API key".to_string(),
            )),
            429 => Err(GeminiError::RateLimitError(
                "Gemini API quota exceeded".to_string(),
            )),
            _ => Err(GeminiError::ApiError(format!(
                "Gemini API error {status}: {error_text}"
            ))),
        }
    }
}

#[async_trait::async_trait]
impl ItineraryGenerator for GeminiClient {
    async fn generate(&self, prompt: &str) -> Result<String> {
        GeminiClient::generate(self, prompt).await
    }
}

// Gemini API wire types

#[derive(Debug, Serialize)]
struct GenerateContentRequest {
    contents: Vec<Content>,
}

#[derive(Debug, Serialize)]
struct Content {
    parts: Vec<Part>,
}

#[derive(Debug, Serialize, Deserialize)]
struct Part {
    text: String,
}

#[derive(Debug, Deserialize)]
struct GenerateContentResponse {
    candidates: Option<Vec<Candidate>>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: Option<CandidateContent>,
}

#[derive(Debug, Deserialize)]
struct CandidateContent {
    parts: Option<Vec<Part>>,
}

impl GenerateContentResponse {
    /// Text of the first candidate, with multi-part replies joined
    fn first_text(&self) -> Option<String> {
        let parts = self
            .candidates
            .as_ref()?
            .first()?
            .content
            .as_ref()?
            .parts
            .as_ref()?;

        if parts.is_empty() {
            return None;
        }

        Some(
            parts
                .iter()
                .map(|part| part.text.as_str())
                .collect::<String>(),
        )
    }
}

#[derive(Debug, Deserialize)]
struct ModelsResponse {
    models: Option<Vec<ModelEntry>>,
}

#[derive(Debug, Deserialize)]
struct ModelEntry {
    name: String,
    #[serde(rename = "displayName")]
    display_name: Option<String>,
    description: Option<String>,
    #[serde(rename = "supportedGenerationMethods")]
    supported_generation_methods: Option<Vec<String>>,
}

impl ModelEntry {
    fn supports_generation(&self) -> bool {
        self.supported_generation_methods
            .as_ref()
            .is_some_and(|methods| methods.iter().any(|method| method == "generateContent"))
    }

    fn into_model_info(self) -> ModelInfo {
        ModelInfo {
            name: self.name,
            display_name: self.display_name,
            description: self.description,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_config() -> LlmConfig {
        LlmConfig {
            api_key: Some("test_api_key_123".to_string()),
            base_url: "https://generativelanguage.googleapis.com/v1beta".to_string(),
            model: "gemini-pro".to_string(),
            timeout_seconds: 30,
        }
    }

    #[test]
    fn test_client_creation() {
        let client = GeminiClient::new(&test_config()).unwrap();
        assert_eq!(client.model(), "gemini-pro");
        assert_eq!(
            client.base_url,
            "https://generativelanguage.googleapis.com/v1beta"
        );
    }

    #[test]
    fn test_client_requires_api_key() {
        let mut config = test_config();
        config.api_key = None;
        let result = GeminiClient::new(&config);
        assert!(matches!(
            result.unwrap_err(),
            GeminiError::AuthenticationError(_)
        ));

        let mut config = test_config();
        config.api_key = Some(String::new());
        assert!(GeminiClient::new(&config).is_err());
    }

    #[test]
    fn test_request_url_encodes_key() {
        let mut config = test_config();
        config.api_key = Some("key+with/specials".to_string());
        let client = GeminiClient::new(&config).unwrap();
        let url = client.request_url("models/gemini-pro:generateContent");
        assert!(url.ends_with("?key=key%2Bwith%2Fspecials"));
        assert!(url.contains("models/gemini-pro:generateContent"));
    }

    #[test]
    fn test_generate_request_body_shape() {
        let body = GenerateContentRequest {
            contents: vec![Content {
                parts: vec![Part {
                    text: "plan a trip".to_string(),
                }],
            }],
        };
        let json = serde_json::to_value(&body).unwrap();
        assert_eq!(json["contents"][0]["parts"][0]["text"], "plan a trip");
    }

    #[test]
    fn test_parse_generate_response() {
        let raw = r###"{
            "candidates": [
                {
                    "content": {
                        "parts": [
                            { "text": "## Day 1" },
                            { "text": "\n- Morning: temples" }
                        ],
                        "role": "model"
                    },
                    "finishReason": "STOP"
                }
            ]
        }"###;

        let response: GenerateContentResponse = serde_json::from_str(raw).unwrap();
        assert_eq!(
            response.first_text().unwrap(),
            "## Day 1\n- Morning: temples"
        );
    }

    #[test]
    fn test_parse_empty_generate_response() {
        let response: GenerateContentResponse = serde_json::from_str("{}").unwrap();
        assert!(response.first_text().is_none());

        let response: GenerateContentResponse =
            serde_json::from_str(r#"{ "candidates": [] }"#).unwrap();
        assert!(response.first_text().is_none());
    }

    #[test]
    fn test_model_entry_filtering() {
        let raw = r#"{
            "models": [
                {
                    "name": "models/gemini-pro",
                    "displayName": "Gemini Pro",
                    "supportedGenerationMethods": ["generateContent", "countTokens"]
                },
                {
                    "name": "models/embedding-001",
                    "supportedGenerationMethods": ["embedContent"]
                },
                {
                    "name": "models/aqa"
                }
            ]
        }"#;

        let response: ModelsResponse = serde_json::from_str(raw).unwrap();
        let models: Vec<ModelInfo> = response
            .models
            .unwrap()
            .into_iter()
            .filter(ModelEntry::supports_generation)
            .map(ModelEntry::into_model_info)
            .collect();

        assert_eq!(models.len(), 1);
        assert_eq!(models[0].name, "models/gemini-pro");
        assert_eq!(models[0].display_name.as_deref(), Some("Gemini Pro"));
    }
}
