//! Hugging Face inference API summarizer.

use reqwest::StatusCode;
use reqwest::blocking::Client;
use reqwest::header::{AUTHORIZATION, CONTENT_TYPE, HeaderMap, HeaderValue};
use serde::Deserialize;
use serde_json::json;

use crate::error::{Result, TallyError};

use super::prompts;
use super::provider::{Summarizer, SummarizerConfig, SummaryRequest, api_key_from_env};

/// Returned when the API answers without any summary text.
const EMPTY_SUMMARY: &str = "No insights generated";

/// Summarizer backed by a hosted summarization model.
pub struct HuggingFaceSummarizer {
    client: Client,
    api_key: String,
    config: SummarizerConfig,
}

impl HuggingFaceSummarizer {
    /// Create a new summarizer with the given API key.
    pub fn new(api_key: impl Into<String>) -> Result<Self> {
        Self::with_config(api_key, SummarizerConfig::default())
    }

    /// Create a new summarizer with custom configuration.
    pub fn with_config(api_key: impl Into<String>, config: SummarizerConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| TallyError::Config(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self {
            client,
            api_key: api_key.into(),
            config,
        })
    }

    /// Create from environment variables.
    pub fn from_env() -> Result<Self> {
        let api_key = api_key_from_env().ok_or_else(|| {
            TallyError::Config(format!(
                "{} environment variable not set",
                super::provider::API_KEY_ENV
            ))
        })?;
        Self::with_config(api_key, SummarizerConfig::from_env())
    }

    /// Full endpoint for the configured model.
    fn endpoint(&self) -> String {
        format!(
            "{}/{}",
            self.config.api_url.trim_end_matches('/'),
            self.config.model
        )
    }

    /// Build headers for API requests.
    fn build_headers(&self) -> Result<HeaderMap> {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        headers.insert(
            AUTHORIZATION,
            HeaderValue::from_str(&format!("Bearer {}", self.api_key))
                .map_err(|e| TallyError::Config(format!("Invalid API key: {}", e)))?,
        );
        Ok(headers)
    }

    /// Send the prompt and return the raw response body.
    fn send(&self, prompt: &str) -> Result<String> {
        let body = json!({ "inputs": prompt });

        let response = self
            .client
            .post(self.endpoint())
            .headers(self.build_headers()?)
            .json(&body)
            .send()
            .map_err(|e| TallyError::Summarizer(format!("API request failed: {}", e)))?;

        let status = response.status();
        let text = response
            .text()
            .map_err(|e| TallyError::Summarizer(format!("Failed to read API response: {}", e)))?;

        if status == StatusCode::SERVICE_UNAVAILABLE {
            return Err(loading_error(&text));
        }

        if !status.is_success() {
            return Err(TallyError::Summarizer(format!(
                "API error ({}): {}",
                status, text
            )));
        }

        Ok(text)
    }
}

impl Summarizer for HuggingFaceSummarizer {
    fn summarize(&self, request: &SummaryRequest) -> Result<String> {
        let prompt = prompts::summary_prompt(request, self.config.prompt_rows);
        tracing::debug!(
            model = %self.config.model,
            rows = request.sample.len(),
            "requesting remote summary"
        );

        let body = self.send(&prompt)?;
        parse_summary(&body)
    }

    fn name(&self) -> &str {
        "huggingface"
    }
}

/// One element of the summarization response array.
#[derive(Debug, Deserialize)]
struct SummaryBlock {
    #[serde(default)]
    summary_text: Option<String>,
}

/// Body of a 503 response while the model is loading.
#[derive(Debug, Deserialize)]
struct LoadingResponse {
    #[serde(default)]
    estimated_time: Option<f64>,
}

/// Extract the first summary text from a response body.
fn parse_summary(body: &str) -> Result<String> {
    let blocks: Vec<SummaryBlock> = serde_json::from_str(body).map_err(|e| {
        TallyError::Summarizer(format!("Failed to parse API response: {}", e))
    })?;

    Ok(blocks
        .into_iter()
        .next()
        .and_then(|block| block.summary_text)
        .filter(|text| !text.trim().is_empty())
        .unwrap_or_else(|| EMPTY_SUMMARY.to_string()))
}

/// Map a 503 body to an error, keeping the estimated load time if given.
fn loading_error(body: &str) -> TallyError {
    match serde_json::from_str::<LoadingResponse>(body) {
        Ok(LoadingResponse {
            estimated_time: Some(estimated_time),
        }) => TallyError::SummarizerUnavailable { estimated_time },
        _ => TallyError::Summarizer(format!("Service unavailable: {}", body)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_summary() {
        let body = r#"[{"summary_text": "Sales are concentrated in the North."}]"#;
        assert_eq!(
            parse_summary(body).unwrap(),
            "Sales are concentrated in the North."
        );
    }

    #[test]
    fn test_parse_summary_without_text() {
        assert_eq!(parse_summary("[]").unwrap(), EMPTY_SUMMARY);
        assert_eq!(parse_summary(r#"[{"other": 1}]"#).unwrap(), EMPTY_SUMMARY);
    }

    #[test]
    fn test_parse_summary_invalid_body() {
        let err = parse_summary(r#"{"error": "bad"}"#).unwrap_err();
        assert!(matches!(err, TallyError::Summarizer(_)));
    }

    #[test]
    fn test_loading_error() {
        let err = loading_error(r#"{"error": "Model is loading", "estimated_time": 20.5}"#);
        assert!(matches!(
            err,
            TallyError::SummarizerUnavailable { estimated_time } if estimated_time == 20.5
        ));

        let err = loading_error("overloaded");
        assert!(matches!(err, TallyError::Summarizer(_)));
    }

    #[test]
    fn test_endpoint_joins_model() {
        let config = SummarizerConfig {
            api_url: "http://localhost:8080/models/".to_string(),
            ..Default::default()
        };
        let summarizer = HuggingFaceSummarizer::with_config("key", config).unwrap();
        assert_eq!(
            summarizer.endpoint(),
            "http://localhost:8080/models/facebook/bart-large-cnn"
        );
        assert_eq!(summarizer.name(), "huggingface");
    }

    #[test]
    fn test_unreachable_endpoint_is_an_error() {
        let config = SummarizerConfig {
            api_url: "http://127.0.0.1:9".to_string(),
            timeout: std::time::Duration::from_secs(2),
            ..Default::default()
        };
        let summarizer = HuggingFaceSummarizer::with_config("key", config).unwrap();
        let request = SummaryRequest::default();
        assert!(summarizer.summarize(&request).is_err());
    }

    /// Accept one request, then answer 200 with a body shorter than its
    /// declared length.
    fn serve_truncated_body() -> String {
        use std::io::{Read, Write};
        use std::net::TcpListener;

        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = listener.local_addr().unwrap();

        std::thread::spawn(move || {
            let (mut stream, _) = listener.accept().unwrap();
            let mut request = Vec::new();
            let mut buf = [0u8; 1024];
            let body_len = loop {
                let n = stream.read(&mut buf).unwrap();
                if n == 0 {
                    break request.len();
                }
                request.extend_from_slice(&buf[..n]);
                let text = String::from_utf8_lossy(&request).to_string();
                if let Some(end) = text.find("\r\n\r\n") {
                    let declared = text[..end]
                        .lines()
                        .find_map(|line| {
                            let (name, value) = line.split_once(':')?;
                            name.eq_ignore_ascii_case("content-length")
                                .then(|| value.trim().parse::<usize>().ok())?
                        })
                        .unwrap_or(0);
                    break end + 4 + declared;
                }
            };
            while request.len() < body_len {
                let n = stream.read(&mut buf).unwrap();
                if n == 0 {
                    break;
                }
                request.extend_from_slice(&buf[..n]);
            }

            let response = "HTTP/1.1 200 OK\r\n\
                            Content-Type: application/json\r\n\
                            Content-Length: 200\r\n\r\n\
                            [{\"summary_text\": \"cut";
            stream.write_all(response.as_bytes()).unwrap();
            stream.flush().unwrap();
        });

        format!("http://{}", addr)
    }

    #[test]
    fn test_truncated_body_is_a_read_error() {
        let config = SummarizerConfig {
            api_url: serve_truncated_body(),
            timeout: std::time::Duration::from_secs(5),
            ..Default::default()
        };
        let summarizer = HuggingFaceSummarizer::with_config("key", config).unwrap();

        match summarizer.summarize(&SummaryRequest::default()) {
            Err(TallyError::Summarizer(message)) => {
                assert!(message.starts_with("Failed to read API response"), "{}", message)
            }
            other => panic!("expected a read error, got {:?}", other),
        }
    }
}
