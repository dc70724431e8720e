//! Summarizer trait and types.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::data::{Dataset, Record};
use crate::error::Result;

/// Environment variable holding the Hugging Face API key.
pub const API_KEY_ENV: &str = "TALLY_HF_API_KEY";

/// Environment variable overriding the inference API base URL.
pub const API_URL_ENV: &str = "TALLY_HF_API_URL";

/// Default inference API base URL.
pub const DEFAULT_API_URL: &str = "https://api-inference.huggingface.com/models";

/// Value shipped in example env files; treated as no key at all.
const PLACEHOLDER_API_KEY: &str = "your_actual_hugging_face_api_key_here";

/// What a summarizer is asked to describe: the column list and a sample of
/// cleaned records.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SummaryRequest {
    pub columns: Vec<String>,
    pub sample: Vec<Record>,
}

impl SummaryRequest {
    /// Create a request from explicit columns and records.
    pub fn new(columns: Vec<String>, sample: Vec<Record>) -> Self {
        Self { columns, sample }
    }

    /// Take the first `sample_size` records of a dataset.
    pub fn from_dataset(dataset: &Dataset, sample_size: usize) -> Self {
        Self {
            columns: dataset.columns().to_vec(),
            sample: dataset.head(sample_size).to_vec(),
        }
    }

    /// True when there is nothing to summarize.
    pub fn is_empty(&self) -> bool {
        self.sample.is_empty()
    }
}

/// Configuration for summarizers.
#[derive(Debug, Clone)]
pub struct SummarizerConfig {
    /// Inference API base URL; the model name is appended.
    pub api_url: String,

    /// Model to use.
    pub model: String,

    /// Request timeout.
    pub timeout: Duration,

    /// Records handed to the summarizer.
    pub sample_size: usize,

    /// Records quoted verbatim in the prompt.
    pub prompt_rows: usize,
}

impl Default for SummarizerConfig {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            model: "facebook/bart-large-cnn".to_string(),
            timeout: Duration::from_secs(30),
            sample_size: 100,
            prompt_rows: 10,
        }
    }
}

impl SummarizerConfig {
    /// Default configuration with the API URL taken from the environment.
    pub fn from_env() -> Self {
        let mut config = Self::default();
        if let Ok(url) = std::env::var(API_URL_ENV) {
            let url = url.trim();
            if !url.is_empty() {
                config.api_url = url.trim_end_matches('/').to_string();
            }
        }
        config
    }
}

/// Read the API key from the environment, ignoring empty and placeholder
/// values.
pub fn api_key_from_env() -> Option<String> {
    std::env::var(API_KEY_ENV).ok().and_then(validate_api_key)
}

/// Accept a key unless it is blank or the documented placeholder.
pub fn validate_api_key(key: String) -> Option<String> {
    let trimmed = key.trim();
    if trimmed.is_empty() || trimmed == PLACEHOLDER_API_KEY {
        None
    } else {
        Some(trimmed.to_string())
    }
}

/// Trait for text summarizers.
///
/// Implementations must be thread-safe (Send + Sync) so one instance can
/// serve concurrent callers.
pub trait Summarizer: Send + Sync {
    /// Produce a textual summary of the request.
    fn summarize(&self, request: &SummaryRequest) -> Result<String>;

    /// Get the name of this summarizer (for logging/debugging).
    fn name(&self) -> &str;
}
