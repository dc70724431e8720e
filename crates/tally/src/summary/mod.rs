//! Natural-language summaries of a dataset sample.
//!
//! A remote model is tried first when configured; the deterministic
//! [`LocalSummarizer`] is always available as a fallback.

mod huggingface;
mod local;
mod prompts;
mod provider;

pub use huggingface::HuggingFaceSummarizer;
pub use local::{LocalSummarizer, NO_DATA, SalesColumns, format_amount};
pub use prompts::summary_prompt;
pub use provider::{
    API_KEY_ENV, API_URL_ENV, DEFAULT_API_URL, Summarizer, SummarizerConfig, SummaryRequest,
    api_key_from_env, validate_api_key,
};
