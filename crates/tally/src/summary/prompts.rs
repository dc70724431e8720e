//! Prompt templates for remote summarization.

use super::provider::SummaryRequest;

/// Build the summarization input for a request, quoting at most
/// `prompt_rows` records.
pub fn summary_prompt(request: &SummaryRequest, prompt_rows: usize) -> String {
    let rows = &request.sample[..prompt_rows.min(request.sample.len())];
    let rows_json = serde_json::to_string(rows).unwrap_or_else(|_| "[]".to_string());

    format!(
        "Analyze this dataset with columns: {}.\n\
         First {} rows: {}.\n\
         Provide business insights (sales, product comparison, payment trends, regions) \
         in clear and simple points.",
        request.columns.join(", "),
        rows.len(),
        rows_json
    )
}
