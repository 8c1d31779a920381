use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::domain::entities::TimingReport;
use crate::use_cases::synthetic::{
    ContentChunk, DomStructure, MockData, PerformanceHints, Widget,
};

// Response payload after adding or removing a word.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WordChangeResponse {
    pub success: bool,
    pub message: String,
    pub word: String,
    pub word_list: Vec<String>,
    pub word_count: usize,
    pub timestamp: String,
}

// Response payload for listing the words.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WordListResponse {
    pub word_list: Vec<String>,
    pub word_count: usize,
    pub timestamp: String,
}

// Response payload after clearing the list.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResetWordListResponse {
    pub success: bool,
    pub message: String,
    pub previous_count: usize,
    pub current_count: usize,
    pub timestamp: String,
}

// Error envelope for the word endpoints.
#[derive(Debug, Serialize)]
pub struct WordErrorResponse {
    pub error: &'static str,
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

// Query string accepted by the error catalog.
#[derive(Debug, Deserialize)]
pub struct ErrorQuery {
    #[serde(rename = "type")]
    pub error_type: Option<String>,
    pub delay: Option<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TtfbResponse {
    pub message: String,
    #[serde(flatten)]
    pub timing: TimingReport,
    pub headers: BTreeMap<String, String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResponseTimeResponse {
    pub message: String,
    #[serde(flatten)]
    pub timing: TimingReport,
    pub data_size: usize,
    pub mock_data: MockData,
    pub performance: ProcessSnapshot,
    pub request_info: RequestInfo,
}

// Host process facts reported alongside the response-time payload.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProcessSnapshot {
    pub process_id: u32,
    pub uptime_ms: u64,
}

#[derive(Debug, Serialize)]
pub struct RequestInfo {
    pub method: String,
    pub url: String,
    pub headers: BTreeMap<String, String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DomLoadResponse {
    pub message: String,
    #[serde(flatten)]
    pub timing: TimingReport,
    pub content_chunks: Vec<ContentChunk>,
    pub widgets: Vec<Widget>,
    pub dom_structure: DomStructure,
    pub performance_hints: PerformanceHints,
}

// Visitor location derived from proxy and CDN headers.
#[derive(Debug, Serialize)]
pub struct RegionResponse {
    pub ip: String,
    pub country: String,
    pub region: String,
    pub city: String,
    pub timezone: String,
    pub headers: BTreeMap<String, String>,
}
