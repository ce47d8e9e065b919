//! API request and response types
//!
//! All types are framework-agnostic and can be used by any client.

use serde::{Deserialize, Serialize};

use super::error::ApiErrorData;

/// Standard API response envelope
#[derive(Debug, Serialize)]
pub struct ApiResponse<T> {
    /// Whether the request succeeded
    pub success: bool,
    /// Response data (present on success)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    /// Error details (present on failure)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<ApiErrorData>,
}

impl<T: Serialize> ApiResponse<T> {
    /// Create a successful response
    #[must_use]
    pub const fn success(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            error: None,
        }
    }
}

impl ApiResponse<()> {
    /// Create an error response
    #[must_use]
    pub fn error(code: &str, message: &str) -> Self {
        Self {
            success: false,
            data: None,
            error: Some(ApiErrorData {
                code: code.to_string(),
                message: message.to_string(),
            }),
        }
    }
}

/// Query parameters accepted by the results listing
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ListResultsQuery {
    /// Filter by checker kind
    #[serde(default)]
    pub checker: Option<String>,
    /// Page size (default 20)
    #[serde(default)]
    pub limit: Option<usize>,
    /// Records to skip (default 0)
    #[serde(default)]
    pub offset: Option<usize>,
}

/// Request body for triggering a check run
#[derive(Debug, Deserialize)]
pub struct RunCheckRequest {
    /// Checker kind (vale, markdownlint)
    pub checker: String,
    /// Path to check; the configured docs root when omitted
    #[serde(default)]
    pub path: Option<String>,
}

/// Response data for a completed run
#[derive(Debug, Serialize)]
pub struct RunCheckData {
    /// The checker that ran
    pub checker: String,
    /// Identifier of the newly stored record
    pub id: String,
    /// Completion message for display
    pub message: String,
    /// Raw captured checker output
    pub output: String,
}
