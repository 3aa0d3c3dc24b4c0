use serde::{Deserialize, Serialize};

/// Body returned by the auth-initiation endpoints.
#[derive(Debug, Clone, Deserialize)]
pub struct AuthResponse {
    pub success: bool,
    #[serde(default)]
    pub auth_url: Option<String>,
    #[serde(default)]
    pub error: Option<String>,
}

/// Record handed to the host bridge on form submission. Field order is the
/// outbound wire contract, do not reorder.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SubmissionRecord {
    pub choice: String,
    pub title: String,
    pub desc: String,
    pub subnet: String,
    pub flavor: String,
}

/// Subset of the host theme object we care about. Unknown fields are
/// ignored during decoding.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ThemeParams {
    #[serde(default)]
    pub link_color: Option<String>,
}
