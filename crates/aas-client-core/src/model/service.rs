//! Service-level payloads: descriptions, packages, result messages.

use serde::{Deserialize, Serialize};

/// Profiles implemented by a server (`GET /description`).
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ServiceDescription {
    /// Profile identifiers, e.g.
    /// `https://admin-shell.io/aas/API/3/0/SubmodelRepositoryServiceSpecification/SSP-001`
    #[serde(default)]
    pub profiles: Vec<String>,
}

/// Entry of an AASX file server listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PackageDescription {
    /// Package identifier
    pub package_id: String,
    /// Shells contained in the package
    #[serde(default)]
    pub aas_ids: Vec<String>,
}

/// Severity of a result message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[allow(missing_docs)]
pub enum MessageType {
    Undefined,
    Info,
    Warning,
    Error,
    Exception,
}

/// A single message of an API `Result`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Message {
    /// Severity
    pub message_type: MessageType,
    /// Human readable text
    pub text: String,
    /// Machine readable code
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
    /// Correlation id
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub correlation_id: Option<String>,
    /// Timestamp as sent by the server
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<String>,
}

/// Body returned by the API alongside error status codes.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ApiResult {
    /// Messages describing the outcome
    #[serde(default)]
    pub messages: Vec<Message>,
}
