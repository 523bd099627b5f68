//! Operation invocation requests and results.

use super::service::Message;
use super::submodel::SubmodelElement;
use crate::encoding::decode_idshort_path;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Default client timeout sent with invocation requests.
pub const DEFAULT_CLIENT_TIMEOUT: &str = "PT60S";

/// State of an operation execution.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[allow(missing_docs)]
pub enum ExecutionState {
    Initiated,
    Running,
    Completed,
    Canceled,
    Failed,
    Timeout,
}

impl ExecutionState {
    /// Whether the execution has stopped, successfully or not.
    #[must_use]
    pub fn is_finished(self) -> bool {
        !matches!(self, Self::Initiated | Self::Running)
    }
}

/// Wrapper for an operation argument.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OperationVariable {
    /// Argument value as a submodel element
    pub value: SubmodelElement,
}

impl From<SubmodelElement> for OperationVariable {
    fn from(value: SubmodelElement) -> Self {
        Self { value }
    }
}

/// Request body for `invoke` and `invoke-async`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OperationRequest {
    /// Input arguments
    #[serde(default)]
    pub input_arguments: Vec<OperationVariable>,
    /// In/out arguments
    #[serde(default)]
    pub inoutput_arguments: Vec<OperationVariable>,
    /// Timeout as `xs:duration`
    pub client_timeout_duration: String,
}

impl OperationRequest {
    /// Request with the given inputs and the default timeout.
    #[must_use]
    pub fn new(input_arguments: Vec<OperationVariable>) -> Self {
        Self {
            input_arguments,
            inoutput_arguments: Vec::new(),
            client_timeout_duration: DEFAULT_CLIENT_TIMEOUT.to_string(),
        }
    }
}

/// Request body for `invoke/$value`: arguments keyed by idShort.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OperationRequestValueOnly {
    /// Input values
    #[serde(default)]
    pub input_arguments: Map<String, Value>,
    /// In/out values
    #[serde(default)]
    pub inoutput_arguments: Map<String, Value>,
    /// Timeout as `xs:duration`
    pub client_timeout_duration: String,
}

impl OperationRequestValueOnly {
    /// Request with the given inputs and the default timeout.
    #[must_use]
    pub fn new(input_arguments: Map<String, Value>) -> Self {
        Self {
            input_arguments,
            inoutput_arguments: Map::new(),
            client_timeout_duration: DEFAULT_CLIENT_TIMEOUT.to_string(),
        }
    }
}

/// Execution status without output arguments.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BaseOperationResult {
    /// Messages produced so far
    #[serde(default)]
    pub messages: Vec<Message>,
    /// Current state
    pub execution_state: ExecutionState,
    /// Success flag; unknown until the execution has finished
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub success: Option<bool>,
}

/// Full result of an operation execution.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OperationResult {
    /// Messages
    #[serde(default)]
    pub messages: Vec<Message>,
    /// Final state
    pub execution_state: ExecutionState,
    /// Success flag
    #[serde(default)]
    pub success: bool,
    /// Output arguments
    #[serde(default)]
    pub output_arguments: Vec<OperationVariable>,
    /// In/out arguments after execution
    #[serde(default)]
    pub inoutput_arguments: Vec<OperationVariable>,
}

/// Value-only result of an operation execution.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OperationResultValueOnly {
    /// Messages
    #[serde(default)]
    pub messages: Vec<Message>,
    /// Final state
    pub execution_state: ExecutionState,
    /// Success flag
    #[serde(default)]
    pub success: bool,
    /// Output values keyed by idShort
    #[serde(default)]
    pub output_arguments: Map<String, Value>,
    /// In/out values keyed by idShort
    #[serde(default)]
    pub inoutput_arguments: Map<String, Value>,
}

/// Server-issued handle of an asynchronous invocation.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct OperationHandle {
    /// Opaque handle id
    pub handle_id: String,
}

impl OperationHandle {
    /// Wrap a handle id.
    #[must_use]
    pub fn new(handle_id: impl Into<String>) -> Self {
        Self {
            handle_id: handle_id.into(),
        }
    }

    /// Extract the handle from a `Location` header pointing at
    /// `.../operation-status/{handleId}`.
    ///
    /// The header carries the handle percent-encoded; the returned id is
    /// decoded so that it is encoded exactly once when the status or result
    /// path is built from it.
    #[must_use]
    pub fn from_location(location: &str) -> Option<Self> {
        let path = location.split(|c: char| c == '?' || c == '#').next()?;
        let (_, rest) = path.rsplit_once("operation-status/")?;
        let segment = rest.trim_end_matches('/');
        if segment.is_empty() || segment.contains('/') {
            return None;
        }
        decode_idshort_path(segment).ok().map(Self::new)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn request_json_shape() {
        let request = OperationRequest::new(vec![
            SubmodelElement::property("a", "xs:int", "1").into()
        ]);
        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["clientTimeoutDuration"], "PT60S");
        assert_eq!(json["inputArguments"][0]["value"]["idShort"], "a");
        assert_eq!(json["inoutputArguments"], json!([]));
    }

    #[test]
    fn handle_from_relative_location() {
        let handle = OperationHandle::from_location(
            "/submodels/abc/submodel-elements/Calc/operation-status/h-42",
        )
        .unwrap();
        assert_eq!(handle.handle_id, "h-42");
    }

    #[test]
    fn handle_from_absolute_location_with_query() {
        let handle = OperationHandle::from_location(
            "https://host/api/v3.0/submodels/abc/submodel-elements/Calc/operation-status/h1?x=1",
        )
        .unwrap();
        assert_eq!(handle.handle_id, "h1");
    }

    #[test]
    fn handle_is_percent_decoded() {
        let handle =
            OperationHandle::from_location("/submodels/abc/operation-status/a%20b%2Fc").unwrap();
        assert_eq!(handle.handle_id, "a b/c");
    }

    #[test]
    fn handle_rejects_invalid_utf8_escape() {
        assert!(OperationHandle::from_location("/operation-status/%FF").is_none());
    }

    #[test]
    fn handle_rejects_unrelated_location() {
        assert!(OperationHandle::from_location("/submodels/abc").is_none());
        assert!(OperationHandle::from_location("/operation-status/").is_none());
    }

    #[test]
    fn execution_state_finished() {
        assert!(!ExecutionState::Running.is_finished());
        assert!(ExecutionState::Completed.is_finished());
        assert!(ExecutionState::Timeout.is_finished());
    }

    #[test]
    fn result_parses_without_optional_lists() {
        let result: OperationResult =
            serde_json::from_value(json!({"executionState": "Completed", "success": true}))
                .unwrap();
        assert!(result.success);
        assert!(result.output_arguments.is_empty());
    }
}
