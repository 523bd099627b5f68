//! Identifier and path encoding for AAS Part 2 requests.
//!
//! - Identifiers of Identifiables travel base64url-encoded (no padding)
//! - idShortPath is percent-encoded, not base64url
//! - Structured query values (references, specific asset ids) are
//!   serialized to JSON first and then base64url-encoded
//!
//! # References
//!
//! - IDTA 01002-3-1: Specification of the Asset Administration Shell Part 2

use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine;
use percent_encoding::{percent_decode_str, utf8_percent_encode, AsciiSet, CONTROLS};
use serde::Serialize;

/// Characters that must be percent-encoded in idShortPath.
/// Square brackets `[]` are kept for list index notation.
const IDSHORT_PATH_ESCAPE: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'%')
    .add(b'<')
    .add(b'>')
    .add(b'`')
    .add(b'?')
    .add(b'{')
    .add(b'}')
    .add(b'/')
    .add(b'\\');

/// Encode an AAS identifier using base64url without padding.
///
/// # Examples
///
/// ```
/// use aas_client_core::encode_id_base64url;
///
/// let encoded = encode_id_base64url("urn:example:aas:asset1");
/// assert!(!encoded.contains('='));
/// assert!(!encoded.contains('+'));
/// assert!(!encoded.contains('/'));
/// ```
#[must_use]
pub fn encode_id_base64url(id: &str) -> String {
    URL_SAFE_NO_PAD.encode(id.as_bytes())
}

/// Decode a base64url-encoded AAS identifier.
///
/// # Errors
///
/// Returns error if the input is not valid base64url or not UTF-8.
///
/// # Examples
///
/// ```
/// use aas_client_core::{decode_id_base64url, encode_id_base64url};
///
/// let encoded = encode_id_base64url("urn:example:aas:asset1");
/// assert_eq!(decode_id_base64url(&encoded).unwrap(), "urn:example:aas:asset1");
/// ```
pub fn decode_id_base64url(encoded: &str) -> Result<String, EncodingError> {
    let bytes = URL_SAFE_NO_PAD
        .decode(encoded)
        .map_err(|e| EncodingError::Base64Decode(e.to_string()))?;

    String::from_utf8(bytes).map_err(|e| EncodingError::Utf8Decode(e.to_string()))
}

/// Serialize a value to JSON and base64url-encode the result.
///
/// Used for query parameters such as `semanticId` or `assetIds` that carry
/// a whole `Reference` or `SpecificAssetId`.
///
/// # Errors
///
/// Returns error if the value cannot be serialized to JSON.
pub fn encode_json_base64url<T: Serialize + ?Sized>(value: &T) -> Result<String, EncodingError> {
    let json = serde_json::to_vec(value).map_err(|e| EncodingError::Serialize(e.to_string()))?;
    Ok(URL_SAFE_NO_PAD.encode(json))
}

/// Percent-encode an idShortPath.
///
/// # Examples
///
/// ```
/// use aas_client_core::encode_idshort_path;
///
/// assert_eq!(encode_idshort_path("TechnicalData.MaxTemperature"), "TechnicalData.MaxTemperature");
/// assert_eq!(encode_idshort_path("My Property"), "My%20Property");
/// assert_eq!(encode_idshort_path("Components[0]"), "Components[0]");
/// ```
#[must_use]
pub fn encode_idshort_path(path: &str) -> String {
    utf8_percent_encode(path, IDSHORT_PATH_ESCAPE).to_string()
}

/// Decode a percent-encoded idShortPath.
///
/// # Errors
///
/// Returns error if the decoded bytes are not valid UTF-8.
pub fn decode_idshort_path(encoded: &str) -> Result<String, EncodingError> {
    percent_decode_str(encoded)
        .decode_utf8()
        .map(|s| s.into_owned())
        .map_err(|e| EncodingError::Utf8Decode(e.to_string()))
}

/// Errors that can occur during encoding/decoding.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EncodingError {
    /// Base64 decoding failed
    #[error("base64 decode error: {0}")]
    Base64Decode(String),
    /// UTF-8 decoding failed
    #[error("UTF-8 decode error: {0}")]
    Utf8Decode(String),
    /// JSON serialization of a query value failed
    #[error("serialize error: {0}")]
    Serialize(String),
}
