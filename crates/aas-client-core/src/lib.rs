//! # AAS Client Core
//!
//! Transport-shape types for the AAS Part 2 HTTP/REST API v3.0.1.
//!
//! This crate provides:
//! - A lean serde model of shells, submodels, concept descriptions and descriptors
//! - Cursor paging (`Page<T>`, `PagingInfo`)
//! - Content, level and extent modifiers
//! - Per-resource search criteria
//! - Identifier encoding (base64url without padding, percent-encoded idShortPath)
//!
//! Nothing here performs I/O; the `aas-client` crate builds requests from these types.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod criteria;
pub mod encoding;
pub mod model;
pub mod modifier;
pub mod paging;
pub mod query;

pub use criteria::{
    AasDescriptorSearchCriteria, AasSearchCriteria, ConceptDescriptionSearchCriteria,
    PackageSearchCriteria, SearchCriteria, SubmodelSearchCriteria,
};
pub use encoding::{
    decode_id_base64url, decode_idshort_path, encode_id_base64url, encode_idshort_path,
    encode_json_base64url, EncodingError,
};
pub use modifier::{Content, Extent, Level, QueryModifier};
pub use paging::{Page, PagingInfo, PagingMetadata};
pub use query::QueryParams;
