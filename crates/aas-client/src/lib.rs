//! # AAS Client
//!
//! Typed async HTTP client for the AAS Part 2 HTTP/REST API v3.0.1.
//!
//! [`AasClient`] hands out one handle per resource group: shell and submodel
//! repositories, concept descriptions, registries, discovery, the AASX file
//! server, serialization and the service description.
//!
//! ## Encoding Rules (per AAS Part 2 HTTP/REST API)
//!
//! - **Identifiable IDs**: base64url-encoded WITHOUT padding
//! - **idShortPath**: URL-encoded (preserving `[]` for list indices)
//! - **JSON-valued query parameters** (`semanticId`, `assetIds`, ...): base64url of the JSON
//!
//! ```no_run
//! # async fn demo() -> Result<(), aas_client::ClientError> {
//! use aas_client::{AasClient, AasClientConfig};
//! use aas_client_core::{QueryModifier, SubmodelSearchCriteria};
//!
//! let client = AasClient::new(AasClientConfig::new("http://localhost:8081"))?;
//! let submodels = client
//!     .submodels()
//!     .get_all(&SubmodelSearchCriteria::default(), &QueryModifier::DEFAULT)
//!     .await?;
//! # let _ = submodels;
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod client;
pub mod error;
pub mod interfaces;
mod path;
mod transport;

pub use aas_client_core;
pub use client::{AasClient, AasClientConfig};
pub use error::{ClientError, StatusError};
pub use interfaces::*;
