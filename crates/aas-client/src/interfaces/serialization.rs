//! Environment export in JSON, XML or AASX.

use crate::error::ClientError;
use crate::path::ResourcePath;
use crate::transport::Transport;
use aas_client_core::{encode_id_base64url, QueryParams};

/// Media type of a `/serialization` response.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SerializationFormat {
    /// JSON environment.
    #[default]
    Json,
    /// XML environment.
    Xml,
    /// AASX package.
    Aasx,
}

impl SerializationFormat {
    /// Value for the `Accept` header.
    #[must_use]
    pub fn mime_type(self) -> &'static str {
        match self {
            Self::Json => "application/json",
            Self::Xml => "application/xml",
            Self::Aasx => "application/asset-administration-shell-package+xml",
        }
    }
}

/// Selection of shells and submodels to serialize into one environment.
#[derive(Debug, Clone, Default)]
pub struct SerializationRequest {
    /// Shell ids to include.
    pub aas_ids: Vec<String>,
    /// Submodel ids to include.
    pub submodel_ids: Vec<String>,
    /// Whether to include concept descriptions; `None` leaves the server default.
    pub include_concept_descriptions: Option<bool>,
    /// Requested media type.
    pub format: SerializationFormat,
}

impl SerializationRequest {
    fn query(&self) -> QueryParams {
        let mut query = QueryParams::new();
        for id in &self.aas_ids {
            query.push("aasIds", encode_id_base64url(id));
        }
        for id in &self.submodel_ids {
            query.push("submodelIds", encode_id_base64url(id));
        }
        if let Some(include) = self.include_concept_descriptions {
            query.push("includeConceptDescriptions", include.to_string());
        }
        query
    }
}

/// `/serialization`: export an environment.
#[derive(Debug, Clone)]
pub struct SerializationInterface {
    transport: Transport,
    root: ResourcePath,
}

impl SerializationInterface {
    pub(crate) fn new(transport: Transport) -> Self {
        Self {
            transport,
            root: ResourcePath::root().segment("serialization"),
        }
    }

    /// Download the serialized environment as raw bytes.
    ///
    /// # Errors
    ///
    /// Returns error on network or API errors.
    pub async fn get(&self, request: &SerializationRequest) -> Result<Vec<u8>, ClientError> {
        self.transport
            .get_bytes(
                &self.root,
                &request.query(),
                Some(request.format.mime_type()),
            )
            .await
    }
}
