//! Registry descriptors.

use super::reference::{Reference, SpecificAssetId};
use super::shell::AssetKind;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Security attribute of an endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SecurityAttribute {
    /// Attribute type (`NONE`, `RFC_TLSA`, `W3C_DID`)
    #[serde(rename = "type")]
    pub attribute_type: String,
    /// Key
    pub key: String,
    /// Value
    pub value: String,
}

/// How to reach an endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProtocolInformation {
    /// Endpoint URL
    pub href: String,
    /// Protocol name, e.g. `HTTP`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub endpoint_protocol: Option<String>,
    /// Supported protocol versions
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub endpoint_protocol_version: Vec<String>,
    /// Security attributes
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub security_attributes: Vec<SecurityAttribute>,
    /// Attributes not modelled explicitly
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// A service endpoint listed in a descriptor.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Endpoint {
    /// Interface name, e.g. `AAS-3.0` or `SUBMODEL-3.0`
    pub interface: String,
    /// Connection details
    pub protocol_information: ProtocolInformation,
}

impl Endpoint {
    /// Plain HTTP endpoint for the given interface.
    #[must_use]
    pub fn http(interface: impl Into<String>, href: impl Into<String>) -> Self {
        Self {
            interface: interface.into(),
            protocol_information: ProtocolInformation {
                href: href.into(),
                endpoint_protocol: Some("HTTP".to_string()),
                endpoint_protocol_version: Vec::new(),
                security_attributes: Vec::new(),
                extra: Map::new(),
            },
        }
    }
}

/// Registry entry describing a shell.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssetAdministrationShellDescriptor {
    /// Shell identifier
    pub id: String,
    /// Short name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id_short: Option<String>,
    /// Asset kind
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub asset_kind: Option<AssetKind>,
    /// Asset type
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub asset_type: Option<String>,
    /// Global asset id
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub global_asset_id: Option<String>,
    /// Specific asset ids
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub specific_asset_ids: Vec<SpecificAssetId>,
    /// Where the shell is served
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub endpoints: Vec<Endpoint>,
    /// Descriptors of the shell's submodels
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub submodel_descriptors: Vec<SubmodelDescriptor>,
    /// Attributes not modelled explicitly
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl AssetAdministrationShellDescriptor {
    /// Create a descriptor with only an id.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            id_short: None,
            asset_kind: None,
            asset_type: None,
            global_asset_id: None,
            specific_asset_ids: Vec::new(),
            endpoints: Vec::new(),
            submodel_descriptors: Vec::new(),
            extra: Map::new(),
        }
    }

    /// Add an endpoint.
    #[must_use]
    pub fn with_endpoint(mut self, endpoint: Endpoint) -> Self {
        self.endpoints.push(endpoint);
        self
    }
}

/// Registry entry describing a submodel.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmodelDescriptor {
    /// Submodel identifier
    pub id: String,
    /// Short name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id_short: Option<String>,
    /// Semantic id
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub semantic_id: Option<Reference>,
    /// Where the submodel is served
    pub endpoints: Vec<Endpoint>,
    /// Attributes not modelled explicitly
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl SubmodelDescriptor {
    /// Create a descriptor with a single endpoint.
    #[must_use]
    pub fn new(id: impl Into<String>, endpoint: Endpoint) -> Self {
        Self {
            id: id.into(),
            id_short: None,
            semantic_id: None,
            endpoints: vec![endpoint],
            extra: Map::new(),
        }
    }
}
