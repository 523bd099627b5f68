//! Asset Administration Shell and asset information.

use super::reference::{Reference, SpecificAssetId};
use super::submodel::ModelType;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Whether the asset is a type, an instance, or neither.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AssetKind {
    /// Asset type (e.g. a product series)
    Type,
    /// Concrete asset instance
    Instance,
    /// Neither type nor instance
    NotApplicable,
}

impl AssetKind {
    /// Wire name used in query strings.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Type => "Type",
            Self::Instance => "Instance",
            Self::NotApplicable => "NotApplicable",
        }
    }
}

/// A file resource such as a thumbnail.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Resource {
    /// Path or URI of the resource
    pub path: String,
    /// MIME type
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content_type: Option<String>,
}

/// Asset meta information held by a shell.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssetInformation {
    /// Asset kind
    pub asset_kind: AssetKind,
    /// Global asset identifier
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub global_asset_id: Option<String>,
    /// Additional domain specific identifiers
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub specific_asset_ids: Vec<SpecificAssetId>,
    /// Asset type identifier
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub asset_type: Option<String>,
    /// Default thumbnail
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_thumbnail: Option<Resource>,
}

impl AssetInformation {
    /// Asset information with only a kind and a global asset id.
    #[must_use]
    pub fn new(asset_kind: AssetKind, global_asset_id: impl Into<String>) -> Self {
        Self {
            asset_kind,
            global_asset_id: Some(global_asset_id.into()),
            specific_asset_ids: Vec::new(),
            asset_type: None,
            default_thumbnail: None,
        }
    }
}

fn shell_model_type() -> ModelType {
    ModelType::AssetAdministrationShell
}

/// An Asset Administration Shell.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssetAdministrationShell {
    /// Always `AssetAdministrationShell`
    #[serde(default = "shell_model_type")]
    pub model_type: ModelType,
    /// Globally unique identifier
    pub id: String,
    /// Short name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id_short: Option<String>,
    /// Asset the shell represents
    pub asset_information: AssetInformation,
    /// References to the shell's submodels
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub submodels: Vec<Reference>,
    /// Attributes not modelled explicitly
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl AssetAdministrationShell {
    /// Create a shell with no submodels.
    #[must_use]
    pub fn new(id: impl Into<String>, asset_information: AssetInformation) -> Self {
        Self {
            model_type: ModelType::AssetAdministrationShell,
            id: id.into(),
            id_short: None,
            asset_information,
            submodels: Vec::new(),
            extra: Map::new(),
        }
    }

    /// Set the idShort.
    #[must_use]
    pub fn with_id_short(mut self, id_short: impl Into<String>) -> Self {
        self.id_short = Some(id_short.into());
        self
    }
}
