//! References, keys and specific asset identifiers.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Kind of a reference.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ReferenceType {
    /// Points to an entity outside the AAS environment
    ExternalReference,
    /// Points to a model element inside an AAS environment
    ModelReference,
}

/// Type of a single reference key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[allow(missing_docs)]
pub enum KeyType {
    AnnotatedRelationshipElement,
    AssetAdministrationShell,
    BasicEventElement,
    Blob,
    Capability,
    ConceptDescription,
    DataElement,
    Entity,
    EventElement,
    File,
    FragmentReference,
    GlobalReference,
    Identifiable,
    MultiLanguageProperty,
    Operation,
    Property,
    Range,
    Referable,
    ReferenceElement,
    RelationshipElement,
    Submodel,
    SubmodelElement,
    SubmodelElementCollection,
    SubmodelElementList,
}

/// One step of a reference.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Key {
    /// Key type
    #[serde(rename = "type")]
    pub key_type: KeyType,
    /// Key value (identifier or idShort)
    pub value: String,
}

impl Key {
    /// Create a new key.
    #[must_use]
    pub fn new(key_type: KeyType, value: impl Into<String>) -> Self {
        Self {
            key_type,
            value: value.into(),
        }
    }
}

/// A reference to a model element or an external entity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Reference {
    /// Reference kind
    #[serde(rename = "type")]
    pub reference_type: ReferenceType,
    /// Semantic id of the referenced element, if known
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub referred_semantic_id: Option<Box<Reference>>,
    /// Ordered key chain
    pub keys: Vec<Key>,
}

impl Reference {
    /// Single-key model reference, e.g. to a submodel.
    #[must_use]
    pub fn model(key_type: KeyType, value: impl Into<String>) -> Self {
        Self {
            reference_type: ReferenceType::ModelReference,
            referred_semantic_id: None,
            keys: vec![Key::new(key_type, value)],
        }
    }

    /// Single-key external reference to a global identifier.
    #[must_use]
    pub fn external(value: impl Into<String>) -> Self {
        Self {
            reference_type: ReferenceType::ExternalReference,
            referred_semantic_id: None,
            keys: vec![Key::new(KeyType::GlobalReference, value)],
        }
    }

    /// Value of the last key, usually the identifier of the referenced element.
    #[must_use]
    pub fn last_value(&self) -> Option<&str> {
        self.keys.last().map(|k| k.value.as_str())
    }
}

/// A name/value pair identifying an asset in a specific context.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SpecificAssetId {
    /// Name of the identifier (e.g. "serialNumber")
    pub name: String,
    /// Identifier value
    pub value: String,
    /// Subject the identifier is meaningful to
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub external_subject_id: Option<Reference>,
    /// Semantic id
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub semantic_id: Option<Reference>,
    /// Attributes not modelled explicitly
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl SpecificAssetId {
    /// Create a plain name/value asset id.
    #[must_use]
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
            external_subject_id: None,
            semantic_id: None,
            extra: Map::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn reference_json_shape() {
        let reference = Reference::model(KeyType::Submodel, "urn:example:sm:1");
        let json = serde_json::to_value(&reference).unwrap();
        assert_eq!(
            json,
            json!({
                "type": "ModelReference",
                "keys": [{"type": "Submodel", "value": "urn:example:sm:1"}]
            })
        );
    }

    #[test]
    fn external_reference_uses_global_key() {
        let reference = Reference::external("0173-1#02-AAO677#002");
        assert_eq!(reference.reference_type, ReferenceType::ExternalReference);
        assert_eq!(reference.keys[0].key_type, KeyType::GlobalReference);
        assert_eq!(reference.last_value(), Some("0173-1#02-AAO677#002"));
    }

    #[test]
    fn specific_asset_id_keeps_unknown_fields() {
        let json = json!({
            "name": "serialNumber",
            "value": "4711",
            "supplementalSemanticIds": []
        });
        let id: SpecificAssetId = serde_json::from_value(json.clone()).unwrap();
        assert_eq!(id.name, "serialNumber");
        assert!(id.extra.contains_key("supplementalSemanticIds"));
        assert_eq!(serde_json::to_value(&id).unwrap(), json);
    }
}
