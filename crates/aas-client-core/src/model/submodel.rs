//! Submodels, submodel elements and concept descriptions.

use super::reference::Reference;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// `modelType` discriminator of referables.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[allow(missing_docs)]
pub enum ModelType {
    AssetAdministrationShell,
    Submodel,
    ConceptDescription,
    AnnotatedRelationshipElement,
    BasicEventElement,
    Blob,
    Capability,
    Entity,
    File,
    MultiLanguageProperty,
    Operation,
    Property,
    Range,
    ReferenceElement,
    RelationshipElement,
    SubmodelElementCollection,
    SubmodelElementList,
}

/// Whether a submodel is a template or an instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ModellingKind {
    /// Submodel template
    Template,
    /// Submodel instance
    Instance,
}

fn submodel_model_type() -> ModelType {
    ModelType::Submodel
}

fn concept_description_model_type() -> ModelType {
    ModelType::ConceptDescription
}

/// A submodel.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Submodel {
    /// Always `Submodel`
    #[serde(default = "submodel_model_type")]
    pub model_type: ModelType,
    /// Globally unique identifier
    pub id: String,
    /// Short name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id_short: Option<String>,
    /// Semantic id
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub semantic_id: Option<Reference>,
    /// Template or instance
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<ModellingKind>,
    /// Top-level elements; absent in `$metadata` responses
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub submodel_elements: Vec<SubmodelElement>,
    /// Attributes not modelled explicitly
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Submodel {
    /// Create an empty submodel.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            model_type: ModelType::Submodel,
            id: id.into(),
            id_short: None,
            semantic_id: None,
            kind: None,
            submodel_elements: Vec::new(),
            extra: Map::new(),
        }
    }

    /// Set the idShort.
    #[must_use]
    pub fn with_id_short(mut self, id_short: impl Into<String>) -> Self {
        self.id_short = Some(id_short.into());
        self
    }

    /// Set the semantic id.
    #[must_use]
    pub fn with_semantic_id(mut self, semantic_id: Reference) -> Self {
        self.semantic_id = Some(semantic_id);
        self
    }

    /// Append a top-level element.
    #[must_use]
    pub fn with_element(mut self, element: SubmodelElement) -> Self {
        self.submodel_elements.push(element);
        self
    }
}

/// A submodel element of any kind.
///
/// The `value` shape depends on `model_type` (a string for properties, an
/// array of elements for collections, ...) and is kept as raw JSON.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmodelElement {
    /// Element kind
    pub model_type: ModelType,
    /// Short name, absent for elements inside a list
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id_short: Option<String>,
    /// Semantic id
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub semantic_id: Option<Reference>,
    /// XSD value type for properties and ranges (e.g. `xs:double`)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value_type: Option<String>,
    /// Element value
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<Value>,
    /// Attributes not modelled explicitly
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl SubmodelElement {
    /// Create an element of the given kind without a value.
    #[must_use]
    pub fn new(model_type: ModelType, id_short: impl Into<String>) -> Self {
        Self {
            model_type,
            id_short: Some(id_short.into()),
            semantic_id: None,
            value_type: None,
            value: None,
            extra: Map::new(),
        }
    }

    /// Create a property; values are transmitted as strings.
    #[must_use]
    pub fn property(
        id_short: impl Into<String>,
        value_type: impl Into<String>,
        value: impl Into<String>,
    ) -> Self {
        Self {
            value_type: Some(value_type.into()),
            value: Some(Value::String(value.into())),
            ..Self::new(ModelType::Property, id_short)
        }
    }
}

/// A concept description.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConceptDescription {
    /// Always `ConceptDescription`
    #[serde(default = "concept_description_model_type")]
    pub model_type: ModelType,
    /// Globally unique identifier
    pub id: String,
    /// Short name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id_short: Option<String>,
    /// External concepts this description is a case of
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub is_case_of: Vec<Reference>,
    /// Attributes not modelled explicitly
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl ConceptDescription {
    /// Create a concept description.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            model_type: ModelType::ConceptDescription,
            id: id.into(),
            id_short: None,
            is_case_of: Vec::new(),
            extra: Map::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn property_json_shape() {
        let element = SubmodelElement::property("MaxTemperature", "xs:double", "85.5");
        assert_eq!(
            serde_json::to_value(&element).unwrap(),
            json!({
                "modelType": "Property",
                "idShort": "MaxTemperature",
                "valueType": "xs:double",
                "value": "85.5"
            })
        );
    }

    #[test]
    fn collection_keeps_nested_value() {
        let json = json!({
            "modelType": "SubmodelElementCollection",
            "idShort": "TechnicalData",
            "value": [
                {"modelType": "Property", "idShort": "Weight", "valueType": "xs:int", "value": "12"}
            ]
        });
        let element: SubmodelElement = serde_json::from_value(json.clone()).unwrap();
        assert_eq!(element.model_type, ModelType::SubmodelElementCollection);
        let children: Vec<SubmodelElement> =
            serde_json::from_value(element.value.clone().unwrap()).unwrap();
        assert_eq!(children[0].id_short.as_deref(), Some("Weight"));
        assert_eq!(serde_json::to_value(&element).unwrap(), json);
    }

    #[test]
    fn submodel_metadata_without_elements() {
        let json = json!({
            "modelType": "Submodel",
            "id": "urn:example:sm:1",
            "idShort": "Nameplate",
            "kind": "Instance"
        });
        let submodel: Submodel = serde_json::from_value(json).unwrap();
        assert!(submodel.submodel_elements.is_empty());
        assert_eq!(submodel.kind, Some(ModellingKind::Instance));
    }

    #[test]
    fn concept_description_defaults_model_type() {
        let cd: ConceptDescription =
            serde_json::from_value(json!({"id": "urn:example:cd:1"})).unwrap();
        assert_eq!(cd.model_type, ModelType::ConceptDescription);
    }
}
