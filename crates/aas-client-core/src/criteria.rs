//! Per-resource search criteria serialized into query strings.

use crate::encoding::{encode_id_base64url, encode_json_base64url, EncodingError};
use crate::model::{AssetKind, Reference, SpecificAssetId};
use crate::query::QueryParams;

/// Filter that contributes query parameters to a list request.
pub trait SearchCriteria {
    /// Append this filter's parameters to `query`.
    ///
    /// # Errors
    ///
    /// Returns error if a structured value cannot be serialized.
    fn append_to(&self, query: &mut QueryParams) -> Result<(), EncodingError>;
}

fn push_id_short(query: &mut QueryParams, id_short: Option<&str>) {
    if let Some(id_short) = id_short {
        query.push("idShort", id_short);
    }
}

fn push_reference(
    query: &mut QueryParams,
    key: &str,
    reference: Option<&Reference>,
) -> Result<(), EncodingError> {
    if let Some(reference) = reference {
        query.push(key, encode_json_base64url(reference)?);
    }
    Ok(())
}

/// Filter for `GET /shells`.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct AasSearchCriteria {
    /// Match shells by idShort
    pub id_short: Option<String>,
    /// Match shells carrying all of these asset ids
    pub asset_ids: Vec<SpecificAssetId>,
}

impl AasSearchCriteria {
    /// Filter by idShort.
    #[must_use]
    pub fn id_short(id_short: impl Into<String>) -> Self {
        Self {
            id_short: Some(id_short.into()),
            ..Self::default()
        }
    }

    /// Filter by asset ids.
    #[must_use]
    pub fn asset_ids(asset_ids: Vec<SpecificAssetId>) -> Self {
        Self {
            asset_ids,
            ..Self::default()
        }
    }
}

impl SearchCriteria for AasSearchCriteria {
    fn append_to(&self, query: &mut QueryParams) -> Result<(), EncodingError> {
        push_id_short(query, self.id_short.as_deref());
        append_asset_ids(query, &self.asset_ids)
    }
}

/// Filter for `GET /submodels`.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SubmodelSearchCriteria {
    /// Match submodels by idShort
    pub id_short: Option<String>,
    /// Match submodels by semantic id
    pub semantic_id: Option<Reference>,
}

impl SubmodelSearchCriteria {
    /// Filter by idShort.
    #[must_use]
    pub fn id_short(id_short: impl Into<String>) -> Self {
        Self {
            id_short: Some(id_short.into()),
            semantic_id: None,
        }
    }

    /// Filter by semantic id.
    #[must_use]
    pub fn semantic_id(semantic_id: Reference) -> Self {
        Self {
            id_short: None,
            semantic_id: Some(semantic_id),
        }
    }
}

impl SearchCriteria for SubmodelSearchCriteria {
    fn append_to(&self, query: &mut QueryParams) -> Result<(), EncodingError> {
        push_id_short(query, self.id_short.as_deref());
        push_reference(query, "semanticId", self.semantic_id.as_ref())
    }
}

/// Filter for `GET /concept-descriptions`.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ConceptDescriptionSearchCriteria {
    /// Match by idShort
    pub id_short: Option<String>,
    /// Match descriptions that are a case of this reference
    pub is_case_of: Option<Reference>,
    /// Match descriptions using this data specification
    pub data_specification: Option<Reference>,
}

impl SearchCriteria for ConceptDescriptionSearchCriteria {
    fn append_to(&self, query: &mut QueryParams) -> Result<(), EncodingError> {
        push_id_short(query, self.id_short.as_deref());
        push_reference(query, "isCaseOf", self.is_case_of.as_ref())?;
        push_reference(
            query,
            "dataSpecificationRef",
            self.data_specification.as_ref(),
        )
    }
}

/// Filter for `GET /shell-descriptors`.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AasDescriptorSearchCriteria {
    /// Match by asset kind
    pub asset_kind: Option<AssetKind>,
    /// Match by asset type
    pub asset_type: Option<String>,
}

impl SearchCriteria for AasDescriptorSearchCriteria {
    fn append_to(&self, query: &mut QueryParams) -> Result<(), EncodingError> {
        if let Some(kind) = self.asset_kind {
            query.push("assetKind", kind.as_str());
        }
        if let Some(asset_type) = &self.asset_type {
            query.push("assetType", encode_id_base64url(asset_type));
        }
        Ok(())
    }
}

/// Filter for `GET /packages`.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PackageSearchCriteria {
    /// Only packages containing this shell
    pub aas_id: Option<String>,
}

impl SearchCriteria for PackageSearchCriteria {
    fn append_to(&self, query: &mut QueryParams) -> Result<(), EncodingError> {
        if let Some(aas_id) = &self.aas_id {
            query.push("aasId", encode_id_base64url(aas_id));
        }
        Ok(())
    }
}

/// Asset ids used by discovery lookups: one `assetIds` parameter each.
impl SearchCriteria for [SpecificAssetId] {
    fn append_to(&self, query: &mut QueryParams) -> Result<(), EncodingError> {
        append_asset_ids(query, self)
    }
}

fn append_asset_ids(
    query: &mut QueryParams,
    asset_ids: &[SpecificAssetId],
) -> Result<(), EncodingError> {
    for asset_id in asset_ids {
        query.push("assetIds", encode_json_base64url(asset_id)?);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::encoding::decode_id_base64url;
    use crate::model::KeyType;

    fn query_of<C: SearchCriteria + ?Sized>(criteria: &C) -> QueryParams {
        QueryParams::new().with_criteria(criteria).unwrap()
    }

    #[test]
    fn default_criteria_are_empty() {
        assert!(query_of(&AasSearchCriteria::default()).is_empty());
        assert!(query_of(&SubmodelSearchCriteria::default()).is_empty());
        assert!(query_of(&ConceptDescriptionSearchCriteria::default()).is_empty());
        assert!(query_of(&AasDescriptorSearchCriteria::default()).is_empty());
        assert!(query_of(&PackageSearchCriteria::default()).is_empty());
    }

    #[test]
    fn shell_asset_ids_repeat() {
        let criteria = AasSearchCriteria {
            id_short: Some("Pump".to_string()),
            asset_ids: vec![
                SpecificAssetId::new("serialNumber", "4711"),
                SpecificAssetId::new("batch", "B-1"),
            ],
        };
        let query = query_of(&criteria);
        assert_eq!(query.get("idShort"), Some("Pump"));

        let ids = query.get_all("assetIds");
        assert_eq!(ids.len(), 2);
        let first: SpecificAssetId =
            serde_json::from_str(&decode_id_base64url(ids[0]).unwrap()).unwrap();
        assert_eq!(first, SpecificAssetId::new("serialNumber", "4711"));
    }

    #[test]
    fn submodel_semantic_id_is_encoded_json() {
        let semantic_id = Reference::external("https://admin-shell.io/idta/nameplate/3/0");
        let query = query_of(&SubmodelSearchCriteria::semantic_id(semantic_id.clone()));
        let decoded = decode_id_base64url(query.get("semanticId").unwrap()).unwrap();
        let reference: Reference = serde_json::from_str(&decoded).unwrap();
        assert_eq!(reference, semantic_id);
        assert!(query.get("idShort").is_none());
    }

    #[test]
    fn concept_description_parameter_names() {
        let criteria = ConceptDescriptionSearchCriteria {
            id_short: None,
            is_case_of: Some(Reference::external("urn:irdi:1")),
            data_specification: Some(Reference::model(KeyType::GlobalReference, "urn:ds:iec61360")),
        };
        let query = query_of(&criteria);
        assert!(query.get("isCaseOf").is_some());
        assert!(query.get("dataSpecificationRef").is_some());
    }

    #[test]
    fn descriptor_asset_type_is_base64url() {
        let criteria = AasDescriptorSearchCriteria {
            asset_kind: Some(AssetKind::Instance),
            asset_type: Some("urn:example:type:pump".to_string()),
        };
        let query = query_of(&criteria);
        assert_eq!(query.get("assetKind"), Some("Instance"));
        assert_eq!(
            decode_id_base64url(query.get("assetType").unwrap()).unwrap(),
            "urn:example:type:pump"
        );
    }

    #[test]
    fn package_aas_id_is_base64url() {
        let criteria = PackageSearchCriteria {
            aas_id: Some("urn:example:aas:1".to_string()),
        };
        assert_eq!(
            query_of(&criteria).get("aasId"),
            Some(encode_id_base64url("urn:example:aas:1").as_str())
        );
    }

    #[test]
    fn asset_id_slice_as_criteria() {
        let ids = [SpecificAssetId::new("serialNumber", "1")];
        assert_eq!(query_of(&ids[..]).get_all("assetIds").len(), 1);
    }
}
