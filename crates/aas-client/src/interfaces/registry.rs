//! AAS and submodel registries.

use crate::error::ClientError;
use crate::path::ResourcePath;
use crate::transport::Transport;
use aas_client_core::model::{AssetAdministrationShellDescriptor, SubmodelDescriptor};
use aas_client_core::{AasDescriptorSearchCriteria, Page, PagingInfo, QueryParams};

/// `/shell-descriptors`: the AAS registry.
///
/// Submodel descriptors nested under a shell descriptor are reached through
/// the `*_submodel_descriptor*` methods.
#[derive(Debug, Clone)]
pub struct AasRegistryInterface {
    transport: Transport,
    root: ResourcePath,
}

impl AasRegistryInterface {
    pub(crate) fn new(transport: Transport) -> Self {
        Self {
            transport,
            root: ResourcePath::root().segment("shell-descriptors"),
        }
    }

    fn nested(&self, aas_id: &str) -> ResourcePath {
        self.root.id(aas_id).segment("submodel-descriptors")
    }

    /// Get one page of shell descriptors.
    ///
    /// # Errors
    ///
    /// Returns error on network or API errors.
    pub async fn get_page(
        &self,
        criteria: &AasDescriptorSearchCriteria,
        paging: &PagingInfo,
    ) -> Result<Page<AssetAdministrationShellDescriptor>, ClientError> {
        let query = QueryParams::new().with_criteria(criteria)?;
        self.transport.get_page(&self.root, &query, paging).await
    }

    /// Get every shell descriptor matching `criteria`.
    ///
    /// # Errors
    ///
    /// Returns error on network or API errors.
    pub async fn get_all(
        &self,
        criteria: &AasDescriptorSearchCriteria,
    ) -> Result<Vec<AssetAdministrationShellDescriptor>, ClientError> {
        let query = QueryParams::new().with_criteria(criteria)?;
        self.transport.get_all_pages(&self.root, &query).await
    }

    /// Register a shell descriptor.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Conflict`] if the id is already registered, or
    /// other errors on network or API failure.
    pub async fn post(
        &self,
        descriptor: &AssetAdministrationShellDescriptor,
    ) -> Result<AssetAdministrationShellDescriptor, ClientError> {
        self.transport.post(&self.root, descriptor).await
    }

    /// Get a shell descriptor.
    ///
    /// # Errors
    ///
    /// Returns error on network or API errors.
    pub async fn get(
        &self,
        aas_id: &str,
    ) -> Result<AssetAdministrationShellDescriptor, ClientError> {
        self.transport
            .get(&self.root.id(aas_id), &QueryParams::new())
            .await
    }

    /// Replace a shell descriptor.
    ///
    /// # Errors
    ///
    /// Returns error on network or API errors.
    pub async fn put(
        &self,
        aas_id: &str,
        descriptor: &AssetAdministrationShellDescriptor,
    ) -> Result<(), ClientError> {
        self.transport.put(&self.root.id(aas_id), descriptor).await
    }

    /// Unregister a shell descriptor.
    ///
    /// # Errors
    ///
    /// Returns error on network or API errors.
    pub async fn delete(&self, aas_id: &str) -> Result<(), ClientError> {
        self.transport.delete(&self.root.id(aas_id)).await
    }

    /// Get one page of the submodel descriptors of a shell descriptor.
    ///
    /// # Errors
    ///
    /// Returns error on network or API errors.
    pub async fn get_submodel_descriptors_page(
        &self,
        aas_id: &str,
        paging: &PagingInfo,
    ) -> Result<Page<SubmodelDescriptor>, ClientError> {
        self.transport
            .get_page(&self.nested(aas_id), &QueryParams::new(), paging)
            .await
    }

    /// Get every submodel descriptor of a shell descriptor.
    ///
    /// # Errors
    ///
    /// Returns error on network or API errors.
    pub async fn get_all_submodel_descriptors(
        &self,
        aas_id: &str,
    ) -> Result<Vec<SubmodelDescriptor>, ClientError> {
        self.transport
            .get_all_pages(&self.nested(aas_id), &QueryParams::new())
            .await
    }

    /// Add a submodel descriptor to a shell descriptor.
    ///
    /// # Errors
    ///
    /// Returns error on network or API errors.
    pub async fn post_submodel_descriptor(
        &self,
        aas_id: &str,
        descriptor: &SubmodelDescriptor,
    ) -> Result<SubmodelDescriptor, ClientError> {
        self.transport.post(&self.nested(aas_id), descriptor).await
    }

    /// Get a submodel descriptor of a shell descriptor.
    ///
    /// # Errors
    ///
    /// Returns error on network or API errors.
    pub async fn get_submodel_descriptor(
        &self,
        aas_id: &str,
        submodel_id: &str,
    ) -> Result<SubmodelDescriptor, ClientError> {
        self.transport
            .get(&self.nested(aas_id).id(submodel_id), &QueryParams::new())
            .await
    }

    /// Replace a submodel descriptor of a shell descriptor.
    ///
    /// # Errors
    ///
    /// Returns error on network or API errors.
    pub async fn put_submodel_descriptor(
        &self,
        aas_id: &str,
        submodel_id: &str,
        descriptor: &SubmodelDescriptor,
    ) -> Result<(), ClientError> {
        self.transport
            .put(&self.nested(aas_id).id(submodel_id), descriptor)
            .await
    }

    /// Remove a submodel descriptor from a shell descriptor.
    ///
    /// # Errors
    ///
    /// Returns error on network or API errors.
    pub async fn delete_submodel_descriptor(
        &self,
        aas_id: &str,
        submodel_id: &str,
    ) -> Result<(), ClientError> {
        self.transport
            .delete(&self.nested(aas_id).id(submodel_id))
            .await
    }
}

/// `/submodel-descriptors`: the submodel registry.
#[derive(Debug, Clone)]
pub struct SubmodelRegistryInterface {
    transport: Transport,
    root: ResourcePath,
}

impl SubmodelRegistryInterface {
    pub(crate) fn new(transport: Transport) -> Self {
        Self {
            transport,
            root: ResourcePath::root().segment("submodel-descriptors"),
        }
    }

    /// Get one page of submodel descriptors.
    ///
    /// # Errors
    ///
    /// Returns error on network or API errors.
    pub async fn get_page(
        &self,
        paging: &PagingInfo,
    ) -> Result<Page<SubmodelDescriptor>, ClientError> {
        self.transport
            .get_page(&self.root, &QueryParams::new(), paging)
            .await
    }

    /// Get every submodel descriptor.
    ///
    /// # Errors
    ///
    /// Returns error on network or API errors.
    pub async fn get_all(&self) -> Result<Vec<SubmodelDescriptor>, ClientError> {
        self.transport
            .get_all_pages(&self.root, &QueryParams::new())
            .await
    }

    /// Register a submodel descriptor.
    ///
    /// # Errors
    ///
    /// Returns error on network or API errors.
    pub async fn post(
        &self,
        descriptor: &SubmodelDescriptor,
    ) -> Result<SubmodelDescriptor, ClientError> {
        self.transport.post(&self.root, descriptor).await
    }

    /// Get a submodel descriptor.
    ///
    /// # Errors
    ///
    /// Returns error on network or API errors.
    pub async fn get(&self, submodel_id: &str) -> Result<SubmodelDescriptor, ClientError> {
        self.transport
            .get(&self.root.id(submodel_id), &QueryParams::new())
            .await
    }

    /// Replace a submodel descriptor.
    ///
    /// # Errors
    ///
    /// Returns error on network or API errors.
    pub async fn put(
        &self,
        submodel_id: &str,
        descriptor: &SubmodelDescriptor,
    ) -> Result<(), ClientError> {
        self.transport
            .put(&self.root.id(submodel_id), descriptor)
            .await
    }

    /// Unregister a submodel descriptor.
    ///
    /// # Errors
    ///
    /// Returns error on network or API errors.
    pub async fn delete(&self, submodel_id: &str) -> Result<(), ClientError> {
        self.transport.delete(&self.root.id(submodel_id)).await
    }
}
