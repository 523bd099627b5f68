//! A single Asset Administration Shell and its submodel references.

use super::submodel::SubmodelInterface;
use crate::error::ClientError;
use crate::path::ResourcePath;
use crate::transport::Transport;
use aas_client_core::model::{AssetAdministrationShell, AssetInformation, Reference};
use aas_client_core::{Content, Page, PagingInfo, QueryParams};

/// `/shells/{aasIdentifier}`: a single Asset Administration Shell.
#[derive(Debug, Clone)]
pub struct AasInterface {
    transport: Transport,
    root: ResourcePath,
}

impl AasInterface {
    pub(crate) fn new(transport: Transport, root: ResourcePath) -> Self {
        Self { transport, root }
    }

    fn asset_information_path(&self) -> ResourcePath {
        self.root.segment("asset-information")
    }

    fn submodel_refs_path(&self) -> ResourcePath {
        self.root.segment("submodel-refs")
    }

    /// Get the shell.
    ///
    /// # Errors
    ///
    /// Returns error on network or API errors.
    pub async fn get(&self) -> Result<AssetAdministrationShell, ClientError> {
        self.transport.get(&self.root, &QueryParams::new()).await
    }

    /// Get a model reference to the shell.
    ///
    /// # Errors
    ///
    /// Returns error on network or API errors.
    pub async fn get_reference(&self) -> Result<Reference, ClientError> {
        self.transport
            .get(&self.root.content(Content::Reference), &QueryParams::new())
            .await
    }

    /// Replace the shell.
    ///
    /// # Errors
    ///
    /// Returns error on network or API errors.
    pub async fn put(&self, shell: &AssetAdministrationShell) -> Result<(), ClientError> {
        self.transport.put(&self.root, shell).await
    }

    /// Get the asset information.
    ///
    /// # Errors
    ///
    /// Returns error on network or API errors.
    pub async fn get_asset_information(&self) -> Result<AssetInformation, ClientError> {
        self.transport
            .get(&self.asset_information_path(), &QueryParams::new())
            .await
    }

    /// Replace the asset information.
    ///
    /// # Errors
    ///
    /// Returns error on network or API errors.
    pub async fn put_asset_information(
        &self,
        asset_information: &AssetInformation,
    ) -> Result<(), ClientError> {
        self.transport
            .put(&self.asset_information_path(), asset_information)
            .await
    }

    /// Download the thumbnail.
    ///
    /// # Errors
    ///
    /// Returns error on network or API errors.
    pub async fn get_thumbnail(&self) -> Result<Vec<u8>, ClientError> {
        self.transport
            .get_bytes(
                &self.asset_information_path().segment("thumbnail"),
                &QueryParams::new(),
                None,
            )
            .await
    }

    /// Delete the thumbnail.
    ///
    /// # Errors
    ///
    /// Returns error on network or API errors.
    pub async fn delete_thumbnail(&self) -> Result<(), ClientError> {
        self.transport
            .delete(&self.asset_information_path().segment("thumbnail"))
            .await
    }

    /// Get one page of submodel references.
    ///
    /// # Errors
    ///
    /// Returns error on network or API errors.
    pub async fn get_submodel_references_page(
        &self,
        paging: &PagingInfo,
    ) -> Result<Page<Reference>, ClientError> {
        self.transport
            .get_page(&self.submodel_refs_path(), &QueryParams::new(), paging)
            .await
    }

    /// Get all submodel references, following all pages.
    ///
    /// # Errors
    ///
    /// Returns error on network or API errors.
    pub async fn get_all_submodel_references(&self) -> Result<Vec<Reference>, ClientError> {
        self.transport
            .get_all_pages(&self.submodel_refs_path(), &QueryParams::new())
            .await
    }

    /// Add a submodel reference.
    ///
    /// # Errors
    ///
    /// Returns error on network or API errors.
    pub async fn post_submodel_reference(
        &self,
        reference: &Reference,
    ) -> Result<Reference, ClientError> {
        self.transport
            .post(&self.submodel_refs_path(), reference)
            .await
    }

    /// Remove the reference to a submodel; the submodel itself stays.
    ///
    /// # Errors
    ///
    /// Returns error on network or API errors.
    pub async fn delete_submodel_reference(&self, submodel_id: &str) -> Result<(), ClientError> {
        self.transport
            .delete(&self.submodel_refs_path().id(submodel_id))
            .await
    }

    /// Handle for a submodel addressed through this shell.
    #[must_use]
    pub fn submodel(&self, submodel_id: &str) -> SubmodelInterface {
        SubmodelInterface::new(
            self.transport.clone(),
            self.root.segment("submodels").id(submodel_id),
        )
    }

    /// Delete a submodel together with its reference from this shell.
    ///
    /// # Errors
    ///
    /// Returns error on network or API errors.
    pub async fn delete_submodel(&self, submodel_id: &str) -> Result<(), ClientError> {
        self.transport
            .delete(&self.root.segment("submodels").id(submodel_id))
            .await
    }
}
