//! AAS repository.

use super::shell::AasInterface;
use crate::error::ClientError;
use crate::path::ResourcePath;
use crate::transport::Transport;
use aas_client_core::model::{AssetAdministrationShell, Reference};
use aas_client_core::{AasSearchCriteria, Content, Page, PagingInfo, QueryParams};

/// `/shells`: the AAS repository.
#[derive(Debug, Clone)]
pub struct AasRepositoryInterface {
    transport: Transport,
    root: ResourcePath,
}

impl AasRepositoryInterface {
    pub(crate) fn new(transport: Transport) -> Self {
        Self {
            transport,
            root: ResourcePath::root().segment("shells"),
        }
    }

    /// Get one page of shells matching `criteria`.
    ///
    /// # Errors
    ///
    /// Returns error on network or API errors.
    pub async fn get_page(
        &self,
        criteria: &AasSearchCriteria,
        paging: &PagingInfo,
    ) -> Result<Page<AssetAdministrationShell>, ClientError> {
        let query = QueryParams::new().with_criteria(criteria)?;
        self.transport.get_page(&self.root, &query, paging).await
    }

    /// Get every shell matching `criteria`, following all pages.
    ///
    /// # Errors
    ///
    /// Returns error on network or API errors.
    pub async fn get_all(
        &self,
        criteria: &AasSearchCriteria,
    ) -> Result<Vec<AssetAdministrationShell>, ClientError> {
        let query = QueryParams::new().with_criteria(criteria)?;
        self.transport.get_all_pages(&self.root, &query).await
    }

    /// Get one page of references to shells matching `criteria`.
    ///
    /// # Errors
    ///
    /// Returns error on network or API errors.
    pub async fn get_references_page(
        &self,
        criteria: &AasSearchCriteria,
        paging: &PagingInfo,
    ) -> Result<Page<Reference>, ClientError> {
        let query = QueryParams::new().with_criteria(criteria)?;
        self.transport
            .get_page(&self.root.content(Content::Reference), &query, paging)
            .await
    }

    /// Create a shell.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Conflict`] if the id is taken, or other errors
    /// on network or API failure.
    pub async fn post(
        &self,
        shell: &AssetAdministrationShell,
    ) -> Result<AssetAdministrationShell, ClientError> {
        self.transport.post(&self.root, shell).await
    }

    /// Delete a shell.
    ///
    /// # Errors
    ///
    /// Returns error on network or API errors.
    pub async fn delete(&self, aas_id: &str) -> Result<(), ClientError> {
        self.transport.delete(&self.root.id(aas_id)).await
    }

    /// Handle for a single shell.
    #[must_use]
    pub fn shell(&self, aas_id: &str) -> AasInterface {
        AasInterface::new(self.transport.clone(), self.root.id(aas_id))
    }
}
