//! Submodel repository.

use super::submodel::SubmodelInterface;
use crate::error::ClientError;
use crate::path::ResourcePath;
use crate::transport::Transport;
use aas_client_core::model::{Reference, Submodel};
use aas_client_core::{
    Content, Page, PagingInfo, QueryModifier, QueryParams, SubmodelSearchCriteria,
};
use serde_json::Value;

/// `/submodels`: the submodel repository.
#[derive(Debug, Clone)]
pub struct SubmodelRepositoryInterface {
    transport: Transport,
    root: ResourcePath,
}

impl SubmodelRepositoryInterface {
    pub(crate) fn new(transport: Transport) -> Self {
        Self {
            transport,
            root: ResourcePath::root().segment("submodels"),
        }
    }

    fn query(
        criteria: &SubmodelSearchCriteria,
        modifier: &QueryModifier,
        content: Content,
    ) -> Result<QueryParams, ClientError> {
        Ok(QueryParams::new()
            .with_criteria(criteria)?
            .with_modifier(modifier, content))
    }

    /// Get one page of submodels.
    ///
    /// # Errors
    ///
    /// Returns error on network or API errors.
    pub async fn get_page(
        &self,
        criteria: &SubmodelSearchCriteria,
        modifier: &QueryModifier,
        paging: &PagingInfo,
    ) -> Result<Page<Submodel>, ClientError> {
        let query = Self::query(criteria, modifier, Content::Normal)?;
        self.transport.get_page(&self.root, &query, paging).await
    }

    /// Get every submodel matching `criteria`, following all pages.
    ///
    /// # Errors
    ///
    /// Returns error on network or API errors.
    pub async fn get_all(
        &self,
        criteria: &SubmodelSearchCriteria,
        modifier: &QueryModifier,
    ) -> Result<Vec<Submodel>, ClientError> {
        let query = Self::query(criteria, modifier, Content::Normal)?;
        self.transport.get_all_pages(&self.root, &query).await
    }

    /// Get one page of submodel metadata.
    ///
    /// # Errors
    ///
    /// Returns error on network or API errors.
    pub async fn get_metadata_page(
        &self,
        criteria: &SubmodelSearchCriteria,
        paging: &PagingInfo,
    ) -> Result<Page<Submodel>, ClientError> {
        let query = Self::query(criteria, &QueryModifier::DEFAULT, Content::Metadata)?;
        self.transport
            .get_page(&self.root.content(Content::Metadata), &query, paging)
            .await
    }

    /// Get one page of value-only submodels.
    ///
    /// # Errors
    ///
    /// Returns error on network or API errors.
    pub async fn get_value_page(
        &self,
        criteria: &SubmodelSearchCriteria,
        modifier: &QueryModifier,
        paging: &PagingInfo,
    ) -> Result<Page<Value>, ClientError> {
        let query = Self::query(criteria, modifier, Content::Value)?;
        self.transport
            .get_page(&self.root.content(Content::Value), &query, paging)
            .await
    }

    /// Get one page of submodel references.
    ///
    /// # Errors
    ///
    /// Returns error on network or API errors.
    pub async fn get_references_page(
        &self,
        criteria: &SubmodelSearchCriteria,
        paging: &PagingInfo,
    ) -> Result<Page<Reference>, ClientError> {
        let query = Self::query(criteria, &QueryModifier::DEFAULT, Content::Reference)?;
        self.transport
            .get_page(&self.root.content(Content::Reference), &query, paging)
            .await
    }

    /// Create a submodel.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Conflict`] if the id is taken, or other errors
    /// on network or API failure.
    pub async fn post(&self, submodel: &Submodel) -> Result<Submodel, ClientError> {
        self.transport.post(&self.root, submodel).await
    }

    /// Delete a submodel.
    ///
    /// # Errors
    ///
    /// Returns error on network or API errors.
    pub async fn delete(&self, submodel_id: &str) -> Result<(), ClientError> {
        self.transport.delete(&self.root.id(submodel_id)).await
    }

    /// Handle for a single submodel.
    #[must_use]
    pub fn submodel(&self, submodel_id: &str) -> SubmodelInterface {
        SubmodelInterface::new(self.transport.clone(), self.root.id(submodel_id))
    }
}
