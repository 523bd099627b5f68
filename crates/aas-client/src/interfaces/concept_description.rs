//! Concept description repository.

use crate::error::ClientError;
use crate::path::ResourcePath;
use crate::transport::Transport;
use aas_client_core::model::ConceptDescription;
use aas_client_core::{ConceptDescriptionSearchCriteria, Page, PagingInfo, QueryParams};

/// `/concept-descriptions`: the concept description repository.
#[derive(Debug, Clone)]
pub struct ConceptDescriptionRepositoryInterface {
    transport: Transport,
    root: ResourcePath,
}

impl ConceptDescriptionRepositoryInterface {
    pub(crate) fn new(transport: Transport) -> Self {
        Self {
            transport,
            root: ResourcePath::root().segment("concept-descriptions"),
        }
    }

    /// Get one page of concept descriptions.
    ///
    /// # Errors
    ///
    /// Returns error on network or API errors.
    pub async fn get_page(
        &self,
        criteria: &ConceptDescriptionSearchCriteria,
        paging: &PagingInfo,
    ) -> Result<Page<ConceptDescription>, ClientError> {
        let query = QueryParams::new().with_criteria(criteria)?;
        self.transport.get_page(&self.root, &query, paging).await
    }

    /// Get every concept description matching `criteria`.
    ///
    /// # Errors
    ///
    /// Returns error on network or API errors.
    pub async fn get_all(
        &self,
        criteria: &ConceptDescriptionSearchCriteria,
    ) -> Result<Vec<ConceptDescription>, ClientError> {
        let query = QueryParams::new().with_criteria(criteria)?;
        self.transport.get_all_pages(&self.root, &query).await
    }

    /// Create a concept description.
    ///
    /// # Errors
    ///
    /// Returns error on network or API errors.
    pub async fn post(
        &self,
        concept_description: &ConceptDescription,
    ) -> Result<ConceptDescription, ClientError> {
        self.transport.post(&self.root, concept_description).await
    }

    /// Get a concept description.
    ///
    /// # Errors
    ///
    /// Returns error on network or API errors.
    pub async fn get(&self, id: &str) -> Result<ConceptDescription, ClientError> {
        self.transport
            .get(&self.root.id(id), &QueryParams::new())
            .await
    }

    /// Replace a concept description.
    ///
    /// # Errors
    ///
    /// Returns error on network or API errors.
    pub async fn put(
        &self,
        id: &str,
        concept_description: &ConceptDescription,
    ) -> Result<(), ClientError> {
        self.transport
            .put(&self.root.id(id), concept_description)
            .await
    }

    /// Delete a concept description.
    ///
    /// # Errors
    ///
    /// Returns error on network or API errors.
    pub async fn delete(&self, id: &str) -> Result<(), ClientError> {
        self.transport.delete(&self.root.id(id)).await
    }
}
