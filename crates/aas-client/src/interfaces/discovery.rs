//! Discovery: lookup of shell ids by specific asset ids.

use crate::error::ClientError;
use crate::path::ResourcePath;
use crate::transport::Transport;
use aas_client_core::model::SpecificAssetId;
use aas_client_core::{Page, PagingInfo, QueryParams};

/// `/lookup/shells`: maps specific asset ids to shell ids.
#[derive(Debug, Clone)]
pub struct DiscoveryInterface {
    transport: Transport,
    root: ResourcePath,
}

impl DiscoveryInterface {
    pub(crate) fn new(transport: Transport) -> Self {
        Self {
            transport,
            root: ResourcePath::root().segment("lookup").segment("shells"),
        }
    }

    /// Get one page of shell ids linked to all of `asset_ids`.
    ///
    /// # Errors
    ///
    /// Returns error on network or API errors.
    pub async fn get_aas_ids_page(
        &self,
        asset_ids: &[SpecificAssetId],
        paging: &PagingInfo,
    ) -> Result<Page<String>, ClientError> {
        let query = QueryParams::new().with_criteria(asset_ids)?;
        self.transport.get_page(&self.root, &query, paging).await
    }

    /// Get every shell id linked to all of `asset_ids`.
    ///
    /// # Errors
    ///
    /// Returns error on network or API errors.
    pub async fn get_all_aas_ids(
        &self,
        asset_ids: &[SpecificAssetId],
    ) -> Result<Vec<String>, ClientError> {
        let query = QueryParams::new().with_criteria(asset_ids)?;
        self.transport.get_all_pages(&self.root, &query).await
    }

    /// Get the asset links of a shell.
    ///
    /// # Errors
    ///
    /// Returns error on network or API errors.
    pub async fn get_asset_links(
        &self,
        aas_id: &str,
    ) -> Result<Vec<SpecificAssetId>, ClientError> {
        self.transport
            .get(&self.root.id(aas_id), &QueryParams::new())
            .await
    }

    /// Replace the asset links of a shell.
    ///
    /// # Errors
    ///
    /// Returns error on network or API errors.
    pub async fn post_asset_links(
        &self,
        aas_id: &str,
        asset_ids: &[SpecificAssetId],
    ) -> Result<Vec<SpecificAssetId>, ClientError> {
        self.transport.post(&self.root.id(aas_id), asset_ids).await
    }

    /// Remove all asset links of a shell.
    ///
    /// # Errors
    ///
    /// Returns error on network or API errors.
    pub async fn delete_asset_links(&self, aas_id: &str) -> Result<(), ClientError> {
        self.transport.delete(&self.root.id(aas_id)).await
    }
}
