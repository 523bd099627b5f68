//! AASX file server: package listing, download and removal.

use crate::error::ClientError;
use crate::path::ResourcePath;
use crate::transport::Transport;
use aas_client_core::model::PackageDescription;
use aas_client_core::{Page, PackageSearchCriteria, PagingInfo, QueryParams};

const AASX: &str = "application/asset-administration-shell-package+xml";

/// `/packages`: the AASX file server.
///
/// Uploading packages needs multipart bodies and is not offered here.
#[derive(Debug, Clone)]
pub struct AasxFileServerInterface {
    transport: Transport,
    root: ResourcePath,
}

impl AasxFileServerInterface {
    pub(crate) fn new(transport: Transport) -> Self {
        Self {
            transport,
            root: ResourcePath::root().segment("packages"),
        }
    }

    /// Get one page of package descriptions.
    ///
    /// # Errors
    ///
    /// Returns error on network or API errors.
    pub async fn get_page(
        &self,
        criteria: &PackageSearchCriteria,
        paging: &PagingInfo,
    ) -> Result<Page<PackageDescription>, ClientError> {
        let query = QueryParams::new().with_criteria(criteria)?;
        self.transport.get_page(&self.root, &query, paging).await
    }

    /// Get every package description matching `criteria`.
    ///
    /// # Errors
    ///
    /// Returns error on network or API errors.
    pub async fn get_all(
        &self,
        criteria: &PackageSearchCriteria,
    ) -> Result<Vec<PackageDescription>, ClientError> {
        let query = QueryParams::new().with_criteria(criteria)?;
        self.transport.get_all_pages(&self.root, &query).await
    }

    /// Download a package.
    ///
    /// # Errors
    ///
    /// Returns error on network or API errors.
    pub async fn get(&self, package_id: &str) -> Result<Vec<u8>, ClientError> {
        self.transport
            .get_bytes(&self.root.id(package_id), &QueryParams::new(), Some(AASX))
            .await
    }

    /// Delete a package.
    ///
    /// # Errors
    ///
    /// Returns error on network or API errors.
    pub async fn delete(&self, package_id: &str) -> Result<(), ClientError> {
        self.transport.delete(&self.root.id(package_id)).await
    }
}
