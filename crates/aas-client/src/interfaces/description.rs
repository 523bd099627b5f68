//! Service description (`/description`).

use crate::error::ClientError;
use crate::path::ResourcePath;
use crate::transport::Transport;
use aas_client_core::model::ServiceDescription;
use aas_client_core::QueryParams;

/// `/description`: profiles a server implements.
#[derive(Debug, Clone)]
pub struct DescriptionInterface {
    transport: Transport,
    root: ResourcePath,
}

impl DescriptionInterface {
    pub(crate) fn new(transport: Transport) -> Self {
        Self {
            transport,
            root: ResourcePath::root().segment("description"),
        }
    }

    /// Get the self-description of the server.
    ///
    /// # Errors
    ///
    /// Returns error on network or API errors.
    pub async fn get(&self) -> Result<ServiceDescription, ClientError> {
        self.transport.get(&self.root, &QueryParams::new()).await
    }
}
