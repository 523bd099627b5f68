//! Client configuration and entry point.
//!
//! [`AasClient`] owns the HTTP client and hands out one cheap handle per
//! resource group of the AAS Part 2 API.

use crate::error::ClientError;
use crate::interfaces::{
    AasInterface, AasRegistryInterface, AasRepositoryInterface, AasxFileServerInterface,
    ConceptDescriptionRepositoryInterface, DescriptionInterface, DiscoveryInterface,
    SerializationInterface, SubmodelInterface, SubmodelRegistryInterface,
    SubmodelRepositoryInterface,
};
use crate::transport::Transport;
use reqwest::Client;
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;
use url::Url;

/// AAS HTTP client configuration.
#[derive(Clone)]
pub struct AasClientConfig {
    /// Service root including any API prefix (e.g. <https://localhost:443/api/v3.0>)
    pub base_url: String,
    /// Request timeout
    pub timeout: Duration,
    /// Optional bearer token for authentication
    pub bearer_token: Option<String>,
    /// Custom CA certificate path for self-signed server certs (PEM format)
    pub ca_cert_path: Option<PathBuf>,
    /// Client certificate path for mTLS authentication (PEM format)
    pub client_cert_path: Option<PathBuf>,
    /// Client private key path for mTLS authentication (PEM format)
    pub client_key_path: Option<PathBuf>,
}

impl fmt::Debug for AasClientConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AasClientConfig")
            .field("base_url", &self.base_url)
            .field("timeout", &self.timeout)
            .field("bearer_token", &self.bearer_token.as_ref().map(|_| "***"))
            .field("ca_cert_path", &self.ca_cert_path)
            .field("client_cert_path", &self.client_cert_path)
            .field("client_key_path", &self.client_key_path)
            .finish()
    }
}

impl Default for AasClientConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:8081".to_string(),
            timeout: Duration::from_secs(30),
            bearer_token: None,
            ca_cert_path: None,
            client_cert_path: None,
            client_key_path: None,
        }
    }
}

impl AasClientConfig {
    /// Configuration for the given service root with default settings.
    #[must_use]
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            ..Self::default()
        }
    }

    /// Overlay environment variables on the defaults.
    ///
    /// # Environment Variables
    ///
    /// - `AAS_CLIENT_BASE_URL`: Service root
    /// - `AAS_CLIENT_TIMEOUT_SECS`: Request timeout in seconds
    /// - `AAS_CLIENT_BEARER_TOKEN`: Bearer token
    /// - `AAS_CLIENT_CA_CERT`: CA certificate (PEM)
    /// - `AAS_CLIENT_CLIENT_CERT`: Client certificate for mTLS (PEM)
    /// - `AAS_CLIENT_CLIENT_KEY`: Client key for mTLS (PEM)
    ///
    /// # Errors
    ///
    /// Returns error if a variable holds an invalid value.
    pub fn from_env() -> Result<Self, ClientError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ClientError> {
        let mut config = Self::default();

        if let Some(url) = lookup("AAS_CLIENT_BASE_URL") {
            config.base_url = url;
        }

        if let Some(secs) = lookup("AAS_CLIENT_TIMEOUT_SECS") {
            let secs: u64 = secs.trim().parse().map_err(|e| {
                ClientError::Init(format!("invalid AAS_CLIENT_TIMEOUT_SECS {secs:?}: {e}"))
            })?;
            if secs == 0 {
                return Err(ClientError::Init(
                    "AAS_CLIENT_TIMEOUT_SECS must be at least 1".to_string(),
                ));
            }
            config.timeout = Duration::from_secs(secs);
        }

        if let Some(token) = lookup("AAS_CLIENT_BEARER_TOKEN") {
            config.bearer_token = Some(token);
        }

        if let Some(path) = lookup("AAS_CLIENT_CA_CERT") {
            config.ca_cert_path = Some(PathBuf::from(path));
        }

        if let Some(path) = lookup("AAS_CLIENT_CLIENT_CERT") {
            config.client_cert_path = Some(PathBuf::from(path));
        }

        if let Some(path) = lookup("AAS_CLIENT_CLIENT_KEY") {
            config.client_key_path = Some(PathBuf::from(path));
        }

        Ok(config)
    }
}

/// Typed client for an AAS Part 2 server.
///
/// Cloning is cheap; clones share the connection pool.
#[derive(Debug, Clone)]
pub struct AasClient {
    transport: Transport,
    config: AasClientConfig,
}

impl AasClient {
    /// Create a new AAS client.
    ///
    /// # Errors
    ///
    /// Returns error if the base URL is not an absolute http(s) URL, if the
    /// HTTP client cannot be created, or if TLS certificate files cannot be
    /// read or parsed.
    pub fn new(config: AasClientConfig) -> Result<Self, ClientError> {
        let base = Url::parse(&config.base_url).map_err(|e| {
            ClientError::Init(format!("invalid base URL {:?}: {e}", config.base_url))
        })?;
        if !matches!(base.scheme(), "http" | "https") {
            return Err(ClientError::Init(format!(
                "unsupported URL scheme {:?}",
                base.scheme()
            )));
        }

        let mut builder = Client::builder()
            .timeout(config.timeout)
            // operation-status answers 302 once a result exists
            .redirect(reqwest::redirect::Policy::none());

        if base.scheme() == "https" {
            builder = builder.use_rustls_tls();

            if let Some(ca_path) = &config.ca_cert_path {
                for cert in read_root_certificates(ca_path)? {
                    builder = builder.add_root_certificate(cert);
                }
            }

            if let (Some(cert_path), Some(key_path)) =
                (&config.client_cert_path, &config.client_key_path)
            {
                builder = builder.identity(read_identity(cert_path, key_path)?);
            }
        }

        let client = builder
            .build()
            .map_err(|e| ClientError::Init(e.to_string()))?;

        tracing::debug!(base_url = %config.base_url, "AAS client initialized");

        Ok(Self {
            transport: Transport::new(client, &config.base_url, config.bearer_token.clone()),
            config,
        })
    }

    /// The configuration this client was built from.
    #[must_use]
    pub fn config(&self) -> &AasClientConfig {
        &self.config
    }

    /// `/description`
    #[must_use]
    pub fn description(&self) -> DescriptionInterface {
        DescriptionInterface::new(self.transport.clone())
    }

    /// `/shells`
    #[must_use]
    pub fn shells(&self) -> AasRepositoryInterface {
        AasRepositoryInterface::new(self.transport.clone())
    }

    /// `/shells/{aasIdentifier}`
    #[must_use]
    pub fn shell(&self, aas_id: &str) -> AasInterface {
        self.shells().shell(aas_id)
    }

    /// `/submodels`
    #[must_use]
    pub fn submodels(&self) -> SubmodelRepositoryInterface {
        SubmodelRepositoryInterface::new(self.transport.clone())
    }

    /// `/submodels/{submodelIdentifier}`
    #[must_use]
    pub fn submodel(&self, submodel_id: &str) -> SubmodelInterface {
        self.submodels().submodel(submodel_id)
    }

    /// `/concept-descriptions`
    #[must_use]
    pub fn concept_descriptions(&self) -> ConceptDescriptionRepositoryInterface {
        ConceptDescriptionRepositoryInterface::new(self.transport.clone())
    }

    /// `/shell-descriptors`
    #[must_use]
    pub fn shell_registry(&self) -> AasRegistryInterface {
        AasRegistryInterface::new(self.transport.clone())
    }

    /// `/submodel-descriptors`
    #[must_use]
    pub fn submodel_registry(&self) -> SubmodelRegistryInterface {
        SubmodelRegistryInterface::new(self.transport.clone())
    }

    /// `/lookup/shells`
    #[must_use]
    pub fn discovery(&self) -> DiscoveryInterface {
        DiscoveryInterface::new(self.transport.clone())
    }

    /// `/packages`
    #[must_use]
    pub fn packages(&self) -> AasxFileServerInterface {
        AasxFileServerInterface::new(self.transport.clone())
    }

    /// `/serialization`
    #[must_use]
    pub fn serialization(&self) -> SerializationInterface {
        SerializationInterface::new(self.transport.clone())
    }
}

fn read_pem(path: &Path, what: &str) -> Result<Vec<u8>, ClientError> {
    fs::read(path)
        .map_err(|e| ClientError::Init(format!("failed to read {what} {}: {e}", path.display())))
}

/// Every certificate in a PEM bundle. A file without a single
/// `CERTIFICATE` block is an error rather than an empty trust store.
fn read_root_certificates(path: &Path) -> Result<Vec<reqwest::Certificate>, ClientError> {
    let pem = read_pem(path, "CA certificate")?;
    let certs = reqwest::Certificate::from_pem_bundle(&pem).map_err(|e| {
        ClientError::Init(format!("failed to parse CA certificate {}: {e}", path.display()))
    })?;
    if certs.is_empty() {
        return Err(ClientError::Init(format!(
            "no PEM certificate found in {}",
            path.display()
        )));
    }
    tracing::debug!(ca_path = %path.display(), count = certs.len(), "loaded CA certificates");
    Ok(certs)
}

/// Client identity for mTLS; rustls takes certificate and key as one bundle.
fn read_identity(cert_path: &Path, key_path: &Path) -> Result<reqwest::Identity, ClientError> {
    let mut bundle = read_pem(cert_path, "client certificate")?;
    bundle.extend_from_slice(&read_pem(key_path, "client key")?);
    let identity = reqwest::Identity::from_pem(&bundle)
        .map_err(|e| ClientError::Init(format!("failed to create client identity: {e}")))?;
    tracing::debug!(
        cert_path = %cert_path.display(),
        key_path = %key_path.display(),
        "loaded client identity"
    );
    Ok(identity)
}
