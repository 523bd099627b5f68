//! Resource path construction.

use aas_client_core::{encode_id_base64url, encode_idshort_path, Content};
use std::fmt;

/// An already-encoded path below the service base URL, e.g.
/// `/submodels/dXJu.../submodel-elements/Temperature/$value`.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub(crate) struct ResourcePath(String);

impl ResourcePath {
    /// The service root.
    pub(crate) fn root() -> Self {
        Self::default()
    }

    /// Append a segment, percent-encoding reserved characters.
    pub(crate) fn segment(&self, segment: &str) -> Self {
        self.push(&encode_idshort_path(segment))
    }

    /// Append an identifier of an Identifiable, base64url-encoded.
    pub(crate) fn id(&self, id: &str) -> Self {
        self.push(&encode_id_base64url(id))
    }

    /// Append an idShortPath such as `Collection.List[2].Property`.
    pub(crate) fn id_short_path(&self, path: &str) -> Self {
        self.push(&encode_idshort_path(path))
    }

    /// Append the content modifier suffix, if the content has one.
    pub(crate) fn content(&self, content: Content) -> Self {
        match content.path_suffix() {
            Some(suffix) => self.push(suffix),
            None => self.clone(),
        }
    }

    fn push(&self, encoded: &str) -> Self {
        Self(format!("{}/{encoded}", self.0))
    }
}

impl fmt::Display for ResourcePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
