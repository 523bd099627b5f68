//! Ordered query-string parameters.

use crate::criteria::SearchCriteria;
use crate::encoding::EncodingError;
use crate::modifier::{Content, QueryModifier};
use crate::paging::PagingInfo;
use serde::Serialize;

/// Query parameters in insertion order. Keys may repeat (e.g. `assetIds`).
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
#[serde(transparent)]
pub struct QueryParams(Vec<(String, String)>);

impl QueryParams {
    /// Empty parameter list.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a parameter.
    pub fn push(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.0.push((key.into(), value.into()));
    }

    /// Remove every parameter named `key`.
    pub fn remove(&mut self, key: &str) {
        self.0.retain(|(k, _)| k != key);
    }

    /// First value for `key`.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.0
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// All values for `key`, in order.
    #[must_use]
    pub fn get_all(&self, key: &str) -> Vec<&str> {
        self.0
            .iter()
            .filter(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
            .collect()
    }

    /// Whether no parameter is set.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Parameters as key/value pairs.
    #[must_use]
    pub fn pairs(&self) -> &[(String, String)] {
        &self.0
    }

    /// Add the modifier parameters applicable to `content`.
    #[must_use]
    pub fn with_modifier(mut self, modifier: &QueryModifier, content: Content) -> Self {
        modifier.append_to(content, &mut self);
        self
    }

    /// Replace any paging parameters with `paging`.
    #[must_use]
    pub fn with_paging(mut self, paging: &PagingInfo) -> Self {
        self.remove("limit");
        self.remove("cursor");
        paging.append_to(&mut self);
        self
    }

    /// Add the parameters of a search criteria object.
    ///
    /// # Errors
    ///
    /// Returns error if a structured criterion cannot be serialized.
    pub fn with_criteria<C: SearchCriteria + ?Sized>(
        mut self,
        criteria: &C,
    ) -> Result<Self, EncodingError> {
        criteria.append_to(&mut self)?;
        Ok(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn repeated_keys_keep_order() {
        let mut query = QueryParams::new();
        query.push("assetIds", "a");
        query.push("idShort", "x");
        query.push("assetIds", "b");
        assert_eq!(query.get_all("assetIds"), vec!["a", "b"]);
        assert_eq!(query.get("idShort"), Some("x"));
    }

    #[test]
    fn with_paging_replaces_cursor() {
        let query = QueryParams::new()
            .with_paging(&PagingInfo::limit(5).with_cursor("first"))
            .with_paging(&PagingInfo::limit(5).with_cursor("second"));
        assert_eq!(query.get_all("cursor"), vec!["second"]);
        assert_eq!(query.get_all("limit"), vec!["5"]);
    }
}
