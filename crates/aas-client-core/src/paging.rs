//! Cursor-based paging.
//!
//! List endpoints wrap their items in an envelope:
//!
//! ```json
//! {
//!   "paging_metadata": { "cursor": "opaque-token" },
//!   "result": [ ... ]
//! }
//! ```
//!
//! A missing (or empty) cursor marks the last page.

use crate::query::QueryParams;
use serde::{Deserialize, Serialize};
use std::num::NonZeroU32;

/// Paging metadata of a [`Page`].
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct PagingMetadata {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    cursor: Option<String>,
}

impl PagingMetadata {
    fn is_empty(&self) -> bool {
        self.cursor.is_none()
    }
}

/// One page of a list result.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Page<T> {
    #[serde(default = "Vec::new")]
    result: Vec<T>,
    #[serde(default, skip_serializing_if = "PagingMetadata::is_empty")]
    paging_metadata: PagingMetadata,
}

impl<T> Page<T> {
    /// Build a page from items and an optional continuation cursor.
    #[must_use]
    pub fn new(result: Vec<T>, cursor: Option<String>) -> Self {
        Self {
            result,
            paging_metadata: PagingMetadata { cursor },
        }
    }

    /// Items of this page.
    #[must_use]
    pub fn result(&self) -> &[T] {
        &self.result
    }

    /// Consume the page, returning its items.
    #[must_use]
    pub fn into_result(self) -> Vec<T> {
        self.result
    }

    /// Cursor to request the next page with, if there is one.
    #[must_use]
    pub fn cursor(&self) -> Option<&str> {
        self.paging_metadata
            .cursor
            .as_deref()
            .filter(|c| !c.is_empty())
    }

    /// Whether the server announced a further page.
    #[must_use]
    pub fn has_more(&self) -> bool {
        self.cursor().is_some()
    }

    /// Paging parameters for the page following this one, keeping the
    /// limit of the request that produced it.
    #[must_use]
    pub fn next_paging(&self, previous: &PagingInfo) -> Option<PagingInfo> {
        self.cursor().map(|cursor| PagingInfo {
            limit: previous.limit,
            cursor: Some(cursor.to_string()),
        })
    }
}

/// Client-side paging request: page size and continuation cursor.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PagingInfo {
    limit: Option<NonZeroU32>,
    cursor: Option<String>,
}

impl PagingInfo {
    /// No paging parameters; the server decides the page size.
    #[must_use]
    pub fn all() -> Self {
        Self::default()
    }

    /// Request at most `limit` items. Zero means no limit.
    #[must_use]
    pub fn limit(limit: u32) -> Self {
        Self {
            limit: NonZeroU32::new(limit),
            cursor: None,
        }
    }

    /// Continue from a cursor returned by a previous page.
    #[must_use]
    pub fn with_cursor(mut self, cursor: impl Into<String>) -> Self {
        self.cursor = Some(cursor.into());
        self
    }

    /// Requested page size.
    #[must_use]
    pub fn page_size(&self) -> Option<u32> {
        self.limit.map(NonZeroU32::get)
    }

    /// Requested cursor.
    #[must_use]
    pub fn cursor(&self) -> Option<&str> {
        self.cursor.as_deref()
    }

    /// Append `limit` and `cursor` parameters.
    pub fn append_to(&self, query: &mut QueryParams) {
        if let Some(limit) = self.limit {
            query.push("limit", limit.to_string());
        }
        if let Some(cursor) = &self.cursor {
            query.push("cursor", cursor.clone());
        }
    }
}
