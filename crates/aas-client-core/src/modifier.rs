//! Serialization modifiers: content, level and extent.

use crate::query::QueryParams;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Depth of a returned structure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Level {
    /// Only direct children
    Core,
    /// Full hierarchy
    Deep,
}

impl Level {
    /// Query string value.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Core => "core",
            Self::Deep => "deep",
        }
    }
}

/// Whether BLOB values are included.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Extent {
    /// Inline BLOB values
    WithBlobValue,
    /// Omit BLOB values
    WithoutBlobValue,
}

impl Extent {
    /// Query string value.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::WithBlobValue => "withBlobValue",
            Self::WithoutBlobValue => "withoutBlobValue",
        }
    }
}

/// Serialization view, selected by a path suffix.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Content {
    /// Full model serialization
    #[default]
    Normal,
    /// Everything but values and children (`$metadata`)
    Metadata,
    /// Value-only serialization (`$value`)
    Value,
    /// Model reference to the element (`$reference`)
    Reference,
    /// List of idShortPaths (`$path`)
    Path,
}

impl Content {
    /// Path segment appended to the resource path, if any.
    #[must_use]
    pub fn path_suffix(self) -> Option<&'static str> {
        match self {
            Self::Normal => None,
            Self::Metadata => Some("$metadata"),
            Self::Value => Some("$value"),
            Self::Reference => Some("$reference"),
            Self::Path => Some("$path"),
        }
    }

    /// Whether `level` may be sent together with this content.
    #[must_use]
    pub fn accepts_level(self) -> bool {
        matches!(self, Self::Normal | Self::Value | Self::Path)
    }

    /// Whether `extent` may be sent together with this content.
    #[must_use]
    pub fn accepts_extent(self) -> bool {
        matches!(self, Self::Normal | Self::Value)
    }
}

impl fmt::Display for Content {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.path_suffix() {
            Some(suffix) => f.write_str(suffix),
            None => f.write_str("normal"),
        }
    }
}

/// `level`/`extent` pair sent with a read or patch.
///
/// `None` leaves the choice to the server (`deep` and `withoutBlobValue`
/// per AAS Part 2).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct QueryModifier {
    /// Requested level
    pub level: Option<Level>,
    /// Requested extent
    pub extent: Option<Extent>,
}

impl QueryModifier {
    /// Server defaults; no parameters are sent.
    pub const DEFAULT: Self = Self {
        level: None,
        extent: None,
    };

    /// Smallest response: `core`, `withoutBlobValue`.
    pub const MINIMAL: Self = Self {
        level: Some(Level::Core),
        extent: Some(Extent::WithoutBlobValue),
    };

    /// Largest response: `deep`, `withBlobValue`.
    pub const MAXIMAL: Self = Self {
        level: Some(Level::Deep),
        extent: Some(Extent::WithBlobValue),
    };

    /// Modifier with only a level.
    #[must_use]
    pub fn level(level: Level) -> Self {
        Self {
            level: Some(level),
            extent: None,
        }
    }

    /// Modifier with only an extent.
    #[must_use]
    pub fn extent(extent: Extent) -> Self {
        Self {
            level: None,
            extent: Some(extent),
        }
    }

    /// The same modifier with the extent cleared. PATCH requests accept
    /// `level` only.
    #[must_use]
    pub fn without_extent(self) -> Self {
        Self {
            level: self.level,
            extent: None,
        }
    }

    /// Append the parameters applicable to `content`; the rest is dropped.
    pub fn append_to(&self, content: Content, query: &mut QueryParams) {
        if let Some(level) = self.level.filter(|_| content.accepts_level()) {
            query.push("level", level.as_str());
        }
        if let Some(extent) = self.extent.filter(|_| content.accepts_extent()) {
            query.push("extent", extent.as_str());
        }
    }
}
