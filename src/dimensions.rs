//! Content dimensions inserted into the site descriptor.

use serde::{Deserialize, Serialize};

use crate::error::Result;

/// A named axis of content variation, e.g. `language`.
///
/// Treated as opaque data: the generator never interprets the values, it only
/// hands them to the descriptor template.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Dimension {
    pub identifier: String,
    #[serde(default)]
    pub label: String,
    #[serde(default)]
    pub default: String,
}

impl Dimension {
    pub fn new<S: Into<String>>(identifier: S, label: S, default: S) -> Self {
        Self { identifier: identifier.into(), label: label.into(), default: default.into() }
    }
}

/// Source of the configured content dimensions.
pub trait DimensionSource {
    /// Returns every configured dimension in declaration order.
    fn find_all(&self) -> Result<Vec<Dimension>>;
}

impl DimensionSource for Vec<Dimension> {
    fn find_all(&self) -> Result<Vec<Dimension>> {
        Ok(self.clone())
    }
}
