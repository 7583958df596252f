//! Identifier and value types
//!
//! Immutable values compared by content: type references, symbol names,
//! imports, categories, modifier sets and the opaque declaring-context id.

mod category;
mod imports;
mod java_type;
mod modifiers;
mod symbol;

use std::fmt;

use serde::{Deserialize, Serialize};

pub use category::PhysicalTypeCategory;
pub use imports::{ImportMetadata, ImportTarget};
pub use java_type::{DataType, JavaType, PRIMITIVE_NAMES};
pub use modifiers::Modifiers;
pub use symbol::{is_reserved_word, JavaSymbolName, RESERVED_WORDS};

/// Opaque token identifying whoever declared a type or member
///
/// Never interpreted here, only carried from builder to snapshot.
#[derive(Debug, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MetadataId(String);

impl MetadataId {
    /// Wrap an identifier
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// The raw identifier
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for MetadataId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for MetadataId {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for MetadataId {
    fn from(value: String) -> Self {
        Self(value)
    }
}
