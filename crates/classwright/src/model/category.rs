//! Physical type categories

use std::fmt;

use serde::{Deserialize, Serialize};

/// The kind of type declaration a snapshot describes
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum PhysicalTypeCategory {
    /// `class`
    Class,
    /// `interface`
    Interface,
    /// `enum`
    Enumeration,
    /// `@interface`
    Annotation,
}

impl PhysicalTypeCategory {
    /// Declaration keyword for this category
    pub fn keyword(&self) -> &'static str {
        match self {
            PhysicalTypeCategory::Class => "class",
            PhysicalTypeCategory::Interface => "interface",
            PhysicalTypeCategory::Enumeration => "enum",
            PhysicalTypeCategory::Annotation => "@interface",
        }
    }
}

impl fmt::Display for PhysicalTypeCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.keyword())
    }
}
