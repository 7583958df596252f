//! Import declarations registered on a type

use std::fmt;

use serde::{Deserialize, Serialize};

use super::java_type::JavaType;

/// What an import brings into scope
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum ImportTarget {
    /// A single type (or, for static imports, the members of a type)
    Type(JavaType),
    /// Every type in a package
    Package(String),
}

/// A single import declaration
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct ImportMetadata {
    target: ImportTarget,
    is_static: bool,
    is_asterisk: bool,
}

impl ImportMetadata {
    /// `import a.b.C;`
    pub fn of_type(import_type: JavaType) -> Self {
        Self {
            target: ImportTarget::Type(import_type),
            is_static: false,
            is_asterisk: false,
        }
    }

    /// `import a.b.*;`
    pub fn of_package(package: impl Into<String>) -> Self {
        Self {
            target: ImportTarget::Package(package.into()),
            is_static: false,
            is_asterisk: true,
        }
    }

    /// `import static a.b.C.*;`
    pub fn static_members_of(import_type: JavaType) -> Self {
        Self {
            target: ImportTarget::Type(import_type),
            is_static: true,
            is_asterisk: true,
        }
    }

    /// What the import refers to
    pub fn target(&self) -> &ImportTarget {
        &self.target
    }

    /// The imported type, if this is not a package import
    pub fn import_type(&self) -> Option<&JavaType> {
        match &self.target {
            ImportTarget::Type(ty) => Some(ty),
            ImportTarget::Package(_) => None,
        }
    }

    /// Whether this is a static import
    pub fn is_static(&self) -> bool {
        self.is_static
    }

    /// Whether the import ends in `.*`
    pub fn is_asterisk(&self) -> bool {
        self.is_asterisk
    }
}

impl fmt::Display for ImportMetadata {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "import ")?;
        if self.is_static {
            write!(f, "static ")?;
        }
        match &self.target {
            ImportTarget::Type(ty) => write!(f, "{}", ty.fully_qualified_name())?,
            ImportTarget::Package(package) => write!(f, "{}", package)?,
        }
        if self.is_asterisk {
            write!(f, ".*")?;
        }
        write!(f, ";")
    }
}
