//! Model configuration (classwright.toml)
//!
//! Controls how symbol names are validated and which modifiers freshly
//! created builders start with. Every section is optional.
//!
//! ```toml
//! [symbols]
//! reject_reserved_words = true
//!
//! [defaults]
//! type_modifiers = ["public"]
//! field_modifiers = ["private"]
//! method_modifiers = ["public"]
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::details::{FieldMetadataBuilder, MethodMetadataBuilder, TypeDetailsBuilder};
use crate::error::{ConfigError, ModelError};
use crate::model::{JavaSymbolName, JavaType, MetadataId, Modifiers, PhysicalTypeCategory};

/// Top-level configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct ModelConfig {
    /// Symbol validation policy
    #[serde(default)]
    pub symbols: SymbolPolicy,

    /// Default modifiers for new builders
    #[serde(default)]
    pub defaults: DefaultModifiers,
}

/// How symbol names are validated
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SymbolPolicy {
    /// Reject symbols that are reserved words (default: true)
    #[serde(default = "default_true")]
    pub reject_reserved_words: bool,
}

fn default_true() -> bool {
    true
}

impl Default for SymbolPolicy {
    fn default() -> Self {
        Self {
            reject_reserved_words: true,
        }
    }
}

/// Modifier keywords applied to builders created through [`ModelConfig`]
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DefaultModifiers {
    /// Modifiers for new types (default: `public`)
    #[serde(default = "default_public")]
    pub type_modifiers: Vec<String>,

    /// Modifiers for new fields (default: `private`)
    #[serde(default = "default_private")]
    pub field_modifiers: Vec<String>,

    /// Modifiers for new methods (default: `public`)
    #[serde(default = "default_public")]
    pub method_modifiers: Vec<String>,
}

fn default_public() -> Vec<String> {
    vec!["public".to_string()]
}

fn default_private() -> Vec<String> {
    vec!["private".to_string()]
}

impl Default for DefaultModifiers {
    fn default() -> Self {
        Self {
            type_modifiers: default_public(),
            field_modifiers: default_private(),
            method_modifiers: default_public(),
        }
    }
}

impl ModelConfig {
    /// Parse configuration from a TOML string
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        debug!(path = %path.display(), "loading model config");
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    /// Render configuration as TOML
    pub fn to_toml_string(&self) -> Result<String, ConfigError> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Check that every configured modifier keyword is known
    pub fn validate(&self) -> Result<(), ModelError> {
        self.type_modifiers()?;
        self.field_modifiers()?;
        self.method_modifiers()?;
        Ok(())
    }

    /// Default modifiers for new types
    pub fn type_modifiers(&self) -> Result<Modifiers, ModelError> {
        Modifiers::from_keywords(self.defaults.type_modifiers.as_slice())
    }

    /// Default modifiers for new fields
    pub fn field_modifiers(&self) -> Result<Modifiers, ModelError> {
        Modifiers::from_keywords(self.defaults.field_modifiers.as_slice())
    }

    /// Default modifiers for new methods
    pub fn method_modifiers(&self) -> Result<Modifiers, ModelError> {
        Modifiers::from_keywords(self.defaults.method_modifiers.as_slice())
    }

    /// Validate a symbol name under the configured policy
    pub fn symbol(&self, name: &str) -> Result<JavaSymbolName, ModelError> {
        if self.symbols.reject_reserved_words {
            JavaSymbolName::new_unreserved(name)
        } else {
            JavaSymbolName::new(name)
        }
    }

    /// Create a type builder carrying the default type modifiers
    pub fn type_builder(
        &self,
        declared_by: impl Into<MetadataId>,
        name: JavaType,
        category: PhysicalTypeCategory,
    ) -> Result<TypeDetailsBuilder, ModelError> {
        Ok(TypeDetailsBuilder::with_declaration(
            declared_by,
            self.type_modifiers()?,
            name,
            category,
        ))
    }

    /// Create a field builder carrying the default field modifiers
    pub fn field_builder(
        &self,
        declared_by: impl Into<MetadataId>,
        field_type: JavaType,
        field_name: &str,
    ) -> Result<FieldMetadataBuilder, ModelError> {
        let name = self.symbol(field_name)?;
        Ok(FieldMetadataBuilder::new(declared_by, field_type, name)
            .with_modifiers(self.field_modifiers()?))
    }

    /// Create a method builder carrying the default method modifiers
    pub fn method_builder(
        &self,
        declared_by: impl Into<MetadataId>,
        method_name: &str,
        return_type: JavaType,
    ) -> Result<MethodMetadataBuilder, ModelError> {
        let name = self.symbol(method_name)?;
        Ok(MethodMetadataBuilder::new(declared_by, name, return_type)
            .with_modifiers(self.method_modifiers()?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = ModelConfig::default();
        assert!(config.symbols.reject_reserved_words);
        assert_eq!(config.type_modifiers().unwrap(), Modifiers::PUBLIC);
        assert_eq!(config.field_modifiers().unwrap(), Modifiers::PRIVATE);
        assert_eq!(config.method_modifiers().unwrap(), Modifiers::PUBLIC);
    }

    #[test]
    fn test_empty_toml_uses_defaults() {
        let config = ModelConfig::from_toml_str("").unwrap();
        assert_eq!(config, ModelConfig::default());
    }

    #[test]
    fn test_symbol_policy() {
        let strict = ModelConfig::default();
        assert!(matches!(
            strict.symbol("class"),
            Err(ModelError::ReservedWord { .. })
        ));

        let lenient = ModelConfig::from_toml_str(
            r#"
            [symbols]
            reject_reserved_words = false
            "#,
        )
        .unwrap();
        assert_eq!(lenient.symbol("class").unwrap().symbol_name(), "class");
        assert!(lenient.symbol("9lives").is_err());
    }
}
