//! Field declarations

use serde::{Deserialize, Serialize};

use super::annotation::{AnnotationMetadata, AnnotationMetadataBuilder};
use crate::model::{JavaSymbolName, JavaType, MetadataId, Modifiers};

/// Immutable field declaration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldMetadata {
    declared_by: MetadataId,
    modifiers: Modifiers,
    annotations: Vec<AnnotationMetadata>,
    field_type: JavaType,
    field_name: JavaSymbolName,
    field_initializer: Option<String>,
}

impl FieldMetadata {
    /// Who declared the field
    pub fn declared_by(&self) -> &MetadataId {
        &self.declared_by
    }

    /// Field modifiers
    pub fn modifiers(&self) -> Modifiers {
        self.modifiers
    }

    /// Field annotations
    pub fn annotations(&self) -> &[AnnotationMetadata] {
        &self.annotations
    }

    /// Declared type
    pub fn field_type(&self) -> &JavaType {
        &self.field_type
    }

    /// Field name
    pub fn field_name(&self) -> &JavaSymbolName {
        &self.field_name
    }

    /// Initializer expression text, if any
    pub fn field_initializer(&self) -> Option<&str> {
        self.field_initializer.as_deref()
    }
}

/// Builder for [`FieldMetadata`]
///
/// Two field builders describe the same field when their type and name are
/// equal; see [`same_field`](Self::same_field).
#[derive(Debug, Clone, PartialEq)]
pub struct FieldMetadataBuilder {
    declared_by: MetadataId,
    modifiers: Modifiers,
    annotations: Vec<AnnotationMetadataBuilder>,
    field_type: JavaType,
    field_name: JavaSymbolName,
    field_initializer: Option<String>,
}

impl FieldMetadataBuilder {
    /// Create a field builder with no modifiers or annotations
    pub fn new(
        declared_by: impl Into<MetadataId>,
        field_type: JavaType,
        field_name: JavaSymbolName,
    ) -> Self {
        Self {
            declared_by: declared_by.into(),
            modifiers: Modifiers::empty(),
            annotations: Vec::new(),
            field_type,
            field_name,
            field_initializer: None,
        }
    }

    /// Seed a builder from an existing field
    pub fn from_existing(existing: &FieldMetadata) -> Self {
        Self {
            declared_by: existing.declared_by.clone(),
            modifiers: existing.modifiers,
            annotations: existing
                .annotations
                .iter()
                .map(AnnotationMetadataBuilder::from_existing)
                .collect(),
            field_type: existing.field_type.clone(),
            field_name: existing.field_name.clone(),
            field_initializer: existing.field_initializer.clone(),
        }
    }

    /// Who declared the field
    pub fn declared_by(&self) -> &MetadataId {
        &self.declared_by
    }

    /// Field modifiers
    pub fn modifiers(&self) -> Modifiers {
        self.modifiers
    }

    /// Replace the modifiers
    pub fn set_modifiers(&mut self, modifiers: Modifiers) {
        self.modifiers = modifiers;
    }

    /// Chainable form of [`set_modifiers`](Self::set_modifiers)
    pub fn with_modifiers(mut self, modifiers: Modifiers) -> Self {
        self.modifiers = modifiers;
        self
    }

    /// Field annotations
    pub fn annotations(&self) -> &[AnnotationMetadataBuilder] {
        &self.annotations
    }

    /// Append an annotation
    pub fn add_annotation(&mut self, annotation: AnnotationMetadataBuilder) {
        self.annotations.push(annotation);
    }

    /// Declared type
    pub fn field_type(&self) -> &JavaType {
        &self.field_type
    }

    /// Replace the declared type
    pub fn set_field_type(&mut self, field_type: JavaType) {
        self.field_type = field_type;
    }

    /// Field name
    pub fn field_name(&self) -> &JavaSymbolName {
        &self.field_name
    }

    /// Rename the field
    pub fn set_field_name(&mut self, field_name: JavaSymbolName) {
        self.field_name = field_name;
    }

    /// Initializer expression text, if any
    pub fn field_initializer(&self) -> Option<&str> {
        self.field_initializer.as_deref()
    }

    /// Set or clear the initializer expression
    pub fn set_field_initializer(&mut self, initializer: Option<String>) {
        self.field_initializer = initializer;
    }

    /// Check whether `other` has the same type and name
    pub fn same_field(&self, other: &FieldMetadataBuilder) -> bool {
        self.field_type == other.field_type && self.field_name == other.field_name
    }

    /// Build the immutable field
    pub fn build(&self) -> FieldMetadata {
        FieldMetadata {
            declared_by: self.declared_by.clone(),
            modifiers: self.modifiers,
            annotations: self.annotations.iter().map(|a| a.build()).collect(),
            field_type: self.field_type.clone(),
            field_name: self.field_name.clone(),
            field_initializer: self.field_initializer.clone(),
        }
    }
}

impl From<FieldMetadata> for FieldMetadataBuilder {
    fn from(field: FieldMetadata) -> Self {
        Self::from_existing(&field)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn field(ty: JavaType, name: &str) -> FieldMetadataBuilder {
        FieldMetadataBuilder::new("MID:test", ty, JavaSymbolName::new(name).unwrap())
    }

    #[test]
    fn test_same_field_requires_type_and_name() {
        let x = field(JavaType::int_primitive(), "x");
        assert!(x.same_field(&field(JavaType::int_primitive(), "x")));
        assert!(!x.same_field(&field(JavaType::long_primitive(), "x")));
        assert!(!x.same_field(&field(JavaType::int_primitive(), "y")));
    }

    #[test]
    fn test_same_field_ignores_other_attributes() {
        let mut a = field(JavaType::string(), "name");
        a.set_modifiers(Modifiers::PRIVATE);
        a.set_field_initializer(Some("\"\"".to_string()));
        let b = field(JavaType::string(), "name").with_modifiers(Modifiers::PUBLIC);
        assert!(a.same_field(&b));
        assert_ne!(a, b);
    }

    #[test]
    fn test_build_carries_annotations() {
        let mut builder = field(JavaType::string(), "email");
        builder.add_annotation(AnnotationMetadataBuilder::new(
            JavaType::parse("javax.validation.constraints.NotNull").unwrap(),
        ));
        let built = builder.build();
        assert_eq!(built.annotations().len(), 1);
        assert_eq!(FieldMetadataBuilder::from_existing(&built).build(), built);
    }
}
