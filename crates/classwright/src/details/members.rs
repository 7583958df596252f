//! Shared member accumulator
//!
//! [`MembersBuilder`] stages everything a type declares apart from its own
//! name, category, superclass, enum constants and imports: the declaring id,
//! modifiers, annotations, custom data, fields, methods, constructors,
//! initializers, inner types, and the extends / implements lists.
//!
//! [`MemberHolder`] is the capability set a merge target must offer. Any
//! accumulator implementing it can receive members from
//! [`TypeDetailsBuilder::copy_to`](super::TypeDetailsBuilder::copy_to).

use super::annotation::{AnnotationMetadata, AnnotationMetadataBuilder};
use super::constructor::{
    ConstructorMetadata, ConstructorMetadataBuilder, InitializerMetadata,
    InitializerMetadataBuilder,
};
use super::custom_data::{CustomData, CustomDataBuilder};
use super::field::{FieldMetadata, FieldMetadataBuilder};
use super::method::{MethodMetadata, MethodMetadataBuilder};
use super::type_builder::TypeDetailsBuilder;
use super::type_details::TypeDetails;
use crate::model::{JavaType, MetadataId, Modifiers};

/// Mutating operations a merge target must support
pub trait MemberHolder {
    /// Fields staged so far, consulted for field deduplication
    fn declared_fields(&self) -> &[FieldMetadataBuilder];

    /// Append a field
    fn add_field(&mut self, field: FieldMetadataBuilder);

    /// Append a method
    fn add_method(&mut self, method: MethodMetadataBuilder);

    /// Append an annotation
    fn add_annotation(&mut self, annotation: AnnotationMetadataBuilder);

    /// Append a constructor
    fn add_constructor(&mut self, constructor: ConstructorMetadataBuilder);

    /// Append an initializer
    fn add_initializer(&mut self, initializer: InitializerMetadataBuilder);

    /// Append an inner type
    fn add_inner_type(&mut self, inner_type: TypeDetailsBuilder);

    /// Append an extended type
    fn add_extends_type(&mut self, extends_type: JavaType);

    /// Append an implemented type
    fn add_implements_type(&mut self, implements_type: JavaType);

    /// Merge custom data additively
    fn append_custom_data(&mut self, custom_data: &CustomData);
}

/// Staging area for the members of one type
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MembersBuilder {
    declared_by: MetadataId,
    modifiers: Modifiers,
    annotations: Vec<AnnotationMetadataBuilder>,
    custom_data: CustomDataBuilder,
    declared_fields: Vec<FieldMetadataBuilder>,
    declared_methods: Vec<MethodMetadataBuilder>,
    declared_constructors: Vec<ConstructorMetadataBuilder>,
    declared_initializers: Vec<InitializerMetadataBuilder>,
    declared_inner_types: Vec<TypeDetailsBuilder>,
    extends_types: Vec<JavaType>,
    implements_types: Vec<JavaType>,
}

impl MembersBuilder {
    /// Create an empty accumulator for the given declaring id
    pub fn new(declared_by: impl Into<MetadataId>) -> Self {
        Self {
            declared_by: declared_by.into(),
            ..Self::default()
        }
    }

    /// Seed an accumulator with all member state of an existing snapshot
    pub fn from_existing(existing: &TypeDetails) -> Self {
        Self {
            declared_by: existing.declared_by().clone(),
            modifiers: existing.modifiers(),
            annotations: existing
                .annotations()
                .iter()
                .map(AnnotationMetadataBuilder::from_existing)
                .collect(),
            custom_data: CustomDataBuilder::from_existing(existing.custom_data()),
            declared_fields: existing
                .declared_fields()
                .iter()
                .map(FieldMetadataBuilder::from_existing)
                .collect(),
            declared_methods: existing
                .declared_methods()
                .iter()
                .map(MethodMetadataBuilder::from_existing)
                .collect(),
            declared_constructors: existing
                .declared_constructors()
                .iter()
                .map(ConstructorMetadataBuilder::from_existing)
                .collect(),
            declared_initializers: existing
                .declared_initializers()
                .iter()
                .map(InitializerMetadataBuilder::from_existing)
                .collect(),
            declared_inner_types: existing
                .declared_inner_types()
                .iter()
                .map(TypeDetailsBuilder::from_existing)
                .collect(),
            extends_types: existing.extends_types().to_vec(),
            implements_types: existing.implements_types().to_vec(),
        }
    }

    /// Declaring id
    pub fn declared_by(&self) -> &MetadataId {
        &self.declared_by
    }

    /// Replace the declaring id
    pub fn set_declared_by(&mut self, declared_by: impl Into<MetadataId>) {
        self.declared_by = declared_by.into();
    }

    /// Type modifiers
    pub fn modifiers(&self) -> Modifiers {
        self.modifiers
    }

    /// Replace the type modifiers
    pub fn set_modifiers(&mut self, modifiers: Modifiers) {
        self.modifiers = modifiers;
    }

    // ========================================================================
    // Annotations
    // ========================================================================

    /// Annotations in the order they were added
    pub fn annotations(&self) -> &[AnnotationMetadataBuilder] {
        &self.annotations
    }

    /// First annotation of the given type
    pub fn annotation(&self, annotation_type: &JavaType) -> Option<&AnnotationMetadataBuilder> {
        self.annotations
            .iter()
            .find(|a| a.annotation_type() == annotation_type)
    }

    /// Append an annotation, even if one of the same type exists
    pub fn add_annotation(&mut self, annotation: AnnotationMetadataBuilder) {
        self.annotations.push(annotation);
    }

    /// Replace the annotation of the same type, or append it if absent
    ///
    /// Returns `true` if the staged annotations changed.
    pub fn update_type_annotation(&mut self, annotation: AnnotationMetadataBuilder) -> bool {
        match self
            .annotations
            .iter_mut()
            .find(|a| a.annotation_type() == annotation.annotation_type())
        {
            Some(existing) if *existing == annotation => false,
            Some(existing) => {
                *existing = annotation;
                true
            }
            None => {
                self.annotations.push(annotation);
                true
            }
        }
    }

    /// Remove every annotation of the given type
    pub fn remove_annotation(&mut self, annotation_type: &JavaType) -> bool {
        let before = self.annotations.len();
        self.annotations
            .retain(|a| a.annotation_type() != annotation_type);
        self.annotations.len() != before
    }

    // ========================================================================
    // Custom data
    // ========================================================================

    /// Staged custom data
    pub fn custom_data(&self) -> &CustomDataBuilder {
        &self.custom_data
    }

    /// Mutable access to the staged custom data
    pub fn custom_data_mut(&mut self) -> &mut CustomDataBuilder {
        &mut self.custom_data
    }

    /// Merge custom data additively
    pub fn append_custom_data(&mut self, custom_data: &CustomData) {
        self.custom_data.append(custom_data);
    }

    // ========================================================================
    // Members
    // ========================================================================

    /// Fields in the order they were added
    pub fn declared_fields(&self) -> &[FieldMetadataBuilder] {
        &self.declared_fields
    }

    /// Append a field
    pub fn add_field(&mut self, field: FieldMetadataBuilder) {
        self.declared_fields.push(field);
    }

    /// Remove every field with the given name
    pub fn remove_field(&mut self, field_name: &str) -> bool {
        let before = self.declared_fields.len();
        self.declared_fields
            .retain(|f| f.field_name().symbol_name() != field_name);
        self.declared_fields.len() != before
    }

    /// Methods in the order they were added
    pub fn declared_methods(&self) -> &[MethodMetadataBuilder] {
        &self.declared_methods
    }

    /// Append a method
    pub fn add_method(&mut self, method: MethodMetadataBuilder) {
        self.declared_methods.push(method);
    }

    /// Constructors in the order they were added
    pub fn declared_constructors(&self) -> &[ConstructorMetadataBuilder] {
        &self.declared_constructors
    }

    /// Append a constructor
    pub fn add_constructor(&mut self, constructor: ConstructorMetadataBuilder) {
        self.declared_constructors.push(constructor);
    }

    /// Initializers in the order they were added
    pub fn declared_initializers(&self) -> &[InitializerMetadataBuilder] {
        &self.declared_initializers
    }

    /// Append an initializer
    pub fn add_initializer(&mut self, initializer: InitializerMetadataBuilder) {
        self.declared_initializers.push(initializer);
    }

    /// Inner types in the order they were added
    pub fn declared_inner_types(&self) -> &[TypeDetailsBuilder] {
        &self.declared_inner_types
    }

    /// Mutable access to the staged inner types
    pub fn declared_inner_types_mut(&mut self) -> &mut [TypeDetailsBuilder] {
        &mut self.declared_inner_types
    }

    /// Append an inner type
    pub fn add_inner_type(&mut self, inner_type: TypeDetailsBuilder) {
        self.declared_inner_types.push(inner_type);
    }

    /// Extended types
    pub fn extends_types(&self) -> &[JavaType] {
        &self.extends_types
    }

    /// Append an extended type
    pub fn add_extends_type(&mut self, extends_type: JavaType) {
        self.extends_types.push(extends_type);
    }

    /// Implemented types
    pub fn implements_types(&self) -> &[JavaType] {
        &self.implements_types
    }

    /// Append an implemented type
    pub fn add_implements_type(&mut self, implements_type: JavaType) {
        self.implements_types.push(implements_type);
    }

    // ========================================================================
    // Building
    // ========================================================================

    /// Build every staged annotation
    pub fn build_annotations(&self) -> Vec<AnnotationMetadata> {
        self.annotations.iter().map(|a| a.build()).collect()
    }

    /// Build every staged field
    pub fn build_fields(&self) -> Vec<FieldMetadata> {
        self.declared_fields.iter().map(|f| f.build()).collect()
    }

    /// Build every staged method
    pub fn build_methods(&self) -> Vec<MethodMetadata> {
        self.declared_methods.iter().map(|m| m.build()).collect()
    }

    /// Build every staged constructor
    pub fn build_constructors(&self) -> Vec<ConstructorMetadata> {
        self.declared_constructors.iter().map(|c| c.build()).collect()
    }

    /// Build every staged initializer
    pub fn build_initializers(&self) -> Vec<InitializerMetadata> {
        self.declared_initializers.iter().map(|i| i.build()).collect()
    }

    /// Build every staged inner type
    pub fn build_inner_types(&self) -> Vec<TypeDetails> {
        self.declared_inner_types.iter().map(|t| t.build()).collect()
    }

    /// Build the staged custom data
    pub fn build_custom_data(&self) -> CustomData {
        self.custom_data.build()
    }
}

impl MemberHolder for MembersBuilder {
    fn declared_fields(&self) -> &[FieldMetadataBuilder] {
        MembersBuilder::declared_fields(self)
    }

    fn add_field(&mut self, field: FieldMetadataBuilder) {
        MembersBuilder::add_field(self, field);
    }

    fn add_method(&mut self, method: MethodMetadataBuilder) {
        MembersBuilder::add_method(self, method);
    }

    fn add_annotation(&mut self, annotation: AnnotationMetadataBuilder) {
        MembersBuilder::add_annotation(self, annotation);
    }

    fn add_constructor(&mut self, constructor: ConstructorMetadataBuilder) {
        MembersBuilder::add_constructor(self, constructor);
    }

    fn add_initializer(&mut self, initializer: InitializerMetadataBuilder) {
        MembersBuilder::add_initializer(self, initializer);
    }

    fn add_inner_type(&mut self, inner_type: TypeDetailsBuilder) {
        MembersBuilder::add_inner_type(self, inner_type);
    }

    fn add_extends_type(&mut self, extends_type: JavaType) {
        MembersBuilder::add_extends_type(self, extends_type);
    }

    fn add_implements_type(&mut self, implements_type: JavaType) {
        MembersBuilder::add_implements_type(self, implements_type);
    }

    fn append_custom_data(&mut self, custom_data: &CustomData) {
        MembersBuilder::append_custom_data(self, custom_data);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::JavaSymbolName;

    fn annotation(name: &str) -> AnnotationMetadataBuilder {
        AnnotationMetadataBuilder::new(JavaType::parse(name).unwrap())
    }

    #[test]
    fn test_update_type_annotation() {
        let mut members = MembersBuilder::new("MID:test");
        assert!(members.update_type_annotation(annotation("javax.persistence.Entity")));
        assert!(!members.update_type_annotation(annotation("javax.persistence.Entity")));

        let replacement = annotation("javax.persistence.Entity").with_attribute(
            JavaSymbolName::new("name").unwrap(),
            crate::details::AnnotationValue::String("Person".into()),
        );
        assert!(members.update_type_annotation(replacement.clone()));
        assert_eq!(members.annotations(), &[replacement]);
    }

    #[test]
    fn test_add_annotation_allows_duplicates() {
        let mut members = MembersBuilder::new("MID:test");
        members.add_annotation(annotation("a.b.Marker"));
        members.add_annotation(annotation("a.b.Marker"));
        assert_eq!(members.annotations().len(), 2);

        assert!(members.remove_annotation(&JavaType::parse("a.b.Marker").unwrap()));
        assert!(members.annotations().is_empty());
        assert!(!members.remove_annotation(&JavaType::parse("a.b.Marker").unwrap()));
    }

    #[test]
    fn test_remove_field() {
        let mut members = MembersBuilder::new("MID:test");
        members.add_field(FieldMetadataBuilder::new(
            "MID:test",
            JavaType::int_primitive(),
            JavaSymbolName::new("count").unwrap(),
        ));
        assert!(members.remove_field("count"));
        assert!(!members.remove_field("count"));
        assert!(members.build_fields().is_empty());
    }
}
