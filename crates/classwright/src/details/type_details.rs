//! Immutable type description
//!
//! A [`TypeDetails`] is produced only by
//! [`TypeDetailsBuilder::build`](super::TypeDetailsBuilder::build). It owns
//! every piece of its data, superclass chain included, and offers no way to
//! mutate it, so a snapshot can be shared freely between threads.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use super::annotation::AnnotationMetadata;
use super::constructor::{ConstructorMetadata, InitializerMetadata};
use super::custom_data::CustomData;
use super::field::FieldMetadata;
use super::method::MethodMetadata;
use crate::model::{
    ImportMetadata, JavaSymbolName, JavaType, MetadataId, Modifiers, PhysicalTypeCategory,
};

/// Fully built description of a class, interface, enum or annotation type
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TypeDetails {
    pub(crate) declared_by: MetadataId,
    pub(crate) modifiers: Modifiers,
    pub(crate) name: Option<JavaType>,
    pub(crate) physical_type_category: Option<PhysicalTypeCategory>,
    pub(crate) annotations: Vec<AnnotationMetadata>,
    pub(crate) custom_data: CustomData,
    pub(crate) declared_fields: Vec<FieldMetadata>,
    pub(crate) declared_methods: Vec<MethodMetadata>,
    pub(crate) declared_constructors: Vec<ConstructorMetadata>,
    pub(crate) declared_initializers: Vec<InitializerMetadata>,
    pub(crate) declared_inner_types: Vec<TypeDetails>,
    pub(crate) superclass: Option<Box<TypeDetails>>,
    pub(crate) extends_types: Vec<JavaType>,
    pub(crate) implements_types: Vec<JavaType>,
    pub(crate) enum_constants: Vec<JavaSymbolName>,
    pub(crate) registered_imports: BTreeSet<ImportMetadata>,
}

impl TypeDetails {
    /// Declaring id
    pub fn declared_by(&self) -> &MetadataId {
        &self.declared_by
    }

    /// Type modifiers
    pub fn modifiers(&self) -> Modifiers {
        self.modifiers
    }

    /// Type name, if one was set
    pub fn name(&self) -> Option<&JavaType> {
        self.name.as_ref()
    }

    /// Physical category, if one was set
    pub fn physical_type_category(&self) -> Option<PhysicalTypeCategory> {
        self.physical_type_category
    }

    /// Type annotations
    pub fn annotations(&self) -> &[AnnotationMetadata] {
        &self.annotations
    }

    /// Custom data
    pub fn custom_data(&self) -> &CustomData {
        &self.custom_data
    }

    /// Declared fields
    pub fn declared_fields(&self) -> &[FieldMetadata] {
        &self.declared_fields
    }

    /// Declared methods
    pub fn declared_methods(&self) -> &[MethodMetadata] {
        &self.declared_methods
    }

    /// Declared constructors
    pub fn declared_constructors(&self) -> &[ConstructorMetadata] {
        &self.declared_constructors
    }

    /// Declared initializer blocks
    pub fn declared_initializers(&self) -> &[InitializerMetadata] {
        &self.declared_initializers
    }

    /// Declared inner types
    pub fn declared_inner_types(&self) -> &[TypeDetails] {
        &self.declared_inner_types
    }

    /// Direct superclass description, if any
    pub fn superclass(&self) -> Option<&TypeDetails> {
        self.superclass.as_deref()
    }

    /// Extended types
    pub fn extends_types(&self) -> &[JavaType] {
        &self.extends_types
    }

    /// Implemented types
    pub fn implements_types(&self) -> &[JavaType] {
        &self.implements_types
    }

    /// Enum constants in declaration order
    pub fn enum_constants(&self) -> &[JavaSymbolName] {
        &self.enum_constants
    }

    /// Registered imports
    pub fn registered_imports(&self) -> &BTreeSet<ImportMetadata> {
        &self.registered_imports
    }

    /// Check whether an import is registered
    pub fn declares_import(&self, import: &ImportMetadata) -> bool {
        self.registered_imports.contains(import)
    }

    /// Declared field with the given name
    pub fn field(&self, name: &str) -> Option<&FieldMetadata> {
        self.declared_fields
            .iter()
            .find(|f| f.field_name().symbol_name() == name)
    }

    /// First declared method with the given name and parameter types
    pub fn method(&self, name: &str, parameter_types: &[JavaType]) -> Option<&MethodMetadata> {
        self.declared_methods
            .iter()
            .find(|m| m.matches_signature(name, parameter_types))
    }

    /// Declared constructor taking exactly the given parameter types
    pub fn declared_constructor(&self, parameter_types: &[JavaType]) -> Option<&ConstructorMetadata> {
        self.declared_constructors
            .iter()
            .find(|c| c.matches_parameters(parameter_types))
    }

    /// First annotation of the given type
    pub fn annotation(&self, annotation_type: &JavaType) -> Option<&AnnotationMetadata> {
        self.annotations
            .iter()
            .find(|a| a.annotation_type() == annotation_type)
    }

    /// Declared inner type with the given name
    pub fn inner_type(&self, name: &JavaType) -> Option<&TypeDetails> {
        self.declared_inner_types
            .iter()
            .find(|t| t.name.as_ref() == Some(name))
    }

    /// Check if this describes an enum
    pub fn is_enum(&self) -> bool {
        self.physical_type_category == Some(PhysicalTypeCategory::Enumeration)
    }

    /// Check if this describes an interface
    pub fn is_interface(&self) -> bool {
        self.physical_type_category == Some(PhysicalTypeCategory::Interface)
    }

    /// Walk the superclass chain, nearest ancestor first
    pub fn superclass_chain(&self) -> SuperclassChain<'_> {
        SuperclassChain {
            next: self.superclass(),
        }
    }
}

/// Iterator over a snapshot's ancestors
#[derive(Debug, Clone)]
pub struct SuperclassChain<'a> {
    next: Option<&'a TypeDetails>,
}

impl<'a> Iterator for SuperclassChain<'a> {
    type Item = &'a TypeDetails;

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.next?;
        self.next = current.superclass();
        Some(current)
    }
}
