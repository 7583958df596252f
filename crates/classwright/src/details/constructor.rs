//! Constructor and initializer declarations

use serde::{Deserialize, Serialize};

use super::annotation::{AnnotationMetadata, AnnotationMetadataBuilder};
use super::method::MethodParameter;
use crate::model::{JavaSymbolName, JavaType, MetadataId, Modifiers};

/// Immutable constructor declaration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConstructorMetadata {
    declared_by: MetadataId,
    modifiers: Modifiers,
    annotations: Vec<AnnotationMetadata>,
    parameters: Vec<MethodParameter>,
    throws_types: Vec<JavaType>,
    body: Option<String>,
}

impl ConstructorMetadata {
    /// Who declared the constructor
    pub fn declared_by(&self) -> &MetadataId {
        &self.declared_by
    }

    /// Constructor modifiers
    pub fn modifiers(&self) -> Modifiers {
        self.modifiers
    }

    /// Constructor annotations
    pub fn annotations(&self) -> &[AnnotationMetadata] {
        &self.annotations
    }

    /// Parameters in declaration order
    pub fn parameters(&self) -> &[MethodParameter] {
        &self.parameters
    }

    /// Declared checked exceptions
    pub fn throws_types(&self) -> &[JavaType] {
        &self.throws_types
    }

    /// Body text
    pub fn body(&self) -> Option<&str> {
        self.body.as_deref()
    }

    /// Check whether the parameter types match exactly
    pub fn matches_parameters(&self, parameter_types: &[JavaType]) -> bool {
        self.parameters
            .iter()
            .map(|p| &p.parameter_type)
            .eq(parameter_types.iter())
    }
}

/// Builder for [`ConstructorMetadata`]
#[derive(Debug, Clone, PartialEq)]
pub struct ConstructorMetadataBuilder {
    declared_by: MetadataId,
    modifiers: Modifiers,
    annotations: Vec<AnnotationMetadataBuilder>,
    parameters: Vec<MethodParameter>,
    throws_types: Vec<JavaType>,
    body: Option<String>,
}

impl ConstructorMetadataBuilder {
    /// Create a no-argument constructor builder
    pub fn new(declared_by: impl Into<MetadataId>) -> Self {
        Self {
            declared_by: declared_by.into(),
            modifiers: Modifiers::empty(),
            annotations: Vec::new(),
            parameters: Vec::new(),
            throws_types: Vec::new(),
            body: None,
        }
    }

    /// Seed a builder from an existing constructor
    pub fn from_existing(existing: &ConstructorMetadata) -> Self {
        Self {
            declared_by: existing.declared_by.clone(),
            modifiers: existing.modifiers,
            annotations: existing
                .annotations
                .iter()
                .map(AnnotationMetadataBuilder::from_existing)
                .collect(),
            parameters: existing.parameters.clone(),
            throws_types: existing.throws_types.clone(),
            body: existing.body.clone(),
        }
    }

    /// Who declared the constructor
    pub fn declared_by(&self) -> &MetadataId {
        &self.declared_by
    }

    /// Constructor modifiers
    pub fn modifiers(&self) -> Modifiers {
        self.modifiers
    }

    /// Replace the modifiers
    pub fn set_modifiers(&mut self, modifiers: Modifiers) {
        self.modifiers = modifiers;
    }

    /// Constructor annotations
    pub fn annotations(&self) -> &[AnnotationMetadataBuilder] {
        &self.annotations
    }

    /// Append an annotation
    pub fn add_annotation(&mut self, annotation: AnnotationMetadataBuilder) {
        self.annotations.push(annotation);
    }

    /// Parameters in declaration order
    pub fn parameters(&self) -> &[MethodParameter] {
        &self.parameters
    }

    /// Append a parameter
    pub fn add_parameter(&mut self, parameter: MethodParameter) {
        self.parameters.push(parameter);
    }

    /// Chainable form of [`add_parameter`](Self::add_parameter)
    pub fn with_parameter(mut self, parameter_type: JavaType, name: JavaSymbolName) -> Self {
        self.parameters.push(MethodParameter::new(parameter_type, name));
        self
    }

    /// Declare a checked exception
    pub fn add_throws_type(&mut self, throws_type: JavaType) {
        self.throws_types.push(throws_type);
    }

    /// Set or clear the body text
    pub fn set_body(&mut self, body: Option<String>) {
        self.body = body;
    }

    /// Build the immutable constructor
    pub fn build(&self) -> ConstructorMetadata {
        ConstructorMetadata {
            declared_by: self.declared_by.clone(),
            modifiers: self.modifiers,
            annotations: self.annotations.iter().map(|a| a.build()).collect(),
            parameters: self.parameters.clone(),
            throws_types: self.throws_types.clone(),
            body: self.body.clone(),
        }
    }
}

/// Immutable instance or static initializer block
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InitializerMetadata {
    declared_by: MetadataId,
    is_static: bool,
    body: String,
}

impl InitializerMetadata {
    /// Who declared the initializer
    pub fn declared_by(&self) -> &MetadataId {
        &self.declared_by
    }

    /// `static { ... }` rather than `{ ... }`
    pub fn is_static(&self) -> bool {
        self.is_static
    }

    /// Body text
    pub fn body(&self) -> &str {
        &self.body
    }
}

/// Builder for [`InitializerMetadata`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InitializerMetadataBuilder {
    declared_by: MetadataId,
    is_static: bool,
    body: String,
}

impl InitializerMetadataBuilder {
    /// Create an initializer builder
    pub fn new(declared_by: impl Into<MetadataId>, is_static: bool, body: impl Into<String>) -> Self {
        Self {
            declared_by: declared_by.into(),
            is_static,
            body: body.into(),
        }
    }

    /// Seed a builder from an existing initializer
    pub fn from_existing(existing: &InitializerMetadata) -> Self {
        Self {
            declared_by: existing.declared_by.clone(),
            is_static: existing.is_static,
            body: existing.body.clone(),
        }
    }

    /// `static { ... }` rather than `{ ... }`
    pub fn is_static(&self) -> bool {
        self.is_static
    }

    /// Toggle the static flag
    pub fn set_static(&mut self, is_static: bool) {
        self.is_static = is_static;
    }

    /// Body text
    pub fn body(&self) -> &str {
        &self.body
    }

    /// Replace the body text
    pub fn set_body(&mut self, body: impl Into<String>) {
        self.body = body.into();
    }

    /// Build the immutable initializer
    pub fn build(&self) -> InitializerMetadata {
        InitializerMetadata {
            declared_by: self.declared_by.clone(),
            is_static: self.is_static,
            body: self.body.clone(),
        }
    }
}
