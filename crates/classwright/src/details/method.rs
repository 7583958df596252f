//! Method declarations

use serde::{Deserialize, Serialize};

use super::annotation::{AnnotationMetadata, AnnotationMetadataBuilder};
use crate::model::{JavaSymbolName, JavaType, MetadataId, Modifiers};

/// A declared parameter of a method or constructor
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MethodParameter {
    /// Parameter type
    pub parameter_type: JavaType,
    /// Parameter name
    pub name: JavaSymbolName,
    /// Parameter annotations
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub annotations: Vec<AnnotationMetadata>,
}

impl MethodParameter {
    /// Create an unannotated parameter
    pub fn new(parameter_type: JavaType, name: JavaSymbolName) -> Self {
        Self {
            parameter_type,
            name,
            annotations: Vec::new(),
        }
    }
}

/// Immutable method declaration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MethodMetadata {
    declared_by: MetadataId,
    modifiers: Modifiers,
    annotations: Vec<AnnotationMetadata>,
    method_name: JavaSymbolName,
    return_type: JavaType,
    parameters: Vec<MethodParameter>,
    throws_types: Vec<JavaType>,
    body: Option<String>,
}

impl MethodMetadata {
    /// Who declared the method
    pub fn declared_by(&self) -> &MetadataId {
        &self.declared_by
    }

    /// Method modifiers
    pub fn modifiers(&self) -> Modifiers {
        self.modifiers
    }

    /// Method annotations
    pub fn annotations(&self) -> &[AnnotationMetadata] {
        &self.annotations
    }

    /// Method name
    pub fn method_name(&self) -> &JavaSymbolName {
        &self.method_name
    }

    /// Return type
    pub fn return_type(&self) -> &JavaType {
        &self.return_type
    }

    /// Parameters in declaration order
    pub fn parameters(&self) -> &[MethodParameter] {
        &self.parameters
    }

    /// Parameter types in declaration order
    pub fn parameter_types(&self) -> impl Iterator<Item = &JavaType> {
        self.parameters.iter().map(|p| &p.parameter_type)
    }

    /// Declared checked exceptions
    pub fn throws_types(&self) -> &[JavaType] {
        &self.throws_types
    }

    /// Body text; `None` for abstract or interface methods
    pub fn body(&self) -> Option<&str> {
        self.body.as_deref()
    }

    /// Check whether this method has the given name and parameter types
    pub fn matches_signature(&self, name: &str, parameter_types: &[JavaType]) -> bool {
        self.method_name.symbol_name() == name && self.parameter_types().eq(parameter_types.iter())
    }
}

/// Builder for [`MethodMetadata`]
#[derive(Debug, Clone, PartialEq)]
pub struct MethodMetadataBuilder {
    declared_by: MetadataId,
    modifiers: Modifiers,
    annotations: Vec<AnnotationMetadataBuilder>,
    method_name: JavaSymbolName,
    return_type: JavaType,
    parameters: Vec<MethodParameter>,
    throws_types: Vec<JavaType>,
    body: Option<String>,
}

impl MethodMetadataBuilder {
    /// Create a method builder with no parameters and no body
    pub fn new(
        declared_by: impl Into<MetadataId>,
        method_name: JavaSymbolName,
        return_type: JavaType,
    ) -> Self {
        Self {
            declared_by: declared_by.into(),
            modifiers: Modifiers::empty(),
            annotations: Vec::new(),
            method_name,
            return_type,
            parameters: Vec::new(),
            throws_types: Vec::new(),
            body: None,
        }
    }

    /// Seed a builder from an existing method
    pub fn from_existing(existing: &MethodMetadata) -> Self {
        Self {
            declared_by: existing.declared_by.clone(),
            modifiers: existing.modifiers,
            annotations: existing
                .annotations
                .iter()
                .map(AnnotationMetadataBuilder::from_existing)
                .collect(),
            method_name: existing.method_name.clone(),
            return_type: existing.return_type.clone(),
            parameters: existing.parameters.clone(),
            throws_types: existing.throws_types.clone(),
            body: existing.body.clone(),
        }
    }

    /// Who declared the method
    pub fn declared_by(&self) -> &MetadataId {
        &self.declared_by
    }

    /// Method modifiers
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

    /// Method annotations
    pub fn annotations(&self) -> &[AnnotationMetadataBuilder] {
        &self.annotations
    }

    /// Append an annotation
    pub fn add_annotation(&mut self, annotation: AnnotationMetadataBuilder) {
        self.annotations.push(annotation);
    }

    /// Method name
    pub fn method_name(&self) -> &JavaSymbolName {
        &self.method_name
    }

    /// Rename the method
    pub fn set_method_name(&mut self, method_name: JavaSymbolName) {
        self.method_name = method_name;
    }

    /// Return type
    pub fn return_type(&self) -> &JavaType {
        &self.return_type
    }

    /// Replace the return type
    pub fn set_return_type(&mut self, return_type: JavaType) {
        self.return_type = return_type;
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

    /// Declared checked exceptions
    pub fn throws_types(&self) -> &[JavaType] {
        &self.throws_types
    }

    /// Declare a checked exception
    pub fn add_throws_type(&mut self, throws_type: JavaType) {
        self.throws_types.push(throws_type);
    }

    /// Body text
    pub fn body(&self) -> Option<&str> {
        self.body.as_deref()
    }

    /// Set or clear the body text
    pub fn set_body(&mut self, body: Option<String>) {
        self.body = body;
    }

    /// Build the immutable method
    pub fn build(&self) -> MethodMetadata {
        MethodMetadata {
            declared_by: self.declared_by.clone(),
            modifiers: self.modifiers,
            annotations: self.annotations.iter().map(|a| a.build()).collect(),
            method_name: self.method_name.clone(),
            return_type: self.return_type.clone(),
            parameters: self.parameters.clone(),
            throws_types: self.throws_types.clone(),
            body: self.body.clone(),
        }
    }
}
