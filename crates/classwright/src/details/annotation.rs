//! Annotations attached to types, members and parameters

use serde::{Deserialize, Serialize};

use crate::model::{JavaSymbolName, JavaType};

/// Value of a single annotation attribute
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum AnnotationValue {
    /// `true` / `false`
    Boolean(bool),
    /// Any integral literal
    Integer(i64),
    /// `'c'`
    Char(char),
    /// `"text"`
    String(String),
    /// `Foo.class`
    Class(JavaType),
    /// `Color.RED`
    Enum(JavaType, JavaSymbolName),
    /// A nested annotation
    Nested(Box<AnnotationMetadata>),
    /// `{ a, b, c }`
    Array(Vec<AnnotationValue>),
}

/// A named attribute value
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnnotationAttribute {
    /// Attribute name (`value` for the single-element shorthand)
    pub name: JavaSymbolName,
    /// Attribute value
    pub value: AnnotationValue,
}

/// Immutable annotation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnnotationMetadata {
    annotation_type: JavaType,
    attributes: Vec<AnnotationAttribute>,
}

impl AnnotationMetadata {
    /// Type of the annotation
    pub fn annotation_type(&self) -> &JavaType {
        &self.annotation_type
    }

    /// Attributes in declaration order
    pub fn attributes(&self) -> &[AnnotationAttribute] {
        &self.attributes
    }

    /// Look up an attribute value by name
    pub fn attribute(&self, name: &str) -> Option<&AnnotationValue> {
        self.attributes
            .iter()
            .find(|attr| attr.name.symbol_name() == name)
            .map(|attr| &attr.value)
    }
}

/// Builder for [`AnnotationMetadata`]
#[derive(Debug, Clone, PartialEq)]
pub struct AnnotationMetadataBuilder {
    annotation_type: JavaType,
    attributes: Vec<AnnotationAttribute>,
}

impl AnnotationMetadataBuilder {
    /// Create a builder for a marker annotation of the given type
    pub fn new(annotation_type: JavaType) -> Self {
        Self {
            annotation_type,
            attributes: Vec::new(),
        }
    }

    /// Seed a builder from an existing annotation
    pub fn from_existing(existing: &AnnotationMetadata) -> Self {
        Self {
            annotation_type: existing.annotation_type.clone(),
            attributes: existing.attributes.clone(),
        }
    }

    /// Type of the annotation
    pub fn annotation_type(&self) -> &JavaType {
        &self.annotation_type
    }

    /// Replace the annotation type
    pub fn set_annotation_type(&mut self, annotation_type: JavaType) {
        self.annotation_type = annotation_type;
    }

    /// Attributes in declaration order
    pub fn attributes(&self) -> &[AnnotationAttribute] {
        &self.attributes
    }

    /// Set an attribute, replacing any existing attribute of the same name
    /// in place
    pub fn add_attribute(&mut self, name: JavaSymbolName, value: AnnotationValue) {
        match self.attributes.iter_mut().find(|attr| attr.name == name) {
            Some(existing) => existing.value = value,
            None => self.attributes.push(AnnotationAttribute { name, value }),
        }
    }

    /// Chainable form of [`add_attribute`](Self::add_attribute)
    pub fn with_attribute(mut self, name: JavaSymbolName, value: AnnotationValue) -> Self {
        self.add_attribute(name, value);
        self
    }

    /// Remove an attribute by name; returns whether one was removed
    pub fn remove_attribute(&mut self, name: &str) -> bool {
        let before = self.attributes.len();
        self.attributes.retain(|attr| attr.name.symbol_name() != name);
        self.attributes.len() != before
    }

    /// Build the immutable annotation
    pub fn build(&self) -> AnnotationMetadata {
        AnnotationMetadata {
            annotation_type: self.annotation_type.clone(),
            attributes: self.attributes.clone(),
        }
    }
}
