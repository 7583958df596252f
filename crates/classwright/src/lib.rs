//! Classwright
//!
//! Mutable builders over immutable type-metadata snapshots, for source
//! generators that assemble the structure of a class or interface (name,
//! category, superclass, members, annotations, enum constants, imports)
//! before handing it to an emitter.

#![warn(missing_docs)]

pub mod config;
pub mod details;
pub mod error;
pub mod model;

pub use config::{DefaultModifiers, ModelConfig, SymbolPolicy};
pub use details::{
    AnnotationMetadata, AnnotationMetadataBuilder, AnnotationValue, ConstructorMetadata,
    ConstructorMetadataBuilder, CustomData, CustomDataBuilder, CustomDataKey, FieldMetadata,
    FieldMetadataBuilder, InitializerMetadata, InitializerMetadataBuilder, MemberHolder,
    MembersBuilder, MethodMetadata, MethodMetadataBuilder, MethodParameter, TypeDetails,
    TypeDetailsBuilder,
};
pub use error::{ConfigError, ModelError};
pub use model::{
    DataType, ImportMetadata, JavaSymbolName, JavaType, MetadataId, Modifiers,
    PhysicalTypeCategory,
};
