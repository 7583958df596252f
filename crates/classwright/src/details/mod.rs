//! Builders and snapshots for type descriptions
//!
//! Every builder here is a mutable, single-owner staging object with a
//! `build()` that produces its immutable counterpart. Builders can also be
//! seeded from a snapshot (`from_existing`) for round-trip editing.
//!
//! ```text
//! TypeDetailsBuilder ── build() ──▶ TypeDetails
//!   ├─ superclass: Option<TypeDetailsBuilder>
//!   ├─ enum constants, imports
//!   └─ MembersBuilder
//!        ├─ FieldMetadataBuilder, MethodMetadataBuilder, ...
//!        ├─ inner types: TypeDetailsBuilder
//!        └─ CustomDataBuilder
//! ```

mod annotation;
mod constructor;
mod custom_data;
mod field;
mod members;
mod method;
mod type_builder;
mod type_details;

pub use annotation::{
    AnnotationAttribute, AnnotationMetadata, AnnotationMetadataBuilder, AnnotationValue,
};
pub use constructor::{
    ConstructorMetadata, ConstructorMetadataBuilder, InitializerMetadata,
    InitializerMetadataBuilder,
};
pub use custom_data::{CustomData, CustomDataBuilder, CustomDataKey};
pub use field::{FieldMetadata, FieldMetadataBuilder};
pub use members::{MemberHolder, MembersBuilder};
pub use method::{MethodMetadata, MethodMetadataBuilder, MethodParameter};
pub use type_builder::TypeDetailsBuilder;
pub use type_details::{SuperclassChain, TypeDetails};
