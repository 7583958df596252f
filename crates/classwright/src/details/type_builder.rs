//! Type Details Builder
//!
//! [`TypeDetailsBuilder`] stages a class or interface description and turns
//! it into an immutable [`TypeDetails`] with [`build`](TypeDetailsBuilder::build).
//!
//! ## Superclasses
//!
//! The superclass is an owned, optional child builder rather than a snapshot,
//! so the whole inheritance chain stays editable until the outermost builder
//! is built. Building is a post-order walk: the deepest ancestor is finalized
//! first. Ownership makes a cyclic chain unrepresentable.
//!
//! ## Merging
//!
//! [`copy_to`](TypeDetailsBuilder::copy_to) folds this builder's members into
//! another [`MemberHolder`]. Fields are deduplicated by type and name; every
//! other category is appended as is.

use std::collections::BTreeSet;

use rustc_hash::FxHashSet;
use tracing::{debug, trace};

use super::annotation::AnnotationMetadataBuilder;
use super::constructor::{ConstructorMetadataBuilder, InitializerMetadataBuilder};
use super::custom_data::CustomData;
use super::field::FieldMetadataBuilder;
use super::members::{MemberHolder, MembersBuilder};
use super::method::MethodMetadataBuilder;
use super::type_details::TypeDetails;
use crate::model::{
    ImportMetadata, JavaSymbolName, JavaType, MetadataId, Modifiers, PhysicalTypeCategory,
};

/// Mutable, single-owner builder for [`TypeDetails`]
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TypeDetailsBuilder {
    members: MembersBuilder,
    name: Option<JavaType>,
    physical_type_category: Option<PhysicalTypeCategory>,
    superclass: Option<Box<TypeDetailsBuilder>>,
    enum_constants: Vec<JavaSymbolName>,
    registered_imports: BTreeSet<ImportMetadata>,
}

impl TypeDetailsBuilder {
    /// Create an empty builder
    pub fn new(declared_by: impl Into<MetadataId>) -> Self {
        Self {
            members: MembersBuilder::new(declared_by),
            ..Self::default()
        }
    }

    /// Create a builder with modifiers, name and category already set
    pub fn with_declaration(
        declared_by: impl Into<MetadataId>,
        modifiers: Modifiers,
        name: JavaType,
        physical_type_category: PhysicalTypeCategory,
    ) -> Self {
        let mut builder = Self::new(declared_by);
        builder.members.set_modifiers(modifiers);
        builder.name = Some(name);
        builder.physical_type_category = Some(physical_type_category);
        builder
    }

    /// Seed a builder from an existing snapshot
    ///
    /// The superclass is rebuilt recursively into a fresh builder, and all
    /// collections are copied, so the snapshot is never affected by later
    /// edits.
    pub fn from_existing(existing: &TypeDetails) -> Self {
        Self {
            members: MembersBuilder::from_existing(existing),
            name: existing.name().cloned(),
            physical_type_category: existing.physical_type_category(),
            superclass: existing
                .superclass()
                .map(|superclass| Box::new(Self::from_existing(superclass))),
            enum_constants: existing.enum_constants().to_vec(),
            registered_imports: existing.registered_imports().clone(),
        }
    }

    /// Seed a builder from an existing snapshot under a different declaring id
    pub fn from_existing_with_id(declared_by: impl Into<MetadataId>, existing: &TypeDetails) -> Self {
        let mut builder = Self::from_existing(existing);
        builder.members.set_declared_by(declared_by);
        builder
    }

    /// Shared member accumulator
    pub fn members(&self) -> &MembersBuilder {
        &self.members
    }

    /// Mutable access to the shared member accumulator
    pub fn members_mut(&mut self) -> &mut MembersBuilder {
        &mut self.members
    }

    /// Type name
    pub fn name(&self) -> Option<&JavaType> {
        self.name.as_ref()
    }

    /// Replace the type name
    pub fn set_name(&mut self, name: JavaType) {
        self.name = Some(name);
    }

    /// Physical category
    pub fn physical_type_category(&self) -> Option<PhysicalTypeCategory> {
        self.physical_type_category
    }

    /// Replace the physical category
    pub fn set_physical_type_category(&mut self, category: PhysicalTypeCategory) {
        self.physical_type_category = Some(category);
    }

    /// Superclass builder, if any
    pub fn superclass(&self) -> Option<&TypeDetailsBuilder> {
        self.superclass.as_deref()
    }

    /// Mutable access to the superclass builder
    pub fn superclass_mut(&mut self) -> Option<&mut TypeDetailsBuilder> {
        self.superclass.as_deref_mut()
    }

    /// Replace the superclass builder; `None` clears inheritance
    pub fn set_superclass(&mut self, superclass: Option<TypeDetailsBuilder>) {
        self.superclass = superclass.map(Box::new);
    }

    // ========================================================================
    // Enum constants
    // ========================================================================

    /// Enum constants in insertion order
    pub fn enum_constants(&self) -> &[JavaSymbolName] {
        &self.enum_constants
    }

    /// Replace the enum constants; an empty input clears them
    pub fn set_enum_constants<I>(&mut self, enum_constants: I)
    where
        I: IntoIterator<Item = JavaSymbolName>,
    {
        self.enum_constants.clear();
        self.enum_constants.extend(enum_constants);
    }

    /// Append an enum constant
    ///
    /// Always returns `true`; the list accepts repeats.
    pub fn add_enum_constant(&mut self, constant: JavaSymbolName) -> bool {
        self.enum_constants.push(constant);
        true
    }

    // ========================================================================
    // Imports
    // ========================================================================

    /// Copy of the registered imports
    ///
    /// Every call returns a new set; changing it does not affect the builder.
    pub fn registered_imports(&self) -> BTreeSet<ImportMetadata> {
        self.registered_imports.clone()
    }

    /// Replace the registered imports; an empty input clears them
    pub fn set_registered_imports<I>(&mut self, imports: I)
    where
        I: IntoIterator<Item = ImportMetadata>,
    {
        self.registered_imports.clear();
        self.registered_imports.extend(imports);
    }

    /// Register one import
    ///
    /// `None` is ignored. Returns `true` if the import was not already
    /// registered.
    pub fn add_import(&mut self, import: impl Into<Option<ImportMetadata>>) -> bool {
        match import.into() {
            Some(import) => self.registered_imports.insert(import),
            None => false,
        }
    }

    /// Register several imports
    ///
    /// Returns `true` if at least one of them was not already registered.
    pub fn add_imports<I>(&mut self, imports: I) -> bool
    where
        I: IntoIterator<Item = ImportMetadata>,
    {
        imports
            .into_iter()
            .fold(false, |changed, import| self.registered_imports.insert(import) || changed)
    }

    // ========================================================================
    // Building and merging
    // ========================================================================

    /// Build an immutable snapshot of the current state
    ///
    /// The superclass is built first, then every member builder. Nothing is
    /// cached: building again after an edit reflects the edit.
    pub fn build(&self) -> TypeDetails {
        let superclass = self.superclass.as_ref().map(|s| Box::new(s.build()));

        trace!(
            name = ?self.name.as_ref().map(|n| n.fully_qualified_name()),
            fields = self.members.declared_fields().len(),
            methods = self.members.declared_methods().len(),
            inner_types = self.members.declared_inner_types().len(),
            has_superclass = superclass.is_some(),
            "building type details"
        );

        TypeDetails {
            declared_by: self.members.declared_by().clone(),
            modifiers: self.members.modifiers(),
            name: self.name.clone(),
            physical_type_category: self.physical_type_category,
            annotations: self.members.build_annotations(),
            custom_data: self.members.build_custom_data(),
            declared_fields: self.members.build_fields(),
            declared_methods: self.members.build_methods(),
            declared_constructors: self.members.build_constructors(),
            declared_initializers: self.members.build_initializers(),
            declared_inner_types: self.members.build_inner_types(),
            superclass,
            extends_types: self.members.extends_types().to_vec(),
            implements_types: self.members.implements_types().to_vec(),
            enum_constants: self.enum_constants.clone(),
            registered_imports: self.registered_imports.clone(),
        }
    }

    /// Copy this builder's members into `target`
    ///
    /// A field is skipped when the target already has a field of the same
    /// type and name, including fields added earlier in this call. Methods,
    /// annotations, constructors, initializers, inner types and the extends
    /// and implements lists are appended without deduplication. Custom data
    /// is merged only when this builder has some. `self` is not modified.
    pub fn copy_to<T>(&self, target: &mut T)
    where
        T: MemberHolder + ?Sized,
    {
        let mut present: FxHashSet<(JavaType, JavaSymbolName)> = target
            .declared_fields()
            .iter()
            .map(|f| (f.field_type().clone(), f.field_name().clone()))
            .collect();

        let mut copied_fields = 0usize;
        let mut skipped_fields = 0usize;
        for field in self.members.declared_fields() {
            let key = (field.field_type().clone(), field.field_name().clone());
            if present.insert(key) {
                target.add_field(field.clone());
                copied_fields += 1;
            } else {
                skipped_fields += 1;
            }
        }

        for method in self.members.declared_methods() {
            target.add_method(method.clone());
        }

        for annotation in self.members.annotations() {
            target.add_annotation(annotation.clone());
        }

        if !self.members.custom_data().is_empty() {
            target.append_custom_data(&self.members.build_custom_data());
        }

        for constructor in self.members.declared_constructors() {
            target.add_constructor(constructor.clone());
        }

        for initializer in self.members.declared_initializers() {
            target.add_initializer(initializer.clone());
        }

        for inner_type in self.members.declared_inner_types() {
            target.add_inner_type(inner_type.clone());
        }

        for extends_type in self.members.extends_types() {
            target.add_extends_type(extends_type.clone());
        }

        for implements_type in self.members.implements_types() {
            target.add_implements_type(implements_type.clone());
        }

        debug!(
            source = ?self.name.as_ref().map(|n| n.fully_qualified_name()),
            copied_fields,
            skipped_fields,
            methods = self.members.declared_methods().len(),
            annotations = self.members.annotations().len(),
            constructors = self.members.declared_constructors().len(),
            initializers = self.members.declared_initializers().len(),
            inner_types = self.members.declared_inner_types().len(),
            "copied builder members into target"
        );
    }
}

impl MemberHolder for TypeDetailsBuilder {
    fn declared_fields(&self) -> &[FieldMetadataBuilder] {
        self.members.declared_fields()
    }

    fn add_field(&mut self, field: FieldMetadataBuilder) {
        self.members.add_field(field);
    }

    fn add_method(&mut self, method: MethodMetadataBuilder) {
        self.members.add_method(method);
    }

    fn add_annotation(&mut self, annotation: AnnotationMetadataBuilder) {
        self.members.add_annotation(annotation);
    }

    fn add_constructor(&mut self, constructor: ConstructorMetadataBuilder) {
        self.members.add_constructor(constructor);
    }

    fn add_initializer(&mut self, initializer: InitializerMetadataBuilder) {
        self.members.add_initializer(initializer);
    }

    fn add_inner_type(&mut self, inner_type: TypeDetailsBuilder) {
        self.members.add_inner_type(inner_type);
    }

    fn add_extends_type(&mut self, extends_type: JavaType) {
        self.members.add_extends_type(extends_type);
    }

    fn add_implements_type(&mut self, implements_type: JavaType) {
        self.members.add_implements_type(implements_type);
    }

    fn append_custom_data(&mut self, custom_data: &CustomData) {
        self.members.append_custom_data(custom_data);
    }
}

impl From<&TypeDetails> for TypeDetailsBuilder {
    fn from(existing: &TypeDetails) -> Self {
        Self::from_existing(existing)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sym(name: &str) -> JavaSymbolName {
        JavaSymbolName::new(name).unwrap()
    }

    fn import(name: &str) -> ImportMetadata {
        ImportMetadata::of_type(JavaType::parse(name).unwrap())
    }

    #[test]
    fn test_with_declaration() {
        let builder = TypeDetailsBuilder::with_declaration(
            "MID:person",
            Modifiers::PUBLIC,
            JavaType::parse("com.example.Person").unwrap(),
            PhysicalTypeCategory::Class,
        );
        let details = builder.build();
        assert_eq!(details.declared_by().as_str(), "MID:person");
        assert_eq!(details.modifiers(), Modifiers::PUBLIC);
        assert_eq!(details.physical_type_category(), Some(PhysicalTypeCategory::Class));
    }

    #[test]
    fn test_add_imports_reports_change() {
        let mut builder = TypeDetailsBuilder::new("MID:test");
        assert!(builder.add_import(import("java.util.List")));
        assert!(!builder.add_imports(vec![import("java.util.List")]));
        assert!(!builder.add_imports(Vec::new()));
        assert!(builder.add_imports(vec![import("java.util.List"), import("java.util.Set")]));
        assert_eq!(builder.registered_imports().len(), 2);
    }

    #[test]
    fn test_set_registered_imports_replaces() {
        let mut builder = TypeDetailsBuilder::new("MID:test");
        builder.add_import(import("java.util.List"));
        builder.set_registered_imports(vec![import("java.util.Map")]);
        assert_eq!(
            builder.registered_imports().into_iter().collect::<Vec<_>>(),
            vec![import("java.util.Map")]
        );

        builder.set_registered_imports(None);
        assert!(builder.registered_imports().is_empty());
    }

    #[test]
    fn test_add_enum_constant_accepts_repeats() {
        let mut builder = TypeDetailsBuilder::new("MID:test");
        assert!(builder.add_enum_constant(sym("RED")));
        assert!(builder.add_enum_constant(sym("RED")));
        assert_eq!(builder.enum_constants().len(), 2);

        builder.set_enum_constants(None);
        assert!(builder.enum_constants().is_empty());
    }

    #[test]
    fn test_superclass_edit_after_attach() {
        let mut child = TypeDetailsBuilder::new("MID:child");
        child.set_superclass(Some(TypeDetailsBuilder::new("MID:parent")));

        if let Some(parent) = child.superclass_mut() {
            parent.set_name(JavaType::parse("com.example.Base").unwrap());
        }

        let details = child.build();
        let parent = details.superclass().unwrap();
        assert_eq!(parent.name().unwrap().simple_type_name(), "Base");

        child.set_superclass(None);
        assert!(child.build().superclass().is_none());
    }

    #[test]
    fn test_from_existing_with_id_overrides_declaring_id() {
        let original = TypeDetailsBuilder::new("MID:original").build();
        let builder = TypeDetailsBuilder::from_existing_with_id("MID:other", &original);
        assert_eq!(builder.members().declared_by().as_str(), "MID:other");
        assert_eq!(original.declared_by().as_str(), "MID:original");
    }
}
