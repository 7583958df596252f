use classwright::{
    AnnotationMetadataBuilder, ConstructorMetadataBuilder, FieldMetadataBuilder,
    InitializerMetadataBuilder, JavaSymbolName, JavaType, MemberHolder, MembersBuilder,
    MethodMetadataBuilder, Modifiers, PhysicalTypeCategory, TypeDetailsBuilder,
};
use serde_json::json;

const TARGET_MID: &str = "MID:com.example.Person";
const SOURCE_MID: &str = "MID:com.example.PersonJavaBean";

fn sym(name: &str) -> JavaSymbolName {
    JavaSymbolName::new(name).unwrap()
}

fn ty(name: &str) -> JavaType {
    JavaType::parse(name).unwrap()
}

fn field(mid: &str, field_type: JavaType, name: &str) -> FieldMetadataBuilder {
    FieldMetadataBuilder::new(mid, field_type, sym(name))
}

fn method(mid: &str, name: &str) -> MethodMetadataBuilder {
    MethodMetadataBuilder::new(mid, sym(name), JavaType::void_primitive())
        .with_parameter(JavaType::string(), sym("value"))
}

fn target_builder() -> TypeDetailsBuilder {
    TypeDetailsBuilder::with_declaration(
        TARGET_MID,
        Modifiers::PUBLIC,
        ty("com.example.Person"),
        PhysicalTypeCategory::Class,
    )
}

fn source_builder() -> TypeDetailsBuilder {
    TypeDetailsBuilder::with_declaration(
        SOURCE_MID,
        Modifiers::PUBLIC,
        ty("com.example.Person"),
        PhysicalTypeCategory::Class,
    )
}

fn field_keys(builder: &TypeDetailsBuilder) -> Vec<(String, String)> {
    builder
        .members()
        .declared_fields()
        .iter()
        .map(|f| (f.field_type().to_string(), f.field_name().to_string()))
        .collect()
}

#[test]
fn test_fields_deduplicated_by_type_and_name() {
    let mut target = target_builder();
    target.add_field(field(TARGET_MID, JavaType::int_primitive(), "x"));

    let mut source = source_builder();
    source.add_field(field(SOURCE_MID, JavaType::int_primitive(), "x"));
    source.add_field(field(SOURCE_MID, JavaType::string(), "y"));

    source.copy_to(&mut target);

    assert_eq!(
        field_keys(&target),
        vec![
            ("int".to_string(), "x".to_string()),
            ("java.lang.String".to_string(), "y".to_string()),
        ]
    );
    // The target's own field wins
    assert_eq!(
        target.members().declared_fields()[0].declared_by().as_str(),
        TARGET_MID
    );
}

#[test]
fn test_field_with_same_name_but_other_type_is_copied() {
    let mut target = target_builder();
    target.add_field(field(TARGET_MID, JavaType::int_primitive(), "x"));

    let mut source = source_builder();
    source.add_field(field(SOURCE_MID, JavaType::long_primitive(), "x"));

    source.copy_to(&mut target);

    assert_eq!(target.members().declared_fields().len(), 2);
}

#[test]
fn test_matched_field_attributes_are_not_merged() {
    let mut target = target_builder();
    target.add_field(field(TARGET_MID, JavaType::string(), "email").with_modifiers(Modifiers::PRIVATE));

    let mut source = source_builder();
    let mut annotated = field(SOURCE_MID, JavaType::string(), "email").with_modifiers(Modifiers::PUBLIC);
    annotated.add_annotation(AnnotationMetadataBuilder::new(ty(
        "javax.validation.constraints.Email",
    )));
    source.add_field(annotated);

    source.copy_to(&mut target);

    let fields = target.members().declared_fields();
    assert_eq!(fields.len(), 1);
    assert_eq!(fields[0].modifiers(), Modifiers::PRIVATE);
    assert!(fields[0].annotations().is_empty());
}

#[test]
fn test_repeated_source_field_copied_once() {
    let mut target = target_builder();
    let mut source = source_builder();
    source.add_field(field(SOURCE_MID, JavaType::string(), "name"));
    source.add_field(field(SOURCE_MID, JavaType::string(), "name"));

    source.copy_to(&mut target);

    assert_eq!(target.members().declared_fields().len(), 1);
}

#[test]
fn test_methods_are_not_deduplicated() {
    let mut target = target_builder();
    target.add_method(method(TARGET_MID, "setName"));

    let mut source = source_builder();
    source.add_method(method(SOURCE_MID, "setName"));

    source.copy_to(&mut target);

    let methods = target.members().declared_methods();
    assert_eq!(methods.len(), 2);
    assert_eq!(methods[0].declared_by().as_str(), TARGET_MID);
    assert_eq!(methods[1].declared_by().as_str(), SOURCE_MID);

    let details = target.build();
    let matching = details
        .declared_methods()
        .iter()
        .filter(|m| m.matches_signature("setName", &[JavaType::string()]))
        .count();
    assert_eq!(matching, 2);
}

#[test]
fn test_every_other_category_is_appended() {
    let mut target = target_builder();
    target.add_annotation(AnnotationMetadataBuilder::new(ty("javax.persistence.Entity")));
    target.add_implements_type(ty("java.io.Serializable"));
    target.add_constructor(ConstructorMetadataBuilder::new(TARGET_MID));

    let mut source = source_builder();
    source.add_annotation(AnnotationMetadataBuilder::new(ty("javax.persistence.Entity")));
    source.add_constructor(ConstructorMetadataBuilder::new(SOURCE_MID));
    source.add_constructor(
        ConstructorMetadataBuilder::new(SOURCE_MID).with_parameter(JavaType::string(), sym("name")),
    );
    source.add_initializer(InitializerMetadataBuilder::new(SOURCE_MID, false, "init();"));
    source.add_inner_type(TypeDetailsBuilder::with_declaration(
        SOURCE_MID,
        Modifiers::PUBLIC | Modifiers::STATIC,
        ty("com.example.Person.Builder"),
        PhysicalTypeCategory::Class,
    ));
    source.add_extends_type(ty("com.example.Party"));
    source.add_implements_type(ty("java.io.Serializable"));
    source.add_implements_type(ty("java.lang.Comparable"));

    source.copy_to(&mut target);

    let members = target.members();
    assert_eq!(members.annotations().len(), 2);
    assert_eq!(members.declared_constructors().len(), 3);
    assert_eq!(members.declared_constructors()[0].declared_by().as_str(), TARGET_MID);
    assert_eq!(members.declared_constructors()[2].parameters().len(), 1);
    assert_eq!(members.declared_initializers().len(), 1);
    assert_eq!(members.declared_inner_types().len(), 1);
    assert_eq!(members.extends_types(), &[ty("com.example.Party")]);
    assert_eq!(
        members.implements_types(),
        &[
            ty("java.io.Serializable"),
            ty("java.io.Serializable"),
            ty("java.lang.Comparable"),
        ]
    );
}

#[test]
fn test_custom_data_merged_additively() {
    let mut target = target_builder();
    target.members_mut().custom_data_mut().put("persistent", json!(true));
    target.members_mut().custom_data_mut().put("table", json!("person"));

    let mut source = source_builder();
    source.members_mut().custom_data_mut().put("javabean", json!(["getName"]));
    source.members_mut().custom_data_mut().put("table", json!("people"));

    source.copy_to(&mut target);

    let data = target.build();
    let data = data.custom_data();
    assert_eq!(data.len(), 3);
    assert_eq!(data.get(&"persistent".into()), Some(&json!(true)));
    assert_eq!(data.get(&"table".into()), Some(&json!("people")));
    assert_eq!(data.get(&"javabean".into()), Some(&json!(["getName"])));
}

#[test]
fn test_empty_custom_data_leaves_target_alone() {
    let mut target = target_builder();
    target.members_mut().custom_data_mut().put("persistent", json!(true));

    source_builder().copy_to(&mut target);

    assert_eq!(target.members().custom_data().len(), 1);
}

#[test]
fn test_scalar_state_is_not_copied() {
    let mut target = target_builder();
    let mut source = TypeDetailsBuilder::with_declaration(
        SOURCE_MID,
        Modifiers::PRIVATE,
        ty("com.example.Other"),
        PhysicalTypeCategory::Interface,
    );
    source.set_enum_constants(vec![sym("A")]);
    source.add_import(classwright::ImportMetadata::of_type(ty("java.util.List")));
    source.set_superclass(Some(TypeDetailsBuilder::new(SOURCE_MID)));

    source.copy_to(&mut target);

    assert_eq!(target.name(), Some(&ty("com.example.Person")));
    assert_eq!(target.physical_type_category(), Some(PhysicalTypeCategory::Class));
    assert_eq!(target.members().modifiers(), Modifiers::PUBLIC);
    assert!(target.enum_constants().is_empty());
    assert!(target.registered_imports().is_empty());
    assert!(target.superclass().is_none());
}

#[test]
fn test_source_is_unchanged() {
    let mut target = target_builder();
    target.add_field(field(TARGET_MID, JavaType::int_primitive(), "x"));

    let mut source = source_builder();
    source.add_field(field(SOURCE_MID, JavaType::int_primitive(), "x"));
    source.add_method(method(SOURCE_MID, "setX"));
    let before = source.clone();

    source.copy_to(&mut target);

    assert_eq!(source, before);
}

#[test]
fn test_copy_into_bare_members_builder() {
    let mut target = MembersBuilder::new(TARGET_MID);
    target.add_field(field(TARGET_MID, JavaType::string(), "name"));

    let mut source = source_builder();
    source.add_field(field(SOURCE_MID, JavaType::string(), "name"));
    source.add_field(field(SOURCE_MID, JavaType::string(), "nickname"));
    source.add_method(method(SOURCE_MID, "setNickname"));

    source.copy_to(&mut target);

    assert_eq!(target.declared_fields().len(), 2);
    assert_eq!(target.declared_methods().len(), 1);
}

#[test]
fn test_copy_through_trait_object() {
    let mut target = target_builder();
    let mut source = source_builder();
    source.add_method(method(SOURCE_MID, "toString"));

    let holder: &mut dyn MemberHolder = &mut target;
    source.copy_to(holder);

    assert_eq!(target.members().declared_methods().len(), 1);
}
