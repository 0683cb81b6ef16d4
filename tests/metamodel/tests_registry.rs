#![allow(clippy::unwrap_used)]

use jparse::ast::nodes::{ImportDeclaration, Name};
use jparse::metamodel::{NodeType, PrimitiveType, Property, ValueType, meta_model, registry};
use jparse::{Ast, AstNode};
use rstest::rstest;

#[test]
fn test_every_node_type_has_a_descriptor() {
    for node_type in NodeType::ALL {
        let class = meta_model(*node_type);
        assert_eq!(class.node_type(), *node_type);
        assert_eq!(class.type_name(), node_type.name());
    }
}

#[test]
fn test_descriptors_are_singletons() {
    let first = meta_model(NodeType::ImportDeclaration);
    let second = registry().class(NodeType::ImportDeclaration);
    assert!(std::ptr::eq(first, second));
}

#[test]
fn test_registry_is_shared_across_threads() {
    let handles: Vec<_> = (0..8)
        .map(|i| {
            std::thread::spawn(move || {
                let mut ast = Ast::new();
                let name = Name::parse(&mut ast, "java.util.List").unwrap();
                let import = ImportDeclaration::new(&mut ast, name, i % 2 == 0, false).unwrap();
                assert_eq!(import.is_static(&ast), i % 2 == 0);
                let class = import.meta_model(&ast);
                let names: Vec<&'static str> = class
                    .all_property_meta_models()
                    .iter()
                    .map(|p| p.name())
                    .collect();
                (std::ptr::from_ref(class) as usize, names)
            })
        })
        .collect();

    let expected = meta_model(NodeType::ImportDeclaration);
    for handle in handles {
        let (address, names) = handle.join().unwrap();
        assert_eq!(address, std::ptr::from_ref(expected) as usize);
        assert_eq!(names, vec!["comment", "name", "is_static", "is_asterisk"]);
    }
}

#[test]
fn test_import_declaration_properties() {
    let class = meta_model(NodeType::ImportDeclaration);
    let names: Vec<&str> = class
        .all_property_meta_models()
        .iter()
        .map(|p| p.name())
        .collect();
    assert_eq!(names, vec!["comment", "name", "is_static", "is_asterisk"]);

    let is_static = class.property(Property::Static).unwrap();
    assert_eq!(is_static.value_type(), ValueType::Primitive(PrimitiveType::Bool));
    assert!(!is_static.is_optional());
    assert!(!is_static.is_list());
    assert!(is_static.is_required());

    let name = class.property(Property::Name).unwrap();
    assert_eq!(name.node_type(), Some(NodeType::Name));
    assert!(name.is_node());
    assert!(std::ptr::eq(
        name.node_meta_model().unwrap(),
        meta_model(NodeType::Name)
    ));
}

#[test]
fn test_comment_inherited_from_root() {
    let class = meta_model(NodeType::BinaryExpr);
    let comment = class.property(Property::Comment).unwrap();
    assert_eq!(comment.declaring_type(), NodeType::Node);
    assert!(comment.is_optional());
    assert!(
        class
            .declared_property_meta_models()
            .iter()
            .all(|p| p.declaring_type() == NodeType::BinaryExpr)
    );
}

#[test]
fn test_location_set_arguments_are_non_empty_list() {
    let arguments = meta_model(NodeType::LocationSetConstructorExpr)
        .property(Property::Arguments)
        .unwrap();
    assert!(arguments.is_list());
    assert!(arguments.is_node_list());
    assert!(arguments.is_non_empty());
    assert_eq!(arguments.node_type(), Some(NodeType::Expression));

    let call_arguments = meta_model(NodeType::MethodCallExpr)
        .property(Property::Arguments)
        .unwrap();
    assert!(!call_arguments.is_non_empty());
}

#[rstest]
#[case(NodeType::IntegerLiteralExpr, NodeType::Expression, true)]
#[case(NodeType::IntegerLiteralExpr, NodeType::LiteralStringValueExpr, true)]
#[case(NodeType::BooleanLiteralExpr, NodeType::LiteralStringValueExpr, false)]
#[case(NodeType::ClassOrInterfaceDeclaration, NodeType::BodyDeclaration, true)]
#[case(NodeType::MethodDeclaration, NodeType::TypeDeclaration, false)]
#[case(NodeType::JavadocComment, NodeType::Node, true)]
fn test_subtype_relation(
    #[case] sub: NodeType,
    #[case] sup: NodeType,
    #[case] expected: bool,
) {
    assert_eq!(meta_model(sub).is_subtype_of(sup), expected);
    assert_eq!(registry().is_subtype(sub, sup), expected);
}

#[test]
fn test_property_lookup_by_name() {
    let class = meta_model(NodeType::Name);
    assert_eq!(
        class.property_by_name("qualified").map(|p| p.property()),
        Some(Property::Qualified)
    );
    assert!(class.property_by_name("members").is_none());
    assert_eq!(Property::from_name("is_static"), Some(Property::Static));
}
