#![allow(clippy::unwrap_used)]

use jparse::ast::nodes::{
    AstNode, BlockStmt, ClassOrInterfaceDeclaration, CompilationUnit, JavadocComment,
    MethodDeclaration, Name, PackageDeclaration, Parameter, ReturnStmt, SimpleName,
};
use jparse::ast::{Ast, BinaryOperator, structurally_equal};
use jparse::base::{Position, Span};

use crate::helpers::fixtures::{binary, list_import};

/// ```text
/// package demo;
/// import java.util.List;
/// /** Entry point. */
/// class Main { void run(String arg) { return a + b; } }
/// ```
fn sample_unit(ast: &mut Ast) -> CompilationUnit {
    let package_name = Name::parse(ast, "demo").unwrap();
    let package = PackageDeclaration::new(ast, package_name).unwrap();
    let import = list_import(ast);

    let sum = binary(ast, "a", BinaryOperator::Plus, "b");
    let ret = ReturnStmt::new(ast, Some(sum.into())).unwrap();
    let body = BlockStmt::new(ast, vec![ret.into()]).unwrap();
    let type_name = Name::parse(ast, "String").unwrap();
    let arg = SimpleName::new(ast, "arg").unwrap();
    let param = Parameter::new(ast, type_name, arg).unwrap();
    let run = SimpleName::new(ast, "run").unwrap();
    let method = MethodDeclaration::new(ast, run, vec![param], Some(body)).unwrap();

    let main = SimpleName::new(ast, "Main").unwrap();
    let class = ClassOrInterfaceDeclaration::new(ast, false, main).unwrap();
    class.add_member(ast, method).unwrap();
    let doc = JavadocComment::new(ast, " Entry point. ").unwrap();
    class.set_comment(ast, Some(doc.into())).unwrap();
    ast.set_range(
        class.id(),
        Some(Span::new(Position::new(4, 1), Position::new(4, 52))),
    );

    CompilationUnit::new(ast, Some(package), vec![import], vec![class.into()]).unwrap()
}

#[test]
fn test_clone_of_whole_unit_is_equal_and_independent() {
    let mut ast = Ast::new();
    let unit = sample_unit(&mut ast);
    let before = ast.len();
    // every node built above ends up inside the unit
    assert_eq!(ast.snapshot(unit.id()).node_count(), before);

    let copy = unit.clone_node(&mut ast).unwrap();

    assert_eq!(ast.len(), before * 2);
    assert!(copy.equals(&ast, unit));
    assert_eq!(copy.parent(&ast), None);

    let copy_class = copy.primary_type(&ast).unwrap();
    let class = unit.primary_type(&ast).unwrap();
    assert_ne!(copy_class, class);
    assert_eq!(copy_class.range(&ast), class.range(&ast));
    assert!(copy_class.comment(&ast).unwrap().is_javadoc(&ast));

    copy_class.name(&ast).set_identifier(&mut ast, "Other").unwrap();
    assert!(!copy.equals(&ast, unit));
    assert_eq!(class.name(&ast).identifier(&ast), "Main");
}

#[test]
fn test_clone_into_fresh_arena() {
    let mut ast = Ast::new();
    let unit = sample_unit(&mut ast);
    let mut target = Ast::new();

    let copy = ast.clone_into(unit.id(), &mut target).unwrap();

    assert!(structurally_equal(&ast, unit.id(), &target, copy));
    assert_eq!(target.len(), ast.snapshot(unit.id()).node_count());
    let copy = CompilationUnit::cast(&target, copy).unwrap();
    let package = copy.package_declaration(&target).unwrap();
    assert_eq!(package.name(&target).as_string(&target), "demo");
}

#[test]
fn test_clone_of_inner_node_has_no_parent() {
    let mut ast = Ast::new();
    let unit = sample_unit(&mut ast);
    let import = unit.imports(&ast)[0];

    let copy = import.clone_node(&mut ast).unwrap();
    assert_eq!(copy.parent(&ast), None);
    assert_eq!(import.parent(&ast), Some(unit.id()));
    assert_eq!(copy.name(&ast).as_string(&ast), "java.util.List");

    unit.add_import(&mut ast, copy).unwrap();
    assert_eq!(unit.imports(&ast).len(), 2);
}

#[cfg(feature = "serde")]
#[test]
fn test_snapshot_round_trips_through_json() {
    let mut ast = Ast::new();
    let unit = sample_unit(&mut ast);
    let snapshot = ast.snapshot(unit.id());

    let json = serde_json::to_string(&snapshot).unwrap();
    let restored: jparse::ast::Snapshot = serde_json::from_str(&json).unwrap();

    let mut target = Ast::new();
    let copy = target.insert_snapshot(&restored).unwrap();
    assert!(structurally_equal(&ast, unit.id(), &target, copy));
}
