#![allow(clippy::unwrap_used)]

use jparse::NodeId;
use jparse::ast::nodes::{AstNode, BinaryExpr, CompilationUnit, ImportDeclaration, Name, NameExpr};
use jparse::ast::{Ast, BinaryOperator, GenericVisitor, TreeTraversal, VoidVisitor, walk_children};
use jparse::metamodel::NodeType;

use crate::helpers::fixtures::{binary, unit_with_import};

/// Renders expressions back to source text.
struct Printer;

impl GenericVisitor<String, ()> for Printer {
    fn visit_default(&mut self, ast: &Ast, node: NodeId, _arg: ()) -> String {
        format!("<{}>", ast.node_type(node))
    }

    fn visit_name_expr(&mut self, ast: &Ast, node: NameExpr, _arg: ()) -> String {
        node.name(ast).identifier(ast).to_string()
    }

    fn visit_binary_expr(&mut self, ast: &Ast, node: BinaryExpr, arg: ()) -> String {
        let left = ast.accept(node.left(ast).id(), self, arg);
        let right = ast.accept(node.right(ast).id(), self, arg);
        let op = node.operator(ast).map(BinaryOperator::as_str).unwrap_or("?");
        format!("({left} {op} {right})")
    }
}

#[test]
fn test_generic_visitor_renders_nested_expression() {
    let mut ast = Ast::new();
    let inner = binary(&mut ast, "a", BinaryOperator::Multiply, "b");
    let c = crate::helpers::fixtures::name_expr(&mut ast, "c");
    let outer = BinaryExpr::new(&mut ast, inner, c, BinaryOperator::Plus).unwrap();

    assert_eq!(ast.accept(outer.id(), &mut Printer, ()), "((a * b) + c)");
}

#[test]
fn test_generic_visitor_falls_back_to_default() {
    let mut ast = Ast::new();
    let (unit, _) = unit_with_import(&mut ast);
    assert_eq!(ast.accept(unit.id(), &mut Printer, ()), "<CompilationUnit>");
}

/// Counts nodes per depth, passing the depth down as the argument.
#[derive(Default)]
struct DepthCounter {
    deepest: usize,
    imports: usize,
}

impl VoidVisitor<usize> for DepthCounter {
    fn visit_default(&mut self, ast: &Ast, node: NodeId, depth: usize) {
        self.deepest = self.deepest.max(depth);
        for child in ast.children(node) {
            ast.accept_void(child, self, depth + 1);
        }
    }

    fn visit_import_declaration(&mut self, ast: &Ast, node: ImportDeclaration, depth: usize) {
        self.imports += 1;
        self.visit_default(ast, node.id(), depth);
    }
}

#[test]
fn test_void_visitor_threads_argument() {
    let mut ast = Ast::new();
    let (unit, _) = unit_with_import(&mut ast);
    let mut counter = DepthCounter::default();
    ast.accept_void(unit.id(), &mut counter, 0);
    // unit > import > List > util > java
    assert_eq!(counter.deepest, 4);
    assert_eq!(counter.imports, 1);
}

/// Collects qualified names without descending into them.
#[derive(Default)]
struct Names(Vec<String>);

impl VoidVisitor<()> for Names {
    fn visit_name(&mut self, ast: &Ast, node: Name, _arg: ()) {
        self.0.push(node.as_string(ast).to_string());
    }

    fn visit_compilation_unit(&mut self, ast: &Ast, node: CompilationUnit, arg: ()) {
        walk_children(self, ast, node.id(), arg);
    }
}

#[test]
fn test_void_visitor_override_can_stop_descent() {
    let mut ast = Ast::new();
    let (unit, _) = unit_with_import(&mut ast);
    let mut names = Names::default();
    ast.accept_void(unit.id(), &mut names, ());
    assert_eq!(names.0, vec!["java.util.List"]);
}

#[test]
fn test_walk_and_find_on_unit() {
    let mut ast = Ast::new();
    let (unit, import) = unit_with_import(&mut ast);
    let java = ast
        .walk(unit.id(), TreeTraversal::PreOrder)
        .into_iter()
        .last()
        .unwrap();
    assert_eq!(Name::cast(&ast, java).unwrap().identifier(&ast), "java");
    assert_eq!(
        ast.find_ancestor(java, NodeType::ImportDeclaration),
        Some(import.id())
    );
    assert_eq!(ast.find_all::<Name>(unit.id()).len(), 3);
    assert_eq!(ast.root_of(java), unit.id());
}
