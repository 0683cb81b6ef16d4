//! Small trees shared by the integration tests.

use std::sync::Arc;

use jparse::ast::nodes::{
    BinaryExpr, CompilationUnit, Expression, ImportDeclaration, LocationSetConstructorExpr, Name,
    NameExpr, SimpleName,
};
use jparse::ast::{Ast, AstEvent, AstObserver, BinaryOperator, ObserverError};

/// `name` as an expression.
pub fn name_expr(ast: &mut Ast, name: &str) -> NameExpr {
    let name = SimpleName::new(ast, name).unwrap();
    NameExpr::new(ast, name).unwrap()
}

/// `import java.util.List;`
pub fn list_import(ast: &mut Ast) -> ImportDeclaration {
    let name = Name::parse(ast, "java.util.List").unwrap();
    ImportDeclaration::new(ast, name, false, false).unwrap()
}

/// A compilation unit holding `import java.util.List;`.
pub fn unit_with_import(ast: &mut Ast) -> (CompilationUnit, ImportDeclaration) {
    let import = list_import(ast);
    let unit = CompilationUnit::new(ast, None, vec![import], vec![]).unwrap();
    (unit, import)
}

/// The location set `locs[a, b]`, returning the set and both arguments.
pub fn location_set(ast: &mut Ast) -> (LocationSetConstructorExpr, NameExpr, NameExpr) {
    let a = name_expr(ast, "a");
    let b = name_expr(ast, "b");
    let name = SimpleName::new(ast, "locs").unwrap();
    let set = LocationSetConstructorExpr::new(ast, name, vec![a.into(), b.into()]).unwrap();
    (set, a, b)
}

/// `left op right` over two fresh names.
pub fn binary(ast: &mut Ast, left: &str, op: BinaryOperator, right: &str) -> BinaryExpr {
    let left: Expression = name_expr(ast, left).into();
    let right: Expression = name_expr(ast, right).into();
    BinaryExpr::new(ast, left, right, op).unwrap()
}

/// Observer that refuses every change.
pub struct Veto;

impl AstObserver for Veto {
    fn notify(&self, _ast: &Ast, _event: &AstEvent) -> Result<(), ObserverError> {
        Err(ObserverError::new("read-only tree"))
    }
}

pub fn veto() -> Arc<Veto> {
    Arc::new(Veto)
}
