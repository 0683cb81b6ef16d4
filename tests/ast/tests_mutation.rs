#![allow(clippy::unwrap_used)]

use jparse::ast::nodes::{AstNode, Expression, StringLiteralExpr};
use jparse::ast::{Ast, AstError, AstEvent, ChangeLog, ListChangeType};
use jparse::metamodel::Property;

use crate::helpers::fixtures::{list_import, location_set, name_expr, unit_with_import};

#[test]
fn test_remove_from_location_set_twice() {
    let mut ast = Ast::new();
    let (set, a, b) = location_set(&mut ast);

    assert!(ast.remove(set.id(), b.id()).unwrap());
    assert_eq!(set.arguments(&ast), vec![Expression::from(a)]);
    assert_eq!(b.parent(&ast), None);

    assert!(!ast.remove(set.id(), b.id()).unwrap());
    assert_eq!(set.arguments(&ast), vec![Expression::from(a)]);
}

#[test]
fn test_replace_after_remove_leaves_single_replacement() {
    let mut ast = Ast::new();
    let (set, a, b) = location_set(&mut ast);
    let c = name_expr(&mut ast, "c");

    assert!(ast.remove(set.id(), b.id()).unwrap());
    assert!(ast.replace(set.id(), a.id(), c.id()).unwrap());

    assert_eq!(set.arguments(&ast), vec![Expression::from(c)]);
    assert_eq!(a.parent(&ast), None);
    assert_eq!(c.parent(&ast), Some(set.id()));
}

#[test]
fn test_replace_in_location_set_keeps_position() {
    let mut ast = Ast::new();
    let (set, a, b) = location_set(&mut ast);
    let c = name_expr(&mut ast, "c");
    let log = ChangeLog::new();
    ast.register_observer(&log);

    assert!(ast.replace(set.id(), a.id(), c.id()).unwrap());

    assert_eq!(
        set.arguments(&ast),
        vec![Expression::from(c), Expression::from(b)]
    );
    assert_eq!(a.parent(&ast), None);
    assert_eq!(c.parent(&ast), Some(set.id()));
    assert_eq!(
        log.events()[0],
        AstEvent::ListReplacement {
            node: set.id(),
            property: Property::Arguments,
            index: 0,
            old: a.id(),
            new: c.id(),
        }
    );
}

#[test]
fn test_emptying_location_set_is_allowed_but_invalid() {
    let mut ast = Ast::new();
    let (set, a, b) = location_set(&mut ast);
    assert!(a.remove(&mut ast).unwrap());
    assert!(b.remove(&mut ast).unwrap());
    assert!(set.arguments(&ast).is_empty());
    assert!(!ast.is_valid(set.id()));
}

#[test]
fn test_detached_node_can_be_reattached_elsewhere() {
    let mut ast = Ast::new();
    let (set, a, _) = location_set(&mut ast);
    let (other, _, _) = location_set(&mut ast);

    let err = other.add_argument(&mut ast, a).unwrap_err();
    assert!(matches!(err, AstError::AlreadyAttached { parent, .. } if parent == set.id()));

    a.remove(&mut ast).unwrap();
    other.add_argument(&mut ast, a).unwrap();
    assert_eq!(a.parent(&ast), Some(other.id()));
    assert_eq!(other.arguments(&ast).len(), 3);
}

#[test]
fn test_list_change_kinds() {
    let mut ast = Ast::new();
    let (set, _, _) = location_set(&mut ast);
    let log = ChangeLog::new();
    ast.register_observer(&log);

    let literal = StringLiteralExpr::new(&mut ast, "x").unwrap();
    set.add_argument(&mut ast, literal).unwrap();
    ast.list_remove_node(set.id(), Property::Arguments, literal.id())
        .unwrap();

    let kinds: Vec<ListChangeType> = log
        .events()
        .into_iter()
        .filter_map(|event| match event {
            AstEvent::ListChange { change, index, .. } => {
                assert_eq!(index, 2);
                Some(change)
            }
            _ => None,
        })
        .collect();
    assert_eq!(kinds, vec![ListChangeType::Addition, ListChangeType::Removal]);
}

#[test]
fn test_replace_node_of_import() {
    let mut ast = Ast::new();
    let (unit, import) = unit_with_import(&mut ast);
    let replacement = list_import(&mut ast);
    replacement.set_asterisk(&mut ast, true).unwrap();

    assert!(import.replace_with(&mut ast, replacement).unwrap());
    assert_eq!(unit.imports(&ast), vec![replacement]);
    assert_eq!(import.parent(&ast), None);

    // a root has nowhere to be replaced or removed from
    assert!(!unit.replace_with(&mut ast, import).unwrap());
    assert!(!unit.remove(&mut ast).unwrap());
}
