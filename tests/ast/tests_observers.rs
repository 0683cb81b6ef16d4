#![allow(clippy::unwrap_used)]

use std::sync::Arc;

use jparse::ast::nodes::AstNode;
use jparse::ast::{Ast, AstError, AstEvent, AstObserver, ChangeLog, ObserverError, Value};
use jparse::metamodel::Property;
use parking_lot::Mutex;

use crate::helpers::fixtures::{list_import, unit_with_import, veto};

#[test]
fn test_set_static_notifies_observer_with_old_and_new() {
    let mut ast = Ast::new();
    let import = list_import(&mut ast);
    assert_eq!(import.name(&ast).as_string(&ast), "java.util.List");
    assert!(!import.is_static(&ast));
    assert!(!import.is_asterisk(&ast));
    let log = ChangeLog::new();
    ast.register_observer(&log);

    import.set_static(&mut ast, true).unwrap();

    assert!(import.is_static(&ast));
    assert_eq!(
        log.property_changes(),
        vec![AstEvent::PropertyChange {
            node: import.id(),
            property: Property::Static,
            old: Value::Bool(false),
            new: Value::Bool(true),
        }]
    );

    import.set_static(&mut ast, true).unwrap();
    assert_eq!(log.len(), 1);
}

#[test]
fn test_setting_unchanged_value_is_silent() {
    let mut ast = Ast::new();
    let import = list_import(&mut ast);
    let log = ChangeLog::new();
    ast.register_observer(&log);

    import.set_static(&mut ast, false).unwrap();
    import.set_asterisk(&mut ast, false).unwrap();

    assert!(log.is_empty());
}

/// Records what the tree looked like when each event arrived.
#[derive(Default)]
struct SeenBefore {
    values: Mutex<Vec<Value>>,
}

impl AstObserver for SeenBefore {
    fn notify(&self, ast: &Ast, event: &AstEvent) -> Result<(), ObserverError> {
        if let AstEvent::PropertyChange { node, property, .. } = event {
            let current = ast.get(*node, *property).map_err(|e| ObserverError::new(e.to_string()))?;
            self.values.lock().push(current.clone());
        }
        Ok(())
    }
}

#[test]
fn test_observer_sees_tree_before_commit() {
    let mut ast = Ast::new();
    let import = list_import(&mut ast);
    let seen = Arc::new(SeenBefore::default());
    ast.register_observer(&seen);

    import.set_static(&mut ast, true).unwrap();

    assert_eq!(*seen.values.lock(), vec![Value::Bool(false)]);
}

#[test]
fn test_failing_observer_leaves_tree_unchanged() {
    let mut ast = Ast::new();
    let (unit, import) = unit_with_import(&mut ast);
    let refuse = veto();
    ast.register_observer(&refuse);

    let err = import.set_static(&mut ast, true).unwrap_err();
    assert!(matches!(err, AstError::Observer(_)));
    assert!(!import.is_static(&ast));

    let err = import.remove(&mut ast).unwrap_err();
    assert!(matches!(err, AstError::Observer(_)));
    assert_eq!(unit.imports(&ast), vec![import]);
    assert_eq!(import.parent(&ast), Some(unit.id()));
}

#[test]
fn test_all_observers_notified_in_registration_order() {
    let mut ast = Ast::new();
    let import = list_import(&mut ast);
    let first = ChangeLog::new();
    let second = ChangeLog::new();
    ast.register_observer(&first);
    ast.register_observer(&second);

    import.set_asterisk(&mut ast, true).unwrap();

    assert_eq!(first.events(), second.events());
    assert_eq!(first.len(), 1);
}

#[test]
fn test_observers_are_per_tree() {
    let mut ast = Ast::new();
    let mut other = Ast::new();
    let import = list_import(&mut ast);
    let other_import = list_import(&mut other);
    let log = ChangeLog::new();
    ast.register_observer(&log);

    other_import.set_static(&mut other, true).unwrap();
    assert!(log.is_empty());

    import.set_static(&mut ast, true).unwrap();
    assert_eq!(log.len(), 1);
}

#[test]
fn test_list_removal_reports_index_and_parent_change() {
    let mut ast = Ast::new();
    let (unit, import) = unit_with_import(&mut ast);
    let log = ChangeLog::new();
    ast.register_observer(&log);

    assert!(import.remove(&mut ast).unwrap());

    let events = log.events();
    assert_eq!(events.len(), 2);
    assert!(matches!(
        events[0],
        AstEvent::ListChange { node, index: 0, .. } if node == unit.id()
    ));
    assert_eq!(
        events[1],
        AstEvent::ParentChange {
            node: import.id(),
            old_parent: Some(unit.id()),
            new_parent: None,
        }
    );
}
