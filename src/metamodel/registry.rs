//! The process-wide metamodel registry.
//!
//! Built once from [`DECLARATIONS`] the first time it is touched, then
//! shared read-only by every tree on every thread.

use std::sync::LazyLock;

use rustc_hash::FxHashMap;
use tracing::debug;

use super::class::ClassMetaModel;
use super::declarations::{DECLARATIONS, TypeDecl};
use super::error::MetaModelError;
use super::node_type::{NodeType, Property};
use super::property::PropertyMetaModel;

static REGISTRY: LazyLock<MetaModelRegistry> = LazyLock::new(|| {
    match MetaModelRegistry::build(DECLARATIONS).and_then(MetaModelRegistry::complete) {
        Ok(registry) => registry,
        Err(err) => panic!("metamodel registry construction failed: {err}"),
    }
});

/// The global registry, built on first access.
///
/// # Panics
///
/// Panics on first access if the registration table is malformed. This is
/// a defect in the crate itself, not a recoverable condition.
pub fn registry() -> &'static MetaModelRegistry {
    &REGISTRY
}

/// Shorthand for `registry().class(node_type)`.
pub fn meta_model(node_type: NodeType) -> &'static ClassMetaModel {
    registry().class(node_type)
}

/// Table from node type to its [`ClassMetaModel`].
#[derive(Debug, Clone)]
pub struct MetaModelRegistry {
    /// Descriptors in build order (every supertype before its subtypes).
    classes: Vec<ClassMetaModel>,
    index: FxHashMap<NodeType, usize>,
}

#[derive(Clone, Copy, PartialEq, Eq)]
enum Visit {
    InProgress,
    Done,
}

impl MetaModelRegistry {
    /// Build a registry from registration statements.
    ///
    /// Declarations are processed depth-first along supertype links, so
    /// they may be listed in any order. Construction either fully succeeds
    /// or returns the first defect found.
    pub fn build(decls: &[TypeDecl]) -> Result<Self, MetaModelError> {
        let mut by_type: FxHashMap<NodeType, &TypeDecl> = FxHashMap::default();
        for decl in decls {
            if decl.supertype == Some(decl.node_type) {
                return Err(MetaModelError::SelfSupertype(decl.node_type));
            }
            if by_type.insert(decl.node_type, decl).is_some() {
                return Err(MetaModelError::DuplicateType(decl.node_type));
            }
        }

        let mut registry = Self {
            classes: Vec::with_capacity(decls.len()),
            index: FxHashMap::default(),
        };
        let mut state: FxHashMap<NodeType, Visit> = FxHashMap::default();

        for decl in decls {
            registry.visit(decl, &by_type, &mut state)?;
        }

        debug!(types = registry.classes.len(), "metamodel registry built");
        Ok(registry)
    }

    /// Require a registration for every node type the crate knows.
    pub fn complete(self) -> Result<Self, MetaModelError> {
        match NodeType::ALL
            .iter()
            .find(|node_type| !self.index.contains_key(*node_type))
        {
            Some(missing) => Err(MetaModelError::Unregistered(*missing)),
            None => Ok(self),
        }
    }

    fn visit(
        &mut self,
        decl: &TypeDecl,
        by_type: &FxHashMap<NodeType, &TypeDecl>,
        state: &mut FxHashMap<NodeType, Visit>,
    ) -> Result<(), MetaModelError> {
        match state.get(&decl.node_type) {
            Some(Visit::Done) => return Ok(()),
            Some(Visit::InProgress) => {
                return Err(MetaModelError::InheritanceCycle(decl.node_type));
            }
            None => {}
        }
        state.insert(decl.node_type, Visit::InProgress);

        if let Some(supertype) = decl.supertype {
            let super_decl =
                by_type
                    .get(&supertype)
                    .ok_or(MetaModelError::MissingSupertype {
                        node_type: decl.node_type,
                        supertype,
                    })?;
            self.visit(super_decl, by_type, state)?;
        }

        let class = self.build_class(decl)?;
        self.index.insert(decl.node_type, self.classes.len());
        self.classes.push(class);
        state.insert(decl.node_type, Visit::Done);
        Ok(())
    }

    fn build_class(&self, decl: &TypeDecl) -> Result<ClassMetaModel, MetaModelError> {
        let supertype = decl.supertype.and_then(|supertype| self.try_class(supertype));

        // name -> declaring type, seeded with the inherited properties
        let mut seen: FxHashMap<Property, NodeType> = supertype
            .map(|parent| {
                parent
                    .all_property_meta_models()
                    .iter()
                    .map(|meta| (meta.property(), meta.declaring_type()))
                    .collect()
            })
            .unwrap_or_default();

        let mut declared = Vec::new();
        let mut derived = Vec::new();
        for property_decl in decl.properties {
            let meta = PropertyMetaModel::analyze(decl.node_type, property_decl)?;
            if let Some(declared_by) = seen.insert(meta.property(), decl.node_type) {
                return Err(MetaModelError::DuplicateProperty {
                    node_type: decl.node_type,
                    property: meta.property(),
                    declared_by,
                });
            }
            if meta.is_derived() {
                derived.push(meta);
            } else {
                declared.push(meta);
            }
        }

        Ok(ClassMetaModel::new(
            decl.node_type,
            supertype,
            decl.is_abstract,
            declared,
            derived,
        ))
    }

    /// Descriptor of `node_type`.
    ///
    /// # Panics
    ///
    /// Panics with "unknown node type" if the type was never registered.
    pub fn class(&self, node_type: NodeType) -> &ClassMetaModel {
        match self.try_class(node_type) {
            Some(class) => class,
            None => panic!("unknown node type: {node_type} has no metamodel"),
        }
    }

    pub fn try_class(&self, node_type: NodeType) -> Option<&ClassMetaModel> {
        self.index.get(&node_type).map(|&idx| &self.classes[idx])
    }

    /// All descriptors, supertypes before subtypes.
    pub fn classes(&self) -> impl Iterator<Item = &ClassMetaModel> + '_ {
        self.classes.iter()
    }

    /// Descriptors of every registered type inheriting from `node_type`,
    /// excluding `node_type` itself.
    pub fn subtypes_of(&self, node_type: NodeType) -> impl Iterator<Item = &ClassMetaModel> + '_ {
        self.classes
            .iter()
            .filter(move |class| class.node_type() != node_type && class.is_subtype_of(node_type))
    }

    pub fn is_subtype(&self, node_type: NodeType, of: NodeType) -> bool {
        self.try_class(node_type)
            .is_some_and(|class| class.is_subtype_of(of))
    }

    pub fn len(&self) -> usize {
        self.classes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.classes.is_empty()
    }
}
