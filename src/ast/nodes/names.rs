use smol_str::SmolStr;

use super::text;
use crate::ast::tree::is_identifier;
use crate::ast::{Ast, AstError};
use crate::metamodel::{NodeType, Property};

ast_node!(
    /// A possibly qualified name such as `java.util.List`.
    ///
    /// The qualifier is itself a `Name`, so `java.util.List` is three nodes:
    /// `List` qualified by `util` qualified by `java`.
    Name
);
ast_node!(
    /// An unqualified identifier.
    SimpleName
);

impl Name {
    pub fn new(
        ast: &mut Ast,
        qualifier: Option<Name>,
        identifier: impl Into<SmolStr>,
    ) -> Result<Self, AstError> {
        let mut properties = vec![(Property::Identifier, text(identifier))];
        if let Some(qualifier) = qualifier {
            properties.push((Property::Qualifier, qualifier.0.into()));
        }
        ast.create(NodeType::Name, properties).map(Self)
    }

    /// Build the qualifier chain for a dotted name.
    ///
    /// Every segment is checked before the first node is created, so a
    /// rejected name leaves the arena untouched.
    pub fn parse(ast: &mut Ast, qualified: &str) -> Result<Self, AstError> {
        if let Some(bad) = qualified.split('.').find(|segment| !is_identifier(segment)) {
            return Err(AstError::InvalidIdentifier(bad.to_owned()));
        }
        let mut name = None;
        for segment in qualified.split('.') {
            name = Some(Name::new(ast, name, segment)?);
        }
        // `split` yields at least one segment
        name.ok_or_else(|| AstError::InvalidIdentifier(qualified.to_owned()))
    }

    optional_node_property!(qualifier, set_qualifier, Qualifier, Name);
    str_property!(identifier, set_identifier, Identifier);

    /// The dotted form, derived from the qualifier chain.
    pub fn as_string(&self, ast: &Ast) -> SmolStr {
        ast.qualified_name(self.0)
    }
}

impl SimpleName {
    pub fn new(ast: &mut Ast, identifier: impl Into<SmolStr>) -> Result<Self, AstError> {
        ast.create(NodeType::SimpleName, vec![(Property::Identifier, text(identifier))])
            .map(Self)
    }

    str_property!(identifier, set_identifier, Identifier);
}
