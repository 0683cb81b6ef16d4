use super::{Expression, ids};
use crate::ast::{Ast, AstError};
use crate::metamodel::{NodeType, Property};

ast_node!(Statement);
ast_node!(
    /// `{ statements }`
    BlockStmt
);
ast_node!(ExpressionStmt);
ast_node!(ReturnStmt);

upcast!(Statement: BlockStmt, ExpressionStmt, ReturnStmt);

impl BlockStmt {
    pub fn new(ast: &mut Ast, statements: Vec<Statement>) -> Result<Self, AstError> {
        ast.create(NodeType::BlockStmt, vec![(Property::Statements, ids(statements))])
            .map(Self)
    }

    list_property!(statements, add_statement, Statements, Statement);
}

impl ExpressionStmt {
    pub fn new(ast: &mut Ast, expression: impl Into<Expression>) -> Result<Self, AstError> {
        let expression: Expression = expression.into();
        ast.create(
            NodeType::ExpressionStmt,
            vec![(Property::Expression, expression.0.into())],
        )
        .map(Self)
    }

    node_property!(expression, set_expression, Expression, Expression);
}

impl ReturnStmt {
    pub fn new(ast: &mut Ast, expression: Option<Expression>) -> Result<Self, AstError> {
        let properties = match expression {
            Some(expression) => vec![(Property::Expression, expression.0.into())],
            None => Vec::new(),
        };
        ast.create(NodeType::ReturnStmt, properties).map(Self)
    }

    optional_node_property!(expression, set_expression, Expression, Expression);
}
