use smol_str::SmolStr;

use super::{SimpleName, ids, text};
use crate::ast::{Ast, AstError, BinaryOperator, UnaryOperator, Value};
use crate::metamodel::{NodeType, Property};

ast_node!(Expression);
ast_node!(NameExpr);
ast_node!(
    /// `left operator right`
    BinaryExpr
);
ast_node!(UnaryExpr);
ast_node!(
    /// A parenthesized expression.
    EnclosedExpr
);
ast_node!(
    /// `[scope.]name(arguments)`
    MethodCallExpr
);
ast_node!(
    /// A location-set literal `name[arguments]`; holds at least one argument
    /// in a valid tree.
    LocationSetConstructorExpr
);
ast_node!(LiteralExpr);
ast_node!(BooleanLiteralExpr);
ast_node!(
    /// A literal whose value is kept as source text.
    LiteralStringValueExpr
);
ast_node!(IntegerLiteralExpr);
ast_node!(StringLiteralExpr);

upcast!(
    Expression: NameExpr,
    BinaryExpr,
    UnaryExpr,
    EnclosedExpr,
    MethodCallExpr,
    LocationSetConstructorExpr,
    LiteralExpr,
    BooleanLiteralExpr,
    LiteralStringValueExpr,
    IntegerLiteralExpr,
    StringLiteralExpr,
);
upcast!(
    LiteralExpr: BooleanLiteralExpr,
    LiteralStringValueExpr,
    IntegerLiteralExpr,
    StringLiteralExpr,
);
upcast!(LiteralStringValueExpr: IntegerLiteralExpr, StringLiteralExpr);

fn node(expression: impl Into<Expression>) -> Value {
    Value::Node(expression.into().0)
}

impl NameExpr {
    pub fn new(ast: &mut Ast, name: SimpleName) -> Result<Self, AstError> {
        ast.create(NodeType::NameExpr, vec![(Property::Name, name.0.into())])
            .map(Self)
    }

    node_property!(name, set_name, Name, SimpleName);
}

impl BinaryExpr {
    pub fn new(
        ast: &mut Ast,
        left: impl Into<Expression>,
        right: impl Into<Expression>,
        operator: BinaryOperator,
    ) -> Result<Self, AstError> {
        ast.create(
            NodeType::BinaryExpr,
            vec![
                (Property::Left, node(left)),
                (Property::Right, node(right)),
                (Property::Operator, operator.into()),
            ],
        )
        .map(Self)
    }

    node_property!(left, set_left, Left, Expression);
    node_property!(right, set_right, Right, Expression);

    pub fn operator(&self, ast: &Ast) -> Option<BinaryOperator> {
        ast.get(self.0, Property::Operator)
            .ok()
            .and_then(Value::as_binary_operator)
    }

    pub fn set_operator(&self, ast: &mut Ast, operator: BinaryOperator) -> Result<(), AstError> {
        ast.set(self.0, Property::Operator, operator.into())
    }
}

impl UnaryExpr {
    pub fn new(
        ast: &mut Ast,
        expression: impl Into<Expression>,
        operator: UnaryOperator,
    ) -> Result<Self, AstError> {
        ast.create(
            NodeType::UnaryExpr,
            vec![
                (Property::Expression, node(expression)),
                (Property::Operator, operator.into()),
            ],
        )
        .map(Self)
    }

    node_property!(expression, set_expression, Expression, Expression);

    pub fn operator(&self, ast: &Ast) -> Option<UnaryOperator> {
        ast.get(self.0, Property::Operator)
            .ok()
            .and_then(Value::as_unary_operator)
    }

    pub fn set_operator(&self, ast: &mut Ast, operator: UnaryOperator) -> Result<(), AstError> {
        ast.set(self.0, Property::Operator, operator.into())
    }
}

impl EnclosedExpr {
    pub fn new(ast: &mut Ast, inner: impl Into<Expression>) -> Result<Self, AstError> {
        ast.create(NodeType::EnclosedExpr, vec![(Property::Inner, node(inner))])
            .map(Self)
    }

    node_property!(inner, set_inner, Inner, Expression);
}

impl MethodCallExpr {
    pub fn new(
        ast: &mut Ast,
        scope: Option<Expression>,
        name: SimpleName,
        arguments: Vec<Expression>,
    ) -> Result<Self, AstError> {
        let mut properties = vec![
            (Property::Name, name.0.into()),
            (Property::Arguments, ids(arguments)),
        ];
        if let Some(scope) = scope {
            properties.push((Property::Scope, scope.0.into()));
        }
        ast.create(NodeType::MethodCallExpr, properties).map(Self)
    }

    optional_node_property!(scope, set_scope, Scope, Expression);
    node_property!(name, set_name, Name, SimpleName);
    list_property!(arguments, add_argument, Arguments, Expression);
}

impl LocationSetConstructorExpr {
    pub fn new(
        ast: &mut Ast,
        name: SimpleName,
        arguments: Vec<Expression>,
    ) -> Result<Self, AstError> {
        ast.create(
            NodeType::LocationSetConstructorExpr,
            vec![
                (Property::Name, name.0.into()),
                (Property::Arguments, ids(arguments)),
            ],
        )
        .map(Self)
    }

    node_property!(name, set_name, Name, SimpleName);
    list_property!(arguments, add_argument, Arguments, Expression);
}

impl BooleanLiteralExpr {
    pub fn new(ast: &mut Ast, value: bool) -> Result<Self, AstError> {
        ast.create(NodeType::BooleanLiteralExpr, vec![(Property::Value, Value::Bool(value))])
            .map(Self)
    }

    bool_property!(value, set_value, Value);
}

impl LiteralStringValueExpr {
    str_property!(value, set_value, Value);
}

impl IntegerLiteralExpr {
    pub fn new(ast: &mut Ast, value: impl Into<SmolStr>) -> Result<Self, AstError> {
        ast.create(NodeType::IntegerLiteralExpr, vec![(Property::Value, text(value))])
            .map(Self)
    }

    str_property!(value, set_value, Value);

    /// The literal as a number; `None` if it does not fit or is malformed.
    pub fn as_i64(&self, ast: &Ast) -> Option<i64> {
        let digits = self.value(ast).replace('_', "");
        let digits = digits.trim_end_matches(['l', 'L']);
        match digits.strip_prefix("0x").or_else(|| digits.strip_prefix("0X")) {
            Some(hex) => i64::from_str_radix(hex, 16).ok(),
            None => digits.parse().ok(),
        }
    }
}

impl StringLiteralExpr {
    pub fn new(ast: &mut Ast, value: impl Into<SmolStr>) -> Result<Self, AstError> {
        ast.create(NodeType::StringLiteralExpr, vec![(Property::Value, text(value))])
            .map(Self)
    }

    str_property!(value, set_value, Value);
}
