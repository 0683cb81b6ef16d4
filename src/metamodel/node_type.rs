//! Identities of node types and of their properties.

macro_rules! node_types {
    ($($name:ident),* $(,)?) => {
        /// Identity of a node type, abstract or concrete.
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
        #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
        pub enum NodeType {
            $($name,)*
        }

        impl NodeType {
            /// Every node type known to the crate, in declaration order.
            pub const ALL: &'static [NodeType] = &[$(NodeType::$name,)*];

            pub fn name(self) -> &'static str {
                match self {
                    $(NodeType::$name => stringify!($name),)*
                }
            }
        }
    };
}

macro_rules! properties {
    ($($name:ident => $text:literal),* $(,)?) => {
        /// Identifier of an observable property.
        ///
        /// The same identifier may be declared by unrelated node types
        /// (`expression` on both `ExpressionStmt` and `UnaryExpr`); the
        /// metamodel of the declaring type gives it its shape.
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
        #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
        pub enum Property {
            $($name,)*
        }

        impl Property {
            pub const ALL: &'static [Property] = &[$(Property::$name,)*];

            pub fn name(self) -> &'static str {
                match self {
                    $(Property::$name => $text,)*
                }
            }

            /// Look a property up by its snake_case name.
            pub fn from_name(name: &str) -> Option<Property> {
                match name {
                    $($text => Some(Property::$name),)*
                    _ => None,
                }
            }
        }
    };
}

node_types! {
    Node,
    Comment,
    LineComment,
    BlockComment,
    JavadocComment,
    CompilationUnit,
    PackageDeclaration,
    ImportDeclaration,
    Name,
    SimpleName,
    BodyDeclaration,
    TypeDeclaration,
    ClassOrInterfaceDeclaration,
    MethodDeclaration,
    Parameter,
    Statement,
    BlockStmt,
    ExpressionStmt,
    ReturnStmt,
    Expression,
    NameExpr,
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
}

properties! {
    Comment => "comment",
    Content => "content",
    PackageDeclaration => "package_declaration",
    Imports => "imports",
    Types => "types",
    PrimaryType => "primary_type",
    Name => "name",
    Static => "is_static",
    Asterisk => "is_asterisk",
    Qualifier => "qualifier",
    Identifier => "identifier",
    Qualified => "qualified",
    Members => "members",
    Interface => "is_interface",
    Parameters => "parameters",
    Body => "body",
    TypeName => "type_name",
    Statements => "statements",
    Expression => "expression",
    Left => "left",
    Right => "right",
    Operator => "operator",
    Inner => "inner",
    Scope => "scope",
    Arguments => "arguments",
    Value => "value",
}

/// Leaf value kinds a property may hold instead of a node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PrimitiveType {
    Bool,
    String,
    BinaryOperator,
    UnaryOperator,
}

impl PrimitiveType {
    pub fn name(self) -> &'static str {
        match self {
            Self::Bool => "bool",
            Self::String => "String",
            Self::BinaryOperator => "BinaryOperator",
            Self::UnaryOperator => "UnaryOperator",
        }
    }
}

impl std::fmt::Display for NodeType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl std::fmt::Display for Property {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
