use super::{BlockStmt, Name, SimpleName, ids};
use crate::ast::{Ast, AstError, Value};
use crate::metamodel::{NodeType, Property};

ast_node!(
    /// Any member of a type body.
    BodyDeclaration
);
ast_node!(
    /// A named type with members.
    TypeDeclaration
);
ast_node!(ClassOrInterfaceDeclaration);
ast_node!(MethodDeclaration);
ast_node!(Parameter);

upcast!(BodyDeclaration: TypeDeclaration, ClassOrInterfaceDeclaration, MethodDeclaration);
upcast!(TypeDeclaration: ClassOrInterfaceDeclaration);

impl TypeDeclaration {
    node_property!(name, set_name, Name, SimpleName);
    list_property!(members, add_member, Members, BodyDeclaration);
}

impl ClassOrInterfaceDeclaration {
    pub fn new(ast: &mut Ast, is_interface: bool, name: SimpleName) -> Result<Self, AstError> {
        ast.create(
            NodeType::ClassOrInterfaceDeclaration,
            vec![
                (Property::Name, name.0.into()),
                (Property::Interface, Value::Bool(is_interface)),
            ],
        )
        .map(Self)
    }

    node_property!(name, set_name, Name, SimpleName);
    list_property!(members, add_member, Members, BodyDeclaration);
    bool_property!(is_interface, set_interface, Interface);
}

impl MethodDeclaration {
    pub fn new(
        ast: &mut Ast,
        name: SimpleName,
        parameters: Vec<Parameter>,
        body: Option<BlockStmt>,
    ) -> Result<Self, AstError> {
        let mut properties = vec![
            (Property::Name, name.0.into()),
            (Property::Parameters, ids(parameters)),
        ];
        if let Some(body) = body {
            properties.push((Property::Body, body.0.into()));
        }
        ast.create(NodeType::MethodDeclaration, properties).map(Self)
    }

    node_property!(name, set_name, Name, SimpleName);
    list_property!(parameters, add_parameter, Parameters, Parameter);
    optional_node_property!(body, set_body, Body, BlockStmt);
}

impl Parameter {
    pub fn new(ast: &mut Ast, type_name: Name, name: SimpleName) -> Result<Self, AstError> {
        ast.create(
            NodeType::Parameter,
            vec![
                (Property::TypeName, type_name.0.into()),
                (Property::Name, name.0.into()),
            ],
        )
        .map(Self)
    }

    node_property!(type_name, set_type_name, TypeName, Name);
    node_property!(name, set_name, Name, SimpleName);
}
