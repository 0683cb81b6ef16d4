use super::{Name, TypeDeclaration, ids};
use crate::ast::{Ast, AstError, Value};
use crate::metamodel::{NodeType, Property};

ast_node!(
    /// Root of one source file: package, imports, type declarations.
    CompilationUnit
);
ast_node!(PackageDeclaration);
ast_node!(
    /// `import [static] name[.*];`
    ImportDeclaration
);

impl CompilationUnit {
    pub fn new(
        ast: &mut Ast,
        package_declaration: Option<PackageDeclaration>,
        imports: Vec<ImportDeclaration>,
        types: Vec<TypeDeclaration>,
    ) -> Result<Self, AstError> {
        let mut properties = vec![
            (Property::Imports, ids(imports)),
            (Property::Types, ids(types)),
        ];
        if let Some(package) = package_declaration {
            properties.push((Property::PackageDeclaration, package.0.into()));
        }
        ast.create(NodeType::CompilationUnit, properties).map(Self)
    }

    optional_node_property!(
        package_declaration,
        set_package_declaration,
        PackageDeclaration,
        PackageDeclaration
    );
    list_property!(imports, add_import, Imports, ImportDeclaration);
    list_property!(types, add_type, Types, TypeDeclaration);

    /// The first declared type, if any.
    ///
    /// The tree carries no file name, so this is positional. Use
    /// [`CompilationUnit::type_named`] with the file stem to find the public
    /// type a source file is named after.
    pub fn primary_type(&self, ast: &Ast) -> Option<TypeDeclaration> {
        ast.derived(self.0, Property::PrimaryType)
            .ok()
            .and_then(|value| value.as_node())
            .map(TypeDeclaration)
    }

    /// The declared type whose simple name is `name`.
    pub fn type_named(&self, ast: &Ast, name: &str) -> Option<TypeDeclaration> {
        self.types(ast)
            .into_iter()
            .find(|declaration| declaration.name(ast).identifier(ast) == name)
    }
}

impl PackageDeclaration {
    pub fn new(ast: &mut Ast, name: Name) -> Result<Self, AstError> {
        ast.create(NodeType::PackageDeclaration, vec![(Property::Name, name.0.into())])
            .map(Self)
    }

    node_property!(name, set_name, Name, Name);
}

impl ImportDeclaration {
    pub fn new(
        ast: &mut Ast,
        name: Name,
        is_static: bool,
        is_asterisk: bool,
    ) -> Result<Self, AstError> {
        ast.create(
            NodeType::ImportDeclaration,
            vec![
                (Property::Name, name.0.into()),
                (Property::Static, Value::Bool(is_static)),
                (Property::Asterisk, Value::Bool(is_asterisk)),
            ],
        )
        .map(Self)
    }

    node_property!(name, set_name, Name, Name);
    bool_property!(is_static, set_static, Static);
    bool_property!(is_asterisk, set_asterisk, Asterisk);
}
