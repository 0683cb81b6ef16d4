use smol_str::SmolStr;

use super::text;
use crate::ast::{Ast, AstError};
use crate::metamodel::{NodeType, Property};

ast_node!(
    /// Any comment attached to a node.
    Comment
);
ast_node!(LineComment);
ast_node!(BlockComment);
ast_node!(JavadocComment);

upcast!(Comment: LineComment, BlockComment, JavadocComment);

impl Comment {
    str_property!(content, set_content, Content);

    pub fn is_javadoc(&self, ast: &Ast) -> bool {
        ast.node_type(self.0) == NodeType::JavadocComment
    }
}

macro_rules! comment_kind {
    ($($name:ident),+) => {
        $(
            impl $name {
                pub fn new(ast: &mut Ast, content: impl Into<SmolStr>) -> Result<Self, AstError> {
                    ast.create(NodeType::$name, vec![(Property::Content, text(content))])
                        .map(Self)
                }

                str_property!(content, set_content, Content);
            }
        )+
    };
}

comment_kind!(LineComment, BlockComment, JavadocComment);
