//! Operator enums stored as primitive property values.

use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum BinaryOperator {
    Or,
    And,
    BinaryOr,
    BinaryAnd,
    Xor,
    Equals,
    NotEquals,
    Less,
    Greater,
    LessEquals,
    GreaterEquals,
    LeftShift,
    SignedRightShift,
    UnsignedRightShift,
    Plus,
    Minus,
    Multiply,
    Divide,
    Remainder,
}

impl BinaryOperator {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Or => "||",
            Self::And => "&&",
            Self::BinaryOr => "|",
            Self::BinaryAnd => "&",
            Self::Xor => "^",
            Self::Equals => "==",
            Self::NotEquals => "!=",
            Self::Less => "<",
            Self::Greater => ">",
            Self::LessEquals => "<=",
            Self::GreaterEquals => ">=",
            Self::LeftShift => "<<",
            Self::SignedRightShift => ">>",
            Self::UnsignedRightShift => ">>>",
            Self::Plus => "+",
            Self::Minus => "-",
            Self::Multiply => "*",
            Self::Divide => "/",
            Self::Remainder => "%",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum UnaryOperator {
    Plus,
    Minus,
    PrefixIncrement,
    PrefixDecrement,
    LogicalComplement,
    BitwiseComplement,
    PostfixIncrement,
    PostfixDecrement,
}

impl UnaryOperator {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Plus => "+",
            Self::Minus => "-",
            Self::PrefixIncrement | Self::PostfixIncrement => "++",
            Self::PrefixDecrement | Self::PostfixDecrement => "--",
            Self::LogicalComplement => "!",
            Self::BitwiseComplement => "~",
        }
    }

    pub fn is_postfix(self) -> bool {
        matches!(self, Self::PostfixIncrement | Self::PostfixDecrement)
    }
}

impl fmt::Display for BinaryOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for UnaryOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
