use crate::interpreter::{symbols::SlotId, value::operand::Operand};

/// One tokenized source statement, as kept in the program store.
///
/// The first operand is the callee; the rest are its arguments. Identifiers
/// are already resolved to slots, literals are owned values and
/// parenthesized expressions are kept as deferred-expression values.
#[derive(Debug, Clone, PartialEq)]
pub struct Line {
    /// Callee followed by arguments, in source order.
    pub tokens:  Vec<Operand>,
    /// Slot named after a `>` marker, receiving the call's return value.
    pub capture: Option<SlotId>,
    /// 1-based number of the source line this statement came from.
    pub line:    usize,
}

impl Line {
    /// The callee token, if the line has any token at all.
    #[must_use]
    pub fn callee(&self) -> Option<&Operand> {
        self.tokens.first()
    }

    /// The argument tokens.
    #[must_use]
    pub fn arguments(&self) -> &[Operand] {
        self.tokens.get(1..).unwrap_or_default()
    }
}

/// Represents a binary operator of the expression language.
///
/// Binary operators include arithmetic, comparisons and logical connectives.
/// Comparisons and connectives produce the integers `0` and `1`.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum BinaryOperator {
    /// Multiplication (`*`)
    Mul,
    /// Division (`/`)
    Div,
    /// Remainder (`%`)
    Mod,
    /// Addition (`+`)
    Add,
    /// Subtraction (`-`)
    Sub,
    /// Less than or equal (`<=`)
    LessEqual,
    /// Greater than or equal (`>=`)
    GreaterEqual,
    /// Less than (`<`)
    Less,
    /// Greater than (`>`)
    Greater,
    /// Equal to (`==`)
    Equal,
    /// Not equal to (`!=`)
    NotEqual,
    /// Logical and (`&&`)
    And,
    /// Logical or (`||`)
    Or,
}

/// Operators in precedence order, tightest first.
///
/// The evaluator applies every occurrence of the first entry, then every
/// occurrence of the second, and so on. Moving an entry changes the language's
/// precedence.
pub const OPERATOR_PRECEDENCE: &[BinaryOperator] = &[BinaryOperator::Mul,
                                                     BinaryOperator::Div,
                                                     BinaryOperator::Mod,
                                                     BinaryOperator::Add,
                                                     BinaryOperator::Sub,
                                                     BinaryOperator::LessEqual,
                                                     BinaryOperator::GreaterEqual,
                                                     BinaryOperator::Less,
                                                     BinaryOperator::Greater,
                                                     BinaryOperator::Equal,
                                                     BinaryOperator::NotEqual,
                                                     BinaryOperator::And,
                                                     BinaryOperator::Or];

impl BinaryOperator {
    /// Source spelling of the operator.
    #[must_use]
    pub const fn symbol(self) -> &'static str {
        match self {
            Self::Mul => "*",
            Self::Div => "/",
            Self::Mod => "%",
            Self::Add => "+",
            Self::Sub => "-",
            Self::LessEqual => "<=",
            Self::GreaterEqual => ">=",
            Self::Less => "<",
            Self::Greater => ">",
            Self::Equal => "==",
            Self::NotEqual => "!=",
            Self::And => "&&",
            Self::Or => "||",
        }
    }
}

impl std::fmt::Display for BinaryOperator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.symbol())
    }
}
