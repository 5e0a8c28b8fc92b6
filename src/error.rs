use std::fmt;

/// Errors that can occur while lexing, building, or reducing an expression
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CalcError {
    /// Input contained no tokens, or a bracket group was empty
    EmptyExpression,
    /// A literal failed numeric decoding, or a character is not part of the
    /// accepted alphabet
    InvalidLiteral { literal: String },
    /// A token arrived where the grammar does not allow it (stray closing
    /// bracket, operator with no left operand, doubled binary operator)
    UnexpectedToken { token: String },
    /// An opening bracket was never closed
    UnterminatedGroup,
    /// An operator was still missing an operand when the tree was reduced
    IncompleteExpression,

    // Safety limits
    /// Bracket nesting or tree depth exceeded the configured limit
    NestingTooDeep { limit: usize },

    /// Custom-base formatting with a radix outside `2..=36`
    InvalidRadix { radix: u32 },
}

impl CalcError {
    /// Create `InvalidLiteral` from the offending text
    pub(crate) fn invalid_literal(literal: impl Into<String>) -> Self {
        CalcError::InvalidLiteral {
            literal: literal.into(),
        }
    }

    /// Create `UnexpectedToken` from the offending token
    pub(crate) fn unexpected_token(token: impl fmt::Display) -> Self {
        CalcError::UnexpectedToken {
            token: token.to_string(),
        }
    }
}

impl fmt::Display for CalcError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CalcError::EmptyExpression => write!(f, "Expression cannot be empty"),
            CalcError::InvalidLiteral { literal } => {
                write!(f, "Invalid literal: '{}'", literal)
            }
            CalcError::UnexpectedToken { token } => {
                write!(f, "Unexpected token: '{}'", token)
            }
            CalcError::UnterminatedGroup => {
                write!(f, "Bracket group is never closed")
            }
            CalcError::IncompleteExpression => {
                write!(f, "Expression ends with a dangling operator")
            }
            CalcError::NestingTooDeep { limit } => {
                write!(f, "Expression nesting exceeds the depth limit of {}", limit)
            }
            CalcError::InvalidRadix { radix } => {
                write!(f, "Radix {} is outside the supported range 2..=36", radix)
            }
        }
    }
}

impl std::error::Error for CalcError {}
