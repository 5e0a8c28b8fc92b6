//! Token and operator definitions shared by the lexer and the tree builder.

use std::fmt;

/// Binary operator recognized by the builder
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum BinOp {
    Add,
    Sub,
    Mul,
    Div,
    Rem,
    Pow,
}

impl BinOp {
    /// Precedence rank used for climbing; a lower rank binds tighter.
    /// Operands use the sentinel rank 0 (see `Payload::priority`).
    pub(crate) fn priority(self) -> u8 {
        match self {
            BinOp::Pow => 1,
            BinOp::Mul | BinOp::Div | BinOp::Rem => 2,
            BinOp::Add | BinOp::Sub => 3,
        }
    }

    pub(crate) fn symbol(self) -> char {
        match self {
            BinOp::Add => '+',
            BinOp::Sub => '-',
            BinOp::Mul => '*',
            BinOp::Div => '/',
            BinOp::Rem => '%',
            BinOp::Pow => '^',
        }
    }
}

impl fmt::Display for BinOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// Grouping characters. Any closer matches any opener; the kind is kept
/// only for error messages.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Bracket {
    Paren,
    Square,
    Curly,
}

impl Bracket {
    pub(crate) fn closer(self) -> char {
        match self {
            Bracket::Paren => ')',
            Bracket::Square => ']',
            Bracket::Curly => '}',
        }
    }
}

/// Atomic lexical unit. Literals are decoded once, at lexing; the builder
/// never re-inspects their text.
#[derive(Clone, Debug, PartialEq)]
pub(crate) enum Token {
    Number(f64),
    Op(BinOp),
    Open(Bracket),
    Close(Bracket),
    /// Unrecognized character, passed through for the builder to reject
    Unknown(char),
}
