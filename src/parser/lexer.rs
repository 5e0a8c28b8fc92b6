//! Tokenizer: splits a whitespace-stripped input into literal and
//! single-character tokens.

use crate::config::InputFormat;
use crate::error::CalcError;
use crate::literal;
use crate::parser::tokens::{BinOp, Bracket, Token};

/// Lex `input` into tokens, decoding literals as they are flushed.
///
/// All whitespace is removed before scanning, so `1 2` is the single
/// literal `12`. A run of ASCII digits, `.`, and ASCII letters accumulates
/// into one literal token, flushed the moment a non-matching character is
/// met; every other character is emitted on its own. Unrecognized
/// characters are passed through as [`Token::Unknown`] rather than
/// rejected here.
pub(crate) fn lex(input: &str, format: InputFormat) -> Result<Vec<Token>, CalcError> {
    let mut tokens = Vec::new();
    let mut run = String::new();

    for c in input.chars() {
        if c.is_whitespace() {
            continue;
        }
        if c.is_ascii_alphanumeric() || c == '.' {
            run.push(c);
            continue;
        }
        flush(&mut run, &mut tokens, format)?;
        tokens.push(match c {
            '(' => Token::Open(Bracket::Paren),
            '[' => Token::Open(Bracket::Square),
            '{' => Token::Open(Bracket::Curly),
            ')' => Token::Close(Bracket::Paren),
            ']' => Token::Close(Bracket::Square),
            '}' => Token::Close(Bracket::Curly),
            '+' => Token::Op(BinOp::Add),
            '-' => Token::Op(BinOp::Sub),
            '*' | '×' => Token::Op(BinOp::Mul),
            '/' | '÷' => Token::Op(BinOp::Div),
            '%' => Token::Op(BinOp::Rem),
            '^' => Token::Op(BinOp::Pow),
            other => Token::Unknown(other),
        });
    }
    flush(&mut run, &mut tokens, format)?;

    Ok(tokens)
}

fn flush(
    run: &mut String,
    tokens: &mut Vec<Token>,
    format: InputFormat,
) -> Result<(), CalcError> {
    if run.is_empty() {
        return Ok(());
    }
    let value = literal::decode(run, format)?;
    tokens.push(Token::Number(value));
    run.clear();
    Ok(())
}
