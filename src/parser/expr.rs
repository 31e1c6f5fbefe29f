use crate::{
    ast::{ast::Expr, expressions::ValueExpr, values::Value},
    errors::errors::{Error, ErrorImpl},
    lexer::tokens::{Token, TokenKind},
};

use super::parser::Parser;

/// Parses an optional expression. A `,`, `;` or `)` means there is none, and
/// is left for the caller.
pub fn parse_expr(parser: &mut Parser) -> Result<Option<Expr>, Error> {
    let token = parser.expect_current_token()?;
    if token.is_one_of_many(&[
        TokenKind::Comma,
        TokenKind::Semicolon,
        TokenKind::ParensClose,
    ]) {
        return Ok(None);
    }

    parser.advance()?;
    let value = to_value(&token)?;

    Ok(Some(Expr::Value(ValueExpr {
        value,
        position: token.position,
    })))
}

pub fn to_value(token: &Token) -> Result<Value, Error> {
    match token.kind {
        TokenKind::String => Ok(Value::String(token.value.clone())),
        TokenKind::Number => token
            .value
            .parse::<i64>()
            .map(Value::Int)
            .map_err(|_| Error::at_token(ErrorImpl::NumberParseError, token)),
        TokenKind::Text => match token.value.as_str() {
            "true" => Ok(Value::Bool(true)),
            "false" => Ok(Value::Bool(false)),
            text if text.starts_with(|c: char| c.is_ascii_digit()) => {
                Err(Error::at_token(ErrorImpl::NumberParseError, token))
            }
            _ => Err(Error::at_token(ErrorImpl::UnconvertibleValue, token)),
        },
        found => Err(Error::at_token(ErrorImpl::ExpectedConstant { found }, token)),
    }
}
