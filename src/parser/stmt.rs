use crate::{
    ast::{
        ast::Stmt,
        statements::{FnCallStmt, ReturnStmt},
    },
    errors::errors::{Error, ErrorImpl},
    lexer::tokens::{Token, TokenKind},
};

use super::{expr::parse_expr, parser::Parser};

pub fn parse_stmt(parser: &mut Parser) -> Result<Stmt, Error> {
    let token = parser.expect_current_token()?;

    match parser.get_stmt_handler(token.kind) {
        Some(handler) => handler(parser),
        None => Err(Error::at_token(
            ErrorImpl::ExpectedIdentifier { found: token.kind },
            &token,
        )),
    }
}

pub fn parse_return_stmt(parser: &mut Parser) -> Result<Stmt, Error> {
    let start = parser.advance()?.position;

    let value = parse_expr(parser)?;

    parser.expect(TokenKind::Semicolon)?;

    Ok(Stmt::Return(ReturnStmt {
        value,
        position: start,
    }))
}

/// A statement starting with a name: only calls are supported.
pub fn parse_identifier_stmt(parser: &mut Parser) -> Result<Stmt, Error> {
    let name = parser.advance()?;
    let next = parser.expect_current_token()?;

    match next.kind {
        TokenKind::ParensOpen => parse_fn_call_stmt(parser, name),
        TokenKind::Assign => Err(Error::at_token(
            ErrorImpl::NotImplemented {
                feature: "assignment",
            },
            &next,
        )),
        found => Err(Error::at_token(
            ErrorImpl::UnexpectedToken {
                expected: TokenKind::ParensOpen,
                found,
            },
            &next,
        )),
    }
}

fn parse_fn_call_stmt(parser: &mut Parser, name: Token) -> Result<Stmt, Error> {
    parser.expect(TokenKind::ParensOpen)?;

    let mut arguments = Vec::new();
    if let Some(first) = parse_expr(parser)? {
        arguments.push(first);

        while parser.current_token_kind()? == Some(TokenKind::Comma) {
            parser.advance()?;
            match parse_expr(parser)? {
                Some(argument) => arguments.push(argument),
                None => {
                    let token = parser.expect_current_token()?;
                    return Err(Error::at_token(
                        ErrorImpl::ExpectedConstant { found: token.kind },
                        &token,
                    ));
                }
            }
        }
    }

    parser.expect(TokenKind::ParensClose)?;
    parser.expect(TokenKind::Semicolon)?;

    Ok(Stmt::FnCall(FnCallStmt {
        callee: name.value,
        arguments,
        position: name.position,
    }))
}

pub fn parse_control_flow_stmt(parser: &mut Parser) -> Result<Stmt, Error> {
    let token = parser.advance()?;
    Err(Error::at_token(
        ErrorImpl::NotImplemented {
            feature: "control flow",
        },
        &token,
    ))
}
