use crate::{
    ast::{
        ast::{Decl, Stmt},
        statements::{FnArg, FnDeclStmt, FnReturn, ImportStmt},
    },
    errors::errors::{Error, ErrorImpl},
    lexer::tokens::TokenKind,
};

use super::{parser::Parser, stmt::parse_stmt};

pub fn parse_imports(parser: &mut Parser) -> Result<Vec<ImportStmt>, Error> {
    let mut imports = Vec::new();
    while parser.current_token_kind()? == Some(TokenKind::Import) {
        imports.push(parse_import_stmt(parser)?);
    }
    Ok(imports)
}

pub fn parse_import_stmt(parser: &mut Parser) -> Result<ImportStmt, Error> {
    let start = parser.advance()?.position;

    let name = parser.expect_identifier()?.value;

    parser.expect(TokenKind::Semicolon)?;

    Ok(ImportStmt {
        name,
        position: start,
    })
}

/// Parses declarations until the token stream ends.
pub fn parse_decls(parser: &mut Parser) -> Result<Vec<Decl>, Error> {
    let mut decls = Vec::new();

    loop {
        let token = match parser.current_token()? {
            Some(token) => token.clone(),
            None => break,
        };

        match parser.get_decl_handler(token.kind) {
            Some(handler) => decls.push(handler(parser)?),
            None => {
                return Err(Error::at_token(
                    ErrorImpl::ExpectedDeclaration { found: token.kind },
                    &token,
                ))
            }
        }
    }

    Ok(decls)
}

pub fn parse_type_decl(parser: &mut Parser) -> Result<Decl, Error> {
    let token = parser.advance()?;
    Err(Error::at_token(
        ErrorImpl::NotImplemented {
            feature: "type declarations",
        },
        &token,
    ))
}

pub fn parse_fn_decl(parser: &mut Parser) -> Result<Decl, Error> {
    let start = parser.advance()?.position;

    let name = parser.expect_identifier()?.value;

    parser.expect(TokenKind::ParensOpen)?;
    let arguments = parse_fn_args(parser)?;
    let return_type = parse_fn_return(parser)?;

    parser.expect(TokenKind::BraceOpen)?;
    let body = parse_fn_body(parser)?;
    parser.expect(TokenKind::BraceClose)?;

    Ok(Decl::Fn(FnDeclStmt {
        name,
        arguments,
        return_type,
        body,
        position: start,
    }))
}

/// Parses `<type> <name>` pairs up to and including the closing paren. A
/// trailing comma is accepted.
fn parse_fn_args(parser: &mut Parser) -> Result<Vec<FnArg>, Error> {
    let mut arguments = Vec::new();

    loop {
        let type_token = parser.advance()?;
        match type_token.kind {
            TokenKind::ParensClose => break,
            TokenKind::Text => {}
            found => {
                return Err(Error::at_token(
                    ErrorImpl::ExpectedIdentifier { found },
                    &type_token,
                ))
            }
        }

        let name = parser.expect_identifier()?.value;
        arguments.push(FnArg {
            type_name: type_token.value,
            name,
            position: type_token.position,
        });

        let separator = parser.advance()?;
        match separator.kind {
            TokenKind::ParensClose => break,
            TokenKind::Comma => {}
            found => {
                return Err(Error::at_token(
                    ErrorImpl::UnexpectedToken {
                        expected: TokenKind::Comma,
                        found,
                    },
                    &separator,
                ))
            }
        }
    }

    Ok(arguments)
}

fn parse_fn_return(parser: &mut Parser) -> Result<Option<FnReturn>, Error> {
    if parser.current_token_kind()? == Some(TokenKind::BraceOpen) {
        return Ok(None);
    }

    let token = parser.expect_identifier()?;
    Ok(Some(FnReturn {
        type_name: token.value,
        position: token.position,
    }))
}

fn parse_fn_body(parser: &mut Parser) -> Result<Vec<Stmt>, Error> {
    let mut body = Vec::new();
    while parser.current_token_kind()? != Some(TokenKind::BraceClose) {
        body.push(parse_stmt(parser)?);
    }
    Ok(body)
}
