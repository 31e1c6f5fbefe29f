use std::collections::HashMap;

use crate::{
    ast::ast::{Decl, Stmt},
    errors::errors::Error,
    lexer::tokens::TokenKind,
};

use super::{decl::*, parser::Parser, stmt::*};

pub type DeclHandler = fn(&mut Parser) -> Result<Decl, Error>;
pub type StmtHandler = fn(&mut Parser) -> Result<Stmt, Error>;

pub fn create_token_lookups(parser: &mut Parser) {
    // Declarations
    parser.decl(TokenKind::Func, parse_fn_decl);
    parser.decl(TokenKind::Type, parse_type_decl);

    // Statements
    parser.stmt(TokenKind::Return, parse_return_stmt);
    parser.stmt(TokenKind::Text, parse_identifier_stmt);
    parser.stmt(TokenKind::If, parse_control_flow_stmt);
    parser.stmt(TokenKind::Else, parse_control_flow_stmt);
}

// Lookup tables inside parser struct, so it's easier
pub type DeclLookup = HashMap<TokenKind, DeclHandler>;
pub type StmtLookup = HashMap<TokenKind, StmtHandler>;
