//! Parser implementation for building the Abstract Syntax Tree.
//!
//! This module contains the main Parser struct and the `parse` entry point.
//! The parser pulls tokens from the lexer one at a time and keeps exactly one
//! token of lookahead, so no grammar rule ever has to hand a token back.
//!
//! It maintains lookup tables for:
//! - Declaration handlers, keyed by the leading keyword
//! - Statement handlers, keyed by the leading token

use std::{collections::HashMap, rc::Rc};

use crate::{
    ast::ast::File,
    errors::errors::{Error, ErrorImpl},
    lexer::{
        lexer::Lexer,
        source::CharReader,
        tokens::{Token, TokenKind},
    },
    Position,
};

use super::{
    decl::{parse_decls, parse_imports},
    lookups::{create_token_lookups, DeclHandler, DeclLookup, StmtHandler, StmtLookup},
};

/// The main parser structure that maintains parsing state.
pub struct Parser<'a> {
    /// The lazily produced token stream
    tokens: Box<dyn Iterator<Item = Result<Token, Error>> + 'a>,
    /// The next token, pulled from the stream but not yet consumed
    peeked: Option<Token>,
    /// Position just past the last consumed token, where a premature end of
    /// input is reported
    end: Position,
    /// Lookup table for declaration parsing handlers
    decl_lookup: DeclLookup,
    /// Lookup table for statement parsing handlers
    stmt_lookup: StmtLookup,
}

impl<'a> Parser<'a> {
    /// Creates a new Parser instance.
    ///
    /// # Arguments
    ///
    /// * `tokens` - The token stream to parse, usually a `Lexer`
    /// * `file` - Reference-counted string containing the source file name
    pub fn new<I>(tokens: I, file: Rc<String>) -> Self
    where
        I: Iterator<Item = Result<Token, Error>> + 'a,
    {
        Parser {
            tokens: Box::new(tokens),
            peeked: None,
            end: Position::start(file),
            decl_lookup: HashMap::new(),
            stmt_lookup: HashMap::new(),
        }
    }

    fn fill(&mut self) -> Result<(), Error> {
        if self.peeked.is_none() {
            if let Some(token) = self.tokens.next() {
                self.peeked = Some(token?);
            }
        }
        Ok(())
    }

    /// Returns the current token without consuming it, or `None` at the end
    /// of the stream.
    pub fn current_token(&mut self) -> Result<Option<&Token>, Error> {
        self.fill()?;
        Ok(self.peeked.as_ref())
    }

    /// Returns the kind of the current token.
    pub fn current_token_kind(&mut self) -> Result<Option<TokenKind>, Error> {
        Ok(self.current_token()?.map(|token| token.kind))
    }

    /// Like `current_token`, but running out of tokens is an error.
    pub fn expect_current_token(&mut self) -> Result<Token, Error> {
        self.fill()?;
        match &self.peeked {
            Some(token) => Ok(token.clone()),
            None => Err(self.eof_error()),
        }
    }

    /// Consumes and returns the current token.
    pub fn advance(&mut self) -> Result<Token, Error> {
        self.fill()?;
        match self.peeked.take() {
            Some(token) => {
                self.end = token.position.advanced_by(&token.value);
                if token.kind == TokenKind::String {
                    self.end = self.end.advanced_by("\"");
                }
                Ok(token)
            }
            None => Err(self.eof_error()),
        }
    }

    /// Consumes a token of the expected kind.
    pub fn expect(&mut self, expected_kind: TokenKind) -> Result<Token, Error> {
        let token = self.advance()?;
        if token.kind != expected_kind {
            return Err(Error::at_token(
                ErrorImpl::UnexpectedToken {
                    expected: expected_kind,
                    found: token.kind,
                },
                &token,
            ));
        }
        Ok(token)
    }

    /// Consumes a name: a type name, a function name or a parameter name.
    pub fn expect_identifier(&mut self) -> Result<Token, Error> {
        let token = self.advance()?;
        if token.kind != TokenKind::Text {
            return Err(Error::at_token(
                ErrorImpl::ExpectedIdentifier { found: token.kind },
                &token,
            ));
        }
        Ok(token)
    }

    pub fn eof_error(&self) -> Error {
        Error::with_literal(ErrorImpl::UnexpectedEof, self.end.clone(), "")
    }

    pub fn get_decl_handler(&self, kind: TokenKind) -> Option<DeclHandler> {
        self.decl_lookup.get(&kind).copied()
    }

    pub fn get_stmt_handler(&self, kind: TokenKind) -> Option<StmtHandler> {
        self.stmt_lookup.get(&kind).copied()
    }

    /// Registers a declaration handler for a leading keyword.
    pub fn decl(&mut self, kind: TokenKind, decl_fn: DeclHandler) {
        self.decl_lookup.insert(kind, decl_fn);
    }

    /// Registers a statement handler for a leading token.
    pub fn stmt(&mut self, kind: TokenKind, stmt_fn: StmtHandler) {
        self.stmt_lookup.insert(kind, stmt_fn);
    }
}

/// Parses a token stream into a `File`.
///
/// This is the main entry point for parsing. The first lex or syntax error
/// aborts parsing. An empty stream yields an empty file.
pub fn parse<'a, I>(tokens: I, file: Rc<String>) -> Result<File, Error>
where
    I: Iterator<Item = Result<Token, Error>> + 'a,
{
    let mut parser = Parser::new(tokens, Rc::clone(&file));
    create_token_lookups(&mut parser);

    let position = match parser.current_token()? {
        Some(token) => token.position.clone(),
        None => Position::start(file),
    };

    let imports = parse_imports(&mut parser)?;
    let decls = parse_decls(&mut parser)?;

    Ok(File {
        imports,
        decls,
        position,
    })
}

/// Lexes and parses an in-memory source.
pub fn parse_source(source: &str, file: &str) -> Result<File, Error> {
    let file = Rc::new(String::from(file));
    let lexer = Lexer::new(CharReader::new(source.as_bytes()), Rc::clone(&file));
    parse(lexer, file)
}
