use std::fmt::Display;

use thiserror::Error;

use crate::{
    ast::types::Type,
    lexer::tokens::{Token, TokenKind},
    Position,
};

/// Which stage of the front end produced an error. Decides how the error is
/// rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorPhase {
    Lex,
    Syntax,
    Check,
    Import,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Error {
    internal_error: ErrorImpl,
    position: Position,
    literal: Option<String>,
}

impl Error {
    pub fn new(error_impl: ErrorImpl, position: Position) -> Self {
        Error {
            internal_error: error_impl,
            position,
            literal: None,
        }
    }

    pub fn with_literal(
        error_impl: ErrorImpl,
        position: Position,
        literal: impl Into<String>,
    ) -> Self {
        Error {
            internal_error: error_impl,
            position,
            literal: Some(literal.into()),
        }
    }

    /// Builds an error pointing at `token`, carrying its raw text.
    pub fn at_token(error_impl: ErrorImpl, token: &Token) -> Self {
        Error::with_literal(error_impl, token.position.clone(), token.value.clone())
    }

    /// Errors that have no meaningful source location, such as a failed import.
    pub fn unpositioned(error_impl: ErrorImpl) -> Self {
        Error::new(error_impl, Position::null())
    }

    pub fn get_position(&self) -> &Position {
        &self.position
    }

    pub fn get_literal(&self) -> Option<&str> {
        self.literal.as_deref()
    }

    pub fn get_internal(&self) -> &ErrorImpl {
        &self.internal_error
    }

    pub fn get_phase(&self) -> ErrorPhase {
        self.internal_error.phase()
    }

    /// The input ended where more tokens were required.
    pub fn is_eof(&self) -> bool {
        self.internal_error == ErrorImpl::UnexpectedEof
    }

    pub fn get_error_name(&self) -> &str {
        match &self.internal_error {
            ErrorImpl::UnterminatedString => "UnterminatedString",
            ErrorImpl::UnrecognisedToken { .. } => "UnrecognisedToken",
            ErrorImpl::Io { .. } => "Io",
            ErrorImpl::UnexpectedToken { .. } => "UnexpectedToken",
            ErrorImpl::ExpectedIdentifier { .. } => "ExpectedIdentifier",
            ErrorImpl::ExpectedDeclaration { .. } => "ExpectedDeclaration",
            ErrorImpl::ExpectedConstant { .. } => "ExpectedConstant",
            ErrorImpl::UnconvertibleValue => "UnconvertibleValue",
            ErrorImpl::NumberParseError => "NumberParseError",
            ErrorImpl::UnexpectedEof => "UnexpectedEof",
            ErrorImpl::NotImplemented { .. } => "NotImplemented",
            ErrorImpl::UnknownType { .. } => "UnknownType",
            ErrorImpl::TypeAlreadyDeclared { .. } => "TypeAlreadyDeclared",
            ErrorImpl::NotAFunction { .. } => "NotAFunction",
            ErrorImpl::ArgumentCount { .. } => "ArgumentCount",
            ErrorImpl::ArgumentType { .. } => "ArgumentType",
            ErrorImpl::UnknownImport { .. } => "UnknownImport",
            ErrorImpl::LoadFailed { .. } => "LoadFailed",
            ErrorImpl::ImportCycle { .. } => "ImportCycle",
        }
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.is_eof() {
            return write!(f, "{}", self.internal_error);
        }

        match self.get_phase() {
            ErrorPhase::Syntax => write!(
                f,
                "error at pos {} ({}): {}",
                self.position.offset,
                self.literal.as_deref().unwrap_or(""),
                self.internal_error
            ),
            ErrorPhase::Check => write!(
                f,
                "{}:{}:{} {}",
                self.position.file,
                self.position.line + 1,
                self.position.column + 1,
                self.internal_error
            ),
            ErrorPhase::Lex | ErrorPhase::Import => write!(f, "{}", self.internal_error),
        }
    }
}

impl std::error::Error for Error {}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ErrorImpl {
    // Lexing
    #[error("unexpected eof")]
    UnterminatedString,
    #[error("unrecognised token: {token:?}")]
    UnrecognisedToken { token: char },
    #[error("{message}")]
    Io { message: String },

    // Parsing
    #[error("expected {expected}, got {found}")]
    UnexpectedToken { expected: TokenKind, found: TokenKind },
    #[error("expected identifier, got {found}")]
    ExpectedIdentifier { found: TokenKind },
    #[error("expected declaration, got {found}")]
    ExpectedDeclaration { found: TokenKind },
    #[error("expected constant value, got {found}")]
    ExpectedConstant { found: TokenKind },
    #[error("could not convert to any value")]
    UnconvertibleValue,
    #[error("invalid integer literal")]
    NumberParseError,
    #[error("unexpected eof")]
    UnexpectedEof,
    #[error("{feature} not yet implemented")]
    NotImplemented { feature: &'static str },

    // Checking
    #[error("unknown type: {name}")]
    UnknownType { name: String },
    #[error("type {name} already declared as {previous}")]
    TypeAlreadyDeclared { name: String, previous: Type },
    #[error("{callee} is {found}, not func")]
    NotAFunction { callee: String, found: Type },
    #[error("{callee} expects {expected} params, not {received}")]
    ArgumentCount {
        callee: String,
        expected: usize,
        received: usize,
    },
    #[error("{callee} param #{index} expects {expected}, not {received}")]
    ArgumentType {
        callee: String,
        index: usize,
        expected: Type,
        received: Type,
    },

    // Imports
    #[error("unknown import: {path}")]
    UnknownImport { path: String },
    #[error("cannot load {path}: {message}")]
    LoadFailed { path: String, message: String },
    #[error("import cycle: {chain}")]
    ImportCycle { chain: String },
}

impl ErrorImpl {
    pub fn phase(&self) -> ErrorPhase {
        match self {
            ErrorImpl::UnterminatedString
            | ErrorImpl::UnrecognisedToken { .. }
            | ErrorImpl::Io { .. } => ErrorPhase::Lex,
            ErrorImpl::UnexpectedToken { .. }
            | ErrorImpl::ExpectedIdentifier { .. }
            | ErrorImpl::ExpectedDeclaration { .. }
            | ErrorImpl::ExpectedConstant { .. }
            | ErrorImpl::UnconvertibleValue
            | ErrorImpl::NumberParseError
            | ErrorImpl::UnexpectedEof
            | ErrorImpl::NotImplemented { .. } => ErrorPhase::Syntax,
            ErrorImpl::UnknownType { .. }
            | ErrorImpl::TypeAlreadyDeclared { .. }
            | ErrorImpl::NotAFunction { .. }
            | ErrorImpl::ArgumentCount { .. }
            | ErrorImpl::ArgumentType { .. } => ErrorPhase::Check,
            ErrorImpl::UnknownImport { .. }
            | ErrorImpl::LoadFailed { .. }
            | ErrorImpl::ImportCycle { .. } => ErrorPhase::Import,
        }
    }
}
