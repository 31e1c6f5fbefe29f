#![allow(clippy::module_inception)]

use std::{fmt::Display, rc::Rc};

pub mod ast;
pub mod errors;
pub mod executor;
pub mod lexer;
pub mod logger;
pub mod macros;
pub mod parser;
pub mod type_checker;

extern crate regex;

/// Source position of a token or AST node.
///
/// `offset` counts characters from the start of the file, `line` and `column`
/// are zero-based. Positions only feed diagnostics, never semantics.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Position {
    pub file: Rc<String>,
    pub offset: u32,
    pub line: u32,
    pub column: u32,
}

impl Position {
    pub fn new(file: Rc<String>, offset: u32, line: u32, column: u32) -> Self {
        Position {
            file,
            offset,
            line,
            column,
        }
    }

    /// The first character of `file`.
    pub fn start(file: Rc<String>) -> Self {
        Position::new(file, 0, 0, 0)
    }

    pub fn null() -> Self {
        Position::start(Rc::new(String::from("<null>")))
    }

    /// Returns the position `text` characters further along, assuming `text`
    /// was read starting at `self`.
    pub fn advanced_by(&self, text: &str) -> Self {
        let mut position = self.clone();
        for c in text.chars() {
            position.offset += 1;
            if c == '\n' {
                position.line += 1;
                position.column = 0;
            } else {
                position.column += 1;
            }
        }
        position
    }
}

impl Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "@<{}:{}:{}:{}>",
            self.file,
            self.line + 1,
            self.column + 1,
            self.offset
        )
    }
}
