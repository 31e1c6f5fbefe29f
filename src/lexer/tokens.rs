use lazy_static::lazy_static;
use regex::Regex;
use std::{collections::HashMap, fmt::Display};

use crate::Position;

lazy_static! {
    pub static ref RESERVED_LOOKUP: HashMap<&'static str, TokenKind> = {
        let mut map = HashMap::new();
        map.insert("if", TokenKind::If);
        map.insert("else", TokenKind::Else);
        map.insert("func", TokenKind::Func);
        map.insert("type", TokenKind::Type);
        map.insert("import", TokenKind::Import);
        map.insert("return", TokenKind::Return);
        map
    };
    pub static ref NUMBER_PATTERN: Regex = Regex::new("^[0-9]+$").unwrap();
}

#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum TokenKind {
    BraceOpen,
    BraceClose,
    ParensOpen,
    ParensClose,
    Comma,
    Semicolon,
    Assign,

    String,
    Number,
    Text,

    // Reserved
    If,
    Else,
    Func,
    Type,
    Import,
    Return,
}

impl TokenKind {
    /// Classifies an alphanumeric run as a keyword, a number or plain text.
    pub fn classify(word: &str) -> TokenKind {
        if let Some(kind) = RESERVED_LOOKUP.get(word) {
            *kind
        } else if NUMBER_PATTERN.is_match(word) {
            TokenKind::Number
        } else {
            TokenKind::Text
        }
    }

    pub fn for_symbol(c: char) -> Option<TokenKind> {
        match c {
            '{' => Some(TokenKind::BraceOpen),
            '}' => Some(TokenKind::BraceClose),
            '(' => Some(TokenKind::ParensOpen),
            ')' => Some(TokenKind::ParensClose),
            ',' => Some(TokenKind::Comma),
            ';' => Some(TokenKind::Semicolon),
            '=' => Some(TokenKind::Assign),
            _ => None,
        }
    }
}

impl Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Token{:?}", self)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    pub kind: TokenKind,
    pub value: String,
    pub position: Position,
}

impl Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}({}) {}", self.kind, self.value, self.position)
    }
}

impl Token {
    pub fn is_one_of_many(&self, kinds: &[TokenKind]) -> bool {
        kinds.contains(&self.kind)
    }
}
