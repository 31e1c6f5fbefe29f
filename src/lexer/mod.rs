//! Lexical analysis module for the front end.
//!
//! This module contains the lexer (tokenizer) that converts a character
//! stream into tokens for parsing. It handles:
//!
//! - Lazy, one-token-at-a-time tokenization of any `Loadable` stream
//! - Recognition of keywords, identifiers, numbers and string literals
//! - Offset, line and column tracking for error reporting
//! - Whitespace skipping

pub mod lexer;
pub mod source;
pub mod tokens;

#[cfg(test)]
mod tests;
