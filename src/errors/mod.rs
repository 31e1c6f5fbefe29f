//! Error types and error handling for the front end.
//!
//! This module defines the single error type shared by every stage. It
//! includes:
//!
//! - Error structures with source position information
//! - Specific error variants for lexing, parsing, checking and imports
//! - The diagnostic renderings (`error at pos ...`, `file:line:col ...` and
//!   the bare message for lex, end-of-stream and import errors)

pub mod errors;
