//! Parser module for building an Abstract Syntax Tree (AST).
//!
//! This module contains the recursive-descent parser that turns a token
//! stream into a `File`. It handles:
//!
//! - Import statements at the top of a file
//! - Function declarations with typed parameters and an optional return type
//! - Return and call statements inside function bodies
//! - Literal expressions
//!
//! Declarations and statements are dispatched through lookup tables keyed by
//! their leading token. Syntax that is recognised but not supported (type
//! declarations, assignment, control flow) is reported as an ordinary error.

pub mod decl;
pub mod expr;
pub mod lookups;
pub mod parser;
pub mod stmt;
