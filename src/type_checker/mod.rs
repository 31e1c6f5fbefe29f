//! Type checking and semantic analysis module.
//!
//! This module validates parsed files against a shared type registry:
//!
//! - Resolving parameter and return type names
//! - Registering each function before its body is checked, so it can recurse
//! - Checking call arity and argument types by structural equality
//!
//! The registry is write-once and shared by every file of a program, which is
//! how declarations from imported files become visible to their importers.

pub mod context;
pub mod type_checker;
