//! Multi-file driver.
//!
//! The executor resolves import paths through a `Loader`, parses each file
//! once and checks it after everything it imports, so an importer sees every
//! declaration its imports made.

pub mod executor;
pub mod loader;
