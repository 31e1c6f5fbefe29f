/// AST (Abstract Syntax Tree) module
/// Contains all definitions related to the AST structure
///
/// Submodules:
/// - ast: The file root and the declaration/statement/expression sum types
/// - expressions: Definitions for expression nodes
/// - statements: Definitions for import, declaration and statement nodes
/// - types: The structural type model
/// - values: Literal values
pub mod ast;
pub mod expressions;
pub mod statements;
pub mod types;
pub mod values;
