use std::fmt::Display;

use crate::Position;

use super::{
    expressions::ValueExpr,
    statements::{join, FnCallStmt, FnDeclStmt, ImportStmt, ReturnStmt},
};

/// The root of the AST: everything parsed out of one source file.
#[derive(Debug, Clone, PartialEq)]
pub struct File {
    pub imports: Vec<ImportStmt>,
    pub decls: Vec<Decl>,
    pub position: Position,
}

impl Display for File {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "File({}) Imports({}) Decls({})",
            self.position,
            join(&self.imports),
            join(&self.decls)
        )
    }
}

/// Top-level declarations.
#[derive(Debug, Clone, PartialEq)]
pub enum Decl {
    Fn(FnDeclStmt),
}

impl Decl {
    pub fn get_name(&self) -> &str {
        match self {
            Decl::Fn(function) => &function.name,
        }
    }

    pub fn get_position(&self) -> &Position {
        match self {
            Decl::Fn(function) => &function.position,
        }
    }
}

impl Display for Decl {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Decl::Fn(function) => write!(f, "{}", function),
        }
    }
}

/// Statements allowed inside a function body.
#[derive(Debug, Clone, PartialEq)]
pub enum Stmt {
    Return(ReturnStmt),
    FnCall(FnCallStmt),
}

impl Stmt {
    pub fn get_position(&self) -> &Position {
        match self {
            Stmt::Return(stmt) => &stmt.position,
            Stmt::FnCall(stmt) => &stmt.position,
        }
    }
}

impl Display for Stmt {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Stmt::Return(stmt) => write!(f, "{}", stmt),
            Stmt::FnCall(stmt) => write!(f, "{}", stmt),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    Value(ValueExpr),
}

impl Expr {
    pub fn get_position(&self) -> &Position {
        match self {
            Expr::Value(expr) => &expr.position,
        }
    }
}

impl Display for Expr {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Expr::Value(expr) => write!(f, "{}", expr),
        }
    }
}
