use std::fmt::Display;

use crate::Position;

use super::ast::{Expr, Stmt};

pub(crate) fn join<T: Display>(items: &[T]) -> String {
    items
        .iter()
        .map(|item| item.to_string())
        .collect::<Vec<String>>()
        .join(",")
}

/// `import <name>;` at the top of a file.
#[derive(Debug, Clone, PartialEq)]
pub struct ImportStmt {
    pub name: String,
    pub position: Position,
}

impl Display for ImportStmt {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "import({}) {}", self.position, self.name)
    }
}

/// One `<type> <name>` parameter. Positioned at the type name.
#[derive(Debug, Clone, PartialEq)]
pub struct FnArg {
    pub type_name: String,
    pub name: String,
    pub position: Position,
}

impl Display for FnArg {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {} {}", self.position, self.type_name, self.name)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct FnReturn {
    pub type_name: String,
    pub position: Position,
}

impl Display for FnReturn {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.position, self.type_name)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct FnDeclStmt {
    pub name: String,
    pub arguments: Vec<FnArg>,
    /// `None` if the function does not return anything.
    pub return_type: Option<FnReturn>,
    pub body: Vec<Stmt>,
    pub position: Position,
}

impl Display for FnDeclStmt {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let return_type = match &self.return_type {
            Some(return_type) => return_type.to_string(),
            None => String::from("()"),
        };
        write!(
            f,
            "Fn({})[{}]({})->{}{{{}}}",
            self.position,
            self.name,
            join(&self.arguments),
            return_type,
            join(&self.body)
        )
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ReturnStmt {
    pub value: Option<Expr>,
    pub position: Position,
}

impl Display for ReturnStmt {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.value {
            Some(value) => write!(f, "return({}) {}", self.position, value),
            None => write!(f, "return({})", self.position),
        }
    }
}

/// A call used as a statement. Positioned at the callee name.
#[derive(Debug, Clone, PartialEq)]
pub struct FnCallStmt {
    pub callee: String,
    pub arguments: Vec<Expr>,
    pub position: Position,
}

impl Display for FnCallStmt {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "FnCall({}:{}:[{}])",
            self.position,
            self.callee,
            join(&self.arguments)
        )
    }
}

impl FnCallStmt {
    pub fn arity(&self) -> usize {
        self.arguments.len()
    }
}
