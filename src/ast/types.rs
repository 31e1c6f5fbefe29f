//! Type system definitions.
//!
//! Types are structural: `int`, `bool` and `string` are markers equal only to
//! themselves, and function types compare argument-by-argument and by return
//! type. A function without a return type only equals another function without
//! one.

use std::fmt::Display;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Type {
    Int,
    Bool,
    String,
    Func(FunctionType),
}

/// Signature of a declared function.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FunctionType {
    pub arguments: Vec<Type>,
    /// `None` when the function returns nothing.
    pub return_type: Option<Box<Type>>,
}

impl FunctionType {
    pub fn new(arguments: Vec<Type>, return_type: Option<Type>) -> Self {
        FunctionType {
            arguments,
            return_type: return_type.map(Box::new),
        }
    }

    pub fn get_return_type(&self) -> Option<&Type> {
        self.return_type.as_deref()
    }
}

impl Type {
    pub fn as_function(&self) -> Option<&FunctionType> {
        match self {
            Type::Func(function) => Some(function),
            _ => None,
        }
    }
}

impl Display for Type {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Type::Int => write!(f, "type<int>"),
            Type::Bool => write!(f, "type<bool>"),
            Type::String => write!(f, "type<string>"),
            Type::Func(_) => write!(f, "type<func>"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{FunctionType, Type};

    #[test]
    fn test_marker_types_equal_only_themselves() {
        assert_eq!(Type::Int, Type::Int);
        assert_ne!(Type::Int, Type::Bool);
        assert_ne!(Type::String, Type::Bool);
        assert_ne!(Type::Int, Type::Func(FunctionType::new(vec![], None)));
    }

    #[test]
    fn test_function_types_are_structural() {
        let a = Type::Func(FunctionType::new(vec![Type::Int, Type::Bool], Some(Type::String)));
        let b = Type::Func(FunctionType::new(vec![Type::Int, Type::Bool], Some(Type::String)));
        assert_eq!(a, b);

        let swapped = Type::Func(FunctionType::new(
            vec![Type::Bool, Type::Int],
            Some(Type::String),
        ));
        assert_ne!(a, swapped);

        let shorter = Type::Func(FunctionType::new(vec![Type::Int], Some(Type::String)));
        assert_ne!(a, shorter);
    }

    #[test]
    fn test_absent_return_equals_only_absent_return() {
        let void = Type::Func(FunctionType::new(vec![Type::Int], None));
        let returns_int = Type::Func(FunctionType::new(vec![Type::Int], Some(Type::Int)));

        assert_eq!(void, Type::Func(FunctionType::new(vec![Type::Int], None)));
        assert_ne!(void, returns_int);
    }

    #[test]
    fn test_nested_function_types() {
        let callback = Type::Func(FunctionType::new(vec![Type::Int], None));
        let a = Type::Func(FunctionType::new(vec![callback.clone()], Some(callback.clone())));
        let b = Type::Func(FunctionType::new(vec![callback.clone()], Some(callback)));
        assert_eq!(a, b);
    }

    #[test]
    fn test_type_descriptions() {
        assert_eq!(Type::Int.to_string(), "type<int>");
        assert_eq!(Type::Bool.to_string(), "type<bool>");
        assert_eq!(Type::String.to_string(), "type<string>");
        assert_eq!(Type::Func(FunctionType::new(vec![], None)).to_string(), "type<func>");
    }
}
