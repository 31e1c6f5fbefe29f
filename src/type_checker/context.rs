use std::collections::HashMap;

use crate::{ast::types::Type, errors::errors::ErrorImpl};

/// Registry of every named type and function visible to the checker.
///
/// Names are write-once: nothing is ever replaced or removed, and the
/// built-in `int`, `bool` and `string` cannot be redeclared.
#[derive(Debug, Clone)]
pub struct TypeContext {
    types: HashMap<String, Type>,
}

impl TypeContext {
    pub fn new() -> Self {
        let mut types = HashMap::new();
        types.insert(String::from("int"), Type::Int);
        types.insert(String::from("bool"), Type::Bool);
        types.insert(String::from("string"), Type::String);

        TypeContext { types }
    }

    /// Registers `name`. Fails without touching the registry if the name is
    /// already taken.
    pub fn add(&mut self, name: &str, ty: Type) -> Result<(), ErrorImpl> {
        if let Some(previous) = self.types.get(name) {
            return Err(ErrorImpl::TypeAlreadyDeclared {
                name: name.to_string(),
                previous: previous.clone(),
            });
        }

        self.types.insert(name.to_string(), ty);
        Ok(())
    }

    pub fn get(&self, name: &str) -> Result<&Type, ErrorImpl> {
        self.types.get(name).ok_or_else(|| ErrorImpl::UnknownType {
            name: name.to_string(),
        })
    }

    pub fn contains(&self, name: &str) -> bool {
        self.types.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.types.len()
    }

    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }
}

impl Default for TypeContext {
    fn default() -> Self {
        TypeContext::new()
    }
}
