use crate::{
    ast::{
        ast::{Decl, Expr, File, Stmt},
        expressions::ValueExpr,
        statements::{FnCallStmt, FnDeclStmt, ImportStmt, ReturnStmt},
        types::{FunctionType, Type},
    },
    errors::errors::{Error, ErrorImpl},
};

use super::context::TypeContext;

/// Static validation of an AST node against the shared type registry.
pub trait Check {
    /// What a successful check resolves to.
    type Output;

    fn check(&self, context: &mut TypeContext) -> Result<Self::Output, Error>;
}

impl Check for File {
    type Output = ();

    fn check(&self, context: &mut TypeContext) -> Result<(), Error> {
        for import in self.imports.iter() {
            import.check(context)?;
        }
        for decl in self.decls.iter() {
            decl.check(context)?;
        }
        Ok(())
    }
}

/// Imports are resolved by the executor; there is nothing to check here.
impl Check for ImportStmt {
    type Output = ();

    fn check(&self, _context: &mut TypeContext) -> Result<(), Error> {
        Ok(())
    }
}

impl Check for Decl {
    type Output = ();

    fn check(&self, context: &mut TypeContext) -> Result<(), Error> {
        match self {
            Decl::Fn(function) => function.check(context),
        }
    }
}

impl Check for FnDeclStmt {
    type Output = ();

    fn check(&self, context: &mut TypeContext) -> Result<(), Error> {
        let mut arguments = Vec::with_capacity(self.arguments.len());
        for argument in self.arguments.iter() {
            let ty = context
                .get(&argument.type_name)
                .map_err(|err| Error::new(err, argument.position.clone()))?;
            arguments.push(ty.clone());
        }

        let return_type = match &self.return_type {
            Some(return_type) => Some(
                context
                    .get(&return_type.type_name)
                    .map_err(|err| Error::new(err, return_type.position.clone()))?
                    .clone(),
            ),
            None => None,
        };

        // Registered before the body so the function can call itself.
        context
            .add(&self.name, Type::Func(FunctionType::new(arguments, return_type)))
            .map_err(|err| Error::new(err, self.position.clone()))?;

        for stmt in self.body.iter() {
            stmt.check(context)?;
        }
        Ok(())
    }
}

impl Check for Stmt {
    type Output = Option<Type>;

    fn check(&self, context: &mut TypeContext) -> Result<Option<Type>, Error> {
        match self {
            Stmt::Return(stmt) => stmt.check(context),
            Stmt::FnCall(stmt) => stmt.check(context),
        }
    }
}

impl Check for ReturnStmt {
    type Output = Option<Type>;

    /// The returned type is not compared with the enclosing function's
    /// declared return type.
    fn check(&self, context: &mut TypeContext) -> Result<Option<Type>, Error> {
        match &self.value {
            Some(value) => value.check(context).map(Some),
            None => Ok(None),
        }
    }
}

impl Check for FnCallStmt {
    type Output = Option<Type>;

    fn check(&self, context: &mut TypeContext) -> Result<Option<Type>, Error> {
        let function = match context.get(&self.callee) {
            Ok(Type::Func(function)) => function.clone(),
            Ok(other) => {
                return Err(Error::new(
                    ErrorImpl::NotAFunction {
                        callee: self.callee.clone(),
                        found: other.clone(),
                    },
                    self.position.clone(),
                ))
            }
            Err(err) => return Err(Error::new(err, self.position.clone())),
        };

        if self.arity() != function.arguments.len() {
            return Err(Error::new(
                ErrorImpl::ArgumentCount {
                    callee: self.callee.clone(),
                    expected: function.arguments.len(),
                    received: self.arity(),
                },
                self.position.clone(),
            ));
        }

        for (index, (argument, expected)) in self
            .arguments
            .iter()
            .zip(function.arguments.iter())
            .enumerate()
        {
            let received = argument.check(context)?;
            if received != *expected {
                return Err(Error::new(
                    ErrorImpl::ArgumentType {
                        callee: self.callee.clone(),
                        index: index + 1,
                        expected: expected.clone(),
                        received,
                    },
                    self.position.clone(),
                ));
            }
        }

        Ok(function.get_return_type().cloned())
    }
}

impl Check for Expr {
    type Output = Type;

    fn check(&self, context: &mut TypeContext) -> Result<Type, Error> {
        match self {
            Expr::Value(value) => value.check(context),
        }
    }
}

impl Check for ValueExpr {
    type Output = Type;

    fn check(&self, _context: &mut TypeContext) -> Result<Type, Error> {
        Ok(self.value.get_type())
    }
}

/// Checks a single, already parsed file against a fresh registry.
pub fn type_check(file: &File) -> Result<TypeContext, Error> {
    let mut context = TypeContext::new();
    file.check(&mut context)?;
    Ok(context)
}
