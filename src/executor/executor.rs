use std::{collections::HashMap, path::Path, rc::Rc};

use tracing::debug;

use crate::{
    ast::ast::File,
    errors::errors::{Error, ErrorImpl},
    lexer::{lexer::Lexer, source::Loadable},
    parser::parser::parse,
    type_checker::{context::TypeContext, type_checker::Check},
};

use super::loader::Loader;

/// Loads and checks a program one import path at a time.
///
/// Every file checked by one executor shares the same `TypeContext`, and each
/// import path is parsed at most once.
pub struct Executor<L: Loader> {
    loader: L,
    context: TypeContext,
    files: HashMap<String, File>,
    visiting: Vec<String>,
}

fn file_name(path: &str) -> &str {
    Path::new(path)
        .file_name()
        .and_then(|name| name.to_str())
        .unwrap_or(path)
}

fn parse_stream<S: Loadable>(source: S, file_name: &str) -> Result<File, Error> {
    let file = Rc::new(String::from(file_name));
    parse(Lexer::new(source, Rc::clone(&file)), file)
}

impl<L: Loader> Executor<L> {
    pub fn new(loader: L) -> Self {
        Executor {
            loader,
            context: TypeContext::new(),
            files: HashMap::new(),
            visiting: Vec::new(),
        }
    }

    /// Checks the file at `path` after every file it imports.
    ///
    /// A path seen before is not checked again, even if its first check
    /// failed.
    pub fn check(&mut self, path: &str) -> Result<(), Error> {
        if let Some(start) = self.visiting.iter().position(|visiting| visiting == path) {
            let mut chain = self.visiting[start..].to_vec();
            chain.push(path.to_string());
            return Err(Error::unpositioned(ErrorImpl::ImportCycle {
                chain: chain.join(" -> "),
            }));
        }

        if self.files.contains_key(path) {
            debug!("{} already loaded", path);
            return Ok(());
        }

        debug!("loading {}", path);
        let file = {
            let source = self.loader.load(path)?;
            parse_stream(source, file_name(path))?
        };
        let imports: Vec<String> = file.imports.iter().map(|import| import.name.clone()).collect();
        self.files.insert(path.to_string(), file);

        self.visiting.push(path.to_string());
        let result = self.check_imports(&imports).and_then(|_| self.check_cached(path));
        self.visiting.pop();

        result
    }

    /// Parses and checks an already open stream. Its imports go through the
    /// loader as usual; the stream itself is not cached.
    pub fn check_reader<S: Loadable>(&mut self, file_name: &str, source: S) -> Result<File, Error> {
        let file = parse_stream(source, file_name)?;

        for import in file.imports.iter() {
            self.check(&import.name)?;
        }

        debug!("checking {}", file_name);
        file.check(&mut self.context)?;
        Ok(file)
    }

    fn check_imports(&mut self, imports: &[String]) -> Result<(), Error> {
        for import in imports.iter() {
            self.check(import)?;
        }
        Ok(())
    }

    fn check_cached(&mut self, path: &str) -> Result<(), Error> {
        match self.files.get(path) {
            Some(file) => {
                debug!("checking {}", path);
                file.check(&mut self.context)
            }
            None => Ok(()),
        }
    }

    pub fn get_context(&self) -> &TypeContext {
        &self.context
    }

    pub fn get_file(&self, path: &str) -> Option<&File> {
        self.files.get(path)
    }
}
