use std::{
    collections::HashMap,
    fs,
    io::{self, BufReader, Cursor},
    path::PathBuf,
};

use tracing::trace;

use crate::{
    errors::errors::{Error, ErrorImpl},
    lexer::source::{CharReader, Loadable},
};

/// Resolves an import path to a readable source stream.
pub trait Loader {
    fn load(&self, path: &str) -> Result<Box<dyn Loadable>, Error>;
}

fn unknown_import(path: &str) -> Error {
    Error::unpositioned(ErrorImpl::UnknownImport {
        path: path.to_string(),
    })
}

/// In-memory sources keyed by import path.
#[derive(Debug, Clone, Default)]
pub struct StringLoader {
    sources: HashMap<String, String>,
}

impl StringLoader {
    pub fn new() -> Self {
        StringLoader::default()
    }

    pub fn insert(&mut self, path: impl Into<String>, source: impl Into<String>) {
        self.sources.insert(path.into(), source.into());
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for StringLoader {
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        StringLoader {
            sources: iter
                .into_iter()
                .map(|(path, source)| (path.into(), source.into()))
                .collect(),
        }
    }
}

impl Loader for StringLoader {
    fn load(&self, path: &str) -> Result<Box<dyn Loadable>, Error> {
        let source = self.sources.get(path).ok_or_else(|| unknown_import(path))?;

        Ok(Box::new(CharReader::new(Cursor::new(
            source.clone().into_bytes(),
        ))))
    }
}

/// Looks an import path up under each search path in order. The first file
/// that exists wins.
#[derive(Debug, Clone)]
pub struct FileLoader {
    search_paths: Vec<PathBuf>,
}

impl FileLoader {
    pub fn new(search_paths: Vec<PathBuf>) -> Self {
        FileLoader { search_paths }
    }
}

impl Loader for FileLoader {
    fn load(&self, path: &str) -> Result<Box<dyn Loadable>, Error> {
        for search_path in self.search_paths.iter() {
            let candidate = search_path.join(path);
            trace!("probing {}", candidate.display());

            match fs::File::open(&candidate) {
                Ok(file) => return Ok(Box::new(CharReader::new(BufReader::new(file)))),
                Err(err) if err.kind() == io::ErrorKind::NotFound => continue,
                Err(err) => {
                    return Err(Error::unpositioned(ErrorImpl::LoadFailed {
                        path: candidate.display().to_string(),
                        message: err.to_string(),
                    }))
                }
            }
        }

        Err(unknown_import(path))
    }
}
