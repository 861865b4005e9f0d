//! Catalog data file loading.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

use super::{Catalog, CatalogSource, ClassId};

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("unable to read '{}': {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("'{}' is not a valid character table: {source}", path.display())]
    Malformed {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("'{}': entry {entry:?} under \"{key}\" is not a single character", path.display())]
    Entry {
        path: PathBuf,
        key: String,
        entry: String,
    },
}

/// One class entry: either `["a", "b"]` or `"ab"`.
#[derive(Deserialize)]
#[serde(untagged)]
enum RawClass {
    List(Vec<String>),
    Text(String),
}

/// Parse the JSON character table. `path` is only used in error messages.
pub fn parse(data: &str, path: &Path) -> Result<Catalog, CatalogError> {
    let raw: BTreeMap<String, RawClass> =
        serde_json::from_str(data).map_err(|source| CatalogError::Malformed {
            path: path.to_path_buf(),
            source,
        })?;

    let mut catalog = Catalog::new();
    for (key, entry) in raw {
        let Some(class) = ClassId::from_key(&key) else {
            tracing::debug!(key = %key, "ignoring unknown catalog key");
            continue;
        };

        let chars = match entry {
            RawClass::Text(s) => s.chars().collect(),
            RawClass::List(items) => {
                let mut chars = Vec::with_capacity(items.len());
                for item in items {
                    let mut it = item.chars();
                    match (it.next(), it.next()) {
                        (Some(c), None) => chars.push(c),
                        _ => {
                            return Err(CatalogError::Entry {
                                path: path.to_path_buf(),
                                key,
                                entry: item,
                            });
                        }
                    }
                }
                chars
            }
        };
        catalog.insert(class, chars);
    }

    Ok(catalog)
}

/// Catalog backed by a JSON file on disk, re-read on every load.
#[derive(Debug, Clone)]
pub struct DataFile {
    path: PathBuf,
}

impl DataFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl CatalogSource for DataFile {
    fn load(&self) -> Result<Catalog, CatalogError> {
        let data = fs::read_to_string(&self.path).map_err(|source| CatalogError::Io {
            path: self.path.clone(),
            source,
        })?;
        let catalog = parse(&data, &self.path)?;
        tracing::debug!(path = %self.path.display(), "catalog loaded");
        Ok(catalog)
    }
}
