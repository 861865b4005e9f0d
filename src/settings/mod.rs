//! Runtime settings resolved from the command line.
//!
//! Nothing here is persisted; every run starts from the defaults below
//! plus whatever flags were given.

use std::path::PathBuf;

use crate::catalog::{Builtin, CatalogSource, ClassId, DataFile};
use crate::pass::Selection;

pub const DEFAULT_LENGTH: usize = 16;
pub const MIN_LENGTH: usize = 12;
pub const MAX_LENGTH: usize = 100;
pub const DEFAULT_DATA_FILE: &str = "data.json";

/// Where the character table comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DataSource {
    File(PathBuf),
    Builtin,
}

#[derive(Debug, Clone)]
pub struct Settings {
    pub data: DataSource,
    pub selection: Selection,
    pub pass_length: usize,
    pub number_of_passwords: usize,
    pub to_clipboard: bool,
    pub quiet: bool,
    pub interactive: bool,
}

impl Settings {
    /// Catalog source for the configured data.
    pub fn catalog_source(&self) -> Box<dyn CatalogSource> {
        match &self.data {
            DataSource::File(path) => Box::new(DataFile::new(path.clone())),
            DataSource::Builtin => Box::new(Builtin),
        }
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            data: DataSource::File(PathBuf::from(DEFAULT_DATA_FILE)),
            selection: ClassId::ALL.into_iter().collect(),
            pass_length: DEFAULT_LENGTH,
            number_of_passwords: 1,
            to_clipboard: false,
            quiet: false,
            interactive: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_source_loads() {
        let settings = Settings {
            data: DataSource::Builtin,
            ..Default::default()
        };
        let catalog = settings.catalog_source().load().unwrap();
        assert!(!catalog.get(ClassId::Symbol).is_empty());
    }

    #[test]
    fn defaults_select_everything() {
        let settings = Settings::default();
        assert_eq!(settings.selection.len(), 4);
        assert_eq!(settings.pass_length, DEFAULT_LENGTH);
        assert_eq!(settings.data, DataSource::File(PathBuf::from("data.json")));
    }
}
