//! Character classes and the catalog that maps them to characters.

mod file;

use std::collections::BTreeMap;
use std::fmt;
use std::path::PathBuf;

pub use file::{CatalogError, DataFile, parse};

/// Data file shipped alongside the binary, also embedded for `--builtin`.
const BUILTIN_DATA: &str = include_str!("../../data.json");

/// A selectable character class.
///
/// Ordering is lower, upper, digit, symbol. Pools are always built in this
/// order so a given selection yields the same pool every time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, clap::ValueEnum)]
pub enum ClassId {
    Lower,
    Upper,
    Digit,
    Symbol,
}

impl ClassId {
    pub const ALL: [ClassId; 4] = [
        ClassId::Lower,
        ClassId::Upper,
        ClassId::Digit,
        ClassId::Symbol,
    ];

    /// Key used for this class in the data file.
    pub fn key(self) -> &'static str {
        match self {
            ClassId::Lower => "latin_lower_alphabet",
            ClassId::Upper => "latin_upper_alphabet",
            ClassId::Digit => "arabic_numerals",
            ClassId::Symbol => "punctuation_characters",
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.key() == key)
    }

    /// Human readable label for menus.
    pub fn label(self) -> &'static str {
        match self {
            ClassId::Lower => "Lowercase latin letters (a-z)",
            ClassId::Upper => "Uppercase latin letters (A-Z)",
            ClassId::Digit => "Arabic numerals (0-9)",
            ClassId::Symbol => "Special characters (!@#...)",
        }
    }
}

impl fmt::Display for ClassId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ClassId::Lower => "lower",
            ClassId::Upper => "upper",
            ClassId::Digit => "digit",
            ClassId::Symbol => "symbol",
        };
        f.write_str(name)
    }
}

/// Read-only mapping from class to its ordered characters.
///
/// Duplicate characters inside a class are kept as-is: a character listed
/// twice is drawn twice as often.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Catalog {
    classes: BTreeMap<ClassId, Vec<char>>,
}

impl Catalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Catalog parsed from the embedded copy of `data.json`.
    pub fn builtin() -> Result<Self, CatalogError> {
        parse(BUILTIN_DATA, &PathBuf::from("<builtin>"))
    }

    #[cfg(test)]
    pub fn with_class(mut self, class: ClassId, chars: &str) -> Self {
        self.insert(class, chars.chars().collect());
        self
    }

    /// Set the characters for `class`, replacing any previous entry.
    pub fn insert(&mut self, class: ClassId, chars: Vec<char>) {
        self.classes.insert(class, chars);
    }

    /// Characters for `class`, or an empty slice when the data has no entry.
    pub fn get(&self, class: ClassId) -> &[char] {
        self.classes.get(&class).map(Vec::as_slice).unwrap_or(&[])
    }
}

/// Anything that can hand out a catalog on demand.
pub trait CatalogSource {
    fn load(&self) -> Result<Catalog, CatalogError>;
}

impl CatalogSource for Catalog {
    fn load(&self) -> Result<Catalog, CatalogError> {
        Ok(self.clone())
    }
}

/// The embedded table, parsed on every load like a data file.
#[derive(Debug, Clone, Copy, Default)]
pub struct Builtin;

impl CatalogSource for Builtin {
    fn load(&self) -> Result<Catalog, CatalogError> {
        Catalog::builtin()
    }
}
