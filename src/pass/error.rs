use thiserror::Error;

use super::LENGTH_LIMIT;
use crate::catalog::CatalogError;

/// Reasons a generation request produced no password.
#[derive(Debug, Error)]
pub enum GenerationError {
    #[error("Choose at least one character class to generate a password.")]
    NoClassSelected,
    #[error("Password length must be between 1 and {max} (got {0}).", max = LENGTH_LIMIT)]
    InvalidLength(usize),
    #[error("Data error: unable to load the character table. ({0})")]
    CatalogUnavailable(#[from] CatalogError),
    #[error("Data error: the selected classes contain no characters in the character table.")]
    EmptyPool,
}

impl GenerationError {
    /// User input problems are shown as a transient notice; data problems
    /// stay on screen until the next generation.
    pub fn is_input_error(&self) -> bool {
        matches!(
            self,
            GenerationError::NoClassSelected | GenerationError::InvalidLength(_)
        )
    }
}
