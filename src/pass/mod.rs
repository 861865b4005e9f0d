//! Password sampling from selected character classes.

pub mod charset;
mod error;
mod generate;

pub use error::GenerationError;
pub use generate::{LENGTH_LIMIT, Selection, entropy_bits, generate, strength};

/// Default RNG for generation.
pub fn csprng() -> impl rand::CryptoRng + rand::Rng {
    rand::rngs::OsRng
}
