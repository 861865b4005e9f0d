//! Password generation.

use std::collections::BTreeSet;

use rand::Rng;
use zeroize::Zeroizing;

use super::{GenerationError, charset};
use crate::catalog::{Catalog, ClassId};

/// Set of classes to draw from. Iterates in class order.
pub type Selection = BTreeSet<ClassId>;

/// Longest password a single request may ask for.
pub const LENGTH_LIMIT: usize = 65_536;

/// Generate one password of exactly `length` characters.
///
/// Each character is drawn independently and uniformly from the pool of
/// selected classes, with replacement. A character appearing `k` times in
/// the pool is `k` times as likely to be drawn.
pub fn generate<R: Rng>(
    selection: &Selection,
    length: usize,
    catalog: &Catalog,
    rng: &mut R,
) -> Result<Zeroizing<String>, GenerationError> {
    if selection.is_empty() {
        return Err(GenerationError::NoClassSelected);
    }
    if length == 0 || length > LENGTH_LIMIT {
        return Err(GenerationError::InvalidLength(length));
    }

    let pool = Zeroizing::new(charset::build(selection, catalog));
    if pool.is_empty() {
        return Err(GenerationError::EmptyPool);
    }

    let mut password = Zeroizing::new(String::with_capacity(length));
    for _ in 0..length {
        password.push(pool[rng.gen_range(0..pool.len())]);
    }
    Ok(password)
}

/// Expected entropy in bits of a `length` character password over `pool`,
/// taking duplicate weighting into account.
pub fn entropy_bits(length: usize, pool: &[char]) -> f64 {
    if pool.is_empty() {
        return 0.0;
    }
    let total = pool.len() as f64;
    let per_char: f64 = charset::weights(pool)
        .values()
        .map(|&n| {
            let p = n as f64 / total;
            -p * p.log2()
        })
        .sum();
    length as f64 * per_char
}

/// Get entropy strength description.
pub fn strength(bits: f64) -> &'static str {
    match bits as u32 {
        0..=35 => "Weak",
        36..=59 => "Fair",
        60..=127 => "Strong",
        _ => "Very Strong",
    }
}
