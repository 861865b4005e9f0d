//! Character pool building for password generation.

use std::collections::BTreeMap;

use super::Selection;
use crate::catalog::Catalog;

/// Concatenate the selected classes in class order. Duplicates are kept.
pub fn build(selection: &Selection, catalog: &Catalog) -> Vec<char> {
    let mut pool = Vec::with_capacity(size(selection, catalog));
    for &class in selection {
        pool.extend_from_slice(catalog.get(class));
    }
    pool
}

/// Number of entries the pool will hold, counting duplicates.
pub fn size(selection: &Selection, catalog: &Catalog) -> usize {
    selection.iter().map(|&c| catalog.get(c).len()).sum()
}

/// Occurrences of each distinct character in `pool`.
pub fn weights(pool: &[char]) -> BTreeMap<char, usize> {
    let mut counts = BTreeMap::new();
    for &c in pool {
        *counts.entry(c).or_insert(0) += 1;
    }
    counts
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::ClassId;

    fn catalog() -> Catalog {
        Catalog::new()
            .with_class(ClassId::Lower, "abc")
            .with_class(ClassId::Digit, "123")
            .with_class(ClassId::Symbol, "")
    }

    #[test]
    fn pool_follows_class_order() {
        let selection = Selection::from([ClassId::Digit, ClassId::Lower]);
        assert_eq!(
            build(&selection, &catalog()),
            vec!['a', 'b', 'c', '1', '2', '3']
        );
        assert_eq!(size(&selection, &catalog()), 6);
    }

    #[test]
    fn empty_and_absent_classes_contribute_nothing() {
        let selection = Selection::from([ClassId::Symbol, ClassId::Upper]);
        assert!(build(&selection, &catalog()).is_empty());
        assert_eq!(size(&selection, &catalog()), 0);
    }

    #[test]
    fn weights_count_duplicates() {
        let counts = weights(&['7', '1', '7', '7']);
        assert_eq!(counts.get(&'7'), Some(&3));
        assert_eq!(counts.get(&'1'), Some(&1));
        assert_eq!(counts.len(), 2);
    }
}
