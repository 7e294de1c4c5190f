use std::collections::hash_map::Entry;
use std::collections::{HashMap, HashSet};
use std::hash::Hash;

/// Return every value occurring at least twice in `items`.
///
/// Single pass over the input tracking values seen once and values already
/// known to repeat.
pub fn find_duplicates<T>(items: &[T]) -> HashSet<T>
where
    T: Hash + Eq + Clone,
{
    let mut seen = HashSet::with_capacity(items.len());
    let mut duplicates = HashSet::new();

    for item in items {
        if !seen.insert(item) && !duplicates.contains(item) {
            duplicates.insert(item.clone());
        }
    }

    log::trace!(
        "find_duplicates: {} items, {} duplicated values",
        items.len(),
        duplicates.len()
    );
    duplicates
}

/// Return the first-seen item for every key occurring at least twice, in the
/// order the keys became duplicated.
///
/// Lets values without `Hash`/`Eq`, such as floats, be grouped by a derived
/// key in a single pass.
pub fn find_duplicates_by_key<T, K, F>(items: &[T], mut key: F) -> Vec<T>
where
    T: Clone,
    K: Hash + Eq,
    F: FnMut(&T) -> K,
{
    // key -> (index of first occurrence, already reported)
    let mut seen: HashMap<K, (usize, bool)> = HashMap::with_capacity(items.len());
    let mut duplicates = Vec::new();

    for (index, item) in items.iter().enumerate() {
        match seen.entry(key(item)) {
            Entry::Vacant(entry) => {
                entry.insert((index, false));
            }
            Entry::Occupied(mut entry) => {
                let (first, reported) = entry.get_mut();
                if !*reported {
                    *reported = true;
                    duplicates.push(items[*first].clone());
                }
            }
        }
    }

    log::trace!(
        "find_duplicates_by_key: {} items, {} duplicated keys",
        items.len(),
        duplicates.len()
    );
    duplicates
}
