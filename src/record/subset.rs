//! Key-based subsetting for dynamically keyed records.
//!
//! [`pick`] and [`omit`] operate on ordered maps, the dynamic analogue of a
//! keyed record. Both build a fresh map; the source is only read.

use std::collections::BTreeMap;

/// Builds a new record containing only the named keys.
///
/// Keys absent from the source record are skipped silently, mirroring the
/// behaviour of projecting a partial shape. The source record is not
/// modified.
///
/// # Examples
///
/// ```rust
/// use std::collections::BTreeMap;
/// use refold::record::pick;
///
/// let record = BTreeMap::from([("name", "Laura"), ("age", "27"), ("role", "admin")]);
/// let slim = pick(&record, &["name", "role"]);
///
/// assert_eq!(slim, BTreeMap::from([("name", "Laura"), ("role", "admin")]));
/// assert_eq!(record.len(), 3);
/// ```
pub fn pick<K, V>(record: &BTreeMap<K, V>, keys: &[K]) -> BTreeMap<K, V>
where
    K: Ord + Clone,
    V: Clone,
{
    keys.iter()
        .filter_map(|key| {
            record
                .get_key_value(key)
                .map(|(key, value)| (key.clone(), value.clone()))
        })
        .collect()
}

/// Builds a new record containing every key except the named ones.
///
/// The source record is not modified.
///
/// # Examples
///
/// ```rust
/// use std::collections::BTreeMap;
/// use refold::record::omit;
///
/// let record = BTreeMap::from([("name", "Laura"), ("age", "27"), ("role", "admin")]);
/// let redacted = omit(&record, &["age"]);
///
/// assert_eq!(redacted, BTreeMap::from([("name", "Laura"), ("role", "admin")]));
/// assert_eq!(record.len(), 3);
/// ```
pub fn omit<K, V>(record: &BTreeMap<K, V>, keys: &[K]) -> BTreeMap<K, V>
where
    K: Ord + Clone,
    V: Clone,
{
    record
        .iter()
        .filter(|(key, _)| !keys.contains(key))
        .map(|(key, value)| (key.clone(), value.clone()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> BTreeMap<String, i32> {
        BTreeMap::from([
            ("one".to_string(), 1),
            ("two".to_string(), 2),
            ("three".to_string(), 3),
        ])
    }

    #[test]
    fn test_pick_keeps_only_named_keys() {
        let picked = pick(&sample(), &["one".to_string(), "three".to_string()]);
        assert_eq!(picked.len(), 2);
        assert_eq!(picked.get("one"), Some(&1));
        assert_eq!(picked.get("two"), None);
    }

    #[test]
    fn test_pick_ignores_absent_keys() {
        let picked = pick(&sample(), &["missing".to_string()]);
        assert!(picked.is_empty());
    }

    #[test]
    fn test_omit_drops_named_keys() {
        let omitted = omit(&sample(), &["two".to_string()]);
        assert_eq!(omitted.len(), 2);
        assert_eq!(omitted.get("two"), None);
    }

    #[test]
    fn test_pick_and_omit_partition_the_record() {
        let record = sample();
        let keys = ["one".to_string()];
        let picked = pick(&record, &keys);
        let omitted = omit(&record, &keys);
        assert_eq!(picked.len() + omitted.len(), record.len());
    }
}
