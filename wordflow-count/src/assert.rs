//! Output assertions for pipeline tests.  Both checks ignore ordering, since partitions
//! may be merged in any order.

use std::collections::{BTreeSet, HashSet};

/// Asserts that `actual` holds exactly the `expected` entries, in any order.
pub fn contains_in_any_order<I, E>(actual: I, expected: &[&str])
    where I: IntoIterator<Item = E>,
          E: AsRef<str> {
    let actual: Vec<String> = actual.into_iter().map(|e| e.as_ref().to_owned()).collect();
    let actual_set: HashSet<&str> = actual.iter().map(|s| s.as_str()).collect();
    let expected_set: HashSet<&str> = expected.iter().cloned().collect();

    let missing: BTreeSet<_> = expected_set.difference(&actual_set).collect();
    let unexpected: BTreeSet<_> = actual_set.difference(&expected_set).collect();
    assert!(missing.is_empty() && unexpected.is_empty(),
            "output mismatch: missing {:?}, unexpected {:?}", missing, unexpected);
    assert_eq!(actual.len(), actual_set.len(), "output has duplicate entries: {:?}", actual);
}

/// Asserts that every item of `actual` belongs to `vocabulary`.
pub fn all_within<I, E>(actual: I, vocabulary: &[&str])
    where I: IntoIterator<Item = E>,
          E: AsRef<str> {
    let vocabulary: HashSet<&str> = vocabulary.iter().cloned().collect();
    for item in actual {
        let item = item.as_ref();
        assert!(vocabulary.contains(item), "{:?} is not in {:?}", item, vocabulary);
    }
}

#[cfg(test)]
mod assert_test {
    use super::*;

    #[test]
    fn test_any_order() {
        contains_in_any_order(vec!["b: 1", "a: 2"], &["a: 2", "b: 1"]);
        contains_in_any_order(Vec::<String>::new(), &[]);
    }

    #[test]
    #[should_panic(expected = "missing")]
    fn test_missing_entry() {
        contains_in_any_order(vec!["a: 2"], &["a: 2", "b: 1"]);
    }

    #[test]
    #[should_panic(expected = "unexpected")]
    fn test_extra_entry() {
        contains_in_any_order(vec!["a: 2", "c: 1"], &["a: 2"]);
    }

    #[test]
    #[should_panic(expected = "duplicate")]
    fn test_duplicate_entry() {
        contains_in_any_order(vec!["a: 2", "a: 2"], &["a: 2"]);
    }

    #[test]
    fn test_all_within() {
        all_within(vec!["hi", "hi", "bob"], &["hi", "bob", "sue"]);
        all_within(Vec::<&str>::new(), &["hi"]);
    }

    #[test]
    #[should_panic(expected = "is not in")]
    fn test_outside_vocabulary() {
        all_within(vec!["hi", "alice"], &["hi", "bob"]);
    }
}
