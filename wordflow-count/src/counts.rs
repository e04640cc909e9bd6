use std::collections::hash_map;
use std::collections::HashMap;

use serde_derive::{Deserialize, Serialize};

use crate::tokenizer::Token;

/// Occurrence counts per distinct token.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CountMap {
    counts: HashMap<Token, u64>
}

impl CountMap {

    /// Creates an empty CountMap
    pub fn new() -> Self {
        CountMap::default()
    }

    /// Counts one more occurrence of `token`
    pub fn insert(&mut self, token: Token) {
        self.add(token, 1);
    }

    /// Counts `n` more occurrences of `token`.  Adding zero leaves the map untouched.
    pub fn add(&mut self, token: Token, n: u64) {
        if n > 0 {
            *self.counts.entry(token).or_insert(0) += n;
        }
    }

    /// Returns the count for `word`, zero if it was never seen
    pub fn get(&self, word: &str) -> u64 {
        self.counts.get(word).cloned().unwrap_or(0)
    }

    /// Number of distinct tokens
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    /// True when no token has been counted
    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Sum of all counts, equal to the number of tokens consumed
    pub fn total(&self) -> u64 {
        self.counts.values().sum()
    }

    /// Iterates over (token, count) pairs in no particular order
    pub fn iter(&self) -> impl Iterator<Item = (&Token, u64)> {
        self.counts.iter().map(|(k, v)| (k, *v))
    }

    /// Adds every count in `other` into this map.  Pointwise addition is commutative and
    /// associative, so partial maps may be merged in any order.
    /// ```rust
    ///   use wordflow_count::counts::CountMap;
    ///   use wordflow_count::tokenizer::Token;
    ///
    ///   let mut left: CountMap = vec![Token::from("hi"), "bob".into()].into_iter().collect();
    ///   let right: CountMap = vec![Token::from("hi")].into_iter().collect();
    ///   left.merge(right);
    ///   assert_eq!(left.get("hi"), 2);
    ///   assert_eq!(left.get("bob"), 1);
    /// ```
    pub fn merge(&mut self, mut other: CountMap) {
        // Fold the smaller map into the larger one
        if other.counts.len() > self.counts.len() {
            std::mem::swap(&mut self.counts, &mut other.counts);
        }
        for (k, v) in other.counts {
            self.add(k, v);
        }
    }

    /// Consuming form of `merge`, convenient as a reducer
    pub fn merged(mut self, other: CountMap) -> CountMap {
        self.merge(other);
        self
    }
}

impl FromIterator<Token> for CountMap {
    fn from_iter<I: IntoIterator<Item = Token>>(iter: I) -> Self {
        let mut counts = CountMap::new();
        counts.extend(iter);
        counts
    }
}

impl Extend<Token> for CountMap {
    fn extend<I: IntoIterator<Item = Token>>(&mut self, iter: I) {
        for token in iter {
            self.insert(token);
        }
    }
}

impl IntoIterator for CountMap {
    type Item = (Token, u64);
    type IntoIter = hash_map::IntoIter<Token, u64>;

    fn into_iter(self) -> Self::IntoIter {
        self.counts.into_iter()
    }
}
