use serde_derive::{Deserialize, Serialize};

use crate::counts::CountMap;
use crate::metrics::LineStats;
use crate::tokenizer::{Token, Tokenizer};

/// Counts every token in the sequence.  The result does not depend on the order the
/// tokens arrive in.
pub fn aggregate<I: IntoIterator<Item = Token>>(tokens: I) -> CountMap {
    tokens.into_iter().collect()
}

/// Aggregation over a subset of the records.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Partial {
    /// Token counts of the subset
    pub counts: CountMap,

    /// Line counters of the subset
    pub stats: LineStats,
}

impl Partial {
    /// Combines two partials of disjoint subsets
    pub fn merge(mut self, other: Partial) -> Partial {
        self.stats.merge(&other.stats);
        self.counts.merge(other.counts);
        self
    }
}

/// Tokenizes records one at a time into a local Partial.
pub struct Aggregator<'t> {
    tokenizer: &'t Tokenizer,
    partial: Partial,
}

impl<'t> Aggregator<'t> {

    /// Creates an empty aggregator
    pub fn new(tokenizer: &'t Tokenizer) -> Self {
        Aggregator { tokenizer, partial: Partial::default() }
    }

    /// Tokenizes and counts one record
    pub fn push(&mut self, record: &str) {
        self.partial.stats.record_line(record);
        for token in self.tokenizer.tokenize(record) {
            self.partial.counts.insert(token);
            self.partial.stats.tokens += 1;
        }
    }

    /// Finishes the block
    pub fn finish(self) -> Partial {
        self.partial
    }
}
