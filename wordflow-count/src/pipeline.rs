//! WordCount
//! ---
//! Drives the tokenize, aggregate and format stages over a MemoryCollection.  Every
//! partition is aggregated as an independent task into a local `Partial`, and the
//! partials are then merged with a tree reduction.  No state is shared between tasks.
//!

use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

use log::{debug, info};
use wordflow::reduce::tree_reduce;
use wordflow::scheduler::Scheduler;

use crate::aggregate::{Aggregator, Partial};
use crate::collection::memory::MemoryCollection;
use crate::collection::spill::SpilledPartial;
use crate::counts::CountMap;
use crate::error::{Error, Result};
use crate::format::{format_counts, format_entry, FormattedEntry};
use crate::metrics::LineStats;
use crate::tokenizer::Tokenizer;

/// Final result of a word count.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Report {
    /// Exact count per distinct token
    pub counts: CountMap,

    /// Line counters across every record
    pub stats: LineStats,
}

impl Report {
    fn from_partial(partial: Partial) -> Report {
        Report { counts: partial.counts, stats: partial.stats }
    }

    /// Every entry formatted, as a set
    pub fn formatted(&self) -> HashSet<FormattedEntry> {
        format_counts(&self.counts).into_iter().collect()
    }

    /// Every entry formatted, most frequent first and ties broken by token
    pub fn entries(&self) -> Vec<FormattedEntry> {
        let mut pairs: Vec<_> = self.counts.iter().collect();
        pairs.sort_by(|(t1, c1), (t2, c2)| c2.cmp(c1).then_with(|| t1.cmp(t2)));
        pairs.into_iter().map(|(token, count)| format_entry(token, count)).collect()
    }
}

/// Batch word count pipeline.
#[derive(Debug, Clone)]
pub struct WordCount {
    tokenizer: Tokenizer,
    partitions: usize,
    spill_dir: Option<PathBuf>,
}

impl WordCount {

    /// Creates a pipeline using a single partition and no spilling
    pub fn new(tokenizer: Tokenizer) -> Self {
        WordCount { tokenizer, partitions: 1, spill_dir: None }
    }

    /// Number of partitions `run` splits its records into
    pub fn with_partitions(mut self, partitions: usize) -> Self {
        self.partitions = partitions.max(1);
        self
    }

    /// Spills every partial aggregation to `dir` during `execute`
    pub fn spill_to<P: Into<PathBuf>>(mut self, dir: P) -> Self {
        self.spill_dir = Some(dir.into());
        self
    }

    /// The tokenizer applied to each record
    pub fn tokenizer(&self) -> &Tokenizer {
        &self.tokenizer
    }

    /// Configured partition count
    pub fn partitions(&self) -> usize {
        self.partitions
    }

    fn aggregate_partition(&self, idx: usize, records: Vec<String>) -> Partial {
        let mut agg = Aggregator::new(&self.tokenizer);
        for record in records.iter() {
            agg.push(record);
        }
        let partial = agg.finish();
        debug!("Partition {}: {} records, {} distinct tokens",
               idx, partial.stats.records, partial.counts.len());
        partial
    }

    fn report(&self, partial: Option<Partial>) -> Report {
        let report = Report::from_partial(partial.unwrap_or_default());
        info!("Counted {} tokens ({} distinct) across {} records, {} empty",
              report.stats.tokens, report.counts.len(),
              report.stats.records, report.stats.empty_lines);
        report
    }

    /// Counts the records in memory, one task per partition of `records`.
    pub fn count<S: Scheduler>(&self, records: MemoryCollection<String>, s: &S) -> Report {
        let partials = records.apply(s, |idx, part| self.aggregate_partition(idx, part));
        self.report(tree_reduce(s, partials, Partial::merge))
    }

    /// Counts the records like `count`, but writes every partial and every intermediate
    /// merge to `dir`, holding at most the two sides of a merge in memory per task.
    pub fn count_spilled<S: Scheduler>(
        &self,
        records: MemoryCollection<String>,
        dir: &Path,
        s: &S
    ) -> Result<Report> {
        fs::create_dir_all(dir)
            .map_err(|source| Error::Write { path: dir.to_owned(), source })?;

        let spilled = records.apply(s, |idx, part| {
            SpilledPartial::write(dir, &self.aggregate_partition(idx, part))
        });

        let merged = tree_reduce(s, spilled, |left, right| {
            let (left, right) = (left?, right?);
            let partial = left.read()?.merge(right.read()?);
            SpilledPartial::write(dir, &partial)
        });

        let partial = match merged {
            Some(spilled) => Some(spilled?.read()?),
            None => None
        };
        Ok(self.report(partial))
    }

    /// Counts the records, spilling to disk if a spill directory was configured.
    pub fn execute<S: Scheduler>(&self, records: MemoryCollection<String>, s: &S) -> Result<Report> {
        match self.spill_dir {
            Some(ref dir) => self.count_spilled(records, dir, s),
            None => Ok(self.count(records, s))
        }
    }

    /// Counts `records` in memory across the configured number of partitions and
    /// returns the formatted entries.  Entries come back as a set; no order is implied.
    pub fn run<S, I, R>(&self, records: I, s: &S) -> HashSet<FormattedEntry>
        where S: Scheduler,
              I: IntoIterator<Item = R>,
              R: Into<String> {
        let col: MemoryCollection<String> = records.into_iter().map(Into::into).collect();
        self.count(col.split(self.partitions), s).formatted()
    }
}

impl Default for WordCount {
    fn default() -> Self {
        WordCount::new(Tokenizer::default())
    }
}
