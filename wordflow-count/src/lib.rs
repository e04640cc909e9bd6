//! wordflow-count
//! ---
//! wordflow-count counts word occurrences across a bounded collection of text records.
//!
//! What is it?
//! ---
//! Records are split into partitions.  Each partition is tokenized and counted as an
//! independent task, producing a partial count map; the partials are then merged
//! pairwise with a tree reduction and rendered as `"<word>: <count>"` lines.  Merging is
//! pointwise addition, so the result is the same however the records are partitioned
//! and whichever task finishes first.
//!
//! Example - Word Count
//! ---
//!
//! ```rust
//! use wordflow::scheduler::GreedyScheduler;
//! use wordflow_count::pipeline::WordCount;
//!
//! let records = vec!["hi there", "hi", "hi sue bob", "hi sue", "", "bob hi"];
//! let counts = WordCount::default()
//!     .with_partitions(3)
//!     .run(records, &GreedyScheduler::new(2));
//!
//! assert_eq!(counts.len(), 4);
//! assert!(counts.iter().any(|e| e.as_str() == "hi: 5"));
//! ```
//!
//! Example - Counting a file
//! ---
//! ```rust,no_run
//! use wordflow::scheduler::LeveledScheduler;
//! use wordflow_count::pipeline::WordCount;
//! use wordflow_count::utils::{read_text, sink};
//!
//! let records = read_text("kinglear.txt", 4_000_000).expect("File missing");
//! let report = WordCount::default().count(records.split(8), &LeveledScheduler);
//! sink(&report.entries(), "counts".as_ref(), 1).expect("Unable to write counts");
//! ```

#![warn(missing_docs)]

/// Errors and the crate Result alias
#[allow(missing_docs)]
pub mod error;

/// Splits records into tokens
pub mod tokenizer;

/// Defines CountMap, the mergeable per-token counts
pub mod counts;

/// Counts tokens into partial aggregations
pub mod aggregate;

/// Line counters gathered alongside the counts
pub mod metrics;

/// Renders counts as text
pub mod format;

/// Defines MemoryCollection and on-disk partials
pub mod collection;

/// Drives the word count over a collection
pub mod pipeline;

/// Defines useful utilities, such as reading and writing text files
pub mod utils;

/// Command line options
pub mod options;

/// Runs the `wordcount` binary end to end
pub mod app;

#[cfg(test)]
mod assert;
