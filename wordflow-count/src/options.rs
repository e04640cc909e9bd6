use std::path::PathBuf;

use clap::{Parser, ValueEnum};

use crate::error::{Error, Result};
use crate::pipeline::WordCount;
use crate::tokenizer::{CaseFold, Tokenizer, DEFAULT_PATTERN};

/// Which Scheduler executes the pipeline
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
#[value(rename_all = "lowercase")]
pub enum SchedulerKind {
    /// Dedicated pool of `--threads` workers
    #[default]
    Greedy,

    /// Global rayon pool
    Leveled,

    /// Calling thread only
    Sequential,
}

/// Options for the `wordcount` binary.
#[derive(Debug, Clone, Parser)]
#[command(name = "wordcount", version, about = "Counts word occurrences in a text file")]
pub struct Options {
    /// Newline delimited text file to read
    #[arg(long)]
    pub input_file: PathBuf,

    /// Directory the formatted counts are written to
    #[arg(long)]
    pub output: PathBuf,

    /// Re-partitions the records round robin into this many partitions.  Without it,
    /// each `--chunk-size` chunk of the input is counted as its own partition
    #[arg(long)]
    pub partitions: Option<usize>,

    /// Bytes of input read into each partition
    #[arg(long, default_value_t = 4_000_000)]
    pub chunk_size: u64,

    /// Scheduler used to run partition tasks
    #[arg(long, value_enum, default_value_t = SchedulerKind::Greedy)]
    pub scheduler: SchedulerKind,

    /// Worker threads for the greedy scheduler
    #[arg(long)]
    pub threads: Option<usize>,

    /// Delimiter regex separating words
    #[arg(long, default_value = DEFAULT_PATTERN)]
    pub pattern: String,

    /// Case policy applied to every word
    #[arg(long = "case", value_enum, default_value_t = CaseFold::Preserve)]
    pub case_fold: CaseFold,

    /// Spill partial counts to this directory instead of merging in memory
    #[arg(long)]
    pub spill_dir: Option<PathBuf>,

    /// Number of output files
    #[arg(long, default_value_t = 1)]
    pub shards: usize,
}

impl Options {

    /// Rejects option combinations that would otherwise be silently ignored
    pub fn validate(&self) -> Result<()> {
        if self.threads.is_some() && self.scheduler != SchedulerKind::Greedy {
            return Err(Error::Config(format!(
                "--threads only applies to the greedy scheduler, not {:?}", self.scheduler)));
        }
        Ok(())
    }

    /// Builds the tokenizer described by `--pattern` and `--case`
    pub fn tokenizer(&self) -> Result<Tokenizer> {
        Tokenizer::new(&self.pattern, self.case_fold)
    }

    /// Builds the configured pipeline
    pub fn pipeline(&self) -> Result<WordCount> {
        let wc = WordCount::new(self.tokenizer()?)
            .with_partitions(self.partitions.unwrap_or(1));
        Ok(match self.spill_dir {
            Some(ref dir) => wc.spill_to(dir.clone()),
            None => wc
        })
    }
}
