use log::info;
use wordflow::scheduler::{GreedyScheduler, LeveledScheduler, SequentialScheduler};

use crate::error::Result;
use crate::options::{Options, SchedulerKind};
use crate::pipeline::Report;
use crate::utils::{read_text, sink};

/// Reads `--input-file`, counts it with the configured scheduler and writes the sorted
/// entries to `--output`.
pub fn run(opts: &Options) -> Result<Report> {
    opts.validate()?;
    let wc = opts.pipeline()?;

    let records = read_text(&opts.input_file, opts.chunk_size)?;
    info!("Read {} records in {} partitions from {:?}",
          records.len(), records.n_partitions(), opts.input_file);

    let records = match opts.partitions {
        Some(n) => records.split(n),
        None => records
    };

    let report = match opts.scheduler {
        SchedulerKind::Greedy => {
            let s = opts.threads.map(GreedyScheduler::new).unwrap_or_default();
            wc.execute(records, &s)?
        },
        SchedulerKind::Leveled    => wc.execute(records, &LeveledScheduler)?,
        SchedulerKind::Sequential => wc.execute(records, &SequentialScheduler)?,
    };

    sink(&report.entries(), &opts.output, opts.shards)?;
    Ok(report)
}

#[cfg(test)]
mod app_test {
    use super::*;
    use std::fs;
    use std::path::Path;

    use clap::Parser;

    use crate::error::Error;

    const INPUT: &str = "hi there\nhi\nhi sue bob\nhi sue\n\nbob hi\n";

    fn options(dir: &Path, extra: &[&str]) -> Options {
        let input = dir.join("input.txt");
        fs::write(&input, INPUT).unwrap();
        let output = dir.join("out");
        let mut args = vec![
            "wordcount".to_owned(),
            "--input-file".to_owned(), input.to_string_lossy().into_owned(),
            "--output".to_owned(), output.to_string_lossy().into_owned(),
        ];
        args.extend(extra.iter().map(|a| a.to_string()));
        Options::try_parse_from(args).unwrap()
    }

    fn written(dir: &Path) -> String {
        fs::read_to_string(dir.join("out").join("part-00000")).unwrap()
    }

    #[test]
    fn test_run_writes_sorted_counts() {
        let dir = tempfile::tempdir().unwrap();
        let report = run(&options(dir.path(), &[])).unwrap();
        assert_eq!(report.stats.records, 6);
        assert_eq!(written(dir.path()), "hi: 5\nbob: 2\nsue: 2\nthere: 1\n");
    }

    #[test]
    fn test_run_schedulers_agree() {
        for extra in &[
            vec!["--scheduler", "sequential"],
            vec!["--scheduler", "leveled", "--partitions", "3"],
            vec!["--threads", "2", "--chunk-size", "1"],
        ] {
            let dir = tempfile::tempdir().unwrap();
            run(&options(dir.path(), extra)).unwrap();
            assert_eq!(written(dir.path()), "hi: 5\nbob: 2\nsue: 2\nthere: 1\n");
        }
    }

    #[test]
    fn test_run_spilled() {
        let dir = tempfile::tempdir().unwrap();
        let spill = dir.path().join("spill");
        let spill_arg = spill.to_string_lossy().into_owned();
        run(&options(dir.path(), &["--spill-dir", &spill_arg, "--chunk-size", "8"])).unwrap();
        assert_eq!(written(dir.path()), "hi: 5\nbob: 2\nsue: 2\nthere: 1\n");
        assert_eq!(fs::read_dir(&spill).unwrap().count(), 0);
    }

    #[test]
    fn test_chunking_without_partitions() {
        let dir = tempfile::tempdir().unwrap();
        let opts = options(dir.path(), &["--chunk-size", "1"]);
        assert_eq!(read_text(&opts.input_file, opts.chunk_size).unwrap().n_partitions(), 6);

        let opts = options(dir.path(), &["--chunk-size", "1", "--partitions", "2"]);
        let records = read_text(&opts.input_file, opts.chunk_size).unwrap();
        assert_eq!(records.split(2).n_partitions(), 2);
    }

    #[test]
    fn test_run_rejects_threads_without_greedy() {
        let dir = tempfile::tempdir().unwrap();
        let opts = options(dir.path(), &["--scheduler", "leveled", "--threads", "4"]);
        assert!(matches!(run(&opts), Err(Error::Config(_))));
        assert!(!dir.path().join("out").exists());
    }

    #[test]
    fn test_run_missing_input() {
        let dir = tempfile::tempdir().unwrap();
        let mut opts = options(dir.path(), &[]);
        opts.input_file = dir.path().join("missing.txt");
        assert!(matches!(run(&opts), Err(Error::Read { .. })));
    }
}
