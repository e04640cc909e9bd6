use std::fs::{self, File};
use std::io::prelude::*;
use std::io::{BufReader, BufWriter};
use std::path::Path;

use log::{debug, info, warn};

use crate::collection::memory::MemoryCollection;
use crate::error::{Error, Result};

/// Reads one record per line from `reader`, starting a new partition once the current one
/// holds at least `chunk_size` bytes.  Line terminators are stripped.  Lines that are not
/// valid UTF-8 are kept, with each invalid sequence replaced by U+FFFD.
pub fn read_lines<R: BufRead>(mut reader: R, chunk_size: u64) -> Result<MemoryCollection<String>> {
    let chunk_size = chunk_size.max(1);
    let mut parts = Vec::new();
    let mut current = Vec::new();
    let mut current_size = 0u64;
    let mut buf = Vec::new();
    let mut line_no = 0usize;
    loop {
        buf.clear();
        let size = reader.read_until(b'\n', &mut buf)?;
        if size == 0 {
            break;
        }
        line_no += 1;
        if buf.ends_with(b"\n") {
            buf.pop();
            if buf.ends_with(b"\r") {
                buf.pop();
            }
        }
        let line = match String::from_utf8(std::mem::take(&mut buf)) {
            Ok(line) => line,
            Err(e) => {
                warn!("Line {} is not valid UTF-8, replacing invalid bytes", line_no);
                String::from_utf8_lossy(e.as_bytes()).into_owned()
            }
        };
        current.push(line);
        current_size += size as u64;
        if current_size >= chunk_size {
            parts.push(std::mem::take(&mut current));
            current_size = 0;
        }
    }
    if !current.is_empty() {
        parts.push(current);
    }
    debug!("Read {} partitions", parts.len());
    Ok(MemoryCollection::from_partitions(parts))
}

/// Reads a newline delimited text file into a MemoryCollection, `chunk_size` bytes per
/// partition.
pub fn read_text<P: AsRef<Path>>(path: P, chunk_size: u64) -> Result<MemoryCollection<String>> {
    let path = path.as_ref();
    let f = File::open(path)
        .map_err(|source| Error::Read { path: path.to_owned(), source })?;
    read_lines(BufReader::new(f), chunk_size).map_err(|e| match e {
        Error::Io(source) => Error::Read { path: path.to_owned(), source },
        other => other
    })
}

/// Writes each entry to disk, newline delimited, dealing entries round robin across
/// `shards` files named `part-00000`, `part-00001`, ... within `path`.  Shards left in
/// `path` by an earlier write are removed first.  Returns the number of entries written.
pub fn sink<E: AsRef<str>>(entries: &[E], path: &Path, shards: usize) -> Result<usize> {
    fs::create_dir_all(path)
        .map_err(|source| Error::Write { path: path.to_owned(), source })?;
    clear_shards(path)?;

    let shards = shards.max(1);
    for idx in 0..shards {
        let name = path.join(format!("part-{:05}", idx));
        let write = |name: &Path| -> std::io::Result<()> {
            let mut bw = BufWriter::new(File::create(name)?);
            for line in entries.iter().skip(idx).step_by(shards) {
                bw.write_all(line.as_ref().as_bytes())?;
                bw.write_all(b"\n")?;
            }
            bw.flush()
        };
        write(&name).map_err(|source| Error::Write { path: name.clone(), source })?;
    }

    info!("Wrote {} entries to {} shards in {:?}", entries.len(), shards, path);
    Ok(entries.len())
}

fn clear_shards(path: &Path) -> Result<()> {
    let err = |source| Error::Write { path: path.to_owned(), source };
    for dir_entry in fs::read_dir(path).map_err(err)? {
        let dir_entry = dir_entry.map_err(err)?;
        let is_shard = dir_entry.file_name().to_string_lossy().starts_with("part-");
        if is_shard && dir_entry.path().is_file() {
            debug!("Removing stale shard {:?}", dir_entry.path());
            fs::remove_file(dir_entry.path())
                .map_err(|source| Error::Write { path: dir_entry.path(), source })?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod utils_test {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_read_lines() {
        let col = read_lines(Cursor::new("hi there\r\nhi\n\nbob hi"), 4_000_000).unwrap();
        assert_eq!(col.n_partitions(), 1);
        assert_eq!(col.to_vec(), vec!["hi there", "hi", "", "bob hi"]);
    }

    #[test]
    fn test_read_lines_chunks() {
        let col = read_lines(Cursor::new("aaaa\nbb\ncc\nd\n"), 5).unwrap();
        assert_eq!(col.partitions(), &[
            vec!["aaaa".to_owned()],
            vec!["bb".to_owned(), "cc".to_owned()],
            vec!["d".to_owned()],
        ]);
    }

    #[test]
    fn test_read_lines_invalid_utf8() {
        let input: &[u8] = b"hi th\xffere\nbob\n";
        let col = read_lines(Cursor::new(input), 4_000_000).unwrap();
        assert_eq!(col.to_vec(), vec!["hi th\u{FFFD}ere", "bob"]);
    }

    #[test]
    fn test_read_lines_empty() {
        let col = read_lines(Cursor::new(""), 10).unwrap();
        assert!(col.is_empty());
        assert_eq!(col.n_partitions(), 0);
    }

    #[test]
    fn test_read_text() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("input.txt");
        fs::write(&path, "hi there\nhi sue bob\n").unwrap();
        let col = read_text(&path, 1024).unwrap();
        assert_eq!(col.to_vec(), vec!["hi there", "hi sue bob"]);
    }

    #[test]
    fn test_read_text_missing() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing.txt");
        match read_text(&path, 1024) {
            Err(Error::Read { path: p, .. }) => assert_eq!(p, path),
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[test]
    fn test_sink_shards() {
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("out");
        let entries = vec!["hi: 5", "bob: 2", "sue: 2", "there: 1", "alice: 1"];
        assert_eq!(sink(&entries, &out, 2).unwrap(), 5);

        let first = fs::read_to_string(out.join("part-00000")).unwrap();
        let second = fs::read_to_string(out.join("part-00001")).unwrap();
        assert_eq!(first, "hi: 5\nsue: 2\nalice: 1\n");
        assert_eq!(second, "bob: 2\nthere: 1\n");
    }

    #[test]
    fn test_sink_empty() {
        let dir = tempfile::tempdir().unwrap();
        let entries: Vec<String> = Vec::new();
        assert_eq!(sink(&entries, dir.path(), 0).unwrap(), 0);
        assert_eq!(fs::read_to_string(dir.path().join("part-00000")).unwrap(), "");
    }

    #[test]
    fn test_sink_replaces_stale_shards() {
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("out");
        sink(&["a: 3", "b: 2", "c: 1"], &out, 3).unwrap();
        fs::write(out.join("notes.txt"), "keep").unwrap();
        sink(&["hi: 1"], &out, 1).unwrap();

        let mut names: Vec<String> = fs::read_dir(&out).unwrap()
            .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
            .collect();
        names.sort();
        assert_eq!(names, vec!["notes.txt", "part-00000"]);
        assert_eq!(fs::read_to_string(out.join("part-00000")).unwrap(), "hi: 1\n");
    }
}
