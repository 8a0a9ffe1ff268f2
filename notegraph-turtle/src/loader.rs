//! Directory loader for triple files
//!
//! Walks a directory tree for `.ttl` files and merges every successful
//! parse into one store. A file that fails to read or parse is logged and
//! skipped: a single malformed file never aborts the run.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use notegraph_graph::TripleStore;
use tracing::{debug, warn};

use crate::parser::parse;

/// Load every `.ttl` file under `dir` (recursively) into one store
///
/// Returns an error only when the top-level directory itself cannot be
/// read; per-file failures are logged at `warn` and skipped.
pub fn load_dir(dir: &Path) -> io::Result<TripleStore> {
    let mut files = Vec::new();
    collect_ttl_files(dir, &mut files)?;
    files.sort();

    let mut store = TripleStore::new();
    for path in &files {
        let input = match fs::read_to_string(path) {
            Ok(input) => input,
            Err(e) => {
                warn!(file = %path.display(), error = %e, "skipping unreadable triple file");
                continue;
            }
        };
        match parse(&input, &mut store) {
            Ok(()) => debug!(file = %path.display(), "loaded triple file"),
            Err(e) => {
                warn!(file = %path.display(), error = %e, "skipping malformed triple file");
            }
        }
    }
    debug!(files = files.len(), triples = store.len(), "triple store loaded");
    Ok(store)
}

fn collect_ttl_files(dir: &Path, out: &mut Vec<PathBuf>) -> io::Result<()> {
    for entry in fs::read_dir(dir)? {
        let entry = entry?;
        let path = entry.path();
        if path.is_dir() {
            collect_ttl_files(&path, out)?;
        } else if path.extension().is_some_and(|ext| ext == "ttl") {
            out.push(path);
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_load_dir_merges_files() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(
            dir.path().join("a.ttl"),
            "@prefix ex: <http://example.org/> .\nex:a ex:p ex:b .\n",
        )
        .unwrap();
        let sub = dir.path().join("nested");
        fs::create_dir(&sub).unwrap();
        fs::write(
            sub.join("b.ttl"),
            "@prefix ex: <http://example.org/> .\nex:b ex:p ex:c .\n",
        )
        .unwrap();
        // Non-ttl files are ignored
        fs::write(dir.path().join("notes.md"), "# not turtle").unwrap();

        let store = load_dir(dir.path()).unwrap();
        assert_eq!(store.len(), 2);
    }

    #[test]
    fn test_load_dir_skips_malformed() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(
            dir.path().join("good.ttl"),
            "@prefix ex: <http://example.org/> .\nex:a ex:p ex:b .\n",
        )
        .unwrap();
        fs::write(dir.path().join("bad.ttl"), "this is not turtle at all").unwrap();

        let store = load_dir(dir.path()).unwrap();
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_load_missing_dir_errors() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("does-not-exist");
        assert!(load_dir(&missing).is_err());
    }
}
