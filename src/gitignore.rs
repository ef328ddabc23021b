use std::collections::BTreeSet;
use std::fs::{self, OpenOptions};
use std::io::{self, Write};
use std::path::Path;

use crate::error::Result;

/// One line destined for (or already in) the ignore file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    pub name: String,
    pub is_comment: bool,
}

impl Entry {
    pub fn new(name: impl Into<String>) -> Self {
        let name = name.into();
        let is_comment = name.starts_with('#');
        Self { name, is_comment }
    }
}

#[derive(Debug, Default)]
pub struct Reconciliation {
    pub added: Vec<Entry>,
    pub skipped: Vec<Entry>,
    /// Non-comment entries only; comments partition but never count.
    pub add_count: usize,
    pub skip_count: usize,
}

/// Splits the candidates into entries that are new and entries the file
/// already contains. Membership is exact line match against the non-blank
/// lines of `existing`; duplicates within `candidates` are only deduplicated
/// against the file, not against each other.
pub fn reconcile(existing: &str, candidates: &[String]) -> Reconciliation {
    let ignored: BTreeSet<&str> = existing
        .lines()
        .filter(|line| !line.trim().is_empty())
        .collect();

    let mut result = Reconciliation::default();
    for candidate in candidates {
        let entry = Entry::new(candidate.clone());
        if ignored.contains(entry.name.as_str()) {
            if !entry.is_comment {
                result.skip_count += 1;
            }
            result.skipped.push(entry);
        } else {
            if !entry.is_comment {
                result.add_count += 1;
            }
            result.added.push(entry);
        }
    }
    result
}

/// Reads the ignore file, treating a missing file as empty contents.
pub fn read_ignore_file(path: &Path) -> Result<String> {
    match fs::read_to_string(path) {
        Ok(contents) => Ok(contents),
        Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(String::new()),
        Err(err) => Err(err.into()),
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteMode {
    Append,
    Overwrite,
}

/// Writes the entries to the ignore file, newline-terminated. An empty entry
/// list performs no I/O at all, so a "nothing to add" run never creates or
/// truncates the file.
pub fn apply(path: &Path, entries: &[Entry], mode: WriteMode) -> Result<()> {
    if entries.is_empty() {
        return Ok(());
    }

    let mut content = entries
        .iter()
        .map(|entry| entry.name.as_str())
        .collect::<Vec<_>>()
        .join("\n");
    content.push('\n');

    match mode {
        WriteMode::Overwrite => {
            match fs::remove_file(path) {
                Ok(()) => {}
                Err(err) if err.kind() == io::ErrorKind::NotFound => {}
                Err(err) => return Err(err.into()),
            }
            fs::write(path, content)?;
        }
        WriteMode::Append => {
            let mut file = OpenOptions::new().append(true).create(true).open(path)?;
            file.write_all(content.as_bytes())?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn entries(names: &[&str]) -> Vec<String> {
        names.iter().map(|name| name.to_string()).collect()
    }

    #[test]
    fn partition_covers_every_candidate_exactly_once() {
        let existing = "node_modules/\n*.log\n";
        let candidates = entries(&["node_modules/", "*.out", "#tools", "*.log"]);

        let result = reconcile(existing, &candidates);

        assert_eq!(result.added.len() + result.skipped.len(), candidates.len());
        let added: Vec<_> = result.added.iter().map(|e| e.name.as_str()).collect();
        let skipped: Vec<_> = result.skipped.iter().map(|e| e.name.as_str()).collect();
        assert_eq!(added, ["*.out", "#tools"]);
        assert_eq!(skipped, ["node_modules/", "*.log"]);
    }

    #[test]
    fn comments_partition_but_do_not_count() {
        let result = reconcile("", &entries(&["#note", "*.out"]));

        assert_eq!(result.added.len(), 2);
        assert_eq!(result.add_count, 1);
        assert_eq!(result.skip_count, 0);
    }

    #[test]
    fn existing_comments_are_deduplicated_like_any_line() {
        let result = reconcile("#note\n", &entries(&["#note"]));

        assert_eq!(result.skipped.len(), 1);
        assert_eq!(result.skip_count, 0);
    }

    #[test]
    fn duplicate_candidates_are_not_deduplicated_against_each_other() {
        let result = reconcile("", &entries(&["*.out", "*.out"]));

        assert_eq!(result.added.len(), 2);
        assert_eq!(result.add_count, 2);
    }

    #[test]
    fn blank_lines_in_the_file_are_ignored() {
        let result = reconcile("node_modules/\n\n  \n*.log\n", &entries(&["*.out"]));

        assert_eq!(result.add_count, 1);
        assert_eq!(result.skip_count, 0);
    }

    #[test]
    fn reconciling_twice_after_a_write_adds_nothing() {
        let candidates = entries(&["node_modules/", "*.out"]);
        let first = reconcile("", &candidates);
        assert_eq!(first.add_count, 2);

        let mut written = first
            .added
            .iter()
            .map(|e| e.name.as_str())
            .collect::<Vec<_>>()
            .join("\n");
        written.push('\n');

        let second = reconcile(&written, &candidates);
        assert_eq!(second.add_count, 0);
        assert_eq!(second.skip_count, 2);
    }

    #[test]
    fn missing_ignore_file_reads_as_empty() {
        let dir = TempDir::new().unwrap();
        let contents = read_ignore_file(&dir.path().join(".gitignore")).unwrap();
        assert_eq!(contents, "");
    }

    #[test]
    fn append_keeps_prior_contents() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join(".gitignore");
        fs::write(&path, "a\nb\n").unwrap();

        apply(&path, &[Entry::new("c")], WriteMode::Append).unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "a\nb\nc\n");
    }

    #[test]
    fn overwrite_replaces_the_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join(".gitignore");
        fs::write(&path, "a\nb\n").unwrap();

        apply(&path, &[Entry::new("c")], WriteMode::Overwrite).unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "c\n");
    }

    #[test]
    fn empty_entry_list_performs_no_io() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join(".gitignore");

        apply(&path, &[], WriteMode::Append).unwrap();
        assert!(!path.exists());

        fs::write(&path, "a\n").unwrap();
        apply(&path, &[], WriteMode::Overwrite).unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "a\n");
    }

    #[test]
    fn append_creates_a_missing_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join(".gitignore");

        apply(
            &path,
            &[Entry::new("node_modules/"), Entry::new("*.out")],
            WriteMode::Append,
        )
        .unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "node_modules/\n*.out\n");
    }
}
