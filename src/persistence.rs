// File: src/persistence.rs
use crate::core::types::WordIndex;
use crate::errors::{MajorError, Result};
use serde::{Deserialize, Serialize};
use std::fs::{self, File};
use std::io::{BufReader, BufWriter, Write};
use std::path::Path;
use tempfile::NamedTempFile;

/// The stored form of a built index.
#[derive(Clone, Serialize, Deserialize)]
struct IndexSnapshot {
    version: u32,
    index: WordIndex,
}

const SNAPSHOT_VERSION: u32 = 1;

/// Writes through a temp file in the target directory and renames it into
/// place, so readers never see a half written file.
fn write_atomically<F>(path: &Path, write: F) -> Result<()>
where
    F: FnOnce(&mut BufWriter<&NamedTempFile>) -> Result<()>,
{
    let parent_dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    fs::create_dir_all(parent_dir)?;

    let temp_file = NamedTempFile::new_in(parent_dir)?;
    {
        let mut writer = BufWriter::new(&temp_file);
        write(&mut writer)?;
        writer.flush()?;
    }
    temp_file.persist(path)?;
    Ok(())
}

pub fn write_report(path: &Path, contents: &str) -> Result<()> {
    write_atomically(path, |w| Ok(w.write_all(contents.as_bytes())?))
}

pub fn write_json<T: Serialize>(path: &Path, value: &T) -> Result<()> {
    write_atomically(path, |w| Ok(serde_json::to_writer_pretty(w, value)?))
}

/// One `"word", "pronunciation", digits` line per indexed word.
pub fn write_word_list<'a, I>(path: &Path, lines: I) -> Result<()>
where
    I: IntoIterator<Item = (&'a str, &'a str, &'a str)>,
{
    write_atomically(path, |w| {
        for (word, pronunciation, digits) in lines {
            writeln!(w, "\"{}\", \"{}\", {}", word, pronunciation, digits)?;
        }
        Ok(())
    })
}

pub fn save_snapshot(index: &WordIndex, path: &Path) -> Result<()> {
    let snapshot = IndexSnapshot {
        version: SNAPSHOT_VERSION,
        index: index.clone(),
    };
    write_atomically(path, |w| Ok(bincode::serialize_into(w, &snapshot)?))
}

pub fn load_snapshot(path: &Path) -> Result<WordIndex> {
    if !path.is_file() {
        return Err(MajorError::MissingInput(path.to_path_buf()));
    }
    let reader = BufReader::new(File::open(path)?);
    let snapshot: IndexSnapshot = bincode::deserialize_from(reader)?;
    if snapshot.version != SNAPSHOT_VERSION {
        return Err(MajorError::InvalidConfig(format!(
            "index snapshot version {} is not supported",
            snapshot.version
        )));
    }
    Ok(snapshot.index)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::types::{GrammaticalClass, WordIndexEntry};

    #[test]
    fn snapshot_keeps_the_index() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("index.bin");
        let mut index = WordIndex::new();
        index.insert(
            "katt".into(),
            WordIndexEntry { word: "katt".into(), digits: "71".into(), class: GrammaticalClass::Noun },
        );
        save_snapshot(&index, &path).unwrap();
        assert_eq!(load_snapshot(&path).unwrap(), index);
    }

    #[test]
    fn report_replaces_an_existing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("report.html");
        write_report(&path, "old").unwrap();
        write_report(&path, "new").unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "new");
        assert_eq!(fs::read_dir(dir.path()).unwrap().count(), 1);
    }

    #[test]
    fn word_list_lines() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("words.txt");
        write_word_list(&path, [("katt", "k'at:", "71")]).unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "\"katt\", \"k'at:\", 71\n");
    }
}
