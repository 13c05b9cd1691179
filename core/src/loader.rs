//! Reading document collections from disk.
//!
//! Accepted inputs are `.csv` (header row with `id`, `title`, `content`),
//! `.json` (an array of documents or a single document) and `.jsonl` (one
//! document per line). A directory is walked in file-name order and every
//! supported file beneath it is loaded.

use crate::document::Document;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};
use thiserror::Error;
use walkdir::WalkDir;

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to read {}: {source}", path.display())]
    Io { path: PathBuf, source: std::io::Error },
    #[error("failed to walk {}: {source}", path.display())]
    Walk { path: PathBuf, source: walkdir::Error },
    #[error("malformed CSV in {}: {source}", path.display())]
    Csv { path: PathBuf, source: csv::Error },
    #[error("malformed JSON in {}: {source}", path.display())]
    Json { path: PathBuf, source: serde_json::Error },
    #[error("malformed JSON on line {line} of {}: {source}", path.display())]
    JsonLine { path: PathBuf, line: usize, source: serde_json::Error },
    #[error("unsupported collection format: {}", path.display())]
    UnsupportedFormat { path: PathBuf },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Format {
    Csv,
    Json,
    JsonLines,
}

fn format_of(path: &Path) -> Option<Format> {
    match path.extension().and_then(|s| s.to_str()).map(str::to_ascii_lowercase).as_deref() {
        Some("csv") => Some(Format::Csv),
        Some("json") => Some(Format::Json),
        Some("jsonl") => Some(Format::JsonLines),
        _ => None,
    }
}

/// Load a collection from a file or a directory of files.
pub fn load_collection<P: AsRef<Path>>(path: P) -> Result<Vec<Document>, LoadError> {
    let path = path.as_ref();
    if path.is_dir() {
        return load_dir(path);
    }
    let format = format_of(path).ok_or_else(|| LoadError::UnsupportedFormat { path: path.to_path_buf() })?;
    let file = File::open(path).map_err(|source| LoadError::Io { path: path.to_path_buf(), source })?;
    let docs = match format {
        Format::Csv => read_csv(path, file)?,
        Format::Json => read_json(path, file)?,
        Format::JsonLines => read_jsonl(path, file)?,
    };
    tracing::debug!(path = %path.display(), num_docs = docs.len(), "loaded collection file");
    Ok(docs)
}

/// Like [`load_collection`], but a failure yields an empty collection plus the
/// error so the caller can surface it as a warning and keep running.
pub fn load_or_empty<P: AsRef<Path>>(path: P) -> (Vec<Document>, Option<LoadError>) {
    match load_collection(path) {
        Ok(docs) => (docs, None),
        Err(err) => {
            tracing::warn!(error = %err, "could not load collection, continuing with no documents");
            (Vec::new(), Some(err))
        }
    }
}

fn load_dir(root: &Path) -> Result<Vec<Document>, LoadError> {
    let mut docs = Vec::new();
    for entry in WalkDir::new(root).sort_by_file_name() {
        let entry = entry.map_err(|source| LoadError::Walk { path: root.to_path_buf(), source })?;
        let p = entry.path();
        if entry.file_type().is_file() && format_of(p).is_some() {
            docs.extend(load_collection(p)?);
        }
    }
    Ok(docs)
}

fn read_csv(path: &Path, file: File) -> Result<Vec<Document>, LoadError> {
    let mut reader = csv::ReaderBuilder::new().trim(csv::Trim::All).from_reader(file);
    reader
        .deserialize()
        .collect::<Result<Vec<Document>, _>>()
        .map_err(|source| LoadError::Csv { path: path.to_path_buf(), source })
}

fn read_json(path: &Path, file: File) -> Result<Vec<Document>, LoadError> {
    let to_err = |source| LoadError::Json { path: path.to_path_buf(), source };
    let json: serde_json::Value = serde_json::from_reader(BufReader::new(file)).map_err(to_err)?;
    match json {
        serde_json::Value::Array(arr) => arr
            .into_iter()
            .map(serde_json::from_value::<Document>)
            .collect::<Result<Vec<_>, _>>()
            .map_err(to_err),
        other => serde_json::from_value::<Document>(other).map(|doc| vec![doc]).map_err(to_err),
    }
}

fn read_jsonl(path: &Path, file: File) -> Result<Vec<Document>, LoadError> {
    let mut docs = Vec::new();
    for (i, line) in BufReader::new(file).lines().enumerate() {
        let line = line.map_err(|source| LoadError::Io { path: path.to_path_buf(), source })?;
        if line.trim().is_empty() { continue; }
        let doc = serde_json::from_str(&line)
            .map_err(|source| LoadError::JsonLine { path: path.to_path_buf(), line: i + 1, source })?;
        docs.push(doc);
    }
    Ok(docs)
}
