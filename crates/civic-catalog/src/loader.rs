//! Reads catalog data files from disk.
//!
//! A catalog source is either a single `.toml`/`.json` file or a directory
//! whose catalog files are read in sorted path order.
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

use civic_core::error::{Error, Result};
use civic_core::types::IssueTopic;

#[derive(Debug, Deserialize)]
struct CatalogFile {
    #[serde(default)]
    topics: Vec<IssueTopic>,
}

pub fn read_topics(path: &Path) -> Result<Vec<IssueTopic>> {
    if path.is_dir() {
        let mut topics = Vec::new();
        for file in list_catalog_files(path) {
            topics.extend(read_file(&file)?);
        }
        Ok(topics)
    } else {
        read_file(path)
    }
}

pub fn read_file(path: &Path) -> Result<Vec<IssueTopic>> {
    let content = fs::read_to_string(path).map_err(|source| Error::Io { path: path.display().to_string(), source })?;
    parse(&content, path)
}

fn parse(content: &str, path: &Path) -> Result<Vec<IssueTopic>> {
    let parse_err = |message: String| Error::Parse { path: path.display().to_string(), message };
    let file: CatalogFile = match extension(path).as_deref() {
        Some("toml") => toml::from_str(content).map_err(|e| parse_err(e.to_string()))?,
        Some("json") => serde_json::from_str(content).map_err(|e| parse_err(e.to_string()))?,
        _ => return Err(parse_err("expected a .toml or .json catalog file".to_string())),
    };
    Ok(file.topics)
}

fn extension(path: &Path) -> Option<String> {
    path.extension().and_then(|s| s.to_str()).map(str::to_ascii_lowercase)
}

fn list_catalog_files(root: &Path) -> Vec<PathBuf> {
    let mut files = Vec::new();
    for entry in walkdir::WalkDir::new(root).into_iter().filter_map(|e| e.ok()).filter(|e| e.file_type().is_file()) {
        let path = entry.path();
        if matches!(extension(path).as_deref(), Some("toml" | "json")) {
            files.push(path.to_path_buf());
        }
    }
    files.sort();
    files
}
