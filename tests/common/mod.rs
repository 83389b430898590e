//! Shared test utilities for integration tests
#![allow(dead_code)]

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;

use tempfile::TempDir;

/// Builder for a throwaway data directory holding `reviews.json`
pub struct DataDirBuilder {
    temp_dir: TempDir,
    records: BTreeMap<String, String>,
}

impl DataDirBuilder {
    /// Create a new builder with an empty data directory
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        Self { temp_dir, records: BTreeMap::new() }
    }

    pub fn path(&self) -> &Path {
        self.temp_dir.path()
    }

    /// Store a serialized record under the key used for `url`
    pub fn with_record(mut self, url: &str, record_json: &str) -> Self {
        self.records.insert(format!("reviews_{}", url), record_json.to_string());
        self
    }

    /// Write `config.toml` into the data directory
    pub fn with_config(self, content: &str) -> Self {
        fs::write(self.temp_dir.path().join("config.toml"), content)
            .expect("Failed to write config.toml");
        self
    }

    /// Write `reviews.json` verbatim, bypassing the record map
    pub fn with_raw_reviews(self, content: &str) -> Self {
        fs::write(self.temp_dir.path().join("reviews.json"), content)
            .expect("Failed to write reviews.json");
        self
    }

    /// Build and return the temp directory (consumes self)
    pub fn build(self) -> TempDir {
        if !self.records.is_empty() {
            let json = serde_json::to_string_pretty(&self.records)
                .expect("Failed to serialize records");
            fs::write(self.temp_dir.path().join("reviews.json"), json)
                .expect("Failed to write reviews.json");
        }
        self.temp_dir
    }
}

/// Serialized record with a single rating and no comments
pub fn rated_record_json(url: &str, mean: f64, count: u32, viewer: Option<u8>) -> String {
    let viewer = viewer.map(|v| format!(r#","viewerRating":{}"#, v)).unwrap_or_default();
    format!(
        r#"{{"url":"{}","aggregate":{{"meanStars":{},"ratingCount":{}}},"comments":[]{}}}"#,
        url, mean, count, viewer
    )
}

pub fn reviews_path(data_dir: &Path) -> PathBuf {
    data_dir.join("reviews.json")
}

/// Binary command isolated to `data_dir` (config is read from the same
/// directory so the user's own config never leaks in)
pub fn explorer_cmd(data_dir: &Path) -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_web-explorer"));
    cmd.arg("--data-dir")
        .arg(data_dir)
        .arg("--config")
        .arg(data_dir.join("config.toml"))
        .env_remove("RUST_LOG");
    cmd
}
