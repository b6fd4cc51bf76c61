//! Test fixture loader for causal store golden scenarios.
//!
//! Provides typed deserialization of the scenario JSON files and a
//! [`RecordingObserver`] for asserting on write-path events.

use std::collections::BTreeMap;
use std::path::PathBuf;
use std::sync::Mutex;

use causal_clock::VersionVector;
use causal_core::DatacenterConfig;
use causal_datacenter::{ReadEvent, ReplicaObserver, WriteEvent};
use serde::de::DeserializeOwned;
use serde::Deserialize;

/// Root directory of the test-fixtures folder.
fn fixtures_root() -> PathBuf {
    // Works from any crate in the workspace: walk up to find test-fixtures.
    let manifest_dir = std::env::var("CARGO_MANIFEST_DIR").unwrap_or_else(|_| ".".to_string());
    let mut path = PathBuf::from(&manifest_dir);

    while !path.join("test-fixtures").exists() {
        if !path.pop() {
            panic!(
                "Could not find test-fixtures directory from CARGO_MANIFEST_DIR={}",
                manifest_dir
            );
        }
    }
    path.join("test-fixtures")
}

/// Load and deserialize a JSON fixture file.
///
/// # Panics
/// Panics if the file doesn't exist or can't be deserialized.
pub fn load_fixture<T: DeserializeOwned>(relative_path: &str) -> T {
    let path = fixtures_root().join(relative_path);
    let content = std::fs::read_to_string(&path)
        .unwrap_or_else(|e| panic!("Failed to read fixture {}: {}", path.display(), e));
    serde_json::from_str(&content)
        .unwrap_or_else(|e| panic!("Failed to parse fixture {}: {}", path.display(), e))
}

/// Check that a fixture file exists.
pub fn fixture_exists(relative_path: &str) -> bool {
    fixtures_root().join(relative_path).exists()
}

/// List all JSON files in a fixture subdirectory, sorted.
pub fn list_fixtures(subdir: &str) -> Vec<PathBuf> {
    let dir = fixtures_root().join(subdir);
    if !dir.exists() {
        return Vec::new();
    }
    let mut paths: Vec<PathBuf> = std::fs::read_dir(&dir)
        .unwrap_or_else(|e| panic!("Failed to read directory {}: {}", dir.display(), e))
        .filter_map(|entry| {
            let entry = entry.ok()?;
            let path = entry.path();
            if path.extension().is_some_and(|ext| ext == "json") {
                Some(path)
            } else {
                None
            }
        })
        .collect();
    paths.sort();
    paths
}

/// One write in a golden scenario.
#[derive(Debug, Clone, Deserialize)]
pub struct ScenarioWrite {
    pub key: String,
    pub value: String,
}

/// A golden write-path scenario against a single datacenter.
#[derive(Debug, Clone, Deserialize)]
pub struct Scenario {
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub datacenter: DatacenterConfig,
    pub writes: Vec<ScenarioWrite>,
    pub expected_version: VersionVector,
    pub expected_reads: BTreeMap<String, String>,
    #[serde(default)]
    pub absent_keys: Vec<String>,
}

/// Load every scenario under `golden/scenarios/`.
pub fn load_scenarios() -> Vec<Scenario> {
    list_fixtures("golden/scenarios")
        .into_iter()
        .map(|path| {
            let name = path
                .file_name()
                .map(|n| n.to_string_lossy().into_owned())
                .unwrap_or_default();
            load_fixture(&format!("golden/scenarios/{name}"))
        })
        .collect()
}

/// An owned copy of a [`WriteEvent`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordedWrite {
    pub datacenter: String,
    pub key: String,
    pub version: VersionVector,
}

/// Observer that keeps every event it sees.
#[derive(Debug, Default)]
pub struct RecordingObserver {
    writes: Mutex<Vec<RecordedWrite>>,
    reads: Mutex<Vec<(String, bool)>>,
}

impl RecordingObserver {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn writes(&self) -> Vec<RecordedWrite> {
        self.writes.lock().unwrap().clone()
    }

    /// `(key, found)` for every read, in arrival order.
    pub fn reads(&self) -> Vec<(String, bool)> {
        self.reads.lock().unwrap().clone()
    }
}

impl ReplicaObserver for RecordingObserver {
    fn on_write(&self, event: &WriteEvent<'_>) {
        self.writes.lock().unwrap().push(RecordedWrite {
            datacenter: event.datacenter.to_string(),
            key: event.key.to_string(),
            version: event.version.clone(),
        });
    }

    fn on_read(&self, event: &ReadEvent<'_>) {
        self.reads
            .lock()
            .unwrap()
            .push((event.key.to_string(), event.found));
    }
}
