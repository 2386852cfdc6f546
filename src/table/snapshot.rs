//! JSON snapshots of a compiled [`FrequencyTable`].
//!
//! Windows are stored as raw byte arrays: a fixed-width window may split a
//! multi-byte character, so they are not always valid UTF-8.

use anyhow::{bail, ensure, Context, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::io::{BufReader, BufWriter, Write};
use std::path::Path;
use tracing::info;

use super::{Evidence, FrequencyTable};
use crate::detector::ngram::NgramKey;
use crate::detector::scanner::Script;
use crate::language::Language;

pub const SNAPSHOT_FORMAT_VERSION: u32 = 1;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct TableSnapshot {
    pub format_version: u32,
    pub entries: Vec<SnapshotEntry>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct SnapshotEntry {
    pub script: Script,
    pub ngram: Vec<u8>,
    /// (language, weight) pairs, strongest first.
    pub weights: Vec<(Language, f32)>,
}

impl TableSnapshot {
    pub fn from_table(table: &FrequencyTable) -> Self {
        let entries = table
            .entries()
            .into_iter()
            .map(|(key, evidence)| SnapshotEntry {
                script: key.script(),
                ngram: key.window().to_vec(),
                weights: evidence.iter().map(|e| (e.language, e.weight)).collect(),
            })
            .collect();
        Self {
            format_version: SNAPSHOT_FORMAT_VERSION,
            entries,
        }
    }

    /// Validate and compile into a table.
    pub fn into_table(self) -> Result<FrequencyTable> {
        ensure!(
            self.format_version == SNAPSHOT_FORMAT_VERSION,
            "unsupported table snapshot version {} (expected {})",
            self.format_version,
            SNAPSHOT_FORMAT_VERSION
        );
        let mut entries: BTreeMap<Vec<u8>, Vec<Evidence>> = BTreeMap::new();
        for entry in self.entries {
            let mut raw = Vec::with_capacity(entry.ngram.len() + 1);
            raw.push(entry.script.tag());
            raw.extend_from_slice(&entry.ngram);
            let Some(key) = NgramKey::from_bytes(&raw) else {
                bail!(
                    "{:?} n-gram must be {} bytes, got {}",
                    entry.script,
                    entry.script.ngram_bytes(),
                    entry.ngram.len()
                );
            };
            let evidence = entry
                .weights
                .into_iter()
                .map(|(language, weight)| Evidence { language, weight });
            let slot = entries.entry(key.as_bytes().to_vec()).or_default();
            ensure!(slot.is_empty(), "duplicate snapshot entry for {key:?}");
            slot.extend(evidence);
        }
        FrequencyTable::from_entries(entries)
    }

    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let path = path.as_ref();
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)
                .with_context(|| format!("failed to create {}", parent.display()))?;
        }
        let file = fs::File::create(path)
            .with_context(|| format!("failed to create table snapshot {}", path.display()))?;
        let mut writer = BufWriter::new(file);
        serde_json::to_writer(&mut writer, self)?;
        writer.flush()?;
        info!(
            "Saved table snapshot with {} entries to {}",
            self.entries.len(),
            path.display()
        );
        Ok(())
    }

    /// Read and compile a snapshot file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<FrequencyTable> {
        let path = path.as_ref();
        let file = fs::File::open(path)
            .with_context(|| format!("failed to open table snapshot {}", path.display()))?;
        let snapshot: TableSnapshot = serde_json::from_reader(BufReader::new(file))
            .with_context(|| format!("failed to parse table snapshot {}", path.display()))?;
        info!(
            "Loaded table snapshot with {} entries from {}",
            snapshot.entries.len(),
            path.display()
        );
        snapshot.into_table()
    }

    /// Async variant of [`TableSnapshot::load`] for callers already on a runtime.
    pub async fn load_async<P: AsRef<Path>>(path: P) -> Result<FrequencyTable> {
        let path = path.as_ref();
        let content = tokio::fs::read(path)
            .await
            .with_context(|| format!("failed to read table snapshot {}", path.display()))?;
        let snapshot: TableSnapshot = serde_json::from_slice(&content)
            .with_context(|| format!("failed to parse table snapshot {}", path.display()))?;
        snapshot.into_table()
    }
}
