// WHY: n-gram evidence lives in a compiled FST keyed by [script tag] ++ window,
// built once and shared read-only by every detection call

use anyhow::{ensure, Context, Result};
use fst::{Map, MapBuilder, Streamer};
use std::collections::{BTreeMap, HashMap};
use std::io::Cursor;
use tracing::{debug, info};

use crate::detector::ngram::NgramKey;
use crate::language::Language;

pub mod builder;
pub mod builtin;
pub mod snapshot;

pub use builder::{TableBuilder, TrainingConfig};
pub use builtin::{builtin_table, BUILTIN_LANGUAGES};
pub use snapshot::TableSnapshot;

/// One (language, weight) pair attached to an n-gram.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Evidence {
    pub language: Language,
    /// Log-probability ratio against the training floor. Finite and non-negative.
    pub weight: f32,
}

/// Evidence entry addressed by dense language slot rather than id.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct SlotWeight {
    pub slot: u16,
    pub weight: f32,
}

// WHY: each FST value packs (offset << 16 | len) into the flat evidence array
const LEN_BITS: u64 = 16;
const LEN_MASK: u64 = (1 << LEN_BITS) - 1;

/// Immutable mapping from n-gram to per-language weights.
///
/// Per-key evidence is ordered by weight descending, then language id, so
/// the first entry is always the strongest claim on that n-gram.
pub struct FrequencyTable {
    index: Map<Vec<u8>>,
    evidence: Vec<SlotWeight>,
    languages: Vec<Language>,
    max_weight: f32,
}

impl FrequencyTable {
    /// Compile a table from raw key bytes to evidence lists.
    ///
    /// Fails on malformed keys, unknown-sentinel languages, non-finite or
    /// negative weights, or a language listed twice under one key. Empty
    /// evidence lists are dropped since absence already means "no evidence".
    pub fn from_entries(entries: BTreeMap<Vec<u8>, Vec<Evidence>>) -> Result<Self> {
        let mut languages: Vec<Language> = entries
            .values()
            .flatten()
            .map(|evidence| evidence.language)
            .collect();
        languages.sort_unstable();
        languages.dedup();
        ensure!(
            languages.len() <= usize::from(u16::MAX),
            "too many languages in frequency table: {}",
            languages.len()
        );
        let slots: HashMap<Language, u16> = languages
            .iter()
            .enumerate()
            .map(|(slot, &language)| (language, slot as u16))
            .collect();

        let mut evidence = Vec::new();
        let mut max_weight = 0.0f32;
        let mut build_data = Vec::new();
        {
            let mut builder = MapBuilder::new(Cursor::new(&mut build_data))?;
            // WHY: BTreeMap iteration yields keys in the byte order the FST builder requires
            for (key, mut list) in entries {
                ensure!(
                    NgramKey::from_bytes(&key).is_some(),
                    "malformed n-gram key {:?}",
                    String::from_utf8_lossy(&key)
                );
                if list.is_empty() {
                    continue;
                }
                ensure!(
                    list.len() as u64 <= LEN_MASK,
                    "too many languages for one n-gram: {}",
                    list.len()
                );
                list.sort_by(|a, b| {
                    b.weight
                        .total_cmp(&a.weight)
                        .then(a.language.cmp(&b.language))
                });

                let offset = evidence.len() as u64;
                for (i, item) in list.iter().enumerate() {
                    ensure!(
                        item.weight.is_finite() && item.weight >= 0.0,
                        "weight {} for {} is not a finite non-negative number",
                        item.weight,
                        item.language.code()
                    );
                    ensure!(
                        !item.language.is_unknown(),
                        "unknown-language sentinel cannot carry evidence"
                    );
                    ensure!(
                        list[..i].iter().all(|prior| prior.language != item.language),
                        "language {} listed twice for one n-gram",
                        item.language.code()
                    );
                    max_weight = max_weight.max(item.weight);
                    evidence.push(SlotWeight {
                        slot: slots[&item.language],
                        weight: item.weight,
                    });
                }
                builder.insert(&key, (offset << LEN_BITS) | list.len() as u64)?;
            }
            builder.finish()?;
        }

        let index = Map::new(build_data).context("failed to load compiled n-gram index")?;
        info!(
            "Compiled frequency table: {} n-grams, {} languages, {} evidence entries",
            index.len(),
            languages.len(),
            evidence.len()
        );

        Ok(Self {
            index,
            evidence,
            languages,
            max_weight,
        })
    }

    /// Number of distinct n-grams with evidence.
    pub fn len(&self) -> usize {
        self.index.len()
    }

    pub fn is_empty(&self) -> bool {
        self.index.len() == 0
    }

    /// Languages that appear anywhere in the table, in id order.
    pub fn languages(&self) -> &[Language] {
        &self.languages
    }

    pub fn max_weight(&self) -> f32 {
        self.max_weight
    }

    /// Evidence for one n-gram, strongest first. Empty when the table has none.
    pub fn lookup(&self, key: &NgramKey) -> impl Iterator<Item = Evidence> + '_ {
        self.lookup_slots(key.as_bytes())
            .iter()
            .map(|entry| Evidence {
                language: self.language_at(entry.slot),
                weight: entry.weight,
            })
    }

    pub(crate) fn lookup_slots(&self, key: &[u8]) -> &[SlotWeight] {
        match self.index.get(key) {
            Some(packed) => {
                let offset = (packed >> LEN_BITS) as usize;
                let len = (packed & LEN_MASK) as usize;
                &self.evidence[offset..offset + len]
            }
            None => &[],
        }
    }

    pub(crate) fn language_at(&self, slot: u16) -> Language {
        self.languages[usize::from(slot)]
    }

    /// Every entry in key order, for export.
    pub fn entries(&self) -> Vec<(NgramKey, Vec<Evidence>)> {
        let mut out = Vec::with_capacity(self.len());
        let mut stream = self.index.stream();
        while let Some((key, _)) = stream.next() {
            if let Some(ngram) = NgramKey::from_bytes(key) {
                let evidence = self.lookup(&ngram).collect();
                out.push((ngram, evidence));
            }
        }
        debug!("Exported {} frequency table entries", out.len());
        out
    }
}

impl std::fmt::Debug for FrequencyTable {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FrequencyTable")
            .field("ngrams", &self.len())
            .field("languages", &self.languages.len())
            .field("evidence", &self.evidence.len())
            .field("max_weight", &self.max_weight)
            .finish()
    }
}
