//! Training: derive n-gram weights from per-language sample text.
//!
//! Samples go through the same scanner and extractor as detection input, so
//! table keys and query keys always agree.

use anyhow::{ensure, Result};
use std::collections::{BTreeMap, HashMap};
use tracing::{debug, info};

use super::{Evidence, FrequencyTable};
use crate::detector::ngram::{NgramKey, Ngrams};
use crate::detector::scanner;
use crate::language::Language;

/// Training knobs.
#[derive(Debug, Clone)]
pub struct TrainingConfig {
    /// Relative frequency treated as "no better than chance". An n-gram is
    /// kept for a language only when its frequency there exceeds this.
    pub probability_floor: f64,
    /// Occurrences required before an n-gram counts for a language.
    pub min_count: u32,
    /// Keep at most this many (strongest) languages per n-gram.
    pub max_languages_per_ngram: usize,
}

impl Default for TrainingConfig {
    fn default() -> Self {
        Self {
            probability_floor: 1e-4,
            min_count: 1,
            max_languages_per_ngram: 24,
        }
    }
}

#[derive(Default)]
struct LanguageCounts {
    ngrams: HashMap<NgramKey, u32>,
    total: u64,
    samples: usize,
}

/// Accumulates n-gram counts per language, then compiles a [`FrequencyTable`].
pub struct TableBuilder {
    config: TrainingConfig,
    counts: BTreeMap<Language, LanguageCounts>,
}

impl TableBuilder {
    pub fn new(config: TrainingConfig) -> Result<Self> {
        ensure!(
            config.probability_floor.is_finite() && config.probability_floor > 0.0,
            "probability floor must be a positive finite number, got {}",
            config.probability_floor
        );
        ensure!(
            config.max_languages_per_ngram > 0,
            "max_languages_per_ngram must be at least 1"
        );
        Ok(Self {
            config,
            counts: BTreeMap::new(),
        })
    }

    pub fn with_default_config() -> Self {
        Self {
            config: TrainingConfig::default(),
            counts: BTreeMap::new(),
        }
    }

    /// Count every n-gram of `text` toward `language`. Samples for one
    /// language accumulate.
    pub fn add_sample(&mut self, language: Language, text: &[u8]) -> Result<()> {
        ensure!(
            !language.is_unknown(),
            "cannot train the unknown-language sentinel"
        );
        let counts = self.counts.entry(language).or_default();
        let scanned = scanner::scan(text);
        for span in scanned.spans() {
            for key in Ngrams::new(span.script, scanned.text(span)) {
                *counts.ngrams.entry(key).or_insert(0) += 1;
                counts.total += 1;
            }
        }
        counts.samples += 1;
        debug!(
            "Added {} sample: {} bytes, {} n-grams so far",
            language.code(),
            text.len(),
            counts.total
        );
        Ok(())
    }

    /// Languages with at least one sample.
    pub fn languages(&self) -> impl Iterator<Item = Language> + '_ {
        self.counts.keys().copied()
    }

    /// Weight each (n-gram, language) pair as `ln(freq / floor)` and compile.
    pub fn build(self) -> Result<FrequencyTable> {
        let floor = self.config.probability_floor;
        let mut entries: BTreeMap<Vec<u8>, Vec<Evidence>> = BTreeMap::new();

        for (&language, counts) in &self.counts {
            if counts.total == 0 {
                continue;
            }
            let total = counts.total as f64;
            for (key, &count) in &counts.ngrams {
                if count < self.config.min_count {
                    continue;
                }
                let weight = ((f64::from(count) / total) / floor).ln();
                if weight > 0.0 {
                    entries
                        .entry(key.as_bytes().to_vec())
                        .or_default()
                        .push(Evidence {
                            language,
                            weight: weight as f32,
                        });
                }
            }
        }

        let cap = self.config.max_languages_per_ngram;
        for list in entries.values_mut() {
            if list.len() > cap {
                list.sort_by(|a, b| {
                    b.weight
                        .total_cmp(&a.weight)
                        .then(a.language.cmp(&b.language))
                });
                list.truncate(cap);
            }
        }

        let samples: usize = self.counts.values().map(|counts| counts.samples).sum();
        info!(
            "Training produced {} weighted n-grams from {} samples in {} languages",
            entries.len(),
            samples,
            self.counts.len()
        );
        FrequencyTable::from_entries(entries)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::detector::scanner::Script;

    #[test]
    fn test_weights_follow_relative_frequency() {
        let config = TrainingConfig {
            probability_floor: 0.1,
            ..Default::default()
        };
        let mut builder = TableBuilder::new(config).unwrap();
        // " aaaa " yields " aa", "aaa" x2, "aa " -> 4 n-grams
        builder.add_sample(Language::ENGLISH, b"aaaa").unwrap();
        let table = builder.build().unwrap();

        let weight = |w: &[u8]| {
            table
                .lookup(&NgramKey::new(Script::Latin, w))
                .map(|e| e.weight)
                .next()
        };
        let half = (0.5f64 / 0.1).ln() as f32;
        let quarter = (0.25f64 / 0.1).ln() as f32;
        assert_eq!(weight(b"aaa"), Some(half));
        assert_eq!(weight(b" aa"), Some(quarter));
        assert_eq!(weight(b"aa "), Some(quarter));
        assert_eq!(weight(b"bbb"), None);
    }

    #[test]
    fn test_rare_ngrams_below_floor_are_dropped() {
        let config = TrainingConfig {
            probability_floor: 0.3,
            ..Default::default()
        };
        let mut builder = TableBuilder::new(config).unwrap();
        builder.add_sample(Language::ENGLISH, b"aaaa").unwrap();
        let table = builder.build().unwrap();
        // only "aaa" (p = 0.5) clears a 0.3 floor
        assert_eq!(table.len(), 1);
    }

    #[test]
    fn test_shared_ngram_lists_every_language() {
        let mut builder = TableBuilder::with_default_config();
        builder.add_sample(Language::ENGLISH, b"the cat").unwrap();
        builder.add_sample(Language::FRENCH, b"the chat").unwrap();
        let table = builder.build().unwrap();

        let langs: Vec<_> = table
            .lookup(&NgramKey::new(Script::Latin, b"the"))
            .map(|e| e.language)
            .collect();
        assert_eq!(langs.len(), 2);
        assert!(langs.contains(&Language::ENGLISH));
        assert!(langs.contains(&Language::FRENCH));
    }

    #[test]
    fn test_languages_lists_trained_languages() {
        let mut builder = TableBuilder::with_default_config();
        builder.add_sample(Language::FRENCH, b"le chat").unwrap();
        builder.add_sample(Language::ENGLISH, b"the cat").unwrap();
        builder.add_sample(Language::ENGLISH, b"a dog").unwrap();
        let langs: Vec<_> = builder.languages().collect();
        assert_eq!(langs, vec![Language::ENGLISH, Language::FRENCH]);
    }

    #[test]
    fn test_cap_keeps_strongest_languages() {
        let config = TrainingConfig {
            max_languages_per_ngram: 1,
            ..Default::default()
        };
        let mut builder = TableBuilder::new(config).unwrap();
        builder.add_sample(Language::ENGLISH, b"abc xyz qrs").unwrap();
        builder.add_sample(Language::FRENCH, b"abc").unwrap();
        let table = builder.build().unwrap();

        let langs: Vec<_> = table
            .lookup(&NgramKey::new(Script::Latin, b"abc"))
            .map(|e| e.language)
            .collect();
        // "abc" is a third of French n-grams but an eleventh of English ones
        assert_eq!(langs, vec![Language::FRENCH]);
    }

    #[test]
    fn test_rejects_bad_config_and_sentinel() {
        let config = TrainingConfig {
            probability_floor: 0.0,
            ..Default::default()
        };
        assert!(TableBuilder::new(config).is_err());

        let mut builder = TableBuilder::with_default_config();
        assert!(builder.add_sample(Language::UNKNOWN, b"text").is_err());
    }
}
