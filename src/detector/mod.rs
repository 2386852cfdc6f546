// WHY: detection is a pure pipeline per call (scan -> n-grams -> score -> rank
// -> assemble) over a shared immutable table, so a Detector is Send + Sync
// and needs no locking

use anyhow::{ensure, Result};
use std::sync::Arc;
use tracing::debug;

use crate::language::Language;
use crate::table::{builtin_table, FrequencyTable};

pub mod ngram;
pub mod ranker;
pub mod result;
pub mod scanner;
pub mod scorer;

pub use ranker::{
    MIN_DOMINANT_PERCENT, MIN_RELIABLE_BYTES, MIN_RETAINED_PERCENT, MIN_SCORE_SEPARATION,
};
pub use result::{DetectionResult, RankedCandidate, RawResult, RESULT_SLOTS};
pub use scanner::{Script, TextSpan};

/// Tuning for the scoring pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DetectorConfig {
    /// Letters per scoring chunk. Smaller chunks resolve mixed-language
    /// text more finely but give each verdict less evidence.
    pub chunk_chars: usize,
}

impl Default for DetectorConfig {
    fn default() -> Self {
        Self { chunk_chars: 48 }
    }
}

/// Language detector bound to one frequency table.
#[derive(Debug, Clone)]
pub struct Detector {
    table: Arc<FrequencyTable>,
    config: DetectorConfig,
}

impl Detector {
    /// Fails when the table has no evidence or the config is unusable.
    pub fn new(table: Arc<FrequencyTable>, config: DetectorConfig) -> Result<Self> {
        ensure!(!table.is_empty(), "frequency table contains no n-grams");
        ensure!(config.chunk_chars > 0, "chunk_chars must be at least 1");
        Ok(Self { table, config })
    }

    /// Detector over the embedded table with default tuning.
    pub fn builtin() -> Self {
        Self {
            table: builtin_table(),
            config: DetectorConfig::default(),
        }
    }

    pub fn table(&self) -> &Arc<FrequencyTable> {
        &self.table
    }

    pub fn config(&self) -> &DetectorConfig {
        &self.config
    }

    /// Up to three ranked languages plus reliability. Total over all inputs.
    pub fn detect_top3(&self, text: &[u8]) -> DetectionResult {
        let scanned = scanner::scan(text);
        let sheet = scorer::Scorer::new(&self.table, self.config.chunk_chars).score(&scanned);
        let ranking = ranker::rank(&sheet);
        let result = DetectionResult::assemble(ranking.candidates, ranking.text_bytes, ranking.reliable);

        debug!(
            input_bytes = text.len(),
            invalid_bytes = scanned.invalid_bytes(),
            spans = scanned.spans().len(),
            ngrams = sheet.ngrams,
            hits = sheet.hits,
            text_bytes = result.text_bytes(),
            top = result.best_language().code(),
            reliable = result.is_reliable(),
            "Detection complete"
        );
        result
    }

    /// Name of the top language, `"Unknown"` without evidence.
    pub fn detect_best(&self, text: &[u8]) -> &'static str {
        self.detect_best_language(text).name()
    }

    /// Numeric id of the top language; [`Language::UNKNOWN`]'s id without evidence.
    pub fn detect_best_code(&self, text: &[u8]) -> u16 {
        self.detect_best_language(text).id()
    }

    pub fn detect_best_language(&self, text: &[u8]) -> Language {
        self.detect_top3(text).best_language()
    }
}
