//! Evidence accumulation.
//!
//! Each span's n-grams are cut into chunks of roughly `chunk_chars` letters.
//! Inside a chunk every table hit adds its weight to a per-language
//! [`ScoreAccumulator`]; when the chunk ends, only its leading language is
//! credited with the chunk's bytes and score on the call-wide [`ScoreSheet`].
//! Crediting winners rather than summing everything keeps a close sibling
//! language from outscoring the real one on mixed-language input.

use super::ngram::{self, Ngrams};
use super::scanner::ScannedText;
use crate::language::Language;
use crate::table::FrequencyTable;

/// Dense per-slot running sums for one chunk. Reused across chunks; only
/// touched slots are reset.
#[derive(Debug, Clone)]
pub struct ScoreAccumulator {
    scores: Vec<f64>,
    contributions: Vec<u32>,
    touched: Vec<u16>,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChunkLeader {
    pub slot: u16,
    pub score: f64,
    pub contributions: u32,
}

impl ScoreAccumulator {
    pub fn new(languages: usize) -> Self {
        Self {
            scores: vec![0.0; languages],
            contributions: vec![0; languages],
            touched: Vec::with_capacity(languages),
        }
    }

    pub fn add(&mut self, slot: u16, weight: f64) {
        let i = usize::from(slot);
        if self.contributions[i] == 0 {
            self.touched.push(slot);
        }
        self.scores[i] += weight;
        self.contributions[i] += 1;
    }

    pub fn score(&self, slot: u16) -> f64 {
        self.scores[usize::from(slot)]
    }

    pub fn contributions(&self, slot: u16) -> u32 {
        self.contributions[usize::from(slot)]
    }

    /// Highest score, then most contributions, then lowest slot (slots are in
    /// language id order). `None` when nothing scored above zero.
    pub fn leader(&self) -> Option<ChunkLeader> {
        self.touched
            .iter()
            .map(|&slot| ChunkLeader {
                slot,
                score: self.score(slot),
                contributions: self.contributions(slot),
            })
            .filter(|leader| leader.score > 0.0)
            .min_by(|a, b| {
                b.score
                    .total_cmp(&a.score)
                    .then(b.contributions.cmp(&a.contributions))
                    .then(a.slot.cmp(&b.slot))
            })
    }

    pub fn clear(&mut self) {
        for slot in self.touched.drain(..) {
            let i = usize::from(slot);
            self.scores[i] = 0.0;
            self.contributions[i] = 0;
        }
    }
}

/// Call-wide totals for one language.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LanguageTotal {
    pub language: Language,
    pub score: f64,
    pub contributions: u32,
    /// Classified bytes of the chunks this language won.
    pub bytes: usize,
}

/// Everything the ranker needs from one scoring pass.
#[derive(Debug, Clone, PartialEq)]
pub struct ScoreSheet {
    totals: Vec<LanguageTotal>,
    /// Classified bytes of spans long enough to yield n-grams.
    pub text_bytes: usize,
    /// Bytes the caller supplied, valid or not.
    pub input_bytes: usize,
    /// Best achievable score: the strongest weight of every n-gram that hit.
    pub ceiling: f64,
    pub ngrams: usize,
    pub hits: usize,
    pub chunks: usize,
}

impl ScoreSheet {
    fn new(languages: &[Language]) -> Self {
        Self {
            totals: languages
                .iter()
                .map(|&language| LanguageTotal {
                    language,
                    score: 0.0,
                    contributions: 0,
                    bytes: 0,
                })
                .collect(),
            text_bytes: 0,
            input_bytes: 0,
            ceiling: 0.0,
            ngrams: 0,
            hits: 0,
            chunks: 0,
        }
    }

    fn credit(&mut self, leader: ChunkLeader, bytes: usize) {
        let total = &mut self.totals[usize::from(leader.slot)];
        total.score += leader.score;
        total.contributions += leader.contributions;
        total.bytes += bytes;
    }

    /// Languages that won at least one chunk, in language id order.
    pub fn scored(&self) -> impl Iterator<Item = &LanguageTotal> {
        self.totals.iter().filter(|total| total.score > 0.0)
    }

    pub fn total(&self, language: Language) -> Option<&LanguageTotal> {
        self.totals.iter().find(|total| total.language == language)
    }
}

/// Scores scanned text against one table.
pub struct Scorer<'t> {
    table: &'t FrequencyTable,
    chunk_chars: usize,
}

impl<'t> Scorer<'t> {
    pub fn new(table: &'t FrequencyTable, chunk_chars: usize) -> Self {
        Self {
            table,
            chunk_chars: chunk_chars.max(1),
        }
    }

    pub fn score(&self, scanned: &ScannedText) -> ScoreSheet {
        let mut sheet = ScoreSheet::new(self.table.languages());
        sheet.input_bytes = scanned.input_bytes();
        let mut chunk = ScoreAccumulator::new(self.table.languages().len());

        for span in scanned.spans() {
            let text = scanned.text(span);
            let total = ngram::count(text.len(), span.script.ngram_bytes());
            if total == 0 {
                continue;
            }
            let span_bytes = span.classified_bytes();
            sheet.text_bytes += span_bytes;

            // WHY: scale by letter width so a chunk covers a similar number of
            // letters in every script
            let per_chunk = self.chunk_chars * span.script.bytes_per_char();
            let chunks = total.div_ceil(per_chunk);
            let mut ngrams = Ngrams::new(span.script, text);

            for i in 0..chunks {
                let take = split_point(i + 1, total, chunks) - split_point(i, total, chunks);
                let bytes = split_point(i + 1, span_bytes, chunks) - split_point(i, span_bytes, chunks);

                for key in ngrams.by_ref().take(take) {
                    sheet.ngrams += 1;
                    let evidence = self.table.lookup_slots(key.as_bytes());
                    let Some(strongest) = evidence.first() else {
                        continue;
                    };
                    sheet.hits += 1;
                    sheet.ceiling += f64::from(strongest.weight);
                    for entry in evidence {
                        chunk.add(entry.slot, f64::from(entry.weight));
                    }
                }

                if let Some(leader) = chunk.leader() {
                    sheet.credit(leader, bytes);
                }
                sheet.chunks += 1;
                chunk.clear();
            }
        }
        sheet
    }
}

/// `index * len / parts` without overflowing on long spans.
fn split_point(index: usize, len: usize, parts: usize) -> usize {
    (index as u128 * len as u128 / parts as u128) as usize
}
