use serde::Serialize;
use std::ffi::{c_char, c_double, c_int};

use crate::language::Language;

/// Number of candidate slots in every result.
pub const RESULT_SLOTS: usize = 3;

/// One ranked language.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct RankedCandidate {
    pub language: Language,
    pub raw_score: f64,
    /// Share of classified bytes credited to this language, 0..=100.
    pub percent: u8,
    /// Raw score relative to the best achievable score for the input, 0.0..=1.0.
    pub normalized_score: f64,
}

impl RankedCandidate {
    /// Padding for slots no language earned.
    pub const UNKNOWN: RankedCandidate = RankedCandidate {
        language: Language::UNKNOWN,
        raw_score: 0.0,
        percent: 0,
        normalized_score: 0.0,
    };

    pub fn is_unknown(&self) -> bool {
        self.language.is_unknown()
    }
}

/// Immutable outcome of one detection call.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DetectionResult {
    candidates: [RankedCandidate; RESULT_SLOTS],
    text_bytes: usize,
    reliable: bool,
}

impl DetectionResult {
    /// Pack ranked candidates (best first) into the fixed three slots,
    /// padding with [`RankedCandidate::UNKNOWN`]. Extra candidates are dropped.
    pub fn assemble<I>(ranked: I, text_bytes: usize, reliable: bool) -> Self
    where
        I: IntoIterator<Item = RankedCandidate>,
    {
        let mut candidates = [RankedCandidate::UNKNOWN; RESULT_SLOTS];
        for (slot, candidate) in candidates.iter_mut().zip(ranked) {
            *slot = candidate;
        }
        let reliable = reliable && !candidates[0].is_unknown();
        Self {
            candidates,
            text_bytes,
            reliable,
        }
    }

    /// Result for input with no usable evidence.
    pub fn unknown() -> Self {
        Self::assemble(std::iter::empty(), 0, false)
    }

    pub fn candidates(&self) -> &[RankedCandidate; RESULT_SLOTS] {
        &self.candidates
    }

    pub fn top(&self) -> &RankedCandidate {
        &self.candidates[0]
    }

    /// Candidates that name a real language, best first.
    pub fn estimates(&self) -> impl Iterator<Item = &RankedCandidate> {
        self.candidates.iter().filter(|c| !c.is_unknown())
    }

    /// Classified bytes the estimate is based on.
    pub fn text_bytes(&self) -> usize {
        self.text_bytes
    }

    pub fn is_reliable(&self) -> bool {
        self.reliable
    }

    pub fn best_language(&self) -> Language {
        self.top().language
    }

    pub fn best_name(&self) -> &'static str {
        self.best_language().name()
    }

    pub fn best_code(&self) -> u16 {
        self.best_language().id()
    }

    pub fn languages(&self) -> [Language; RESULT_SLOTS] {
        self.candidates.map(|c| c.language)
    }

    pub fn percents(&self) -> [u8; RESULT_SLOTS] {
        self.candidates.map(|c| c.percent)
    }

    pub fn normalized_scores(&self) -> [f64; RESULT_SLOTS] {
        self.candidates.map(|c| c.normalized_score)
    }
}

impl Default for DetectionResult {
    fn default() -> Self {
        Self::unknown()
    }
}

/// C-layout record for callers that need the historical binary shape:
///
/// ```c
/// struct { int language[3]; int percent[3]; double normalized_score[3];
///          int text_bytes; char reliable; };
/// ```
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct RawResult {
    pub language: [c_int; RESULT_SLOTS],
    pub percent: [c_int; RESULT_SLOTS],
    pub normalized_score: [c_double; RESULT_SLOTS],
    pub text_bytes: c_int,
    pub reliable: c_char,
}

impl From<&DetectionResult> for RawResult {
    fn from(result: &DetectionResult) -> Self {
        Self {
            language: result.candidates.map(|c| c_int::from(c.language.id())),
            percent: result.candidates.map(|c| c_int::from(c.percent)),
            normalized_score: result.normalized_scores(),
            // saturate rather than wrap for inputs over 2 GiB
            text_bytes: c_int::try_from(result.text_bytes).unwrap_or(c_int::MAX),
            reliable: c_char::from(result.reliable),
        }
    }
}
