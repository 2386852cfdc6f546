//! Orders scored languages and decides whether the top pick can be trusted.

use super::result::{RankedCandidate, RESULT_SLOTS};
use super::scorer::{LanguageTotal, ScoreSheet};

/// Fewer classified bytes than this is too little evidence to trust.
pub const MIN_RELIABLE_BYTES: usize = 20;
/// Required gap between the top two normalized scores.
pub const MIN_SCORE_SEPARATION: f64 = 0.05;
/// The top language must own at least this share of classified bytes.
pub const MIN_DOMINANT_PERCENT: u8 = 40;
/// Classified bytes must make up at least this share of the bytes supplied.
/// A few words inside binary noise say little about the input as a whole.
pub const MIN_RETAINED_PERCENT: u8 = 25;

/// Ranked candidates (at most three, best first) and the reliability verdict.
#[derive(Debug, Clone, PartialEq)]
pub struct Ranking {
    pub candidates: Vec<RankedCandidate>,
    pub text_bytes: usize,
    pub reliable: bool,
}

/// Rank by score desc, contribution count desc, language id asc.
pub fn rank(sheet: &ScoreSheet) -> Ranking {
    let mut scored: Vec<&LanguageTotal> = sheet.scored().collect();
    scored.sort_by(|a, b| {
        b.score
            .total_cmp(&a.score)
            .then(b.contributions.cmp(&a.contributions))
            .then(a.language.cmp(&b.language))
    });

    let candidates: Vec<RankedCandidate> = scored
        .into_iter()
        .take(RESULT_SLOTS)
        .map(|total| RankedCandidate {
            language: total.language,
            raw_score: total.score,
            percent: percent_of(total.bytes, sheet.text_bytes),
            normalized_score: normalize(total.score, sheet.ceiling),
        })
        .collect();

    let reliable = is_reliable(&candidates, sheet.text_bytes, sheet.input_bytes);
    Ranking {
        candidates,
        text_bytes: sheet.text_bytes,
        reliable,
    }
}

/// Integer share of `total`, rounded down and clamped to 100.
pub fn percent_of(bytes: usize, total: usize) -> u8 {
    if total == 0 {
        return 0;
    }
    let percent = (bytes.min(total) as u128 * 100) / total as u128;
    percent as u8
}

/// `score / ceiling` clamped to [0, 1]; zero when nothing hit the table.
pub fn normalize(score: f64, ceiling: f64) -> f64 {
    if ceiling > 0.0 {
        (score / ceiling).clamp(0.0, 1.0)
    } else {
        0.0
    }
}

/// Reliable needs enough classified bytes, enough of the input retained,
/// a known leader, a clear gap to the runner-up and a dominant share of the text.
pub fn is_reliable(candidates: &[RankedCandidate], text_bytes: usize, input_bytes: usize) -> bool {
    let Some(top) = candidates.first() else {
        return false;
    };
    let runner_up = candidates.get(1).map_or(0.0, |c| c.normalized_score);
    text_bytes >= MIN_RELIABLE_BYTES
        && percent_of(text_bytes, input_bytes) >= MIN_RETAINED_PERCENT
        && !top.is_unknown()
        && top.normalized_score - runner_up >= MIN_SCORE_SEPARATION
        && top.percent >= MIN_DOMINANT_PERCENT
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::language::Language;

    fn candidate(language: Language, percent: u8, normalized_score: f64) -> RankedCandidate {
        RankedCandidate {
            language,
            raw_score: normalized_score,
            percent,
            normalized_score,
        }
    }

    #[test]
    fn test_rank_orders_and_measures_candidates() {
        use crate::detector::scanner::{scan, Script};
        use crate::detector::scorer::Scorer;
        use crate::table::tests::{ev, key};
        use crate::table::FrequencyTable;
        use std::collections::BTreeMap;

        let mut entries = BTreeMap::new();
        entries.insert(key(Script::Latin, "abc"), vec![ev(Language::ENGLISH, 2.0)]);
        entries.insert(key(Script::Latin, "xyz"), vec![ev(Language::FRENCH, 1.0)]);
        let table = FrequencyTable::from_entries(entries).unwrap();
        let sheet = Scorer::new(&table, 1).score(&scan(b"abc xyz"));

        let ranking = rank(&sheet);
        assert_eq!(ranking.text_bytes, 7);
        assert_eq!(ranking.candidates.len(), 2);
        assert_eq!(ranking.candidates[0].language, Language::ENGLISH);
        assert_eq!(ranking.candidates[0].percent, 14);
        assert_eq!(ranking.candidates[0].normalized_score, 2.0 / 3.0);
        assert_eq!(ranking.candidates[1].language, Language::FRENCH);
        assert_eq!(ranking.candidates[1].normalized_score, 1.0 / 3.0);
        // most of the text matched nothing, so neither language dominates
        assert!(!ranking.reliable);
    }

    #[test]
    fn test_percent_floor_and_clamp() {
        assert_eq!(percent_of(0, 0), 0);
        assert_eq!(percent_of(1, 3), 33);
        assert_eq!(percent_of(2, 3), 66);
        assert_eq!(percent_of(5, 5), 100);
        assert_eq!(percent_of(9, 5), 100);
    }

    #[test]
    fn test_normalize_clamps() {
        assert_eq!(normalize(1.0, 0.0), 0.0);
        assert_eq!(normalize(1.0, 4.0), 0.25);
        assert_eq!(normalize(8.0, 4.0), 1.0);
    }

    #[test]
    fn test_reliable_when_every_threshold_passes() {
        let ranked = [
            candidate(Language::ENGLISH, 90, 0.7),
            candidate(Language::FRENCH, 10, 0.1),
        ];
        assert!(is_reliable(&ranked, 200, 220));
        assert!(is_reliable(&ranked[..1], MIN_RELIABLE_BYTES, MIN_RELIABLE_BYTES));
    }

    #[test]
    fn test_unreliable_on_each_failed_threshold() {
        let solid = candidate(Language::ENGLISH, 90, 0.7);
        // too few bytes
        assert!(!is_reliable(&[solid], MIN_RELIABLE_BYTES - 1, MIN_RELIABLE_BYTES - 1));
        // ambiguous
        assert!(!is_reliable(
            &[solid, candidate(Language::FRENCH, 10, 0.68)],
            200,
            200
        ));
        // not dominant
        assert!(!is_reliable(
            &[candidate(Language::ENGLISH, 39, 0.7)],
            200,
            200
        ));
        // unknown leader or nothing at all
        assert!(!is_reliable(&[RankedCandidate::UNKNOWN], 200, 200));
        assert!(!is_reliable(&[], 200, 200));
    }

    #[test]
    fn test_retained_share_gate() {
        let solid = [candidate(Language::ENGLISH, 100, 0.7)];
        // 44 letters buried in 9000 bytes of noise
        assert!(!is_reliable(&solid, 44, 9044));
        assert!(!is_reliable(&solid, 99, 400));
        assert!(is_reliable(&solid, 100, 400));
        assert!(is_reliable(&solid, 44, 94));
    }
}
