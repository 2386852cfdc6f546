// End-to-end detection behavior against the embedded table
// WHY: these exercise the whole scan -> score -> rank -> assemble pipeline on real prose

#[path = "integration/mod.rs"]
mod test_utils;

use langscore::{
    detect_best, detect_best_code, detect_top3, DetectionResult, Language, RawResult, MIN_RELIABLE_BYTES,
};
use test_utils::{library_samples, load_fixture, property_inputs, SHORT_SENTENCES};

#[test]
fn test_monolingual_samples_are_dominant_and_reliable() {
    for (language, text) in library_samples() {
        let result = detect_top3(text.as_bytes());
        assert_eq!(result.best_language(), language, "wrong top language for {}", language.code());
        assert!(result.top().percent > 50, "{} share too low: {:?}", language.code(), result);
        assert!(result.is_reliable(), "{} should be reliable: {:?}", language.code(), result);
        assert!(result.text_bytes() > 0 && result.text_bytes() <= text.len());
    }
}

#[test]
fn test_short_sentences() {
    for (code, text) in SHORT_SENTENCES {
        let result = detect_top3(text.as_bytes());
        assert_eq!(result.best_language().code(), code, "misdetected `{}`: {:?}", text, result);
        assert_eq!(result.best_name(), Language::from_code(code).name());
        assert!(result.is_reliable(), "`{}` should be reliable: {:?}", text, result);
        assert_eq!(detect_best(text.as_bytes()), result.best_name());
        assert_eq!(detect_best_code(text.as_bytes()), result.best_code());
    }
}

#[test]
fn test_short_phrase_past_threshold_is_reliable() {
    let result = detect_top3(b"Stringer works best with");
    assert_eq!(result.best_language(), Language::ENGLISH);
    assert!(result.is_reliable());
    assert!(result.estimates().count() >= 1);
}

#[test]
fn test_two_letter_word_is_unreliable() {
    let result = detect_top3(b"no");
    assert!(result.text_bytes() < MIN_RELIABLE_BYTES);
    assert!(!result.is_reliable());
}

#[test]
fn test_danish_news_text() {
    let text = load_fixture("da_news.txt");
    let result = detect_top3(text.as_bytes());
    assert_eq!(result.best_language(), Language::DANISH);
    assert!(result.top().percent >= 80, "{:?}", result);
    assert!(result.is_reliable());
    assert_eq!(detect_best(text.as_bytes()), "Danish");
    assert_eq!(detect_best_code(text.as_bytes()), 1);
}

#[test]
fn test_empty_input_is_unknown() {
    let result = detect_top3(b"");
    assert_eq!(result.best_language(), Language::UNKNOWN);
    assert_eq!(result.text_bytes(), 0);
    assert!(!result.is_reliable());
    assert_eq!(result.estimates().count(), 0);
    assert_eq!(detect_best(b""), "Unknown");
    assert_eq!(detect_best_code(b""), 26);
}

#[test]
fn test_invalid_utf8_only_is_unknown() {
    let garbage = [0xFF, 0xFE, 0xC0, 0x80, 0xF5].repeat(20);
    let result = detect_top3(&garbage);
    assert_eq!(result.best_language(), Language::UNKNOWN);
    assert_eq!(result.text_bytes(), 0);
    assert!(!result.is_reliable());
}

#[test]
fn test_invalid_bytes_do_not_derail_detection() {
    let text = load_fixture("de_library.txt");
    let mut damaged = Vec::new();
    for (i, chunk) in text.as_bytes().chunks(50).enumerate() {
        damaged.extend_from_slice(chunk);
        if i % 2 == 0 {
            damaged.extend_from_slice(&[0xFF, 0xC3]);
        }
    }
    let result = detect_top3(&damaged);
    assert_eq!(result.best_language(), Language::GERMAN);
}

/// Percent credited to `language`, zero when it missed the top three.
fn percent_for(result: &DetectionResult, language: Language) -> f64 {
    result
        .estimates()
        .find(|c| c.language == language)
        .map_or(0.0, |c| f64::from(c.percent))
}

/// Both halves of a concatenation make the top two, and neither claims much
/// more than its share of the input.
fn assert_shares_follow_sources(first: (Language, &str), second: (Language, &str)) {
    let joined = format!("{}\n{}", first.1, second.1);
    let result = detect_top3(joined.as_bytes());
    let top_two = &result.languages()[..2];
    assert!(
        top_two.contains(&first.0) && top_two.contains(&second.0),
        "{}+{} top two were {:?}",
        first.0.code(),
        second.0.code(),
        result
    );
    let percents = result.percents();
    assert!(u32::from(percents[0]) + u32::from(percents[1]) >= 90, "{:?}", result);

    for (language, text) in [first, second] {
        let source_share = text.len() as f64 * 100.0 / joined.len() as f64;
        let credited = percent_for(&result, language);
        assert!(
            credited <= source_share + 10.0,
            "{} took {}% of a mix it supplied {:.0}% of: {:?}",
            language.code(),
            credited,
            source_share,
            result
        );
    }
}

#[test]
fn test_bilingual_concatenation_splits_shares() {
    let samples = library_samples();
    for (first, first_text) in &samples {
        for (second, second_text) in &samples {
            if first != second {
                assert_shares_follow_sources(
                    (*first, first_text.as_str()),
                    (*second, second_text.as_str()),
                );
            }
        }
    }
}

#[test]
fn test_unequal_concatenation_tracks_source_proportion() {
    let english = load_fixture("en_library.txt");
    let danish = load_fixture("da_news.txt");
    let (english, danish) = (english.as_str(), danish.as_str());
    assert_shares_follow_sources((Language::ENGLISH, english), (Language::DANISH, danish));
    assert_shares_follow_sources((Language::DANISH, danish), (Language::ENGLISH, english));

    let joined = format!("{english}\n{danish}");
    let result = detect_top3(joined.as_bytes());
    assert_eq!(result.best_language(), Language::DANISH);
    assert!(percent_for(&result, Language::DANISH) > percent_for(&result, Language::ENGLISH));
}

#[test]
fn test_library_samples_are_long() {
    for (language, text) in library_samples() {
        assert!(text.len() > 500, "{} sample is only {} bytes", language.code(), text.len());
    }
}

#[test]
fn test_text_bytes_count_source_bytes_when_lowercasing_widens() {
    for text in [
        "ȺȺȺȺȺȺȺȺȺȺ İİİİİİİİİİ",
        "İstanbul, İzmir, Iğdır, Şanlıurfa, Çanakkale, Eskişehir",
    ] {
        let result = detect_top3(text.as_bytes());
        assert!(
            result.text_bytes() <= text.len(),
            "text_bytes {} exceeds input length {}",
            result.text_bytes(),
            text.len()
        );
    }
    assert_eq!(detect_top3("ȺȺȺȺȺȺȺȺȺȺ İİİİİİİİİİ".as_bytes()).text_bytes(), 41);
}

#[test]
fn test_words_buried_in_invalid_bytes_are_unreliable() {
    let sentence = b"The quick brown fox jumped over the lazy dog";
    let mut buried = sentence.to_vec();
    buried.extend([0xFF, 0xFE, 0xC0].repeat(3000));

    let result = detect_top3(&buried);
    assert_eq!(result.best_language(), Language::ENGLISH);
    assert_eq!(result.text_bytes(), sentence.len());
    assert!(!result.is_reliable(), "{:?}", result);

    // a little noise still leaves most of the input classified
    let mut lightly_damaged = sentence.to_vec();
    lightly_damaged.extend([0xFF, 0xFE, 0xC0].repeat(17));
    assert!(detect_top3(&lightly_damaged).is_reliable());
    assert!(detect_top3(sentence).is_reliable());
}

#[test]
fn test_truncation_below_threshold_loses_reliability() {
    for (language, text) in library_samples().into_iter().take(2) {
        let short = &text.as_bytes()[..12];
        let result = detect_top3(short);
        assert_eq!(result.best_language(), language);
        assert!(result.text_bytes() < MIN_RELIABLE_BYTES);
        assert!(!result.is_reliable());

        let full = detect_top3(text.as_bytes());
        assert!(full.is_reliable());
    }
}

#[test]
fn test_result_invariants_hold_for_any_input() {
    for input in property_inputs() {
        let result = detect_top3(&input);
        let percents = result.percents();
        let scores = result.normalized_scores();

        let total: u32 = percents.iter().map(|p| u32::from(*p)).sum();
        assert!(total <= 100, "percent overflow {:?}", result);
        assert!(scores.iter().all(|s| (0.0..=1.0).contains(s)));
        assert!(scores.windows(2).all(|w| w[0] >= w[1]), "scores not ordered {:?}", result);
        assert!(result.text_bytes() <= input.len());

        // unknown slots only trail real ones
        let first_unknown = result.candidates().iter().position(|c| c.is_unknown());
        if let Some(slot) = first_unknown {
            assert!(result.candidates()[slot..].iter().all(|c| c.is_unknown() && c.percent == 0));
        }
        if result.is_reliable() {
            assert!(!result.best_language().is_unknown());
            assert!(result.text_bytes() >= MIN_RELIABLE_BYTES);
        }
        if result.text_bytes() == 0 {
            assert_eq!(result.best_language(), Language::UNKNOWN);
        }
    }
}

#[test]
fn test_detection_is_deterministic() {
    for input in property_inputs() {
        let first = detect_top3(&input);
        for _ in 0..3 {
            assert_eq!(detect_top3(&input), first);
        }
    }
}

#[test]
fn test_concurrent_callers_agree_with_sequential() {
    let inputs = property_inputs();
    let expected: Vec<_> = inputs.iter().map(|input| detect_top3(input)).collect();

    std::thread::scope(|scope| {
        let handles: Vec<_> = (0..8)
            .map(|offset| {
                let inputs = &inputs;
                scope.spawn(move || {
                    (0..inputs.len())
                        .map(|i| (i + offset) % inputs.len())
                        .map(|i| (i, detect_top3(&inputs[i])))
                        .collect::<Vec<_>>()
                })
            })
            .collect();
        for handle in handles {
            for (i, result) in handle.join().expect("detection thread panicked") {
                assert_eq!(result, expected[i]);
            }
        }
    });
}

#[test]
fn test_raw_result_mirrors_detection() {
    let text = load_fixture("ru_library.txt");
    let result = detect_top3(text.as_bytes());
    let raw = RawResult::from(&result);

    assert_eq!(raw.language[0], i32::from(Language::RUSSIAN.id()));
    assert_eq!(raw.language[1], i32::from(result.languages()[1].id()));
    assert_eq!(raw.percent[0], i32::from(result.top().percent));
    assert_eq!(raw.normalized_score, result.normalized_scores());
    assert_eq!(raw.text_bytes as usize, result.text_bytes());
    assert_eq!(raw.reliable, 1);

    let empty = RawResult::from(&detect_top3(b""));
    assert_eq!(empty.language, [26, 26, 26]);
    assert_eq!(empty.percent, [0, 0, 0]);
    assert_eq!(empty.reliable, 0);
}
