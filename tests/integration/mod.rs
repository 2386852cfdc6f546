// Integration test utilities and common code
// WHY: Centralized utilities avoid duplication across integration tests

#![allow(dead_code)]

use langscore::Language;
use std::fs;
use std::path::{Path, PathBuf};

/// Held-out prose samples; none of this text is part of the embedded corpus
pub const LIBRARY_SAMPLES: [(Language, &str); 5] = [
    (Language::ENGLISH, "en_library.txt"),
    (Language::GERMAN, "de_library.txt"),
    (Language::SPANISH, "es_library.txt"),
    (Language::RUSSIAN, "ru_library.txt"),
    (Language::FRENCH, "fr_library.txt"),
];

/// Short sentences with the language each must resolve to
pub const SHORT_SENTENCES: [(&str, &str); 10] = [
    ("en", "The quick brown fox jumped over the lazy dog"),
    ("fr", "Le rapide renard brun sauta par dessus le chien paresseux"),
    ("de", "Der schnelle braune Fuchs über den faulen Hund sprang"),
    ("es", "el zorro marrón rápido saltó sobre el perro perezoso"),
    ("zh", "敏捷的棕色狐狸跳过了懒狗，目的也许这语料库文本的宽度足以决定"),
    ("ja", "速い茶色のキツネは、怠け者の犬を飛び越えました"),
    ("ko", "빠른 갈색 여우가 게으른 개를 뛰어 넘었다"),
    ("th", "สุนัขจิ้งจอกสีน้ำตาลได้อย่างรวดเร็วเพิ่มขึ้นกว่าสุนัขขี้เกียจ"),
    ("ar", "قفز الثعلب البني السريع فوق الكلب الكسول"),
    ("iw", "שועל החום הזריז קפץ מעל הכלב העצלן, לכוון אולי קורפוס זה של טקסט הוא רחב מספיק כדי להחליט"),
];

pub fn fixture_path(name: &str) -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("tests").join("fixtures").join(name)
}

pub fn load_fixture(name: &str) -> String {
    let path = fixture_path(name);
    fs::read_to_string(&path)
        .unwrap_or_else(|e| panic!("Failed to read fixture {}: {}", path.display(), e))
}

pub fn library_samples() -> Vec<(Language, String)> {
    LIBRARY_SAMPLES
        .iter()
        .map(|(language, name)| (*language, load_fixture(name)))
        .collect()
}

/// Assorted inputs for properties that must hold on any text
pub fn property_inputs() -> Vec<Vec<u8>> {
    let mut inputs: Vec<Vec<u8>> = vec![
        Vec::new(),
        b"no".to_vec(),
        b"   \n\t 12345 !!! ".to_vec(),
        [0xFF, 0xFE, 0xC0, 0x80, 0xF5].repeat(20),
        b"Stringer works best with".to_vec(),
        b"caf\xC3\xA9 \xFF\xFE au lait \xE2\x82".to_vec(),
    ];
    inputs.extend(SHORT_SENTENCES.iter().map(|(_, text)| text.as_bytes().to_vec()));
    let samples = library_samples();
    inputs.extend(samples.iter().map(|(_, text)| text.as_bytes().to_vec()));
    inputs.push(format!("{}\n{}", samples[0].1, samples[3].1).into_bytes());
    inputs.push(load_fixture("da_news.txt").into_bytes());
    inputs
}
