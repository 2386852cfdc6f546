// WHY: a table trained from a corpus compiled into the binary means detection
// works with no data files on disk

use anyhow::{Context, Result};
use std::sync::{Arc, OnceLock};
use std::time::Instant;
use tracing::info;

use super::{FrequencyTable, TableBuilder, TrainingConfig};
use crate::language::Language;

macro_rules! corpus {
    ($($language:ident => $code:literal),* $(,)?) => {
        &[$((Language::$language, include_str!(concat!("../../data/corpus/", $code, ".txt")))),*]
    };
}

const BUILTIN_CORPUS: &[(Language, &str)] = corpus! {
    ARABIC => "ar",
    CZECH => "cs",
    DANISH => "da",
    GERMAN => "de",
    GREEK => "el",
    ENGLISH => "en",
    SPANISH => "es",
    FINNISH => "fi",
    FRENCH => "fr",
    HINDI => "hi",
    HUNGARIAN => "hu",
    ITALIAN => "it",
    HEBREW => "iw",
    JAPANESE => "ja",
    KOREAN => "ko",
    DUTCH => "nl",
    POLISH => "pl",
    PORTUGUESE => "pt",
    RUSSIAN => "ru",
    SWEDISH => "sv",
    THAI => "th",
    TURKISH => "tr",
    UKRAINIAN => "uk",
    CHINESE => "zh",
};

/// Languages the builtin table was trained on.
pub const BUILTIN_LANGUAGES: usize = BUILTIN_CORPUS.len();

/// Train a fresh table from the embedded corpus.
pub fn train_builtin(config: TrainingConfig) -> Result<FrequencyTable> {
    let start = Instant::now();
    let mut builder = TableBuilder::new(config)?;
    for &(language, text) in BUILTIN_CORPUS {
        builder
            .add_sample(language, text.as_bytes())
            .with_context(|| format!("failed to add builtin sample for {}", language.code()))?;
    }
    let table = builder.build().context("failed to compile builtin table")?;
    info!(
        "Built builtin frequency table in {}ms",
        start.elapsed().as_millis()
    );
    Ok(table)
}

/// Process-wide builtin table, trained on first use and shared thereafter.
///
/// # Panics
///
/// Panics if the embedded corpus cannot be compiled. The corpus is fixed at
/// build time, so this can only fail on a broken build; call
/// [`crate::init`] to surface it at startup.
pub fn builtin_table() -> Arc<FrequencyTable> {
    static BUILTIN: OnceLock<Arc<FrequencyTable>> = OnceLock::new();
    BUILTIN
        .get_or_init(|| {
            let table = train_builtin(TrainingConfig::default())
                .expect("embedded training corpus must compile into a frequency table");
            Arc::new(table)
        })
        .clone()
}
