//! Stable language identifiers and their code/name lookups.
//!
//! A [`Language`] is the small integer id reported by `detect_best_code` and
//! stored in [`crate::RawResult`]. Ids never change between releases, so
//! callers may persist them.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::collections::HashMap;
use std::fmt;
use std::sync::OnceLock;

mod registry;

use registry::LANGUAGE_TABLE;

/// Number of language ids known to the registry.
pub const NUM_LANGUAGES: usize = LANGUAGE_TABLE.len();

pub(crate) struct LanguageEntry {
    pub(crate) code: &'static str,
    pub(crate) cname: &'static str,
    pub(crate) name: &'static str,
}

/// Numeric language identifier.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Language(u16);

impl Language {
    pub const ENGLISH: Language = Language(0);
    pub const DANISH: Language = Language(1);
    pub const DUTCH: Language = Language(2);
    pub const FINNISH: Language = Language(3);
    pub const FRENCH: Language = Language(4);
    pub const GERMAN: Language = Language(5);
    pub const HEBREW: Language = Language(6);
    pub const ITALIAN: Language = Language(7);
    pub const JAPANESE: Language = Language(8);
    pub const KOREAN: Language = Language(9);
    pub const NORWEGIAN: Language = Language(10);
    pub const POLISH: Language = Language(11);
    pub const PORTUGUESE: Language = Language(12);
    pub const RUSSIAN: Language = Language(13);
    pub const SPANISH: Language = Language(14);
    pub const SWEDISH: Language = Language(15);
    pub const CHINESE: Language = Language(16);
    pub const CZECH: Language = Language(17);
    pub const GREEK: Language = Language(18);
    pub const ROMANIAN: Language = Language(22);
    pub const HUNGARIAN: Language = Language(23);
    pub const TG_UNKNOWN: Language = Language(25);
    /// Sentinel reported when there is no usable evidence.
    pub const UNKNOWN: Language = Language(26);
    pub const BULGARIAN: Language = Language(27);
    pub const TURKISH: Language = Language(33);
    pub const UKRAINIAN: Language = Language(34);
    pub const HINDI: Language = Language(35);
    pub const MACEDONIAN: Language = Language(36);
    pub const INDONESIAN: Language = Language(38);
    pub const THAI: Language = Language(53);
    pub const ARABIC: Language = Language(54);
    pub const VIETNAMESE: Language = Language(66);

    /// Language for a numeric id; ids outside the registry map to [`Language::UNKNOWN`].
    pub const fn new(id: u16) -> Self {
        if (id as usize) < NUM_LANGUAGES {
            Language(id)
        } else {
            Language::UNKNOWN
        }
    }

    /// Look up a language by its code (`"en"`, `"iw"`, `"zh-Hant"`).
    ///
    /// Unrecognized codes return [`Language::UNKNOWN`].
    pub fn from_code(code: &str) -> Self {
        Self::try_from_code(code).unwrap_or(Language::UNKNOWN)
    }

    /// Like [`Language::from_code`] but distinguishes "unknown code" from the `"un"` sentinel.
    pub fn try_from_code(code: &str) -> Option<Self> {
        code_index().get(code).copied()
    }

    pub const fn id(self) -> u16 {
        self.0
    }

    pub fn code(self) -> &'static str {
        self.entry().code
    }

    /// Human-readable name, e.g. `"English"`.
    pub fn name(self) -> &'static str {
        self.entry().name
    }

    /// Upper-case constant name, e.g. `"ENGLISH"`.
    pub fn cname(self) -> &'static str {
        self.entry().cname
    }

    /// True for both unknown sentinels.
    pub fn is_unknown(self) -> bool {
        self == Language::UNKNOWN || self == Language::TG_UNKNOWN
    }

    /// Every registered language in id order.
    pub fn all() -> impl Iterator<Item = Language> {
        (0..NUM_LANGUAGES as u16).map(Language)
    }

    fn entry(self) -> &'static LanguageEntry {
        // WHY: constructors keep the id in range, so indexing cannot fail
        &LANGUAGE_TABLE[self.0 as usize]
    }
}

fn code_index() -> &'static HashMap<&'static str, Language> {
    static INDEX: OnceLock<HashMap<&'static str, Language>> = OnceLock::new();
    INDEX.get_or_init(|| {
        let mut index = HashMap::with_capacity(NUM_LANGUAGES);
        for language in Language::all() {
            // first id wins for codes the registry lists twice
            index.entry(language.code()).or_insert(language);
        }
        index
    })
}

impl Default for Language {
    fn default() -> Self {
        Language::UNKNOWN
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl fmt::Debug for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Language({}:{})", self.0, self.code())
    }
}

impl Serialize for Language {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.code())
    }
}

impl<'de> Deserialize<'de> for Language {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let code = String::deserialize(deserializer)?;
        Language::try_from_code(&code)
            .ok_or_else(|| serde::de::Error::custom(format!("unknown language code: {code:?}")))
    }
}
