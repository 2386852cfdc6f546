//! Tolerant byte scanner.
//!
//! Walks raw input left to right, skips invalid UTF-8, and groups letters into
//! script-homogeneous spans. Each span's text is lowercased, padded with a
//! leading and trailing space, and has inner separator runs collapsed to one
//! space so word-boundary n-grams carry evidence.

use serde::{Deserialize, Serialize};
use std::ops::Range;

/// Coarse writing-system class. The discriminant is the tag byte that
/// prefixes every n-gram key, so values must never be renumbered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[repr(u8)]
pub enum Script {
    Latin = 1,
    Greek = 2,
    Cyrillic = 3,
    Armenian = 4,
    Hebrew = 5,
    Arabic = 6,
    Devanagari = 7,
    Bengali = 8,
    Thai = 9,
    Georgian = 10,
    Han = 11,
    Hangul = 12,
}

impl Script {
    pub const ALL: [Script; 12] = [
        Script::Latin,
        Script::Greek,
        Script::Cyrillic,
        Script::Armenian,
        Script::Hebrew,
        Script::Arabic,
        Script::Devanagari,
        Script::Bengali,
        Script::Thai,
        Script::Georgian,
        Script::Han,
        Script::Hangul,
    ];

    pub const fn tag(self) -> u8 {
        self as u8
    }

    pub fn from_tag(tag: u8) -> Option<Self> {
        Self::ALL.get(usize::from(tag).checked_sub(1)?).copied()
    }

    /// UTF-8 width of a typical letter in this script.
    pub const fn bytes_per_char(self) -> usize {
        match self {
            Script::Latin => 1,
            Script::Greek | Script::Cyrillic | Script::Armenian | Script::Hebrew | Script::Arabic => 2,
            _ => 3,
        }
    }

    /// Sliding-window length in bytes. Roughly three letters for alphabets,
    /// two for syllabic and ideographic scripts.
    pub const fn ngram_bytes(self) -> usize {
        match self.bytes_per_char() {
            1 => 3,
            2 => 4,
            _ => 6,
        }
    }

    /// Script of a letter, or `None` for separators and unsupported scripts.
    pub fn of(c: char) -> Option<Script> {
        let cp = c as u32;
        let alpha = |script| if c.is_alphabetic() { Some(script) } else { None };
        match cp {
            0..=0x24F | 0x1E00..=0x1EFF | 0x2C60..=0x2C7F | 0xA720..=0xA7FF | 0xFF21..=0xFF5A => {
                alpha(Script::Latin)
            }
            0x370..=0x3FF | 0x1F00..=0x1FFF => alpha(Script::Greek),
            0x400..=0x52F => alpha(Script::Cyrillic),
            0x530..=0x58F => alpha(Script::Armenian),
            0x591..=0x5BD | 0x5BF | 0x5C1..=0x5C2 | 0x5C4..=0x5C5 | 0x5C7 | 0x5D0..=0x5F2 => {
                Some(Script::Hebrew)
            }
            0x600..=0x6FF | 0x750..=0x77F | 0x8A0..=0x8FF | 0xFB50..=0xFDFF | 0xFE70..=0xFEFF => {
                // harakat and superscript alef are marks, not alphabetic
                if c.is_alphabetic() || (0x64B..=0x65F).contains(&cp) || cp == 0x670 {
                    Some(Script::Arabic)
                } else {
                    None
                }
            }
            0x964..=0x970 => None,
            0x900..=0x97F => Some(Script::Devanagari),
            0x9E6..=0x9EF | 0x9F2..=0x9FB => None,
            0x980..=0x9FF => Some(Script::Bengali),
            0xE01..=0xE3A | 0xE40..=0xE4E => Some(Script::Thai),
            0x10A0..=0x10FF | 0x1C90..=0x1CBF => alpha(Script::Georgian),
            0xAC00..=0xD7A3 | 0x1100..=0x11FF | 0x3131..=0x318E => Some(Script::Hangul),
            0x4E00..=0x9FFF
            | 0x3400..=0x4DBF
            | 0xF900..=0xFAFF
            | 0x20000..=0x2A6DF
            | 0x3041..=0x309F
            | 0x30A1..=0x30FA
            | 0x30FC..=0x30FF
            | 0x31F0..=0x31FF
            | 0xFF66..=0xFF9F
            | 0x3005 => Some(Script::Han),
            _ => None,
        }
    }
}

/// One script-homogeneous run of letters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextSpan {
    pub script: Script,
    /// Byte range in the caller's input, first letter to end of last letter.
    pub source: Range<usize>,
    text: Range<usize>,
    classified: usize,
}

impl TextSpan {
    pub fn start(&self) -> usize {
        self.source.start
    }

    pub fn len(&self) -> usize {
        self.source.len()
    }

    pub fn is_empty(&self) -> bool {
        self.source.is_empty()
    }

    /// Source letter bytes plus one per collapsed inner gap. Measured on the
    /// caller's bytes, so lowercasing that widens a letter cannot inflate it
    /// past `len()`.
    pub fn classified_bytes(&self) -> usize {
        self.classified
    }
}

/// Output of one scan: normalized span text plus accounting.
#[derive(Debug, Clone, Default)]
pub struct ScannedText {
    buffer: Vec<u8>,
    spans: Vec<TextSpan>,
    input_bytes: usize,
    invalid_bytes: usize,
    letter_bytes: usize,
}

impl ScannedText {
    pub fn spans(&self) -> &[TextSpan] {
        &self.spans
    }

    /// Normalized (lowercased, padded) text of a span from this scan.
    pub fn text(&self, span: &TextSpan) -> &[u8] {
        &self.buffer[span.text.clone()]
    }

    pub fn input_bytes(&self) -> usize {
        self.input_bytes
    }

    /// Bytes dropped as malformed UTF-8.
    pub fn invalid_bytes(&self) -> usize {
        self.invalid_bytes
    }

    /// Source bytes that decoded to letters of a supported script.
    pub fn letter_bytes(&self) -> usize {
        self.letter_bytes
    }
}

struct OpenSpan {
    script: Script,
    text_start: usize,
    source: Range<usize>,
    classified: usize,
}

struct SpanBuilder {
    out: ScannedText,
    open: Option<OpenSpan>,
    gap: bool,
}

impl SpanBuilder {
    fn new(input_bytes: usize) -> Self {
        Self {
            out: ScannedText {
                buffer: Vec::with_capacity(input_bytes + 2),
                input_bytes,
                ..Default::default()
            },
            open: None,
            gap: false,
        }
    }

    fn letter(&mut self, script: Script, c: char, at: usize) {
        if self.open.as_ref().is_some_and(|open| open.script != script) {
            self.close();
        }
        if self.open.is_none() {
            self.out.buffer.push(b' ');
            self.open = Some(OpenSpan {
                script,
                text_start: self.out.buffer.len() - 1,
                source: at..at,
                classified: 0,
            });
        } else if self.gap {
            self.out.buffer.push(b' ');
            if let Some(open) = self.open.as_mut() {
                open.classified += 1;
            }
        }
        self.gap = false;

        let mut utf8 = [0u8; 4];
        for lower in c.to_lowercase() {
            self.out
                .buffer
                .extend_from_slice(lower.encode_utf8(&mut utf8).as_bytes());
        }
        let width = c.len_utf8();
        self.out.letter_bytes += width;
        if let Some(open) = self.open.as_mut() {
            open.source.end = at + width;
            open.classified += width;
        }
    }

    fn separator(&mut self) {
        if self.open.is_some() {
            self.gap = true;
        }
    }

    fn invalid(&mut self, len: usize) {
        self.out.invalid_bytes += len;
        self.separator();
    }

    fn close(&mut self) {
        if let Some(open) = self.open.take() {
            self.out.buffer.push(b' ');
            self.out.spans.push(TextSpan {
                script: open.script,
                source: open.source,
                text: open.text_start..self.out.buffer.len(),
                classified: open.classified,
            });
        }
        self.gap = false;
    }

    fn finish(mut self) -> ScannedText {
        self.close();
        self.out
    }
}

/// Scan raw bytes into script spans. Never fails.
pub fn scan(input: &[u8]) -> ScannedText {
    let mut builder = SpanBuilder::new(input.len());
    let mut offset = 0;
    for chunk in input.utf8_chunks() {
        let valid = chunk.valid();
        for (i, c) in valid.char_indices() {
            match Script::of(c) {
                Some(script) => builder.letter(script, c, offset + i),
                None => builder.separator(),
            }
        }
        offset += valid.len();

        let invalid = chunk.invalid();
        if !invalid.is_empty() {
            builder.invalid(invalid.len());
            offset += invalid.len();
        }
    }
    builder.finish()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn texts(scanned: &ScannedText) -> Vec<(Script, String)> {
        scanned
            .spans()
            .iter()
            .map(|s| (s.script, String::from_utf8_lossy(scanned.text(s)).into_owned()))
            .collect()
    }

    #[test]
    fn test_empty_input_has_no_spans() {
        let scanned = scan(b"");
        assert!(scanned.spans().is_empty());
        assert_eq!(scanned.input_bytes(), 0);
        assert_eq!(scanned.invalid_bytes(), 0);
    }

    #[test]
    fn test_lowercases_and_collapses_separators() {
        let scanned = scan(b"Hello,   World! 42");
        assert_eq!(texts(&scanned), vec![(Script::Latin, " hello world ".to_string())]);
        let span = &scanned.spans()[0];
        assert_eq!(span.source, 0..14);
        assert_eq!(span.classified_bytes(), 11);
    }

    #[test]
    fn test_classified_bytes_follow_source_not_lowercased_text() {
        // 'Ⱥ' and 'İ' widen when lowercased
        let input = "ȺȺȺȺȺȺȺȺȺȺ İİİİİİİİİİ";
        let scanned = scan(input.as_bytes());
        let span = &scanned.spans()[0];
        assert_eq!(scanned.spans().len(), 1);
        assert!(scanned.text(span).len() > input.len() + 2);
        assert_eq!(span.classified_bytes(), input.len());
        assert_eq!(span.classified_bytes(), span.len());
        assert_eq!(scanned.letter_bytes(), input.len() - 1);
    }

    #[test]
    fn test_script_change_splits_spans() {
        let scanned = scan("abc Привет def".as_bytes());
        assert_eq!(
            texts(&scanned),
            vec![
                (Script::Latin, " abc ".to_string()),
                (Script::Cyrillic, " привет ".to_string()),
                (Script::Latin, " def ".to_string()),
            ]
        );
        assert_eq!(scanned.spans()[1].start(), 4);
        assert_eq!(scanned.spans()[1].len(), 12);
    }

    #[test]
    fn test_invalid_bytes_are_skipped_and_separate_words() {
        let scanned = scan(b"ab\xFF\xFEcd\xC0");
        assert_eq!(texts(&scanned), vec![(Script::Latin, " ab cd ".to_string())]);
        assert_eq!(scanned.invalid_bytes(), 3);
        assert_eq!(scanned.letter_bytes(), 4);
        assert_eq!(scanned.spans()[0].source, 0..6);
    }

    #[test]
    fn test_only_garbage_yields_nothing() {
        let garbage: Vec<u8> = [0xFFu8, 0xFE, 0xC0, 0x80, 0xF5].repeat(20);
        let scanned = scan(&garbage);
        assert!(scanned.spans().is_empty());
        assert_eq!(scanned.invalid_bytes(), garbage.len());
    }

    #[test]
    fn test_script_classification() {
        assert_eq!(Script::of('é'), Some(Script::Latin));
        assert_eq!(Script::of('7'), None);
        assert_eq!(Script::of('α'), Some(Script::Greek));
        assert_eq!(Script::of('ש'), Some(Script::Hebrew));
        assert_eq!(Script::of('ع'), Some(Script::Arabic));
        assert_eq!(Script::of('。'), None);
        assert_eq!(Script::of('中'), Some(Script::Han));
        assert_eq!(Script::of('の'), Some(Script::Han));
        assert_eq!(Script::of('한'), Some(Script::Hangul));
        assert_eq!(Script::of('ไ'), Some(Script::Thai));
        assert_eq!(Script::of('।'), None);
        assert_eq!(Script::of('क'), Some(Script::Devanagari));
    }

    #[test]
    fn test_tags_round_trip() {
        for script in Script::ALL {
            assert_eq!(Script::from_tag(script.tag()), Some(script));
        }
        assert_eq!(Script::from_tag(0), None);
        assert_eq!(Script::from_tag(13), None);
    }

    #[test]
    fn test_window_lengths() {
        assert_eq!(Script::Latin.ngram_bytes(), 3);
        assert_eq!(Script::Cyrillic.ngram_bytes(), 4);
        assert_eq!(Script::Han.ngram_bytes(), 6);
    }
}
