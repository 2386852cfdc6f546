//! Sliding-window n-gram extraction over normalized span text.

use super::scanner::Script;

/// Longest key: one script tag byte plus the widest window.
pub const MAX_KEY_BYTES: usize = 7;

/// Lookup key `[script tag] ++ window`, held inline so extraction never allocates.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NgramKey {
    bytes: [u8; MAX_KEY_BYTES],
    len: u8,
}

impl NgramKey {
    /// Key for `window` within `script`. The window must be exactly
    /// `script.ngram_bytes()` long.
    pub fn new(script: Script, window: &[u8]) -> Self {
        debug_assert_eq!(window.len(), script.ngram_bytes());
        let mut bytes = [0u8; MAX_KEY_BYTES];
        bytes[0] = script.tag();
        bytes[1..=window.len()].copy_from_slice(window);
        Self {
            bytes,
            len: (window.len() + 1) as u8,
        }
    }

    /// Parse raw key bytes, rejecting unknown tags and wrong window lengths.
    pub fn from_bytes(raw: &[u8]) -> Option<Self> {
        let (&tag, window) = raw.split_first()?;
        let script = Script::from_tag(tag)?;
        (window.len() == script.ngram_bytes()).then(|| Self::new(script, window))
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes[..self.len as usize]
    }

    pub fn script(&self) -> Script {
        // WHY: constructors only accept valid tags
        Script::from_tag(self.bytes[0]).unwrap_or(Script::Latin)
    }

    pub fn window(&self) -> &[u8] {
        &self.as_bytes()[1..]
    }
}

impl std::fmt::Debug for NgramKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}({:?})", self.script(), String::from_utf8_lossy(self.window()))
    }
}

/// Overlapping windows over one span, stride one byte.
///
/// Each clone is an independent cursor over the same span.
#[derive(Debug, Clone)]
pub struct Ngrams<'a> {
    script: Script,
    text: &'a [u8],
    pos: usize,
}

impl<'a> Ngrams<'a> {
    pub fn new(script: Script, text: &'a [u8]) -> Self {
        Self { script, text, pos: 0 }
    }

    fn window(&self) -> usize {
        self.script.ngram_bytes()
    }
}

impl Iterator for Ngrams<'_> {
    type Item = NgramKey;

    fn next(&mut self) -> Option<NgramKey> {
        let end = self.pos + self.window();
        let window = self.text.get(self.pos..end)?;
        self.pos += 1;
        Some(NgramKey::new(self.script, window))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = count(self.text.len().saturating_sub(self.pos), self.window());
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for Ngrams<'_> {}

/// Number of windows of `window` bytes in `len` bytes. Spans shorter than a
/// window yield none and contribute no evidence.
pub fn count(len: usize, window: usize) -> usize {
    (len + 1).saturating_sub(window)
}
