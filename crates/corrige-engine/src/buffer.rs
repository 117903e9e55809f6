// Text buffer for the rule dispatcher.
//
// The buffer owns the text as a `Vec<char>` so that in-place rewrites can be
// made length-stable at character granularity; a `String` snapshot is
// rebuilt on demand for regex scans. All externally visible offsets are
// character offsets, which stay valid across rewrites because every rewrite
// replaces a span with exactly as many characters. Byte offsets only exist
// inside a single scan, translated through `CharMap`.

/// Mapping from byte offsets of a string to character offsets.
#[derive(Debug)]
pub struct CharMap {
    /// Byte offset at which each character starts.
    starts: Vec<usize>,
    byte_len: usize,
}

impl CharMap {
    pub fn new(s: &str) -> Self {
        Self {
            starts: s.char_indices().map(|(b, _)| b).collect(),
            byte_len: s.len(),
        }
    }

    /// Character offset for a byte offset lying on a char boundary.
    /// The end-of-string byte offset maps to the character count.
    pub fn char_of(&self, byte: usize) -> usize {
        self.starts.partition_point(|&b| b < byte)
    }

    /// Byte offset at which the given character offset starts.
    pub fn byte_of(&self, ch: usize) -> usize {
        if ch >= self.starts.len() {
            self.byte_len
        } else {
            self.starts[ch]
        }
    }

    pub fn len_chars(&self) -> usize {
        self.starts.len()
    }
}

/// Mutable paragraph or sentence text under rule scanning.
#[derive(Debug)]
pub struct TextBuffer {
    chars: Vec<char>,
    snapshot: Option<String>,
    changed: bool,
}

impl TextBuffer {
    pub fn new(text: &str) -> Self {
        Self {
            chars: text.chars().collect(),
            snapshot: Some(text.to_string()),
            changed: false,
        }
    }

    pub fn len_chars(&self) -> usize {
        self.chars.len()
    }

    /// True once any rewrite or normalization has touched the buffer.
    pub fn changed(&self) -> bool {
        self.changed
    }

    /// Current text as a `String`, rebuilt only after a mutation.
    pub fn snapshot(&mut self) -> &str {
        if self.snapshot.is_none() {
            self.snapshot = Some(self.chars.iter().collect());
        }
        self.snapshot.as_deref().unwrap_or("")
    }

    /// Consume the buffer, returning the current text.
    pub fn into_string(mut self) -> String {
        match self.snapshot.take() {
            Some(s) => s,
            None => self.chars.into_iter().collect(),
        }
    }

    /// Replace the character span `[start, end)` with `replacement`.
    ///
    /// The replacement must hold exactly `end - start` characters; the
    /// rewrite engine guarantees this by padding. Violations are a
    /// programming error in the engine, not in rule data.
    pub fn splice(&mut self, start: usize, end: usize, replacement: &str) {
        debug_assert_eq!(replacement.chars().count(), end - start);
        for (slot, c) in self.chars[start..end].iter_mut().zip(replacement.chars()) {
            *slot = c;
        }
        self.snapshot = None;
        self.changed = true;
    }

    /// Sentence-pass normalization: substitute characters that would
    /// otherwise defeat the sentence rules. Runs unconditionally before the
    /// sentence partition, never for the paragraph partition.
    ///
    /// All substitutions are one character for one character.
    pub fn normalize(&mut self) -> bool {
        let mut touched = false;
        for c in self.chars.iter_mut() {
            let replacement = match *c {
                '\u{00A0}' | '\u{202F}' => ' ', // no-break spaces
                '@' => ' ',
                '\'' => '’',
                '\u{2011}' => '-', // no-break hyphen
                _ => continue,
            };
            if *c != replacement {
                *c = replacement;
                touched = true;
            }
        }
        if touched {
            self.snapshot = None;
            self.changed = true;
        }
        touched
    }
}
