//! Command history with readline-style recall.

/// Ordered storage of executed command lines with a bidirectional recall
/// cursor.
///
/// Entries are chronological, oldest first, unbounded until
/// [`clear`](Self::clear). The cursor ranges over `[0, len]`; `len` means
/// "not browsing, edit buffer is fresh". Recall is clamped at the oldest
/// entry (no wraparound) and yields an empty string past the newest, the
/// "back to a blank input line" sentinel.
#[derive(Clone, Debug, Default)]
pub struct CommandHistory {
    entries: Vec<String>,
    cursor: usize,
}

impl CommandHistory {
    /// Creates an empty history.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a submitted line and resets the cursor to the fresh
    /// position.
    ///
    /// Every submitted line is recorded, including ones that failed to
    /// parse or execute; filtering is the caller's choice.
    pub fn record(&mut self, text: impl Into<String>) {
        self.entries.push(text.into());
        self.cursor = self.entries.len();
    }

    /// Moves the cursor one entry back and returns the entry there.
    ///
    /// Clamped at the oldest entry. Returns `None` when the history is
    /// empty (recall is disabled entirely).
    pub fn recall_previous(&mut self) -> Option<&str> {
        if self.entries.is_empty() {
            return None;
        }
        if self.cursor > 0 {
            self.cursor -= 1;
        }
        Some(&self.entries[self.cursor])
    }

    /// Moves the cursor one entry forward and returns the entry there, or
    /// an empty string once past the newest entry.
    ///
    /// Returns `None` when the history is empty.
    pub fn recall_next(&mut self) -> Option<&str> {
        if self.entries.is_empty() {
            return None;
        }
        if self.cursor < self.entries.len() {
            self.cursor += 1;
        }
        if self.cursor < self.entries.len() {
            Some(&self.entries[self.cursor])
        } else {
            Some("")
        }
    }

    /// Empties the history and resets the cursor.
    pub fn clear(&mut self) {
        self.entries.clear();
        self.cursor = 0;
    }

    /// The recorded lines, oldest first.
    #[must_use]
    pub fn entries(&self) -> &[String] {
        &self.entries
    }

    /// Number of recorded lines.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True if nothing has been recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Current cursor position, in `[0, len]`.
    #[must_use]
    pub const fn cursor(&self) -> usize {
        self.cursor
    }
}
