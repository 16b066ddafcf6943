//! Delta accumulation for streamed generations.

/// Append-only concatenation of the deltas received in one generation.
#[derive(Debug, Default)]
pub struct TextAccumulator {
    content: String,
    deltas: usize,
}

impl TextAccumulator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a delta and return the full text received so far.
    pub fn push_delta(&mut self, delta: &str) -> &str {
        self.content.push_str(delta);
        self.deltas += 1;
        &self.content
    }

    /// The text accumulated so far.
    pub fn current_content(&self) -> &str {
        &self.content
    }

    /// Number of deltas folded in.
    pub fn delta_count(&self) -> usize {
        self.deltas
    }

    pub fn finalize(self) -> String {
        self.content
    }
}
