use crate::fonts::{FontSpec, TextMetrics};
use log::debug;

/// Space kept free at the right edge of every wrapped line so glyphs never
/// touch a cell border.
pub const SAFETY_MARGIN: f32 = 5.0;

/// The display lines one source text was broken into.
///
/// Never empty: wrapping an empty string yields a single empty line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WrappedLines {
    lines: Vec<String>,
}

impl WrappedLines {
    fn new(lines: Vec<String>) -> Self {
        debug_assert!(!lines.is_empty());
        Self { lines }
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// Number of display lines, always at least 1.
    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, String> {
        self.lines.iter()
    }

    pub fn into_lines(self) -> Vec<String> {
        self.lines
    }
}

impl<'a> IntoIterator for &'a WrappedLines {
    type Item = &'a String;
    type IntoIter = std::slice::Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.lines.iter()
    }
}

/// Greedy word wrapper with a character-level hyphenation fallback.
///
/// Every produced line measures at most `max_width - safety_margin` under the
/// wrapper's font, except in the degenerate case of a single character that is
/// wider than that on its own.
pub struct LineWrapper<'a> {
    metrics: &'a dyn TextMetrics,
    font: FontSpec,
    max_width: f32,
    safety_margin: f32,
}

impl<'a> LineWrapper<'a> {
    pub fn new(metrics: &'a dyn TextMetrics, font: FontSpec, max_width: f32) -> Self {
        Self {
            metrics,
            font,
            max_width,
            safety_margin: SAFETY_MARGIN,
        }
    }

    pub fn with_safety_margin(mut self, safety_margin: f32) -> Self {
        self.safety_margin = safety_margin;
        self
    }

    /// The widest a line may measure.
    pub fn limit(&self) -> f32 {
        self.max_width - self.safety_margin
    }

    pub fn font(&self) -> &FontSpec {
        &self.font
    }

    pub fn measure(&self, text: &str) -> f32 {
        self.metrics.text_width(&self.font, text)
    }

    fn fits(&self, text: &str) -> bool {
        self.measure(text) <= self.limit()
    }

    /// Wraps `text` as one paragraph. Any run of whitespace (newlines included)
    /// separates words.
    pub fn wrap(&self, text: &str) -> WrappedLines {
        let mut lines = Vec::new();
        let mut current = String::new();

        for word in text.split_whitespace() {
            let candidate = if current.is_empty() {
                word.to_string()
            } else {
                format!("{} {}", current, word)
            };

            if self.fits(&candidate) {
                current = candidate;
            } else if self.fits(word) {
                lines.push(std::mem::replace(&mut current, word.to_string()));
            } else {
                current = self.break_word(current, word, &mut lines);
            }
        }

        lines.push(current);
        WrappedLines::new(lines)
    }

    /// Wraps each `\n`-separated paragraph on its own. Blank paragraphs are kept
    /// as a single empty line.
    pub fn wrap_paragraphs(&self, text: &str) -> Vec<WrappedLines> {
        text.split('\n')
            .map(|paragraph| self.wrap(paragraph.trim_end_matches('\r')))
            .collect()
    }

    /// Splits a word too wide for any line. The partially filled `line` is
    /// completed first, then the word is broken character by character with a
    /// trailing hyphen on every full fragment. Completed lines are pushed onto
    /// `lines`; the unfinished tail is returned.
    fn break_word(&self, line: String, word: &str, lines: &mut Vec<String>) -> String {
        debug!(
            "Hyphenating word of width {:.2} to fit {:.2}",
            self.measure(word),
            self.limit()
        );
        if !line.is_empty() {
            lines.push(line);
        }

        let mut fragment = String::new();
        for c in word.chars() {
            let mut trial = fragment.clone();
            trial.push(c);
            trial.push('-');

            if fragment.is_empty() || self.fits(&trial) {
                fragment.push(c);
            } else {
                fragment.push('-');
                lines.push(std::mem::replace(&mut fragment, c.to_string()));
            }
        }
        fragment
    }
}
