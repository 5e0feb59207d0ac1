//! Count-up animation for the landing page statistics.

/// Total animation length in milliseconds.
pub const DURATION_MS: f64 = 2000.0;
/// One frame at ~60fps.
pub const FRAME_MS: f64 = 16.0;

/// Formats with comma thousands separators: `1234567` → `"1,234,567"`.
pub fn format_number(n: u64) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// Frames of a counter animating from 0 up to `target`.
///
/// Each frame advances by `target / (DURATION_MS / FRAME_MS)`. Frames below the
/// target show the floored value; the final frame shows the target itself.
/// Every frame carries a trailing `+`.
#[derive(Debug, Clone)]
pub struct CounterAnimation {
    target: u64,
    step: f64,
    current: f64,
    done: bool,
}

impl CounterAnimation {
    pub fn new(target: u64) -> Self {
        Self {
            target,
            step: target as f64 / (DURATION_MS / FRAME_MS),
            current: 0.0,
            done: false,
        }
    }

    /// Parses a `data-count` attribute the way the page does: an optional
    /// `+`, then leading integer digits, anything after them ignored.
    /// Negative counts have no animation and yield `None`.
    pub fn from_attribute(raw: &str) -> Option<Self> {
        let raw = raw.trim_start();
        let digits: String = raw
            .strip_prefix('+')
            .unwrap_or(raw)
            .chars()
            .take_while(|c| c.is_ascii_digit())
            .collect();
        digits.parse().ok().map(Self::new)
    }

    pub fn target(&self) -> u64 {
        self.target
    }
}

impl Iterator for CounterAnimation {
    type Item = String;

    fn next(&mut self) -> Option<String> {
        if self.done {
            return None;
        }
        self.current += self.step;
        if self.current < self.target as f64 {
            Some(format!("{}+", format_number(self.current.floor() as u64)))
        } else {
            self.done = true;
            Some(format!("{}+", format_number(self.target)))
        }
    }
}
