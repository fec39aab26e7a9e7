use serde::{Deserialize, Serialize};

/// Characters per line before a site label wraps.
pub const LABEL_WRAP_WIDTH: usize = 12;

/// An x-axis label, possibly wrapped onto several lines.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AxisLabel {
    Single(String),
    Lines(Vec<String>),
}

impl AxisLabel {
    pub fn lines(&self) -> Vec<&str> {
        match self {
            AxisLabel::Single(s) => vec![s.as_str()],
            AxisLabel::Lines(lines) => lines.iter().map(String::as_str).collect(),
        }
    }

    /// The label on one line, for tooltips.
    pub fn joined(&self) -> String {
        self.lines().join(" ")
    }
}

/// Greedy word wrap at `width` characters per line.
///
/// Words are never split, so a single word longer than `width` sits alone
/// on its line. Returns [`AxisLabel::Single`] when everything fits.
pub fn wrap_label(text: &str, width: usize) -> AxisLabel {
    let lines = text
        .split_whitespace()
        .fold(Vec::<String>::new(), |mut lines, word| {
            match lines.last_mut() {
                Some(line) if line.chars().count() + 1 + word.chars().count() <= width => {
                    line.push(' ');
                    line.push_str(word);
                }
                _ => lines.push(word.to_string()),
            }
            lines
        });

    match lines.len() {
        0 => AxisLabel::Single(text.to_string()),
        1 => AxisLabel::Single(lines.into_iter().next().unwrap_or_default()),
        _ => AxisLabel::Lines(lines),
    }
}
