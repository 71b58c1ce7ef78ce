use serde::Deserialize;
use tracing::debug;

/// A residue interval shaded behind the profile curves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct HighlightSpan {
    pub start: i64,
    pub end: i64,
}

impl HighlightSpan {
    pub fn new(start: i64, end: i64) -> Self {
        Self { start, end }
    }

    /// A span is drawn only if it starts at a positive residue and ends after its start.
    pub fn is_drawable(&self) -> bool {
        self.start > 0 && self.end > self.start
    }
}

impl From<(i64, i64)> for HighlightSpan {
    fn from((start, end): (i64, i64)) -> Self {
        Self::new(start, end)
    }
}

/// Keeps the drawable spans in their original order.
pub fn drawable_spans<I>(spans: I) -> Vec<HighlightSpan>
where
    I: IntoIterator<Item = HighlightSpan>,
{
    spans
        .into_iter()
        .filter(|span| {
            let keep = span.is_drawable();
            if !keep {
                debug!(
                    "Skipping highlight span ({}, {}): start must be positive and end must exceed start.",
                    span.start, span.end
                );
            }
            keep
        })
        .collect()
}
