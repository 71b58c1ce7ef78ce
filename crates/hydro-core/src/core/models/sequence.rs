#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SequenceRecord {
    title: String,    // Full header line without the leading '>'
    sequence: String, // Residue letters, whitespace removed
}

impl SequenceRecord {
    pub fn new(title: impl Into<String>, sequence: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            sequence: sequence.into(),
        }
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn sequence(&self) -> &str {
        &self.sequence
    }

    /// The first whitespace-delimited token of the title, used as the record identifier.
    pub fn record_id(&self) -> &str {
        self.title.split_whitespace().next().unwrap_or("")
    }

    pub fn len(&self) -> usize {
        self.sequence.chars().count()
    }

    pub fn is_empty(&self) -> bool {
        self.sequence.is_empty()
    }
}
