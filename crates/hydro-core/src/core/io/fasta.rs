use crate::core::io::traits::SequenceFile;
use crate::core::models::sequence::SequenceRecord;
use std::io::{self, BufRead};
use thiserror::Error;
use tracing::{debug, trace};

const HEADER_MARKER: char = '>';
const STOP_MARKER: char = '*';

#[derive(Debug, Error)]
pub enum FastaError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
    #[error("Parse error on line {line}: expected a header line starting with '>'")]
    MissingHeader { line: usize },
    #[error("Input contains no sequence record")]
    EmptyInput,
    #[error("Record '{title}' has no residues")]
    EmptySequence { title: String },
}

pub struct FastaFile;

impl SequenceFile for FastaFile {
    type Error = FastaError;

    fn read_from(reader: &mut impl BufRead) -> Result<SequenceRecord, Self::Error> {
        let mut title: Option<String> = None;
        let mut sequence = String::new();

        for (line_num, line_res) in reader.lines().enumerate() {
            let line = line_res?;
            let line_num = line_num + 1;
            let trimmed = line.trim();

            if title.is_none() {
                if trimmed.is_empty() {
                    continue;
                }
                let Some(header) = trimmed.strip_prefix(HEADER_MARKER) else {
                    return Err(FastaError::MissingHeader { line: line_num });
                };
                trace!("Found FASTA header on line {}", line_num);
                title = Some(header.trim().to_string());
                continue;
            }

            if trimmed.starts_with(HEADER_MARKER) {
                debug!(
                    "Stopping at second record header on line {}; only the first record is read.",
                    line_num
                );
                break;
            }
            sequence.extend(trimmed.chars().filter(|c| !c.is_whitespace()));
        }

        let title = title.ok_or(FastaError::EmptyInput)?;
        if sequence.ends_with(STOP_MARKER) {
            sequence.pop();
        }
        if sequence.is_empty() {
            return Err(FastaError::EmptySequence { title });
        }

        debug!(
            "Parsed FASTA record '{}' with {} residues.",
            title,
            sequence.len()
        );
        Ok(SequenceRecord::new(title, sequence))
    }
}
