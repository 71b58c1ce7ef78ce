use crate::core::models::sequence::SequenceRecord;
use std::error::Error;
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;

/// Defines the interface for reading sequence file formats.
///
/// Implementors handle format-specific parsing; the provided methods take care
/// of opening files and wrapping standard input in a buffered reader.
pub trait SequenceFile {
    /// The error type for read operations.
    type Error: Error + From<io::Error>;

    /// Reads a sequence record from a buffered reader.
    ///
    /// # Arguments
    ///
    /// * `reader` - The buffered reader to read from.
    ///
    /// # Return
    ///
    /// Returns the first sequence record found in the input.
    ///
    /// # Errors
    ///
    /// Returns an error if parsing fails or I/O operations encounter issues.
    fn read_from(reader: &mut impl BufRead) -> Result<SequenceRecord, Self::Error>;

    /// Reads a sequence record from a file path.
    ///
    /// # Arguments
    ///
    /// * `path` - The path to the file to read.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be opened or parsing fails.
    fn read_from_path<P: AsRef<Path>>(path: P) -> Result<SequenceRecord, Self::Error> {
        let file = File::open(path)?;
        let mut reader = BufReader::new(file);
        Self::read_from(&mut reader)
    }

    /// Reads a sequence record from standard input.
    ///
    /// # Errors
    ///
    /// Returns an error if reading from stdin fails or parsing fails.
    fn read_from_stdin() -> Result<SequenceRecord, Self::Error> {
        let stdin = io::stdin();
        let mut reader = stdin.lock();
        Self::read_from(&mut reader)
    }
}
