//! Writing key details to the output file

use std::fs::File;
use std::io::Write;
use std::path::Path;

use crate::error::{Error, Result};
use crate::logging::Logger;

/// Everything a run persists
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyDetails {
    pub mnemonic: String,
    pub derivation_path: String,
    /// 64 lowercase hex characters, no prefix
    pub private_key: String,
    /// `0x`-prefixed, checksum-cased
    pub address: String,
}

impl KeyDetails {
    /// Output lines in file order, each paired with the name used when
    /// reporting a failed write
    pub fn lines(&self) -> [(&'static str, String); 4] {
        [
            ("mnemonic", format!("Mnemonic: {}\n", self.mnemonic)),
            ("derivation path", format!("Derivation Path: {}\n", self.derivation_path)),
            ("private key", format!("Private Key: {}\n", self.private_key)),
            ("address", format!("Address: {}\n", self.address)),
        ]
    }
}

/// Outcome of writing the detail lines
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct WriteReport {
    pub lines_written: usize,
    pub lines_failed: usize,
}

impl WriteReport {
    pub fn is_complete(&self) -> bool {
        self.lines_failed == 0
    }
}

/// Write every line of `details` to `sink`.
///
/// A failed line is logged and skipped; the remaining lines are still written.
pub fn write_details<W: Write>(sink: &mut W, details: &KeyDetails, logger: &dyn Logger) -> WriteReport {
    let mut report = WriteReport::default();

    for (name, line) in details.lines() {
        match sink.write_all(line.as_bytes()) {
            Ok(()) => report.lines_written += 1,
            Err(e) => {
                logger.error(&format!("Failed to write {} to file: {}", name, e));
                report.lines_failed += 1;
            }
        }
    }

    report
}

/// Create or truncate `path` and write `details` into it.
///
/// Failing to create the file is fatal; failed line writes are not.
pub fn write_details_to_file(path: &Path, details: &KeyDetails, logger: &dyn Logger) -> Result<WriteReport> {
    let mut file = File::create(path).map_err(|source| {
        let error = Error::FileCreate {
            path: path.to_path_buf(),
            source,
        };
        logger.fatal(&error.to_string());
        error
    })?;

    Ok(write_details(&mut file, details, logger))
}
