//! JSON Lines record sink

use crate::extract::AnimalRecord;
use crate::output::traits::{OutputResult, RecordSink};
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;
use std::sync::Mutex;

/// Writes one JSON object per record, newline-delimited.
///
/// Lines are flushed as they are written so a partially completed crawl
/// still leaves usable output behind.
pub struct JsonLinesSink {
    writer: Mutex<BufWriter<Box<dyn Write + Send>>>,
}

impl JsonLinesSink {
    /// Creates a sink writing to the given file, truncating any existing one.
    pub fn create(path: &Path) -> io::Result<Self> {
        let file = File::create(path)?;
        Ok(Self::from_writer(Box::new(file)))
    }

    /// Creates a sink writing to stdout.
    pub fn stdout() -> Self {
        Self::from_writer(Box::new(io::stdout()))
    }

    fn from_writer(writer: Box<dyn Write + Send>) -> Self {
        Self {
            writer: Mutex::new(BufWriter::new(writer)),
        }
    }
}

impl RecordSink for JsonLinesSink {
    fn emit(&self, record: &AnimalRecord) -> OutputResult<()> {
        let line = serde_json::to_string(record)?;

        let mut writer = self.writer.lock().unwrap();
        writeln!(writer, "{}", line)?;
        writer.flush()?;

        Ok(())
    }
}
