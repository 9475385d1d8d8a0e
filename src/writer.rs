use crate::config::OutputTarget;
use crate::error::TrimError;
use crate::record::FastqRecord;

use std::fs::File;
use std::io::{self, BufWriter, Write};

/// Buffered FASTQ sink.
pub struct RecordWriter<W: Write> {
    inner: BufWriter<W>,
}

impl RecordWriter<Box<dyn Write>> {
    /// Opens the configured sink. A file target is created or truncated.
    pub fn open(target: &OutputTarget) -> Result<Self, TrimError> {
        let w: Box<dyn Write> = match target {
            OutputTarget::Stdout => Box::new(io::stdout().lock()),
            OutputTarget::File(path) => {
                let f = File::create(path).map_err(|source| TrimError::Create {
                    path: path.clone(),
                    source,
                })?;
                log::info!("writing to {}", path.display());
                Box::new(f)
            }
        };
        Ok(Self::new(w))
    }
}

impl<W: Write> RecordWriter<W> {
    pub fn new(w: W) -> Self {
        Self {
            inner: BufWriter::with_capacity(256 * 1024, w),
        }
    }

    pub fn write_record(&mut self, rec: &FastqRecord) -> Result<(), TrimError> {
        rec.write_to(&mut self.inner).map_err(TrimError::Write)
    }

    /// Flushes and returns the underlying writer.
    pub fn finish(self) -> Result<W, TrimError> {
        self.inner
            .into_inner()
            .map_err(|e| TrimError::Write(e.into_error()))
    }
}
