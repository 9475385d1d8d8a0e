use crate::assembler::{RecordAssembler, State};
use crate::config::{Invocation, TransformConfig};
use crate::error::TrimError;
use crate::header::HeaderRewriter;
use crate::policy::LengthPolicy;
use crate::record::FastqRecord;
use crate::source::LineSource;
use crate::writer::RecordWriter;

use std::io::Write;

/// Records between two progress lines.
pub const PROGRESS_INTERVAL: u64 = 5_000_000;

/// Counters for one run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunState {
    /// Records emitted so far; also the next rename index.
    pub records: u64,
    /// Reads shorter than the requested fixed length.
    pub too_short: u64,
}

/// Streams records from a [`LineSource`] through the transforms into a
/// [`RecordWriter`], one record at a time, in input order.
#[derive(Debug)]
pub struct Trimmer {
    assembler: RecordAssembler,
    headers: HeaderRewriter,
    length: LengthPolicy,
    state: RunState,
}

impl Trimmer {
    pub fn new(config: &TransformConfig) -> Self {
        Self {
            assembler: RecordAssembler::new(config.trim5.unwrap_or(0), config.error_policy),
            headers: HeaderRewriter::new(config),
            length: config.length_policy(),
            state: RunState::default(),
        }
    }

    /// Applies header edits, length trim and `.`→`N` to one record.
    pub fn transform(&mut self, mut rec: FastqRecord) -> FastqRecord {
        rec.header = self.headers.rewrite(&rec.header, self.state.records);
        if self.length.apply(&mut rec) {
            self.state.too_short += 1;
        }
        rec.mask_ambiguous();

        self.state.records += 1;
        if self.state.records % PROGRESS_INTERVAL == 0 {
            log::info!("{}M reads processed", self.state.records / 1_000_000);
        }
        rec
    }

    /// Consumes `source` to exhaustion. A trailing incomplete record is
    /// dropped.
    pub fn run<W: Write>(
        &mut self,
        mut source: LineSource,
        sink: &mut RecordWriter<W>,
    ) -> Result<RunState, TrimError> {
        let mut line = String::with_capacity(256);
        while source.read_line(&mut line)? {
            if let Some(rec) = self.assembler.push_line(&line, source.ctx())? {
                let rec = self.transform(rec);
                sink.write_record(&rec)?;
            }
        }
        if self.assembler.state() != State::AwaitHeader {
            log::debug!(
                "dropping incomplete record at end of input (line {})",
                source.ctx().line_num
            );
        }
        source.finish()?;
        Ok(self.state)
    }
}

/// Runs a whole invocation: open input, open output, stream, report.
pub fn run(inv: &Invocation) -> Result<RunState, TrimError> {
    inv.config.announce();

    let source = LineSource::open(&inv.input)?;
    let mut sink = RecordWriter::open(&inv.output)?;
    let mut trimmer = Trimmer::new(&inv.config);
    let state = trimmer.run(source, &mut sink)?;
    sink.finish()?;

    if state.too_short > 0 {
        log::info!("{} sequences shorter than desired length", state.too_short);
    }
    Ok(state)
}
