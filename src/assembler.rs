use crate::error::{FormatError, IoContext, TrimError};
use crate::policy::ErrorPolicy;
use crate::record::FastqRecord;
use crate::util::skip_chars;

use std::mem;

/// Position in the four-line record cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum State {
    #[default]
    AwaitHeader,
    AwaitSequence,
    AwaitSeparator,
    AwaitQuality,
}

/// Groups raw lines into records by position.
///
/// Only the header (`@`) and separator (`+`) lines are checked. A line
/// that fails the check is skipped under [`ErrorPolicy::Skip`] and the
/// assembler keeps waiting for the expected line; under
/// [`ErrorPolicy::Return`] it is reported as a format error.
///
/// When `trim5` is non-zero that many leading characters are dropped from
/// both the sequence and the quality line.
#[derive(Debug)]
pub struct RecordAssembler {
    state: State,
    trim5: usize,
    policy: ErrorPolicy,
    pending: FastqRecord,
}

impl RecordAssembler {
    pub fn new(trim5: usize, policy: ErrorPolicy) -> Self {
        Self {
            state: State::AwaitHeader,
            trim5,
            policy,
            pending: FastqRecord::default(),
        }
    }

    #[inline]
    pub fn state(&self) -> State {
        self.state
    }

    /// Feeds one line; yields a record when its quality line arrives.
    pub fn push_line(
        &mut self,
        line: &str,
        ctx: IoContext,
    ) -> Result<Option<FastqRecord>, TrimError> {
        match self.state {
            State::AwaitHeader => {
                if line.starts_with('@') {
                    self.pending.header.clear();
                    self.pending.header.push_str(line);
                    self.state = State::AwaitSequence;
                } else {
                    self.reject(FormatError::MissingHeader, ctx)?;
                }
            }
            State::AwaitSequence => {
                self.pending.seq = skip_chars(line, self.trim5).trim_end().to_string();
                self.state = State::AwaitSeparator;
            }
            State::AwaitSeparator => {
                if line.starts_with('+') {
                    self.state = State::AwaitQuality;
                } else {
                    self.reject(FormatError::MissingPlus, ctx)?;
                }
            }
            State::AwaitQuality => {
                self.pending.qual = skip_chars(line, self.trim5).trim_end().to_string();
                self.state = State::AwaitHeader;
                return Ok(Some(mem::take(&mut self.pending)));
            }
        }
        Ok(None)
    }

    fn reject(&self, err: FormatError, ctx: IoContext) -> Result<(), TrimError> {
        match self.policy {
            ErrorPolicy::Skip => {
                log::warn!("skipping line {}: {err}", ctx.line_num);
                Ok(())
            }
            ErrorPolicy::Return => Err(TrimError::fmt_err(err, ctx)),
        }
    }
}
