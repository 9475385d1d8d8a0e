use crate::config::InputSpec;
use crate::decompress::{Codec, Decompressor};
use crate::error::{IoContext, TrimError};

use std::fs::File;
use std::io::{self, BufRead, BufReader};

const BUF_CAPACITY: usize = 256 * 1024;

/// Ordered, newline-stripped lines from a file, stdin or a decompressor.
pub struct LineSource {
    rdr: Box<dyn BufRead>,
    decompressor: Option<Decompressor>,
    line_num: u64,
    byte_pos: u64,
}

impl LineSource {
    /// Opens the input. `.gz`/`.bz2` paths are piped through an external
    /// decompressor; the path itself must be readable either way.
    pub fn open(input: &InputSpec) -> Result<Self, TrimError> {
        let path = match input {
            InputSpec::Stdin => return Ok(Self::from_bufread(io::stdin().lock())),
            InputSpec::Path(path) => path,
        };

        let f = File::open(path).map_err(|source| TrimError::Open {
            path: path.clone(),
            source,
        })?;

        match Codec::from_path(path) {
            Some(codec) => {
                drop(f);
                let (decompressor, stdout) = Decompressor::spawn(codec, path)?;
                let mut src = Self::from_bufread(BufReader::with_capacity(BUF_CAPACITY, stdout));
                src.decompressor = Some(decompressor);
                Ok(src)
            }
            None => Ok(Self::from_bufread(BufReader::with_capacity(BUF_CAPACITY, f))),
        }
    }

    /// Wrap an arbitrary `BufRead` (stdin, in-memory data, etc.).
    pub fn from_bufread<R: BufRead + 'static>(reader: R) -> Self {
        Self {
            rdr: Box::new(reader),
            decompressor: None,
            line_num: 0,
            byte_pos: 0,
        }
    }

    /// Reads the next line into `buf` without its line terminator.
    /// Returns `false` once the input is exhausted.
    pub fn read_line(&mut self, buf: &mut String) -> Result<bool, TrimError> {
        buf.clear();
        let n = self
            .rdr
            .read_line(buf)
            .map_err(|e| TrimError::io_err(e, self.ctx()))?;
        if n == 0 {
            return Ok(false);
        }
        self.line_num += 1;
        self.byte_pos += n as u64;
        if buf.ends_with('\n') {
            buf.pop();
        }
        if buf.ends_with('\r') {
            buf.pop();
        }
        Ok(true)
    }

    /// Releases the input; reports a decompressor that exited with failure.
    pub fn finish(self) -> Result<(), TrimError> {
        match self.decompressor {
            Some(d) => d.wait(),
            None => Ok(()),
        }
    }

    #[inline]
    pub fn ctx(&self) -> IoContext {
        IoContext {
            byte_pos: self.byte_pos,
            line_num: self.line_num,
        }
    }
}
