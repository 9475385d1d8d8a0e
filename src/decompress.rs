use crate::error::TrimError;
use std::path::Path;
use std::process::{Child, ChildStdout, Command, Stdio};

/// Compressed input formats handed off to an external program.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Codec {
    Gzip,
    Bzip2,
}

impl Codec {
    /// Detects the codec from the file suffix (`.gz`, `.bz2`).
    pub fn from_path(path: &Path) -> Option<Self> {
        match path.extension().and_then(|s| s.to_str()) {
            Some("gz") => Some(Codec::Gzip),
            Some("bz2") => Some(Codec::Bzip2),
            _ => None,
        }
    }

    pub fn program(self) -> &'static str {
        match self {
            Codec::Gzip => "gunzip",
            Codec::Bzip2 => "bzip2",
        }
    }

    fn args(self) -> &'static [&'static str] {
        match self {
            Codec::Gzip => &["-c"],
            Codec::Bzip2 => &["-cd"],
        }
    }
}

/// A running decompression process whose stdout feeds the line source.
///
/// Dropping it before [`Decompressor::wait`] kills and reaps the child.
#[derive(Debug)]
pub struct Decompressor {
    program: &'static str,
    child: Child,
    reaped: bool,
}

impl Decompressor {
    /// Starts the decompressor for `path` and hands back its stdout.
    pub fn spawn(codec: Codec, path: &Path) -> Result<(Self, ChildStdout), TrimError> {
        let program = codec.program();
        let mut child = Command::new(program)
            .args(codec.args())
            .arg(path)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::inherit())
            .spawn()
            .map_err(|source| TrimError::Spawn { program, source })?;
        let stdout = child.stdout.take().ok_or_else(|| TrimError::Spawn {
            program,
            source: std::io::Error::other("child stdout not captured"),
        })?;
        log::debug!("started `{program}` for {}", path.display());
        Ok((
            Self {
                program,
                child,
                reaped: false,
            },
            stdout,
        ))
    }

    #[inline]
    pub fn id(&self) -> u32 {
        self.child.id()
    }

    /// Waits for the process to exit; a non-zero status is an error.
    pub fn wait(mut self) -> Result<(), TrimError> {
        let program = self.program;
        let status = self
            .child
            .wait()
            .map_err(|source| TrimError::Spawn { program, source })?;
        self.reaped = true;
        if status.success() {
            Ok(())
        } else {
            Err(TrimError::Decompress { program, status })
        }
    }
}

impl Drop for Decompressor {
    fn drop(&mut self) {
        if self.reaped {
            return;
        }
        if let Err(e) = self.child.kill() {
            log::debug!("`{}` already exited: {e}", self.program);
        }
        let _ = self.child.wait();
    }
}
