//! Streaming FASTQ trimmer.
//!
//! - Plain files, stdin, and `.gz`/`.bz2` via external `gunzip`/`bzip2`.
//! - Record-by-record streaming: one in-flight record, input order kept.
//! - Fixed-length or whole-read output, optional 5' trim.
//! - Read ID edits: flowcell tag, substring replacement, sequential
//!   rename, paired-end `/1` `/2` suffix.

pub mod assembler;
pub mod cli;
pub mod config;
pub mod decompress;
pub mod error;
pub mod header;
pub mod policy;
pub mod record;
pub mod source;
pub mod trimmer;
pub mod writer;
mod util;

pub use crate::assembler::{RecordAssembler, State};
pub use crate::cli::Cli;
pub use crate::config::{InputSpec, Invocation, OutputTarget, Replacement, TransformConfig};
pub use crate::decompress::{Codec, Decompressor};
pub use crate::error::{FormatError, IoContext, TrimError};
pub use crate::header::HeaderRewriter;
pub use crate::policy::{ErrorPolicy, KeepLength, LengthPolicy};
pub use crate::record::FastqRecord;
pub use crate::source::LineSource;
pub use crate::trimmer::{RunState, Trimmer, run};
pub use crate::writer::RecordWriter;
