use crate::record::FastqRecord;
use crate::util::truncate_chars;
use std::fmt;
use std::str::FromStr;

/// How to react to a header or separator line in the wrong place.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ErrorPolicy {
    /// Skip the offending line and keep waiting for the expected one.
    #[default]
    Skip,
    /// Return the first structural error to the caller (strict).
    Return,
}

/// Requested read length: a fixed number of bases or the whole read.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeepLength {
    Bases(usize),
    Max,
}

impl fmt::Display for KeepLength {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            KeepLength::Bases(n) => write!(f, "{n}"),
            KeepLength::Max => f.write_str("max"),
        }
    }
}

impl FromStr for KeepLength {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s == "max" {
            return Ok(KeepLength::Max);
        }
        s.parse::<usize>()
            .map(KeepLength::Bases)
            .map_err(|_| format!("bpToKeep must be an integer or 'max', got '{s}'"))
    }
}

/// Length-trim strategy, chosen once per run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LengthPolicy {
    /// Sequence and quality pass through untouched.
    Max,
    /// Keep the first `keep` characters of sequence and quality.
    ///
    /// With `count_short`, a sequence shorter than `keep` is kept whole and
    /// reported as too short. Without it (5'-trim runs) both fields are
    /// simply truncated.
    Fixed { keep: usize, count_short: bool },
}

impl LengthPolicy {
    /// Trims `rec` in place; returns `true` if the read counts as too short.
    pub fn apply(&self, rec: &mut FastqRecord) -> bool {
        match *self {
            LengthPolicy::Max => false,
            LengthPolicy::Fixed { keep, count_short } => {
                let short = count_short && rec.seq.chars().count() < keep;
                truncate_chars(&mut rec.seq, keep);
                truncate_chars(&mut rec.qual, keep);
                short
            }
        }
    }
}
