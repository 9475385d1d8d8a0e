use crate::policy::{ErrorPolicy, KeepLength, LengthPolicy};
use std::path::PathBuf;

/// Where reads come from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputSpec {
    Stdin,
    Path(PathBuf),
}

impl InputSpec {
    /// `-` means standard input, anything else is a path.
    pub fn parse(arg: &str) -> Self {
        if arg == "-" {
            InputSpec::Stdin
        } else {
            InputSpec::Path(PathBuf::from(arg))
        }
    }

    /// File name with its directory and everything from `.fastq` on removed.
    pub fn base_name(&self) -> String {
        match self {
            InputSpec::Stdin => "stdin".to_string(),
            InputSpec::Path(p) => {
                let name = p
                    .file_name()
                    .map(|n| n.to_string_lossy().into_owned())
                    .unwrap_or_default();
                match name.find(".fastq") {
                    Some(i) => name[..i].to_string(),
                    None => name,
                }
            }
        }
    }
}

/// Where transformed reads go. Chosen once at startup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OutputTarget {
    Stdout,
    File(PathBuf),
}

/// Substring replacement applied to read headers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Replacement {
    pub old: String,
    pub new: String,
}

impl Replacement {
    /// The literal `blank` stands for the empty string.
    pub fn new(old: impl Into<String>, new: impl Into<String>) -> Self {
        let new = new.into();
        Self {
            old: old.into(),
            new: if new == "blank" { String::new() } else { new },
        }
    }
}

/// Per-run transform options, resolved before streaming starts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransformConfig {
    pub keep: KeepLength,
    pub trim5: Option<usize>,
    pub flowcell_id: Option<String>,
    pub add_end: Option<String>,
    pub replace: Option<Replacement>,
    pub rename_prefix: Option<String>,
    pub error_policy: ErrorPolicy,
}

impl TransformConfig {
    pub fn new(keep: KeepLength) -> Self {
        Self {
            keep,
            trim5: None,
            flowcell_id: None,
            add_end: None,
            replace: None,
            rename_prefix: None,
            error_policy: ErrorPolicy::default(),
        }
    }

    pub fn length_policy(&self) -> LengthPolicy {
        match self.keep {
            KeepLength::Max => LengthPolicy::Max,
            KeepLength::Bases(keep) => LengthPolicy::Fixed {
                keep,
                count_short: self.trim5.is_none(),
            },
        }
    }

    /// Output file name derived from the input and the trim mode,
    /// e.g. `reads.36mers.fastq` or `reads.36bp-5prim-trim.fastq`.
    pub fn output_file_name(&self, input: &InputSpec) -> PathBuf {
        let base = input.base_name();
        let name = if self.trim5.is_some() {
            format!("{base}.{}bp-5prim-trim.fastq", self.keep)
        } else {
            format!("{base}.{}mers.fastq", self.keep)
        };
        PathBuf::from(name)
    }

    /// Logs the active header edits and 5' trim, once at startup.
    pub fn announce(&self) {
        if let Some(fc) = &self.flowcell_id {
            log::info!("will include flowcell ID {fc} in reads headers");
        }
        if let Some(bp) = self.trim5 {
            log::info!("will trim {bp} bp from the 5'-end");
        }
        if let Some(end) = &self.add_end {
            log::info!("will add /{end} to read IDs");
        }
        if let Some(r) = &self.replace {
            log::info!("will replace {} with {} in read IDs", r.old, r.new);
        }
        if let Some(prefix) = &self.rename_prefix {
            log::info!("will rename read IDs to {prefix}<n>");
        }
    }
}

/// A fully resolved run: input, output and transforms.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    pub input: InputSpec,
    pub output: OutputTarget,
    pub config: TransformConfig,
}
