//! Command-line surface.
//!
//! The historical spelling uses single-dash long options (`-trim5 2`,
//! `-stdout`); they are rewritten to their `--` form before parsing so
//! both spellings work.

use crate::config::{InputSpec, Invocation, OutputTarget, Replacement, TransformConfig};
use crate::policy::{ErrorPolicy, KeepLength};

use clap::Parser;
use std::ffi::OsString;

/// Legacy flag spellings and the number of values each one takes.
const LEGACY_FLAGS: &[(&str, usize)] = &[
    ("-trim5", 1),
    ("-flowcellID", 1),
    ("-addEnd", 1),
    ("-replace", 2),
    ("-renameIDs", 1),
    ("-stdout", 0),
    ("-strict", 0),
];

#[derive(Parser, Debug)]
#[command(name = "trimfastq")]
#[command(
    about = "Trim FASTQ reads to a fixed length and rewrite read IDs",
    long_about = "Trim FASTQ reads to a fixed length and rewrite read IDs.\n\n\
        -trim5 removes additional bp from the 5' end: for the middle 36bp of 38bp reads use \
        36 as bpToKeep and 1 as the -trim5 argument.\n\
        Use - as the input to read standard input and -stdout to write to standard output.\n\
        Compressed inputs are read through gunzip/bzip2 when named *.gz or *.bz2."
)]
#[command(version)]
pub struct Cli {
    /// Input FASTQ file, or - for standard input
    #[arg(value_name = "INPUTFILENAME")]
    pub input: String,

    /// Bases to keep per read, or `max` to keep whole reads
    #[arg(value_name = "BP_TO_KEEP|max")]
    pub keep: KeepLength,

    /// Trim this many additional bp from the 5' end
    #[arg(long, value_name = "BP", allow_negative_numbers = true)]
    pub trim5: Option<usize>,

    /// Prefix read IDs with this flowcell ID unless already present
    #[arg(long = "flowcellID", value_name = "FLOWCELL", allow_hyphen_values = true)]
    pub flowcell_id: Option<String>,

    /// Append /<END> to read IDs
    #[arg(long = "addEnd", value_name = "1|2", allow_hyphen_values = true)]
    pub add_end: Option<String>,

    /// Replace OLD with NEW in read IDs (`blank` for the empty string)
    #[arg(
        long,
        num_args = 2,
        value_names = ["OLD", "NEW|blank"],
        allow_hyphen_values = true
    )]
    pub replace: Option<Vec<String>>,

    /// Rename reads to <PREFIX>0, <PREFIX>1, ...
    #[arg(long = "renameIDs", value_name = "PREFIX", allow_hyphen_values = true)]
    pub rename_ids: Option<String>,

    /// Write to standard output and suppress informational messages
    #[arg(long)]
    pub stdout: bool,

    /// Fail on a misplaced header or separator line instead of skipping it
    #[arg(long)]
    pub strict: bool,
}

/// Rewrites single-dash long options to the `--` form clap expects.
/// Option values are passed through untouched, even when they look like
/// a flag.
pub fn normalize_args<I, T>(args: I) -> Vec<OsString>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString>,
{
    let mut values_left = 0usize;
    args.into_iter()
        .map(|a| {
            let a: OsString = a.into();
            if values_left > 0 {
                values_left -= 1;
                return a;
            }
            let legacy = a
                .to_str()
                .and_then(|s| LEGACY_FLAGS.iter().find(|(flag, _)| *flag == s));
            match legacy {
                Some((flag, n_values)) => {
                    values_left = *n_values;
                    OsString::from(format!("-{flag}"))
                }
                None => {
                    if let Some(s) = a.to_str() {
                        values_left = LEGACY_FLAGS
                            .iter()
                            .find(|(flag, _)| s.strip_prefix('-') == Some(*flag))
                            .map_or(0, |(_, n)| *n);
                    }
                    a
                }
            }
        })
        .collect()
}

impl Cli {
    /// Parses a full argv (program name first), accepting legacy flags.
    pub fn parse_args<I, T>(args: I) -> Result<Self, clap::Error>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString>,
    {
        Cli::try_parse_from(normalize_args(args))
    }

    pub fn into_invocation(self) -> Invocation {
        let input = InputSpec::parse(&self.input);

        let replace = match self.replace.as_deref() {
            Some([old, new]) => Some(Replacement::new(old.as_str(), new.as_str())),
            _ => None,
        };
        let config = TransformConfig {
            keep: self.keep,
            trim5: self.trim5,
            flowcell_id: self.flowcell_id,
            add_end: self.add_end,
            replace,
            rename_prefix: self.rename_ids,
            error_policy: if self.strict {
                ErrorPolicy::Return
            } else {
                ErrorPolicy::Skip
            },
        };

        let output = if self.stdout {
            OutputTarget::Stdout
        } else {
            OutputTarget::File(config.output_file_name(&input))
        };

        Invocation {
            input,
            output,
            config,
        }
    }
}
