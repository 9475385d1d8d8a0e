use crate::config::{Replacement, TransformConfig};
use crate::util::skip_chars;

/// Applies the configured read-ID edits, in order: spaces to underscores,
/// flowcell tag, substring replacement, sequential rename, end suffix.
#[derive(Debug, Clone)]
pub struct HeaderRewriter {
    flowcell_id: Option<String>,
    replace: Option<Replacement>,
    rename_prefix: Option<String>,
    add_end: Option<String>,
}

impl HeaderRewriter {
    pub fn new(config: &TransformConfig) -> Self {
        Self {
            flowcell_id: config.flowcell_id.clone(),
            replace: config.replace.clone(),
            rename_prefix: config.rename_prefix.clone(),
            add_end: config.add_end.clone(),
        }
    }

    /// Rewrites `raw` (an `@` line without its newline). `index` is the
    /// zero-based position of the record in the run.
    pub fn rewrite(&self, raw: &str, index: u64) -> String {
        let mut id = raw.replace(' ', "_");

        if let Some(fc) = &self.flowcell_id {
            // Presence is checked against the untouched line.
            if !raw.contains(fc.as_str()) {
                id = format!("@{fc}_{}", skip_chars(&id, 1));
            }
        }
        if let Some(r) = &self.replace {
            id = id.replace(&r.old, &r.new);
        }
        if let Some(prefix) = &self.rename_prefix {
            id = format!("@{prefix}{index}");
        }
        if let Some(end) = &self.add_end {
            id = format!("{}/{end}", id.trim());
        }

        id.trim().to_string()
    }
}
