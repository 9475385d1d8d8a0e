use std::io::{self, Write};

/// One FASTQ record. The separator is implicit and always written as `+`.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FastqRecord {
    pub header: String,
    pub seq: String,
    pub qual: String,
}

impl FastqRecord {
    /// Replaces ambiguous `.` base calls with `N`.
    pub fn mask_ambiguous(&mut self) {
        if self.seq.contains('.') {
            self.seq = self.seq.replace('.', "N");
        }
    }

    /// Serializes the record as four newline-terminated lines.
    pub fn write_to<W: Write + ?Sized>(&self, w: &mut W) -> io::Result<()> {
        w.write_all(self.header.as_bytes())?;
        w.write_all(b"\n")?;
        w.write_all(self.seq.as_bytes())?;
        w.write_all(b"\n+\n")?;
        w.write_all(self.qual.as_bytes())?;
        w.write_all(b"\n")
    }
}
