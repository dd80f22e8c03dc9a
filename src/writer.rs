use crate::record::SeqRecord;
use crate::stats::RunningStats;

use std::io::{self, Write};

/// Serializes accepted records and keeps the run totals.
pub struct RecordWriter<W: Write> {
    out: W,
    stats: RunningStats,
}

impl<W: Write> RecordWriter<W> {
    pub fn new(out: W) -> Self {
        Self {
            out,
            stats: RunningStats::default(),
        }
    }

    /// FASTQ four-line form when quality is present and non-empty, FASTA
    /// two-line form otherwise. The description is dropped.
    pub fn emit(&mut self, rec: &SeqRecord) -> io::Result<()> {
        match rec.qual.as_deref() {
            Some(qual) if !qual.is_empty() => {
                self.out.write_all(b"@")?;
                self.out.write_all(&rec.id)?;
                self.out.write_all(b"\n")?;
                self.out.write_all(&rec.seq)?;
                self.out.write_all(b"\n+\n")?;
                self.out.write_all(qual)?;
                self.out.write_all(b"\n")?;
            }
            _ => {
                self.out.write_all(b">")?;
                self.out.write_all(&rec.id)?;
                self.out.write_all(b"\n")?;
                self.out.write_all(&rec.seq)?;
                self.out.write_all(b"\n")?;
            }
        }
        self.stats.observe(rec.len());
        Ok(())
    }

    pub fn stats(&self) -> &RunningStats {
        &self.stats
    }

    /// Flush and hand back the sink together with the final totals.
    pub fn finish(mut self) -> io::Result<(W, RunningStats)> {
        self.out.flush()?;
        Ok((self.out, self.stats))
    }
}
