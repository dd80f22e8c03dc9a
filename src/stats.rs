use std::fmt;

/// Totals over emitted records.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunningStats {
    pub records: u64,
    pub total_bases: u64,
    /// `None` until the first record is observed.
    pub min_len: Option<usize>,
    pub max_len: Option<usize>,
}

impl RunningStats {
    pub fn observe(&mut self, len: usize) {
        self.records += 1;
        self.total_bases += len as u64;
        self.min_len = Some(self.min_len.map_or(len, |m| m.min(len)));
        self.max_len = Some(self.max_len.map_or(len, |m| m.max(len)));
    }
}

/// The end-of-run report; unset bounds print as 0.
impl fmt::Display for RunningStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "After Filtering:")?;
        writeln!(f, "Total n:\t{}", self.records)?;
        writeln!(f, "Total seq:\t{} bp", self.total_bases)?;
        writeln!(f, "Min seq:\t{} bp", self.min_len.unwrap_or(0))?;
        writeln!(f, "Max seq:\t{} bp", self.max_len.unwrap_or(0))
    }
}
