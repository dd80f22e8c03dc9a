use crate::index::IdIndex;
use crate::record::SeqRecord;

/// Length bounds and selection mode. A bound of 0 means unbounded.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FilterConfig {
    pub min_len: usize,
    pub max_len: usize,
    /// Keep records whose id is *not* listed.
    pub negate: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decision {
    Include,
    Exclude,
}

impl FilterConfig {
    /// Length bounds are checked first and exclude regardless of the list.
    /// With an empty index nothing is listed, so positive mode keeps nothing
    /// and negate mode keeps every record within the bounds.
    pub fn decide(&self, record: &SeqRecord, index: &IdIndex) -> Decision {
        let len = record.len();
        if self.min_len > 0 && len < self.min_len {
            return Decision::Exclude;
        }
        if self.max_len > 0 && len > self.max_len {
            return Decision::Exclude;
        }
        if index.contains(&record.id) != self.negate {
            Decision::Include
        } else {
            Decision::Exclude
        }
    }
}

#[inline]
pub fn decide(record: &SeqRecord, index: &IdIndex, config: &FilterConfig) -> Decision {
    config.decide(record, index)
}
