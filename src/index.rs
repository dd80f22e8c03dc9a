//! Identifier allow/deny list.
//!
//! Keys are raw bytes compared byte-wise, so lookups are exact and
//! case-sensitive, and list files need not be valid UTF-8. Each key
//! remembers how many times it was listed.

use crate::error::SeqFilterError;
use crate::util::open_input;

use std::collections::BTreeMap;
use std::io::{self, BufRead};
use std::path::Path;

#[derive(Debug, Clone, Default)]
pub struct IdIndex {
    counts: BTreeMap<Vec<u8>, u32>,
}

impl IdIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from identifier lines; every line becomes a key verbatim.
    pub fn build<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<Vec<u8>>,
    {
        let mut index = Self::new();
        for line in lines {
            index.insert(line);
        }
        index
    }

    /// Read one identifier per line. Only the line terminator is removed.
    pub fn from_reader<R: BufRead>(mut reader: R) -> io::Result<Self> {
        let mut index = Self::new();
        let mut line = Vec::with_capacity(64);
        loop {
            line.clear();
            if reader.read_until(b'\n', &mut line)? == 0 {
                break;
            }
            if line.ends_with(b"\n") {
                line.pop();
                if line.ends_with(b"\r") {
                    line.pop();
                }
            }
            index.insert(line.as_slice());
        }
        log::debug!(
            "identifier index: {} keys, {} listed more than once",
            index.len(),
            index.duplicates()
        );
        Ok(index)
    }

    /// Open a list file (plain or gzipped, `-` for stdin) and index it.
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, SeqFilterError> {
        let path = path.as_ref();
        let rdr = open_input(path).map_err(|e| SeqFilterError::open_err(path, e))?;
        Self::from_reader(rdr).map_err(|e| SeqFilterError::open_err(path, e))
    }

    /// Insert `key`, or bump its count if already present. Returns the new count.
    pub fn insert<S: Into<Vec<u8>>>(&mut self, key: S) -> u32 {
        let count = self.counts.entry(key.into()).or_insert(0);
        *count += 1;
        *count
    }

    #[inline]
    pub fn contains<K: AsRef<[u8]>>(&self, key: K) -> bool {
        self.counts.contains_key(key.as_ref())
    }

    #[inline]
    pub fn count<K: AsRef<[u8]>>(&self, key: K) -> Option<u32> {
        self.counts.get(key.as_ref()).copied()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Number of keys listed more than once.
    pub fn duplicates(&self) -> usize {
        self.counts.values().filter(|&&c| c > 1).count()
    }

    /// Keys with their counts, in byte-wise key order.
    pub fn iter(&self) -> impl Iterator<Item = (&[u8], u32)> {
        self.counts.iter().map(|(k, &c)| (k.as_slice(), c))
    }
}

impl<S: Into<Vec<u8>>> FromIterator<S> for IdIndex {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self::build(iter)
    }
}
