use std::borrow::Cow;
use std::fmt;

/// Grammar a record was parsed from, chosen by its header marker.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    /// `>` header, sequence lines only.
    Fasta,
    /// `@` header, sequence lines, `+` separator, quality lines.
    Fastq,
}

impl Format {
    #[inline]
    pub fn from_marker(b: u8) -> Option<Self> {
        match b {
            b'>' => Some(Format::Fasta),
            b'@' => Some(Format::Fastq),
            _ => None,
        }
    }
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Format::Fasta => f.write_str("FASTA"),
            Format::Fastq => f.write_str("FASTQ"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeqRecord {
    /// Header bytes up to the first ASCII whitespace, kept verbatim.
    pub id: Vec<u8>,
    /// Rest of the header, decoded lossily; informational only.
    pub desc: Option<String>,
    pub seq: Vec<u8>,
    /// `Some` only for FASTQ input.
    pub qual: Option<Vec<u8>>,
}

impl SeqRecord {
    #[inline]
    pub fn format(&self) -> Format {
        if self.qual.is_some() {
            Format::Fastq
        } else {
            Format::Fasta
        }
    }
    #[inline]
    pub fn id_str(&self) -> Cow<'_, str> {
        String::from_utf8_lossy(&self.id)
    }
    #[inline]
    pub fn len(&self) -> usize {
        self.seq.len()
    }
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.seq.is_empty()
    }
}
