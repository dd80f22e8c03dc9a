use crate::record::Format;

/// What the reader does with a malformed record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorPolicy {
    /// Skip malformed records and continue at the next header.
    Skip,
    /// Return the first error to the caller (strict).
    Return,
}

/// Which record grammars the reader accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormatPolicy {
    /// Detect per record from the header marker.
    Auto,
    FastaOnly,
    FastqOnly,
}

impl FormatPolicy {
    pub(crate) fn expected(self) -> Option<Format> {
        match self {
            FormatPolicy::Auto => None,
            FormatPolicy::FastaOnly => Some(Format::Fasta),
            FormatPolicy::FastqOnly => Some(Format::Fastq),
        }
    }
}

#[derive(Debug, Clone)]
pub struct ReaderOptions {
    pub error_policy: ErrorPolicy,
    pub format: FormatPolicy,
}

impl Default for ReaderOptions {
    fn default() -> Self {
        Self {
            error_policy: ErrorPolicy::Return, // malformed input aborts a filtering run
            format: FormatPolicy::Auto,
        }
    }
}
