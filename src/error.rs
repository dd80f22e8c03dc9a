use crate::record::Format;
use std::io;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Clone, Copy)]
pub struct IoContext {
    pub byte_pos: u64,
    pub line_num: u64,
}

impl IoContext {
    pub(crate) const START: IoContext = IoContext {
        byte_pos: 0,
        line_num: 0,
    };
}

#[derive(Debug, Error)]
pub enum FormatError {
    #[error("expected header '>' or '@' at start of record")]
    MissingHeader,
    #[error("record header has an empty name")]
    MissingName,
    #[error("missing '+' separator line")]
    MissingPlus,
    #[error("unexpected EOF inside record")]
    UnexpectedEof,
    #[error("quality length ({qual}) does not match sequence length ({seq})")]
    LengthMismatch { seq: usize, qual: usize },
    #[error("found {found} record where {expected} expected")]
    UnexpectedFormat { expected: Format, found: Format },
}

/// Error raised by the record reader.
#[derive(Debug, Error)]
pub enum FastxError {
    #[error("I/O error at {ctx:?}: {source}")]
    Io {
        #[source]
        source: io::Error,
        ctx: IoContext,
    },
    #[error("format error at {ctx:?}: {source}")]
    Format {
        #[source]
        source: FormatError,
        ctx: IoContext,
    },
}

impl FastxError {
    pub(crate) fn io_err(source: io::Error, ctx: IoContext) -> Self {
        Self::Io { source, ctx }
    }
    pub(crate) fn fmt_err(source: FormatError, ctx: IoContext) -> Self {
        Self::Format { source, ctx }
    }
}

/// Fatal failures of a filtering run.
#[derive(Debug, Error)]
pub enum SeqFilterError {
    #[error("failed to open {}: {source}", path.display())]
    InputOpen {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error(transparent)]
    Parse(#[from] FastxError),
    #[error("failed to write output: {0}")]
    OutputWrite(#[source] io::Error),
}

impl SeqFilterError {
    pub(crate) fn open_err(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::InputOpen {
            path: path.into(),
            source,
        }
    }
}
