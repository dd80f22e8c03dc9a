//! Streaming FASTA/FASTQ filter.
//!
//! - Plain and `.gz` input (auto-detect), `.gz` output by extension.
//! - Record-by-record parsing of FASTA and FASTQ, multi-line sequence and quality.
//! - Keep or drop records by an identifier list and by sequence length bounds.
//! - Count, total bases and min/max length over the kept records.
//! - Optional `mmap` for plain files; `zlib` feature for system-zlib parity.

pub mod error;
pub mod filter;
pub mod index;
pub mod pipeline;
pub mod policy;
pub mod reader;
pub mod record;
pub mod stats;
mod util;
pub mod writer;

pub use crate::error::{FastxError, FormatError, IoContext, SeqFilterError};
pub use crate::filter::{Decision, FilterConfig, decide};
pub use crate::index::IdIndex;
pub use crate::pipeline::{RunConfig, filter_to, run};
pub use crate::policy::{ErrorPolicy, FormatPolicy, ReaderOptions};
pub use crate::reader::{FastxReader, Source};
pub use crate::record::{Format, SeqRecord};
pub use crate::stats::RunningStats;
pub use crate::writer::RecordWriter;
