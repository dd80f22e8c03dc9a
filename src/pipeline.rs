//! End-to-end run: build the index, stream records through the filter,
//! write what is kept and return the totals.

use crate::error::{FastxError, SeqFilterError};
use crate::filter::{Decision, FilterConfig};
use crate::index::IdIndex;
use crate::policy::ReaderOptions;
use crate::reader::{FastxReader, Source};
use crate::record::SeqRecord;
use crate::stats::RunningStats;
use crate::util::{Sink, open_input};
use crate::writer::RecordWriter;

use std::io::Write;
use std::path::PathBuf;

#[derive(Debug, Clone)]
pub struct RunConfig {
    pub input: PathBuf,
    pub output: PathBuf,
    pub id_list: Option<PathBuf>,
    pub filter: FilterConfig,
    pub reader: ReaderOptions,
}

/// Stream `records` through `config`, writing kept records to `out`.
/// The first reader or write error aborts the run.
pub fn filter_to<I, W>(
    records: I,
    index: &IdIndex,
    config: &FilterConfig,
    out: W,
) -> Result<(W, RunningStats), SeqFilterError>
where
    I: IntoIterator<Item = Result<SeqRecord, FastxError>>,
    W: Write,
{
    let mut writer = RecordWriter::new(out);
    let mut seen = 0u64;
    for rec in records {
        let rec = rec?;
        seen += 1;
        if config.decide(&rec, index) == Decision::Include {
            writer.emit(&rec).map_err(SeqFilterError::OutputWrite)?;
        }
    }
    let (out, stats) = writer.finish().map_err(SeqFilterError::OutputWrite)?;
    log::info!(
        "kept {} of {} records ({} bp)",
        stats.records,
        seen,
        stats.total_bases
    );
    Ok((out, stats))
}

/// Run a full filtering job from paths.
pub fn run(cfg: &RunConfig) -> Result<RunningStats, SeqFilterError> {
    let index = match &cfg.id_list {
        Some(path) => IdIndex::from_path(path)?,
        None => IdIndex::new(),
    };
    if index.is_empty() && !cfg.filter.negate {
        log::warn!("identifier list is empty and negate is off; no record can be kept");
    }

    let rdr = open_input(&cfg.input).map_err(|e| SeqFilterError::open_err(&cfg.input, e))?;
    let reader = FastxReader::with_source(
        Source::Path(cfg.input.clone()),
        rdr,
        cfg.reader.clone(),
    );

    let sink = Sink::create(&cfg.output).map_err(SeqFilterError::OutputWrite)?;
    let (sink, stats) = filter_to(reader, &index, &cfg.filter, sink)?;
    sink.finish().map_err(SeqFilterError::OutputWrite)?;
    Ok(stats)
}
