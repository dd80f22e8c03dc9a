use crate::error::{FastxError, FormatError, IoContext};
use crate::policy::{ErrorPolicy, ReaderOptions};
use crate::record::{Format, SeqRecord};
use crate::util::{decode_stream, open_input};

use std::io::{self, BufRead, BufReader, Read};
use std::path::{Path, PathBuf};

#[derive(Debug)]
pub enum Source {
    Path(PathBuf),
    Reader,
}

/// Sync FASTA/FASTQ reader (plain/.gz), streaming.
///
/// The grammar is picked per record from the header marker: `>` starts a
/// FASTA record, `@` a FASTQ record. Sequence and quality may both span
/// several lines.
pub struct FastxReader {
    src: Source,
    rdr: Box<dyn BufRead + Send>,
    opts: ReaderOptions,
    line_num: u64,
    byte_pos: u64,
    // Header line of the next record, already consumed while reading the
    // previous FASTA body or while resyncing after a skip.
    pending_header: Option<Vec<u8>>,
}

impl FastxReader {
    /// Open from a file path (`-` is stdin). Auto-detect `.gz` by extension or magic bytes.
    pub fn from_path<P: AsRef<Path>>(path: P, opts: ReaderOptions) -> Result<Self, FastxError> {
        let path = path.as_ref();
        let rdr = open_input(path).map_err(|e| FastxError::io_err(e, IoContext::START))?;
        Ok(Self::with_source(Source::Path(path.to_path_buf()), rdr, opts))
    }

    /// Wrap an arbitrary `BufRead` (stdin, in-memory data, etc.). Read as is.
    pub fn from_bufread<R: BufRead + Send + 'static>(reader: R, opts: ReaderOptions) -> Self {
        Self::with_source(Source::Reader, Box::new(reader), opts)
    }

    /// Wrap any `Read`, pipes included; gzip is detected from the leading bytes.
    pub fn from_read<R: Read + Send + 'static>(
        reader: R,
        opts: ReaderOptions,
    ) -> Result<Self, FastxError> {
        let rdr = decode_stream(BufReader::new(reader), false)
            .map_err(|e| FastxError::io_err(e, IoContext::START))?;
        Ok(Self::with_source(Source::Reader, rdr, opts))
    }

    pub(crate) fn with_source(
        src: Source,
        rdr: Box<dyn BufRead + Send>,
        opts: ReaderOptions,
    ) -> Self {
        log::debug!("reading records from {:?}", src);
        Self {
            src,
            rdr,
            opts,
            line_num: 0,
            byte_pos: 0,
            pending_header: None,
        }
    }

    pub fn source(&self) -> &Source {
        &self.src
    }

    /// Current position in the underlying stream.
    pub fn position(&self) -> IoContext {
        self.ctx()
    }

    /// Iterator-style `next` record; `None` at end of stream.
    pub fn next(&mut self) -> Option<Result<SeqRecord, FastxError>> {
        loop {
            match self.read_one() {
                Ok(Some(rec)) => return Some(Ok(rec)),
                Ok(None) => return None,
                Err(err) => {
                    if self.opts.error_policy == ErrorPolicy::Skip {
                        log::warn!("skipping malformed record: {err}");
                        if !self.resync_to_next_header() {
                            return None;
                        }
                        continue;
                    } else {
                        return Some(Err(err));
                    }
                }
            }
        }
    }

    /// Reads one line as raw bytes with trailing ASCII whitespace (including
    /// `\r\n`) removed.
    fn read_line(&mut self, buf: &mut Vec<u8>) -> io::Result<usize> {
        buf.clear();
        let n = self.rdr.read_until(b'\n', buf)?;
        if n > 0 {
            self.line_num += 1;
            self.byte_pos += n as u64;
            let keep = buf.trim_ascii_end().len();
            buf.truncate(keep);
        }
        Ok(n)
    }

    fn next_line(&mut self, buf: &mut Vec<u8>) -> Result<usize, FastxError> {
        self.read_line(buf)
            .map_err(|e| FastxError::io_err(e, self.ctx()))
    }

    fn read_one(&mut self) -> Result<Option<SeqRecord>, FastxError> {
        let header = if let Some(h) = self.pending_header.take() {
            h
        } else {
            // seek first non-empty line
            let mut h = Vec::with_capacity(128);
            loop {
                if self.next_line(&mut h)? == 0 {
                    return Ok(None);
                }
                if !h.is_empty() {
                    break;
                }
            }
            h
        };

        let format = header
            .first()
            .copied()
            .and_then(Format::from_marker)
            .ok_or_else(|| FastxError::fmt_err(FormatError::MissingHeader, self.ctx()))?;
        if let Some(expected) = self.opts.format.expected() {
            if expected != format {
                return Err(FastxError::fmt_err(
                    FormatError::UnexpectedFormat {
                        expected,
                        found: format,
                    },
                    self.ctx(),
                ));
            }
        }

        let (id, desc) = split_header(&header[1..]);
        if id.is_empty() {
            return Err(FastxError::fmt_err(FormatError::MissingName, self.ctx()));
        }

        let mut line = Vec::<u8>::with_capacity(256);
        let mut seq = Vec::<u8>::with_capacity(256);

        match format {
            Format::Fasta => {
                // Sequence runs until the next header or EOF.
                loop {
                    if self.next_line(&mut line)? == 0 {
                        break;
                    }
                    if starts_record(&line) {
                        self.pending_header = Some(std::mem::take(&mut line));
                        break;
                    }
                    seq.extend_from_slice(&line);
                }
                Ok(Some(SeqRecord {
                    id,
                    desc,
                    seq,
                    qual: None,
                }))
            }
            Format::Fastq => {
                // Sequence runs until the '+' separator.
                loop {
                    if self.next_line(&mut line)? == 0 {
                        return Err(FastxError::fmt_err(FormatError::UnexpectedEof, self.ctx()));
                    }
                    if line.starts_with(b"+") {
                        break;
                    }
                    if starts_record(&line) {
                        // Keep the header so a skipping reader resumes at that record.
                        self.pending_header = Some(std::mem::take(&mut line));
                        return Err(FastxError::fmt_err(FormatError::MissingPlus, self.ctx()));
                    }
                    seq.extend_from_slice(&line);
                }

                // Quality ends once it covers the sequence; its lines may start with '@'.
                let mut qual = Vec::<u8>::with_capacity(seq.len());
                while qual.len() < seq.len() {
                    if self.next_line(&mut line)? == 0 {
                        return Err(FastxError::fmt_err(FormatError::UnexpectedEof, self.ctx()));
                    }
                    qual.extend_from_slice(&line);
                }

                if qual.len() != seq.len() {
                    return Err(FastxError::fmt_err(
                        FormatError::LengthMismatch {
                            seq: seq.len(),
                            qual: qual.len(),
                        },
                        self.ctx(),
                    ));
                }

                Ok(Some(SeqRecord {
                    id,
                    desc,
                    seq,
                    qual: Some(qual),
                }))
            }
        }
    }

    /// Resynchronize to next header line starting with '>' or '@', unless the
    /// failed record already stopped on one.
    /// Returns true if a header was found and stored in `pending_header`.
    fn resync_to_next_header(&mut self) -> bool {
        if self.pending_header.is_some() {
            return true;
        }
        let mut buf = Vec::with_capacity(256);
        loop {
            match self.read_line(&mut buf) {
                Ok(0) => return false, // EOF
                Ok(_) => {
                    if starts_record(&buf) {
                        self.pending_header = Some(buf);
                        return true;
                    }
                }
                Err(_) => return false,
            }
        }
    }

    #[inline]
    fn ctx(&self) -> IoContext {
        IoContext {
            byte_pos: self.byte_pos,
            line_num: self.line_num,
        }
    }
}

impl Iterator for FastxReader {
    type Item = Result<SeqRecord, FastxError>;
    fn next(&mut self) -> Option<Self::Item> {
        FastxReader::next(self)
    }
}

#[inline]
fn starts_record(line: &[u8]) -> bool {
    line.first().copied().and_then(Format::from_marker).is_some()
}

/// Split header bytes (marker already removed) into name and description.
/// The name ends at the first ASCII whitespace byte.
fn split_header(text: &[u8]) -> (Vec<u8>, Option<String>) {
    let end = text
        .iter()
        .position(u8::is_ascii_whitespace)
        .unwrap_or(text.len());
    let id = text[..end].to_vec();
    let rest = text[end..].trim_ascii();
    let desc = (!rest.is_empty()).then(|| String::from_utf8_lossy(rest).into_owned());
    (id, desc)
}
