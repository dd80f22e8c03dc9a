//! Byte-stream plumbing: open (possibly gzipped) inputs and create outputs.

use std::fs::File;
use std::io::{self, BufRead, BufReader, BufWriter, Write};
use std::path::Path;

#[cfg(feature = "gzip")]
use flate2::read::MultiGzDecoder;
use flate2::Compression;
use flate2::write::GzEncoder;

const BUF_CAPACITY: usize = 256 * 1024;

/// Peek at the gzip magic without consuming it. Works on pipes and stdin.
pub fn looks_like_gzip<R: BufRead>(r: &mut R) -> io::Result<bool> {
    let buf = r.fill_buf()?;
    Ok(buf.starts_with(&[0x1F, 0x8B]))
}

pub fn open_file(path: &Path) -> io::Result<File> {
    File::open(path)
}

#[inline]
pub fn is_stdio(path: &Path) -> bool {
    path.as_os_str() == "-"
}

#[inline]
fn has_gz_extension(path: &Path) -> bool {
    path.extension()
        .and_then(|s| s.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("gz"))
}

/// Wrap a buffered stream, decompressing it when `gz` is set or the stream
/// starts with the gzip magic bytes.
pub fn decode_stream<R>(mut rdr: R, gz: bool) -> io::Result<Box<dyn BufRead + Send>>
where
    R: BufRead + Send + 'static,
{
    if !(gz || looks_like_gzip(&mut rdr)?) {
        return Ok(Box::new(rdr));
    }
    #[cfg(feature = "gzip")]
    {
        let dec = MultiGzDecoder::new(rdr);
        Ok(Box::new(BufReader::with_capacity(BUF_CAPACITY, dec)))
    }
    #[cfg(not(feature = "gzip"))]
    {
        Err(io::Error::new(
            io::ErrorKind::Unsupported,
            "gzip input requires the `gzip` feature",
        ))
    }
}

/// Open `path` (or stdin for `-`) as a buffered byte stream.
/// `.gz` is detected by extension or magic bytes and decompressed on the fly.
pub fn open_input(path: &Path) -> io::Result<Box<dyn BufRead + Send>> {
    if is_stdio(path) {
        return decode_stream(BufReader::with_capacity(BUF_CAPACITY, io::stdin()), false);
    }

    let f = open_file(path)?;
    let gz = has_gz_extension(path);

    #[cfg(feature = "mmap")]
    {
        // Only regular files can be mapped; pipes and devices are streamed.
        if !gz && f.metadata()?.is_file() {
            use memmap2::Mmap;
            use std::io::Cursor;
            // SAFETY: read-only mapping; the file is not modified while we read it.
            let mmap = unsafe { Mmap::map(&f) }?;
            return decode_stream(
                BufReader::with_capacity(2 * BUF_CAPACITY, Cursor::new(mmap)),
                false,
            );
        }
    }

    decode_stream(BufReader::with_capacity(BUF_CAPACITY, f), gz)
}

/// Output destination. Gzip streams must be finished to write their trailer,
/// so this is an enum with an explicit `finish` instead of a boxed writer.
pub enum Sink {
    Stdout(BufWriter<io::Stdout>),
    Plain(BufWriter<File>),
    Gzip(GzEncoder<BufWriter<File>>),
}

impl Sink {
    /// Create `path` (stdout for `-`); a `.gz` extension selects gzip output.
    pub fn create(path: &Path) -> io::Result<Self> {
        if is_stdio(path) {
            return Ok(Sink::Stdout(BufWriter::with_capacity(
                BUF_CAPACITY,
                io::stdout(),
            )));
        }
        let f = BufWriter::with_capacity(BUF_CAPACITY, File::create(path)?);
        if has_gz_extension(path) {
            Ok(Sink::Gzip(GzEncoder::new(f, Compression::default())))
        } else {
            Ok(Sink::Plain(f))
        }
    }

    pub fn finish(self) -> io::Result<()> {
        match self {
            Sink::Stdout(mut w) => w.flush(),
            Sink::Plain(mut w) => w.flush(),
            Sink::Gzip(enc) => enc.finish()?.flush(),
        }
    }
}

impl Write for Sink {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        match self {
            Sink::Stdout(w) => w.write(buf),
            Sink::Plain(w) => w.write(buf),
            Sink::Gzip(w) => w.write(buf),
        }
    }

    fn flush(&mut self) -> io::Result<()> {
        match self {
            Sink::Stdout(w) => w.flush(),
            Sink::Plain(w) => w.flush(),
            Sink::Gzip(w) => w.flush(),
        }
    }
}
