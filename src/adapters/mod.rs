// Adapters layer: concrete streams behind the record source port and the output sink.

use crate::domain::ports::RecordSource;
use crate::utils::error::{ConvertError, Result};
use std::fs::File;
use std::io::{self, BufWriter, Read, Write};
use std::path::{Path, PathBuf};

#[derive(Debug)]
pub struct ReaderSource<R: Read> {
    reader: R,
}

impl<R: Read> ReaderSource<R> {
    pub fn new(reader: R) -> Self {
        Self { reader }
    }
}

impl ReaderSource<io::Stdin> {
    pub fn stdin() -> Self {
        Self::new(io::stdin())
    }
}

impl ReaderSource<File> {
    pub fn file(path: impl AsRef<Path>) -> Result<Self> {
        let file = File::open(path).map_err(ConvertError::input)?;
        Ok(Self::new(file))
    }
}

impl<R: Read> RecordSource for ReaderSource<R> {
    fn read_all(&mut self) -> Result<Vec<u8>> {
        let mut data = Vec::new();
        self.reader
            .read_to_end(&mut data)
            .map_err(ConvertError::input)?;
        Ok(data)
    }
}

/// Buffered output over stdout or a file.
///
/// A file sink is only created on first write, so a run that fails before
/// emitting anything leaves an existing file untouched.
pub enum OutputSink {
    Stdout(BufWriter<io::StdoutLock<'static>>),
    File {
        path: PathBuf,
        writer: Option<BufWriter<File>>,
    },
}

impl OutputSink {
    fn writer(&mut self) -> io::Result<&mut dyn Write> {
        match self {
            Self::Stdout(w) => Ok(w),
            Self::File { path, writer } => {
                if writer.is_none() {
                    *writer = Some(BufWriter::new(File::create(&*path)?));
                }
                match writer {
                    Some(w) => Ok(w),
                    None => Err(io::Error::new(io::ErrorKind::Other, "output file not open")),
                }
            }
        }
    }
}

impl Write for OutputSink {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.writer()?.write(buf)
    }

    fn flush(&mut self) -> io::Result<()> {
        self.writer()?.flush()
    }
}

pub fn open_sink(path: Option<&str>) -> OutputSink {
    match path {
        Some(path) => OutputSink::File {
            path: PathBuf::from(path),
            writer: None,
        },
        None => OutputSink::Stdout(BufWriter::new(io::stdout().lock())),
    }
}
