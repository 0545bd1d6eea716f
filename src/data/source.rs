use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};

use super::error::{LoadError, RecordError};

// ---------------------------------------------------------------------------
// LineSource – lazy line reader over a text file
// ---------------------------------------------------------------------------

/// Opens a text resource and hands out its lines in file order.
///
/// Every call to [`LineSource::open`] gets its own file handle; the handle
/// lives inside the returned [`Lines`] and is closed when that is dropped.
pub struct LineSource;

impl LineSource {
    pub fn open(path: impl AsRef<Path>) -> Result<Lines, LoadError> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|source| LoadError::ResourceNotFound {
            path: path.to_path_buf(),
            source,
        })?;
        log::debug!("Opened {}", path.display());
        Ok(Lines::from_reader(path, BufReader::new(file)))
    }
}

/// Lines of an open resource, without `\n` / `\r\n` terminators.
///
/// Lines are read as bytes and decoded one at a time. A read fault is
/// yielded as [`LoadError::Io`]; a line that is not UTF-8 as
/// [`LoadError::Parse`] carrying its line number. Callers are expected to
/// stop at the first error.
pub struct Lines<R = BufReader<File>> {
    path: PathBuf,
    reader: R,
    buf: Vec<u8>,
    /// Number of lines consumed so far (1-based number of the last one).
    line_no: usize,
}

impl<R: BufRead> Lines<R> {
    pub fn from_reader(path: impl Into<PathBuf>, reader: R) -> Self {
        Self {
            path: path.into(),
            reader,
            buf: Vec::new(),
            line_no: 0,
        }
    }

    /// 1-based number of the line most recently returned or skipped.
    pub fn line_number(&self) -> usize {
        self.line_no
    }

    /// Consume the next line without decoding it.
    ///
    /// Returns `Ok(false)` at end of input.
    pub fn skip_line(&mut self) -> Result<bool, LoadError> {
        self.read_raw()
    }

    /// Read the next line into `buf`, terminator stripped.
    fn read_raw(&mut self) -> Result<bool, LoadError> {
        self.buf.clear();
        let n = self
            .reader
            .read_until(b'\n', &mut self.buf)
            .map_err(|source| LoadError::Io {
                path: self.path.clone(),
                source,
            })?;
        if n == 0 {
            return Ok(false);
        }
        if self.buf.last() == Some(&b'\n') {
            self.buf.pop();
            if self.buf.last() == Some(&b'\r') {
                self.buf.pop();
            }
        }
        self.line_no += 1;
        Ok(true)
    }
}

impl<R: BufRead> Iterator for Lines<R> {
    type Item = Result<String, LoadError>;

    fn next(&mut self) -> Option<Self::Item> {
        match self.read_raw() {
            Ok(false) => None,
            Err(e) => Some(Err(e)),
            Ok(true) => Some(match std::str::from_utf8(&self.buf) {
                Ok(line) => Ok(line.to_string()),
                Err(_) => Err(LoadError::Parse {
                    line: self.line_no,
                    content: String::from_utf8_lossy(&self.buf).into_owned(),
                    reason: RecordError::InvalidUtf8,
                }),
            }),
        }
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use std::io::{self, Read, Write};

    use super::*;
    use crate::data::error::LoadErrorKind;

    fn temp_file(contents: &[u8]) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(contents).unwrap();
        file.flush().unwrap();
        file
    }

    /// Reader that serves `data` and then fails every read.
    pub(crate) struct FailAfter {
        pub(crate) data: io::Cursor<Vec<u8>>,
    }

    impl Read for FailAfter {
        fn read(&mut self, out: &mut [u8]) -> io::Result<usize> {
            match self.data.read(out)? {
                0 => Err(io::Error::new(io::ErrorKind::Other, "device went away")),
                n => Ok(n),
            }
        }
    }

    #[test]
    fn yields_lines_in_order_without_terminators() {
        let file = temp_file(b"header\r\nfirst\nsecond\n");
        let lines: Vec<String> = LineSource::open(file.path())
            .unwrap()
            .collect::<Result<_, _>>()
            .unwrap();
        assert_eq!(lines, vec!["header", "first", "second"]);
    }

    #[test]
    fn last_line_without_newline_is_kept() {
        let file = temp_file(b"a\nb");
        let lines: Vec<String> = LineSource::open(file.path())
            .unwrap()
            .collect::<Result<_, _>>()
            .unwrap();
        assert_eq!(lines, vec!["a", "b"]);
    }

    #[test]
    fn empty_file_yields_nothing() {
        let file = temp_file(b"");
        let mut lines = LineSource::open(file.path()).unwrap();
        assert!(!lines.skip_line().unwrap());
        assert!(lines.next().is_none());
    }

    #[test]
    fn missing_file_is_resource_not_found() {
        let dir = tempfile::tempdir().unwrap();
        let err = LineSource::open(dir.path().join("does_not_exist.csv"))
            .err()
            .unwrap();
        assert_eq!(err.kind(), LoadErrorKind::ResourceNotFound);
    }

    #[test]
    fn skipped_line_is_not_decoded() {
        let file = temp_file(b"Tick\xffer\nnext\n");
        let mut lines = LineSource::open(file.path()).unwrap();
        assert!(lines.skip_line().unwrap());
        assert_eq!(lines.line_number(), 1);
        assert_eq!(lines.next().unwrap().unwrap(), "next");
        assert_eq!(lines.line_number(), 2);
    }

    #[test]
    fn invalid_utf8_is_a_parse_error_with_line_number() {
        let file = temp_file(b"header\n\xff\xfe\n");
        let mut lines = LineSource::open(file.path()).unwrap();
        assert_eq!(lines.next().unwrap().unwrap(), "header");
        match lines.next().unwrap().unwrap_err() {
            LoadError::Parse { line, reason, .. } => {
                assert_eq!(line, 2);
                assert_eq!(reason, RecordError::InvalidUtf8);
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn read_fault_is_an_io_error() {
        let reader = BufReader::new(FailAfter {
            data: io::Cursor::new(b"first\n".to_vec()),
        });
        let mut lines = Lines::from_reader("prices.csv", reader);
        assert_eq!(lines.next().unwrap().unwrap(), "first");
        let err = lines.next().unwrap().unwrap_err();
        assert_eq!(err.kind(), LoadErrorKind::Io);
    }

    #[test]
    fn source_can_be_reopened() {
        let file = temp_file(b"a\nb\n");
        let first = LineSource::open(file.path()).unwrap().count();
        let second = LineSource::open(file.path()).unwrap().count();
        assert_eq!(first, 2);
        assert_eq!(second, 2);
    }
}
