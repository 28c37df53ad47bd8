use std::io::{BufRead, BufReader, Cursor, Read};
use std::{fmt, io};

/// This is used to set the initial capacity for the source's line
/// buffer up front to avoid allocations. IPPcode19 lines are short, so
/// 2^8 - 1 covers nearly all of them without a reallocation.
const INITIAL_CAPACITY: usize = 255; // 2^8 - 1

/// Lines longer than this, in bytes including the terminator, are
/// rejected rather than read into memory whole. A string literal can't
/// span lines, so this also bounds literal length.
pub const MAX_LINE_LENGTH: u64 = 65536; // 2^16
const MAX_LINE_LENGTH_USIZE: usize = MAX_LINE_LENGTH as usize;

/// Create source from the specified text.
pub fn source_from_text(text: &str) -> Source<Cursor<&str>> {
    Source::new(Cursor::new(text))
}

/// Create source from the specified bytes.
pub fn source_from_bytes(bytes: &[u8]) -> Source<Cursor<&[u8]>> {
    Source::new(Cursor::new(bytes))
}

/// Create source from stdin.
pub fn source_from_stdin() -> Source<BufReader<io::Stdin>> {
    Source::new(BufReader::new(io::stdin()))
}

/// A wrapper around some source, typically stdin or some text. The
/// source is read line by line.
///
/// - Strips the line terminator (`\n` or `\r\n`) from each line.
/// - Tracks the current line number (1-based; 0 before the first read).
/// - Keeps a copy of the current line for error reporting.
pub struct Source<T: BufRead> {
    stream: T,
    /// String buffer the source reader reads into.
    buffer: String,
    pub line_no: usize,
    current_line: Option<String>,
}

impl<T: BufRead> Source<T> {
    pub fn new(source: T) -> Self {
        Source {
            stream: source,
            buffer: String::with_capacity(INITIAL_CAPACITY),
            line_no: 0,
            current_line: None,
        }
    }

    pub fn get_current_line(&self) -> Option<&str> {
        self.current_line.as_deref()
    }

    /// Read the next line. Returns `Ok(None)` once all lines have been
    /// read. Invalid UTF-8 and lines longer than [`MAX_LINE_LENGTH`] are
    /// reported as `InvalidData` errors.
    pub fn next_line(&mut self) -> Result<Option<&str>, io::Error> {
        self.buffer.clear();
        let n = (&mut self.stream).take(MAX_LINE_LENGTH + 1).read_line(&mut self.buffer)?;
        if n == 0 {
            self.current_line = None;
            return Ok(None);
        }
        self.line_no += 1;
        if n > MAX_LINE_LENGTH_USIZE {
            self.current_line = None;
            let msg = format!("line {} is too long (> {MAX_LINE_LENGTH} bytes)", self.line_no);
            return Err(io::Error::new(io::ErrorKind::InvalidData, msg));
        }
        let line = self.buffer.strip_suffix('\n').unwrap_or(&self.buffer);
        let line = line.strip_suffix('\r').unwrap_or(line);
        self.current_line = Some(line.to_owned());
        Ok(self.current_line.as_deref())
    }

    pub fn loc(&self) -> Location {
        Location::new(self.line_no, 1)
    }
}

/// Represents a line and column in the source.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Location {
    pub line: usize,
    pub col: usize,
}

impl Location {
    pub fn new(line: usize, col: usize) -> Self {
        Self { line, col }
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.col)
    }
}
