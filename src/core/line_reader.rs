use std::io::{self, BufRead, BufReader, Read};

const DEFAULT_CAPACITY: usize = 64 * 1024;

/// Pulls `\n`-terminated lines from a byte stream into a reusable buffer.
///
/// A `\r\n` ending is normalized to `\n`. A final line without a newline
/// loses one trailing `\r`. The line counter is bumped on every call,
/// including the one that hits end of input.
pub struct LineReader<R> {
    inner: BufReader<R>,
    line: Vec<u8>,
    num_line: usize,
}

impl<R: Read> LineReader<R> {
    pub fn new(rdr: R) -> Self {
        Self::with_capacity(DEFAULT_CAPACITY, rdr)
    }

    pub fn with_capacity(capacity: usize, rdr: R) -> Self {
        Self {
            inner: BufReader::with_capacity(capacity, rdr),
            line: Vec::new(),
            num_line: 0,
        }
    }

    /// Reads the next line. Returns `false` at end of input, leaving the
    /// buffer empty.
    pub fn read_line(&mut self) -> io::Result<bool> {
        self.line.clear();
        let n = self.inner.read_until(b'\n', &mut self.line)?;
        self.num_line += 1;
        if n == 0 {
            return Ok(false);
        }

        match self.line.as_slice() {
            [.., b'\r', b'\n'] => {
                let len = self.line.len();
                self.line[len - 2] = b'\n';
                self.line.truncate(len - 1);
            }
            [.., b'\r'] => {
                self.line.pop();
            }
            _ => {}
        }
        Ok(true)
    }

    pub fn line(&self) -> &[u8] {
        &self.line
    }

    pub fn num_line(&self) -> usize {
        self.num_line
    }
}
