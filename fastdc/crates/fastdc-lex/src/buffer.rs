//! Fixed-capacity lookahead window over a byte source.
//!
//! The window holds the unread part of the input in `buf[start..end]`.
//! Scanners extend a lookahead of `tok_len` bytes past `start` while they
//! decide where a token ends, then commit it in one step. When the
//! lookahead reaches `end`, [`StreamBuffer::refill`] moves the unread bytes
//! to the front of the buffer and reads more input behind them.
//!
//! ```text
//!  0        start      start+tok_len        end        capacity
//!  |  spent   |  lookahead  |  buffered, unread  |  free  |
//! ```
//!
//! A token being scanned with lookahead must therefore fit into the
//! buffer. Literal tokens of configuration files are short, and string
//! literals commit byte by byte, so only keywords, numbers and addresses
//! are bounded by the capacity.

use std::io::{self, Read};

use tracing::{debug, trace};

/// Window size used when none is configured.
pub const DEFAULT_CAPACITY: usize = 1024;

/// Smallest accepted window size.
pub const MIN_CAPACITY: usize = 16;

/// What the source has told us so far.
#[derive(Debug)]
enum SourceState {
    Open,
    Exhausted,
    Failed(io::Error),
}

/// Lookahead window bound to a borrowed reader.
///
/// The reader is never closed or dropped by the buffer; it stays owned by
/// whoever created the lexer.
#[derive(Debug)]
pub struct StreamBuffer<'a, R: Read + ?Sized> {
    reader: &'a mut R,
    buf: Box<[u8]>,
    start: usize,
    end: usize,
    tok_len: usize,
    state: SourceState,
}

impl<'a, R: Read + ?Sized> StreamBuffer<'a, R> {
    /// Creates a window of `capacity` bytes (at least [`MIN_CAPACITY`]) and
    /// performs the first read.
    pub fn new(reader: &'a mut R, capacity: usize) -> Self {
        let mut stream = Self {
            reader,
            buf: vec![0; capacity.max(MIN_CAPACITY)].into_boxed_slice(),
            start: 0,
            end: 0,
            tok_len: 0,
            state: SourceState::Open,
        };
        stream.refill();
        stream
    }

    /// Discards spent bytes and reads more input into the free tail.
    ///
    /// Returns `false` if nothing new could be read: the window is full,
    /// the source is at end of file, or the source failed. Read errors are
    /// kept and returned by [`error`](Self::error); the source is not read
    /// again after it reported end of file or an error.
    pub fn refill(&mut self) -> bool {
        if self.start > 0 {
            self.buf.copy_within(self.start..self.end, 0);
            self.end -= self.start;
            self.start = 0;
        }

        if self.end == self.buf.len() || !matches!(self.state, SourceState::Open) {
            return false;
        }

        loop {
            match self.reader.read(&mut self.buf[self.end..]) {
                Ok(0) => {
                    trace!(buffered = self.end, "configuration source exhausted");
                    self.state = SourceState::Exhausted;
                    return false;
                },
                Ok(n) => {
                    self.end += n;
                    trace!(read = n, buffered = self.end, "refilled lookahead window");
                    return true;
                },
                Err(err) if err.kind() == io::ErrorKind::Interrupted => continue,
                Err(err) => {
                    debug!(error = %err, "reading configuration source failed");
                    self.state = SourceState::Failed(err);
                    return false;
                },
            }
        }
    }

    /// Returns the byte `offset` bytes past `start`, if it is buffered.
    #[inline]
    pub fn peek_at(&self, offset: usize) -> Option<u8> {
        let pos = self.start + offset;
        if pos < self.end {
            Some(self.buf[pos])
        } else {
            None
        }
    }

    /// Returns the byte right after the lookahead.
    #[inline]
    pub fn current(&self) -> Option<u8> {
        self.peek_at(self.tok_len)
    }

    /// Moves past the current byte, either folding it into the consumed
    /// region (`commit`) or extending the lookahead.
    #[inline]
    pub fn step(&mut self, commit: bool) {
        debug_assert!(self.start + self.tok_len < self.end, "step past end of window");
        if commit {
            self.start += 1;
        } else {
            self.tok_len += 1;
        }
    }

    /// Bytes covered by the lookahead.
    pub fn token(&self) -> &[u8] {
        &self.buf[self.start..self.start + self.tok_len]
    }

    /// Folds the lookahead into the consumed region.
    pub fn commit(&mut self) {
        self.start += self.tok_len;
        self.tok_len = 0;
    }

    /// Size of the window.
    pub fn capacity(&self) -> usize {
        self.buf.len()
    }

    /// The error the source reported, if any.
    pub fn error(&self) -> Option<&io::Error> {
        match &self.state {
            SourceState::Failed(err) => Some(err),
            SourceState::Open | SourceState::Exhausted => None,
        }
    }
}
