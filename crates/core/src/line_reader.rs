//! Line input that can be abandoned when a [`Cancellation`] fires.
//!
//! The blocking read runs on a worker thread. When the token fires first the
//! caller returns right away and the worker is left running: input sources
//! cannot be interrupted mid-read, so the worker finishes whenever the source
//! produces a line (or the process exits) and that line is thrown away.

use std::io::{self, BufRead, BufReader};
use std::sync::{Arc, Mutex, OnceLock, PoisonError};
use std::thread;

use crossbeam_channel::{at, never, select};
use log::{debug, trace};

use crate::cancel::Cancellation;
use crate::error::{Error, Result};

type Source = Box<dyn BufRead + Send>;

/// `None` means the source hit end of input.
type Line = io::Result<Option<String>>;

/// Reads one trimmed line per call from a shared input source.
///
/// Clones share the source. At most one read holds the source at a time, so a
/// read started after an abandoned one waits for the abandoned read to finish
/// before touching the stream.
#[derive(Clone)]
pub struct LineReader {
    source: Arc<Mutex<Source>>,
}

impl std::fmt::Debug for LineReader {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LineReader").finish_non_exhaustive()
    }
}

impl LineReader {
    pub fn new(source: impl BufRead + Send + 'static) -> Self {
        Self {
            source: Arc::new(Mutex::new(Box::new(source))),
        }
    }

    /// Handle to the process-wide stdin reader.
    #[must_use]
    pub fn stdin() -> Self {
        static STDIN: OnceLock<LineReader> = OnceLock::new();
        STDIN
            .get_or_init(|| LineReader::new(BufReader::new(io::stdin())))
            .clone()
    }

    /// Reads the next line, with surrounding whitespace removed.
    ///
    /// A final line without a trailing newline is still returned as a line.
    ///
    /// # Errors
    ///
    /// - [`Error::Cancelled`] / [`Error::DeadlineExceeded`] when `cancel`
    ///   fires before a line is available, including when it already fired
    ///   before the call.
    /// - [`Error::EndOfInput`] when the source is exhausted.
    /// - [`Error::Read`] when the source fails or the worker cannot start.
    pub fn read_line(&self, cancel: &Cancellation) -> Result<String> {
        cancel.check()?;

        let (tx, rx) = crossbeam_channel::bounded::<Line>(1);

        let source = Arc::clone(&self.source);
        thread::Builder::new()
            .name("line-reader".to_string())
            .spawn(move || {
                let line = read_from(&source);
                if tx.send(line).is_err() {
                    debug!("Discarding input from an abandoned read");
                }
            })
            .map_err(Error::Read)?;

        let deadline = cancel.deadline().map_or_else(never, at);
        let line = select! {
            recv(rx) -> line => line.map_err(|_| worker_gone())?,
            recv(cancel.fired()) -> _ => {
                debug!("Cancelled while waiting for input");
                return Err(Error::Cancelled);
            }
            recv(deadline) -> _ => {
                debug!("Deadline passed while waiting for input");
                // Explicit cancellation still wins when both fired.
                cancel.check()?;
                return Err(Error::DeadlineExceeded);
            }
        };

        match line {
            Ok(Some(line)) => {
                trace!("Read line {line:?}");
                Ok(line)
            }
            Ok(None) => Err(Error::EndOfInput),
            Err(e) => Err(Error::Read(e)),
        }
    }
}

fn read_from(source: &Mutex<Source>) -> io::Result<Option<String>> {
    let mut source = source.lock().unwrap_or_else(PoisonError::into_inner);
    let mut line = String::new();
    if source.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}

fn worker_gone() -> Error {
    Error::Read(io::Error::other("line reader worker exited without a result"))
}
