//! Log writer module
//!
//! Provides thread-safe log writing to stdout/stderr or any other sink.

use std::io::{self, Write};
use std::sync::{Mutex, OnceLock};

/// Global log writer instance
static LOG_WRITER: OnceLock<LogWriter> = OnceLock::new();

type Sink = Box<dyn Write + Send>;

/// Thread-safe log writer
pub struct LogWriter {
    /// Informational output (banner)
    info: Mutex<Sink>,
    /// Error and warning output
    error: Mutex<Sink>,
}

impl LogWriter {
    /// Writer bound to the process stdout and stderr
    pub fn standard() -> Self {
        Self::with_sinks(Box::new(io::stdout()), Box::new(io::stderr()))
    }

    pub fn with_sinks(info: Sink, error: Sink) -> Self {
        Self {
            info: Mutex::new(info),
            error: Mutex::new(error),
        }
    }

    pub fn write_info(&self, message: &str) {
        write_to_sink(&self.info, message);
    }

    pub fn write_error(&self, message: &str) {
        write_to_sink(&self.error, message);
    }
}

/// Write one line and flush; a poisoned lock or failed write drops the line
fn write_to_sink(sink: &Mutex<Sink>, message: &str) {
    if let Ok(mut out) = sink.lock() {
        let _ = writeln!(out, "{message}");
        let _ = out.flush();
    }
}

/// Initialize the global log writer
///
/// This should be called once at application startup.
pub fn init(writer: LogWriter) -> io::Result<()> {
    LOG_WRITER.set(writer).map_err(|_| {
        io::Error::new(
            io::ErrorKind::AlreadyExists,
            "Log writer already initialized",
        )
    })
}

/// Get the global log writer, if initialized
pub fn get() -> Option<&'static LogWriter> {
    LOG_WRITER.get()
}
