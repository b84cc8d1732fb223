//! Rolling Logger
//!
//! `tracing` subscriber for browser apps. Each formatted event goes to the
//! devtools console (`console.log` / `warn` / `error` by level) and into a
//! fixed-capacity ring buffer that the app can read back.
//! Off wasm32 the console sink is stderr.

use std::collections::VecDeque;
use std::io;
use std::sync::{Arc, Mutex, OnceLock};

use tracing::{Level, Metadata};
use tracing_subscriber::fmt::MakeWriter;

/// Logger settings
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoggerConfig {
    /// Most verbose level that is emitted
    pub max_level: Level,
    /// Number of lines kept in the ring buffer
    pub capacity: usize,
}

impl Default for LoggerConfig {
    fn default() -> Self {
        Self {
            max_level: if cfg!(debug_assertions) { Level::DEBUG } else { Level::INFO },
            capacity: 200,
        }
    }
}

/// Circular buffer of the most recent log lines
#[derive(Debug, Clone)]
pub struct RollingBuffer {
    lines: Arc<Mutex<VecDeque<String>>>,
    capacity: usize,
}

impl RollingBuffer {
    pub fn new(capacity: usize) -> Self {
        Self {
            lines: Arc::new(Mutex::new(VecDeque::with_capacity(capacity))),
            capacity,
        }
    }

    /// Append a line, dropping the oldest once full
    pub fn push(&self, line: String) {
        if self.capacity == 0 {
            return;
        }
        let Ok(mut lines) = self.lines.lock() else { return };
        if lines.len() == self.capacity {
            lines.pop_front();
        }
        lines.push_back(line);
    }

    /// The last `n` lines, oldest first
    pub fn tail(&self, n: usize) -> Vec<String> {
        self.lines
            .lock()
            .map(|lines| lines.iter().skip(lines.len().saturating_sub(n)).cloned().collect())
            .unwrap_or_default()
    }

    pub fn len(&self) -> usize {
        self.lines.lock().map(|lines| lines.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// `MakeWriter` handing out one `ConsoleWriter` per event
#[derive(Debug, Clone)]
pub struct ConsoleMakeWriter {
    buffer: RollingBuffer,
}

impl ConsoleMakeWriter {
    pub fn new(buffer: RollingBuffer) -> Self {
        Self { buffer }
    }
}

impl<'a> MakeWriter<'a> for ConsoleMakeWriter {
    type Writer = ConsoleWriter;

    fn make_writer(&'a self) -> Self::Writer {
        ConsoleWriter::new(self.buffer.clone(), Level::INFO)
    }

    fn make_writer_for(&'a self, meta: &Metadata<'_>) -> Self::Writer {
        ConsoleWriter::new(self.buffer.clone(), *meta.level())
    }
}

/// Collects one formatted event and emits it when dropped
pub struct ConsoleWriter {
    buffer: RollingBuffer,
    level: Level,
    pending: Vec<u8>,
}

impl ConsoleWriter {
    fn new(buffer: RollingBuffer, level: Level) -> Self {
        Self { buffer, level, pending: Vec::new() }
    }

    fn emit(&mut self) {
        if self.pending.is_empty() {
            return;
        }
        let text = String::from_utf8_lossy(&self.pending);
        let line = text.trim_end().to_string();
        self.pending.clear();
        write_console(self.level, &line);
        self.buffer.push(line);
    }
}

impl io::Write for ConsoleWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.pending.extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        self.emit();
        Ok(())
    }
}

impl Drop for ConsoleWriter {
    fn drop(&mut self) {
        self.emit();
    }
}

#[cfg(target_arch = "wasm32")]
fn write_console(level: Level, line: &str) {
    match level {
        Level::ERROR => web_sys::console::error_1(&line.into()),
        Level::WARN => web_sys::console::warn_1(&line.into()),
        Level::DEBUG | Level::TRACE => web_sys::console::debug_1(&line.into()),
        _ => web_sys::console::log_1(&line.into()),
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn write_console(_level: Level, line: &str) {
    eprintln!("{}", line);
}

static INSTALLED: OnceLock<RollingBuffer> = OnceLock::new();

/// Install the global subscriber (first call wins) and return its buffer
pub fn init(config: LoggerConfig) -> RollingBuffer {
    INSTALLED
        .get_or_init(|| {
            let buffer = RollingBuffer::new(config.capacity);
            // Another subscriber may already be set (e.g. by a test harness)
            let _ = tracing_subscriber::fmt()
                .with_max_level(config.max_level)
                .with_writer(ConsoleMakeWriter::new(buffer.clone()))
                .with_ansi(false)
                .with_target(false)
                .without_time()
                .try_init();
            buffer
        })
        .clone()
}
