//! In-memory ring of recent log lines.
//!
//! While the desktop owns the alternate screen, tracing output lands here
//! instead of stderr. The terminal app's `dmesg` reads it back.

use std::collections::VecDeque;
use std::io::{self, Write};
use std::sync::{Arc, Mutex, OnceLock};

pub const DEFAULT_MAX_LINES: usize = 500;

static GLOBAL_LOG: OnceLock<LogBuffer> = OnceLock::new();
static PANIC_HOOK_INSTALLED: OnceLock<()> = OnceLock::new();

pub fn set_global_log(buffer: LogBuffer) -> bool {
    GLOBAL_LOG.set(buffer).is_ok()
}

pub fn global_log() -> Option<LogBuffer> {
    GLOBAL_LOG.get().cloned()
}

/// Record panics in the ring before the previous hook runs, so they survive
/// the terminal being restored.
pub fn install_panic_hook() {
    if PANIC_HOOK_INSTALLED.set(()).is_err() {
        return;
    }
    let prev = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        if let Some(log) = GLOBAL_LOG.get() {
            log.push("=== PANIC ===");
            if let Some(location) = info.location() {
                log.push(format!("{}:{}", location.file(), location.line()));
            }
            if let Some(msg) = info.payload().downcast_ref::<&str>() {
                log.push(format!("message: {msg}"));
            } else if let Some(msg) = info.payload().downcast_ref::<String>() {
                log.push(format!("message: {msg}"));
            }
        }
        prev(info);
    }));
}

#[derive(Debug)]
struct Ring {
    lines: VecDeque<String>,
    max_lines: usize,
}

#[derive(Clone, Debug)]
pub struct LogBuffer {
    inner: Arc<Mutex<Ring>>,
}

impl Default for LogBuffer {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_LINES)
    }
}

impl LogBuffer {
    pub fn new(max_lines: usize) -> Self {
        Self {
            inner: Arc::new(Mutex::new(Ring {
                lines: VecDeque::new(),
                max_lines: max_lines.max(1),
            })),
        }
    }

    pub fn push(&self, line: impl Into<String>) {
        if let Ok(mut ring) = self.inner.lock() {
            ring.lines.push_back(line.into());
            while ring.lines.len() > ring.max_lines {
                ring.lines.pop_front();
            }
        }
    }

    /// Last `count` lines, oldest first.
    pub fn tail(&self, count: usize) -> Vec<String> {
        match self.inner.lock() {
            Ok(ring) => {
                let skip = ring.lines.len().saturating_sub(count);
                ring.lines.iter().skip(skip).cloned().collect()
            }
            Err(_) => Vec::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.inner.lock().map(|ring| ring.lines.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn writer(&self) -> LogWriter {
        LogWriter {
            buffer: self.clone(),
            pending: Vec::new(),
        }
    }
}

/// `io::Write` adapter that splits incoming bytes into lines.
#[derive(Debug)]
pub struct LogWriter {
    buffer: LogBuffer,
    pending: Vec<u8>,
}

impl LogWriter {
    fn push_complete_lines(&mut self) {
        let Some(pos) = self.pending.iter().rposition(|b| *b == b'\n') else {
            return;
        };
        let drained: Vec<u8> = self.pending.drain(..=pos).collect();
        for line in String::from_utf8_lossy(&drained).split('\n') {
            if !line.is_empty() {
                self.buffer.push(line);
            }
        }
    }
}

impl Write for LogWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.pending.extend_from_slice(buf);
        self.push_complete_lines();
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        self.push_complete_lines();
        if !self.pending.is_empty() {
            let rest = String::from_utf8_lossy(&self.pending).into_owned();
            self.pending.clear();
            self.buffer.push(rest);
        }
        Ok(())
    }
}

impl Drop for LogWriter {
    fn drop(&mut self) {
        let _ = self.flush();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ring_drops_oldest_lines() {
        let log = LogBuffer::new(2);
        log.push("one");
        log.push("two");
        log.push("three");
        assert_eq!(log.tail(10), vec!["two", "three"]);
        assert_eq!(log.tail(1), vec!["three"]);
    }

    #[test]
    fn writer_splits_on_newlines_and_flushes_remainder() {
        let log = LogBuffer::new(10);
        {
            let mut writer = log.writer();
            writer.write_all(b"first\nsec").unwrap();
            assert_eq!(log.len(), 1);
            writer.write_all(b"ond\ntail").unwrap();
        }
        assert_eq!(log.tail(10), vec!["first", "second", "tail"]);
    }
}
