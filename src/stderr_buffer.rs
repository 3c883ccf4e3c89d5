use std::io::{self, Write};
use std::sync::{Mutex, MutexGuard};

static BUFFER: Mutex<Option<String>> = Mutex::new(None);

fn lock() -> MutexGuard<'static, Option<String>> {
    // A panic while holding the lock leaves plain text behind; keep using it
    BUFFER.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

/// Activate buffering. While active, log output is stored instead of being
/// written to stderr, so it cannot corrupt the TUI.
pub fn activate() {
    *lock() = Some(String::new());
}

/// Deactivate buffering and return all collected lines.
pub fn drain() -> Vec<String> {
    lock()
        .take()
        .map(|text| text.lines().map(str::to_string).collect())
        .unwrap_or_default()
}

pub fn is_active() -> bool {
    lock().is_some()
}

/// Stderr writer that routes through the buffer when it is active.
///
/// Handed to the tracing subscriber as its writer.
#[derive(Debug, Default, Clone, Copy)]
pub struct BufferedStderr;

impl Write for BufferedStderr {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        let mut guard = lock();
        if let Some(text) = guard.as_mut() {
            text.push_str(&String::from_utf8_lossy(buf));
            Ok(buf.len())
        } else {
            drop(guard);
            io::stderr().write(buf)
        }
    }

    fn flush(&mut self) -> io::Result<()> {
        if is_active() {
            Ok(())
        } else {
            io::stderr().flush()
        }
    }
}
