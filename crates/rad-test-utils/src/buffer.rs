//! In-memory output sink shared between a renderer and a test.

use std::io::{self, Write};
use std::sync::{Arc, Mutex};

/// A cloneable `Write` target. Clones append to the same buffer.
#[derive(Clone, Default)]
pub struct SharedBuffer {
    bytes: Arc<Mutex<Vec<u8>>>,
}

impl SharedBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Everything written so far, decoded lossily.
    pub fn contents(&self) -> String {
        String::from_utf8_lossy(&self.bytes.lock().unwrap()).into_owned()
    }

    /// Written lines with surrounding whitespace and empty lines removed.
    pub fn lines(&self) -> Vec<String> {
        self.contents()
            .lines()
            .map(str::trim)
            .filter(|l| !l.is_empty())
            .map(str::to_string)
            .collect()
    }

    /// Number of written lines containing `needle`.
    pub fn count(&self, needle: &str) -> usize {
        self.contents().lines().filter(|l| l.contains(needle)).count()
    }

    pub fn clear(&self) {
        self.bytes.lock().unwrap().clear();
    }
}

impl Write for SharedBuffer {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.bytes.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}
