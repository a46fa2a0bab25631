#![allow(dead_code)]
use faultwatch::listeners::Console;
use std::io::{self, Write};
use std::sync::{Arc, Mutex};

/// An in-memory console that can be shared between listeners and inspected
/// by the test afterwards.
#[derive(Clone, Default)]
pub struct ConsoleBuffer(Arc<Mutex<Vec<u8>>>);

impl ConsoleBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn console(&self) -> Console {
        Console::from_writer(self.clone())
    }

    pub fn lines(&self) -> Vec<String> {
        String::from_utf8(self.0.lock().unwrap().clone())
            .unwrap()
            .lines()
            .map(str::to_string)
            .collect()
    }
}

impl Write for ConsoleBuffer {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}
