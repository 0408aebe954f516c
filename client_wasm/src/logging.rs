//! Routes `tracing` events from the core to the browser console

use std::io;

use tracing_subscriber::filter::LevelFilter;

use crate::log;

/// Each formatted event arrives as one write
struct ConsoleWriter;

impl io::Write for ConsoleWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        let line = String::from_utf8_lossy(buf);
        log(line.trim_end());
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

pub fn init() {
    // No clock on wasm32-unknown-unknown, so no timestamps
    let installed = tracing_subscriber::fmt()
        .with_writer(|| ConsoleWriter)
        .with_max_level(LevelFilter::INFO)
        .with_ansi(false)
        .without_time()
        .try_init();
    if installed.is_err() {
        log("tracing subscriber already installed");
    }
}
