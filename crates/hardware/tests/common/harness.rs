use gateware_target::common::PlatformError;
use gateware_target::common::constants::BITSTREAM_FILE;
use std::fs;
use std::io;
use std::path::Path;
use std::sync::{Arc, Mutex};
use tracing_subscriber::EnvFilter;

/// Installs a test-writer tracing subscriber once per test binary.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_test_writer()
        .with_env_filter(EnvFilter::from_default_env())
        .try_init();
}

/// Shared buffer a capturing subscriber formats events into.
#[derive(Debug, Clone, Default)]
pub struct LogBuffer(Arc<Mutex<Vec<u8>>>);

impl LogBuffer {
    /// Everything logged so far.
    pub fn contents(&self) -> String {
        String::from_utf8_lossy(&self.0.lock().unwrap()).into_owned()
    }
}

impl io::Write for LogBuffer {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// Runs `f` with every event on this thread formatted into the returned buffer.
pub fn capture_logs<T>(f: impl FnOnce() -> T) -> (T, String) {
    let buffer = LogBuffer::default();
    let writer = buffer.clone();
    let subscriber = tracing_subscriber::fmt()
        .with_writer(move || writer.clone())
        .with_ansi(false)
        .with_max_level(tracing::Level::TRACE)
        .finish();
    let value = tracing::subscriber::with_default(subscriber, f);
    (value, buffer.contents())
}

/// Bitstream written by the fake toolchain.
pub const FAKE_BITSTREAM: &[u8] = &[0xff, 0x00, 0x00, 0xff, 0x7e, 0xaa, 0x99, 0x7e];

/// Stands in for a successful toolchain run: creates `dir` and leaves a bitstream in it.
pub fn fake_build(dir: &Path) -> Result<(), PlatformError> {
    fs::create_dir_all(dir)?;
    fs::write(dir.join("top.v"), "module top (); endmodule\n")?;
    fs::write(dir.join(BITSTREAM_FILE), FAKE_BITSTREAM)?;
    Ok(())
}

/// Stands in for a toolchain that gives up halfway: leaves intermediates, no bitstream.
pub fn failing_build(dir: &Path) -> Result<(), PlatformError> {
    fs::create_dir_all(dir)?;
    fs::write(dir.join("top.v"), "module top (); endmodule\n")?;
    Err(PlatformError::ToolNotFound {
        tool: "nextpnr-ice40".into(),
    })
}
