//! Tracing subscriber setup.
//!
//! In the browser, formatted events go to the developer console; on any
//! other target they go to stderr.

use tracing_subscriber::EnvFilter;

/// Install the global subscriber using `filter` (`RUST_LOG` syntax).
///
/// Returns `false` when a subscriber was already installed, in which case
/// nothing changes.
pub fn init(filter: &str) -> bool {
    let result = tracing_subscriber::fmt()
        .with_env_filter(env_filter(filter))
        .with_ansi(false)
        .without_time()
        .with_writer(writer())
        .try_init();

    match result {
        Ok(()) => true,
        Err(err) => {
            tracing::debug!(error = %err, "tracing subscriber already installed");
            false
        }
    }
}

/// Route panics to the browser console. No-op off `wasm32`.
pub fn install_panic_hook() {
    #[cfg(target_arch = "wasm32")]
    console_error_panic_hook::set_once();
}

/// Parse `filter`, falling back to `info` when it is invalid.
fn env_filter(filter: &str) -> EnvFilter {
    EnvFilter::try_new(filter).unwrap_or_else(|_| EnvFilter::new("info"))
}

#[cfg(target_arch = "wasm32")]
fn writer() -> console::MakeConsoleWriter {
    console::MakeConsoleWriter
}

#[cfg(not(target_arch = "wasm32"))]
fn writer() -> fn() -> std::io::Stderr {
    std::io::stderr
}

#[cfg(target_arch = "wasm32")]
mod console {
    use std::io;

    use tracing_subscriber::fmt::MakeWriter;
    use wasm_bindgen::JsValue;

    /// Creates one [`ConsoleWriter`] per formatted event.
    pub struct MakeConsoleWriter;

    impl<'a> MakeWriter<'a> for MakeConsoleWriter {
        type Writer = ConsoleWriter;

        fn make_writer(&'a self) -> Self::Writer {
            ConsoleWriter { buffer: Vec::new() }
        }
    }

    /// Buffers a single event and logs it to the console when dropped.
    pub struct ConsoleWriter {
        buffer: Vec<u8>,
    }

    impl io::Write for ConsoleWriter {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.buffer.extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            if !self.buffer.is_empty() {
                let line = String::from_utf8_lossy(&self.buffer);
                web_sys::console::log_1(&JsValue::from_str(line.trim_end()));
                self.buffer.clear();
            }
            Ok(())
        }
    }

    impl Drop for ConsoleWriter {
        fn drop(&mut self) {
            let _ = io::Write::flush(self);
        }
    }
}
