use std::io::Write;

#[cfg(all(target_arch = "wasm32", target_os = "unknown"))]
#[allow(unsafe_code)]
mod host {
    // Provided by the embedder as `env.print`.
    extern "C" {
        fn print(s: *const u8, len: i32);
    }

    pub fn print_bytes(bytes: &[u8]) -> usize {
        let len = bytes.len().min(i32::MAX as usize);
        unsafe {
            print(bytes.as_ptr(), len as i32);
        }
        len
    }
}

/// The module's standard output.
///
/// On `wasm32-unknown-unknown` there is no libc, so bytes go to the host through the imported
/// `env.print(ptr, len)` function. Every other target writes to the process stdout.
#[derive(Debug)]
pub struct Console {
    #[cfg(not(all(target_arch = "wasm32", target_os = "unknown")))]
    stdout: std::io::Stdout,
}

impl Console {
    pub fn new() -> Self {
        Self {
            #[cfg(not(all(target_arch = "wasm32", target_os = "unknown")))]
            stdout: std::io::stdout(),
        }
    }
}

impl Default for Console {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(not(all(target_arch = "wasm32", target_os = "unknown")))]
impl Write for Console {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        self.stdout.write(buf)
    }

    fn flush(&mut self) -> std::io::Result<()> {
        self.stdout.flush()
    }
}

#[cfg(all(target_arch = "wasm32", target_os = "unknown"))]
impl Write for Console {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        Ok(host::print_bytes(buf))
    }

    fn flush(&mut self) -> std::io::Result<()> {
        Ok(())
    }
}
