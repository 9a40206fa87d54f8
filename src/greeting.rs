use crate::Flavor;
use std::io::Write;

/// Prints a [`Flavor`]'s fixed strings to a sink.
#[derive(Debug)]
pub struct Greeter<W> {
    flavor: Flavor,
    out: W,
}

impl<W: Write> Greeter<W> {
    pub const fn new(flavor: Flavor, out: W) -> Self {
        Self { flavor, out }
    }

    pub const fn flavor(&self) -> Flavor {
        self.flavor
    }

    pub fn greet(&mut self) -> std::io::Result<()> {
        tracing::debug!(flavor = %self.flavor, "greet");
        self.emit(self.flavor.greeting())
    }

    pub fn announce_load(&mut self) -> std::io::Result<()> {
        tracing::debug!(flavor = %self.flavor, "announce load");
        self.emit(self.flavor.load_message())
    }

    /// Runs the `main` sequence: the load message, then `greet` if the flavor calls it on start.
    pub fn run_main(&mut self) -> std::io::Result<()> {
        self.announce_load()?;
        if self.flavor.greets_on_start() {
            self.greet()?;
        }
        Ok(())
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn emit(&mut self, line: &str) -> std::io::Result<()> {
        self.out.write_all(line.as_bytes())?;
        self.out.flush()
    }
}
