//! "Hello World" for WebAssembly.
//!
//! The same sources build for `wasm32-unknown-emscripten`, `wasm32-wasi` and, with the host
//! importing `env.print`, `wasm32-unknown-unknown`. Every build exports `greet`.
#![deny(unsafe_code)]

pub(crate) mod console;
pub(crate) mod flavor;
pub(crate) mod greeting;

pub use console::Console;
pub use flavor::{Flavor, UnknownFlavor};
pub use greeting::Greeter;

/// Prints the greeting of [`Flavor::TARGET`].
///
/// Exported so that a JS host can call it after loading the module.
#[allow(unsafe_code)]
#[no_mangle]
pub extern "C" fn greet() {
    // Like `printf`, a failed console write is not reported to the caller.
    let _ = Greeter::new(Flavor::TARGET, Console::new()).greet();
}
