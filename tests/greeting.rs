use hellowasm::{Flavor, Greeter};
use orfail::OrFail;
use std::io::Write;

fn output<F>(flavor: Flavor, f: F) -> orfail::Result<String>
where
    F: FnOnce(&mut Greeter<Vec<u8>>) -> std::io::Result<()>,
{
    let mut greeter = Greeter::new(flavor, Vec::new());
    f(&mut greeter).or_fail()?;
    String::from_utf8(greeter.into_inner()).or_fail()
}

#[test]
pub fn emscripten_main() -> orfail::Result<()> {
    let out = output(Flavor::Emscripten, |g| g.run_main()).or_fail()?;
    assert_eq!(out, "Wasm module loaded.\n");
    Ok(())
}

#[test]
pub fn emscripten_greet() -> orfail::Result<()> {
    let out = output(Flavor::Emscripten, |g| g.greet()).or_fail()?;
    assert_eq!(out, "Hello from WebAssembly!\n");
    Ok(())
}

#[test]
pub fn wasi_main_calls_greet() -> orfail::Result<()> {
    let out = output(Flavor::Wasi, |g| g.run_main()).or_fail()?;
    assert_eq!(
        out,
        "Wasm module loaded via main (Clang/WASI).\nHello from WebAssembly (Clang/WASI)!\n"
    );
    Ok(())
}

#[test]
pub fn wasi_greet() -> orfail::Result<()> {
    let out = output(Flavor::Wasi, |g| g.greet()).or_fail()?;
    assert_eq!(out, "Hello from WebAssembly (Clang/WASI)!\n");
    Ok(())
}

#[test]
pub fn greet_after_main_repeats_greeting() -> orfail::Result<()> {
    let out = output(Flavor::Emscripten, |g| {
        g.run_main()?;
        g.greet()?;
        g.greet()
    })
    .or_fail()?;
    assert_eq!(
        out,
        "Wasm module loaded.\nHello from WebAssembly!\nHello from WebAssembly!\n"
    );
    Ok(())
}

struct Broken;

impl Write for Broken {
    fn write(&mut self, _buf: &[u8]) -> std::io::Result<usize> {
        Err(std::io::ErrorKind::BrokenPipe.into())
    }

    fn flush(&mut self) -> std::io::Result<()> {
        Ok(())
    }
}

#[test]
pub fn sink_error_is_returned() -> orfail::Result<()> {
    let mut greeter = Greeter::new(Flavor::Wasi, Broken);
    let e = greeter.run_main().err().or_fail()?;
    assert_eq!(e.kind(), std::io::ErrorKind::BrokenPipe);

    let e = greeter.greet().err().or_fail()?;
    assert_eq!(e.kind(), std::io::ErrorKind::BrokenPipe);
    Ok(())
}

#[test]
pub fn exported_greet_returns_normally() {
    // Write failures are dropped inside the export, so this never panics.
    hellowasm::greet();
}
