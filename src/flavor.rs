use core::fmt::{Display, Formatter};
use core::str::FromStr;

/// Toolchain flavor the module was built for.
///
/// Each flavor has its own greeting, load message and start-up sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Flavor {
    /// `wasm32-unknown-emscripten` (emcc).
    Emscripten,

    /// `wasm32-wasi` (clang + wasi-libc).
    Wasi,
}

impl Flavor {
    #[cfg(target_os = "emscripten")]
    pub const TARGET: Self = Self::Emscripten;

    #[cfg(not(target_os = "emscripten"))]
    pub const TARGET: Self = Self::Wasi;

    /// Every flavor, in declaration order.
    pub const ALL: [Self; 2] = [Self::Emscripten, Self::Wasi];

    /// Line printed by the exported `greet` function.
    pub const fn greeting(self) -> &'static str {
        match self {
            Self::Emscripten => "Hello from WebAssembly!\n",
            Self::Wasi => "Hello from WebAssembly (Clang/WASI)!\n",
        }
    }

    /// Line printed by `main` when the module starts.
    pub const fn load_message(self) -> &'static str {
        match self {
            Self::Emscripten => "Wasm module loaded.\n",
            Self::Wasi => "Wasm module loaded via main (Clang/WASI).\n",
        }
    }

    /// Whether `main` calls `greet` after printing the load message.
    pub const fn greets_on_start(self) -> bool {
        matches!(self, Self::Wasi)
    }

    /// Canonical lowercase name, as accepted by `FromStr`.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Emscripten => "emscripten",
            Self::Wasi => "wasi",
        }
    }
}

impl Display for Flavor {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Flavor {
    type Err = UnknownFlavor;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.eq_ignore_ascii_case("emscripten") || s.eq_ignore_ascii_case("emcc") {
            Ok(Self::Emscripten)
        } else if s.eq_ignore_ascii_case("wasi") || s.eq_ignore_ascii_case("clang") {
            Ok(Self::Wasi)
        } else {
            Err(UnknownFlavor(s.to_owned()))
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownFlavor(pub String);

impl Display for UnknownFlavor {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        write!(
            f,
            "unknown flavor {:?} (expected \"emscripten\" or \"wasi\")",
            self.0
        )
    }
}

impl std::error::Error for UnknownFlavor {}
