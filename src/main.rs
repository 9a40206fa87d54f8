use clap::Parser;
use hellowasm::{Console, Flavor, Greeter};
use orfail::OrFail;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[derive(Debug, Parser)]
#[command(version, about)]
struct Args {
    /// Toolchain flavor whose messages are printed [default: the build target's]
    #[arg(long)]
    flavor: Option<Flavor>,

    /// Skip the `main` sequence and only call `greet`, as a JS host would
    #[arg(long)]
    no_main: bool,
}

pub fn main() -> orfail::Result<()> {
    init_logger();

    let args = Args::parse();
    let flavor = args.flavor.unwrap_or(Flavor::TARGET);
    tracing::debug!(%flavor, build_target = %Flavor::TARGET, no_main = args.no_main, "start");

    let mut greeter = Greeter::new(flavor, Console::new());
    if args.no_main {
        greeter.greet().or_fail()?;
    } else {
        greeter.run_main().or_fail()?;
    }
    Ok(())
}

// Keeps the exported `greet` linked into the program module.
#[used]
static GREET_EXPORT: extern "C" fn() = hellowasm::greet;

// Logs go to stderr; stdout carries only the greeting lines.
fn init_logger() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .with_ansi(false)
                .compact(),
        )
        .init();
}
