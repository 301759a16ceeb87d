#![forbid(unsafe_code)]
#![warn(clippy::pedantic)]

use anyhow::Result;
use briefly::Config;
use briefly::Registry;
use briefly::console;

const DEFAULT_RUST_LOG: &str = "briefly=debug";

fn main() -> Result<()> {
    setup_environment();
    setup_tracing();

    let config = Config::from_env()?;
    let mut registry = Registry::new(config);

    // a code handed over on the command line is the deep-link case,
    // resolve it before the first prompt
    if let Some(code) = std::env::args().nth(1) {
        match registry.resolve(&code) {
            Ok(link) => println!("Go to: {}", link.destination),
            Err(error) => println!("{error}"),
        }
    }

    let stdin = std::io::stdin();
    let stdout = std::io::stdout();

    console::run(&mut registry, stdin.lock(), stdout.lock())?;

    Ok(())
}

fn setup_environment() {
    dotenvy::dotenv().ok();
}

fn setup_tracing() {
    use tracing_subscriber::EnvFilter;
    use tracing_subscriber::fmt;
    use tracing_subscriber::prelude::*;
    use tracing_subscriber::registry;

    registry()
        .with(EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| DEFAULT_RUST_LOG.into()),
        ))
        .with(fmt::layer())
        .init();
}
