//! Binary entry point: resolve where the catalog lives, open it, and hand the
//! connection to the text menu until the user exits.
use kinobaza::{open_catalog, run_stdio, Config};
use tracing_subscriber::EnvFilter;

/// Diagnostics go to stderr and stay quiet unless `RUST_LOG` asks for more, so
/// the menu on stdout is not interleaved with log lines.
fn init_tracing() {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("kinobaza=warn")),
        )
        .init();
}

fn main() -> anyhow::Result<()> {
    init_tracing();

    let config = Config::from_home()?;
    let conn = open_catalog(&config.db_path)?;
    println!("Catalog tables are ready.");

    run_stdio(conn)
}
