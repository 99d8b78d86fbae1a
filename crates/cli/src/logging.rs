//! Tracing setup for the command-line front end.

use tracing_subscriber::EnvFilter;

fn level_for(verbose: u8) -> &'static str {
    match verbose {
        0 => "info",
        1 => "debug",
        2 => "trace",
        _ => "trace,hyper=debug,reqwest=debug",
    }
}

/// Initialize tracing. `RUST_LOG` wins over the verbosity flag.
///
/// Logs go to stderr so `folio sitemap` output on stdout stays clean.
pub fn init(verbose: u8) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level_for(verbose)));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(verbose >= 2)
        .with_line_number(verbose >= 3)
        .init();

    tracing::debug!("folio started with verbosity level: {}", verbose);
}
