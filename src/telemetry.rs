use tracing_subscriber::{EnvFilter, fmt};

/// Filter used when `RUST_LOG` is unset
fn default_directive(verbosity: u8) -> &'static str {
    match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

/// Install the global `tracing` subscriber.
///
/// `RUST_LOG` wins over `verbosity` when set. Calling this twice is harmless;
/// the second install is ignored.
pub fn init(verbosity: u8, ansi: bool) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive(verbosity)));

    let installed = fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_ansi(ansi)
        .with_writer(std::io::stderr)
        .try_init();

    if installed.is_err() {
        tracing::debug!("tracing subscriber already installed");
    }
}
