use codeinsight::config::Verbosity;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

/// Default filter when RUST_LOG is unset: `-v` wins, else the config level.
pub fn default_directive(verbose: u8, configured: Verbosity) -> &'static str {
    match verbose {
        0 => match configured {
            Verbosity::Quiet => "codeinsight=error",
            Verbosity::Normal => "codeinsight=warn",
            Verbosity::Verbose => "codeinsight=info",
            Verbosity::Debug => "codeinsight=debug",
        },
        1 => "codeinsight=info",
        2 => "codeinsight=debug",
        _ => "codeinsight=trace",
    }
}

/// Install the stderr subscriber. Returns false when one was already set.
pub fn init(verbose: u8, configured: Verbosity, ansi: bool) -> bool {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive(verbose, configured)));

    let subscriber = tracing_subscriber::registry().with(env_filter).with(
        tracing_subscriber::fmt::layer()
            .with_writer(std::io::stderr)
            .with_ansi(ansi)
            .with_target(verbose >= 2),
    );

    if subscriber.try_init().is_err() {
        return false;
    }

    tracing::debug!(verbose, ?configured, "tracing initialized");
    true
}
