//! Tracing setup for the `banner` binary.

use std::env;

use clap::Args;
use tracing_subscriber::EnvFilter;

/// Logging controls for the CLI.
#[derive(Debug, Clone, Default, Args)]
pub struct LogArgs {
    /// Set log level to trace
    #[arg(long, global = true, conflicts_with_all = ["debug", "log_level", "log_filter"])]
    pub trace: bool,

    /// Set log level to debug
    #[arg(long, global = true, conflicts_with_all = ["trace", "log_level", "log_filter"])]
    pub debug: bool,

    /// Set a single log level (error|warn|info|debug|trace)
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    /// Explicit tracing filter directive, e.g. "banner::selector=debug"
    #[arg(long, global = true)]
    pub log_filter: Option<String>,
}

/// Compute the filter directive with precedence: explicit filter, flags,
/// `RUST_LOG`, then `banner=info`.
pub fn compute_spec(args: &LogArgs) -> String {
    if let Some(spec) = &args.log_filter {
        return spec.clone();
    }
    if args.trace {
        return "banner=trace".to_string();
    }
    if args.debug {
        return "banner=debug".to_string();
    }
    if let Some(level) = &args.log_level {
        return format!("banner={}", level.to_ascii_lowercase());
    }
    env::var("RUST_LOG").unwrap_or_else(|_| "banner=info".to_string())
}

/// Install the global fmt subscriber. Logs go to stderr so stdout stays clean.
pub fn init(args: &LogArgs) {
    let filter = EnvFilter::new(compute_spec(args));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn explicit_filter_wins() {
        let args = LogArgs {
            debug: true,
            log_filter: Some("banner::scan=trace".into()),
            ..Default::default()
        };
        assert_eq!(compute_spec(&args), "banner::scan=trace");
    }

    #[test]
    fn flags_map_to_crate_level() {
        let trace = LogArgs {
            trace: true,
            ..Default::default()
        };
        assert_eq!(compute_spec(&trace), "banner=trace");

        let level = LogArgs {
            log_level: Some("WARN".into()),
            ..Default::default()
        };
        assert_eq!(compute_spec(&level), "banner=warn");
    }
}
