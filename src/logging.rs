//! Diagnostic logging.
//!
//! All log output goes to stderr so stdout carries only prompts and results.
//! Filter precedence: `RUST_LOG`, then `-v` flags, then the `[logging]` table
//! (which `DRILLS_LOG` overrides). The default level is `warn`.
//!
//! ```bash
//! RUST_LOG=drills=trace calculator
//! drills -vv gravity
//! ```

use std::sync::Once;

use tracing_subscriber::fmt::time::FormatTime;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer};

use crate::config::{ConfigWarning, LoggingConfig};

static INIT: Once = Once::new();

/// Compact time format: HH:MM:SS.mmm
struct CompactTime;

impl FormatTime for CompactTime {
    fn format_time(&self, w: &mut tracing_subscriber::fmt::format::Writer<'_>) -> std::fmt::Result {
        write!(w, "{}", chrono::Local::now().format("%H:%M:%S%.3f"))
    }
}

/// Level implied by a `-v` count, if any
pub fn verbosity_level(verbose: u8) -> Option<&'static str> {
    match verbose {
        0 => None,
        1 => Some("info"),
        2 => Some("debug"),
        _ => Some("trace"),
    }
}

/// Filter directives for the given config and `-v` count, ignoring `RUST_LOG`.
pub fn directives(config: &LoggingConfig, verbose: u8) -> String {
    match verbosity_level(verbose) {
        Some(level) => {
            let mut config = config.clone();
            config.default = level.to_string();
            config.directives()
        }
        None => config.directives(),
    }
}

/// Initialize logging. Only the first call takes effect.
pub fn init(config: &LoggingConfig, verbose: u8) {
    INIT.call_once(|| {
        let filter = if std::env::var("RUST_LOG").is_ok() {
            EnvFilter::from_default_env()
        } else {
            EnvFilter::try_new(directives(config, verbose))
                .unwrap_or_else(|_| EnvFilter::new("warn"))
        };

        let fmt_layer = tracing_subscriber::fmt::layer()
            .with_writer(std::io::stderr)
            .with_target(true)
            .with_timer(CompactTime)
            .with_level(true)
            .with_filter(filter);

        tracing_subscriber::registry().with(fmt_layer).init();
    });
}

/// Surface config warnings through the logger.
pub fn report_config_warnings(warnings: &[ConfigWarning]) {
    for w in warnings {
        let location = match w.line {
            Some(line) => format!("{}:{}", w.file.display(), line),
            None => w.file.display().to_string(),
        };
        match &w.suggestion {
            Some(suggestion) => tracing::warn!(
                "unknown config key '{}' in {} (did you mean '{}'?)",
                w.key,
                location,
                suggestion
            ),
            None => tracing::warn!("unknown config key '{}' in {}", w.key, location),
        }
    }
}
