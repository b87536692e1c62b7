use std::{env, path::PathBuf, sync::Once};

use dirs::home_dir;

static TRACING_INIT: Once = Once::new();

const DEFAULT_DIR_NAME: &str = ".expense_ledger";
const CONFIG_FILE: &str = "config.json";
const DEFAULT_DIRECTIVE: &str = "expense_ledger=info";

/// Initializes the global tracing subscriber with sensible defaults.
pub fn init_tracing() -> bool {
    init_tracing_with(None)
}

/// Initializes tracing, adding `directive` on top of `RUST_LOG` when provided.
///
/// Only the first call in a process configures the subscriber; it returns `true`
/// and later calls return `false` without touching the filter.
pub fn init_tracing_with(directive: Option<&str>) -> bool {
    let mut first = false;
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, EnvFilter};

        first = true;
        let mut filter = EnvFilter::from_default_env();
        let mut rejected = Vec::new();
        for raw in std::iter::once(DEFAULT_DIRECTIVE).chain(directive) {
            match raw.parse() {
                Ok(parsed) => filter = filter.add_directive(parsed),
                Err(err) => rejected.push((raw.to_string(), err)),
            }
        }

        if let Err(err) = fmt().with_env_filter(filter).try_init() {
            tracing::debug!(error = %err, "global subscriber already installed");
        }
        for (raw, err) in rejected {
            tracing::warn!(directive = %raw, error = %err, "ignoring invalid log directive");
        }
    });
    first
}

/// Returns the application-specific data directory, defaulting to `~/.expense_ledger`.
pub fn app_data_dir() -> PathBuf {
    if let Some(custom) = env::var_os("EXPENSE_LEDGER_HOME") {
        return PathBuf::from(custom);
    }
    home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(DEFAULT_DIR_NAME)
}

/// Path to the configuration file inside `base`.
pub fn config_file_in(base: &std::path::Path) -> PathBuf {
    base.join(CONFIG_FILE)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_file_lives_under_base() {
        let base = PathBuf::from("/tmp/ledger-home");
        assert_eq!(config_file_in(&base), base.join("config.json"));
    }

    #[test]
    fn only_first_init_configures_tracing() {
        init_tracing_with(Some("expense_ledger=debug"));
        assert!(!init_tracing());
        assert!(!init_tracing_with(Some("expense_ledger=trace")));
    }
}
