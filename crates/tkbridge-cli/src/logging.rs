//! Subscriber setup

use anyhow::Context;
use tracing_subscriber::EnvFilter;

/// Environment variable consulted when `--log` is absent
pub const LOG_ENV: &str = "TKBRIDGE_LOG";

/// Install the global fmt subscriber
pub fn init(cli: Option<&str>, config: &str) -> anyhow::Result<()> {
    let directive = resolve_filter(cli, std::env::var(LOG_ENV).ok(), config);
    let filter = EnvFilter::try_new(&directive)
        .with_context(|| format!("invalid log filter {:?}", directive))?;
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .try_init()
        .map_err(|err| anyhow::anyhow!(err))
}

/// `--log`, then the environment, then the config file
fn resolve_filter(cli: Option<&str>, env: Option<String>, config: &str) -> String {
    cli.map(str::to_string)
        .or(env.filter(|value| !value.is_empty()))
        .unwrap_or_else(|| config.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_filter_priority() {
        assert_eq!(resolve_filter(Some("debug"), Some("warn".into()), "info"), "debug");
        assert_eq!(resolve_filter(None, Some("warn".into()), "info"), "warn");
        assert_eq!(resolve_filter(None, Some(String::new()), "info"), "info");
        assert_eq!(resolve_filter(None, None, "info"), "info");
    }
}
