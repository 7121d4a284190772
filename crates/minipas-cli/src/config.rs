//! Settings resolution: command-line flags, then environment, then defaults.

use log::LevelFilter;
use minipas_eval::RunConfig;

use crate::cli::CliArgs;

pub const ENV_LOG: &str = "MINIPAS_LOG";
pub const ENV_GAS_LIMIT: &str = "MINIPAS_GAS_LIMIT";

/// Effective settings for one invocation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Settings {
    pub log_level: LevelFilter,
    pub run: RunConfig,
}

impl Settings {
    /// Combine parsed flags with environment lookups (`env` is
    /// `std::env::var` in the binary, a closure in tests).
    pub fn resolve(args: &CliArgs, env: impl Fn(&str) -> Option<String>) -> Result<Self, String> {
        let log_level = match args.verbosity {
            0 => match env(ENV_LOG) {
                Some(level) => level
                    .parse()
                    .map_err(|_| format!("{ENV_LOG}: unknown level '{level}'"))?,
                None => LevelFilter::Warn,
            },
            1 => LevelFilter::Debug,
            _ => LevelFilter::Trace,
        };

        let gas_limit = match args.gas_limit {
            Some(limit) => Some(limit),
            None => match env(ENV_GAS_LIMIT) {
                Some(value) => Some(
                    value
                        .parse()
                        .map_err(|_| format!("{ENV_GAS_LIMIT}: invalid gas limit '{value}'"))?,
                ),
                None => None,
            },
        };

        Ok(Self {
            log_level,
            run: RunConfig { gas_limit },
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::Command;

    fn args(verbosity: u8, gas_limit: Option<u64>) -> CliArgs {
        CliArgs {
            command: Command::Help,
            verbosity,
            gas_limit,
        }
    }

    fn no_env(_: &str) -> Option<String> {
        None
    }

    #[test]
    fn test_defaults() {
        let settings = Settings::resolve(&args(0, None), no_env).unwrap();
        assert_eq!(settings.log_level, LevelFilter::Warn);
        assert_eq!(settings.run, RunConfig::unlimited());
    }

    #[test]
    fn test_environment() {
        let env = |key: &str| match key {
            ENV_LOG => Some("info".to_string()),
            ENV_GAS_LIMIT => Some("250".to_string()),
            _ => None,
        };
        let settings = Settings::resolve(&args(0, None), env).unwrap();
        assert_eq!(settings.log_level, LevelFilter::Info);
        assert_eq!(settings.run.gas_limit, Some(250));
    }

    #[test]
    fn test_flags_win() {
        let env = |key: &str| match key {
            ENV_LOG => Some("error".to_string()),
            ENV_GAS_LIMIT => Some("250".to_string()),
            _ => None,
        };
        let settings = Settings::resolve(&args(2, Some(9)), env).unwrap();
        assert_eq!(settings.log_level, LevelFilter::Trace);
        assert_eq!(settings.run.gas_limit, Some(9));
    }

    #[test]
    fn test_bad_environment() {
        let env = |key: &str| (key == ENV_GAS_LIMIT).then(|| "-1".to_string());
        let err = Settings::resolve(&args(0, None), env).unwrap_err();
        assert_eq!(err, "MINIPAS_GAS_LIMIT: invalid gas limit '-1'");

        let env = |key: &str| (key == ENV_LOG).then(|| "loud".to_string());
        assert!(Settings::resolve(&args(0, None), env).is_err());
    }
}
