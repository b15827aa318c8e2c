use std::{
    env,
    net::{AddrParseError, SocketAddr},
    str::FromStr,
};

use api::ApiLimits;
use core_sim::HistoryRetention;
use thiserror::Error;

const DEFAULT_LISTEN_ADDR: &str = "0.0.0.0:8080";
const DEFAULT_MAX_ROUNDS: u64 = 1_000_000;
const DEFAULT_HISTORY_CAP: usize = 100;
const DEFAULT_MAX_SWEEP_RUNS: usize = 1_000;
const DEFAULT_LOG_FORMAT: LogFormat = LogFormat::Text;

const ENV_ADDR: &str = "SIM_SERVER_ADDR";
const ENV_MAX_ROUNDS: &str = "SIM_MAX_ROUNDS";
const ENV_HISTORY_CAP: &str = "SIM_HISTORY_CAP";
const ENV_MAX_SWEEP_RUNS: &str = "SIM_MAX_SWEEP_RUNS";
const ENV_LOG_FORMAT: &str = "LOG_FORMAT";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    Text,
    Json,
}

impl LogFormat {
    fn parse(value: &str) -> Option<Self> {
        if value.eq_ignore_ascii_case("text") {
            Some(Self::Text)
        } else if value.eq_ignore_ascii_case("json") {
            Some(Self::Json)
        } else {
            None
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::Json => "json",
        }
    }
}

#[derive(Debug, Clone)]
pub struct Config {
    pub listen_addr: SocketAddr,
    pub log_format: LogFormat,
    pub limits: ApiLimits,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("SIM_SERVER_ADDR is not a valid socket address: {0}")]
    InvalidListenAddr(#[source] AddrParseError),
    #[error("{0} must be a positive integer")]
    InvalidPositiveInt(&'static str),
    #[error("SIM_HISTORY_CAP must be a non-negative integer (0 keeps every round)")]
    InvalidHistoryCap,
    #[error("LOG_FORMAT must be one of: text, json")]
    InvalidLogFormat,
    #[error("{0} contains non-unicode data")]
    NonUnicode(&'static str),
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        let listen_addr = match read_env(ENV_ADDR)? {
            Some(value) => value.parse().map_err(ConfigError::InvalidListenAddr)?,
            None => DEFAULT_LISTEN_ADDR
                .parse()
                .map_err(ConfigError::InvalidListenAddr)?,
        };

        let log_format = match read_env(ENV_LOG_FORMAT)? {
            Some(value) => LogFormat::parse(&value).ok_or(ConfigError::InvalidLogFormat)?,
            None => DEFAULT_LOG_FORMAT,
        };

        let max_rounds = parse_positive_env(ENV_MAX_ROUNDS, DEFAULT_MAX_ROUNDS)?;
        let max_sweep_runs = parse_positive_env(ENV_MAX_SWEEP_RUNS, DEFAULT_MAX_SWEEP_RUNS)?;

        let history_cap = match read_env(ENV_HISTORY_CAP)? {
            Some(value) => value
                .parse::<usize>()
                .map_err(|_| ConfigError::InvalidHistoryCap)?,
            None => DEFAULT_HISTORY_CAP,
        };
        let default_history = match history_cap {
            0 => HistoryRetention::Unlimited,
            cap => HistoryRetention::Capped(cap),
        };

        Ok(Self {
            listen_addr,
            log_format,
            limits: ApiLimits {
                max_rounds,
                max_sweep_runs,
                default_history,
            },
        })
    }
}

fn read_env(key: &'static str) -> Result<Option<String>, ConfigError> {
    match env::var(key) {
        Ok(value) => Ok(Some(value)),
        Err(env::VarError::NotPresent) => Ok(None),
        Err(env::VarError::NotUnicode(_)) => Err(ConfigError::NonUnicode(key)),
    }
}

fn parse_positive_env<T>(key: &'static str, default_value: T) -> Result<T, ConfigError>
where
    T: FromStr + PartialOrd + Default,
{
    match read_env(key)? {
        Some(value) => {
            let parsed = value
                .parse::<T>()
                .map_err(|_| ConfigError::InvalidPositiveInt(key))?;
            if parsed <= T::default() {
                return Err(ConfigError::InvalidPositiveInt(key));
            }
            Ok(parsed)
        }
        None => Ok(default_value),
    }
}
