use std::fmt;
use std::time::Duration;

use thiserror::Error;
use url::Url;

use crate::candidate::{parse_extra_list, CandidatePlan, CandidateStrategy};

pub const DEFAULT_BASE_URL: &str = "http://168.194.65.172:8602/Interface/Cameras/GetSnapshot";
pub const DEFAULT_ID_START: u64 = 1000;
pub const DEFAULT_ID_END: u64 = 1100;
pub const DEFAULT_SUFFIX_START: u64 = 0;
pub const DEFAULT_SUFFIX_END: u64 = 1000;
pub const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(3);
pub const DEFAULT_REQUEST_SLEEP: Duration = Duration::from_millis(200);

const KEY_USER: &str = "CAMERA_USER";
const KEY_PASS: &str = "CAMERA_PASS";
const KEY_ID_START: &str = "CAMERA_ID_START";
const KEY_ID_END: &str = "CAMERA_ID_END";
const KEY_PREFIX: &str = "CAMERA_PREFIX";
const KEY_SUFFIX_START: &str = "CAMERA_SUFFIX_START";
const KEY_SUFFIX_END: &str = "CAMERA_SUFFIX_END";
const KEY_EXTRA: &str = "EXTRA_CAMERAS";
const KEY_TIMEOUT: &str = "REQUEST_TIMEOUT";
const KEY_SLEEP: &str = "REQUEST_SLEEP";
const KEY_BASE_URL: &str = "CAMERA_BASE_URL";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("missing credentials: {} must be set", .missing.join(" and "))]
    MissingCredentials { missing: Vec<&'static str> },
    #[error("{key} must be a non-negative integer, got '{value}'")]
    InvalidNumber { key: &'static str, value: String },
    #[error("{key} must be a non-negative number of seconds, got '{value}'")]
    InvalidDuration { key: &'static str, value: String },
    #[error("{key} is not a valid url: {reason}")]
    InvalidBaseUrl { key: &'static str, reason: String },
}

/// Static credentials sent with every probe.
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    pub user: String,
    pub pass: String,
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("user", &self.user)
            .field("pass", &"<redacted>")
            .finish()
    }
}

/// Everything a scan needs, validated once at startup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScanConfig {
    pub base_url: Url,
    pub credentials: Credentials,
    pub plan: CandidatePlan,
    pub request_timeout: Duration,
    pub request_sleep: Duration,
}

impl ScanConfig {
    /// Reads the configuration from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the configuration from an arbitrary key lookup.
    ///
    /// Credentials are checked first so a missing secret is reported even
    /// when other values are also malformed.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        // Blank values count as unset.
        let get = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

        let user = get(KEY_USER);
        let pass = get(KEY_PASS);
        let credentials = match (user, pass) {
            (Some(user), Some(pass)) => Credentials { user, pass },
            (user, pass) => {
                let mut missing = Vec::new();
                if user.is_none() {
                    missing.push(KEY_USER);
                }
                if pass.is_none() {
                    missing.push(KEY_PASS);
                }
                return Err(ConfigError::MissingCredentials { missing });
            }
        };

        // The prefix is significant whitespace, so it is read without the
        // blank filter.
        let strategy = match lookup(KEY_PREFIX) {
            Some(prefix) => CandidateStrategy::PrefixedSuffix {
                prefix,
                suffix_start: parse_number(
                    KEY_SUFFIX_START,
                    get(KEY_SUFFIX_START),
                    DEFAULT_SUFFIX_START,
                )?,
                suffix_end: parse_number(KEY_SUFFIX_END, get(KEY_SUFFIX_END), DEFAULT_SUFFIX_END)?,
            },
            None => CandidateStrategy::NumericRange {
                start: parse_number(KEY_ID_START, get(KEY_ID_START), DEFAULT_ID_START)?,
                end: parse_number(KEY_ID_END, get(KEY_ID_END), DEFAULT_ID_END)?,
            },
        };
        let extras = get(KEY_EXTRA)
            .map(|raw| parse_extra_list(&raw))
            .unwrap_or_default();

        let base_url = get(KEY_BASE_URL).unwrap_or_else(|| DEFAULT_BASE_URL.to_string());
        let base_url = Url::parse(base_url.trim()).map_err(|err| ConfigError::InvalidBaseUrl {
            key: KEY_BASE_URL,
            reason: err.to_string(),
        })?;

        Ok(Self {
            base_url,
            credentials,
            plan: CandidatePlan::new(strategy, extras),
            request_timeout: parse_seconds(
                KEY_TIMEOUT,
                get(KEY_TIMEOUT),
                DEFAULT_REQUEST_TIMEOUT,
            )?,
            request_sleep: parse_seconds(KEY_SLEEP, get(KEY_SLEEP), DEFAULT_REQUEST_SLEEP)?,
        })
    }
}

fn parse_number(key: &'static str, raw: Option<String>, default: u64) -> Result<u64, ConfigError> {
    match raw {
        None => Ok(default),
        Some(value) => value
            .trim()
            .parse()
            .map_err(|_| ConfigError::InvalidNumber { key, value }),
    }
}

fn parse_seconds(
    key: &'static str,
    raw: Option<String>,
    default: Duration,
) -> Result<Duration, ConfigError> {
    let Some(value) = raw else {
        return Ok(default);
    };
    value
        .trim()
        .parse::<f64>()
        .ok()
        .and_then(|secs| Duration::try_from_secs_f64(secs).ok())
        .ok_or(ConfigError::InvalidDuration { key, value })
}
