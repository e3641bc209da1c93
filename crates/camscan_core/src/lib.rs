//! Camscan core: candidate generation, probe classification and reporting.
//!
//! Nothing in this crate performs IO; configuration is read through an
//! injectable key lookup so it can be exercised without touching the
//! process environment.
mod candidate;
mod config;
mod probe_result;
mod report;

pub use candidate::{parse_extra_list, Candidate, CandidatePlan, CandidateStrategy};
pub use config::{
    ConfigError, Credentials, ScanConfig, DEFAULT_BASE_URL, DEFAULT_ID_END, DEFAULT_ID_START,
    DEFAULT_REQUEST_SLEEP, DEFAULT_REQUEST_TIMEOUT, DEFAULT_SUFFIX_END, DEFAULT_SUFFIX_START,
};
pub use probe_result::ProbeResult;
pub use report::Report;
