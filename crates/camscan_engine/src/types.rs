use camscan_core::{Candidate, ProbeResult};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ProbeError {
    #[error("failed to build http client: {0}")]
    Client(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScanEvent {
    /// The scan is about to probe `planned` candidates.
    Started { planned: u64 },
    /// One candidate was probed. `index` is zero-based in test order.
    Probed {
        index: u64,
        candidate: Candidate,
        result: ProbeResult,
    },
    Finished { found: usize, probed: u64 },
}

pub trait ProgressSink: Send + Sync {
    fn emit(&self, event: ScanEvent);
}
