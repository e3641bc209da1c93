//! Camscan engine: snapshot probing and the sequential scan loop.
mod probe;
mod scan;
mod types;

pub use probe::{Prober, ProbeSettings, ReqwestProber, SNAPSHOT_QUERY};
pub use scan::Scanner;
pub use types::{ProbeError, ProgressSink, ScanEvent};
