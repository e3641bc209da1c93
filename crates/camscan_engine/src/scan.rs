use std::time::Duration;

use camscan_core::{CandidatePlan, Report};
use scan_logging::scan_debug;

use crate::{Prober, ProgressSink, ScanEvent};

/// Drives a plan through a prober, one request at a time.
pub struct Scanner<P> {
    prober: P,
    sleep: Duration,
}

impl<P: Prober> Scanner<P> {
    /// `sleep` is waited after every probe, whatever its outcome.
    pub fn new(prober: P, sleep: Duration) -> Self {
        Self { prober, sleep }
    }

    /// Probes every candidate of `plan` in order and returns the report.
    pub async fn run(&self, plan: &CandidatePlan, sink: &dyn ProgressSink) -> Report {
        let mut report = Report::new();
        sink.emit(ScanEvent::Started {
            planned: plan.len(),
        });

        for (index, candidate) in plan.iter().enumerate() {
            let result = self.prober.probe(&candidate).await;
            report.record(&candidate, &result);
            sink.emit(ScanEvent::Probed {
                index: index as u64,
                candidate,
                result,
            });

            scan_debug!("sleeping {:?} before next probe", self.sleep);
            tokio::time::sleep(self.sleep).await;
        }

        sink.emit(ScanEvent::Finished {
            found: report.found().len(),
            probed: report.probed(),
        });
        report
    }
}
