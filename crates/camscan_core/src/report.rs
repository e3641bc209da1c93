use crate::{Candidate, ProbeResult};

/// Responsive candidates in test order, plus tallies for the summary.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Report {
    found: Vec<Candidate>,
    probed: u64,
    failures: u64,
    transport_errors: u64,
}

impl Report {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records one probe outcome. Only successes are added to the found
    /// list; duplicates are kept.
    pub fn record(&mut self, candidate: &str, result: &ProbeResult) {
        self.probed += 1;
        match result {
            ProbeResult::Success { .. } => self.found.push(candidate.to_owned()),
            ProbeResult::Failure { .. } => self.failures += 1,
            ProbeResult::TransportError { .. } => self.transport_errors += 1,
        }
    }

    pub fn found(&self) -> &[Candidate] {
        &self.found
    }

    pub fn probed(&self) -> u64 {
        self.probed
    }

    pub fn failures(&self) -> u64 {
        self.failures
    }

    pub fn transport_errors(&self) -> u64 {
        self.transport_errors
    }

    /// Renders the end-of-run summary block.
    pub fn render_summary(&self) -> String {
        let mut lines = vec!["===== SUMMARY =====".to_string()];
        if self.found.is_empty() {
            lines.push("No responsive cameras found in the configured range.".to_string());
        } else {
            lines.push("Responsive cameras found:".to_string());
            lines.extend(self.found.iter().map(|candidate| format!(" - {candidate}")));
        }
        lines.push(format!(
            "Probed {} candidate(s): {} ok, {} failed, {} transport errors",
            self.probed,
            self.found.len(),
            self.failures,
            self.transport_errors
        ));
        lines.join("\n")
    }
}
