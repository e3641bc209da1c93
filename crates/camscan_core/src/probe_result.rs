use std::fmt;

/// Outcome of probing a single candidate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProbeResult {
    /// Status 200 with a non-empty body of `bytes` length.
    Success { bytes: u64 },
    /// Any other status, or status 200 with an empty body.
    Failure { status: u16 },
    /// The request never produced a complete response.
    TransportError { message: String },
}

impl ProbeResult {
    /// Classifies a completed HTTP exchange by status and body length only.
    pub fn classify(status: u16, body_len: u64) -> Self {
        if status == 200 && body_len > 0 {
            ProbeResult::Success { bytes: body_len }
        } else {
            ProbeResult::Failure { status }
        }
    }

    pub fn transport(message: impl Into<String>) -> Self {
        ProbeResult::TransportError {
            message: message.into(),
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, ProbeResult::Success { .. })
    }

    /// One human-readable status line for `candidate`. Never includes the
    /// response body.
    pub fn status_line(&self, candidate: &str) -> String {
        match self {
            ProbeResult::Success { bytes } => {
                format!("[OK] Camera='{candidate}' -> status=200 ({bytes} bytes)")
            }
            ProbeResult::Failure { status } => {
                format!("[FAIL] Camera='{candidate}' -> status={status}")
            }
            ProbeResult::TransportError { message } => {
                format!("[ERROR] Camera='{candidate}' -> {message}")
            }
        }
    }
}

impl fmt::Display for ProbeResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProbeResult::Success { bytes } => write!(f, "success ({bytes} bytes)"),
            ProbeResult::Failure { status } => write!(f, "failure (status {status})"),
            ProbeResult::TransportError { message } => write!(f, "transport error: {message}"),
        }
    }
}
