use std::error::Error as _;
use std::time::Duration;

use camscan_core::{Credentials, ProbeResult, ScanConfig};
use futures_util::StreamExt;
use reqwest::StatusCode;
use scan_logging::scan_trace;
use url::Url;

use crate::ProbeError;

/// Fixed snapshot parameters sent with every probe, after `Camera` and
/// before the credentials.
pub const SNAPSHOT_QUERY: [(&str, &str); 4] = [
    ("Width", "1280"),
    ("Height", "720"),
    ("Quality", "100"),
    ("ResponseFormat", "jsonL"),
];

#[derive(Debug, Clone)]
pub struct ProbeSettings {
    pub base_url: Url,
    pub credentials: Credentials,
    pub request_timeout: Duration,
}

impl ProbeSettings {
    pub fn from_config(config: &ScanConfig) -> Self {
        Self {
            base_url: config.base_url.clone(),
            credentials: config.credentials.clone(),
            request_timeout: config.request_timeout,
        }
    }
}

#[async_trait::async_trait]
pub trait Prober: Send + Sync {
    /// Tests one candidate with a single request. Never fails; transport
    /// problems are folded into the result.
    async fn probe(&self, candidate: &str) -> ProbeResult;
}

#[derive(Debug, Clone)]
pub struct ReqwestProber {
    settings: ProbeSettings,
    client: reqwest::Client,
}

impl ReqwestProber {
    pub fn new(settings: ProbeSettings) -> Result<Self, ProbeError> {
        let client = reqwest::Client::builder()
            .timeout(settings.request_timeout)
            .build()
            .map_err(|err| ProbeError::Client(err.to_string()))?;
        Ok(Self { settings, client })
    }

    /// Full snapshot URL for `candidate`, credentials included.
    pub fn snapshot_url(&self, candidate: &str) -> Url {
        let mut url = self.settings.base_url.clone();
        {
            let mut query = url.query_pairs_mut();
            query.append_pair("Camera", candidate);
            for (key, value) in SNAPSHOT_QUERY {
                query.append_pair(key, value);
            }
            query
                .append_pair("AuthUser", &self.settings.credentials.user)
                .append_pair("AuthPass", &self.settings.credentials.pass);
        }
        url
    }
}

#[async_trait::async_trait]
impl Prober for ReqwestProber {
    async fn probe(&self, candidate: &str) -> ProbeResult {
        scan_trace!("GET {} Camera={}", self.settings.base_url, candidate);

        let response = match self.client.get(self.snapshot_url(candidate)).send().await {
            Ok(response) => response,
            Err(err) => return ProbeResult::transport(describe_transport_error(err)),
        };

        let status = response.status();
        if status != StatusCode::OK {
            return ProbeResult::classify(status.as_u16(), 0);
        }

        // Only the length is kept; image bytes are dropped as they arrive.
        let mut body_len = 0u64;
        let mut stream = response.bytes_stream();
        while let Some(chunk) = stream.next().await {
            match chunk {
                Ok(chunk) => body_len += chunk.len() as u64,
                Err(err) => return ProbeResult::transport(describe_transport_error(err)),
            }
        }

        ProbeResult::classify(status.as_u16(), body_len)
    }
}

/// Error text with the request URL stripped, since its query string carries
/// the credentials.
fn describe_transport_error(err: reqwest::Error) -> String {
    let kind = if err.is_timeout() {
        "timeout"
    } else if err.is_connect() {
        "connection failed"
    } else if err.is_redirect() {
        "redirect error"
    } else {
        "network error"
    };

    let err = err.without_url();
    let mut message = format!("{kind}: {err}");
    let mut source = err.source();
    while let Some(cause) = source {
        message.push_str(": ");
        message.push_str(&cause.to_string());
        source = cause.source();
    }
    message
}
