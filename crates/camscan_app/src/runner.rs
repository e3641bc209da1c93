use anyhow::Context;
use camscan_core::{ProbeResult, Report, ScanConfig};
use camscan_engine::{ProbeSettings, ProgressSink, ReqwestProber, ScanEvent, Scanner};
use scan_logging::{scan_info, scan_warn};

/// Logs one status line per probe plus start/finish markers.
struct LogSink;

impl ProgressSink for LogSink {
    fn emit(&self, event: ScanEvent) {
        match event {
            ScanEvent::Started { planned } => {
                scan_info!("Probing {} candidate(s)", planned);
            }
            ScanEvent::Probed {
                candidate, result, ..
            } => {
                let line = result.status_line(&candidate);
                match result {
                    ProbeResult::TransportError { .. } => scan_warn!("{line}"),
                    _ => scan_info!("{line}"),
                }
            }
            ScanEvent::Finished { found, probed } => {
                scan_info!("Scan finished: {} of {} responsive", found, probed);
            }
        }
    }
}

/// Runs the whole scan on a single-threaded runtime.
pub fn run(config: &ScanConfig) -> anyhow::Result<Report> {
    log_banner(config);

    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .context("building async runtime")?;
    let prober = {
        let _guard = runtime.enter();
        ReqwestProber::new(ProbeSettings::from_config(config))
            .context("preparing snapshot client")?
    };
    let scanner = Scanner::new(prober, config.request_sleep);
    Ok(runtime.block_on(scanner.run(&config.plan, &LogSink)))
}

fn log_banner(config: &ScanConfig) {
    scan_info!("Starting camera scan against {}", config.base_url);
    scan_info!("Candidates: {}", config.plan.strategy);
    if !config.plan.extras.is_empty() {
        scan_info!("Extra cameras: {:?}", config.plan.extras);
    }
    scan_info!(
        "Timeout {:?}, pause {:?} between requests",
        config.request_timeout,
        config.request_sleep
    );
}
