mod runner;

use std::process::ExitCode;

use camscan_core::ScanConfig;
use log::LevelFilter;
use scan_logging::{scan_error, LogDestination};

fn main() -> ExitCode {
    let log_file = std::env::var("SCAN_LOG_FILE").ok();
    scan_logging::initialize(
        LogDestination::from_log_file(log_file.as_deref()),
        LevelFilter::Info,
    );

    let config = match ScanConfig::from_env() {
        Ok(config) => config,
        Err(err) => {
            scan_error!("{err}");
            return ExitCode::from(1);
        }
    };

    match runner::run(&config) {
        Ok(report) => {
            println!();
            println!("{}", report.render_summary());
            ExitCode::SUCCESS
        }
        Err(err) => {
            scan_error!("{err:#}");
            ExitCode::from(1)
        }
    }
}
