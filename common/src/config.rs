use std::path::PathBuf;
use std::time::Duration;

pub const DEFAULT_TARGETS_FILE: &str = "config.txt";
pub const DEFAULT_REFRESH_PERIOD: Duration = Duration::from_secs(7);
pub const DEFAULT_HOST_TIMEOUT: Duration = Duration::from_secs(2);
pub const DEFAULT_PORT_TIMEOUT: Duration = Duration::from_secs(1);
pub const DEFAULT_MAX_CONCURRENT_PROBES: usize = 16;

#[derive(Debug, Clone)]
pub struct Config {
    /// Flat text file holding the monitored targets.
    ///
    /// Created with a default pair of targets when missing.
    pub targets_path: PathBuf,
    /// Wait between the end of one pass and the start of the next.
    pub refresh_period: Duration,
    pub host_timeout: Duration,
    pub port_timeout: Duration,
    /// Upper bound on probes in flight during a single pass.
    pub max_concurrent_probes: usize,
    pub quiet: u8,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            targets_path: PathBuf::from(DEFAULT_TARGETS_FILE),
            refresh_period: DEFAULT_REFRESH_PERIOD,
            host_timeout: DEFAULT_HOST_TIMEOUT,
            port_timeout: DEFAULT_PORT_TIMEOUT,
            max_concurrent_probes: DEFAULT_MAX_CONCURRENT_PROBES,
            quiet: 0,
        }
    }
}

impl Config {
    pub fn concurrency(&self) -> usize {
        self.max_concurrent_probes.max(1)
    }
}
