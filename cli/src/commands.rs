pub mod board;
pub mod check;

use std::path::PathBuf;
use std::time::Duration;

use clap::{Parser, Subcommand};
use hexwatch_common::config::{
    Config, DEFAULT_HOST_TIMEOUT, DEFAULT_MAX_CONCURRENT_PROBES, DEFAULT_PORT_TIMEOUT,
    DEFAULT_REFRESH_PERIOD, DEFAULT_TARGETS_FILE,
};

#[derive(Parser)]
#[command(name = "hexwatch")]
#[command(about = "A hexagon status board for hosts and their services.")]
#[command(version)]
pub struct CommandLine {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Target file, five lines per target (id, name, host, port, service)
    #[arg(short, long, global = true, default_value = DEFAULT_TARGETS_FILE)]
    pub config: PathBuf,

    /// Seconds between the end of one pass and the start of the next
    #[arg(short, long, global = true, default_value_t = DEFAULT_REFRESH_PERIOD.as_secs(), value_parser = clap::value_parser!(u64).range(1..))]
    pub interval: u64,

    /// Seconds to wait for a ping reply
    #[arg(long, global = true, default_value_t = DEFAULT_HOST_TIMEOUT.as_secs(), value_parser = clap::value_parser!(u64).range(1..))]
    pub host_timeout: u64,

    /// Seconds to wait for a TCP handshake
    #[arg(long, global = true, default_value_t = DEFAULT_PORT_TIMEOUT.as_secs(), value_parser = clap::value_parser!(u64).range(1..))]
    pub port_timeout: u64,

    /// Probes allowed in flight at once
    #[arg(long, global = true, default_value_t = DEFAULT_MAX_CONCURRENT_PROBES)]
    pub concurrency: usize,

    /// Append board logs to this file instead of discarding them
    #[arg(long, global = true)]
    pub log_file: Option<PathBuf>,

    /// Less output; repeat for even less
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub quiet: u8,
}

#[derive(Subcommand, Clone, Copy, Default, Debug, PartialEq, Eq)]
pub enum Commands {
    /// Show the live hexagon board
    #[default]
    #[command(alias = "b")]
    Board,
    /// Probe every target once and print the result
    #[command(alias = "c")]
    Check,
}

impl CommandLine {
    pub fn parse_args() -> Self {
        Self::parse()
    }

    pub fn selected_command(&self) -> Commands {
        self.command.unwrap_or_default()
    }

    pub fn to_config(&self) -> Config {
        Config {
            targets_path: self.config.clone(),
            refresh_period: Duration::from_secs(self.interval),
            host_timeout: Duration::from_secs(self.host_timeout),
            port_timeout: Duration::from_secs(self.port_timeout),
            max_concurrent_probes: self.concurrency,
            quiet: self.quiet,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_consistent() {
        CommandLine::command().debug_assert();
    }

    #[test]
    fn board_is_the_default_command() {
        let cli = CommandLine::try_parse_from(["hexwatch"]).unwrap();
        assert_eq!(cli.selected_command(), Commands::Board);

        let cfg = cli.to_config();
        assert_eq!(cfg.refresh_period, Duration::from_secs(7));
        assert_eq!(cfg.targets_path, PathBuf::from("config.txt"));
    }

    #[test]
    fn flag_defaults_match_config_defaults() {
        let cfg = CommandLine::try_parse_from(["hexwatch"]).unwrap().to_config();
        let defaults = Config::default();

        assert_eq!(cfg.refresh_period, defaults.refresh_period);
        assert_eq!(cfg.host_timeout, defaults.host_timeout);
        assert_eq!(cfg.port_timeout, defaults.port_timeout);
        assert_eq!(cfg.max_concurrent_probes, defaults.max_concurrent_probes);
    }

    #[test]
    fn flags_reach_the_config() {
        let cli = CommandLine::try_parse_from([
            "hexwatch", "c", "--config", "lab.txt", "-i", "30", "--host-timeout", "3", "-qq",
        ])
        .unwrap();
        assert_eq!(cli.selected_command(), Commands::Check);

        let cfg = cli.to_config();
        assert_eq!(cfg.targets_path, PathBuf::from("lab.txt"));
        assert_eq!(cfg.refresh_period, Duration::from_secs(30));
        assert_eq!(cfg.host_timeout, Duration::from_secs(3));
        assert_eq!(cfg.quiet, 2);
    }

    #[test]
    fn zero_interval_is_rejected() {
        assert!(CommandLine::try_parse_from(["hexwatch", "--interval", "0"]).is_err());
    }
}
