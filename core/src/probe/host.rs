use std::process::Stdio;

use async_trait::async_trait;
use hexwatch_common::error::ProbeError;
use tokio::process::Command;
use tracing::warn;

use super::HostCheck;

#[cfg(windows)]
const CREATE_NO_WINDOW: u32 = 0x0800_0000;

/// Single ICMP echo through the platform `ping` binary.
///
/// No raw socket privileges are needed. The child is killed if the probe is
/// dropped before it exits, so a timed out ping never outlives its probe.
pub struct PingCheck;

#[async_trait]
impl HostCheck for PingCheck {
    async fn check(&self, host: &str) -> Result<(), ProbeError> {
        let mut cmd = Command::new("ping");
        cmd.args(ping_args(host))
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .kill_on_drop(true);

        #[cfg(windows)]
        cmd.creation_flags(CREATE_NO_WINDOW);

        let status = cmd.status().await.map_err(|e| {
            warn!("Failed to run ping: {e}");
            ProbeError::HostUnreachable(format!("cannot run ping: {e}"))
        })?;

        if status.success() {
            Ok(())
        } else {
            Err(ProbeError::HostUnreachable(format!("ping {status}")))
        }
    }
}

fn ping_args(host: &str) -> [&str; 3] {
    let count_flag = if cfg!(windows) { "-n" } else { "-c" };
    [count_flag, "1", host]
}
