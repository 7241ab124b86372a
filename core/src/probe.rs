//! The **probe engine**: classifies a single target as unreachable, port
//! closed or healthy.
//!
//! A probe is a strict two-stage decision tree. The host check runs once; if
//! it fails the target is `Unreachable` and the port is never touched. Only a
//! reachable host gets the TCP connect, which decides between `Healthy` and
//! `PortClosed`.
//!
//! **Architectural Note:**
//! The two checks sit behind the [`HostCheck`] and [`PortCheck`] traits. The
//! engine owns the time bounds and applies them around whichever
//! implementation it was built with, so a misbehaving check can delay a
//! probe by at most its timeout.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use hexwatch_common::config::Config;
use hexwatch_common::error::ProbeError;
use hexwatch_common::network::status::Status;
use hexwatch_common::network::target::Target;
use tokio::time::timeout;
use tracing::debug;

mod host;
mod port;

pub use host::PingCheck;
pub use port::TcpConnectCheck;

/// Decides whether a host answers at all.
#[async_trait]
pub trait HostCheck: Send + Sync {
    async fn check(&self, host: &str) -> Result<(), ProbeError>;
}

/// Decides whether a service accepts connections on a reachable host.
#[async_trait]
pub trait PortCheck: Send + Sync {
    async fn check(&self, host: &str, port: u16) -> Result<(), ProbeError>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProbeTimeouts {
    pub host: Duration,
    pub port: Duration,
}

impl Default for ProbeTimeouts {
    fn default() -> Self {
        let cfg = Config::default();
        Self::from(&cfg)
    }
}

impl From<&Config> for ProbeTimeouts {
    fn from(cfg: &Config) -> Self {
        Self {
            host: cfg.host_timeout,
            port: cfg.port_timeout,
        }
    }
}

#[derive(Clone)]
pub struct ProbeEngine {
    host_check: Arc<dyn HostCheck>,
    port_check: Arc<dyn PortCheck>,
    timeouts: ProbeTimeouts,
}

impl ProbeEngine {
    /// Engine backed by the system `ping` and a plain TCP connect.
    pub fn new(timeouts: ProbeTimeouts) -> Self {
        Self::with_checks(Arc::new(PingCheck), Arc::new(TcpConnectCheck), timeouts)
    }

    pub fn with_checks(
        host_check: Arc<dyn HostCheck>,
        port_check: Arc<dyn PortCheck>,
        timeouts: ProbeTimeouts,
    ) -> Self {
        Self {
            host_check,
            port_check,
            timeouts,
        }
    }

    /// Probes `target` once. Network failures are outcomes, never errors.
    pub async fn probe(&self, target: &Target) -> Status {
        if let Err(e) = self.check_host(&target.host).await {
            debug!(target_id = %target.id, host = %target.host, "host check failed: {e}");
            return Status::Unreachable;
        }

        match self.check_port(&target.host, target.port).await {
            Ok(()) => Status::Healthy,
            Err(e) => {
                debug!(target_id = %target.id, endpoint = %target.endpoint(), "port check failed: {e}");
                Status::PortClosed
            }
        }
    }

    async fn check_host(&self, host: &str) -> Result<(), ProbeError> {
        match timeout(self.timeouts.host, self.host_check.check(host)).await {
            Ok(outcome) => outcome,
            Err(_elapsed) => Err(ProbeError::Timeout(self.timeouts.host)),
        }
    }

    async fn check_port(&self, host: &str, port: u16) -> Result<(), ProbeError> {
        match timeout(self.timeouts.port, self.port_check.check(host, port)).await {
            Ok(outcome) => outcome,
            Err(_elapsed) => Err(ProbeError::Timeout(self.timeouts.port)),
        }
    }
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::time::Instant;

    /// Check double whose verdict and latency are fixed up front.
    pub(crate) struct Scripted {
        pub ok: bool,
        pub delay: Option<Duration>,
        pub calls: AtomicUsize,
    }

    impl Scripted {
        pub(crate) fn new(ok: bool) -> Arc<Self> {
            Arc::new(Self { ok, delay: None, calls: AtomicUsize::new(0) })
        }

        pub(crate) fn slow(ok: bool, delay: Duration) -> Arc<Self> {
            Arc::new(Self { ok, delay: Some(delay), calls: AtomicUsize::new(0) })
        }

        pub(crate) fn calls(&self) -> usize {
            self.calls.load(Ordering::SeqCst)
        }

        async fn verdict(&self) -> Result<(), ProbeError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            if let Some(delay) = self.delay {
                tokio::time::sleep(delay).await;
            }
            if self.ok { Ok(()) } else { Err(ProbeError::ConnectionRefused) }
        }
    }

    #[async_trait]
    impl HostCheck for Scripted {
        async fn check(&self, _host: &str) -> Result<(), ProbeError> {
            self.verdict().await
        }
    }

    #[async_trait]
    impl PortCheck for Scripted {
        async fn check(&self, _host: &str, _port: u16) -> Result<(), ProbeError> {
            self.verdict().await
        }
    }

    fn target() -> Target {
        Target::new("1", "Box", "10.0.0.1", 22, "SSH")
    }

    fn engine(host: Arc<Scripted>, port: Arc<Scripted>) -> ProbeEngine {
        ProbeEngine::with_checks(host, port, ProbeTimeouts::default())
    }

    #[tokio::test]
    async fn reachable_host_with_open_port_is_healthy() {
        let engine = engine(Scripted::new(true), Scripted::new(true));
        assert_eq!(engine.probe(&target()).await, Status::Healthy);
    }

    #[tokio::test]
    async fn reachable_host_with_closed_port_is_port_closed() {
        let engine = engine(Scripted::new(true), Scripted::new(false));
        assert_eq!(engine.probe(&target()).await, Status::PortClosed);
    }

    #[tokio::test]
    async fn host_down_dominates_port_outcome() {
        for port_ok in [true, false] {
            let port = Scripted::new(port_ok);
            let engine = engine(Scripted::new(false), port.clone());

            assert_eq!(engine.probe(&target()).await, Status::Unreachable);
            assert_eq!(port.calls(), 0, "port must not be checked for a dead host");
        }
    }

    #[tokio::test]
    async fn host_is_checked_once_per_probe() {
        let host = Scripted::new(true);
        let engine = engine(host.clone(), Scripted::new(true));

        engine.probe(&target()).await;
        engine.probe(&target()).await;

        assert_eq!(host.calls(), 2);
    }

    #[tokio::test]
    async fn hanging_host_check_resolves_to_unreachable() {
        let timeouts = ProbeTimeouts {
            host: Duration::from_millis(100),
            port: Duration::from_millis(100),
        };
        let engine = ProbeEngine::with_checks(
            Scripted::slow(true, Duration::from_secs(30)),
            Scripted::new(true),
            timeouts,
        );

        let start = Instant::now();
        let status = engine.probe(&target()).await;

        assert_eq!(status, Status::Unreachable);
        assert!(start.elapsed() < Duration::from_secs(2), "took {:?}", start.elapsed());
    }

    #[tokio::test]
    async fn hanging_port_check_resolves_to_port_closed() {
        let timeouts = ProbeTimeouts {
            host: Duration::from_millis(100),
            port: Duration::from_millis(100),
        };
        let engine = ProbeEngine::with_checks(
            Scripted::new(true),
            Scripted::slow(true, Duration::from_secs(30)),
            timeouts,
        );

        assert_eq!(engine.probe(&target()).await, Status::PortClosed);
    }
}
