//! # Pass Scheduler
//!
//! Drives the probe engine over the whole target list on a fixed cadence.
//!
//! * The first pass starts immediately.
//! * The next pass starts one refresh period after the previous one
//!   *finished*, so a slow probe stretches the cycle instead of stacking
//!   passes on top of each other.
//! * Every pass yields exactly one result per target, in file order, and is
//!   delivered as a whole.

use std::sync::Arc;
use std::time::{Duration, Instant};

use futures::stream::{self, StreamExt};
use hexwatch_common::config::Config;
use hexwatch_common::network::status::{ProbeResult, Status};
use hexwatch_common::network::target::Target;
use tokio::sync::{mpsc, watch};
use tokio::time::{MissedTickBehavior, interval};
use tracing::{debug, info};

use crate::probe::{ProbeEngine, ProbeTimeouts};

/// Results of one complete pass over every target.
#[derive(Debug, Clone)]
pub struct PassReport {
    /// 1 for the initial pass, incremented by one per pass.
    pub sequence: u64,
    pub started: Instant,
    pub finished: Instant,
    pub results: Vec<ProbeResult>,
}

impl PassReport {
    pub fn elapsed(&self) -> Duration {
        self.finished.saturating_duration_since(self.started)
    }

    pub fn count(&self, status: Status) -> usize {
        self.results.iter().filter(|r| r.status == status).count()
    }
}

/// Receives every completed pass. Delivery is fire-and-forget.
pub trait ResultSink: Send {
    fn apply_results(&mut self, report: PassReport);
}

impl ResultSink for mpsc::UnboundedSender<PassReport> {
    fn apply_results(&mut self, report: PassReport) {
        // Receiver gone means the board closed; shutdown follows.
        let _ = self.send(report);
    }
}

pub struct Scheduler {
    targets: Arc<[Target]>,
    engine: ProbeEngine,
    period: Duration,
    concurrency: usize,
}

impl Scheduler {
    pub fn new(targets: Vec<Target>, engine: ProbeEngine, period: Duration, concurrency: usize) -> Self {
        Self {
            targets: targets.into(),
            engine,
            period,
            concurrency: concurrency.max(1),
        }
    }

    pub fn from_config(targets: Vec<Target>, cfg: &Config) -> Self {
        let engine = ProbeEngine::new(ProbeTimeouts::from(cfg));
        Self::new(targets, engine, cfg.refresh_period, cfg.concurrency())
    }

    pub fn targets(&self) -> &[Target] {
        &self.targets
    }

    /// Probes every target once and assembles the report.
    pub async fn run_pass(&self, sequence: u64) -> PassReport {
        let started = Instant::now();

        // Each probe future owns its target and engine handle so the pass
        // stays `Send` when the driver runs on its own task.
        let results: Vec<ProbeResult> = stream::iter(self.targets.iter().cloned())
            .map(|target| {
                let engine = self.engine.clone();
                async move {
                    let status = engine.probe(&target).await;
                    ProbeResult::new(target.id, status)
                }
            })
            .buffered(self.concurrency)
            .collect()
            .await;

        let report = PassReport {
            sequence,
            started,
            finished: Instant::now(),
            results,
        };

        info!(
            "Pass {} finished in {:.2}s: {} healthy, {} port closed, {} unreachable",
            report.sequence,
            report.elapsed().as_secs_f64(),
            report.count(Status::Healthy),
            report.count(Status::PortClosed),
            report.count(Status::Unreachable),
        );
        report
    }

    /// Runs passes until `shutdown` flips to `true` or its sender is dropped.
    ///
    /// A pass still in flight when shutdown arrives is abandoned and never
    /// delivered.
    pub async fn run<S: ResultSink>(self, mut sink: S, mut shutdown: watch::Receiver<bool>) {
        let mut ticker = interval(self.period);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
        let mut sequence: u64 = 0;

        loop {
            tokio::select! {
                _ = ticker.tick() => {}
                _ = stop_requested(&mut shutdown) => break,
            }

            sequence += 1;
            let report = tokio::select! {
                report = self.run_pass(sequence) => report,
                _ = stop_requested(&mut shutdown) => {
                    debug!("Pass {sequence} abandoned on shutdown");
                    break;
                }
            };

            sink.apply_results(report);
            ticker.reset();
        }

        debug!("Scheduler stopped after {sequence} passes");
    }
}

/// Resolves once `true` is published or the sender is gone.
async fn stop_requested(shutdown: &mut watch::Receiver<bool>) {
    let _ = shutdown.wait_for(|stop| *stop).await;
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
