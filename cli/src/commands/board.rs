use anyhow::Context;
use hexwatch_common::config::Config;
use hexwatch_core::loader;
use hexwatch_core::scheduler::{PassReport, Scheduler};
use tokio::sync::{mpsc, watch};
use tracing::info;

use crate::board;

/// Runs the scheduler on the runtime and the board on a blocking thread until
/// the board is closed.
pub async fn board(cfg: &Config) -> anyhow::Result<()> {
    let targets = loader::load_targets(&cfg.targets_path)?;

    let scheduler = Scheduler::from_config(targets.clone(), cfg);
    let (report_tx, report_rx) = mpsc::unbounded_channel::<PassReport>();
    let (stop_tx, stop_rx) = watch::channel(false);

    info!(
        "Refreshing {} targets every {}s",
        targets.len(),
        cfg.refresh_period.as_secs()
    );
    let scheduler_handle = tokio::spawn(scheduler.run(report_tx, stop_rx));

    let outcome = tokio::task::spawn_blocking(move || board::run(targets, report_rx, stop_tx))
        .await
        .context("board thread panicked")?;

    scheduler_handle.await.context("scheduler task panicked")?;
    info!("Board closed");
    outcome
}
