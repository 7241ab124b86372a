use std::collections::HashSet;
use std::sync::Arc;
use std::time::Duration;

use hexwatch_common::network::status::Status;
use hexwatch_common::network::target::Target;
use hexwatch_core::scheduler::{PassReport, Scheduler};
use tokio::sync::{mpsc, watch};

use crate::utils::{AlwaysReachable, EchoServer, closed_port, tcp_engine};

async fn mixed_targets(server: &EchoServer) -> Vec<Target> {
    let closed = closed_port().await.unwrap();
    vec![
        Target::new("echo", "Echo", "127.0.0.1", server.port, "echo"),
        Target::new("closed", "Closed", "127.0.0.1", closed, "none"),
        Target::new("echo-2", "Echo again", "localhost", server.port, "echo"),
    ]
}

#[tokio::test]
async fn every_pass_reports_each_target_once() {
    let server = EchoServer::start().await.unwrap();
    let targets = mixed_targets(&server).await;
    let scheduler = Scheduler::new(
        targets,
        tcp_engine(Arc::new(AlwaysReachable)),
        Duration::from_millis(20),
        2,
    );
    let (stop_tx, stop_rx) = watch::channel(false);
    let (tx, mut rx) = mpsc::unbounded_channel::<PassReport>();

    let handle = tokio::spawn(scheduler.run(tx, stop_rx));

    let mut reports = Vec::new();
    for _ in 0..3 {
        let report = tokio::time::timeout(Duration::from_secs(5), rx.recv())
            .await
            .expect("pass took too long")
            .expect("scheduler stopped early");
        reports.push(report);
    }
    stop_tx.send(true).unwrap();
    handle.await.unwrap();

    for (n, report) in reports.iter().enumerate() {
        assert_eq!(report.sequence, n as u64 + 1);
        let ids: HashSet<&str> = report.results.iter().map(|r| r.target_id.as_str()).collect();
        assert_eq!(report.results.len(), 3);
        assert_eq!(ids, HashSet::from(["echo", "closed", "echo-2"]));
        assert_eq!(report.results[0].status, Status::Healthy);
        assert_eq!(report.results[1].status, Status::PortClosed);
    }
    for pair in reports.windows(2) {
        assert!(pair[1].started >= pair[0].finished, "passes overlapped");
    }
}
