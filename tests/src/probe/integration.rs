use std::sync::Arc;
use std::time::{Duration, Instant};

use hexwatch_common::network::status::Status;
use hexwatch_common::network::target::Target;
use hexwatch_core::probe::{ProbeEngine, ProbeTimeouts};

use crate::utils::{AlwaysReachable, EchoServer, Silent, closed_port, tcp_engine};

/// A reachable localhost with a listening echo server is healthy.
#[tokio::test]
async fn listening_localhost_is_healthy() {
    let server = EchoServer::start().await.unwrap();
    let target = Target::new("1", "Echo", "127.0.0.1", server.port, "echo");

    let status = tcp_engine(Arc::new(AlwaysReachable)).probe(&target).await;

    assert_eq!(status, Status::Healthy);
}

#[tokio::test]
async fn closed_localhost_port_is_port_closed() {
    let port = closed_port().await.unwrap();
    let target = Target::new("1", "Nothing", "127.0.0.1", port, "none");

    let status = tcp_engine(Arc::new(AlwaysReachable)).probe(&target).await;

    assert_eq!(status, Status::PortClosed);
}

#[tokio::test]
async fn silent_host_is_unreachable_even_with_open_port() {
    let server = EchoServer::start().await.unwrap();
    let target = Target::new("1", "Echo", "127.0.0.1", server.port, "echo");

    let start = Instant::now();
    let status = tcp_engine(Arc::new(Silent)).probe(&target).await;

    assert_eq!(status, Status::Unreachable);
    assert!(start.elapsed() < Duration::from_secs(2), "took {:?}", start.elapsed());
}

#[tokio::test]
async fn unresolvable_hostname_is_port_closed_when_host_check_passes() {
    let target = Target::new("1", "Ghost", "no-such-host.invalid", 80, "HTTP");

    let status = tcp_engine(Arc::new(AlwaysReachable)).probe(&target).await;

    assert_eq!(status, Status::PortClosed);
}

/// Needs a `ping` binary allowed to reach loopback.
#[tokio::test]
#[ignore]
async fn system_ping_on_loopback_closed_port() {
    let port = closed_port().await.unwrap();
    let target = Target::new("1", "Nothing", "127.0.0.1", port, "none");

    let status = ProbeEngine::new(ProbeTimeouts::default()).probe(&target).await;

    assert_eq!(status, Status::PortClosed);
}

/// Needs a `ping` binary; 198.51.100.0/24 is reserved for documentation.
#[tokio::test]
#[ignore]
async fn system_ping_on_unroutable_address() {
    let target = Target::new("1", "Nowhere", "198.51.100.1", 80, "HTTP");
    let timeouts = ProbeTimeouts::default();

    let start = Instant::now();
    let status = ProbeEngine::new(timeouts).probe(&target).await;

    assert_eq!(status, Status::Unreachable);
    assert!(start.elapsed() < timeouts.host + Duration::from_millis(500));
}
