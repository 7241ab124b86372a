use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use hexwatch_common::error::ProbeError;
use hexwatch_core::probe::{HostCheck, ProbeEngine, ProbeTimeouts, TcpConnectCheck};
use tokio::io::AsyncWriteExt;
use tokio::net::TcpListener;
use tokio::task::JoinHandle;

/// Treats every host as answering, for machines without a usable `ping`.
pub struct AlwaysReachable;

#[async_trait]
impl HostCheck for AlwaysReachable {
    async fn check(&self, _host: &str) -> Result<(), ProbeError> {
        Ok(())
    }
}

/// Host check that never answers.
pub struct Silent;

#[async_trait]
impl HostCheck for Silent {
    async fn check(&self, _host: &str) -> Result<(), ProbeError> {
        std::future::pending::<()>().await;
        Ok(())
    }
}

pub fn short_timeouts() -> ProbeTimeouts {
    ProbeTimeouts {
        host: Duration::from_millis(300),
        port: Duration::from_millis(300),
    }
}

/// Real TCP connects, host check replaced.
pub fn tcp_engine(host_check: Arc<dyn HostCheck>) -> ProbeEngine {
    ProbeEngine::with_checks(host_check, Arc::new(TcpConnectCheck), short_timeouts())
}

/// Echo server on an ephemeral loopback port.
pub struct EchoServer {
    pub port: u16,
    handle: JoinHandle<()>,
}

impl EchoServer {
    pub async fn start() -> anyhow::Result<Self> {
        let listener = TcpListener::bind("127.0.0.1:0").await?;
        let port = listener.local_addr()?.port();

        let handle = tokio::spawn(async move {
            while let Ok((mut stream, _)) = listener.accept().await {
                tokio::spawn(async move {
                    let (mut reader, mut writer) = stream.split();
                    let _ = tokio::io::copy(&mut reader, &mut writer).await;
                    let _ = writer.shutdown().await;
                });
            }
        });

        Ok(Self { port, handle })
    }
}

impl Drop for EchoServer {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

/// A loopback port nothing listens on.
pub async fn closed_port() -> anyhow::Result<u16> {
    let listener = TcpListener::bind("127.0.0.1:0").await?;
    let port = listener.local_addr()?.port();
    drop(listener);
    Ok(port)
}
