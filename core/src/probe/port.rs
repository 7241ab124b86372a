use async_trait::async_trait;
use hexwatch_common::error::ProbeError;
use tokio::net::TcpStream;

use super::PortCheck;

/// Plain TCP handshake. The stream is dropped as soon as it connects.
pub struct TcpConnectCheck;

#[async_trait]
impl PortCheck for TcpConnectCheck {
    async fn check(&self, host: &str, port: u16) -> Result<(), ProbeError> {
        match TcpStream::connect((host, port)).await {
            Ok(_stream) => Ok(()),
            Err(e) => Err(ProbeError::from_io(&e)),
        }
    }
}
