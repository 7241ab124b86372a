//! # Monitored Target Model
//!
//! A target is one endpoint on the board: a host that should answer pings and
//! a TCP port on that host that should accept connections.
//!
//! The set of targets is fixed once loaded. Identifiers and host/port pairs
//! never change during a run.

use std::fmt;

/// Opaque identifier, unique within one target file.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TargetId(String);

impl TargetId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TargetId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for TargetId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Target {
    pub id: TargetId,
    /// Label drawn inside the hexagon.
    pub name: String,
    /// IP address or resolvable hostname.
    pub host: String,
    pub port: u16,
    /// Free-form description of what listens on `port`.
    pub service: String,
}

impl Target {
    pub fn new(
        id: impl Into<TargetId>,
        name: impl Into<String>,
        host: impl Into<String>,
        port: u16,
        service: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            host: host.into(),
            port,
            service: service.into(),
        }
    }

    /// `host:port`, bracketing bare IPv6 literals.
    pub fn endpoint(&self) -> String {
        if self.host.contains(':') {
            format!("[{}]:{}", self.host, self.port)
        } else {
            format!("{}:{}", self.host, self.port)
        }
    }
}

impl fmt::Display for Target {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name, self.endpoint())
    }
}
