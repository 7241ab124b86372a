use std::fmt;

use chrono::{DateTime, Local};

use crate::network::target::TargetId;

/// Health of a target after one probe.
///
/// Host reachability dominates: a target whose host does not answer is
/// `Unreachable` whatever the state of its port.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Status {
    Unreachable,
    PortClosed,
    Healthy,
}

impl Status {
    pub const ALL: [Status; 3] = [Status::Unreachable, Status::PortClosed, Status::Healthy];

    pub fn label(&self) -> &'static str {
        match self {
            Status::Unreachable => "UNREACHABLE",
            Status::PortClosed => "PORT CLOSED",
            Status::Healthy => "HEALTHY",
        }
    }

    pub fn is_healthy(&self) -> bool {
        matches!(self, Status::Healthy)
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Outcome of probing one target during one pass. Not kept beyond the pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProbeResult {
    pub target_id: TargetId,
    pub status: Status,
    pub timestamp: DateTime<Local>,
}

impl ProbeResult {
    pub fn new(target_id: TargetId, status: Status) -> Self {
        Self {
            target_id,
            status,
            timestamp: Local::now(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_healthy_is_healthy() {
        let healthy: Vec<Status> = Status::ALL.into_iter().filter(Status::is_healthy).collect();
        assert_eq!(healthy, vec![Status::Healthy]);
    }

    #[test]
    fn result_is_stamped_at_creation() {
        let before = Local::now();
        let result = ProbeResult::new(TargetId::from("1"), Status::PortClosed);
        assert!(result.timestamp >= before);
        assert_eq!(result.status.to_string(), "PORT CLOSED");
    }
}
