use crate::serial::Serial;
use crate::server_addr::ServerAddr;

/// Lag of one server against the reference primary for one cycle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LagSample {
    pub server: ServerAddr,
    pub serial: Serial,
    /// `max_serial - serial` in serial units; negative when the server is ahead.
    pub lag: i64,
}

/// Outcome of evaluating one cycle's serials.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LagReport {
    pub reference_primary: ServerAddr,
    pub max_serial: Serial,
    pub samples: Vec<LagSample>,
    pub max_lag: i64,
}

impl LagReport {
    pub fn sample_for(&self, server: &ServerAddr) -> Option<&LagSample> {
        self.samples.iter().find(|s| &s.server == server)
    }
}
