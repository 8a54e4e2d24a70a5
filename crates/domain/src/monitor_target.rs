use std::sync::Arc;

use crate::server_addr::ServerAddr;
use crate::zone::Zone;

/// A zone together with the servers it is checked against.
#[derive(Debug, Clone)]
pub struct MonitorTarget {
    pub zone: Zone,
    pub primaries: Arc<[ServerAddr]>,
    pub secondaries: Arc<[ServerAddr]>,
}

impl MonitorTarget {
    pub fn new(zone: Zone, primaries: Arc<[ServerAddr]>, secondaries: Arc<[ServerAddr]>) -> Self {
        Self {
            zone,
            primaries,
            secondaries,
        }
    }

    /// Primaries followed by secondaries, duplicates preserved.
    pub fn targets(&self) -> Vec<ServerAddr> {
        self.primaries
            .iter()
            .chain(self.secondaries.iter())
            .cloned()
            .collect()
    }
}
