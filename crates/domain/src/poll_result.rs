use std::collections::HashMap;

use crate::serial::Serial;
use crate::server_addr::ServerAddr;

/// Serials collected during one poll cycle of one zone.
///
/// Only servers that answered successfully have an entry.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PollResult {
    serials: HashMap<ServerAddr, Serial>,
}

impl PollResult {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a reading; a later reading for the same server replaces the
    /// earlier one.
    pub fn record(&mut self, server: ServerAddr, serial: Serial) -> Option<Serial> {
        self.serials.insert(server, serial)
    }

    pub fn get(&self, server: &ServerAddr) -> Option<Serial> {
        self.serials.get(server).copied()
    }

    pub fn contains(&self, server: &ServerAddr) -> bool {
        self.serials.contains_key(server)
    }

    pub fn len(&self) -> usize {
        self.serials.len()
    }

    pub fn is_empty(&self) -> bool {
        self.serials.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&ServerAddr, Serial)> {
        self.serials.iter().map(|(server, serial)| (server, *serial))
    }
}

impl FromIterator<(ServerAddr, Serial)> for PollResult {
    fn from_iter<I: IntoIterator<Item = (ServerAddr, Serial)>>(iter: I) -> Self {
        let mut poll = Self::new();
        for (server, serial) in iter {
            poll.record(server, serial);
        }
        poll
    }
}
