use soa_monitor_domain::{LagReport, Serial, ServerAddr};

/// Highest primary serial seen so far for one zone, and who served it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SerialWatermark {
    pub primary: ServerAddr,
    pub serial: Serial,
}

impl SerialWatermark {
    pub fn from_report(report: &LagReport) -> Self {
        Self {
            primary: report.reference_primary.clone(),
            serial: report.max_serial,
        }
    }

    /// Moves the mark forward if `report` saw a higher serial. Never moves back.
    pub fn advance(slot: &mut Option<Self>, report: &LagReport) {
        match slot {
            Some(mark) if report.max_serial <= mark.serial => {}
            _ => *slot = Some(Self::from_report(report)),
        }
    }
}
