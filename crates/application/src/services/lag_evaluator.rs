use soa_monitor_domain::{DomainError, LagReport, LagSample, PollResult, Serial, ServerAddr, Zone};
use std::collections::HashSet;

use super::serial_watermark::SerialWatermark;

/// Turns one cycle's serials into lag samples.
///
/// The reference is the primary with the strictly highest serial, scanning
/// primaries in configured order; on a tie the earlier primary keeps the
/// reference. Every primary and secondary that answered is then measured
/// against that serial, primaries included.
pub struct LagEvaluator;

impl LagEvaluator {
    pub fn evaluate(
        zone: &Zone,
        poll: &PollResult,
        primaries: &[ServerAddr],
        secondaries: &[ServerAddr],
    ) -> Result<LagReport, DomainError> {
        Self::evaluate_with_floor(zone, poll, primaries, secondaries, None)
    }

    /// Like [`evaluate`](Self::evaluate), but the running maximum starts from
    /// a serial remembered from earlier cycles.
    ///
    /// At least one primary still has to answer in this cycle.
    pub fn evaluate_with_floor(
        zone: &Zone,
        poll: &PollResult,
        primaries: &[ServerAddr],
        secondaries: &[ServerAddr],
        floor: Option<&SerialWatermark>,
    ) -> Result<LagReport, DomainError> {
        let mut reference: Option<(&ServerAddr, Serial)> =
            floor.map(|mark| (&mark.primary, mark.serial));
        let mut primary_answered = false;

        for primary in primaries {
            let Some(serial) = poll.get(primary) else {
                continue;
            };
            primary_answered = true;

            match reference {
                Some((_, max)) if serial <= max => {}
                _ => reference = Some((primary, serial)),
            }
        }

        let (reference_primary, max_serial) = match reference {
            Some(found) if primary_answered => found,
            _ => {
                return Err(DomainError::NoPrimaryResponded {
                    domain: zone.to_string(),
                })
            }
        };

        let mut seen = HashSet::new();
        let samples: Vec<LagSample> = primaries
            .iter()
            .chain(secondaries)
            .filter(|server| seen.insert(*server))
            .filter_map(|server| {
                poll.get(server).map(|serial| LagSample {
                    server: server.clone(),
                    serial,
                    lag: serial.lag_behind(max_serial),
                })
            })
            .collect();

        let max_lag = samples.iter().map(|s| s.lag).max().unwrap_or(0);

        Ok(LagReport {
            reference_primary: reference_primary.clone(),
            max_serial,
            samples,
            max_lag,
        })
    }
}
