use tracing::{debug, warn};

use crate::ledger::LedgerError;
use crate::model::CourtId;
use crate::observability::{self, COURTS_LIT, LIGHTING_TOGGLES_TOTAL};

/// Per-court lighting switches.
///
/// One slot per court, allocated once at construction. Requests for a court
/// outside `[0, max_courts)` are rejected and never grow the table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Lighting {
    states: Box<[bool]>,
}

impl Lighting {
    pub fn new(max_courts: usize) -> Self {
        Self {
            states: vec![false; max_courts].into_boxed_slice(),
        }
    }

    pub fn max_courts(&self) -> usize {
        self.states.len()
    }

    /// Switch a court's lights on. Idempotent.
    pub fn turn_on(&mut self, court: CourtId) -> Result<(), LedgerError> {
        self.set(court, true)
    }

    /// Switch a court's lights off. Idempotent.
    pub fn turn_off(&mut self, court: CourtId) -> Result<(), LedgerError> {
        self.set(court, false)
    }

    /// `None` when the court has no slot.
    pub fn is_on(&self, court: CourtId) -> Option<bool> {
        self.slot(court).map(|i| self.states[i])
    }

    pub fn lit_courts(&self) -> impl Iterator<Item = CourtId> + '_ {
        self.states
            .iter()
            .enumerate()
            .filter(|(_, on)| **on)
            .map(|(i, _)| i as CourtId)
    }

    pub fn states(&self) -> &[bool] {
        &self.states
    }

    fn slot(&self, court: CourtId) -> Option<usize> {
        usize::try_from(court)
            .ok()
            .filter(|&i| i < self.states.len())
    }

    fn set(&mut self, court: CourtId, on: bool) -> Result<(), LedgerError> {
        let state = if on { "on" } else { "off" };
        let result = match self.slot(court) {
            Some(i) => {
                self.states[i] = on;
                debug!(court, state, "lighting switched");
                Ok(())
            }
            None => {
                warn!(court, max_courts = self.states.len(), "lighting request out of range");
                Err(LedgerError::CourtOutOfRange {
                    court,
                    max_courts: self.states.len(),
                })
            }
        };
        metrics::counter!(
            LIGHTING_TOGGLES_TOTAL,
            "state" => state,
            "status" => observability::status_label(&result)
        )
        .increment(1);
        if result.is_ok() {
            metrics::gauge!(COURTS_LIT).set(self.lit_courts().count() as f64);
        }
        result
    }
}
