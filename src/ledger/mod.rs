mod conflict;
mod error;
mod mutations;
mod queries;

pub use error::LedgerError;

use crate::config::LedgerConfig;
use crate::lighting::Lighting;
use crate::model::*;

/// Court bookings plus the lighting panel for the same courts.
///
/// Bookings are kept in insertion order. No two bookings share both court
/// and date. All state is owned here; callers hold the `Ledger` and pass it
/// around explicitly.
#[derive(Debug, Clone)]
pub struct Ledger {
    bookings: Vec<Booking>,
    lighting: Lighting,
}

impl Default for Ledger {
    fn default() -> Self {
        Self::new()
    }
}

impl Ledger {
    /// Ledger with the default court count.
    pub fn new() -> Self {
        Self::from_parts(LedgerConfig::default())
    }

    pub fn with_config(config: LedgerConfig) -> Result<Self, LedgerError> {
        config.validate()?;
        Ok(Self::from_parts(config))
    }

    fn from_parts(config: LedgerConfig) -> Self {
        Self {
            bookings: Vec::new(),
            lighting: Lighting::new(config.max_courts),
        }
    }

    /// Remove and return the booking at `pos`, keeping the order of the rest.
    fn remove_at(&mut self, pos: usize) -> Booking {
        let booking = self.bookings.remove(pos);
        metrics::gauge!(crate::observability::RESERVATIONS_ACTIVE).set(self.bookings.len() as f64);
        booking
    }
}
