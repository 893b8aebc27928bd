use serde::{Deserialize, Serialize};

use crate::ledger::LedgerError;
use crate::limits::*;

/// Construction-time settings for a [`Ledger`](crate::ledger::Ledger).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LedgerConfig {
    /// Number of lighting slots; valid court ids are `0..max_courts`.
    pub max_courts: usize,
}

impl Default for LedgerConfig {
    fn default() -> Self {
        Self {
            max_courts: DEFAULT_MAX_COURTS,
        }
    }
}

impl LedgerConfig {
    pub fn with_max_courts(max_courts: usize) -> Self {
        Self { max_courts }
    }

    pub fn validate(&self) -> Result<(), LedgerError> {
        if self.max_courts == 0 {
            return Err(LedgerError::InvalidConfig("max_courts must be at least 1"));
        }
        if self.max_courts > MAX_COURTS_LIMIT {
            return Err(LedgerError::InvalidConfig("max_courts above limit"));
        }
        Ok(())
    }
}
