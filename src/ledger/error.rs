use chrono::NaiveDate;

use crate::model::{CourtId, ReservationId};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LedgerError {
    /// The court is already booked on that exact date.
    Conflict {
        court: CourtId,
        date: NaiveDate,
        existing: ReservationId,
    },
    NotFound(ReservationId),
    NoBookingForCourt(CourtId),
    CourtOutOfRange {
        court: CourtId,
        max_courts: usize,
    },
    InvalidConfig(&'static str),
}

impl std::fmt::Display for LedgerError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LedgerError::Conflict {
                court,
                date,
                existing,
            } => write!(
                f,
                "court {court} already booked on {date} by reservation {existing}"
            ),
            LedgerError::NotFound(id) => write!(f, "reservation not found: {id}"),
            LedgerError::NoBookingForCourt(court) => {
                write!(f, "no booking for court {court}")
            }
            LedgerError::CourtOutOfRange { court, max_courts } => {
                write!(f, "court {court} out of range [0, {max_courts})")
            }
            LedgerError::InvalidConfig(msg) => write!(f, "invalid config: {msg}"),
        }
    }
}

impl std::error::Error for LedgerError {}
