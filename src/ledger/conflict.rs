use chrono::NaiveDate;

use crate::model::*;

use super::LedgerError;

/// Linear scan for a booking on the same court and date.
pub(crate) fn check_no_conflict(
    bookings: &[Booking],
    court: CourtId,
    date: NaiveDate,
) -> Result<(), LedgerError> {
    match bookings.iter().find(|b| b.reservation.collides_with(court, date)) {
        Some(existing) => Err(LedgerError::Conflict {
            court,
            date,
            existing: existing.id,
        }),
        None => Ok(()),
    }
}

/// Position of the earliest-inserted booking on `court`.
pub(crate) fn first_for_court(bookings: &[Booking], court: CourtId) -> Option<usize> {
    bookings.iter().position(|b| b.court() == court)
}
