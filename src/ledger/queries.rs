use chrono::NaiveDate;

use crate::lighting::Lighting;
use crate::model::*;

use super::conflict::check_no_conflict;
use super::Ledger;

impl Ledger {
    /// Whether `book` would accept this court and date right now.
    pub fn is_available(&self, court: CourtId, date: NaiveDate) -> bool {
        check_no_conflict(&self.bookings, court, date).is_ok()
    }

    /// All bookings, oldest first.
    pub fn bookings(&self) -> &[Booking] {
        &self.bookings
    }

    pub fn bookings_for_court(&self, court: CourtId) -> Vec<BookingInfo> {
        self.bookings
            .iter()
            .filter(|b| b.court() == court)
            .map(BookingInfo::from)
            .collect()
    }

    pub fn get(&self, id: ReservationId) -> Option<&Booking> {
        self.bookings.iter().find(|b| b.id == id)
    }

    pub fn len(&self) -> usize {
        self.bookings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bookings.is_empty()
    }

    pub fn lighting(&self) -> &Lighting {
        &self.lighting
    }

    pub fn snapshot(&self) -> LedgerSnapshot {
        LedgerSnapshot {
            bookings: self.bookings.iter().map(BookingInfo::from).collect(),
            lights: self.lighting.states().to_vec(),
        }
    }
}
