use tracing::{debug, info};

use crate::model::*;
use crate::observability::{self, BOOKINGS_TOTAL, CANCELLATIONS_TOTAL, RESERVATIONS_ACTIVE};

use super::conflict::{check_no_conflict, first_for_court};
use super::{Ledger, LedgerError};

impl Ledger {
    /// Store a reservation unless its court is already booked on that date.
    /// Duration is never compared.
    pub fn book(&mut self, reservation: Reservation) -> Result<ReservationId, LedgerError> {
        let result = check_no_conflict(&self.bookings, reservation.court(), reservation.date())
            .map(|()| {
                let booking = Booking::new(reservation);
                let id = booking.id;
                self.bookings.push(booking);
                id
            });
        metrics::counter!(BOOKINGS_TOTAL, "status" => observability::status_label(&result))
            .increment(1);

        match &result {
            Ok(id) => {
                metrics::gauge!(RESERVATIONS_ACTIVE).set(self.bookings.len() as f64);
                info!(
                    %id,
                    court = reservation.court(),
                    date = %reservation.date(),
                    hours = reservation.duration_hours(),
                    "booking accepted"
                );
            }
            Err(e) => debug!(court = reservation.court(), date = %reservation.date(), "booking rejected: {e}"),
        }
        result
    }

    /// Remove the first booking (in insertion order) made for `court`.
    ///
    /// This matches on court, not on a booking id: with several bookings on the
    /// same court, each call drops the oldest one. Use
    /// [`cancel_reservation`](Self::cancel_reservation) to target a single booking.
    pub fn cancel(&mut self, court: CourtId) -> Result<Reservation, LedgerError> {
        let pos = first_for_court(&self.bookings, court);
        let result = pos
            .map(|pos| self.remove_at(pos))
            .ok_or(LedgerError::NoBookingForCourt(court));
        self.record_cancel(&result);
        result.map(|b| b.reservation)
    }

    /// Remove exactly the booking with this id.
    pub fn cancel_reservation(&mut self, id: ReservationId) -> Result<Reservation, LedgerError> {
        let pos = self.bookings.iter().position(|b| b.id == id);
        let result = pos
            .map(|pos| self.remove_at(pos))
            .ok_or(LedgerError::NotFound(id));
        self.record_cancel(&result);
        result.map(|b| b.reservation)
    }

    pub fn toggle_lights_on(&mut self, court: CourtId) -> Result<(), LedgerError> {
        self.lighting.turn_on(court)
    }

    pub fn toggle_lights_off(&mut self, court: CourtId) -> Result<(), LedgerError> {
        self.lighting.turn_off(court)
    }

    fn record_cancel(&self, result: &Result<Booking, LedgerError>) {
        metrics::counter!(CANCELLATIONS_TOTAL, "status" => observability::status_label(result))
            .increment(1);
        match result {
            Ok(b) => info!(id = %b.id, court = b.court(), date = %b.date(), "booking cancelled"),
            Err(e) => debug!("cancel skipped: {e}"),
        }
    }
}
