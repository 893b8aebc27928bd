use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use ulid::Ulid;

/// Court number. Signed so that negative ids can be passed in and rejected
/// by the lighting bounds check instead of failing to convert.
pub type CourtId = i32;

/// Booking length in whole hours. Stored, never validated.
pub type Hours = i32;

/// Identifier minted by the ledger for each accepted booking.
pub type ReservationId = Ulid;

/// One booking request: a court on a calendar date for some hours.
///
/// Immutable once built. No validation happens here; negative courts and
/// durations are carried as given.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Reservation {
    court: CourtId,
    date: NaiveDate,
    duration_hours: Hours,
}

impl Reservation {
    pub fn new(court: CourtId, date: NaiveDate, duration_hours: Hours) -> Self {
        Self {
            court,
            date,
            duration_hours,
        }
    }

    pub fn court(&self) -> CourtId {
        self.court
    }

    pub fn date(&self) -> NaiveDate {
        self.date
    }

    pub fn duration_hours(&self) -> Hours {
        self.duration_hours
    }

    /// True when both reservations claim the same court on the same date.
    /// Duration plays no part.
    pub fn collides_with(&self, court: CourtId, date: NaiveDate) -> bool {
        self.court == court && self.date == date
    }
}

/// A reservation as held by the ledger, tagged with its id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Booking {
    pub id: ReservationId,
    pub reservation: Reservation,
}

impl Booking {
    pub fn new(reservation: Reservation) -> Self {
        Self {
            id: Ulid::new(),
            reservation,
        }
    }

    pub fn court(&self) -> CourtId {
        self.reservation.court
    }

    pub fn date(&self) -> NaiveDate {
        self.reservation.date
    }
}

// ── Query result types ───────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookingInfo {
    pub id: ReservationId,
    pub court: CourtId,
    pub date: NaiveDate,
    pub duration_hours: Hours,
}

impl From<&Booking> for BookingInfo {
    fn from(b: &Booking) -> Self {
        Self {
            id: b.id,
            court: b.reservation.court,
            date: b.reservation.date,
            duration_hours: b.reservation.duration_hours,
        }
    }
}

/// Point-in-time view of a ledger: bookings in insertion order plus the
/// lighting state of every court slot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LedgerSnapshot {
    pub bookings: Vec<BookingInfo>,
    pub lights: Vec<bool>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn reservation_accessors() {
        let r = Reservation::new(3, day(2024, 6, 1), 2);
        assert_eq!(r.court(), 3);
        assert_eq!(r.date(), day(2024, 6, 1));
        assert_eq!(r.duration_hours(), 2);
    }

    #[test]
    fn reservation_accepts_negative_values() {
        // Nothing is validated at construction
        let r = Reservation::new(-4, day(2024, 6, 1), -1);
        assert_eq!(r.court(), -4);
        assert_eq!(r.duration_hours(), -1);
    }

    #[test]
    fn collision_ignores_duration() {
        let r = Reservation::new(3, day(2024, 6, 1), 1);
        assert!(r.collides_with(3, day(2024, 6, 1)));
        assert!(!r.collides_with(3, day(2024, 6, 2)));
        assert!(!r.collides_with(4, day(2024, 6, 1)));
    }

    #[test]
    fn bookings_get_distinct_ids() {
        let r = Reservation::new(1, day(2024, 6, 1), 1);
        let a = Booking::new(r);
        let b = Booking::new(r);
        assert_ne!(a.id, b.id);
        assert_eq!(a.reservation, b.reservation);
    }

    #[test]
    fn booking_info_flattens_reservation() {
        let b = Booking::new(Reservation::new(7, day(2024, 12, 31), 3));
        let info = BookingInfo::from(&b);
        assert_eq!(info.id, b.id);
        assert_eq!(info.court, 7);
        assert_eq!(info.date, day(2024, 12, 31));
        assert_eq!(info.duration_hours, 3);
    }

    #[test]
    fn reservation_serializes_date_as_iso() {
        let r = Reservation::new(2, day(2024, 6, 1), 1);
        let json = serde_json::to_string(&r).unwrap();
        assert_eq!(json, r#"{"court":2,"date":"2024-06-01","duration_hours":1}"#);
        let decoded: Reservation = serde_json::from_str(&json).unwrap();
        assert_eq!(decoded, r);
    }
}
