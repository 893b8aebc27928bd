use chrono::NaiveDate;

use courtside::{Ledger, LedgerConfig, LedgerError, Reservation};

fn day(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

#[test]
fn book_conflict_then_cancel_drains_court() {
    let mut ledger = Ledger::new();

    assert!(ledger.book(Reservation::new(3, day(2024, 6, 1), 1)).is_ok());
    assert!(matches!(
        ledger.book(Reservation::new(3, day(2024, 6, 1), 2)),
        Err(LedgerError::Conflict { court: 3, .. })
    ));
    assert!(ledger.book(Reservation::new(3, day(2024, 6, 2), 1)).is_ok());

    // First cancel drops the oldest booking on the court
    let first = ledger.cancel(3).unwrap();
    assert_eq!(first.date(), day(2024, 6, 1));
    let second = ledger.cancel(3).unwrap();
    assert_eq!(second.date(), day(2024, 6, 2));
    assert_eq!(ledger.cancel(3), Err(LedgerError::NoBookingForCourt(3)));
    assert!(ledger.is_empty());
}

#[test]
fn lighting_bounds_with_ten_courts() {
    let mut ledger = Ledger::new();

    assert!(ledger.toggle_lights_on(-1).is_err());
    assert!(ledger.toggle_lights_on(10).is_err());
    assert!(ledger.toggle_lights_on(9).is_ok());
    assert!(ledger.toggle_lights_off(9).is_ok());
    assert_eq!(ledger.lighting().lit_courts().count(), 0);
}

#[test]
fn configured_court_count_moves_the_bound() {
    let mut ledger = Ledger::with_config(LedgerConfig::with_max_courts(12)).unwrap();
    assert!(ledger.toggle_lights_on(10).is_ok());
    assert!(ledger.toggle_lights_on(11).is_ok());
    assert!(ledger.toggle_lights_on(12).is_err());
    assert_eq!(ledger.lighting().lit_courts().collect::<Vec<_>>(), vec![10, 11]);
}

#[test]
fn cancel_by_id_leaves_older_bookings() {
    let mut ledger = Ledger::new();
    let older = ledger.book(Reservation::new(1, day(2024, 7, 1), 1)).unwrap();
    let newer = ledger.book(Reservation::new(1, day(2024, 7, 2), 1)).unwrap();

    ledger.cancel_reservation(newer).unwrap();
    assert!(ledger.get(older).is_some());
    assert_eq!(ledger.bookings_for_court(1).len(), 1);
}
