use crate::ledger::LedgerError;

// ── Ledger mutations ────────────────────────────────────────────

/// Counter: booking attempts. Labels: status.
pub const BOOKINGS_TOTAL: &str = "courtside_bookings_total";

/// Counter: cancellation attempts. Labels: status.
pub const CANCELLATIONS_TOTAL: &str = "courtside_cancellations_total";

/// Gauge: bookings currently held by the ledger.
pub const RESERVATIONS_ACTIVE: &str = "courtside_reservations_active";

// ── Lighting ────────────────────────────────────────────────────

/// Counter: lighting requests. Labels: state, status.
pub const LIGHTING_TOGGLES_TOTAL: &str = "courtside_lighting_toggles_total";

/// Gauge: courts with lights on.
pub const COURTS_LIT: &str = "courtside_courts_lit";

pub const STATUS_OK: &str = "ok";

/// Map an error to a short status label for metrics.
pub fn error_label(err: &LedgerError) -> &'static str {
    match err {
        LedgerError::Conflict { .. } => "conflict",
        LedgerError::NotFound(_) | LedgerError::NoBookingForCourt(_) => "not_found",
        LedgerError::CourtOutOfRange { .. } => "out_of_range",
        LedgerError::InvalidConfig(_) => "invalid_config",
    }
}

/// Status label for a finished operation.
pub fn status_label<T>(result: &Result<T, LedgerError>) -> &'static str {
    match result {
        Ok(_) => STATUS_OK,
        Err(e) => error_label(e),
    }
}
