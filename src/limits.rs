/// Number of court slots a ledger is built with unless configured otherwise.
pub const DEFAULT_MAX_COURTS: usize = 10;

/// Upper bound accepted by `LedgerConfig::validate`. Keeps every slot index
/// representable as a `CourtId`.
pub const MAX_COURTS_LIMIT: usize = 4096;
