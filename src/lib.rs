pub mod config;
pub mod ledger;
pub mod lighting;
pub mod limits;
pub mod model;
pub mod observability;

pub use config::LedgerConfig;
pub use ledger::{Ledger, LedgerError};
pub use lighting::Lighting;
pub use model::{Booking, BookingInfo, CourtId, Hours, LedgerSnapshot, Reservation, ReservationId};
