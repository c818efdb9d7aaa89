//! Circulation desk for a single library.
//!
//! This crate tracks which book instances are on the shelf, which are out on
//! loan, and which circulating books patrons are waiting for. Loans are closed
//! in strict last-in-first-out order and waiting requests are fulfilled in
//! arrival order.

pub mod book;
pub mod catalog;
pub mod config;
pub mod error;
pub mod events;
pub mod ledger;
pub mod library;
pub mod observers;
pub mod patron;
pub mod render;
pub mod roster;
pub mod telemetry;

pub use book::{Book, Isbn, ShelfState};
pub use catalog::Catalog;
pub use config::SeedConfig;
pub use error::{CirculationError, CirculationResult, ConfigError};
pub use events::CirculationEvent;
pub use ledger::{BorrowRecord, CirculationLedger, RequestRecord};
pub use library::Library;
pub use patron::{Patron, PatronId};
pub use render::DeskView;
pub use roster::Roster;
