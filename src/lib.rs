//! # Boardseq
//!
//! Generates boarding sequences for bookings so that passengers with the
//! furthest seats board first (back-to-front strategy), maximizing parallel
//! boarding time.
//!
//! ## Usage
//!
//! ```bash
//! boardseq bookings.csv [output.txt] [--simple]
//! ```
//!
//! ## Modules
//!
//! - `seat` - Seat label parsing and the seat distance policy
//! - `booking` - Booking records with their derived maximum distance
//! - `sequence` - The boarding sequencer (sort + sequence numbering)
//! - `ingest` - Booking ingestion from delimited text files
//! - `report` - Text table rendering of a sequenced boarding order
//! - `error` - Error types

pub mod booking;
pub mod error;
pub mod ingest;
pub mod report;
pub mod seat;
pub mod sequence;

pub use error::{Error, Result};
