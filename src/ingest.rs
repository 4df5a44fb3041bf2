//! Booking ingestion from delimited text files.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use csv::ReaderBuilder;
use tracing::debug;

use crate::booking::Booking;
use crate::error::{Error, Result};
use crate::seat::Seat;

/// Read bookings from a comma-delimited file.
///
/// The first line is a header and is skipped; blank lines are ignored.
/// Each data line is `booking_id, seat1[, seat2, …]`. Any malformed record
/// aborts the whole run; there is no partial output.
pub fn parse_booking_data(path: &Path) -> Result<Vec<Booking>> {
    let file = File::open(path)?;
    let bookings = read_bookings(file)?;
    debug!(
        "parsed {} bookings from {}",
        bookings.len(),
        path.display()
    );
    Ok(bookings)
}

/// Parse bookings from any reader. Split out of [`parse_booking_data`] so
/// tests can feed records without touching the filesystem.
pub fn read_bookings<R: Read>(source: R) -> Result<Vec<Booking>> {
    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(source);

    let mut bookings = Vec::new();
    for result in reader.records() {
        let record = result?;
        let line = record.position().map_or(0, |p| p.line() as usize);

        // Whitespace-only lines trim down to a single empty field.
        if record.iter().all(|field| field.is_empty()) {
            continue;
        }

        if record.len() < 2 {
            return Err(Error::MalformedRecord(format!(
                "line {line}: expected a booking id and at least one seat"
            )));
        }

        let id: u64 = record[0].parse().map_err(|_| {
            Error::MalformedRecord(format!(
                "line {line}: invalid booking id {:?}",
                &record[0]
            ))
        })?;

        let seats = record
            .iter()
            .skip(1)
            .map(Seat::parse)
            .collect::<Result<Vec<_>>>()?;

        bookings.push(Booking::new(id, seats)?);
    }

    Ok(bookings)
}
