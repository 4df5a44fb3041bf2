//! The boarding sequencer: furthest seats board first.

use tracing::debug;

use crate::booking::{Booking, SequencedBooking};

/// Order bookings for boarding and assign 1-based sequence numbers.
///
/// Primary key is descending maximum distance (back of the vehicle first);
/// ties fall back to ascending booking id. For unique ids this is a strict
/// total order, so the result is reproducible for any input order. An empty
/// input yields an empty output.
pub fn generate_boarding_sequence(mut bookings: Vec<Booking>) -> Vec<SequencedBooking> {
    bookings.sort_by(|a, b| {
        b.max_distance
            .cmp(&a.max_distance)
            .then_with(|| a.id.cmp(&b.id))
    });
    debug!("sequenced {} bookings", bookings.len());

    bookings
        .into_iter()
        .enumerate()
        .map(|(index, booking)| SequencedBooking {
            sequence: index + 1,
            booking,
        })
        .collect()
}
