//! Booking records and their derived maximum seat distance.

use crate::error::{Error, Result};
use crate::seat::Seat;

/// A booking: an identifier plus the seats it covers.
///
/// A party boards together, so its boarding priority is gated by the
/// furthest passenger; `max_distance` is computed once at construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Booking {
    pub id: u64,
    pub seats: Vec<Seat>,
    pub max_distance: u32,
}

impl Booking {
    /// Build a booking from already-parsed seats.
    ///
    /// A booking must cover at least one seat.
    pub fn new(id: u64, seats: Vec<Seat>) -> Result<Self> {
        let max_distance = seats
            .iter()
            .map(Seat::distance)
            .max()
            .ok_or_else(|| Error::MalformedRecord(format!("booking {id} has no seats")))?;
        Ok(Self {
            id,
            seats,
            max_distance,
        })
    }
}

/// A booking annotated with its boarding position (1-based).
///
/// Produced only by the sequencer; the position is never recomputed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SequencedBooking {
    pub sequence: usize,
    pub booking: Booking,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seats(labels: &[&str]) -> Vec<Seat> {
        labels.iter().map(|l| Seat::parse(l).unwrap()).collect()
    }

    #[test]
    fn max_distance_of_a_single_seat() {
        let booking = Booking::new(1, seats(&["A1"])).unwrap();
        assert_eq!(booking.max_distance, 1);
    }

    #[test]
    fn max_distance_is_the_furthest_seat() {
        let booking = Booking::new(1, seats(&["A1", "B1"])).unwrap();
        assert_eq!(booking.max_distance, 1);

        let booking = Booking::new(2, seats(&["A20", "C2"])).unwrap();
        assert_eq!(booking.max_distance, 20);

        let booking = Booking::new(3, seats(&["C2", "A1", "B15"])).unwrap();
        assert_eq!(booking.max_distance, 15);
    }

    #[test]
    fn a_booking_without_seats_is_malformed() {
        assert!(matches!(
            Booking::new(7, Vec::new()),
            Err(Error::MalformedRecord(_))
        ));
    }
}
