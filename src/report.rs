//! Text table rendering of a sequenced boarding order.

use crate::booking::SequencedBooking;

/// Render the detailed boarding table: sequence, booking id, seats and
/// maximum distance, left-aligned in fixed-width columns.
pub fn render_sequence(entries: &[SequencedBooking]) -> String {
    let mut lines = Vec::with_capacity(entries.len() + 2);
    lines.push(format!(
        "{:<6} {:<12} {:<20} {}",
        "Seq", "Booking_ID", "Seats", "Max_Distance"
    ));
    lines.push("-".repeat(60));

    for entry in entries {
        let seats = entry
            .booking
            .seats
            .iter()
            .map(|s| s.label.as_str())
            .collect::<Vec<_>>()
            .join(",");
        lines.push(format!(
            "{:<6} {:<12} {:<20} {}",
            entry.sequence, entry.booking.id, seats, entry.booking.max_distance
        ));
    }

    lines.join("\n")
}

/// Render the simplified boarding table: sequence and booking id only.
pub fn render_simple_sequence(entries: &[SequencedBooking]) -> String {
    let mut lines = Vec::with_capacity(entries.len() + 2);
    lines.push(format!("{:<6} {}", "Seq", "Booking_ID"));
    lines.push("-".repeat(20));

    for entry in entries {
        lines.push(format!("{:<6} {}", entry.sequence, entry.booking.id));
    }

    lines.join("\n")
}
